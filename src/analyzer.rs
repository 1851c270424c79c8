//
// Part of decafc
// Copyright (c) 2024 Sander in 't Veld
// License: MIT
//

//! During the analysis stage, every expression node is decorated with its
//! inferred value type and every violation of the language rules is turned
//! into a diagnostic. The analyzer recovers from everything it detects: it
//! reports and keeps walking, so a single run surfaces all errors in
//! traversal order.
//!
//! The tree must already carry parent links, depths and symbol tables.

use crate::ast::{Ast, DecafType, NodeId, NodeKind};
use crate::error::{Error, Errors};
use crate::symbol::{lookup_symbol, ScopeId, Symbol, SymbolKind};
use crate::visitor::{traverse, Visitor};

/// Check the decorated tree and return the diagnostics, in traversal order.
/// The returned list is empty if and only if the program is valid.
pub fn analyze(ast: &mut Ast) -> Errors
{
	let mut analyzer = Analyzer {
		errors: Vec::new(),
		return_type: None,
		in_function: false,
		loop_depth: 0,
		block_depth: 0,
	};
	traverse(&mut analyzer, ast);
	Errors {
		errors: analyzer.errors,
	}
}

struct Analyzer
{
	errors: Vec<Error>,
	/// The declared return type of the function being traversed.
	return_type: Option<DecafType>,
	in_function: bool,
	/// Loops and blocks nest, so these are counters rather than flags.
	loop_depth: usize,
	block_depth: usize,
}

impl Analyzer
{
	fn report(&mut self, error: Error)
	{
		self.errors.push(error);
	}

	/// Resolve a name, reporting a diagnostic if it is undefined. Checks
	/// that need the symbol a second time resolve silently instead, so that
	/// an undefined name is reported exactly once per use.
	fn resolve_with_reporting(
		&mut self,
		ast: &Ast,
		node: NodeId,
		name: &str,
	) -> Option<Symbol>
	{
		let symbol = lookup_symbol(ast, node, name);
		if symbol.is_none()
		{
			self.report(Error::UndefinedSymbol {
				name: name.to_string(),
				location: ast[node].location.clone(),
			});
		}
		symbol.cloned()
	}

	/// Report each name that is declared more than once in this scope's
	/// local symbol list, once per name.
	fn check_duplicates(&mut self, ast: &Ast, scope: ScopeId, node: NodeId)
	{
		let symbols = &ast.scopes[scope].symbols;
		let mut reported: Vec<&str> = Vec::new();
		for (i, symbol) in symbols.iter().enumerate()
		{
			if symbols[..i].iter().any(|x| x.name == symbol.name)
				&& !reported.contains(&symbol.name.as_str())
			{
				reported.push(&symbol.name);
				self.errors.push(Error::DuplicateDeclaration {
					name: symbol.name.clone(),
					location: ast[node].location.clone(),
				});
			}
		}
	}

	fn type_of(&self, ast: &Ast, node: NodeId) -> Option<DecafType>
	{
		ast[node].attrs.inferred_type
	}
}

impl Visitor for Analyzer
{
	fn previsit_program(&mut self, ast: &mut Ast, node: NodeId)
	{
		let location = ast[node].location.clone();
		match lookup_symbol(ast, node, "main")
		{
			None =>
			{
				self.report(Error::MissingMain { location });
			}
			Some(symbol) if symbol.kind != SymbolKind::Function =>
			{
				self.report(Error::MainIsNotAFunction { location });
			}
			Some(symbol) if !symbol.parameters.is_empty() =>
			{
				self.report(Error::MainHasParameters { location });
			}
			Some(_) => (),
		}

		if let Some(scope) = ast[node].attrs.scope
		{
			self.check_duplicates(ast, scope, node);
		}
	}

	fn postvisit_program(&mut self, ast: &mut Ast, node: NodeId)
	{
		match lookup_symbol(ast, node, "main")
		{
			Some(symbol)
				if symbol.kind == SymbolKind::Function
					&& symbol.value_type != DecafType::Int =>
			{
				self.report(Error::MainReturnType {
					return_type: symbol.value_type,
					location: ast[node].location.clone(),
				});
			}
			_ => (),
		}
	}

	fn previsit_funcdecl(&mut self, ast: &mut Ast, node: NodeId)
	{
		let return_type = match &ast[node].kind
		{
			NodeKind::FuncDecl { return_type, .. } => *return_type,
			_ => unreachable!(),
		};
		self.return_type = Some(return_type);
		self.in_function = true;
	}

	fn postvisit_funcdecl(&mut self, ast: &mut Ast, node: NodeId)
	{
		self.return_type = None;
		self.in_function = false;
		if let Some(scope) = ast[node].attrs.scope
		{
			self.check_duplicates(ast, scope, node);
		}
	}

	fn previsit_block(&mut self, _ast: &mut Ast, _node: NodeId)
	{
		self.block_depth += 1;
	}

	fn postvisit_block(&mut self, ast: &mut Ast, node: NodeId)
	{
		self.block_depth -= 1;
		if let Some(scope) = ast[node].attrs.scope
		{
			self.check_duplicates(ast, scope, node);
		}
	}

	fn previsit_vardecl(&mut self, ast: &mut Ast, node: NodeId)
	{
		let value_type = match &ast[node].kind
		{
			NodeKind::VarDecl { value_type, .. } => *value_type,
			_ => unreachable!(),
		};
		ast[node].attrs.inferred_type = Some(value_type);
	}

	fn postvisit_vardecl(&mut self, ast: &mut Ast, node: NodeId)
	{
		let (name, value_type, is_array, array_length) = match &ast[node].kind
		{
			NodeKind::VarDecl {
				name,
				value_type,
				is_array,
				array_length,
			} => (name.clone(), *value_type, *is_array, *array_length),
			_ => unreachable!(),
		};
		let location = ast[node].location.clone();

		if value_type == DecafType::Void
		{
			self.report(Error::VoidVariable {
				name: name.clone(),
				location: location.clone(),
			});
		}
		if is_array
		{
			if array_length < 1
			{
				self.report(Error::InvalidArrayLength {
					name: name.clone(),
					length: array_length,
					location: location.clone(),
				});
			}
			if self.in_function || self.block_depth > 0
			{
				self.report(Error::NonGlobalArray { name, location });
			}
		}
	}

	fn postvisit_assignment(&mut self, ast: &mut Ast, node: NodeId)
	{
		let (location_node, value_node) = match &ast[node].kind
		{
			NodeKind::Assignment { location, value } => (*location, *value),
			_ => unreachable!(),
		};
		match (
			self.type_of(ast, location_node),
			self.type_of(ast, value_node),
		)
		{
			(Some(lhs), Some(rhs)) if lhs != rhs =>
			{
				self.report(Error::AssignmentTypeMismatch {
					lhs,
					rhs,
					location: ast[node].location.clone(),
				});
			}
			_ => (),
		}
	}

	fn postvisit_conditional(&mut self, ast: &mut Ast, node: NodeId)
	{
		let condition = match &ast[node].kind
		{
			NodeKind::Conditional { condition, .. } => *condition,
			_ => unreachable!(),
		};
		match self.type_of(ast, condition)
		{
			Some(DecafType::Bool) | None => (),
			Some(actual) =>
			{
				self.report(Error::NonBooleanCondition {
					actual,
					location: ast[node].location.clone(),
				});
			}
		}
	}

	fn previsit_whileloop(&mut self, _ast: &mut Ast, _node: NodeId)
	{
		self.loop_depth += 1;
	}

	fn postvisit_whileloop(&mut self, ast: &mut Ast, node: NodeId)
	{
		self.loop_depth -= 1;
		let condition = match &ast[node].kind
		{
			NodeKind::WhileLoop { condition, .. } => *condition,
			_ => unreachable!(),
		};
		match self.type_of(ast, condition)
		{
			Some(DecafType::Bool) | None => (),
			Some(actual) =>
			{
				self.report(Error::NonBooleanCondition {
					actual,
					location: ast[node].location.clone(),
				});
			}
		}
	}

	fn postvisit_return(&mut self, ast: &mut Ast, node: NodeId)
	{
		let value = match &ast[node].kind
		{
			NodeKind::Return { value } => *value,
			_ => unreachable!(),
		};
		let expected = match self.return_type
		{
			Some(expected) => expected,
			None => return,
		};
		match value
		{
			Some(value) => match self.type_of(ast, value)
			{
				Some(actual) if actual != expected =>
				{
					self.report(Error::ReturnTypeMismatch {
						expected,
						actual,
						location: ast[node].location.clone(),
					});
				}
				_ => (),
			},
			None =>
			{
				// A bare return is only permitted in a void function.
				if expected != DecafType::Void
				{
					self.report(Error::MissingReturnValue {
						expected,
						location: ast[node].location.clone(),
					});
				}
			}
		}
	}

	fn previsit_break(&mut self, ast: &mut Ast, node: NodeId)
	{
		if self.loop_depth == 0
		{
			self.report(Error::BreakOutsideLoop {
				location: ast[node].location.clone(),
			});
		}
	}

	fn previsit_continue(&mut self, ast: &mut Ast, node: NodeId)
	{
		if self.loop_depth == 0
		{
			self.report(Error::ContinueOutsideLoop {
				location: ast[node].location.clone(),
			});
		}
	}

	fn previsit_binaryop(&mut self, ast: &mut Ast, node: NodeId)
	{
		// The result type is determined by the operator alone, so it is set
		// before the operands are checked; an enclosing expression never
		// sees a missing type here, even if an operand is ill-typed.
		let op = match &ast[node].kind
		{
			NodeKind::BinaryOp { op, .. } => *op,
			_ => unreachable!(),
		};
		ast[node].attrs.inferred_type = Some(op.result_type());
	}

	fn postvisit_binaryop(&mut self, ast: &mut Ast, node: NodeId)
	{
		let (op, left, right) = match &ast[node].kind
		{
			NodeKind::BinaryOp { op, left, right } => (*op, *left, *right),
			_ => unreachable!(),
		};
		let left_type = self.type_of(ast, left);
		let right_type = self.type_of(ast, right);
		match op.operand_type()
		{
			Some(expected) =>
			{
				for actual in [left_type, right_type].into_iter().flatten()
				{
					if actual != expected
					{
						self.report(Error::InvalidOperandType {
							op,
							expected,
							actual,
							location: ast[node].location.clone(),
						});
					}
				}
			}
			None => match (left_type, right_type)
			{
				(Some(left), Some(right)) if left != right =>
				{
					self.report(Error::MismatchedOperandTypes {
						op,
						left,
						right,
						location: ast[node].location.clone(),
					});
				}
				_ => (),
			},
		}
	}

	fn postvisit_unaryop(&mut self, ast: &mut Ast, node: NodeId)
	{
		let (op, child) = match &ast[node].kind
		{
			NodeKind::UnaryOp { op, child } => (*op, *child),
			_ => unreachable!(),
		};
		ast[node].attrs.inferred_type = Some(op.result_type());
		match self.type_of(ast, child)
		{
			Some(actual) if actual != op.operand_type() =>
			{
				self.report(Error::InvalidUnaryOperandType {
					op,
					expected: op.operand_type(),
					actual,
					location: ast[node].location.clone(),
				});
			}
			_ => (),
		}
	}

	fn previsit_location(&mut self, ast: &mut Ast, node: NodeId)
	{
		let name = match &ast[node].kind
		{
			NodeKind::Location { name, .. } => name.clone(),
			_ => unreachable!(),
		};
		if let Some(symbol) = self.resolve_with_reporting(ast, node, &name)
		{
			ast[node].attrs.inferred_type = Some(symbol.value_type);
		}
	}

	fn postvisit_location(&mut self, ast: &mut Ast, node: NodeId)
	{
		let (name, index) = match &ast[node].kind
		{
			NodeKind::Location { name, index } => (name.clone(), *index),
			_ => unreachable!(),
		};
		let symbol = match lookup_symbol(ast, node, &name)
		{
			Some(symbol) => symbol.clone(),
			None => return,
		};
		let location = ast[node].location.clone();
		match (symbol.kind, index)
		{
			(SymbolKind::Array, None) =>
			{
				self.report(Error::MissingArrayIndex { name, location });
			}
			(SymbolKind::Array, Some(index)) =>
			{
				match self.type_of(ast, index)
				{
					Some(DecafType::Int) | None => (),
					Some(actual) =>
					{
						self.report(Error::InvalidIndexType {
							name,
							actual,
							location,
						});
					}
				}
			}
			(SymbolKind::Scalar | SymbolKind::Function, Some(_)) =>
			{
				self.report(Error::IndexedNonArray { name, location });
			}
			(SymbolKind::Scalar | SymbolKind::Function, None) => (),
		}
	}

	fn previsit_funccall(&mut self, ast: &mut Ast, node: NodeId)
	{
		let name = match &ast[node].kind
		{
			NodeKind::FuncCall { name, .. } => name.clone(),
			_ => unreachable!(),
		};
		let symbol = match self.resolve_with_reporting(ast, node, &name)
		{
			Some(symbol) => symbol,
			None => return,
		};
		if symbol.kind == SymbolKind::Function
		{
			ast[node].attrs.inferred_type = Some(symbol.value_type);
		}
		else
		{
			self.report(Error::CalleeIsNotAFunction {
				name,
				location: ast[node].location.clone(),
			});
		}
	}

	fn postvisit_funccall(&mut self, ast: &mut Ast, node: NodeId)
	{
		let (name, arguments) = match &ast[node].kind
		{
			NodeKind::FuncCall { name, arguments } =>
			{
				(name.clone(), arguments.clone())
			}
			_ => unreachable!(),
		};
		let symbol = match lookup_symbol(ast, node, &name)
		{
			Some(symbol) if symbol.kind == SymbolKind::Function =>
			{
				symbol.clone()
			}
			_ => return,
		};
		let location = ast[node].location.clone();
		if arguments.len() != symbol.parameters.len()
		{
			self.report(Error::ArgumentCountMismatch {
				name,
				expected: symbol.parameters.len(),
				actual: arguments.len(),
				location,
			});
			return;
		}
		for (position, (parameter, argument)) in
			symbol.parameters.iter().zip(arguments.iter()).enumerate()
		{
			match self.type_of(ast, *argument)
			{
				Some(actual) if actual != parameter.value_type =>
				{
					self.report(Error::ArgumentTypeMismatch {
						name: name.clone(),
						position: position + 1,
						expected: parameter.value_type,
						actual,
						location: location.clone(),
					});
				}
				_ => (),
			}
		}
	}

	fn previsit_literal(&mut self, ast: &mut Ast, node: NodeId)
	{
		let value_type = match &ast[node].kind
		{
			NodeKind::Literal(literal) => literal.value_type(),
			_ => unreachable!(),
		};
		ast[node].attrs.inferred_type = Some(value_type);
	}
}
