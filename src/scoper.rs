//
// Part of decafc
// Copyright (c) 2024 Sander in 't Veld
// License: MIT
//

//! During the scoping stage, a symbol table is attached to the program node,
//! to every function node and to every block node. The program scope holds
//! the built-in print functions, a forward declaration of every user
//! function (so that calls may refer to functions declared later in the
//! file) and the global variables; function scopes hold the formal
//! parameters; variables are inserted into the innermost open scope.

use crate::ast::{Ast, DecafType, NodeId, NodeKind, Parameter};
use crate::symbol::{ScopeId, Symbol};
use crate::visitor::{traverse, Visitor};

/// Build the scope tree. Must run after the structural decorators; must not
/// run twice on the same tree.
pub fn build(ast: &mut Ast)
{
	let mut builder = Builder { stack: Vec::new() };
	traverse(&mut builder, ast);
}

struct Builder
{
	stack: Vec<ScopeId>,
}

impl Builder
{
	fn open_scope(&mut self, ast: &mut Ast, node: NodeId) -> ScopeId
	{
		let parent = self.stack.last().copied();
		let scope = ast.scopes.create(parent);
		ast[node].attrs.scope = Some(scope);
		self.stack.push(scope);
		scope
	}

	fn close_scope(&mut self)
	{
		self.stack.pop();
	}

	fn current_scope(&self) -> ScopeId
	{
		match self.stack.last()
		{
			Some(scope) => *scope,
			None => unreachable!(),
		}
	}
}

fn print_builtin(name: &str, value_type: DecafType) -> Symbol
{
	let parameters = vec![Parameter {
		name: "value".to_string(),
		value_type,
	}];
	Symbol::function(name, DecafType::Void, parameters)
}

impl Visitor for Builder
{
	fn previsit_program(&mut self, ast: &mut Ast, node: NodeId)
	{
		let scope = self.open_scope(ast, node);

		ast.scopes
			.insert(scope, print_builtin("print_int", DecafType::Int));
		ast.scopes
			.insert(scope, print_builtin("print_bool", DecafType::Bool));
		ast.scopes
			.insert(scope, print_builtin("print_str", DecafType::Str));

		// Forward-declare every user function. Global variables are handled
		// by the vardecl callback while this scope is on top of the stack.
		let functions = match &ast[node].kind
		{
			NodeKind::Program { functions, .. } => functions.clone(),
			_ => unreachable!(),
		};
		for function in functions
		{
			let symbol = match &ast[function].kind
			{
				NodeKind::FuncDecl {
					name,
					return_type,
					parameters,
					body: _,
				} => Symbol::function(name, *return_type, parameters.clone()),
				_ => unreachable!(),
			};
			ast.scopes.insert(scope, symbol);
		}
	}

	fn previsit_funcdecl(&mut self, ast: &mut Ast, node: NodeId)
	{
		let scope = self.open_scope(ast, node);

		let parameters = match &ast[node].kind
		{
			NodeKind::FuncDecl { parameters, .. } => parameters.clone(),
			_ => unreachable!(),
		};
		for parameter in parameters
		{
			let symbol = Symbol::scalar(&parameter.name, parameter.value_type);
			ast.scopes.insert(scope, symbol);
		}
	}

	fn previsit_block(&mut self, ast: &mut Ast, node: NodeId)
	{
		let _scope = self.open_scope(ast, node);
	}

	fn previsit_vardecl(&mut self, ast: &mut Ast, node: NodeId)
	{
		let symbol = match &ast[node].kind
		{
			NodeKind::VarDecl {
				name,
				value_type,
				is_array: true,
				array_length,
			} => Symbol::array(name, *value_type, *array_length),
			NodeKind::VarDecl {
				name,
				value_type,
				is_array: false,
				array_length: _,
			} => Symbol::scalar(name, *value_type),
			_ => unreachable!(),
		};
		ast.scopes.insert(self.current_scope(), symbol);
	}

	fn postvisit_program(&mut self, _ast: &mut Ast, _node: NodeId)
	{
		self.close_scope();
	}

	fn postvisit_funcdecl(&mut self, _ast: &mut Ast, _node: NodeId)
	{
		self.close_scope();
	}

	fn postvisit_block(&mut self, _ast: &mut Ast, _node: NodeId)
	{
		self.close_scope();
	}
}
