/**/

use crate::ast::{Ast, NodeId, NodeKind};

/// A collection of per-variant callbacks invoked by [traverse]. Every
/// variant has a pre and a post callback; `BinaryOp` additionally has an
/// in callback, invoked between its operands. Per-variant callbacks fall
/// back to [Visitor::previsit] and [Visitor::postvisit] when not overridden.
///
/// Callbacks receive the whole tree mutably so that passes can decorate
/// nodes other than the one being visited.
pub trait Visitor
{
	fn previsit(&mut self, _ast: &mut Ast, _node: NodeId) {}

	fn postvisit(&mut self, _ast: &mut Ast, _node: NodeId) {}

	fn previsit_program(&mut self, ast: &mut Ast, node: NodeId)
	{
		self.previsit(ast, node);
	}

	fn postvisit_program(&mut self, ast: &mut Ast, node: NodeId)
	{
		self.postvisit(ast, node);
	}

	fn previsit_vardecl(&mut self, ast: &mut Ast, node: NodeId)
	{
		self.previsit(ast, node);
	}

	fn postvisit_vardecl(&mut self, ast: &mut Ast, node: NodeId)
	{
		self.postvisit(ast, node);
	}

	fn previsit_funcdecl(&mut self, ast: &mut Ast, node: NodeId)
	{
		self.previsit(ast, node);
	}

	fn postvisit_funcdecl(&mut self, ast: &mut Ast, node: NodeId)
	{
		self.postvisit(ast, node);
	}

	fn previsit_block(&mut self, ast: &mut Ast, node: NodeId)
	{
		self.previsit(ast, node);
	}

	fn postvisit_block(&mut self, ast: &mut Ast, node: NodeId)
	{
		self.postvisit(ast, node);
	}

	fn previsit_assignment(&mut self, ast: &mut Ast, node: NodeId)
	{
		self.previsit(ast, node);
	}

	fn postvisit_assignment(&mut self, ast: &mut Ast, node: NodeId)
	{
		self.postvisit(ast, node);
	}

	fn previsit_conditional(&mut self, ast: &mut Ast, node: NodeId)
	{
		self.previsit(ast, node);
	}

	fn postvisit_conditional(&mut self, ast: &mut Ast, node: NodeId)
	{
		self.postvisit(ast, node);
	}

	fn previsit_whileloop(&mut self, ast: &mut Ast, node: NodeId)
	{
		self.previsit(ast, node);
	}

	fn postvisit_whileloop(&mut self, ast: &mut Ast, node: NodeId)
	{
		self.postvisit(ast, node);
	}

	fn previsit_return(&mut self, ast: &mut Ast, node: NodeId)
	{
		self.previsit(ast, node);
	}

	fn postvisit_return(&mut self, ast: &mut Ast, node: NodeId)
	{
		self.postvisit(ast, node);
	}

	fn previsit_break(&mut self, ast: &mut Ast, node: NodeId)
	{
		self.previsit(ast, node);
	}

	fn postvisit_break(&mut self, ast: &mut Ast, node: NodeId)
	{
		self.postvisit(ast, node);
	}

	fn previsit_continue(&mut self, ast: &mut Ast, node: NodeId)
	{
		self.previsit(ast, node);
	}

	fn postvisit_continue(&mut self, ast: &mut Ast, node: NodeId)
	{
		self.postvisit(ast, node);
	}

	fn previsit_binaryop(&mut self, ast: &mut Ast, node: NodeId)
	{
		self.previsit(ast, node);
	}

	fn invisit_binaryop(&mut self, _ast: &mut Ast, _node: NodeId) {}

	fn postvisit_binaryop(&mut self, ast: &mut Ast, node: NodeId)
	{
		self.postvisit(ast, node);
	}

	fn previsit_unaryop(&mut self, ast: &mut Ast, node: NodeId)
	{
		self.previsit(ast, node);
	}

	fn postvisit_unaryop(&mut self, ast: &mut Ast, node: NodeId)
	{
		self.postvisit(ast, node);
	}

	fn previsit_location(&mut self, ast: &mut Ast, node: NodeId)
	{
		self.previsit(ast, node);
	}

	fn postvisit_location(&mut self, ast: &mut Ast, node: NodeId)
	{
		self.postvisit(ast, node);
	}

	fn previsit_funccall(&mut self, ast: &mut Ast, node: NodeId)
	{
		self.previsit(ast, node);
	}

	fn postvisit_funccall(&mut self, ast: &mut Ast, node: NodeId)
	{
		self.postvisit(ast, node);
	}

	fn previsit_literal(&mut self, ast: &mut Ast, node: NodeId)
	{
		self.previsit(ast, node);
	}

	fn postvisit_literal(&mut self, ast: &mut Ast, node: NodeId)
	{
		self.postvisit(ast, node);
	}
}

/// The per-variant traversal shape: which callbacks to fire and which
/// children to descend into, copied out of the arena up front so that
/// callbacks are free to decorate the tree.
enum Step
{
	Program(Vec<NodeId>, Vec<NodeId>),
	VarDecl,
	FuncDecl(NodeId),
	Block(Vec<NodeId>, Vec<NodeId>),
	Assignment(NodeId, NodeId),
	Conditional(NodeId, NodeId, Option<NodeId>),
	WhileLoop(NodeId, NodeId),
	Return(Option<NodeId>),
	Break,
	Continue,
	BinaryOp(NodeId, NodeId),
	UnaryOp(NodeId),
	Location(Option<NodeId>),
	FuncCall(Vec<NodeId>),
	Literal,
}

/// Walk the entire tree with the given visitor, in the canonical order.
pub fn traverse<V: Visitor + ?Sized>(visitor: &mut V, ast: &mut Ast)
{
	let root = ast.root();
	traverse_node(visitor, ast, root);
}

fn traverse_node<V: Visitor + ?Sized>(
	visitor: &mut V,
	ast: &mut Ast,
	node: NodeId,
)
{
	let step = match &ast[node].kind
	{
		NodeKind::Program {
			variables,
			functions,
		} => Step::Program(variables.clone(), functions.clone()),
		NodeKind::VarDecl { .. } => Step::VarDecl,
		NodeKind::FuncDecl { body, .. } => Step::FuncDecl(*body),
		NodeKind::Block {
			variables,
			statements,
		} => Step::Block(variables.clone(), statements.clone()),
		NodeKind::Assignment { location, value } =>
		{
			Step::Assignment(*location, *value)
		}
		NodeKind::Conditional {
			condition,
			if_block,
			else_block,
		} => Step::Conditional(*condition, *if_block, *else_block),
		NodeKind::WhileLoop { condition, body } =>
		{
			Step::WhileLoop(*condition, *body)
		}
		NodeKind::Return { value } => Step::Return(*value),
		NodeKind::Break => Step::Break,
		NodeKind::Continue => Step::Continue,
		NodeKind::BinaryOp { left, right, .. } => Step::BinaryOp(*left, *right),
		NodeKind::UnaryOp { child, .. } => Step::UnaryOp(*child),
		NodeKind::Location { index, .. } => Step::Location(*index),
		NodeKind::FuncCall { arguments, .. } =>
		{
			Step::FuncCall(arguments.clone())
		}
		NodeKind::Literal(_) => Step::Literal,
	};

	match step
	{
		Step::Program(variables, functions) =>
		{
			visitor.previsit_program(ast, node);
			for variable in variables
			{
				traverse_node(visitor, ast, variable);
			}
			for function in functions
			{
				traverse_node(visitor, ast, function);
			}
			visitor.postvisit_program(ast, node);
		}
		Step::VarDecl =>
		{
			visitor.previsit_vardecl(ast, node);
			visitor.postvisit_vardecl(ast, node);
		}
		Step::FuncDecl(body) =>
		{
			visitor.previsit_funcdecl(ast, node);
			traverse_node(visitor, ast, body);
			visitor.postvisit_funcdecl(ast, node);
		}
		Step::Block(variables, statements) =>
		{
			visitor.previsit_block(ast, node);
			for variable in variables
			{
				traverse_node(visitor, ast, variable);
			}
			for statement in statements
			{
				traverse_node(visitor, ast, statement);
			}
			visitor.postvisit_block(ast, node);
		}
		Step::Assignment(location, value) =>
		{
			visitor.previsit_assignment(ast, node);
			traverse_node(visitor, ast, location);
			traverse_node(visitor, ast, value);
			visitor.postvisit_assignment(ast, node);
		}
		Step::Conditional(condition, if_block, else_block) =>
		{
			visitor.previsit_conditional(ast, node);
			traverse_node(visitor, ast, condition);
			traverse_node(visitor, ast, if_block);
			if let Some(else_block) = else_block
			{
				traverse_node(visitor, ast, else_block);
			}
			visitor.postvisit_conditional(ast, node);
		}
		Step::WhileLoop(condition, body) =>
		{
			visitor.previsit_whileloop(ast, node);
			traverse_node(visitor, ast, condition);
			traverse_node(visitor, ast, body);
			visitor.postvisit_whileloop(ast, node);
		}
		Step::Return(value) =>
		{
			visitor.previsit_return(ast, node);
			if let Some(value) = value
			{
				traverse_node(visitor, ast, value);
			}
			visitor.postvisit_return(ast, node);
		}
		Step::Break =>
		{
			visitor.previsit_break(ast, node);
			visitor.postvisit_break(ast, node);
		}
		Step::Continue =>
		{
			visitor.previsit_continue(ast, node);
			visitor.postvisit_continue(ast, node);
		}
		Step::BinaryOp(left, right) =>
		{
			visitor.previsit_binaryop(ast, node);
			traverse_node(visitor, ast, left);
			visitor.invisit_binaryop(ast, node);
			traverse_node(visitor, ast, right);
			visitor.postvisit_binaryop(ast, node);
		}
		Step::UnaryOp(child) =>
		{
			visitor.previsit_unaryop(ast, node);
			traverse_node(visitor, ast, child);
			visitor.postvisit_unaryop(ast, node);
		}
		Step::Location(index) =>
		{
			visitor.previsit_location(ast, node);
			if let Some(index) = index
			{
				traverse_node(visitor, ast, index);
			}
			visitor.postvisit_location(ast, node);
		}
		Step::FuncCall(arguments) =>
		{
			visitor.previsit_funccall(ast, node);
			for argument in arguments
			{
				traverse_node(visitor, ast, argument);
			}
			visitor.postvisit_funccall(ast, node);
		}
		Step::Literal =>
		{
			visitor.previsit_literal(ast, node);
			visitor.postvisit_literal(ast, node);
		}
	}
}
