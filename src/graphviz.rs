//
// Part of decafc
// Copyright (c) 2024 Sander in 't Veld
// License: MIT
//

//! The command line interface can emit the decorated tree in DOT format:
//! <https://graphviz.org>
//!
//! To convert the output to a PNG (for example):
//!
//! ```sh
//! dot -Tpng -o ast.png ast.dot
//! ```

use crate::ast::{Ast, NodeId, NodeKind};

pub fn graph(ast: &Ast) -> String
{
	let mut buffer = String::new();
	buffer.push_str("digraph AST {\n");
	buffer.push_str("\tnode [shape=box, fontname=\"monospace\"];\n");
	write_node(ast, ast.root(), &mut buffer);
	buffer.push_str("}\n");
	buffer
}

fn write_node(ast: &Ast, node: NodeId, buffer: &mut String)
{
	let mut lines = vec![
		describe(ast, node),
		format!("line {}", ast[node].line()),
	];
	if let Some(depth) = ast[node].attrs.depth
	{
		lines.push(format!("depth {}", depth));
	}
	if let Some(value_type) = ast[node].attrs.inferred_type
	{
		lines.push(format!("type {}", value_type));
	}
	if let Some(scope) = ast[node].attrs.scope
	{
		for symbol in &ast.scopes[scope].symbols
		{
			lines.push(symbol.to_string());
		}
	}

	let label: Vec<String> = lines.iter().map(|x| escape(x)).collect();
	buffer.push_str(&format!(
		"\t{} [label=\"{}\"];\n",
		node,
		label.join("\\n")
	));

	for child in ast.children(node)
	{
		buffer.push_str(&format!("\t{} -> {};\n", node, child));
		write_node(ast, child, buffer);
	}
}

fn describe(ast: &Ast, node: NodeId) -> String
{
	match &ast[node].kind
	{
		NodeKind::Program { .. } => "Program".to_string(),
		NodeKind::VarDecl { name, .. } => format!("VarDecl {}", name),
		NodeKind::FuncDecl { name, .. } => format!("FuncDecl {}", name),
		NodeKind::Block { .. } => "Block".to_string(),
		NodeKind::Assignment { .. } => "Assignment".to_string(),
		NodeKind::Conditional { .. } => "Conditional".to_string(),
		NodeKind::WhileLoop { .. } => "WhileLoop".to_string(),
		NodeKind::Return { .. } => "Return".to_string(),
		NodeKind::Break => "Break".to_string(),
		NodeKind::Continue => "Continue".to_string(),
		NodeKind::BinaryOp { op, .. } => format!("BinaryOp {}", op),
		NodeKind::UnaryOp { op, .. } => format!("UnaryOp {}", op),
		NodeKind::Location { name, .. } => format!("Location {}", name),
		NodeKind::FuncCall { name, .. } => format!("FuncCall {}", name),
		NodeKind::Literal(literal) => format!("Literal {}", literal),
	}
}

fn escape(text: &str) -> String
{
	text.replace('\\', "\\\\").replace('\"', "\\\"")
}
