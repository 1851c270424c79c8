/**/

use crate::ast::{Ast, NodeId, NodeKind};

/// Render the decorated tree as indented text, one node per line, with the
/// decorations the passes have attached so far: indentation follows the
/// `depth` decoration, inferred types are shown in braces and symbol tables
/// are listed under the node that owns them.
pub fn rebuild(ast: &Ast) -> String
{
	let mut buffer = String::new();
	write_node(ast, ast.root(), &mut buffer);
	buffer
}

fn write_node(ast: &Ast, node: NodeId, buffer: &mut String)
{
	let depth = ast[node].attrs.depth.unwrap_or(0) as usize;
	indent(depth, buffer);
	buffer.push_str(&describe(ast, node));
	buffer.push_str(&format!(" [line {}]", ast[node].line()));
	if let Some(value_type) = ast[node].attrs.inferred_type
	{
		buffer.push_str(&format!(" {{{}}}", value_type));
	}
	buffer.push('\n');

	if let Some(scope) = ast[node].attrs.scope
	{
		indent(depth + 1, buffer);
		buffer.push_str("SYM TABLE:\n");
		for symbol in &ast.scopes[scope].symbols
		{
			indent(depth + 1, buffer);
			buffer.push_str(&format!(" {}\n", symbol));
		}
	}

	for child in ast.children(node)
	{
		write_node(ast, child, buffer);
	}
}

fn indent(depth: usize, buffer: &mut String)
{
	for _ in 0..depth
	{
		buffer.push_str("  ");
	}
}

fn describe(ast: &Ast, node: NodeId) -> String
{
	match &ast[node].kind
	{
		NodeKind::Program { .. } => "Program".to_string(),
		NodeKind::VarDecl {
			name,
			value_type,
			is_array: true,
			array_length,
		} => format!("VarDecl {} : {} [{}]", name, value_type, array_length),
		NodeKind::VarDecl {
			name, value_type, ..
		} => format!("VarDecl {} : {}", name, value_type),
		NodeKind::FuncDecl {
			name,
			return_type,
			parameters,
			..
		} =>
		{
			let parameters: Vec<String> = parameters
				.iter()
				.map(|x| x.value_type.to_string())
				.collect();
			format!(
				"FuncDecl {} : ({}) -> {}",
				name,
				parameters.join(", "),
				return_type
			)
		}
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
