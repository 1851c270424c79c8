/**/

use crate::ast::{Ast, NodeId};
use crate::visitor::{traverse, Visitor};

/// Write a `parent` decoration on every direct child of every node. The
/// root keeps no parent. Running this twice yields the same decorations.
pub fn set_parents(ast: &mut Ast)
{
	traverse(&mut SetParent, ast);
}

struct SetParent;

impl Visitor for SetParent
{
	fn previsit(&mut self, ast: &mut Ast, node: NodeId)
	{
		for child in ast.children(node)
		{
			ast[child].attrs.parent = Some(node);
		}
	}
}

/// Write a `depth` decoration on every node: 0 for the root, one more than
/// the parent for everything else. Must run after [set_parents].
pub fn calc_depths(ast: &mut Ast)
{
	traverse(&mut CalcDepth, ast);
}

struct CalcDepth;

impl Visitor for CalcDepth
{
	fn previsit(&mut self, ast: &mut Ast, node: NodeId)
	{
		let depth = match ast[node].attrs.parent
		{
			Some(parent) =>
			{
				// Pre-order: the parent was decorated before this node.
				let parent_depth = ast[parent]
					.attrs
					.depth
					.expect("depths are calculated after parent links");
				parent_depth + 1
			}
			None => 0,
		};
		ast[node].attrs.depth = Some(depth);
	}
}
