//
// Part of decafc
// Copyright (c) 2024 Sander in 't Veld
// License: MIT
//

//! Symbols, lexical scopes and name resolution. Scopes form a tree that
//! mirrors the program/function/block nesting of the source.

use crate::ast::{Ast, DecafType, NodeId, Parameter};

#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind
{
	Scalar,
	Array,
	Function,
}

#[must_use]
#[derive(Debug, Clone)]
pub struct Symbol
{
	pub kind: SymbolKind,
	pub name: String,
	/// The value type for scalars and arrays, the return type for functions.
	pub value_type: DecafType,
	/// The array length; 1 for scalars and functions.
	pub length: i32,
	/// The formal parameters, in declaration order (functions only).
	pub parameters: Vec<Parameter>,
}

impl Symbol
{
	pub fn scalar(name: &str, value_type: DecafType) -> Symbol
	{
		Symbol {
			kind: SymbolKind::Scalar,
			name: name.to_string(),
			value_type,
			length: 1,
			parameters: Vec::new(),
		}
	}

	pub fn array(name: &str, value_type: DecafType, length: i32) -> Symbol
	{
		Symbol {
			kind: SymbolKind::Array,
			name: name.to_string(),
			value_type,
			length,
			parameters: Vec::new(),
		}
	}

	pub fn function(
		name: &str,
		return_type: DecafType,
		parameters: Vec<Parameter>,
	) -> Symbol
	{
		Symbol {
			kind: SymbolKind::Function,
			name: name.to_string(),
			value_type: return_type,
			length: 1,
			parameters,
		}
	}
}

impl std::fmt::Display for Symbol
{
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result
	{
		match self.kind
		{
			SymbolKind::Scalar =>
			{
				write!(f, "{} : {}", self.name, self.value_type)
			}
			SymbolKind::Array =>
			{
				write!(f, "{} : {} [{}]", self.name, self.value_type, self.length)
			}
			SymbolKind::Function =>
			{
				write!(f, "{} : (", self.name)?;
				let mut first = true;
				for parameter in &self.parameters
				{
					if first
					{
						first = false;
					}
					else
					{
						write!(f, ", ")?;
					}
					write!(f, "{}", parameter.value_type)?;
				}
				write!(f, ") -> {}", self.value_type)
			}
		}
	}
}

/// A handle into the scope arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeId(u32);

/// One lexical scope: an ordered list of local symbols and a link to the
/// enclosing scope. The list preserves declaration order; duplicate
/// detection and shadowing depend on it.
#[must_use]
#[derive(Debug)]
pub struct Scope
{
	pub symbols: Vec<Symbol>,
	pub parent: Option<ScopeId>,
}

#[must_use]
#[derive(Debug, Default)]
pub struct Scopes
{
	scopes: Vec<Scope>,
}

impl Scopes
{
	pub fn create(&mut self, parent: Option<ScopeId>) -> ScopeId
	{
		let id = ScopeId(self.scopes.len() as u32);
		self.scopes.push(Scope {
			symbols: Vec::new(),
			parent,
		});
		id
	}

	pub fn insert(&mut self, id: ScopeId, symbol: Symbol)
	{
		self[id].symbols.push(symbol);
	}

	/// Find a symbol by name, searching enclosing scopes if it is not local.
	/// The first match wins, which implements lexical shadowing.
	pub fn lookup(&self, id: ScopeId, name: &str) -> Option<&Symbol>
	{
		let scope = &self[id];
		match scope.symbols.iter().find(|x| x.name == name)
		{
			Some(symbol) => Some(symbol),
			None => match scope.parent
			{
				Some(parent) => self.lookup(parent, name),
				None => None,
			},
		}
	}
}

impl std::ops::Index<ScopeId> for Scopes
{
	type Output = Scope;

	fn index(&self, id: ScopeId) -> &Scope
	{
		&self.scopes[id.0 as usize]
	}
}

impl std::ops::IndexMut<ScopeId> for Scopes
{
	fn index_mut(&mut self, id: ScopeId) -> &mut Scope
	{
		&mut self.scopes[id.0 as usize]
	}
}

/// Resolve a name as seen from a node: walk up the parent decorations until
/// a node with a scope is found, then search that scope and its ancestors.
pub fn lookup_symbol<'a>(
	ast: &'a Ast,
	node: NodeId,
	name: &str,
) -> Option<&'a Symbol>
{
	let mut current = Some(node);
	while let Some(id) = current
	{
		if let Some(scope) = ast[id].attrs.scope
		{
			return ast.scopes.lookup(scope, name);
		}
		current = ast[id].attrs.parent;
	}
	None
}
