//
// Part of decafc
// Copyright (c) 2024 Sander in 't Veld
// License: MIT
//

use decafc::ast::{DecafType, NodeKind};
use decafc::decorator;
use decafc::symbol;
use decafc::Ast;

use pretty_assertions::assert_eq;

fn check(filename: &str) -> Ast
{
	let source = std::fs::read_to_string(filename).unwrap();
	match decafc::check_source(&source, filename)
	{
		Ok(ast) => ast,
		Err(errors) => panic!("unexpected {:?}", errors),
	}
}

#[test]
fn every_node_has_parent_and_depth()
{
	let ast = check("tests/samples/valid/arrays.decaf");
	for id in ast.ids()
	{
		if id == ast.root()
		{
			assert_eq!(ast[id].attrs.parent, None);
			assert_eq!(ast[id].attrs.depth, Some(0));
		}
		else
		{
			let parent = ast[id].attrs.parent.expect("non-root without parent");
			let parent_depth = ast[parent].attrs.depth.unwrap();
			assert_eq!(ast[id].attrs.depth, Some(parent_depth + 1));
		}
	}
}

#[test]
fn decorators_are_idempotent()
{
	let mut ast = check("tests/samples/valid/loops.decaf");
	let before: Vec<_> = ast
		.ids()
		.map(|id| (ast[id].attrs.parent, ast[id].attrs.depth))
		.collect();
	decorator::set_parents(&mut ast);
	decorator::calc_depths(&mut ast);
	let after: Vec<_> = ast
		.ids()
		.map(|id| (ast[id].attrs.parent, ast[id].attrs.depth))
		.collect();
	assert_eq!(before, after);
}

#[test]
fn every_expression_is_typed_after_analysis()
{
	let ast = check("tests/samples/valid/expressions.decaf");
	for id in ast.ids()
	{
		if ast[id].is_expression()
		{
			match ast[id].attrs.inferred_type
			{
				Some(DecafType::Int)
				| Some(DecafType::Bool)
				| Some(DecafType::Str) => (),
				other => panic!(
					"expression {:?} has type {:?}",
					ast[id].kind, other
				),
			}
		}
	}
}

#[test]
fn references_are_typed_as_their_symbols()
{
	let ast = check("tests/samples/valid/calls.decaf");
	for id in ast.ids()
	{
		match &ast[id].kind
		{
			NodeKind::Location { name, .. } | NodeKind::FuncCall { name, .. } =>
			{
				let symbol = symbol::lookup_symbol(&ast, id, name).unwrap();
				assert_eq!(
					ast[id].attrs.inferred_type,
					Some(symbol.value_type)
				);
			}
			_ => (),
		}
	}
}

#[test]
fn scopes_mirror_nesting()
{
	let ast = check("tests/samples/valid/shadowing.decaf");
	for id in ast.ids()
	{
		match &ast[id].kind
		{
			NodeKind::Program { .. }
			| NodeKind::FuncDecl { .. }
			| NodeKind::Block { .. } =>
			{
				assert!(ast[id].attrs.scope.is_some());
			}
			_ => assert!(ast[id].attrs.scope.is_none()),
		}
	}
}

#[test]
fn diagnostics_are_deterministic()
{
	let filename = "tests/samples/invalid/multiple_errors.decaf";
	let source = std::fs::read_to_string(filename).unwrap();
	let first = match decafc::check_source(&source, filename)
	{
		Ok(_) => panic!("broken test"),
		Err(errors) => errors.codes(),
	};
	let second = match decafc::check_source(&source, filename)
	{
		Ok(_) => panic!("broken test"),
		Err(errors) => errors.codes(),
	};
	assert_eq!(first, second);
}

#[test]
fn no_scope_contains_duplicate_names()
{
	let ast = check("tests/samples/valid/shadowing.decaf");
	for id in ast.ids()
	{
		if let Some(scope) = ast[id].attrs.scope
		{
			let symbols = &ast.scopes[scope].symbols;
			for (i, symbol) in symbols.iter().enumerate()
			{
				assert!(
					!symbols[..i].iter().any(|x| x.name == symbol.name),
					"duplicate '{}' in scope of {:?}",
					symbol.name,
					ast[id].kind
				);
			}
		}
	}
}
