//
// Part of decafc
// Copyright (c) 2024 Sander in 't Veld
// License: MIT
//

use decafc::lexer;
use decafc::parser;
use decafc::Ast;
use decafc::Error;

use pretty_assertions::assert_eq;

fn parse(filename: &str) -> Result<Ast, Error>
{
	let source = std::fs::read_to_string(filename).unwrap();
	let tokens = lexer::lex(&source, filename);
	parser::parse(tokens)
}

fn parse_to_fail(code: u16, filename: &str)
{
	match parse(filename)
	{
		Ok(_) => panic!("broken test"),
		Err(error) => assert_eq!(error.code(), code, "unexpected {:?}", error),
	}
}

#[test]
fn parse_minimal()
{
	let ast = parse("tests/samples/valid/minimal.decaf").unwrap();
	assert!(!ast.is_empty());
}

#[test]
fn parse_expressions()
{
	let ast = parse("tests/samples/valid/expressions.decaf").unwrap();
	assert!(!ast.is_empty());
}

#[test]
fn parse_arrays()
{
	let ast = parse("tests/samples/valid/arrays.decaf").unwrap();
	assert!(!ast.is_empty());
}

#[test]
fn parse_empty_source_as_empty_program()
{
	let tokens = lexer::lex("", "empty.decaf");
	let ast = parser::parse(tokens).unwrap();
	// The empty program parses; it is the analyzer that rejects it for
	// missing 'main'.
	assert_eq!(ast.len(), 1);
}

#[test]
fn fail_to_parse_missing_semicolon()
{
	parse_to_fail(300, "tests/samples/invalid/syntax_error.decaf");
}

#[test]
fn fail_to_parse_unclosed_brace()
{
	parse_to_fail(301, "tests/samples/invalid/unclosed_brace.decaf");
}

#[test]
fn fail_to_parse_unterminated_string()
{
	parse_to_fail(160, "tests/samples/invalid/unterminated_string.decaf");
}
