//
// Part of decafc
// Copyright (c) 2024 Sander in 't Veld
// License: MIT
//

//! The compiler front end for the Decaf programming language.
//!
//! This is the internal documentation for the decafc static analyzer.
//! The Abstract Syntax Tree is detailed in the modules [ast] and [symbol].
//! Errors are laid out in [error]. The other modules contain the compiler
//! stages, in order: [lexer], [parser], [decorator], [scoper] and
//! [analyzer], all driven by the traversal engine in [visitor].
//! The [rebuilder] and [graphviz] modules turn a decorated tree back into
//! annotated text and DOT output respectively.

pub mod analyzer;
pub mod ast;
pub mod decorator;
pub mod error;
pub mod graphviz;
pub mod lexer;
pub mod parser;
pub mod rebuilder;
pub mod scoper;
pub mod stdout;
pub mod symbol;
pub mod visitor;

pub use ast::Ast;
pub use error::Error;
pub use error::Errors;

/// Convenience method that parses source code and runs it through each of
/// the analysis stages: parent links and depths are decorated first, then
/// symbol tables are built, then the semantic analyzer checks the tree.
/// Returns the decorated tree if and only if there were no errors.
pub fn check_source(source: &str, filename: &str) -> Result<Ast, Errors>
{
	let tokens = lexer::lex(source, filename);
	let mut ast = parser::parse(tokens)?;
	decorator::set_parents(&mut ast);
	decorator::calc_depths(&mut ast);
	scoper::build(&mut ast);
	let errors = analyzer::analyze(&mut ast);
	if errors.is_empty()
	{
		Ok(ast)
	}
	else
	{
		Err(errors)
	}
}
