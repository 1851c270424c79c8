//
// Part of decafc
// Copyright (c) 2024 Sander in 't Veld
// License: MIT
//

use decafc::{Ast, Errors};

use pretty_assertions::assert_eq;

fn check(filename: &str) -> Result<Ast, Errors>
{
	let source = std::fs::read_to_string(filename).unwrap();
	decafc::check_source(&source, filename)
}

fn check_to_fail(codes: &[u16], filename: &str)
{
	match check(filename)
	{
		Ok(_) => panic!("broken test"),
		Err(errors) =>
		{
			assert_eq!(errors.codes(), codes, "unexpected {:?}", errors)
		}
	}
}

#[test]
fn scope_shadowing()
{
	match check("tests/samples/valid/shadowing.decaf")
	{
		Ok(_) => (),
		Err(errors) => panic!("unexpected {:?}", errors),
	}
}

#[test]
fn scope_forward_reference()
{
	// Functions may be called before their declaration in the file.
	match check("tests/samples/valid/calls.decaf")
	{
		Ok(_) => (),
		Err(errors) => panic!("unexpected {:?}", errors),
	}
}

#[test]
fn fail_to_scope_duplicate_globals()
{
	check_to_fail(&[420], "tests/samples/invalid/duplicate_globals.decaf");
}

#[test]
fn fail_to_scope_duplicate_locals()
{
	check_to_fail(&[420], "tests/samples/invalid/duplicate_locals.decaf");
}

#[test]
fn fail_to_scope_duplicate_parameters()
{
	check_to_fail(&[420], "tests/samples/invalid/duplicate_parameters.decaf");
}

#[test]
fn fail_to_scope_undefined_variable()
{
	check_to_fail(&[400], "tests/samples/invalid/undefined_variable.decaf");
}

#[test]
fn fail_to_scope_undefined_function()
{
	check_to_fail(&[400], "tests/samples/invalid/undefined_function.decaf");
}

#[test]
fn fail_to_scope_call_to_scalar()
{
	check_to_fail(&[401], "tests/samples/invalid/call_scalar.decaf");
}
