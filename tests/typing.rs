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
fn type_mixed_expressions()
{
	match check("tests/samples/valid/expressions.decaf")
	{
		Ok(_) => (),
		Err(errors) => panic!("unexpected {:?}", errors),
	}
}

#[test]
fn fail_to_type_assignment_type_mismatch()
{
	check_to_fail(
		&[503],
		"tests/samples/invalid/assignment_type_mismatch.decaf",
	);
}

#[test]
fn fail_to_type_operand_type_mismatch()
{
	check_to_fail(&[501], "tests/samples/invalid/operand_type_mismatch.decaf");
}

#[test]
fn fail_to_type_logical_operand()
{
	check_to_fail(&[501], "tests/samples/invalid/logical_operand.decaf");
}

#[test]
fn fail_to_type_equality_mismatch()
{
	check_to_fail(&[500], "tests/samples/invalid/equality_mismatch.decaf");
}

#[test]
fn fail_to_type_negate_bool()
{
	check_to_fail(&[502], "tests/samples/invalid/negate_bool.decaf");
}

#[test]
fn fail_to_type_not_int()
{
	check_to_fail(&[502], "tests/samples/invalid/not_int.decaf");
}

#[test]
fn fail_to_type_non_bool_condition()
{
	check_to_fail(&[504], "tests/samples/invalid/non_bool_condition.decaf");
}

#[test]
fn fail_to_type_while_non_bool_condition()
{
	check_to_fail(
		&[504],
		"tests/samples/invalid/while_non_bool_condition.decaf",
	);
}

#[test]
fn fail_to_type_return_type_mismatch()
{
	check_to_fail(&[505], "tests/samples/invalid/return_type_mismatch.decaf");
}

#[test]
fn fail_to_type_bare_return()
{
	check_to_fail(&[506], "tests/samples/invalid/bare_return.decaf");
}

#[test]
fn fail_to_type_void_return_value()
{
	check_to_fail(&[505], "tests/samples/invalid/void_return_value.decaf");
}
