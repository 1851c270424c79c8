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

fn check_to_pass(filename: &str)
{
	match check(filename)
	{
		Ok(_) => (),
		Err(errors) => panic!("unexpected {:?}", errors),
	}
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
fn analyze_minimal()
{
	check_to_pass("tests/samples/valid/minimal.decaf");
}

#[test]
fn analyze_locals()
{
	check_to_pass("tests/samples/valid/locals.decaf");
}

#[test]
fn analyze_loops()
{
	check_to_pass("tests/samples/valid/loops.decaf");
}

#[test]
fn analyze_nested_loops()
{
	check_to_pass("tests/samples/valid/nested_loops.decaf");
}

#[test]
fn analyze_arrays()
{
	check_to_pass("tests/samples/valid/arrays.decaf");
}

#[test]
fn analyze_array_of_length_one()
{
	check_to_pass("tests/samples/valid/array_length_one.decaf");
}

#[test]
fn analyze_calls()
{
	check_to_pass("tests/samples/valid/calls.decaf");
}

#[test]
fn analyze_unused_function()
{
	check_to_pass("tests/samples/valid/unused_function.decaf");
}

#[test]
fn analyze_strings()
{
	check_to_pass("tests/samples/valid/strings.decaf");
}

#[test]
fn fail_to_analyze_no_main()
{
	check_to_fail(&[410], "tests/samples/invalid/no_main.decaf");
}

#[test]
fn fail_to_analyze_main_not_function()
{
	check_to_fail(&[411], "tests/samples/invalid/main_not_function.decaf");
}

#[test]
fn fail_to_analyze_main_with_parameters()
{
	check_to_fail(&[412], "tests/samples/invalid/main_with_parameters.decaf");
}

#[test]
fn fail_to_analyze_main_returns_bool()
{
	check_to_fail(&[413], "tests/samples/invalid/main_returns_bool.decaf");
}

#[test]
fn fail_to_analyze_void_variable()
{
	check_to_fail(&[421], "tests/samples/invalid/void_variable.decaf");
}

#[test]
fn fail_to_analyze_break_outside_loop()
{
	check_to_fail(&[800], "tests/samples/invalid/break_outside_loop.decaf");
}

#[test]
fn fail_to_analyze_continue_outside_loop()
{
	check_to_fail(&[801], "tests/samples/invalid/continue_outside_loop.decaf");
}

#[test]
fn fail_to_analyze_array_length_zero()
{
	check_to_fail(&[422], "tests/samples/invalid/array_length_zero.decaf");
}

#[test]
fn fail_to_analyze_local_array()
{
	check_to_fail(&[423], "tests/samples/invalid/local_array.decaf");
}

#[test]
fn fail_to_analyze_missing_array_index()
{
	check_to_fail(&[520], "tests/samples/invalid/missing_array_index.decaf");
}

#[test]
fn fail_to_analyze_non_integer_index()
{
	check_to_fail(&[521], "tests/samples/invalid/non_integer_index.decaf");
}

#[test]
fn fail_to_analyze_scalar_index()
{
	check_to_fail(&[522], "tests/samples/invalid/scalar_index.decaf");
}

#[test]
fn fail_to_analyze_argument_count_mismatch()
{
	check_to_fail(
		&[510],
		"tests/samples/invalid/argument_count_mismatch.decaf",
	);
}

#[test]
fn fail_to_analyze_argument_type_mismatch()
{
	check_to_fail(&[512], "tests/samples/invalid/argument_type_mismatch.decaf");
}

#[test]
fn fail_to_analyze_multiple_errors_in_order()
{
	check_to_fail(
		&[420, 501, 800, 504, 400],
		"tests/samples/invalid/multiple_errors.decaf",
	);
}
