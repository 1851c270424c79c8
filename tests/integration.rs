//
// Part of decafc
// Copyright (c) 2024 Sander in 't Veld
// License: MIT
//

use assert_cmd::Command;

#[test]
fn analyze_valid_file()
{
	let mut cmd = Command::cargo_bin("decafc").unwrap();
	cmd.arg("tests/samples/valid/minimal.decaf");
	let output = cmd.output().unwrap();
	assert!(output.status.success());
	assert!(output.stdout.is_empty());
}

#[test]
fn diagnostics_go_to_stdout_one_per_line()
{
	let mut cmd = Command::cargo_bin("decafc").unwrap();
	cmd.arg("tests/samples/invalid/break_outside_loop.decaf");
	let output = cmd.output().unwrap();
	// A completed analysis exits successfully even with diagnostics.
	assert!(output.status.success());
	let stdout = String::from_utf8(output.stdout).unwrap();
	assert_eq!(stdout.lines().count(), 1);
	assert!(stdout.contains("break"));
	assert!(stdout.contains("line 2"));
}

#[test]
fn multiple_diagnostics_in_order()
{
	let mut cmd = Command::cargo_bin("decafc").unwrap();
	cmd.arg("tests/samples/invalid/multiple_errors.decaf");
	let output = cmd.output().unwrap();
	assert!(output.status.success());
	let stdout = String::from_utf8(output.stdout).unwrap();
	assert_eq!(stdout.lines().count(), 5);
}

#[test]
fn fail_on_missing_file()
{
	let mut cmd = Command::cargo_bin("decafc").unwrap();
	cmd.arg("tests/samples/no_such_file.decaf");
	cmd.assert().failure();
}

#[test]
fn fail_on_syntax_error()
{
	let mut cmd = Command::cargo_bin("decafc").unwrap();
	cmd.arg("tests/samples/invalid/syntax_error.decaf");
	cmd.assert().failure();
}

#[test]
fn write_graph_output()
{
	let outdir = tempfile::tempdir().unwrap();
	let path = outdir.path().join("ast.dot");
	let mut cmd = Command::cargo_bin("decafc").unwrap();
	cmd.arg("--graph");
	cmd.arg(&path);
	cmd.arg("tests/samples/valid/arrays.decaf");
	cmd.assert().success();
	let graph = std::fs::read_to_string(&path).unwrap();
	assert!(graph.starts_with("digraph"));
	assert!(graph.contains("FuncDecl main"));
}

#[test]
fn verbose_dumps_decorated_tree()
{
	let mut cmd = Command::cargo_bin("decafc").unwrap();
	cmd.arg("--verbose");
	cmd.arg("tests/samples/valid/shadowing.decaf");
	let output = cmd.output().unwrap();
	assert!(output.status.success());
	let stdout = String::from_utf8(output.stdout).unwrap();
	assert!(stdout.contains("SYM TABLE:"));
}
