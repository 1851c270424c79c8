//
// Part of decafc
// Copyright (c) 2024 Sander in 't Veld
// License: MIT
//

//! The command line interface outputs colored dumps of tokens and of the
//! decorated tree when run with the _verbose_ flag.

use crate::error;
use crate::lexer;

use serde::Deserialize;
use std::io::Write;
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

#[derive(Debug, Default, Deserialize, clap::Args)]
#[serde(default, deny_unknown_fields)]
pub struct Options
{
	/// Show a lot of intermediate output
	#[clap(short, long)]
	verbose: bool,

	/// When to use ANSI colors in diagnostics and intermediate output
	#[clap(long, value_name("WHEN"))]
	#[clap(value_enum, default_value_t=ColorChoice::Auto)]
	color: ColorChoice,
}

#[derive(Debug, Default, Clone, Copy, Deserialize, clap::ValueEnum)]
pub enum ColorChoice
{
	#[default]
	Auto,
	Always,
	Never,
}

impl From<ColorChoice> for termcolor::ColorChoice
{
	fn from(choice: ColorChoice) -> termcolor::ColorChoice
	{
		match choice
		{
			ColorChoice::Auto => termcolor::ColorChoice::Auto,
			ColorChoice::Always => termcolor::ColorChoice::Always,
			ColorChoice::Never => termcolor::ColorChoice::Never,
		}
	}
}

pub struct StdOut
{
	stdout: StandardStream,
	is_verbose: bool,
}

impl StdOut
{
	pub fn new(options: Options) -> StdOut
	{
		let stdout = StandardStream::stdout(options.color.into());
		StdOut {
			stdout,
			is_verbose: options.verbose,
		}
	}

	pub fn header(
		&mut self,
		preamble: &str,
		filename: &str,
	) -> Result<(), std::io::Error>
	{
		if self.is_verbose
		{
			let colorspec_header = ColorSpec::new();
			self.stdout.set_color(&colorspec_header)?;
			writeln!(self.stdout, "{} {}...", preamble, filename)?;
		}
		Ok(())
	}

	pub fn dump_tokens(
		&mut self,
		tokens: &[lexer::LexedToken],
	) -> Result<(), std::io::Error>
	{
		if self.is_verbose
		{
			let colorspec_dump = ColorSpec::new().set_dimmed(true).to_owned();
			self.stdout.set_color(&colorspec_dump)?;
			for token in tokens
			{
				match &token.result
				{
					Result::Ok(token) => write!(self.stdout, "{:?}   ", token)?,
					Result::Err(_) => write!(self.stdout, "ERROR   ")?,
				}
			}
			writeln!(self.stdout)?;
			writeln!(self.stdout)?;
		}
		Ok(())
	}

	pub fn dump_text(&mut self, text: &str) -> Result<(), std::io::Error>
	{
		if self.is_verbose
		{
			let colorspec_dump = ColorSpec::new().set_dimmed(true).to_owned();
			self.stdout.set_color(&colorspec_dump)?;
			writeln!(self.stdout, "{}", text)?;
		}
		Ok(())
	}

	/// Print the diagnostics from an analysis, one per line.
	pub fn show_errors(
		&mut self,
		errors: &error::Errors,
	) -> Result<(), std::io::Error>
	{
		let colorspec_error = ColorSpec::new()
			.set_fg(Some(Color::Red))
			.set_bold(true)
			.to_owned();
		self.stdout.set_color(&colorspec_error)?;
		for error in &errors.errors
		{
			writeln!(self.stdout, "{}", error)?;
		}
		self.stdout.reset()?;
		Ok(())
	}

	/// Print a labelled report for a fatal front end error to stderr.
	pub fn show_report(
		&mut self,
		error: &error::Error,
		filename: &str,
		source: &str,
	) -> Result<(), std::io::Error>
	{
		let cache = ariadne::sources(vec![(
			filename.to_string(),
			source.to_string(),
		)]);
		error.report().eprint(cache)
	}

	pub fn done(&mut self) -> Result<(), std::io::Error>
	{
		if self.is_verbose
		{
			self.stdout.reset()?;
			writeln!(self.stdout, "Done.")?;
		}
		Ok(())
	}
}
