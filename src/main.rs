/**/

use decafc::analyzer;
use decafc::decorator;
use decafc::graphviz;
use decafc::lexer;
use decafc::parser;
use decafc::rebuilder;
use decafc::scoper;
use decafc::stdout::StdOut;

use anyhow::Context;

#[derive(Debug, clap::Parser)]
#[clap(version, about = "Compiler front end for the Decaf language")]
struct Cli
{
	/// Decaf source file to analyze
	filename: std::path::PathBuf,

	/// Write the decorated tree in DOT format to this path
	#[clap(short, long, value_name("PATH"))]
	graph: Option<std::path::PathBuf>,

	#[clap(flatten)]
	output: decafc::stdout::Options,
}

fn main() -> Result<(), anyhow::Error>
{
	let cli = {
		use clap::Parser as _;
		Cli::parse()
	};

	let filename = cli.filename.to_string_lossy().to_string();
	let source = std::fs::read_to_string(&cli.filename)
		.with_context(|| format!("could not read file '{}'", filename))?;

	let mut out = StdOut::new(cli.output);

	out.header("Lexing", &filename)?;
	let tokens = lexer::lex(&source, &filename);
	out.dump_tokens(&tokens)?;

	out.header("Parsing", &filename)?;
	let mut ast = match parser::parse(tokens)
	{
		Ok(ast) => ast,
		Err(error) =>
		{
			out.show_report(&error, &filename, &source)?;
			anyhow::bail!("could not compile '{}'", filename);
		}
	};

	decorator::set_parents(&mut ast);
	decorator::calc_depths(&mut ast);
	scoper::build(&mut ast);

	out.header("Analyzing", &filename)?;
	let errors = analyzer::analyze(&mut ast);
	if errors.is_empty()
	{
		out.dump_text(&rebuilder::rebuild(&ast))?;
		if let Some(path) = &cli.graph
		{
			std::fs::write(path, graphviz::graph(&ast)).with_context(|| {
				format!("could not write graph to '{}'", path.display())
			})?;
		}
		out.done()?;
	}
	else
	{
		// Semantic diagnostics go to stdout, one per line. An analysis that
		// ran to completion exits successfully even if it found errors; only
		// I/O and fatal front end errors change the exit status.
		out.show_errors(&errors)?;
	}

	Ok(())
}
