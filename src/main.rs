mod args;
mod checker;
mod dictionary;
mod error;
mod formatter;
mod tokenizer;

use std::io::BufWriter;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::{args::Args, dictionary::WordList, formatter::BracketFormatter};

#[cfg(test)]
pub const COMMAND_NAME: &str = "wordcheck";

fn main() -> anyhow::Result<()> {
	tracing_subscriber::fmt()
		.with_writer(std::io::stderr)
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.with_target(false)
		.init();

	let args = Args::parse();

	// Load before touching stdin so a bad word list never produces output.
	let word_list  = WordList::load(&args.word_list)?;
	let mut output = BufWriter::new(std::io::stdout().lock());

	checker::process(&word_list, &BracketFormatter, &mut std::io::stdin().lock(), &mut output)?;
	Ok(())
}
