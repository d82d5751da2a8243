use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_WORD_LIST: &str = "/usr/share/dict/words";

/// Check words on stdin against a word list and mark unknown words as <word> on stdout.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
	/// Word list with one word per line.
	#[arg(value_name = "WORD_LIST", default_value = DEFAULT_WORD_LIST)]
	pub word_list: PathBuf,
}
