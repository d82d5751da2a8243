use std::io::{Read, Write};

use tracing::info;

use crate::{dictionary::Dictionary, error::Error, formatter::TokenFormatter, tokenizer::tokens};

/// Reads all of `input` and writes every word to `output`, marked by whether `dictionary` knows it.
pub fn process<D: Dictionary, F: TokenFormatter>(
	dictionary: &D,
	formatter:  &F,
	input:      &mut impl Read,
	output:     &mut impl Write,
) -> Result<(), Error> {
	let mut buffer = Vec::new();
	input.read_to_end(&mut buffer).map_err(Error::ReadInput)?;

	let mut total   = 0usize;
	let mut unknown = 0usize;

	for token in tokens(&buffer) {
		let known = dictionary.contains(token);
		formatter.format(token, known, output).map_err(Error::WriteOutput)?;

		total += 1;
		if !known {
			unknown += 1;
		}
	}
	output.flush().map_err(Error::WriteOutput)?;

	info!(tokens = total, unknown, "Checked input");
	Ok(())
}
