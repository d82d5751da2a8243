use std::io::Write;

pub trait TokenFormatter {
	fn format(&self, token: &[u8], known: bool, output: &mut impl Write) -> std::io::Result<()>;
}

/// Writes one token per line and wraps unknown tokens in angle brackets.
#[derive(Debug, Default)]
pub struct BracketFormatter;

impl TokenFormatter for BracketFormatter {
	fn format(&self, token: &[u8], known: bool, output: &mut impl Write) -> std::io::Result<()> {
		if known {
			output.write_all(token)?;
		}
		else {
			output.write_all(b"<")?;
			output.write_all(token)?;
			output.write_all(b">")?;
		}
		output.write_all(b"\n")
	}
}
