//! Splits input into words.
//! A word is a maximal run of bytes that are neither space nor newline, so tabs and
//! carriage returns stay part of the word they touch.

use once_cell::sync::Lazy;
use regex::bytes::Regex;

// Unicode mode off, otherwise the class skips bytes that are not valid UTF-8.
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?-u:[^ \n])+").expect("Should be a valid pattern."));

/// Words of `input` from left to right.
pub fn tokens(input: &[u8]) -> impl Iterator<Item = &[u8]> {
	WORD.find_iter(input).map(|m| m.as_bytes())
}
