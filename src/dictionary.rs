use std::{collections::HashSet, fs::File, io::Read, path::Path};

use tracing::debug;

use crate::error::Error;

const LINE_DELIMITER: u8 = b'\n';

pub trait Dictionary {
	fn contains(&self, word: &[u8]) -> bool;
}

/// Words loaded from a newline delimited word list.
/// Lines are kept byte for byte, so a trailing `\r` or space is part of the word.
/// A word list ending in a newline yields an empty line, which no token can match.
#[derive(Debug, Default)]
pub struct WordList {
	words: HashSet<Vec<u8>>,
	lines: usize,
}

impl WordList {
	pub fn load(path: &Path) -> Result<Self, Error> {
		let mut file = File::open(path).map_err(|source| Error::OpenWordList {
			path: path.to_path_buf(),
			source,
		})?;

		let mut buffer = Vec::new();
		file.read_to_end(&mut buffer).map_err(|source| Error::ReadWordList {
			path: path.to_path_buf(),
			source,
		})?;

		let word_list = Self::from_bytes(&buffer);
		debug!(path = %path.display(), lines = word_list.lines(), words = word_list.distinct_words(), "Loaded word list");

		Ok(word_list)
	}

	pub fn from_bytes(bytes: &[u8]) -> Self {
		let mut words = HashSet::new();
		let mut lines = 0;

		for line in bytes.split(|b| *b == LINE_DELIMITER) {
			words.insert(line.to_vec());
			lines += 1;
		}

		Self { words, lines }
	}

	/// Number of lines read, duplicates included.
	pub fn lines(&self) -> usize {
		self.lines
	}

	/// Number of distinct words.
	pub fn distinct_words(&self) -> usize {
		self.words.len()
	}
}

impl Dictionary for WordList {
	fn contains(&self, word: &[u8]) -> bool {
		self.words.contains(word)
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use super::*;

	#[test]
	fn exact_match_only() {
		// Given:
		let word_list = WordList::from_bytes(b"apple\nbanana\n");

		// Then:
		assert!( word_list.contains(b"apple"));
		assert!( word_list.contains(b"banana"));
		assert!(!word_list.contains(b"cherry"));
		assert!(!word_list.contains(b"Apple"));
		assert!(!word_list.contains(b"appl"));
		assert!(!word_list.contains(b"apple "));
	}

	#[test]
	fn trailing_newline_gives_empty_line() {
		let word_list = WordList::from_bytes(b"apple\nbanana\n");

		assert_eq!(word_list.lines(), 3);
		assert!(word_list.contains(b""));
	}

	#[test]
	fn carriage_returns_are_not_trimmed() {
		let word_list = WordList::from_bytes(b"apple\r\nbanana\r\n");

		assert!(!word_list.contains(b"apple"));
		assert!( word_list.contains(b"apple\r"));
	}

	#[test]
	fn duplicates_are_collapsed() {
		let word_list = WordList::from_bytes(b"apple\napple\napple");

		assert_eq!(word_list.lines(),          3);
		assert_eq!(word_list.distinct_words(), 1);
	}

	#[test]
	fn empty_file_has_single_empty_line() {
		let word_list = WordList::from_bytes(b"");

		assert_eq!(word_list.lines(), 1);
		assert!(!word_list.contains(b"apple"));
	}

	#[test]
	fn load_from_file() {
		// Given:
		let mut file = tempfile::NamedTempFile::new().unwrap();
		file.write_all(b"apple\nbanana\n").unwrap();

		// When:
		let word_list = WordList::load(file.path()).unwrap();

		// Then:
		assert!(word_list.contains(b"banana"));
		assert_eq!(word_list.lines(), 3);
	}

	#[test]
	fn missing_file() {
		let dir  = tempfile::tempdir().unwrap();
		let path = dir.path().join("missing.txt");

		let result = WordList::load(&path);

		assert!(matches!(result, Err(Error::OpenWordList { path: p, .. }) if p == path));
	}

	#[test]
	fn directory_cannot_be_read() {
		let dir = tempfile::tempdir().unwrap();

		// Opening a directory succeeds on Unix, reading it fails.
		let result = WordList::load(dir.path());

		assert!(matches!(result, Err(Error::OpenWordList { .. } | Error::ReadWordList { .. })));
	}
}
