use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("cannot open word list {}", path.display())]
	OpenWordList {
		path:   PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("cannot read word list {}", path.display())]
	ReadWordList {
		path:   PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("cannot read standard input")]
	ReadInput(#[source] std::io::Error),

	#[error("cannot write standard output")]
	WriteOutput(#[source] std::io::Error),
}
