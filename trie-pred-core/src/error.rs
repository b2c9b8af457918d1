use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while building or querying a model.
///
/// Unknown words, empty sub-tries and short prediction chains are not errors;
/// they are reported through the query output.
#[derive(Error, Debug)]
pub enum TrieError {
	/// An input file (corpus or commands) could not be read.
	#[error("cannot read {}: {source}", path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// The report destination failed.
	#[error("cannot write report: {0}")]
	Write(#[from] io::Error),

	/// A word handed to the trie holds a character outside `a`-`z`.
	#[error("word {word:?} contains characters outside a-z")]
	InvalidWord { word: String },
}

pub type Result<T> = std::result::Result<T, TrieError>;
