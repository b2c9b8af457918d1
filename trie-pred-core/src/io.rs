use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Result, TrieError};

/// Reads a text file and returns all its whitespace-delimited tokens.
///
/// - Reads the entire file into memory
/// - Splits on any run of whitespace, line breaks included
/// - Never yields an empty token
pub(crate) fn read_tokens<P: AsRef<Path>>(filename: P) -> Result<Vec<String>> {
	let path = filename.as_ref();
	let mut contents = String::new();
	File::open(path)
		.and_then(|mut file| file.read_to_string(&mut contents))
		.map_err(|source| TrieError::Read { path: path.to_path_buf(), source })?;

	Ok(split_tokens(&contents))
}

/// Splits already loaded text into owned tokens.
pub(crate) fn split_tokens(text: &str) -> Vec<String> {
	text.split_whitespace().map(str::to_owned).collect()
}
