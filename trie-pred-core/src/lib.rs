//! Trie-based word prediction library.
//!
//! This crate provides a word-level predictive text model including:
//! - A 26-way prefix tree over lowercase words where every word node can own
//!   a nested sub-trie of the words that follow it
//! - Corpus ingestion recording successor words within sentences
//! - Frequency-maximizing prediction chains
//! - A small command language to dump, look up and predict against the model
//!
//! The model types (`Trie`, `CorpusBuilder`, `Predictor`, `QueryEngine`) are
//! re-exported at the crate root, `model::tokenizer` and `model::trie::TrieNode`
//! stay reachable for callers walking the model by hand. Trie mutation past
//! corpus ingestion and file handling stay internal.

/// Trie model, corpus ingestion, prediction and query execution.
pub mod model;

/// Error type shared by the whole crate.
pub mod error;

/// I/O utilities (token streams read from files).
///
/// Not exposed
pub(crate) mod io;

pub use error::{Result, TrieError};
pub use model::corpus::CorpusBuilder;
pub use model::predictor::Predictor;
pub use model::query::{Command, QueryEngine};
pub use model::trie::{DumpStyle, Trie};

/// Builds a model from `corpus_path` and runs every command of `commands_path`
/// against it, writing the report to `out`.
///
/// # Errors
/// - `TrieError::Read` if either file cannot be read (nothing is written in
///   that case for the corpus, and the model is discarded).
/// - `TrieError::Write` if `out` fails.
pub fn run<PC, PQ, W>(corpus_path: PC, commands_path: PQ, out: W) -> Result<()>
where
	PC: AsRef<std::path::Path>,
	PQ: AsRef<std::path::Path>,
	W: std::io::Write,
{
	let trie = Trie::from_corpus_file(corpus_path)?;
	let commands = io::read_tokens(commands_path)?;

	let mut engine = QueryEngine::new(&trie, out);
	engine.run(commands)?;
	engine.flush()
}
