use std::path::Path;

use log::{debug, info};

use super::tokenizer::{ends_sentence, normalize};
use super::trie::Trie;
use crate::error::Result;
use crate::io::{read_tokens, split_tokens};

/// Builds the language model from a stream of raw corpus tokens.
///
/// Every normalized word is counted in the main trie. Inside a sentence,
/// each word is also recorded in the sub-trie of the word right before it.
/// A token whose raw form ends with `.`, `!` or `?` closes the sentence:
/// the next word starts a fresh chain with no predecessor.
///
/// The builder owns the trie until `finish`, so no query can observe a
/// half-built model.
///
/// # Invariants
/// - `previous` is always a word already inserted in `trie`
/// - `previous` is `None` at start and right after a sentence boundary
#[derive(Default, Debug)]
pub struct CorpusBuilder {
	trie: Trie,
	/// Last word of the current sentence, if the sentence is in progress.
	previous: Option<String>,
	/// Raw tokens consumed so far.
	tokens: usize,
}

impl CorpusBuilder {
	/// Creates a builder around an empty trie.
	pub fn new() -> Self {
		Self::default()
	}

	/// Consumes one raw token.
	///
	/// Steps, in order:
	/// 1. Read the sentence boundary from the raw token
	/// 2. Normalize the token
	/// 3. Insert the word in the main trie
	/// 4. Record it as a successor of the previous word, if any
	/// 5. Make it the previous word, unless the sentence ends here
	///
	/// A token with no letter is not inserted and links nothing, but its
	/// sentence boundary still resets the chain.
	pub fn feed(&mut self, raw: &str) -> Result<()> {
		self.tokens += 1;

		let last = ends_sentence(raw);
		let word = normalize(raw);

		if word.is_empty() {
			debug!("Skipping token {raw:?}: no letters");
			if last {
				self.previous = None;
			}
			return Ok(());
		}

		self.trie.insert(&word)?;

		if let Some(previous) = self.previous.take() {
			if let Some(node) = self.trie.lookup_mut(&previous) {
				node.record_successor(&word)?;
			}
		}

		self.previous = (!last).then_some(word);
		Ok(())
	}

	/// Consumes every token of `tokens`, in order.
	pub fn feed_all<I, S>(&mut self, tokens: I) -> Result<()>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		for token in tokens {
			self.feed(token.as_ref())?;
		}
		Ok(())
	}

	/// Ends ingestion and hands the finished model over.
	pub fn finish(self) -> Trie {
		info!(
			"Model built: {} tokens, {} distinct words, {} with successors",
			self.tokens,
			self.trie.len(),
			self.trie.successor_len()
		);
		self.trie
	}
}

impl Trie {
	/// Builds a model from in-memory corpus text.
	pub fn from_corpus(text: &str) -> Result<Self> {
		let mut builder = CorpusBuilder::new();
		builder.feed_all(split_tokens(text))?;
		Ok(builder.finish())
	}

	/// Builds a model from a corpus file.
	///
	/// # Errors
	/// Returns `TrieError::Read` if the file is missing or unreadable.
	pub fn from_corpus_file<P: AsRef<Path>>(filepath: P) -> Result<Self> {
		let path = filepath.as_ref();
		info!("Reading corpus {}", path.display());

		let mut builder = CorpusBuilder::new();
		builder.feed_all(read_tokens(path)?)?;
		Ok(builder.finish())
	}
}
