use super::tokenizer::normalize;
use super::trie::{Trie, TrieNode};

/// Predicts the words most likely to follow a seed word.
///
/// Each step picks the most frequent word of the current word's successor
/// sub-trie (alphabetically first on ties), then moves on to that word's
/// node in the main trie.
#[derive(Debug, Clone, Copy)]
pub struct Predictor<'a> {
	trie: &'a Trie,
}

impl<'a> Predictor<'a> {
	/// Creates a predictor over a finished model.
	pub fn new(trie: &'a Trie) -> Self {
		Self { trie }
	}

	/// Returns the lazy chain of predictions following `seed`.
	///
	/// The seed is normalized before lookup. The chain ends when a word is
	/// unknown or has no successor data; it may also cycle forever, so
	/// bound it with `take`.
	pub fn predictions(&self, seed: &str) -> Predictions<'a> {
		Predictions {
			trie: self.trie,
			current: self.trie.lookup(&normalize(seed)),
		}
	}

	/// Predicts up to `count` words following `seed`.
	///
	/// The result is shorter than `count` when the chain runs out of data,
	/// and empty when `seed` is unknown or was never followed by anything.
	pub fn predict(&self, seed: &str, count: usize) -> Vec<String> {
		self.predictions(seed).take(count).collect()
	}
}

/// Iterator over successive predicted words, see `Predictor::predictions`.
#[derive(Debug, Clone)]
pub struct Predictions<'a> {
	trie: &'a Trie,
	/// Main trie node of the last emitted word (the seed at start).
	current: Option<&'a TrieNode>,
}

impl Iterator for Predictions<'_> {
	type Item = String;

	fn next(&mut self) -> Option<String> {
		let node = self.current.take()?;
		let word = node.subtrie()?.most_frequent_word()?;

		self.current = self.trie.lookup(&word);
		Some(word)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn predicts_most_frequent_successor() {
		let trie = Trie::from_corpus("i like cats. i like dogs. i like birds.").unwrap();
		let predictor = Predictor::new(&trie);

		assert_eq!(predictor.predict("i", 1), vec!["like"]);
		// "like" is followed once each by birds, cats and dogs
		assert_eq!(predictor.predict("i", 5), vec!["like", "birds"]);
	}

	#[test]
	fn unknown_seed_predicts_nothing() {
		let trie = Trie::from_corpus("i like cats.").unwrap();
		assert!(Predictor::new(&trie).predict("you", 3).is_empty());
	}

	#[test]
	fn seed_without_successors_predicts_nothing() {
		let trie = Trie::from_corpus("i like cats.").unwrap();
		assert!(Predictor::new(&trie).predict("cats", 3).is_empty());
	}

	#[test]
	fn seed_is_normalized() {
		let trie = Trie::from_corpus("i like cats.").unwrap();
		assert_eq!(Predictor::new(&trie).predict("I,", 2), vec!["like", "cats"]);
	}

	#[test]
	fn zero_count_predicts_nothing() {
		let trie = Trie::from_corpus("i like cats.").unwrap();
		assert!(Predictor::new(&trie).predict("i", 0).is_empty());
	}

	#[test]
	fn cycles_are_bounded_by_count() {
		let trie = Trie::from_corpus("go go go go.").unwrap();
		assert_eq!(Predictor::new(&trie).predict("go", 4), vec!["go"; 4]);
	}

	#[test]
	fn chain_follows_each_emitted_word() {
		let trie = Trie::from_corpus("the cat sat on the mat. the cat ran.").unwrap();
		let chain: Vec<String> = Predictor::new(&trie).predictions("on").take(4).collect();
		assert_eq!(chain, vec!["the", "cat", "ran"]);
	}
}
