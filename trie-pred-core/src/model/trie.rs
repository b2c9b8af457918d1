use std::io::{self, Write};

use crate::error::{Result, TrieError};

/// Number of child slots per node, one per letter `a`..=`z`.
const ALPHABET_SIZE: usize = 26;

/// Returns the child slot for an ASCII letter (case-insensitive).
fn letter_index(byte: u8) -> Option<usize> {
	byte.is_ascii_alphabetic()
		.then(|| (byte.to_ascii_lowercase() - b'a') as usize)
}

/// Returns the letter stored in a child slot.
fn index_letter(index: usize) -> char {
	(b'a' + index as u8) as char
}

/// Output format of a trie dump.
///
/// The main trie is dumped as-is, a sub-trie has every line prefixed
/// with `"- "`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpStyle {
	Main,
	Subtrie,
}

impl DumpStyle {
	fn prefix(self) -> &'static str {
		match self {
			DumpStyle::Main => "",
			DumpStyle::Subtrie => "- ",
		}
	}
}

/// A single node of a `Trie`.
///
/// A node stands for the prefix spelled by the path leading to it. It is a
/// terminal node when `count > 0`, i.e. some inserted word ends exactly here.
///
/// ## Invariants
/// - `count` only ever grows while the trie is being built
/// - `subtrie` is created at most once and owned by this node alone
#[derive(Default, Debug)]
pub struct TrieNode {
	/// One optional child per letter, in alphabetical order.
	children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
	/// How many times the word ending here was inserted.
	count: u32,
	/// Words observed right after the word ending here.
	subtrie: Option<Box<Trie>>,
}

impl TrieNode {
	/// Returns how many times the word ending at this node was inserted.
	pub fn count(&self) -> u32 {
		self.count
	}

	/// Returns the successor sub-trie, if any successor was ever recorded.
	pub fn subtrie(&self) -> Option<&Trie> {
		self.subtrie.as_deref()
	}

	/// Returns the child reached through `letter`, if it exists.
	pub fn child(&self, letter: char) -> Option<&TrieNode> {
		let index = letter_index(u8::try_from(letter).ok()?)?;
		self.children[index].as_deref()
	}

	/// Records `word` as a successor of the word ending at this node.
	///
	/// The sub-trie is created on the first recorded successor.
	pub(crate) fn record_successor(&mut self, word: &str) -> Result<()> {
		self.subtrie.get_or_insert_with(Default::default).insert(word)
	}

	/// Pre-order, alphabetical depth-first traversal.
	///
	/// `path` holds the word spelled so far. The traversal keeps its own
	/// stack, so word length never bounds the call depth.
	fn walk<'a, F>(&'a self, path: &mut String, visit: &mut F)
	where
		F: FnMut(&str, &'a TrieNode),
	{
		let base = path.len();
		// (node, letter leading to it, path length before that letter)
		let mut stack: Vec<(&'a TrieNode, Option<char>, usize)> = vec![(self, None, base)];

		while let Some((node, letter, depth)) = stack.pop() {
			path.truncate(depth);
			if let Some(letter) = letter {
				path.push(letter);
			}
			visit(path, node);

			// Pushed z..a so that a is popped first
			for (index, child) in node.children.iter().enumerate().rev() {
				if let Some(child) = child {
					stack.push((&**child, Some(index_letter(index)), path.len()));
				}
			}
		}

		path.truncate(base);
	}

	/// Moves every child and the sub-trie root out of this node.
	fn detach(&mut self) -> Vec<Box<TrieNode>> {
		let mut detached: Vec<Box<TrieNode>> =
			self.children.iter_mut().filter_map(Option::take).collect();

		if let Some(mut subtrie) = self.subtrie.take() {
			detached.push(Box::new(std::mem::take(&mut subtrie.root)));
		}

		detached
	}

	/// Releases everything below this node and returns how many nodes were
	/// released.
	///
	/// A node is only released once its children and sub-trie have been
	/// detached from it, so the work list replaces recursion.
	fn release(&mut self) -> usize {
		let mut released = 0;
		let mut pending = self.detach();

		while let Some(mut node) = pending.pop() {
			pending.extend(node.detach());
			released += 1;
		}

		self.count = 0;
		released
	}
}

impl Drop for TrieNode {
	fn drop(&mut self) {
		self.release();
	}
}

/// A prefix tree of lowercase ASCII words.
///
/// The same structure is used for the main trie and for every successor
/// sub-trie, so sub-tries can nest without limit.
///
/// # Responsibilities
/// - Count word insertions
/// - Look words up
/// - Find the most frequent word (first in alphabetical order on ties)
/// - Dump all terminal words in alphabetical order
///
/// # Invariants
/// - The root is always present, it never holds a word
/// - Nodes are only created by `insert`, never by queries
/// - Ownership is strictly tree shaped, no node has two owners
#[derive(Default, Debug)]
pub struct Trie {
	root: TrieNode,
}

impl Trie {
	/// Creates an empty trie (a lone root with no word).
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts `word`, creating only the missing nodes along its path, and
	/// increments the count of its final node.
	///
	/// Letters are matched case-insensitively. Inserting an empty word is a
	/// no-op: the root never counts as a word.
	///
	/// # Errors
	/// Returns `TrieError::InvalidWord` if `word` holds anything but ASCII
	/// letters. The trie is left untouched in that case.
	pub fn insert(&mut self, word: &str) -> Result<()> {
		let path = word
			.bytes()
			.map(letter_index)
			.collect::<Option<Vec<_>>>()
			.ok_or_else(|| TrieError::InvalidWord { word: word.to_owned() })?;

		if path.is_empty() {
			return Ok(());
		}

		let mut node = &mut self.root;
		for index in path {
			node = node.children[index].get_or_insert_with(Default::default).as_mut();
		}
		node.count += 1;

		Ok(())
	}

	/// Follows `word` from the root.
	///
	/// Returns the root itself for an empty word, and `None` as soon as a
	/// letter has no child or the word holds a non-letter.
	pub fn lookup(&self, word: &str) -> Option<&TrieNode> {
		word.bytes().try_fold(&self.root, |node, byte| {
			node.children[letter_index(byte)?].as_deref()
		})
	}

	/// Mutable counterpart of `lookup`, used while ingesting a corpus.
	pub(crate) fn lookup_mut(&mut self, word: &str) -> Option<&mut TrieNode> {
		word.bytes().try_fold(&mut self.root, |node, byte| {
			node.children[letter_index(byte)?].as_deref_mut()
		})
	}

	/// Returns the word with the strictly greatest count.
	///
	/// The traversal is alphabetical, so on ties the alphabetically first
	/// word wins. Returns `None` when the trie holds no word.
	pub fn most_frequent_word(&self) -> Option<String> {
		let mut best: Option<(String, u32)> = None;

		self.root.walk(&mut String::new(), &mut |word, node| {
			let best_count = best.as_ref().map_or(0, |(_, count)| *count);
			if node.count > best_count {
				best = Some((word.to_owned(), node.count));
			}
		});

		best.map(|(word, _)| word)
	}

	/// Returns every `(word, count)` pair in alphabetical order.
	pub fn words(&self) -> Vec<(String, u32)> {
		let mut words = Vec::new();

		self.root.walk(&mut String::new(), &mut |word, node| {
			if node.count > 0 {
				words.push((word.to_owned(), node.count));
			}
		});

		words
	}

	/// Writes one `<word> (<count>)` line per word, alphabetically.
	///
	/// With `DumpStyle::Subtrie` each line starts with `"- "`.
	pub fn dump<W: Write>(&self, out: &mut W, style: DumpStyle) -> io::Result<()> {
		for (word, count) in self.words() {
			writeln!(out, "{}{} ({})", style.prefix(), word, count)?;
		}
		Ok(())
	}

	/// Number of distinct words stored in this trie (sub-tries excluded).
	pub fn len(&self) -> usize {
		let mut len = 0;
		self.root.walk(&mut String::new(), &mut |_, node| {
			if node.count > 0 {
				len += 1;
			}
		});
		len
	}

	/// Returns `true` if no word was ever inserted.
	pub fn is_empty(&self) -> bool {
		self.most_frequent_word().is_none()
	}

	/// Number of nodes owned by this trie, its root and the nodes of every
	/// nested sub-trie included.
	pub fn node_count(&self) -> usize {
		let mut nodes = 0;
		self.root.walk(&mut String::new(), &mut |_, node| {
			nodes += 1 + node.subtrie().map_or(0, Trie::node_count);
		});
		nodes
	}

	/// Releases every node below the root, post-order: children first, then
	/// the sub-trie, then the node itself.
	///
	/// Returns the number of released nodes. The trie is empty afterwards,
	/// so calling it again releases nothing.
	pub fn destroy(&mut self) -> usize {
		self.root.release()
	}

	/// Number of words of this trie that own a successor sub-trie.
	pub(crate) fn successor_len(&self) -> usize {
		let mut len = 0;
		self.root.walk(&mut String::new(), &mut |_, node| {
			if node.subtrie.is_some() {
				len += 1;
			}
		});
		len
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn trie_of(words: &[&str]) -> Trie {
		let mut trie = Trie::new();
		for word in words {
			trie.insert(word).unwrap();
		}
		trie
	}

	fn dump_to_string(trie: &Trie, style: DumpStyle) -> String {
		let mut out = Vec::new();
		trie.dump(&mut out, style).unwrap();
		String::from_utf8(out).unwrap()
	}

	#[test]
	fn lookup_returns_insertion_count() {
		let words = ["the", "cat", "the", "then", "cat", "the", "a"];
		let trie = trie_of(&words);

		for word in words {
			let expected = words.iter().filter(|w| **w == word).count() as u32;
			assert_eq!(trie.lookup(word).unwrap().count(), expected, "{word}");
		}
	}

	#[test]
	fn prefix_nodes_have_zero_count() {
		let trie = trie_of(&["then"]);
		assert_eq!(trie.lookup("the").unwrap().count(), 0);
		assert_eq!(trie.lookup("then").unwrap().count(), 1);
		assert_eq!(trie.len(), 1);
	}

	#[test]
	fn lookup_of_missing_word_is_none() {
		let trie = trie_of(&["cat"]);
		assert!(trie.lookup("cab").is_none());
		assert!(trie.lookup("cats").is_none());
		assert!(trie.lookup("c4t").is_none());
	}

	#[test]
	fn lookup_of_empty_word_is_root() {
		let trie = trie_of(&["cat"]);
		let root = trie.lookup("").unwrap();
		assert_eq!(root.count(), 0);
		assert!(root.child('c').is_some());
	}

	#[test]
	fn lookup_ignores_case() {
		let trie = trie_of(&["cat"]);
		assert_eq!(trie.lookup("CaT").unwrap().count(), 1);
	}

	#[test]
	fn empty_insert_is_noop() {
		let mut trie = Trie::new();
		trie.insert("").unwrap();
		assert!(trie.is_empty());
		assert_eq!(trie.node_count(), 1);
	}

	#[test]
	fn invalid_word_leaves_trie_untouched() {
		let mut trie = Trie::new();
		assert!(matches!(trie.insert("ab1"), Err(TrieError::InvalidWord { .. })));
		assert_eq!(trie.node_count(), 1);
	}

	#[test]
	fn insertion_is_lazy() {
		let trie = trie_of(&["to", "tea", "ten"]);
		// root, t, o, e, a, n
		assert_eq!(trie.node_count(), 6);
	}

	#[test]
	fn dump_is_alphabetical_regardless_of_insertion_order() {
		let trie = trie_of(&["zebra", "apple", "app", "mango", "apple"]);
		assert_eq!(
			dump_to_string(&trie, DumpStyle::Main),
			"app (1)\napple (2)\nmango (1)\nzebra (1)\n"
		);
	}

	#[test]
	fn subtrie_dump_is_prefixed() {
		let trie = trie_of(&["like", "like", "love"]);
		assert_eq!(
			dump_to_string(&trie, DumpStyle::Subtrie),
			"- like (2)\n- love (1)\n"
		);
	}

	#[test]
	fn most_frequent_of_empty_trie_is_none() {
		assert_eq!(Trie::new().most_frequent_word(), None);
	}

	#[test]
	fn most_frequent_unique_maximum() {
		let trie = trie_of(&["b", "a", "c", "c", "b", "c"]);
		assert_eq!(trie.most_frequent_word().as_deref(), Some("c"));
	}

	#[test]
	fn most_frequent_tie_goes_to_first_alphabetically() {
		let trie = trie_of(&["dog", "ant", "dog", "ant", "bee"]);
		assert_eq!(trie.most_frequent_word().as_deref(), Some("ant"));

		let trie = trie_of(&["ab", "a", "ab", "a"]);
		assert_eq!(trie.most_frequent_word().as_deref(), Some("a"));
	}

	#[test]
	fn successor_subtrie_is_created_once() {
		let mut trie = trie_of(&["i", "like"]);
		let node = trie.lookup_mut("i").unwrap();
		node.record_successor("like").unwrap();
		node.record_successor("like").unwrap();

		let subtrie = trie.lookup("i").unwrap().subtrie().unwrap();
		assert_eq!(subtrie.lookup("like").unwrap().count(), 2);
		assert!(trie.lookup("like").unwrap().subtrie().is_none());
		assert_eq!(trie.successor_len(), 1);
	}

	#[test]
	fn destroy_releases_every_node_once() {
		let mut trie = trie_of(&["the", "cat", "then"]);
		trie.lookup_mut("the").unwrap().record_successor("cat").unwrap();
		trie.lookup_mut("cat").unwrap().record_successor("the").unwrap();

		let nodes = trie.node_count();
		assert_eq!(trie.destroy(), nodes - 1);
		assert!(trie.is_empty());
		assert_eq!(trie.node_count(), 1);
		assert_eq!(trie.destroy(), 0);
	}

	#[test]
	fn very_long_word_is_handled_without_recursion() {
		let length = 300_000;
		let word = "a".repeat(length);
		let mut trie = Trie::new();
		trie.insert(&word).unwrap();
		trie.lookup_mut(&word).unwrap().record_successor(&word).unwrap();

		assert_eq!(trie.len(), 1);
		assert_eq!(trie.successor_len(), 1);
		assert_eq!(trie.most_frequent_word().map(|w| w.len()), Some(length));
		assert_eq!(trie.node_count(), 2 * (length + 1));
		assert_eq!(trie.destroy(), 2 * length + 1);
	}

	#[test]
	fn dropping_deep_trie_does_not_overflow() {
		let mut trie = Trie::new();
		trie.insert(&"z".repeat(300_000)).unwrap();
		drop(trie);
	}

	#[test]
	fn destroy_of_empty_trie_is_noop() {
		let mut trie = Trie::new();
		assert_eq!(trie.destroy(), 0);
		assert_eq!(trie.destroy(), 0);
	}
}
