use std::io::Write;
use std::iter::Peekable;

use log::{debug, warn};

use super::predictor::Predictor;
use super::trie::{DumpStyle, Trie};
use crate::error::Result;

/// Line printed when a looked up word is not in the model.
const INVALID_STRING: &str = "(INVALID STRING)";
/// Line printed when a looked up word was never followed by anything.
const EMPTY: &str = "(EMPTY)";

/// A command read from the command stream.
///
/// The first character of a command token selects the command:
/// - `!` dumps the whole main trie
/// - `@` reads a seed word and a count, then predicts
/// - anything else looks the token up and dumps its successors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
	DumpAll,
	Predict { seed: String, count: usize },
	Lookup(String),
}

impl Command {
	/// Reads the next command from a token stream.
	///
	/// Returns `None` once the stream is exhausted, including when a `@`
	/// command has no seed word left. A missing or negative count is read
	/// as 0. A non-numeric count is read as 0 too and is left in the stream,
	/// where it becomes the next command.
	pub fn next_from<I>(tokens: &mut Peekable<I>) -> Option<Command>
	where
		I: Iterator<Item = String>,
	{
		let token = tokens.next()?;

		match token.chars().next() {
			Some('!') => Some(Command::DumpAll),
			Some('@') => {
				let Some(seed) = tokens.next() else {
					warn!("Command stream ends inside a prediction command");
					return None;
				};
				let count = match tokens.next_if(|raw| raw.parse::<i64>().is_ok()) {
					Some(raw) => Self::parse_count(&raw),
					None => {
						warn!("Prediction for {seed:?} has no numeric count, using 0");
						0
					}
				};
				Some(Command::Predict { seed, count })
			}
			_ => Some(Command::Lookup(token)),
		}
	}

	fn parse_count(raw: &str) -> usize {
		raw.parse::<i64>()
			.ok()
			.and_then(|count| usize::try_from(count).ok())
			.unwrap_or(0)
	}
}

/// Executes commands against a finished model and writes the report.
///
/// Report format:
/// - Dump: one `<word> (<count>)` line per word, alphabetically
/// - Prediction: the seed as read, then each predicted word, space separated
/// - Lookup: the word as read, then `(INVALID STRING)`, `(EMPTY)` or the
///   dump of its successors with every line prefixed by `"- "`
pub struct QueryEngine<'a, W: Write> {
	trie: &'a Trie,
	predictor: Predictor<'a>,
	out: W,
}

impl<'a, W: Write> QueryEngine<'a, W> {
	/// Creates an engine reading `trie` and writing to `out`.
	pub fn new(trie: &'a Trie, out: W) -> Self {
		Self { trie, predictor: Predictor::new(trie), out }
	}

	/// Executes one command.
	///
	/// # Errors
	/// Only write failures are errors; unknown words and short prediction
	/// chains are part of the report.
	pub fn execute(&mut self, command: &Command) -> Result<()> {
		debug!("Executing {command:?}");

		match command {
			Command::DumpAll => self.trie.dump(&mut self.out, DumpStyle::Main)?,
			Command::Predict { seed, count } => {
				write!(self.out, "{seed}")?;
				for word in self.predictor.predict(seed, *count) {
					write!(self.out, " {word}")?;
				}
				writeln!(self.out)?;
			}
			Command::Lookup(word) => {
				writeln!(self.out, "{word}")?;
				match self.trie.lookup(word) {
					None => writeln!(self.out, "{INVALID_STRING}")?,
					Some(node) => match node.subtrie() {
						None => writeln!(self.out, "{EMPTY}")?,
						Some(subtrie) => subtrie.dump(&mut self.out, DumpStyle::Subtrie)?,
					},
				}
			}
		}

		Ok(())
	}

	/// Executes every command of a token stream, in order.
	pub fn run<I>(&mut self, tokens: I) -> Result<()>
	where
		I: IntoIterator<Item = String>,
	{
		let mut tokens = tokens.into_iter().peekable();
		while let Some(command) = Command::next_from(&mut tokens) {
			self.execute(&command)?;
		}
		Ok(())
	}

	/// Flushes the report destination.
	pub fn flush(&mut self) -> Result<()> {
		self.out.flush()?;
		Ok(())
	}

	/// Returns the report destination.
	pub fn into_inner(self) -> W {
		self.out
	}
}
