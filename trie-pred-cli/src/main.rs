use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::Parser;
use log::info;

/// Word prediction from a training corpus.
///
/// Builds a trie of the corpus words, with the successors of every word,
/// then answers each command of the command file:
/// - `!` prints every word with its count
/// - `@ <seed> <n>` prints up to `n` predicted words after `seed`
/// - any other word prints the words that followed it in the corpus
#[derive(Parser, Debug)]
#[command(name = "trie-pred", version, about, long_about = None)]
struct Args {
	/// Training corpus (plain text)
	#[arg(value_name = "CORPUS")]
	corpus: PathBuf,

	/// Command file
	#[arg(value_name = "COMMANDS")]
	commands: PathBuf,
}

/// Main entry point.
///
/// The report goes to stdout, logs (`RUST_LOG`) go to stderr.
/// Any I/O failure stops the run with a non-zero exit code.
fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::init();
	let args = Args::parse();

	let stdout = io::stdout();
	trie_pred_core::run(&args.corpus, &args.commands, BufWriter::new(stdout.lock()))?;

	info!("Done");
	Ok(())
}
