use std::io;

use trie_pred_core::{Command, CorpusBuilder, DumpStyle, Predictor, QueryEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Feed the corpus token by token, a token ending with '.', '!' or '?'
    // closes the sentence
    let mut builder = CorpusBuilder::new();
    builder.feed_all("I like cats. I like dogs! Do you like cats? Cats like fish.".split_whitespace())?;

    // The trie can only be queried once the builder is finished
    let trie = builder.finish();

    // Every word with its count, alphabetically
    trie.dump(&mut io::stdout(), DumpStyle::Main)?;

    // Words that followed "like", prefixed with "- "
    if let Some(subtrie) = trie.lookup("like").and_then(|node| node.subtrie()) {
        subtrie.dump(&mut io::stdout(), DumpStyle::Subtrie)?;
    }

    // The most frequent successor chain after "i"
    let predictor = Predictor::new(&trie);
    println!("Prediction: i {}", predictor.predict("i", 4).join(" "));

    // Typed commands go through the query engine
    let mut engine = QueryEngine::new(&trie, io::stdout());
    engine.execute(&Command::Predict { seed: "do".to_owned(), count: 3 })?;
    engine.execute(&Command::Lookup("fish".to_owned()))?;
    engine.execute(&Command::Lookup("bird".to_owned()))?;
    engine.flush()?;

    Ok(())
}
