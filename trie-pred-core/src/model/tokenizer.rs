/// Characters closing a sentence when they end a raw token.
const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Keeps only the ASCII letters of `raw`, lowercased, in their original order.
///
/// Digits, punctuation, symbols and non-ASCII characters are dropped, so the
/// result may be empty.
pub fn normalize(raw: &str) -> String {
	raw.chars()
		.filter(char::is_ascii_alphabetic)
		.map(|c| c.to_ascii_lowercase())
		.collect()
}

/// Returns `true` if the raw (not yet normalized) token closes a sentence.
pub fn ends_sentence(raw: &str) -> bool {
	raw.chars()
		.next_back()
		.is_some_and(|last| SENTENCE_TERMINATORS.contains(&last))
}
