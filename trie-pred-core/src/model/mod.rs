//! Top-level module for the word prediction model.
//!
//! This module provides the trie-of-tries language model, including:
//! - The prefix tree itself with its per-word successor sub-tries (`Trie`)
//! - Token normalization and sentence boundary detection (`tokenizer`)
//! - Corpus ingestion (`CorpusBuilder`)
//! - Successor-chain prediction (`Predictor`)
//! - Command parsing and execution (`Command`, `QueryEngine`)

/// 26-way prefix tree where every word node may own a successor sub-trie.
///
/// Supports insertion, lookup, frequency-maximizing search, alphabetical
/// dumps and explicit post-order destruction.
pub mod trie;

/// Raw token normalization and sentence boundary detection.
pub mod tokenizer;

/// Corpus ingestion state machine.
///
/// Inserts every word in the main trie and records within-sentence
/// successors in the previous word's sub-trie.
pub mod corpus;

/// Successor-chain prediction starting from a seed word.
pub mod predictor;

/// Command language (`!`, `@ seed n`, lookup word) and its executor.
pub mod query;
