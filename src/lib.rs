//! Markov Text — word-level n-gram text generation.
//!
//! Learns which words follow which from a body of text, then walks those
//! observations to produce new text, preferring the longest known context
//! and falling back to shorter ones (and finally to a random word).

pub mod core;
pub mod schema;
