/// N-gram model — successor tables for contexts of one, two and three words.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::core::tokenizer::tokenize;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("training data is empty (no tokens to learn from)")]
    TrainingDataEmpty,
}

/// Longest context the model can learn.
pub const MAX_ORDER: usize = 3;

/// Join context tokens into a table key.
pub fn context_key(context: &[String]) -> String {
    context.join(" ")
}

/// Successors observed after each context of a fixed length.
///
/// Successor lists keep duplicates: a word seen five times after a context
/// appears five times, so picking a uniform index is a frequency-weighted
/// pick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NGramTable {
    order: usize,
    entries: FxHashMap<String, Vec<String>>,
}

impl NGramTable {
    pub fn new(order: usize) -> Self {
        Self {
            order,
            entries: FxHashMap::default(),
        }
    }

    /// Context length this table is keyed by.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Record `successor` as having followed `context`. The context must be
    /// exactly `order` tokens long.
    pub(crate) fn insert_successor(&mut self, context: &[String], successor: String) {
        debug_assert_eq!(
            context.len(),
            self.order,
            "context length must match table order"
        );
        self.entries
            .entry(context_key(context))
            .or_default()
            .push(successor);
    }

    /// Successors for a context, if it was ever seen with one.
    pub fn successors(&self, context: &[String]) -> Option<&[String]> {
        if context.len() != self.order {
            return None;
        }
        self.successors_for_key(&context_key(context))
    }

    /// Successors for an already-joined context key.
    pub fn successors_for_key(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Number of distinct contexts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of recorded successors across all contexts.
    pub fn successor_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// All context keys, in no particular order.
    pub fn contexts(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Size summary of one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStats {
    pub order: usize,
    pub contexts: usize,
    pub successors: usize,
}

/// Size summary of a whole model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelStats {
    pub corpus_tokens: usize,
    pub tables: Vec<TableStats>,
}

/// A trained model: the corpus plus one table per enabled order.
///
/// Tables are filled once during construction and never change afterwards.
#[derive(Debug, Clone)]
pub struct NGramModel {
    corpus: Vec<String>,
    /// Index `k - 1` holds the order-`k` table.
    tables: Vec<NGramTable>,
}

impl NGramModel {
    /// Tokenize `text` and learn from it.
    pub fn train(text: &str, trigrams_enabled: bool) -> Result<Self, ModelError> {
        Self::from_tokens(tokenize(text), trigrams_enabled)
    }

    /// Learn from an already tokenized corpus.
    pub fn from_tokens(corpus: Vec<String>, trigrams_enabled: bool) -> Result<Self, ModelError> {
        if corpus.is_empty() {
            return Err(ModelError::TrainingDataEmpty);
        }

        let max_order = if trigrams_enabled { MAX_ORDER } else { 2 };
        let tables = build_tables(&corpus, max_order);

        log::info!(
            "Learned from {} tokens: {}",
            corpus.len(),
            tables
                .iter()
                .map(|t| format!("order {} = {} contexts", t.order(), t.len()))
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(Self { corpus, tables })
    }

    /// The full token sequence the model was trained on. Never empty.
    pub fn corpus(&self) -> &[String] {
        &self.corpus
    }

    pub fn trigrams_enabled(&self) -> bool {
        self.tables.len() == MAX_ORDER
    }

    /// Highest enabled order.
    pub fn max_order(&self) -> usize {
        self.tables.len()
    }

    /// The table for contexts of `order` words, if that order is enabled.
    pub fn table(&self, order: usize) -> Option<&NGramTable> {
        if order == 0 {
            return None;
        }
        self.tables.get(order - 1)
    }

    pub fn stats(&self) -> ModelStats {
        ModelStats {
            corpus_tokens: self.corpus.len(),
            tables: self
                .tables
                .iter()
                .map(|t| TableStats {
                    order: t.order(),
                    contexts: t.len(),
                    successors: t.successor_count(),
                })
                .collect(),
        }
    }
}

/// Build tables for orders `1..=max_order` in a single pass over the corpus.
fn build_tables(tokens: &[String], max_order: usize) -> Vec<NGramTable> {
    let mut tables: Vec<NGramTable> = (1..=max_order).map(NGramTable::new).collect();

    for i in 0..tokens.len() {
        for table in tables.iter_mut() {
            let k = table.order();
            if i + k < tokens.len() {
                table.insert_successor(&tokens[i..i + k], tokens[i + k].clone());
            }
        }
    }

    tables
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(s: &[&str]) -> Vec<String> {
        s.iter().map(|w| w.to_string()).collect()
    }

    fn example_model(trigrams: bool) -> NGramModel {
        NGramModel::train("the cat sat. the dog ran.", trigrams).unwrap()
    }

    #[test]
    fn empty_training_data_is_rejected() {
        assert!(matches!(
            NGramModel::train("", false),
            Err(ModelError::TrainingDataEmpty)
        ));
        assert!(matches!(
            NGramModel::train("  \n\t ", true),
            Err(ModelError::TrainingDataEmpty)
        ));
    }

    #[test]
    fn unigram_table_collects_all_successors() {
        let model = example_model(false);
        let unigrams = model.table(1).unwrap();
        assert_eq!(
            unigrams.successors(&words(&["the"])).unwrap(),
            &words(&["cat", "dog"])[..]
        );
        assert_eq!(
            unigrams.successors(&words(&["sat."])).unwrap(),
            &words(&["the"])[..]
        );
        // Final token never starts a context.
        assert!(unigrams.successors(&words(&["ran."])).is_none());
        assert_eq!(unigrams.len(), 4);
    }

    #[test]
    fn bigram_table_uses_two_word_contexts() {
        let model = example_model(false);
        let bigrams = model.table(2).unwrap();
        assert_eq!(
            bigrams.successors(&words(&["the", "cat"])).unwrap(),
            &words(&["sat."])[..]
        );
        assert_eq!(
            bigrams.successors(&words(&["the", "dog"])).unwrap(),
            &words(&["ran."])[..]
        );
        assert_eq!(bigrams.successors_for_key("cat sat."), Some(&words(&["the"])[..]));
        assert!(bigrams.successors(&words(&["dog", "ran."])).is_none());
        assert_eq!(bigrams.len(), 4);
    }

    #[test]
    fn trigram_table_is_gated() {
        let without = example_model(false);
        assert!(!without.trigrams_enabled());
        assert!(without.table(3).is_none());
        assert_eq!(without.max_order(), 2);

        let with = example_model(true);
        assert!(with.trigrams_enabled());
        let trigrams = with.table(3).unwrap();
        assert_eq!(
            trigrams.successors(&words(&["the", "cat", "sat."])).unwrap(),
            &words(&["the"])[..]
        );
        assert_eq!(
            trigrams.successors(&words(&["sat.", "the", "dog"])).unwrap(),
            &words(&["ran."])[..]
        );
        assert_eq!(trigrams.len(), 3);
    }

    #[test]
    fn duplicates_encode_frequency() {
        let model = NGramModel::train("a b a b a c", false).unwrap();
        let unigrams = model.table(1).unwrap();
        assert_eq!(
            unigrams.successors(&words(&["a"])).unwrap(),
            &words(&["b", "b", "c"])[..]
        );
        assert_eq!(unigrams.successor_count(), 5);
    }

    #[test]
    fn every_context_has_successors() {
        let model = NGramModel::train("one fish two fish red fish blue fish", true).unwrap();
        for order in 1..=3 {
            let table = model.table(order).unwrap();
            for key in table.contexts() {
                assert!(!table.successors_for_key(key).unwrap().is_empty());
            }
        }
    }

    #[test]
    fn building_is_deterministic() {
        let text = "it was the best of times it was the worst of times";
        let a = NGramModel::train(text, true).unwrap();
        let b = NGramModel::train(text, true).unwrap();
        for order in 1..=3 {
            assert_eq!(a.table(order), b.table(order));
        }
    }

    #[test]
    fn single_token_corpus_has_empty_tables() {
        let model = NGramModel::train("alone", true).unwrap();
        assert_eq!(model.corpus(), &words(&["alone"])[..]);
        for order in 1..=3 {
            assert!(model.table(order).unwrap().is_empty());
        }
    }

    #[test]
    fn wrong_length_context_misses() {
        let model = example_model(false);
        assert!(model.table(2).unwrap().successors(&words(&["the"])).is_none());
        assert!(model.table(0).is_none());
    }

    #[test]
    fn insert_successor_appends_in_order() {
        let mut table = NGramTable::new(2);
        table.insert_successor(&words(&["red", "fish"]), "swims".to_string());
        table.insert_successor(&words(&["red", "fish"]), "sleeps".to_string());
        table.insert_successor(&words(&["red", "fish"]), "swims".to_string());
        assert_eq!(
            table.successors_for_key("red fish").unwrap(),
            &words(&["swims", "sleeps", "swims"])[..]
        );
        assert_eq!(table.len(), 1);
        assert_eq!(table.successor_count(), 3);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "context length must match table order")]
    fn insert_successor_checks_context_length_in_debug() {
        let mut table = NGramTable::new(2);
        table.insert_successor(&words(&["red"]), "fish".to_string());
    }

    #[test]
    fn stats_report_sizes() {
        let stats = example_model(true).stats();
        assert_eq!(stats.corpus_tokens, 6);
        assert_eq!(
            stats.tables,
            vec![
                TableStats { order: 1, contexts: 4, successors: 5 },
                TableStats { order: 2, contexts: 4, successors: 4 },
                TableStats { order: 3, contexts: 3, successors: 3 },
            ]
        );
    }
}
