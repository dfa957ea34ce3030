/// Sequence generator — walks the n-gram tables with a longest-context-first
/// fallback chain.

use crate::core::ngram::NGramModel;
use crate::core::sampler::IndexSampler;

/// Which rule produced a generated token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// The opening token, drawn from the whole corpus.
    Seed,
    /// Followed the last three tokens.
    Trigram,
    /// Followed the last two tokens.
    Bigram,
    /// Followed the last token.
    Unigram,
    /// No context matched; drawn from the whole corpus.
    Random,
}

impl Tier {
    fn for_order(order: usize) -> Tier {
        match order {
            3 => Tier::Trigram,
            2 => Tier::Bigram,
            _ => Tier::Unigram,
        }
    }
}

/// Generated tokens together with the tier that produced each one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedSequence {
    pub tokens: Vec<String>,
    pub tiers: Vec<Tier>,
}

impl GeneratedSequence {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            tokens: Vec::with_capacity(capacity),
            tiers: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, token: String, tier: Tier) {
        log::trace!("{:?} -> {:?}", tier, token);
        self.tokens.push(token);
        self.tiers.push(tier);
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Generate `length + 1` tokens: a random seed token followed by `length`
/// sampled successors.
pub fn generate_sequence<S>(model: &NGramModel, length: usize, sampler: &mut S) -> Vec<String>
where
    S: IndexSampler + ?Sized,
{
    generate_traced(model, length, sampler).tokens
}

/// Like [`generate_sequence`], also recording which tier produced each token.
pub fn generate_traced<S>(model: &NGramModel, length: usize, sampler: &mut S) -> GeneratedSequence
where
    S: IndexSampler + ?Sized,
{
    let mut sequence = GeneratedSequence::with_capacity(length + 1);
    sequence.push(random_corpus_token(model, sampler), Tier::Seed);

    for _ in 0..length {
        let (token, tier) = next_token(model, &sequence.tokens, sampler);
        sequence.push(token, tier);
    }

    log::debug!(
        "Generated {} tokens ({} random restarts)",
        sequence.len(),
        sequence.tiers.iter().filter(|t| **t == Tier::Random).count()
    );

    sequence
}

/// Pick the next token for `generated`, trying the longest enabled context
/// first and ending with a uniform pick from the corpus.
fn next_token<S>(model: &NGramModel, generated: &[String], sampler: &mut S) -> (String, Tier)
where
    S: IndexSampler + ?Sized,
{
    for order in (1..=model.max_order()).rev() {
        if generated.len() < order {
            continue;
        }
        let tail = &generated[generated.len() - order..];
        let successors = model
            .table(order)
            .and_then(|table| table.successors(tail))
            .filter(|s| !s.is_empty());
        if let Some(successors) = successors {
            let pick = successors[sampler.sample_index(successors.len())].clone();
            return (pick, Tier::for_order(order));
        }
    }

    (random_corpus_token(model, sampler), Tier::Random)
}

fn random_corpus_token<S>(model: &NGramModel, sampler: &mut S) -> String
where
    S: IndexSampler + ?Sized,
{
    let corpus = model.corpus();
    corpus[sampler.sample_index(corpus.len())].clone()
}
