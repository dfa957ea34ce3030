/// Uniform index sampling — the single source of randomness for generation.

use rand::rngs::StdRng;
use rand::Rng;

/// Something that can pick a uniformly distributed index.
///
/// Generation never touches an rng directly; it asks for an index into a
/// successor list or into the corpus. Swapping the implementation lets
/// callers replay exact draw sequences.
pub trait IndexSampler {
    /// Return an index in `[0, len)`. `len` is always at least 1.
    fn sample_index(&mut self, len: usize) -> usize;
}

impl IndexSampler for StdRng {
    fn sample_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Replays a fixed list of draws, cycling when it runs out.
///
/// Each stored value is reduced modulo the requested length, so a script
/// of `[0]` always picks the first candidate.
#[derive(Debug, Clone)]
pub struct ReplaySampler {
    draws: Vec<usize>,
    position: usize,
}

impl ReplaySampler {
    pub fn new(draws: Vec<usize>) -> Self {
        Self { draws, position: 0 }
    }

    /// Number of draws taken so far.
    pub fn draws_taken(&self) -> usize {
        self.position
    }
}

impl IndexSampler for ReplaySampler {
    fn sample_index(&mut self, len: usize) -> usize {
        if self.draws.is_empty() {
            return 0;
        }
        let raw = self.draws[self.position % self.draws.len()];
        self.position += 1;
        raw % len
    }
}
