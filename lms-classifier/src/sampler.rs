//! Sources of row indices for stochastic updates.

use rand::{rngs::StdRng, Rng, SeedableRng};

pub trait IndexSampler {
    /// Returns an index in `0..n`. `n` is never zero.
    fn sample_index(&mut self, n: usize) -> usize;
}

impl<S: IndexSampler + ?Sized> IndexSampler for &mut S {
    fn sample_index(&mut self, n: usize) -> usize {
        (**self).sample_index(n)
    }
}

/// Uniform draws with replacement.
pub struct RandomSampler<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSampler<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> IndexSampler for RandomSampler<R> {
    fn sample_index(&mut self, n: usize) -> usize {
        self.rng.gen_range(0..n)
    }
}

/// Cycles 0, 1, ..., n-1, 0, 1, ...
#[derive(Debug, Default, Clone)]
pub struct RoundRobinSampler {
    next: usize,
}

impl RoundRobinSampler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IndexSampler for RoundRobinSampler {
    fn sample_index(&mut self, n: usize) -> usize {
        let index = self.next % n;
        self.next = index + 1;
        index
    }
}
