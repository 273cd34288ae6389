use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Source of the permutation applied before each stable sort, so exactly equal
/// scores end up in a uniformly random order.
pub trait TieBreaker {
    fn shuffle<T>(&mut self, items: &mut [T]);
}

/// Uniform shuffle backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomTieBreaker<R> {
    rng: R,
}

impl<R: Rng> RandomTieBreaker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomTieBreaker<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> TieBreaker for RandomTieBreaker<R> {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

/// Leaves items as they are; ties resolve in input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputOrder;

impl TieBreaker for InputOrder {
    fn shuffle<T>(&mut self, _items: &mut [T]) {}
}
