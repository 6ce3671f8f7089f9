use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the uniform choices a simulation makes (food placement, bot tie-breaks).
pub trait RandomSource {
    /// Uniform index in `0..len`. Callers never pass `len == 0`.
    fn next_index(&mut self, len: usize) -> usize;
}

pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }
}

impl RandomSource for SessionRng {
    fn next_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn next_index(&mut self, len: usize) -> usize {
        (**self).next_index(len)
    }
}

/// Replays a fixed list of indices, wrapping each into range; once exhausted it
/// always answers `0`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    picks: std::collections::VecDeque<usize>,
}

impl ScriptedRng {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }
}

impl RandomSource for ScriptedRng {
    fn next_index(&mut self, len: usize) -> usize {
        self.picks.pop_front().map_or(0, |pick| pick % len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SessionRng::new(7);
        let mut b = SessionRng::new(7);
        let first: Vec<usize> = (0..16).map(|_| a.next_index(400)).collect();
        let second: Vec<usize> = (0..16).map(|_| b.next_index(400)).collect();
        assert_eq!(first, second);
        assert_eq!(a.seed(), 7);
    }

    #[test]
    fn test_next_index_stays_in_range() {
        let mut rng = SessionRng::from_random();
        for len in 1..50 {
            assert!(rng.next_index(len) < len);
        }
    }

    #[test]
    fn test_scripted_rng_wraps_and_falls_back() {
        let mut rng = ScriptedRng::new([5, 1]);
        assert_eq!(rng.next_index(4), 1);
        assert_eq!(rng.next_index(4), 1);
        assert_eq!(rng.next_index(4), 0);
    }
}
