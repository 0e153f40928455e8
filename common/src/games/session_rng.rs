use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::snake::Direction;

/// Seeded source for every random draw a game makes, so a seed replays a game.
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

    pub fn random_direction(&mut self) -> Direction {
        Direction::ALL[self.rng.random_range(0..Direction::ALL.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SessionRng::new(7);
        let mut b = SessionRng::new(7);
        for _ in 0..32 {
            assert_eq!(a.random_range(0..1000usize), b.random_range(0..1000usize));
            assert_eq!(a.random_direction(), b.random_direction());
        }
    }

    #[test]
    fn test_random_direction_covers_all_headings() {
        let mut rng = SessionRng::new(42);
        let mut seen = Vec::new();
        for _ in 0..200 {
            let direction = rng.random_direction();
            if !seen.contains(&direction) {
                seen.push(direction);
            }
        }
        assert_eq!(seen.len(), 4);
    }
}
