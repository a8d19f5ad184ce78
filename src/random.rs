use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of sort keys for mine placement. One draw per candidate cell.
pub trait Randomizer {
    fn next(&mut self) -> u32;
}

/// A randomizer backed by an OS-seeded [`StdRng`].
pub struct StdRandomizer {
    rng: StdRng,
}

impl StdRandomizer {
    pub fn new() -> Self {
        StdRandomizer {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for StdRandomizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Randomizer for StdRandomizer {
    fn next(&mut self) -> u32 {
        self.rng.random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_std_randomizer_produces_varied_keys() {
        let mut randomizer = StdRandomizer::new();
        let keys: Vec<u32> = (0..100).map(|_| randomizer.next()).collect();

        // 100 identical u32 draws from a healthy RNG is beyond astronomically
        // unlikely; this catches a stuck source.
        assert!(keys.iter().any(|&k| k != keys[0]));
    }
}
