//! Configuration for a divination session.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Default minimum question length (in characters) before a reading can start.
pub const DEFAULT_MIN_QUESTION_CHARS: usize = 5;

/// Configuration for a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for reproducible draws. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Minimum question length for starting a reading.
    pub min_question_chars: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            min_question_chars: DEFAULT_MIN_QUESTION_CHARS,
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the minimum question length (at least 1).
    pub fn with_min_question_chars(mut self, min: usize) -> Self {
        self.min_question_chars = min.max(1);
        self
    }

    /// Build the random source for this configuration.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn default_config() {
        let cfg = SessionConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.min_question_chars, 5);
    }

    #[test]
    fn builder_methods() {
        let cfg = SessionConfig::default()
            .with_seed(7)
            .with_min_question_chars(10);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.min_question_chars, 10);
    }

    #[test]
    fn min_question_chars_clamped() {
        let cfg = SessionConfig::default().with_min_question_chars(0);
        assert_eq!(cfg.min_question_chars, 1);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let cfg = SessionConfig::default().with_seed(99);
        let a: u64 = cfg.rng().random();
        let b: u64 = cfg.rng().random();
        assert_eq!(a, b);
    }
}
