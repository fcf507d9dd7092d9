//! Injectable randomness for draws.

use rand::Rng;
use rand::rngs::StdRng;

/// Source of the two random decisions a draw makes: which remaining card,
/// and which way up.
pub trait RandomSource {
    /// A uniform index in `0..upper`. `upper` is never zero.
    fn next_index(&mut self, upper: usize) -> usize;

    /// A fair coin flip.
    fn next_bool(&mut self) -> bool;
}

impl RandomSource for StdRng {
    fn next_index(&mut self, upper: usize) -> usize {
        self.random_range(0..upper)
    }

    fn next_bool(&mut self) -> bool {
        self.random_bool(0.5)
    }
}

/// A source that replays fixed answers, for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ScriptedSource {
    indices: std::collections::VecDeque<usize>,
    flips: std::collections::VecDeque<bool>,
}

#[cfg(test)]
impl ScriptedSource {
    pub(crate) fn new(indices: &[usize], flips: &[bool]) -> Self {
        Self {
            indices: indices.iter().copied().collect(),
            flips: flips.iter().copied().collect(),
        }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn next_index(&mut self, upper: usize) -> usize {
        self.indices.pop_front().unwrap_or(0) % upper
    }

    fn next_bool(&mut self) -> bool {
        self.flips.pop_front().unwrap_or(false)
    }
}
