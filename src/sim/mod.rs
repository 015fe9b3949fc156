//! Stochastic drops: one concrete fall per call, its score, and aggregate
//! statistics over many drops.

pub mod fall;
pub mod score;
pub mod stats;

pub use fall::{simulate_fall, simulate_fall_and_score, Fall, ScoredFall};
pub use score::score_outcome;
pub use stats::{run_trials, DropStats};

/// Deterministic RNG for tests: every `u64` draw returns `value`, and draws
/// are counted.
#[cfg(test)]
pub(crate) struct FixedRng {
    pub value: u64,
    pub draws: usize,
}

#[cfg(test)]
impl FixedRng {
    /// Every `random::<f64>()` draw is 0.0, so the left branch is preferred.
    pub fn left() -> Self {
        FixedRng { value: 0, draws: 0 }
    }

    /// Every `random::<f64>()` draw is just below 1.0, so the right branch is preferred.
    pub fn right() -> Self {
        FixedRng {
            value: u64::MAX,
            draws: 0,
        }
    }
}

#[cfg(test)]
impl rand::RngCore for FixedRng {
    fn next_u32(&mut self) -> u32 {
        self.draws += 1;
        (self.value >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.draws += 1;
        self.value
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.draws += 1;
        dst.fill(self.value as u8);
    }
}
