//! Linear-congruential uniform generator.
//!
//! The register is a 32-bit signed integer advanced with two's-complement
//! wraparound, so a given seed always yields the same sequence.

const MULTIPLIER: i32 = 843_314_861;
const INCREMENT: i32 = 453_816_693;

/// `2^(bits - 1)` for the 32-bit register.
pub const LIMIT: i64 = 1 << (i32::BITS - 1);

/// Uniform generator over `[0, 1]` driven by `y = y * A + C (mod 2^32)`.
///
/// Each instance owns its register; independent instances never share state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lcg32 {
    state: i32,
}

impl Default for Lcg32 {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Lcg32 {
    pub fn new(seed: i32) -> Self {
        Self { state: seed }
    }

    pub fn reset(&mut self, seed: i32) {
        self.state = seed;
    }

    pub fn state(&self) -> i32 {
        self.state
    }

    // advances the register and folds negative values into [0, LIMIT)
    fn advance(&mut self) -> i32 {
        let mut y = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        if y < 0 {
            y = (i64::from(y) + LIMIT) as i32;
        }
        self.state = y;
        y
    }

    /// Next value in `[0, LIMIT / (LIMIT - 1)]`, which is `[0, 1]` in practice
    /// since the folded register never exceeds `LIMIT - 1`.
    pub fn next_uniform(&mut self) -> f64 {
        f64::from(self.advance()) / (LIMIT - 1) as f64
    }
}
