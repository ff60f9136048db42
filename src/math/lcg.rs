/// Multiplier of the linear congruential generator.
pub const LCG_MULTIPLIER: u32 = 1_664_525;

/// Increment of the linear congruential generator.
pub const LCG_INCREMENT: u32 = 1_013_904_223;

/// Modulus of the linear congruential generator (`2^32`).
pub const LCG_MODULUS: f64 = 4_294_967_296.0;

/// Small seeded pseudo-random generator with a fixed, portable sequence.
///
/// `state = (a * state + c) mod 2^32`, and each draw returns `state / 2^32`
/// in `[0, 1)`. The modulus is realised by wrapping `u32` arithmetic, so the
/// sequence is identical on every platform.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    /// Creates a generator starting from `seed`.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advances the generator and returns a value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        f64::from(self.state) / LCG_MODULUS
    }

    /// Returns a value in `[start, start + len)`.
    ///
    /// `len` must be non-zero.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn next_index(&mut self, start: usize, len: usize) -> usize {
        let offset = (self.next_f64() * len as f64).floor() as usize;
        start + offset.min(len - 1)
    }
}
