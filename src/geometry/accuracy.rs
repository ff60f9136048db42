use std::sync::Once;

use tracing::warn;

/// Number of polyline segments per accuracy level (`Δt = 1 / count`).
///
/// Levels map to `Δt` = 0.2, 0.1, 0.05, 0.04, 0.02, 0.01, 0.008, 0.002,
/// 0.001, 0.0005 and 0.0001.
const SEGMENTS: [u32; 11] = [5, 10, 20, 25, 50, 100, 125, 500, 1000, 2000, 10000];

static CLAMP_WARNING: Once = Once::new();

/// Tessellation density level, from `0` (coarsest) to `10` (finest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Accuracy(u8);

impl Default for Accuracy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Accuracy {
    /// Coarsest level.
    pub const MIN: Self = Self(0);

    /// Finest level.
    pub const MAX: Self = Self(10);

    /// Level used when none is given.
    pub const DEFAULT: Self = Self(7);

    /// Coarsest level dense enough for dashed strokes (`Δt = 0.008`).
    pub const DASH_MIN: Self = Self(6);

    /// Creates an accuracy level, clamping out-of-range values to `0..=10`.
    ///
    /// The first clamp in a process logs a warning.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(level: i32) -> Self {
        let clamped = level.clamp(i32::from(Self::MIN.0), i32::from(Self::MAX.0));
        if clamped != level {
            CLAMP_WARNING.call_once(|| {
                warn!(level, clamped, "accuracy level out of range, clamping");
            });
        }
        Self(clamped as u8)
    }

    /// Returns the level.
    #[must_use]
    pub fn level(self) -> u8 {
        self.0
    }

    /// Returns the number of parameter steps between `t = 0` and `t = 1`.
    #[must_use]
    pub fn segments(self) -> u32 {
        SEGMENTS[usize::from(self.0)]
    }

    /// Returns the parameter step `Δt`.
    #[must_use]
    pub fn step(self) -> f64 {
        1.0 / f64::from(self.segments())
    }

    /// Returns whether this level is dense enough for dashed strokes.
    #[must_use]
    pub fn supports_dash(self) -> bool {
        self >= Self::DASH_MIN
    }
}
