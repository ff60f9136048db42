use crate::error::{Result, ShapeError};

/// Solid/gap lengths of a dashed stroke, measured along the curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashPattern {
    solid: f64,
    gap: f64,
}

impl DashPattern {
    /// Creates a new dash pattern. Negative lengths are taken by magnitude.
    ///
    /// # Errors
    ///
    /// Returns an error if either length is not finite, or both are zero.
    pub fn new(solid: f64, gap: f64) -> Result<Self> {
        if !solid.is_finite() || !gap.is_finite() {
            return Err(ShapeError::InvalidDashPattern(
                "dash lengths must be finite".to_owned(),
            )
            .into());
        }
        let (solid, gap) = (solid.abs(), gap.abs());
        if solid + gap <= 0.0 {
            return Err(ShapeError::InvalidDashPattern(
                "a dash period must have positive length".to_owned(),
            )
            .into());
        }
        Ok(Self { solid, gap })
    }

    /// Returns the length of each drawn run.
    #[must_use]
    pub fn solid(&self) -> f64 {
        self.solid
    }

    /// Returns the length skipped between runs.
    #[must_use]
    pub fn gap(&self) -> f64 {
        self.gap
    }

    /// Returns `solid + gap`.
    #[must_use]
    pub fn period(&self) -> f64 {
        self.solid + self.gap
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_with_valid_lengths() {
        let dash = DashPattern::new(20.0, 10.0).unwrap();
        assert!((dash.solid() - 20.0).abs() < f64::EPSILON);
        assert!((dash.gap() - 10.0).abs() < f64::EPSILON);
        assert!((dash.period() - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn negative_lengths_use_magnitude() {
        let dash = DashPattern::new(-4.0, -2.0).unwrap();
        assert!((dash.solid() - 4.0).abs() < f64::EPSILON);
        assert!((dash.gap() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_period_fails() {
        assert!(DashPattern::new(0.0, 0.0).is_err());
    }

    #[test]
    fn non_finite_fails() {
        assert!(DashPattern::new(f64::NAN, 1.0).is_err());
        assert!(DashPattern::new(1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn zero_gap_is_allowed() {
        assert!(DashPattern::new(5.0, 0.0).is_ok());
    }
}
