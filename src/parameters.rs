//! Tunable constants of the normalization pipeline and the angular search.

#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// Recognizer configuration.
///
/// Mouse-drawn strokes and accelerometer-derived paths need different
/// precision/performance trade-offs, so none of these are hard-coded.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Parameters {
    /// Number of points every gesture path is resampled to.
    pub resample_count: usize,
    /// Side length of the square every gesture path is scaled into.
    pub square_size: f64,
    /// Half-width of the rotation search bracket, in radians.
    pub angle_range: f64,
    /// Bracket width at which the rotation search stops, in radians.
    pub angle_precision: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            resample_count: 64,
            square_size: 250.0,
            angle_range: 45.0_f64.to_radians(),
            angle_precision: 2.0_f64.to_radians(),
        }
    }
}

impl Parameters {
    /// Half the diagonal of the normalizing square, the reference length
    /// that turns a raw alignment distance into a similarity score.
    pub fn half_diagonal(&self) -> f64 {
        0.5 * (2.0 * self.square_size * self.square_size).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn default_half_diagonal() {
        let params = Parameters::default();
        assert_abs_diff_eq!(params.half_diagonal(), 176.7766952966369, epsilon = 1e-9);
    }

    #[test]
    fn default_angles_are_radians() {
        let params = Parameters::default();
        assert_abs_diff_eq!(params.angle_range, std::f64::consts::PI / 4.0, epsilon = 1e-12);
        assert!(params.angle_precision < params.angle_range);
    }
}
