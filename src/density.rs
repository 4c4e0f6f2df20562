//! Density-dependent size scaling.
//!
//! UI sizes are authored for a baseline display of 160 pixels per inch.
//! Displays below 120 ppi keep sizes as authored; everything else is
//! scaled linearly by `ppi / 160`.
//!
//! The density factor is whatever the UI toolkit reports for the screen
//! (pixels per millimetre); it is multiplied by [`MM_PER_INCH`] to get the
//! ppi figure used for the decision. No validation is performed: zero,
//! negative and non-finite factors run through the same arithmetic.
//!
//! # Example
//!
//! ```rust
//! use skypuff_style::dp;
//!
//! // 25.4 ppi is below the threshold, size is untouched
//! assert_eq!(dp(1.0, 100.0), 100.0);
//!
//! // 254 ppi scales by 254 / 160
//! assert_eq!(dp(10.0, 100.0), 158.75);
//! ```

/// Millimetres per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Displays with a ppi strictly below this value are not scaled.
pub const SCALE_THRESHOLD_PPI: f64 = 120.0;

/// The ppi that authored sizes are expressed against.
pub const BASELINE_PPI: f64 = 160.0;

/// Scales `x` for a screen with the given density factor.
///
/// Returns `x` unchanged when `pixel_density * 25.4 < 120`, and
/// `x * (pixel_density * 25.4 / 160)` otherwise.
pub fn dp(pixel_density: f64, x: f64) -> f64 {
    Density::new(pixel_density).scale(x)
}

/// A screen density factor as reported by the UI toolkit.
///
/// Wraps the raw factor so callers that size many elements for the same
/// screen can hold on to it instead of passing bare floats around.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Density(f64);

impl Density {
    pub const fn new(pixel_density: f64) -> Self {
        Self(pixel_density)
    }

    /// The raw density factor.
    pub const fn factor(self) -> f64 {
        self.0
    }

    /// Pixels per inch derived from the factor.
    pub fn ppi(self) -> f64 {
        self.0 * MM_PER_INCH
    }

    /// Whether sizes are scaled on this screen.
    ///
    /// A NaN ppi is not below the threshold, so it counts as scaled.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn is_scaled(self) -> bool {
        !(self.ppi() < SCALE_THRESHOLD_PPI)
    }

    /// Scales a size authored against [`BASELINE_PPI`].
    pub fn scale(self, x: f64) -> f64 {
        let ppi = self.ppi();
        if ppi < SCALE_THRESHOLD_PPI {
            x
        } else {
            x * (ppi / BASELINE_PPI)
        }
    }
}

impl From<f64> for Density {
    fn from(pixel_density: f64) -> Self {
        Self::new(pixel_density)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn below_threshold_returns_size_unchanged(
            pixel_density in -100.0f64..4.7,
            x in -1.0e6f64..1.0e6,
        ) {
            prop_assume!(pixel_density * MM_PER_INCH < SCALE_THRESHOLD_PPI);
            prop_assert_eq!(dp(pixel_density, x), x);
        }

        #[test]
        fn at_or_above_threshold_scales_linearly(
            pixel_density in 4.8f64..100.0,
            x in -1.0e6f64..1.0e6,
        ) {
            prop_assume!(pixel_density * MM_PER_INCH >= SCALE_THRESHOLD_PPI);
            let expected = x * (pixel_density * MM_PER_INCH / BASELINE_PPI);
            prop_assert_eq!(dp(pixel_density, x), expected);
        }

        #[test]
        fn density_scale_matches_dp(
            pixel_density in -50.0f64..50.0,
            x in -1.0e3f64..1.0e3,
        ) {
            prop_assert_eq!(Density::new(pixel_density).scale(x), dp(pixel_density, x));
        }
    }
}
