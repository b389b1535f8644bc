//! Body-mass index calculation and banding.

use crate::constants::{
    BMI_NORMAL_LOWER, BMI_OVERWEIGHT_LOWER, WEIGHT_GAIN_BUNDLE, WEIGHT_MANAGEMENT_BUNDLE,
};
use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Weight classification derived from BMI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiBand {
    Underweight,
    Normal,
    Overweight,
}

impl BmiBand {
    /// Nutrients appended to the recommendation for this band.
    pub fn adjustment(self) -> &'static [&'static str] {
        match self {
            BmiBand::Overweight => &WEIGHT_MANAGEMENT_BUNDLE,
            BmiBand::Underweight => &WEIGHT_GAIN_BUNDLE,
            BmiBand::Normal => &[],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BmiBand::Underweight => "Underweight",
            BmiBand::Normal => "Normal",
            BmiBand::Overweight => "Overweight",
        }
    }
}

impl fmt::Display for BmiBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// BMI as `weight / (height / 100)^2`.
///
/// # Errors
///
/// Returns `CoreError::InvalidInput` if height is not strictly positive or either input is not
/// finite.
pub fn compute_bmi(height_cm: f64, weight_kg: f64) -> CoreResult<f64> {
    if !height_cm.is_finite() || !weight_kg.is_finite() {
        return Err(CoreError::InvalidInput(
            "height and weight must be finite numbers".into(),
        ));
    }
    if height_cm <= 0.0 {
        return Err(CoreError::InvalidInput(format!(
            "height must be positive, got {height_cm} cm"
        )));
    }

    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

/// Band for a BMI value. Each boundary belongs to the higher band.
///
/// `bmi` must be finite, as produced by [`compute_bmi`].
pub fn classify_bmi(bmi: f64) -> BmiBand {
    debug_assert!(bmi.is_finite(), "classify_bmi called with non-finite bmi {bmi}");
    if bmi < BMI_NORMAL_LOWER {
        BmiBand::Underweight
    } else if bmi < BMI_OVERWEIGHT_LOWER {
        BmiBand::Normal
    } else {
        BmiBand::Overweight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries_close_on_the_lower_edge() {
        assert_eq!(classify_bmi(18.49), BmiBand::Underweight);
        assert_eq!(classify_bmi(18.5), BmiBand::Normal);
        assert_eq!(classify_bmi(24.99), BmiBand::Normal);
        assert_eq!(classify_bmi(25.0), BmiBand::Overweight);
    }

    #[test]
    fn computes_bmi_for_typical_adult() {
        let bmi = compute_bmi(170.0, 70.0).expect("valid input");
        assert!((bmi - 24.2).abs() < 0.05, "bmi was {bmi}");
        assert_eq!(classify_bmi(bmi), BmiBand::Normal);
    }

    #[test]
    fn rejects_non_positive_height() {
        for height in [0.0, -170.0] {
            let err = compute_bmi(height, 70.0).expect_err("should reject height");
            assert!(matches!(err, CoreError::InvalidInput(msg) if msg.contains("positive")));
        }
    }

    #[test]
    fn rejects_non_finite_input() {
        assert!(compute_bmi(f64::NAN, 70.0).is_err());
        assert!(compute_bmi(170.0, f64::INFINITY).is_err());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "non-finite bmi")]
    fn classify_rejects_nan_in_debug_builds() {
        classify_bmi(f64::NAN);
    }

    #[test]
    fn adjustment_bundles_by_band() {
        assert_eq!(BmiBand::Overweight.adjustment(), &["CLA", "Green tea extract"]);
        assert_eq!(BmiBand::Underweight.adjustment(), &["Protein", "Zinc"]);
        assert!(BmiBand::Normal.adjustment().is_empty());
    }
}
