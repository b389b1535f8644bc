//! Per-nutrient rationale text.

use crate::constants::FALLBACK_RATIONALE;
use serde::Serialize;

static RATIONALES: &[(&str, &str)] = &[
    ("Vitamin B complex", "fatigue recovery, energy metabolism, nervous system stability"),
    ("Zinc", "immune function, wound healing, liver support"),
    ("L-carnitine", "fat metabolism, reduced fatigue"),
    ("Coenzyme Q10", "cardiovascular health, cellular energy production"),
    ("Magnesium", "muscle relaxation, stress relief, blood pressure regulation"),
    ("Taurine", "liver detoxification, stable heart function"),
    ("Probiotics", "gut health, stronger immunity"),
    ("Digestive enzymes", "digestion, nutrient absorption"),
    ("Vitamin B1", "carbohydrate metabolism, nerve function"),
    ("Vitamin C", "antioxidant protection, stronger immunity"),
    ("Vitamin D", "bone health, immune function"),
    ("Omega-3", "healthier blood cholesterol, reduced inflammation"),
    ("Vitamin E", "cell protection, slower ageing"),
    ("Selenium", "antioxidant protection, thyroid support"),
    ("Potassium", "blood pressure control, fluid balance"),
    ("Chromium", "blood sugar regulation"),
    ("CLA", "body fat reduction"),
    ("Green tea extract", "fat metabolism, antioxidant protection"),
    ("Protein", "muscle maintenance, healthy weight gain"),
];

/// A recommended nutrient with the reason it is suggested.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NutrientEntry {
    pub name: String,
    pub rationale: &'static str,
}

impl NutrientEntry {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let rationale = rationale_for(&name);
        Self { name, rationale }
    }
}

/// Rationale for a nutrient; exact name match, falling back to a generic line.
pub fn rationale_for(name: &str) -> &'static str {
    RATIONALES
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, rationale)| *rationale)
        .unwrap_or(FALLBACK_RATIONALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_nutrient_has_dedicated_rationale() {
        assert_eq!(rationale_for("Zinc"), "immune function, wound healing, liver support");
        assert_eq!(NutrientEntry::new("Omega-3").rationale, rationale_for("Omega-3"));
    }

    #[test]
    fn unknown_nutrient_falls_back() {
        assert_eq!(rationale_for("Gamma-linolenic acid"), FALLBACK_RATIONALE);
        assert_eq!(rationale_for("zinc"), FALLBACK_RATIONALE);
    }

    #[test]
    fn table_has_no_duplicate_names() {
        let mut names: Vec<_> = RATIONALES.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), RATIONALES.len());
    }
}
