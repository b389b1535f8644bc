//! Diagnosed-condition catalog and its nutrient associations.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A condition from the fixed eight-entry catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Hypertension,
    Diabetes,
    KidneyDisease,
    HeartDisease,
    HearingLoss,
    AtopicDermatitis,
    Asthma,
    MentalIllness,
}

impl Condition {
    pub const CATALOG: [Condition; 8] = [
        Condition::Hypertension,
        Condition::Diabetes,
        Condition::KidneyDisease,
        Condition::HeartDisease,
        Condition::HearingLoss,
        Condition::AtopicDermatitis,
        Condition::Asthma,
        Condition::MentalIllness,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Condition::Hypertension => "hypertension",
            Condition::Diabetes => "diabetes",
            Condition::KidneyDisease => "kidney disease",
            Condition::HeartDisease => "heart disease",
            Condition::HearingLoss => "hearing loss",
            Condition::AtopicDermatitis => "atopic dermatitis",
            Condition::Asthma => "asthma",
            Condition::MentalIllness => "mental illness",
        }
    }

    pub fn nutrients(self) -> &'static [&'static str] {
        match self {
            Condition::Hypertension => &["Potassium", "Magnesium", "Coenzyme Q10"],
            Condition::Diabetes => &["Chromium", "Magnesium", "Omega-3"],
            Condition::KidneyDisease => &["Vitamin D", "Omega-3"],
            Condition::HeartDisease => &["Coenzyme Q10", "Taurine"],
            Condition::HearingLoss => &["Vitamin B12", "Zinc", "Omega-3"],
            Condition::AtopicDermatitis => &["Vitamin E", "Probiotics", "Gamma-linolenic acid"],
            Condition::Asthma => &["Vitamin C", "Omega-3", "Magnesium"],
            Condition::MentalIllness => &["Vitamin B complex", "Omega-3", "Magnesium"],
        }
    }

    /// Looks up a catalog entry by label or snake_case key, case-insensitively.
    pub fn from_label(input: &str) -> Option<Self> {
        let needle = input.trim().to_ascii_lowercase().replace('_', " ");
        Self::CATALOG
            .into_iter()
            .find(|condition| condition.label() == needle)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Diagnosed conditions as submitted.
///
/// Labels outside the catalog are kept (so they can be echoed back) but contribute no
/// nutrients.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionList {
    labels: Vec<String>,
}

impl ConditionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn push(&mut self, label: impl Into<String>) {
        self.labels.push(label.into());
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Catalog entries named by this list, deduplicated.
    pub fn known(&self) -> BTreeSet<Condition> {
        self.labels
            .iter()
            .filter_map(|label| {
                let condition = Condition::from_label(label);
                if condition.is_none() {
                    tracing::debug!(label = %label, "condition not in catalog; ignored");
                }
                condition
            })
            .collect()
    }

    /// Union of the nutrient lists of every known condition.
    pub fn nutrients(&self) -> BTreeSet<String> {
        self.known()
            .into_iter()
            .flat_map(|condition| condition.nutrients().iter())
            .map(|name| (*name).to_owned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_eight_entries_with_nutrients() {
        assert_eq!(Condition::CATALOG.len(), 8);
        for condition in Condition::CATALOG {
            assert!(!condition.nutrients().is_empty(), "{condition}");
        }
    }

    #[test]
    fn resolves_labels_and_keys() {
        assert_eq!(Condition::from_label("Hypertension"), Some(Condition::Hypertension));
        assert_eq!(Condition::from_label("atopic_dermatitis"), Some(Condition::AtopicDermatitis));
        assert_eq!(Condition::from_label(" hearing loss "), Some(Condition::HearingLoss));
        assert_eq!(Condition::from_label("gout"), None);
    }

    #[test]
    fn unknown_conditions_contribute_nothing() {
        let list = ConditionList::from_labels(["gout", "hypertension"]);
        assert_eq!(list.known().len(), 1);

        let nutrients = list.nutrients();
        let expected: BTreeSet<String> = ["Potassium", "Magnesium", "Coenzyme Q10"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(nutrients, expected);
    }

    #[test]
    fn overlapping_conditions_are_deduplicated() {
        let list = ConditionList::from_labels(["diabetes", "asthma", "mental illness"]);
        let nutrients = list.nutrients();
        assert_eq!(
            nutrients.iter().filter(|n| n.as_str() == "Magnesium").count(),
            1
        );
        assert!(nutrients.contains("Vitamin B complex"));
        assert!(nutrients.contains("Chromium"));
    }

    #[test]
    fn empty_list_contributes_nothing() {
        assert!(ConditionList::new().nutrients().is_empty());
    }
}
