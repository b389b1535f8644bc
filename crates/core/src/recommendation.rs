//! Merging nutrient sources into one recommendation set.

use crate::conditions::ConditionList;
use crate::nutrients::NutrientEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Deduplicated nutrient names, iterated in ascending lexicographic order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecommendationSet {
    names: BTreeSet<String>,
}

impl RecommendationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Names paired with their rationale, in set order.
    pub fn entries(&self) -> Vec<NutrientEntry> {
        self.iter().map(NutrientEntry::new).collect()
    }

    /// Owned names in set order.
    pub fn to_vec(&self) -> Vec<String> {
        self.names.iter().cloned().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for RecommendationSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RecommendationSet {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

/// Union of the category lookup, the BMI adjustment and every known condition's nutrients.
///
/// Deduplication is by exact name. Conditions outside the catalog contribute nothing.
pub fn merge<A, B>(
    category_lookup_result: &[A],
    bmi_adjustment: &[B],
    conditions: &ConditionList,
) -> RecommendationSet
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let mut names: BTreeSet<String> = category_lookup_result
        .iter()
        .map(|name| name.as_ref().to_owned())
        .chain(bmi_adjustment.iter().map(|name| name.as_ref().to_owned()))
        .collect();
    names.extend(conditions.nutrients());

    RecommendationSet { names }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: &[&str] = &[];

    #[test]
    fn deduplicates_across_sources() {
        let conditions = ConditionList::from_labels(["hearing loss"]);
        let set = merge(&["Zinc", "Omega-3"], &["Protein", "Zinc"], &conditions);

        let names: Vec<&str> = set.iter().collect();
        assert_eq!(names, vec!["Omega-3", "Protein", "Vitamin B12", "Zinc"]);
    }

    #[test]
    fn output_is_sorted_regardless_of_input_order() {
        let a = merge(&["Zinc", "Coenzyme Q10", "Magnesium"], NONE, &ConditionList::new());
        let b = merge(&["Magnesium", "Zinc", "Coenzyme Q10"], NONE, &ConditionList::new());
        assert_eq!(a, b);
        assert_eq!(a.to_vec(), vec!["Coenzyme Q10", "Magnesium", "Zinc"]);
    }

    #[test]
    fn merge_is_idempotent() {
        let conditions = ConditionList::from_labels(["asthma", "diabetes"]);
        let once = merge(&["Omega-3", "Vitamin E"], &["CLA", "Green tea extract"], &conditions);
        let twice = merge(&once.to_vec(), NONE, &ConditionList::new());
        assert_eq!(once, twice);
    }

    #[test]
    fn adding_a_condition_never_removes_nutrients() {
        let base_list = ["Vitamin C", "Vitamin D", "Selenium"];
        let mut conditions = ConditionList::new();
        let mut previous = merge(&base_list, NONE, &conditions);

        for label in ["hypertension", "gout", "heart disease", "mental illness"] {
            conditions.push(label);
            let next = merge(&base_list, NONE, &conditions);
            for name in previous.iter() {
                assert!(next.contains(name), "{name} lost after adding {label}");
            }
            previous = next;
        }
    }

    #[test]
    fn empty_sources_give_empty_set() {
        assert!(merge(NONE, NONE, &ConditionList::new()).is_empty());
    }

    #[test]
    fn entries_attach_rationales() {
        let set: RecommendationSet = ["Zinc", "Unlisted herb"].into_iter().collect();
        let entries = set.entries();
        assert_eq!(entries[0].name, "Unlisted herb");
        assert_eq!(entries[0].rationale, crate::constants::FALLBACK_RATIONALE);
        assert_eq!(entries[1].name, "Zinc");
    }
}
