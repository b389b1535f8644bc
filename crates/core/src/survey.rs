//! Self-reported health survey.
//!
//! The survey is a closed set of twenty yes/no items. The declaration order of [`SurveyItem`]
//! is the order in which flags appear in reports, so new items must be appended, never
//! inserted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurveyItem {
    Fatigue,
    Insomnia,
    Indigestion,
    Hypertension,
    Diabetes,
    KidneyDisease,
    HeartDisease,
    BrainDisorder,
    Inactivity,
    LowWaterIntake,
    Stress,
    SkinTrouble,
    FrequentColds,
    EyeStrain,
    ColdExtremities,
    Headache,
    Constipation,
    Diarrhea,
    WeightFluctuation,
    Lethargy,
}

impl SurveyItem {
    /// Every item in declaration order.
    pub const ALL: [SurveyItem; 20] = [
        SurveyItem::Fatigue,
        SurveyItem::Insomnia,
        SurveyItem::Indigestion,
        SurveyItem::Hypertension,
        SurveyItem::Diabetes,
        SurveyItem::KidneyDisease,
        SurveyItem::HeartDisease,
        SurveyItem::BrainDisorder,
        SurveyItem::Inactivity,
        SurveyItem::LowWaterIntake,
        SurveyItem::Stress,
        SurveyItem::SkinTrouble,
        SurveyItem::FrequentColds,
        SurveyItem::EyeStrain,
        SurveyItem::ColdExtremities,
        SurveyItem::Headache,
        SurveyItem::Constipation,
        SurveyItem::Diarrhea,
        SurveyItem::WeightFluctuation,
        SurveyItem::Lethargy,
    ];

    /// Short label used in report text.
    pub fn label(self) -> &'static str {
        match self {
            SurveyItem::Fatigue => "fatigue",
            SurveyItem::Insomnia => "insomnia",
            SurveyItem::Indigestion => "indigestion",
            SurveyItem::Hypertension => "hypertension",
            SurveyItem::Diabetes => "diabetes",
            SurveyItem::KidneyDisease => "kidney disease",
            SurveyItem::HeartDisease => "heart disease",
            SurveyItem::BrainDisorder => "brain disorder",
            SurveyItem::Inactivity => "inactivity",
            SurveyItem::LowWaterIntake => "low water intake",
            SurveyItem::Stress => "stress",
            SurveyItem::SkinTrouble => "skin trouble",
            SurveyItem::FrequentColds => "frequent colds",
            SurveyItem::EyeStrain => "eye strain",
            SurveyItem::ColdExtremities => "cold hands and feet",
            SurveyItem::Headache => "headache",
            SurveyItem::Constipation => "constipation",
            SurveyItem::Diarrhea => "diarrhea",
            SurveyItem::WeightFluctuation => "weight fluctuation",
            SurveyItem::Lethargy => "lethargy",
        }
    }

    /// The question shown to the respondent.
    pub fn question(self) -> &'static str {
        match self {
            SurveyItem::Fatigue => "Do you often feel tired?",
            SurveyItem::Insomnia => "Do you lack sleep or suffer from insomnia?",
            SurveyItem::Indigestion => "Do you have indigestion or bowel trouble?",
            SurveyItem::Hypertension => "Do you have a history of high blood pressure?",
            SurveyItem::Diabetes => "Do you have a history of diabetes?",
            SurveyItem::KidneyDisease => "Do you have kidney disease?",
            SurveyItem::HeartDisease => "Do you have heart disease?",
            SurveyItem::BrainDisorder => "Do you have a brain disorder?",
            SurveyItem::Inactivity => "Do you rarely exercise?",
            SurveyItem::LowWaterIntake => "Do you rarely drink water?",
            SurveyItem::Stress => "Do you often feel stressed?",
            SurveyItem::SkinTrouble => "Do you often have skin trouble?",
            SurveyItem::FrequentColds => "Do you catch colds often?",
            SurveyItem::EyeStrain => "Do your eyes tire easily?",
            SurveyItem::ColdExtremities => "Do your hands and feet get cold easily?",
            SurveyItem::Headache => "Do you often have headaches?",
            SurveyItem::Constipation => "Do you have constipation?",
            SurveyItem::Diarrhea => "Do you often have diarrhea?",
            SurveyItem::WeightFluctuation => "Does your weight change a lot?",
            SurveyItem::Lethargy => "Do you often feel lethargic?",
        }
    }

    /// The snake_case key used on the wire, matching the serde representation.
    pub fn key(self) -> &'static str {
        match self {
            SurveyItem::Fatigue => "fatigue",
            SurveyItem::Insomnia => "insomnia",
            SurveyItem::Indigestion => "indigestion",
            SurveyItem::Hypertension => "hypertension",
            SurveyItem::Diabetes => "diabetes",
            SurveyItem::KidneyDisease => "kidney_disease",
            SurveyItem::HeartDisease => "heart_disease",
            SurveyItem::BrainDisorder => "brain_disorder",
            SurveyItem::Inactivity => "inactivity",
            SurveyItem::LowWaterIntake => "low_water_intake",
            SurveyItem::Stress => "stress",
            SurveyItem::SkinTrouble => "skin_trouble",
            SurveyItem::FrequentColds => "frequent_colds",
            SurveyItem::EyeStrain => "eye_strain",
            SurveyItem::ColdExtremities => "cold_extremities",
            SurveyItem::Headache => "headache",
            SurveyItem::Constipation => "constipation",
            SurveyItem::Diarrhea => "diarrhea",
            SurveyItem::WeightFluctuation => "weight_fluctuation",
            SurveyItem::Lethargy => "lethargy",
        }
    }

    /// Parses the snake_case key (`"kidney_disease"`) or the label (`"kidney disease"`).
    pub fn from_key(input: &str) -> Option<Self> {
        let needle = input.trim().to_ascii_lowercase().replace('_', " ");
        if let Some(item) = Self::ALL.into_iter().find(|item| item.label() == needle) {
            return Some(item);
        }

        // Aliases for keys whose label differs from the variant name.
        match needle.as_str() {
            "sleep" => Some(SurveyItem::Insomnia),
            "digestion" => Some(SurveyItem::Indigestion),
            "cold extremities" => Some(SurveyItem::ColdExtremities),
            _ => None,
        }
    }
}

impl fmt::Display for SurveyItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Answers to the survey. Items never answered count as `false`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurveyResponse {
    answers: BTreeMap<SurveyItem, bool>,
}

impl SurveyResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// A response with exactly the given items checked.
    pub fn with_checked(items: impl IntoIterator<Item = SurveyItem>) -> Self {
        let mut response = Self::new();
        for item in items {
            response.set(item, true);
        }
        response
    }

    pub fn set(&mut self, item: SurveyItem, answer: bool) {
        self.answers.insert(item, answer);
    }

    pub fn is_checked(&self, item: SurveyItem) -> bool {
        self.answers.get(&item).copied().unwrap_or(false)
    }
}

/// Checked items, in survey declaration order.
pub fn active_flags(survey: &SurveyResponse) -> Vec<SurveyItem> {
    SurveyItem::ALL
        .into_iter()
        .filter(|item| survey.is_checked(*item))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_response_has_no_flags() {
        assert!(active_flags(&SurveyResponse::new()).is_empty());
    }

    #[test]
    fn flags_follow_declaration_order_not_insertion_order() {
        let mut survey = SurveyResponse::new();
        survey.set(SurveyItem::Lethargy, true);
        survey.set(SurveyItem::Stress, true);
        survey.set(SurveyItem::Fatigue, true);
        survey.set(SurveyItem::Headache, false);

        assert_eq!(
            active_flags(&survey),
            vec![SurveyItem::Fatigue, SurveyItem::Stress, SurveyItem::Lethargy]
        );
    }

    #[test]
    fn explicit_false_is_not_active() {
        let mut survey = SurveyResponse::with_checked([SurveyItem::Insomnia]);
        survey.set(SurveyItem::Insomnia, false);
        assert!(active_flags(&survey).is_empty());
    }

    #[test]
    fn deserializes_from_keyed_booleans() {
        let survey: SurveyResponse =
            serde_json::from_str(r#"{"kidney_disease": true, "fatigue": false, "stress": true}"#)
                .expect("valid survey");
        assert_eq!(
            active_flags(&survey),
            vec![SurveyItem::KidneyDisease, SurveyItem::Stress]
        );

        assert!(serde_json::from_str::<SurveyResponse>(r#"{"unknown": true}"#).is_err());
    }

    #[test]
    fn parses_keys_and_labels() {
        assert_eq!(SurveyItem::from_key("kidney_disease"), Some(SurveyItem::KidneyDisease));
        assert_eq!(SurveyItem::from_key("Cold hands and feet"), Some(SurveyItem::ColdExtremities));
        assert_eq!(SurveyItem::from_key("sleep"), Some(SurveyItem::Insomnia));
        assert_eq!(SurveyItem::from_key("gout"), None);
    }

    #[test]
    fn keys_match_serde_representation() {
        for item in SurveyItem::ALL {
            let json = serde_json::to_string(&item).expect("serializes");
            assert_eq!(json, format!("\"{}\"", item.key()));
            assert_eq!(SurveyItem::from_key(item.key()), Some(item));
        }
    }

    #[test]
    fn schema_has_twenty_distinct_labels() {
        let labels: std::collections::HashSet<_> =
            SurveyItem::ALL.iter().map(|item| item.label()).collect();
        assert_eq!(labels.len(), 20);
    }
}
