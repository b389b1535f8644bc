//! The person being assessed.

use crate::conditions::ConditionList;
use crate::survey::SurveyResponse;
use crate::{CoreError, CoreResult};
use oheng_types::{BirthDate, HeightCm, NonEmptyText, WeightKg};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "male" => Ok(Gender::Male),
            "f" | "female" => Ok(Gender::Female),
            other => Err(CoreError::InvalidInput(format!(
                "gender must be 'male' or 'female', got '{other}'"
            ))),
        }
    }
}

/// One submission. Range checks already happened when the value types were built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub name: NonEmptyText,
    pub gender: Gender,
    pub birth_date: BirthDate,
    pub height: HeightCm,
    pub weight: WeightKg,
    #[serde(default)]
    pub survey: SurveyResponse,
    #[serde(default)]
    pub conditions: ConditionList,
}

impl Subject {
    /// Build a subject from raw boundary values, validating each one.
    pub fn from_raw(
        name: &str,
        gender: Gender,
        birth_date: &str,
        height_cm: u16,
        weight_kg: u16,
    ) -> CoreResult<Self> {
        Ok(Self {
            name: NonEmptyText::new(name)?,
            gender,
            birth_date: BirthDate::parse(birth_date)?,
            height: HeightCm::new(height_cm)?,
            weight: WeightKg::new(weight_kg)?,
            survey: SurveyResponse::default(),
            conditions: ConditionList::default(),
        })
    }

    pub fn with_survey(mut self, survey: SurveyResponse) -> Self {
        self.survey = survey;
        self
    }

    pub fn with_conditions(mut self, conditions: ConditionList) -> Self {
        self.conditions = conditions;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_parses_short_and_long_forms() {
        assert_eq!("M".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("female".parse::<Gender>().unwrap(), Gender::Female);
        assert!(matches!("x".parse::<Gender>(), Err(CoreError::InvalidInput(_))));
    }

    #[test]
    fn from_raw_maps_value_errors_to_invalid_input() {
        let err = Subject::from_raw("Hong", Gender::Male, "1993-03-29", 90, 70)
            .expect_err("height below range");
        assert!(matches!(err, CoreError::InvalidInput(msg) if msg.contains("height")));

        let err = Subject::from_raw(" ", Gender::Male, "1993-03-29", 170, 70)
            .expect_err("blank name");
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[test]
    fn deserializes_with_optional_survey_and_conditions() {
        let subject: Subject = serde_json::from_str(
            r#"{"name":"Hong","gender":"male","birth_date":"1993-03-29","height":170,"weight":70}"#,
        )
        .expect("valid subject");
        assert_eq!(subject.birth_date.year(), 1993);
        assert!(subject.conditions.is_empty());
    }
}
