//! Request and response bodies shared by the REST API and the CLI's JSON output.

use oheng_core::{
    Assessment, Condition, ConditionList, CoreError, CoreResult, Gender, Subject, SurveyItem,
    SurveyResponse,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}

/// One health-survey question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SurveyItemRes {
    /// Stable key accepted in `AssessReq.flags`
    pub key: String,
    pub label: String,
    pub question: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SurveyItemsRes {
    pub items: Vec<SurveyItemRes>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ConditionRes {
    pub label: String,
    pub nutrients: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ConditionsRes {
    pub conditions: Vec<ConditionRes>,
}

/// One assessment submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct AssessReq {
    pub name: String,
    /// `male` or `female`
    pub gender: String,
    /// `YYYY-MM-DD`, year 1940 or later
    pub birth_date: String,
    pub height_cm: u16,
    pub weight_kg: u16,
    /// Survey keys or labels answered "yes"
    #[serde(default)]
    pub flags: Vec<String>,
    /// Diagnosed conditions; labels outside the catalog are ignored
    #[serde(default)]
    pub conditions: Vec<String>,
}

impl AssessReq {
    /// Validate the request into a [`Subject`].
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidInput` for an unknown gender or survey flag, a malformed or
    /// too-early birth date, or out-of-range measurements.
    pub fn into_subject(self) -> CoreResult<Subject> {
        let gender: Gender = self.gender.parse()?;
        let mut survey = SurveyResponse::new();
        for flag in &self.flags {
            let item = SurveyItem::from_key(flag).ok_or_else(|| {
                CoreError::InvalidInput(format!("unknown survey flag '{flag}'"))
            })?;
            survey.set(item, true);
        }

        Ok(Subject::from_raw(
            &self.name,
            gender,
            &self.birth_date,
            self.height_cm,
            self.weight_kg,
        )?
        .with_survey(survey)
        .with_conditions(ConditionList::from_labels(self.conditions)))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutrientRes {
    pub name: String,
    pub rationale: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReportSectionRes {
    pub title: String,
    pub lines: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AssessRes {
    pub category: String,
    pub stem: String,
    pub season: String,
    /// Body mass index, rounded to one decimal place
    pub bmi: f64,
    pub bmi_band: String,
    pub active_flags: Vec<String>,
    pub recommendations: Vec<NutrientRes>,
    pub report: Vec<ReportSectionRes>,
    /// Plain-text rendering of `report`
    pub report_text: String,
}

impl From<&Assessment> for AssessRes {
    fn from(assessment: &Assessment) -> Self {
        Self {
            category: assessment.category.to_string(),
            stem: assessment.stem.as_str().to_owned(),
            season: assessment.season.to_string(),
            bmi: (assessment.bmi * 10.0).round() / 10.0,
            bmi_band: assessment.bmi_band.as_str().to_owned(),
            active_flags: assessment
                .active_flags
                .iter()
                .map(|item| item.label().to_owned())
                .collect(),
            recommendations: assessment
                .recommendations
                .entries()
                .into_iter()
                .map(|entry| NutrientRes {
                    name: entry.name,
                    rationale: entry.rationale.to_owned(),
                })
                .collect(),
            report: assessment
                .report
                .sections()
                .iter()
                .map(|section| ReportSectionRes {
                    title: section.title.to_owned(),
                    lines: section.lines.clone(),
                })
                .collect(),
            report_text: assessment.report.to_text(),
        }
    }
}

/// The survey schema in declaration order.
pub fn survey_items() -> SurveyItemsRes {
    SurveyItemsRes {
        items: SurveyItem::ALL
            .iter()
            .map(|item| SurveyItemRes {
                key: item.key().to_owned(),
                label: item.label().to_owned(),
                question: item.question().to_owned(),
            })
            .collect(),
    }
}

/// The condition catalog.
pub fn conditions() -> ConditionsRes {
    ConditionsRes {
        conditions: Condition::CATALOG
            .iter()
            .map(|condition| ConditionRes {
                label: condition.label().to_owned(),
                nutrients: condition.nutrients().iter().map(|n| (*n).to_owned()).collect(),
            })
            .collect(),
    }
}
