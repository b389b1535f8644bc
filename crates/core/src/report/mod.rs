//! Narrative report composition.
//!
//! A [`Report`] is an ordered list of titled plain-text sections. Composition is a pure
//! formatting pass over already-validated inputs: it cannot fail, and the same inputs always
//! produce the same text. Rendering carries no markup so that display, document export and
//! delivery collaborators can format it as they see fit.
//!
//! ## Section order
//! 1. Profile (identity line)
//! 2. Personality
//! 3. Career
//! 4. Relationships
//! 5. Health risks
//! 6. Body mass index
//! 7. Health survey
//! 8. Outlook
//! 9. Recommended nutrients

pub mod narrative;

use crate::body::BmiBand;
use crate::constants::DEFAULT_OUTLOOK_YEAR;
use crate::element::{ElementCategory, Season};
use crate::recommendation::RecommendationSet;
use crate::subject::Gender;
use crate::survey::SurveyItem;
use narrative::narrative_for;
use serde::Serialize;
use std::fmt;

/// Identifies a report section independently of its title.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Identity,
    Traits,
    Career,
    Relationships,
    HealthRisk,
    Bmi,
    Survey,
    Outlook,
    Nutrients,
}

impl SectionKind {
    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Identity => "Profile",
            SectionKind::Traits => "Personality",
            SectionKind::Career => "Career",
            SectionKind::Relationships => "Relationships",
            SectionKind::HealthRisk => "Health risks",
            SectionKind::Bmi => "Body mass index",
            SectionKind::Survey => "Health survey",
            SectionKind::Outlook => "Outlook",
            SectionKind::Nutrients => "Recommended nutrients",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReportSection {
    pub kind: SectionKind,
    pub title: &'static str,
    pub lines: Vec<String>,
}

impl ReportSection {
    fn new(kind: SectionKind, lines: Vec<String>) -> Self {
        Self {
            kind,
            title: kind.title(),
            lines,
        }
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// A composed report. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Report {
    sections: Vec<ReportSection>,
}

impl Report {
    pub fn sections(&self) -> &[ReportSection] {
        &self.sections
    }

    pub fn section(&self, kind: SectionKind) -> Option<&ReportSection> {
        self.sections.iter().find(|section| section.kind == kind)
    }

    /// Plain-text rendering: each section is its title followed by its lines, with a blank
    /// line between sections.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, section) in self.sections.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", section.title)?;
            for line in &section.lines {
                writeln!(f, "{line}")?;
            }
        }
        Ok(())
    }
}

/// Composes reports for a fixed outlook year.
///
/// The outlook section covers `outlook_year` and the year after.
#[derive(Clone, Copy, Debug)]
pub struct ReportComposer {
    outlook_year: i32,
}

impl Default for ReportComposer {
    fn default() -> Self {
        Self::new(DEFAULT_OUTLOOK_YEAR)
    }
}

impl ReportComposer {
    pub fn new(outlook_year: i32) -> Self {
        Self { outlook_year }
    }

    pub fn outlook_year(&self) -> i32 {
        self.outlook_year
    }

    #[allow(clippy::too_many_arguments)]
    pub fn compose(
        &self,
        name: &str,
        gender: Gender,
        category: ElementCategory,
        season: Season,
        bmi: f64,
        bmi_band: BmiBand,
        active_flags: &[SurveyItem],
        recommendations: &RecommendationSet,
    ) -> Report {
        let narrative = narrative_for(category);

        let sections = vec![
            ReportSection::new(
                SectionKind::Identity,
                vec![format!(
                    "{name} ({gender}) was born under the {category} element in {season}."
                )],
            ),
            ReportSection::new(SectionKind::Traits, vec![narrative.traits.to_owned()]),
            ReportSection::new(SectionKind::Career, vec![narrative.career.to_owned()]),
            ReportSection::new(
                SectionKind::Relationships,
                vec![narrative.relationships.to_owned()],
            ),
            ReportSection::new(
                SectionKind::HealthRisk,
                vec![
                    format!(
                        "{category} is traditionally associated with the {}.",
                        narrative.organs
                    ),
                    narrative.health_risk.to_owned(),
                ],
            ),
            ReportSection::new(SectionKind::Bmi, vec![bmi_line(bmi, bmi_band)]),
            ReportSection::new(SectionKind::Survey, survey_lines(active_flags)),
            ReportSection::new(SectionKind::Outlook, self.outlook_lines()),
            ReportSection::new(SectionKind::Nutrients, nutrient_lines(recommendations)),
        ];

        Report { sections }
    }

    fn outlook_lines(&self) -> Vec<String> {
        let next_year = self.outlook_year.saturating_add(1);
        vec![
            format!(
                "{}: imbalances in the body's energy may surface, so managing stress matters.",
                self.outlook_year
            ),
            format!(
                "{next_year}: watch for weakened immunity and changes in the digestive system."
            ),
        ]
    }
}

/// Compose a report with the default outlook year.
#[allow(clippy::too_many_arguments)]
pub fn compose(
    name: &str,
    gender: Gender,
    category: ElementCategory,
    season: Season,
    bmi: f64,
    bmi_band: BmiBand,
    active_flags: &[SurveyItem],
    recommendations: &RecommendationSet,
) -> Report {
    ReportComposer::default().compose(
        name,
        gender,
        category,
        season,
        bmi,
        bmi_band,
        active_flags,
        recommendations,
    )
}

fn bmi_line(bmi: f64, band: BmiBand) -> String {
    let commentary = match band {
        BmiBand::Underweight => {
            "which is underweight; pay attention to nutrient absorption and keeping up stamina."
        }
        BmiBand::Normal => {
            "which is within the normal range; keep up your current health habits."
        }
        BmiBand::Overweight => {
            "which is in the overweight or obese range; lifestyle changes are recommended."
        }
    };
    format!("Your BMI is {bmi:.1}, {commentary}")
}

fn survey_lines(active_flags: &[SurveyItem]) -> Vec<String> {
    if active_flags.is_empty() {
        return vec!["No issues reported in the health survey.".to_owned()];
    }

    let labels: Vec<&str> = active_flags.iter().map(|item| item.label()).collect();
    vec![
        format!("You reported: {}.", labels.join(", ")),
        "Managing general fatigue and any chronic conditions may be important.".to_owned(),
    ]
}

fn nutrient_lines(recommendations: &RecommendationSet) -> Vec<String> {
    if recommendations.is_empty() {
        return vec!["No nutrient recommendations are available for this profile.".to_owned()];
    }

    recommendations
        .entries()
        .into_iter()
        .map(|entry| format!("{}: {}", entry.name, entry.rationale))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FALLBACK_RATIONALE;

    fn sample_report(flags: &[SurveyItem], recommendations: &RecommendationSet) -> Report {
        compose(
            "Hong",
            Gender::Male,
            ElementCategory::Water,
            Season::Spring,
            24.22,
            BmiBand::Normal,
            flags,
            recommendations,
        )
    }

    #[test]
    fn sections_follow_fixed_order() {
        let report = sample_report(&[], &RecommendationSet::new());
        let kinds: Vec<SectionKind> = report.sections().iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SectionKind::Identity,
                SectionKind::Traits,
                SectionKind::Career,
                SectionKind::Relationships,
                SectionKind::HealthRisk,
                SectionKind::Bmi,
                SectionKind::Survey,
                SectionKind::Outlook,
                SectionKind::Nutrients,
            ]
        );
    }

    #[test]
    fn identity_line_names_category_and_season() {
        let report = sample_report(&[], &RecommendationSet::new());
        let identity = report.section(SectionKind::Identity).unwrap().text();
        assert_eq!(identity, "Hong (male) was born under the Water element in Spring.");
    }

    #[test]
    fn bmi_is_rendered_to_one_decimal() {
        let report = sample_report(&[], &RecommendationSet::new());
        let bmi = report.section(SectionKind::Bmi).unwrap().text();
        assert!(bmi.starts_with("Your BMI is 24.2,"), "{bmi}");
        assert!(bmi.contains("normal range"));
    }

    #[test]
    fn bmi_commentary_follows_band() {
        assert!(bmi_line(17.0, BmiBand::Underweight).contains("underweight"));
        assert!(bmi_line(31.26, BmiBand::Overweight).contains("31.3"));
        assert!(bmi_line(31.26, BmiBand::Overweight).contains("overweight"));
    }

    #[test]
    fn survey_flags_are_joined_in_given_order() {
        let flags = [SurveyItem::Fatigue, SurveyItem::Stress, SurveyItem::Lethargy];
        let report = sample_report(&flags, &RecommendationSet::new());
        let survey = report.section(SectionKind::Survey).unwrap();
        assert_eq!(survey.lines[0], "You reported: fatigue, stress, lethargy.");
        assert_eq!(survey.lines.len(), 2);
    }

    #[test]
    fn empty_survey_reports_no_issues() {
        let report = sample_report(&[], &RecommendationSet::new());
        let survey = report.section(SectionKind::Survey).unwrap().text();
        assert!(survey.contains("No issues reported"));
    }

    #[test]
    fn outlook_defaults_to_2025_and_2026() {
        let report = sample_report(&[], &RecommendationSet::new());
        let outlook = report.section(SectionKind::Outlook).unwrap();
        assert_eq!(outlook.lines.len(), 2);
        assert!(outlook.lines[0].starts_with("2025:"));
        assert!(outlook.lines[1].starts_with("2026:"));
    }

    #[test]
    fn outlook_follows_configured_year() {
        let report = ReportComposer::new(2030).compose(
            "Kim",
            Gender::Female,
            ElementCategory::Fire,
            Season::Winter,
            20.0,
            BmiBand::Normal,
            &[],
            &RecommendationSet::new(),
        );
        let outlook = report.section(SectionKind::Outlook).unwrap();
        assert!(outlook.lines[0].starts_with("2030:"));
        assert!(outlook.lines[1].starts_with("2031:"));
    }

    #[test]
    fn nutrients_are_listed_with_rationale() {
        let set: RecommendationSet = ["Zinc", "Omega-3", "Mystery root"].into_iter().collect();
        let report = sample_report(&[], &set);
        let nutrients = report.section(SectionKind::Nutrients).unwrap();
        assert_eq!(
            nutrients.lines,
            vec![
                format!("Mystery root: {FALLBACK_RATIONALE}"),
                "Omega-3: healthier blood cholesterol, reduced inflammation".to_owned(),
                "Zinc: immune function, wound healing, liver support".to_owned(),
            ]
        );
    }

    #[test]
    fn empty_recommendations_get_a_single_line() {
        let report = sample_report(&[], &RecommendationSet::new());
        let nutrients = report.section(SectionKind::Nutrients).unwrap();
        assert_eq!(nutrients.lines.len(), 1);
        assert!(nutrients.lines[0].contains("No nutrient recommendations"));
    }

    #[test]
    fn rendered_text_is_plain_and_stable() {
        let set: RecommendationSet = ["Vitamin E"].into_iter().collect();
        let first = sample_report(&[SurveyItem::Insomnia], &set).to_text();
        let second = sample_report(&[SurveyItem::Insomnia], &set).to_text();
        assert_eq!(first, second);
        assert!(first.starts_with("Profile\nHong (male)"));
        assert!(!first.contains('#') && !first.contains("**") && !first.contains('<'));
    }
}
