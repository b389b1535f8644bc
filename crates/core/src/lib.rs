//! # Oheng Core
//!
//! Core business logic for the element-based health profile engine.
//!
//! This crate contains the pure classification and recommendation pipeline:
//! - Birth year to element category (via the ten-stem cycle) and birth month to season
//! - BMI banding and health-survey flags
//! - Knowledge-base lookup keyed by category and balance state
//! - Merging category, BMI and condition nutrients into one recommendation set
//! - Composing the plain-text narrative report
//!
//! **No API concerns**: CLI parsing, HTTP servers and report delivery belong in `oheng-cli`,
//! `oheng-api-rest` and `oheng-files`.

pub mod assessment;
pub mod body;
pub mod conditions;
pub mod config;
pub mod constants;
pub mod element;
pub mod error;
pub mod knowledge_base;
pub mod nutrients;
pub mod recommendation;
pub mod report;
pub mod subject;
pub mod survey;

pub use assessment::{Assessment, AssessmentService};
pub use body::{classify_bmi, compute_bmi, BmiBand};
pub use conditions::{Condition, ConditionList};
pub use config::CoreConfig;
pub use element::{
    classify_season, classify_year, stem_for_year, ElementCategory, HeavenlyStem, Season,
};
pub use error::{CoreError, CoreResult};
pub use knowledge_base::{BalanceState, KnowledgeBase};
pub use nutrients::NutrientEntry;
pub use recommendation::{merge, RecommendationSet};
pub use report::{compose, Report, ReportComposer, ReportSection, SectionKind};
pub use subject::{Gender, Subject};
pub use survey::{active_flags, SurveyItem, SurveyResponse};
