//! # Assessment pipeline
//!
//! Runs one [`Subject`] through classification, evaluation, lookup, merge and composition.
//! The service holds the shared knowledge base and the startup configuration; every call is
//! independent and nothing is retained between submissions.

use crate::body::{classify_bmi, compute_bmi, BmiBand};
use crate::config::CoreConfig;
use crate::element::{classify_season, stem_for_year, ElementCategory, HeavenlyStem, Season};
use crate::knowledge_base::KnowledgeBase;
use crate::recommendation::{merge, RecommendationSet};
use crate::report::{Report, ReportComposer};
use crate::subject::Subject;
use crate::survey::{active_flags, SurveyItem};
use crate::CoreResult;
use serde::Serialize;
use std::sync::Arc;

/// Everything computed for one submission.
#[derive(Clone, Debug, Serialize)]
pub struct Assessment {
    pub category: ElementCategory,
    pub stem: HeavenlyStem,
    pub season: Season,
    pub bmi: f64,
    pub bmi_band: BmiBand,
    pub active_flags: Vec<SurveyItem>,
    pub recommendations: RecommendationSet,
    pub report: Report,
}

/// Stateless pipeline over a shared, read-only knowledge base.
#[derive(Clone, Debug)]
pub struct AssessmentService {
    knowledge_base: Arc<KnowledgeBase>,
    cfg: CoreConfig,
}

impl AssessmentService {
    pub fn new(knowledge_base: Arc<KnowledgeBase>, cfg: CoreConfig) -> Self {
        Self {
            knowledge_base,
            cfg,
        }
    }

    pub fn config(&self) -> &CoreConfig {
        &self.cfg
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge_base
    }

    /// Assess a subject.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidInput` if the birth month or body measurements cannot be
    /// evaluated. No partial report is produced.
    pub fn assess(&self, subject: &Subject) -> CoreResult<Assessment> {
        let stem = stem_for_year(subject.birth_date.year());
        let category = stem.element();
        let season = classify_season(subject.birth_date.month())?;

        let bmi = compute_bmi(
            f64::from(subject.height.get()),
            f64::from(subject.weight.get()),
        )?;
        let bmi_band = classify_bmi(bmi);
        let flags = active_flags(&subject.survey);

        if !self.knowledge_base.contains(category, self.cfg.balance()) {
            tracing::debug!(
                %category,
                balance = %self.cfg.balance(),
                "no knowledge base entry, using adjustments only"
            );
        }
        let lookup = self.knowledge_base.lookup(category, self.cfg.balance());
        let recommendations = merge(lookup, bmi_band.adjustment(), &subject.conditions);

        tracing::debug!(
            %category,
            %season,
            bmi_band = bmi_band.as_str(),
            flags = flags.len(),
            nutrients = recommendations.len(),
            "assessment computed"
        );

        let report = ReportComposer::new(self.cfg.outlook_year()).compose(
            subject.name.as_str(),
            subject.gender,
            category,
            season,
            bmi,
            bmi_band,
            &flags,
            &recommendations,
        );

        Ok(Assessment {
            category,
            stem,
            season,
            bmi,
            bmi_band,
            active_flags: flags,
            recommendations,
            report,
        })
    }
}
