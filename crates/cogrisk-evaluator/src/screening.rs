//! Call surfaces for collaborators of the scoring core.
//!
//! [`ScreeningService`] is the single entry point shared by every caller (HTTP
//! handlers, client-side previews, the CLI), so the statistical flag and the criteria
//! report are always computed by the same code and the same parameter set.
//!
//! The two outputs are independent: [`ScreeningService::classify_risk`] uses one
//! session plus the subject profile, [`ScreeningService::evaluate_criteria`] uses the
//! metrics of all three games. Both are pure and may be called concurrently.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use cogrisk_evaluator::screening::ScreeningService;
//! use cogrisk_telemetry::{GameMetrics, GameMetricsBundle, SubjectProfile};
//!
//! let service = ScreeningService::shipped();
//! let profile = SubjectProfile::new(NaiveDate::from_ymd_opt(2014, 2, 3).unwrap(), "M");
//! let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
//!
//! let session = GameMetrics { trial_count: 160.0, accuracy: 0.86, ..Default::default() };
//! let assessment = service.classify_risk(&session, &profile, today);
//! assert!((0.0..=1.0).contains(&assessment.score.probability));
//!
//! let report = service.evaluate_criteria(&GameMetricsBundle::default());
//! assert_eq!(report.criteria.len(), 18);
//! ```

use chrono::NaiveDate;
use cogrisk_telemetry::{GameMetrics, GameMetricsBundle, SubjectProfile};
use serde::Serialize;

use crate::{
    criteria::{self, Criterion, DomainSummary},
    feature_vector::{self, FeatureVector},
    model_params::ModelParameters,
    risk_band::{self, GameRiskBands},
    scorer::{LogisticScorer, RiskScore, RiskScorer},
};

/// Statistical risk flag of one session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub features: FeatureVector,
    #[serde(flatten)]
    pub score: RiskScore,
}

/// Evidence-graded criteria of one assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriteriaReport {
    pub criteria: Vec<Criterion>,
    pub domains: Vec<DomainSummary>,
    pub risk_bands: GameRiskBands,
}

/// Scoring entry point with an injected risk scorer.
#[derive(Debug, Clone)]
pub struct ScreeningService<S = LogisticScorer> {
    scorer: S,
}

impl ScreeningService<LogisticScorer> {
    /// Service scoring with the given parameter set.
    #[must_use]
    pub fn new(params: ModelParameters) -> Self {
        Self::with_scorer(LogisticScorer::new(params))
    }

    /// Service scoring with [`ModelParameters::SHIPPED`].
    #[must_use]
    pub fn shipped() -> Self {
        Self::new(ModelParameters::SHIPPED)
    }
}

impl<S> ScreeningService<S>
where
    S: RiskScorer,
{
    #[must_use]
    pub fn with_scorer(scorer: S) -> Self {
        Self { scorer }
    }

    #[must_use]
    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Builds the feature vector of `session` and scores it.
    #[must_use]
    pub fn classify_risk(
        &self,
        session: &GameMetrics,
        profile: &SubjectProfile,
        evaluated_on: NaiveDate,
    ) -> RiskAssessment {
        let features = feature_vector::build_features(session, profile, evaluated_on);
        let score = self.scorer.score(&features);
        RiskAssessment { features, score }
    }

    /// Grades the criteria catalogue and the per-game risk bands.
    #[must_use]
    pub fn evaluate_criteria(&self, bundle: &GameMetricsBundle) -> CriteriaReport {
        let criteria = criteria::infer_criteria(bundle);
        let domains = criteria::summarize_domains(&criteria);
        CriteriaReport {
            criteria,
            domains,
            risk_bands: risk_band::band_games(bundle),
        }
    }
}

impl Default for ScreeningService<LogisticScorer> {
    fn default() -> Self {
        Self::shipped()
    }
}
