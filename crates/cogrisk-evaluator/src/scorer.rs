//! Standardized logistic scoring of feature vectors.
//!
//! # How It Works
//!
//! For each feature `i` of a [`FeatureVector`]:
//!
//! ```text
//! zᵢ = (valueᵢ − meanᵢ) / scaleᵢ        (zᵢ = 0 when scaleᵢ = 0)
//! L  = intercept + Σ zᵢ · coefficientᵢ
//! p  = 1 / (1 + e^(−L))
//! ```
//!
//! The classification is positive when `p >= threshold`.
//!
//! # Usage
//!
//! ```
//! use cogrisk_evaluator::{
//!     feature_vector::FeatureVector,
//!     model_params::ModelParameters,
//!     scorer::{LogisticScorer, RiskClass, RiskScorer},
//! };
//!
//! let scorer = LogisticScorer::new(ModelParameters::SHIPPED);
//! // A child exactly at the training means scores the intercept
//! let features = FeatureVector::from_values(*ModelParameters::SHIPPED.scaler_means());
//! let score = scorer.score(&features);
//! assert_eq!(score.linear_predictor, ModelParameters::SHIPPED.intercept());
//! assert_eq!(score.classification, RiskClass::Positive);
//! ```

use std::{fmt, iter};

use serde::{Deserialize, Serialize};

use crate::{
    feature_vector::{FEATURE_COUNT, FeatureColumn, FeatureLengthError, FeatureVector},
    model_params::ModelParameters,
};

/// Binary outcome of the risk model, serialized as `0` or `1`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant, Serialize, Deserialize,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum RiskClass {
    Negative,
    Positive,
}

impl From<RiskClass> for u8 {
    fn from(class: RiskClass) -> Self {
        match class {
            RiskClass::Negative => 0,
            RiskClass::Positive => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("risk class must be 0 or 1, got {_0}")]
pub struct InvalidRiskClass(#[error(not(source))] u8);

impl TryFrom<u8> for RiskClass {
    type Error = InvalidRiskClass;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Negative),
            1 => Ok(Self::Positive),
            _ => Err(InvalidRiskClass(value)),
        }
    }
}

/// Result of scoring one feature vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskScore {
    /// Linear predictor `L` before the sigmoid
    pub linear_predictor: f64,
    /// Logistic probability in \[0.0, 1.0\]
    pub probability: f64,
    pub classification: RiskClass,
}

/// Contribution of a single feature to the linear predictor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureContribution {
    pub feature: &'static str,
    pub value: f64,
    pub standardized: f64,
    /// `standardized * coefficient`
    pub contribution: f64,
}

/// Scores feature vectors into a binary risk classification.
pub trait RiskScorer: fmt::Debug + Send + Sync {
    fn score(&self, features: &FeatureVector) -> RiskScore;

    /// Scores a raw value slice in model column order.
    ///
    /// Slices of the wrong length are rejected rather than padded or truncated.
    fn score_values(&self, values: &[f64]) -> Result<RiskScore, FeatureLengthError> {
        let features = FeatureVector::try_from(values)?;
        Ok(self.score(&features))
    }
}

/// Logistic-regression scorer over standardized features.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticScorer {
    params: ModelParameters,
}

impl LogisticScorer {
    #[must_use]
    pub fn new(params: ModelParameters) -> Self {
        Self { params }
    }

    #[must_use]
    pub fn params(&self) -> &ModelParameters {
        &self.params
    }

    /// Standardized value of every feature.
    #[must_use]
    pub fn standardize(&self, features: &FeatureVector) -> [f64; FEATURE_COUNT] {
        let means = self.params.scaler_means();
        let scales = self.params.scaler_scales();
        std::array::from_fn(|i| standardize_value(features.values()[i], means[i], scales[i]))
    }

    /// Per-feature breakdown of the linear predictor, in model column order.
    #[must_use]
    pub fn contributions(&self, features: &FeatureVector) -> Vec<FeatureContribution> {
        iter::zip(FeatureColumn::ALL, self.standardize(features))
            .map(|(column, standardized)| FeatureContribution {
                feature: column.name(),
                value: features.get(column),
                standardized,
                contribution: standardized * self.params.coefficients()[column.index()],
            })
            .collect()
    }

    #[must_use]
    pub fn linear_predictor(&self, features: &FeatureVector) -> f64 {
        iter::zip(self.standardize(features), self.params.coefficients())
            .fold(self.params.intercept(), |acc, (z, coefficient)| {
                acc + z * coefficient
            })
    }
}

impl Default for LogisticScorer {
    fn default() -> Self {
        Self::new(ModelParameters::SHIPPED)
    }
}

impl RiskScorer for LogisticScorer {
    fn score(&self, features: &FeatureVector) -> RiskScore {
        let linear_predictor = self.linear_predictor(features);
        let probability = sigmoid(linear_predictor);
        let classification = if probability >= self.params.threshold() {
            RiskClass::Positive
        } else {
            RiskClass::Negative
        };
        tracing::debug!(
            linear_predictor,
            probability,
            threshold = self.params.threshold(),
            positive = classification.is_positive(),
            "scored feature vector"
        );
        RiskScore {
            linear_predictor,
            probability,
            classification,
        }
    }
}

fn standardize_value(value: f64, mean: f64, scale: f64) -> f64 {
    if scale == 0.0 {
        0.0
    } else {
        (value - mean) / scale
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_means() -> FeatureVector {
        FeatureVector::from_values(*ModelParameters::SHIPPED.scaler_means())
    }

    #[test]
    fn test_features_at_means_score_intercept() {
        let score = LogisticScorer::default().score(&at_means());
        assert_eq!(score.linear_predictor, 0.562_454_514_484_786);
        assert!((score.probability - 0.637).abs() < 1e-3);
        assert_eq!(score.classification, RiskClass::Positive);
    }

    #[test]
    fn test_high_visit_drives_score_negative() {
        let features = at_means().with(FeatureColumn::Visit, 10.0);
        let score = LogisticScorer::default().score(&features);
        assert!((score.linear_predictor - -15.7).abs() < 0.1, "{}", score.linear_predictor);
        assert!(score.probability < 1e-6);
        assert_eq!(score.classification, RiskClass::Negative);
    }

    #[test]
    fn test_probability_equal_to_threshold_is_positive() {
        let p = ModelParameters::SHIPPED;
        let at_intercept = sigmoid(p.intercept());
        let params = ModelParameters::new(
            *p.coefficients(),
            p.intercept(),
            *p.scaler_means(),
            *p.scaler_scales(),
            at_intercept,
        )
        .unwrap();
        let score = LogisticScorer::new(params).score(&at_means());
        assert_eq!(score.probability.to_bits(), at_intercept.to_bits());
        assert_eq!(score.classification, RiskClass::Positive);
    }

    #[test]
    fn test_threshold_below_half() {
        // Pick an intercept so that p lands exactly between 0.3 and 0.5
        let p = ModelParameters::SHIPPED;
        let logit_04 = (0.4_f64 / 0.6).ln();
        let params = ModelParameters::new(
            *p.coefficients(),
            logit_04,
            *p.scaler_means(),
            *p.scaler_scales(),
            p.threshold(),
        )
        .unwrap();
        let score = LogisticScorer::new(params).score(&at_means());
        assert!((score.probability - 0.4).abs() < 1e-12);
        assert_eq!(score.classification, RiskClass::Positive);
    }

    #[test]
    fn test_zero_scale_contributes_nothing() {
        let p = ModelParameters::SHIPPED;
        let mut scales = *p.scaler_scales();
        scales[FeatureColumn::Visit.index()] = 0.0;
        let params = ModelParameters::new(
            *p.coefficients(),
            p.intercept(),
            *p.scaler_means(),
            scales,
            p.threshold(),
        )
        .unwrap();
        let features = at_means().with(FeatureColumn::Visit, 10.0);
        let score = LogisticScorer::new(params).score(&features);
        assert_eq!(score.linear_predictor, p.intercept());
        assert!(score.probability.is_finite());
    }

    #[test]
    fn test_wrong_length_rejected() {
        let scorer = LogisticScorer::default();
        let err = scorer.score_values(&[0.0; FEATURE_COUNT - 1]).unwrap_err();
        assert_eq!(err.actual, FEATURE_COUNT - 1);
        assert!(scorer.score_values(&[0.0; FEATURE_COUNT + 1]).is_err());
        assert!(scorer.score_values(at_means().values()).is_ok());
    }

    #[test]
    fn test_contributions_sum_to_linear_predictor() {
        let scorer = LogisticScorer::default();
        let features = at_means()
            .with(FeatureColumn::Accuracy, 0.7)
            .with(FeatureColumn::MeanRt, 0.62);
        let contributions = scorer.contributions(&features);
        assert_eq!(contributions.len(), FEATURE_COUNT);
        assert_eq!(contributions[0].feature, "visit");
        let total = scorer.params().intercept()
            + contributions.iter().map(|c| c.contribution).sum::<f64>();
        assert!((total - scorer.linear_predictor(&features)).abs() < 1e-12);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let scorer = LogisticScorer::default();
        let features = at_means().with(FeatureColumn::FailRate, 0.31);
        let a = scorer.score(&features);
        let b = scorer.score(&features);
        assert_eq!(a.linear_predictor.to_bits(), b.linear_predictor.to_bits());
        assert_eq!(a.probability.to_bits(), b.probability.to_bits());
        assert_eq!(a.classification, b.classification);
    }

    #[test]
    fn test_risk_class_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&RiskClass::Positive).unwrap(), "1");
        assert_eq!(serde_json::to_string(&RiskClass::Negative).unwrap(), "0");
        assert_eq!(serde_json::from_str::<RiskClass>("1").unwrap(), RiskClass::Positive);
        assert!(serde_json::from_str::<RiskClass>("2").is_err());
    }
}
