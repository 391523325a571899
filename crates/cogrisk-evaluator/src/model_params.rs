//! Parameters of the logistic risk model.
//!
//! A parameter set bundles the standardization scaler (per-feature mean and scale), the
//! logistic-regression coefficients and intercept, and the decision threshold. The set
//! shipped with the crate is [`ModelParameters::SHIPPED`]; alternative sets can be
//! deserialized, in which case they are validated once while loading.
//!
//! # Decision Threshold
//!
//! The shipped threshold is `0.3`, deliberately below the 0.5 midpoint: the model was
//! calibrated to favour sensitivity (fewer missed positives) over specificity. The value
//! is part of the trained model and is not a tuning knob.
//!
//! # Validation
//!
//! A parameter set is rejected when:
//!
//! - any coefficient, mean, scale or the intercept is not finite
//! - any scale is negative
//! - the threshold is not strictly between 0 and 1
//!
//! A scale of exactly zero is accepted; the scorer treats such a feature as contributing
//! nothing.

use serde::{Deserialize, Serialize};

use crate::feature_vector::{FEATURE_COUNT, FeatureColumn};

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ModelParamsError {
    #[display("{field} for feature '{feature}' is not finite")]
    NonFinite {
        field: &'static str,
        feature: &'static str,
    },
    #[display("intercept is not finite")]
    NonFiniteIntercept,
    #[display("scale for feature '{feature}' is negative ({value})")]
    NegativeScale { feature: &'static str, value: f64 },
    #[display("decision threshold must be in (0, 1), got {value}")]
    ThresholdOutOfRange { value: f64 },
}

/// Validated parameters of the standardized logistic model.
///
/// All arrays are indexed in model column order (see [`FeatureColumn`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawModelParameters")]
pub struct ModelParameters {
    coefficients: [f64; FEATURE_COUNT],
    intercept: f64,
    scaler_means: [f64; FEATURE_COUNT],
    scaler_scales: [f64; FEATURE_COUNT],
    threshold: f64,
}

#[derive(Debug, Clone, Deserialize)]
struct RawModelParameters {
    coefficients: [f64; FEATURE_COUNT],
    intercept: f64,
    scaler_means: [f64; FEATURE_COUNT],
    scaler_scales: [f64; FEATURE_COUNT],
    threshold: f64,
}

impl TryFrom<RawModelParameters> for ModelParameters {
    type Error = ModelParamsError;

    fn try_from(raw: RawModelParameters) -> Result<Self, Self::Error> {
        Self::new(
            raw.coefficients,
            raw.intercept,
            raw.scaler_means,
            raw.scaler_scales,
            raw.threshold,
        )
    }
}

impl ModelParameters {
    /// Parameters of the trained model shipped with this crate.
    #[allow(clippy::unreadable_literal)]
    pub const SHIPPED: Self = Self {
        coefficients: [
            -3.8135472409751108,
            0.0,
            3.3655277981956595,
            0.402634242110309,
            1.4431032983970766,
            0.415677509110848,
            0.0,
            -0.5758817587898222,
            3.386762082054547,
            1.6835862368801215,
            0.3023652790048167,
            1.4267719077370473,
            1.8859665887857608,
            0.5682283978320876,
            -1.688652367108186,
            1.688652367108186,
        ],
        intercept: 0.562454514484786,
        scaler_means: [
            2.08,
            1.0,
            10.88,
            1.5,
            1.0866666666666667,
            2.2466666666666666,
            160.0,
            0.8638200000000003,
            0.8591616666666666,
            0.1425883333333333,
            0.4980619987759016,
            0.47591,
            0.7071693333333333,
            0.11748110551753975,
            137.19333333333333,
            22.80666666666667,
        ],
        scaler_scales: [
            1.852997571504075,
            1.0,
            0.9724196624914575,
            0.5,
            0.2813459712801226,
            0.4310710176087256,
            1.0,
            0.044694184185417235,
            0.0588348120918975,
            0.05861613214143543,
            0.06436330426093971,
            0.05134319396635417,
            0.14950741372773313,
            0.04244874518410925,
            9.384879091152722,
            9.384879091152722,
        ],
        threshold: 0.3,
    };

    /// Creates a validated parameter set.
    pub fn new(
        coefficients: [f64; FEATURE_COUNT],
        intercept: f64,
        scaler_means: [f64; FEATURE_COUNT],
        scaler_scales: [f64; FEATURE_COUNT],
        threshold: f64,
    ) -> Result<Self, ModelParamsError> {
        if !intercept.is_finite() {
            return Err(ModelParamsError::NonFiniteIntercept);
        }
        for column in FeatureColumn::ALL {
            let i = column.index();
            for (field, value) in [
                ("coefficient", coefficients[i]),
                ("scaler mean", scaler_means[i]),
                ("scaler scale", scaler_scales[i]),
            ] {
                if !value.is_finite() {
                    return Err(ModelParamsError::NonFinite {
                        field,
                        feature: column.name(),
                    });
                }
            }
            if scaler_scales[i] < 0.0 {
                return Err(ModelParamsError::NegativeScale {
                    feature: column.name(),
                    value: scaler_scales[i],
                });
            }
        }
        if !(threshold > 0.0 && threshold < 1.0) {
            return Err(ModelParamsError::ThresholdOutOfRange { value: threshold });
        }
        Ok(Self {
            coefficients,
            intercept,
            scaler_means,
            scaler_scales,
            threshold,
        })
    }

    #[must_use]
    pub const fn coefficients(&self) -> &[f64; FEATURE_COUNT] {
        &self.coefficients
    }

    #[must_use]
    pub const fn intercept(&self) -> f64 {
        self.intercept
    }

    #[must_use]
    pub const fn scaler_means(&self) -> &[f64; FEATURE_COUNT] {
        &self.scaler_means
    }

    #[must_use]
    pub const fn scaler_scales(&self) -> &[f64; FEATURE_COUNT] {
        &self.scaler_scales
    }

    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self::SHIPPED
    }
}
