//! Feature vector construction for the risk model.
//!
//! The logistic model was trained on a fixed 16-column layout. This module turns one
//! session's [`GameMetrics`] plus the child's [`SubjectProfile`] into a
//! [`FeatureVector`] in exactly that layout.
//!
//! # Column Layout
//!
//! ```text
//! visit, session, age, gender, runid1, runid2, n_trials, responded_rate,
//! accuracy, fail_rate, mean_rt, median_rt, p95_rt, std_rt, n_correct, n_incorrect
//! ```
//!
//! # Construction Rules
//!
//! - **Identifiers** (`visit`, `session`, `runid1`, `runid2`) are always `1`. They are
//!   placeholders of the training layout and carry no session information.
//! - **Age** is measured in 365.25-day years. Ages below 9.0 are replaced by exactly 10.0
//!   because the model is not calibrated for younger children; other ages are rounded
//!   to two decimals.
//! - **Gender** is a closed two-valued code: a small set of "female" spellings maps to
//!   `2`, everything else (including empty input) maps to `1`. This mirrors the encoding
//!   of the training data and cannot represent other gender identities.
//! - **Trial projection** rescales count features to the 160-trial protocol:
//!   `n_trials` is always 160 and `n_correct`/`n_incorrect` are multiplied by
//!   `160 / trial_count` (or by 0 when no trials were recorded).
//! - **Pass-through** metrics are copied verbatim.
//!
//! Absent or non-finite inputs are read as `0`; building a vector never fails.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use cogrisk_evaluator::feature_vector::{FeatureColumn, build_features};
//! use cogrisk_telemetry::{GameMetrics, SubjectProfile};
//!
//! let metrics = GameMetrics { trial_count: 80.0, n_correct: 70.0, n_incorrect: 10.0, ..Default::default() };
//! let profile = SubjectProfile::new(NaiveDate::from_ymd_opt(2014, 5, 10).unwrap(), "F");
//! let today = NaiveDate::from_ymd_opt(2025, 5, 10).unwrap();
//!
//! let features = build_features(&metrics, &profile, today);
//! assert_eq!(features.get(FeatureColumn::NTrials), 160.0);
//! assert_eq!(features.get(FeatureColumn::NCorrect), 140.0);
//! assert_eq!(features.get(FeatureColumn::Gender), 2.0);
//! ```

use std::collections::BTreeMap;

use chrono::NaiveDate;
use cogrisk_telemetry::{GameMetrics, SubjectProfile};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser::SerializeMap as _};

/// Number of columns of the model layout.
pub const FEATURE_COUNT: usize = 16;

/// Trial count of the protocol the model was trained on.
pub const PROTOCOL_TRIALS: f64 = 160.0;

const DAYS_PER_YEAR: f64 = 365.25;
const MIN_CALIBRATED_AGE: f64 = 9.0;
const UNCALIBRATED_AGE_SUBSTITUTE: f64 = 10.0;

const GENDER_MALE: f64 = 1.0;
const GENDER_FEMALE: f64 = 2.0;
const FEMALE_SPELLINGS: [&str; 5] = ["F", "FEMENINO", "FEMALE", "MUJER", "NIÑA"];

const IDENTIFIER_PLACEHOLDER: f64 = 1.0;

/// A column of the model layout, in model order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FeatureColumn {
    Visit,
    Session,
    Age,
    Gender,
    RunId1,
    RunId2,
    NTrials,
    RespondedRate,
    Accuracy,
    FailRate,
    MeanRt,
    MedianRt,
    P95Rt,
    StdRt,
    NCorrect,
    NIncorrect,
}

impl FeatureColumn {
    pub const ALL: [Self; FEATURE_COUNT] = [
        Self::Visit,
        Self::Session,
        Self::Age,
        Self::Gender,
        Self::RunId1,
        Self::RunId2,
        Self::NTrials,
        Self::RespondedRate,
        Self::Accuracy,
        Self::FailRate,
        Self::MeanRt,
        Self::MedianRt,
        Self::P95Rt,
        Self::StdRt,
        Self::NCorrect,
        Self::NIncorrect,
    ];

    pub const NAMES: [&'static str; FEATURE_COUNT] = [
        "visit",
        "session",
        "age",
        "gender",
        "runid1",
        "runid2",
        "n_trials",
        "responded_rate",
        "accuracy",
        "fail_rate",
        "mean_rt",
        "median_rt",
        "p95_rt",
        "std_rt",
        "n_correct",
        "n_incorrect",
    ];

    /// Position of the column in the model layout.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Column name as used by the training data.
    #[must_use]
    pub const fn name(self) -> &'static str {
        Self::NAMES[self.index()]
    }
}

/// Error returned when a raw value slice does not match the model layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("feature vector must have {expected} values, got {actual}")]
pub struct FeatureLengthError {
    pub expected: usize,
    pub actual: usize,
}

/// Exactly [`FEATURE_COUNT`] feature values in model order.
///
/// Serializes as a name-to-value map in model order. Deserialization requires every
/// column name exactly once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    #[must_use]
    pub const fn from_values(values: [f64; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    #[must_use]
    pub const fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.values
    }

    #[must_use]
    pub const fn get(&self, column: FeatureColumn) -> f64 {
        self.values[column.index()]
    }

    /// Returns a copy with one column replaced.
    ///
    /// ```
    /// use cogrisk_evaluator::feature_vector::{FeatureColumn, FeatureVector};
    ///
    /// let features = FeatureVector::from_values([0.0; 16]).with(FeatureColumn::Visit, 10.0);
    /// assert_eq!(features.get(FeatureColumn::Visit), 10.0);
    /// ```
    #[must_use]
    pub const fn with(mut self, column: FeatureColumn, value: f64) -> Self {
        self.values[column.index()] = value;
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (FeatureColumn, f64)> + '_ {
        FeatureColumn::ALL.into_iter().zip(self.values)
    }
}

impl TryFrom<&[f64]> for FeatureVector {
    type Error = FeatureLengthError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        let values = <[f64; FEATURE_COUNT]>::try_from(values).map_err(|_| FeatureLengthError {
            expected: FEATURE_COUNT,
            actual: values.len(),
        })?;
        Ok(Self { values })
    }
}

impl Serialize for FeatureVector {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(FEATURE_COUNT))?;
        for (column, value) in self.iter() {
            map.serialize_entry(column.name(), &value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FeatureVector {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = BTreeMap::<String, f64>::deserialize(deserializer)?;
        if let Some(unknown) = map
            .keys()
            .find(|name| !FeatureColumn::NAMES.contains(&name.as_str()))
        {
            return Err(de::Error::unknown_field(unknown, &FeatureColumn::NAMES));
        }
        let mut values = [0.0; FEATURE_COUNT];
        for column in FeatureColumn::ALL {
            values[column.index()] = *map
                .get(column.name())
                .ok_or_else(|| <D::Error as de::Error>::missing_field(column.name()))?;
        }
        Ok(Self { values })
    }
}

/// Builds the model feature vector for one session.
///
/// `evaluated_on` is the date the assessment is scored at; it is an explicit argument
/// so that identical inputs always produce identical vectors.
#[must_use]
pub fn build_features(
    metrics: &GameMetrics,
    profile: &SubjectProfile,
    evaluated_on: NaiveDate,
) -> FeatureVector {
    let projection = TrialProjection::new(metrics.trial_count);

    let mut values = [0.0; FEATURE_COUNT];
    let mut set = |column: FeatureColumn, value: f64| values[column.index()] = value;

    set(FeatureColumn::Visit, IDENTIFIER_PLACEHOLDER);
    set(FeatureColumn::Session, IDENTIFIER_PLACEHOLDER);
    set(FeatureColumn::Age, age_feature(profile.birth_date, evaluated_on));
    set(FeatureColumn::Gender, gender_code(&profile.sex));
    set(FeatureColumn::RunId1, IDENTIFIER_PLACEHOLDER);
    set(FeatureColumn::RunId2, IDENTIFIER_PLACEHOLDER);
    set(FeatureColumn::NTrials, PROTOCOL_TRIALS);
    set(FeatureColumn::RespondedRate, sanitize(metrics.responded_rate));
    set(FeatureColumn::Accuracy, sanitize(metrics.accuracy));
    set(FeatureColumn::FailRate, sanitize(metrics.fail_rate));
    set(FeatureColumn::MeanRt, sanitize(metrics.mean_rt));
    set(FeatureColumn::MedianRt, sanitize(metrics.median_rt));
    set(FeatureColumn::P95Rt, sanitize(metrics.p95_rt));
    set(FeatureColumn::StdRt, sanitize(metrics.std_rt));
    set(FeatureColumn::NCorrect, projection.project(metrics.n_correct));
    set(FeatureColumn::NIncorrect, projection.project(metrics.n_incorrect));

    let features = FeatureVector { values };
    tracing::debug!(
        age = features.get(FeatureColumn::Age),
        gender = features.get(FeatureColumn::Gender),
        projection_factor = projection.factor,
        "built feature vector"
    );
    features
}

/// Age feature in years for a child born on `birth_date`, evaluated on `evaluated_on`.
///
/// ```
/// use chrono::NaiveDate;
/// use cogrisk_evaluator::feature_vector::age_feature;
///
/// let born = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
/// // Six years old: below the calibrated range, replaced by 10.0
/// assert_eq!(age_feature(born, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()), 10.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn age_feature(birth_date: NaiveDate, evaluated_on: NaiveDate) -> f64 {
    let days = (evaluated_on - birth_date).num_days();
    let years = days as f64 / DAYS_PER_YEAR;
    if years < MIN_CALIBRATED_AGE {
        UNCALIBRATED_AGE_SUBSTITUTE
    } else {
        (years * 100.0).round() / 100.0
    }
}

/// Gender code of the training layout: `2.0` for female spellings, `1.0` otherwise.
///
/// ```
/// use cogrisk_evaluator::feature_vector::gender_code;
///
/// assert_eq!(gender_code("Femenino"), 2.0);
/// assert_eq!(gender_code("M"), 1.0);
/// assert_eq!(gender_code(""), 1.0);
/// ```
#[must_use]
pub fn gender_code(sex: &str) -> f64 {
    let normalized = sex.trim().to_uppercase();
    if FEMALE_SPELLINGS.contains(&normalized.as_str()) {
        GENDER_FEMALE
    } else {
        GENDER_MALE
    }
}

/// Rescaling of count features to the 160-trial protocol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialProjection {
    /// `160 / trial_count`, or `0` when no trials were recorded
    pub factor: f64,
}

impl TrialProjection {
    #[must_use]
    pub fn new(trial_count: f64) -> Self {
        let trial_count = sanitize(trial_count);
        let factor = if trial_count > 0.0 {
            PROTOCOL_TRIALS / trial_count
        } else {
            0.0
        };
        Self { factor }
    }

    #[must_use]
    pub fn project(self, count: f64) -> f64 {
        sanitize(count) * self.factor
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
