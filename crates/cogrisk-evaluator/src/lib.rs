//! Scoring core for cognitive mini-game screening.
//!
//! This crate turns session metrics of the Go/No-Go, Stop-Signal and Tower-of-London
//! games into two independent outputs:
//!
//! 1. **Statistical risk flag** - a binary classification from a fixed, standardized
//!    logistic-regression model ([`feature_vector`] → [`scorer`]).
//!
//! 2. **Criteria report** - an evidence-graded mapping of the same telemetry onto a
//!    fixed catalogue of 18 diagnostic indicator criteria ([`criteria`]), with coarse
//!    per-game risk bands ([`risk_band`]).
//!
//! # Architecture
//!
//! ```text
//! GameMetrics + SubjectProfile          GameMetricsBundle
//!     ↓ feature_vector::build_features      ↓ criteria::infer_criteria
//! FeatureVector (16 columns)            18 × Criterion
//!     ↓ scorer::LogisticScorer              ↓ risk_band::band_games
//! RiskScore { probability, 0/1 }        GameRiskBands
//! ```
//!
//! Both paths are pure functions over immutable inputs. The model parameters
//! ([`model_params::ModelParameters`]) are injected into the scorer and never mutated;
//! the criteria catalogue and threshold tables are constants.
//!
//! [`screening::ScreeningService`] bundles both paths behind the two call surfaces
//! used by collaborators.
//!
//! # Known Limitations
//!
//! - **Gender encoding**: the model was trained with a closed two-valued code. Inputs
//!   outside the recognized "female" spellings are encoded as male. This is a property of
//!   the trained model.
//! - **Age range**: the model is not calibrated below 9 years; younger children are
//!   scored as if they were 10.
//! - **Unmeasured criteria**: 11 of the 18 criteria have no instrumented proxy in the
//!   current task battery and always report no evidence.

pub mod criteria;
pub mod feature_vector;
pub mod model_params;
pub mod risk_band;
pub mod scorer;
pub mod screening;
