use std::path::PathBuf;

use chrono::NaiveDate;
use cogrisk_evaluator::{
    screening::{RiskAssessment, ScreeningService},
    scorer::FeatureContribution,
};
use cogrisk_telemetry::{GameMetrics, SubjectProfile};
use serde::Serialize;

use crate::{
    command::ScoringArg,
    schema::model_file::{ModelFile, ModelInfo},
    util::{self, Output},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ClassifyArg {
    /// Session metrics JSON file
    metrics: PathBuf,
    /// Subject profile JSON file
    #[arg(long)]
    profile: PathBuf,
    /// Include the per-feature contributions to the linear predictor
    #[arg(long)]
    explain: bool,
    #[clap(flatten)]
    pub(super) scoring: ScoringArg,
    /// Output file path (defaults to stdout)
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ClassifyReport<'a> {
    model: ModelInfo<'a>,
    evaluated_on: NaiveDate,
    #[serde(flatten)]
    assessment: RiskAssessment,
    #[serde(skip_serializing_if = "Option::is_none")]
    contributions: Option<Vec<FeatureContribution>>,
}

pub(crate) fn run(arg: &ClassifyArg) -> anyhow::Result<()> {
    let ClassifyArg {
        metrics,
        profile,
        explain,
        scoring,
        output,
    } = arg;

    let session: GameMetrics = util::read_json_file("metrics", metrics)?;
    let profile: SubjectProfile = util::read_json_file("profile", profile)?;
    let model = ModelFile::load_or_shipped(scoring.model.as_deref())?;
    let evaluated_on = scoring.evaluated_on();

    let service = ScreeningService::new(model.parameters.clone());
    let assessment = service.classify_risk(&session, &profile, evaluated_on);
    tracing::info!(
        probability = assessment.score.probability,
        classification = ?assessment.score.classification,
        "Classified session"
    );
    let contributions = explain.then(|| service.scorer().contributions(&assessment.features));

    let report = ClassifyReport {
        model: model.info(),
        evaluated_on,
        assessment,
        contributions,
    };
    Output::save_json(&report, output.as_deref())?;
    Ok(())
}
