use std::path::PathBuf;

use chrono::NaiveDate;
use cogrisk_evaluator::screening::{CriteriaReport, RiskAssessment, ScreeningService};
use serde::Serialize;

use crate::{
    command::ScoringArg,
    schema::{
        model_file::{ModelFile, ModelInfo},
        request::AssessmentRequest,
    },
    util::{self, Output},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct AssessArg {
    /// Assessment request JSON file with `profile` and `sessions`
    request: PathBuf,
    #[clap(flatten)]
    scoring: ScoringArg,
    /// Output file path (defaults to stdout)
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct AssessmentReport<'a> {
    model: ModelInfo<'a>,
    evaluated_on: NaiveDate,
    /// Statistical flag, computed from the Go/No-Go session
    risk: RiskAssessment,
    criteria: CriteriaReport,
}

pub(crate) fn run(arg: &AssessArg) -> anyhow::Result<()> {
    let AssessArg {
        request,
        scoring,
        output,
    } = arg;

    let request: AssessmentRequest = util::read_json_file("assessment request", request)?;
    let model = ModelFile::load_or_shipped(scoring.model.as_deref())?;
    let evaluated_on = scoring.evaluated_on();

    let service = ScreeningService::new(model.parameters.clone());
    let risk = service.classify_risk(&request.sessions.go_no_go, &request.profile, evaluated_on);
    let criteria = service.evaluate_criteria(&request.sessions);
    tracing::info!(
        probability = risk.score.probability,
        classification = ?risk.score.classification,
        "Assessed request"
    );

    let report = AssessmentReport {
        model: model.info(),
        evaluated_on,
        risk,
        criteria,
    };
    Output::save_json(&report, output.as_deref())?;
    Ok(())
}
