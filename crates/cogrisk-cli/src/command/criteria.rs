use std::path::PathBuf;

use cogrisk_evaluator::screening::ScreeningService;
use cogrisk_telemetry::GameMetricsBundle;

use crate::util::{self, Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct CriteriaArg {
    /// Metrics bundle JSON file with `go_no_go`, `stop_signal` and `tower_of_london`
    bundle: PathBuf,
    /// Output file path (defaults to stdout)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &CriteriaArg) -> anyhow::Result<()> {
    let CriteriaArg { bundle, output } = arg;

    let bundle: GameMetricsBundle = util::read_json_file("metrics bundle", bundle)?;
    let report = ScreeningService::shipped().evaluate_criteria(&bundle);
    for domain in &report.domains {
        tracing::info!(
            domain = %domain.domain,
            measured = domain.measured,
            moderate_or_stronger = domain.moderate_or_stronger,
            strongest = %domain.strongest,
            "Graded domain"
        );
    }
    Output::save_json(&report, output.as_deref())?;
    Ok(())
}
