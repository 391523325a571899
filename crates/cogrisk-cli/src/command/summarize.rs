use std::path::{Path, PathBuf};

use cogrisk_telemetry::{
    GameKind, GameMetrics, InhibitionTrial, PlanningProblem,
    summary::{summarize_go_no_go, summarize_stop_signal, summarize_tower_of_london},
};

use crate::util::{self, Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SummarizeArg {
    /// Per-trial telemetry JSON file (array of trials, or of problems for tower-of-london)
    trials: PathBuf,
    /// Game the telemetry was recorded in
    #[arg(long)]
    game: GameArg,
    /// Output file path (defaults to stdout)
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum GameArg {
    GoNoGo,
    StopSignal,
    TowerOfLondon,
}

impl From<GameArg> for GameKind {
    fn from(value: GameArg) -> Self {
        match value {
            GameArg::GoNoGo => GameKind::GoNoGo,
            GameArg::StopSignal => GameKind::StopSignal,
            GameArg::TowerOfLondon => GameKind::TowerOfLondon,
        }
    }
}

pub(crate) fn run(arg: &SummarizeArg) -> anyhow::Result<()> {
    let SummarizeArg {
        trials,
        game,
        output,
    } = arg;

    let kind = GameKind::from(*game);
    let metrics = summarize_file(kind, trials)?;
    tracing::info!(
        game = %kind,
        trials = metrics.trial_count,
        accuracy = metrics.accuracy,
        "Summarized telemetry"
    );
    Output::save_json(&metrics, output.as_deref())?;
    Ok(())
}

fn summarize_file(kind: GameKind, path: &Path) -> anyhow::Result<GameMetrics> {
    let metrics = match kind {
        GameKind::GoNoGo => {
            let trials: Vec<InhibitionTrial> = util::read_json_file("trials", path)?;
            summarize_go_no_go(&trials)
        }
        GameKind::StopSignal => {
            let trials: Vec<InhibitionTrial> = util::read_json_file("trials", path)?;
            summarize_stop_signal(&trials)
        }
        GameKind::TowerOfLondon => {
            let problems: Vec<PlanningProblem> = util::read_json_file("problems", path)?;
            summarize_tower_of_london(&problems)
        }
    };
    Ok(metrics)
}
