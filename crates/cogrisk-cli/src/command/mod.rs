use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use self::{
    assess::AssessArg, classify::ClassifyArg, criteria::CriteriaArg,
    export_model::ExportModelArg, summarize::SummarizeArg,
};

mod assess;
mod classify;
mod criteria;
mod export_model;
mod summarize;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Score one session with the logistic risk model
    Classify(#[clap(flatten)] ClassifyArg),
    /// Grade the criteria catalogue for a three-game metrics bundle
    Criteria(#[clap(flatten)] CriteriaArg),
    /// Run the risk model and the criteria report for one assessment request
    Assess(#[clap(flatten)] AssessArg),
    /// Reduce per-trial telemetry of one game to session metrics
    Summarize(#[clap(flatten)] SummarizeArg),
    /// Write the built-in model parameters as a model file
    ExportModel(#[clap(flatten)] ExportModelArg),
}

/// Options shared by the commands that run the risk model.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ScoringArg {
    /// Model file to score with (defaults to the built-in parameters)
    #[arg(long)]
    model: Option<PathBuf>,
    /// Reference date for the age feature, YYYY-MM-DD (defaults to today, UTC)
    #[arg(long)]
    evaluated_on: Option<NaiveDate>,
}

impl ScoringArg {
    fn evaluated_on(&self) -> NaiveDate {
        self.evaluated_on
            .unwrap_or_else(|| chrono::Utc::now().date_naive())
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Classify(arg) => classify::run(&arg)?,
        Mode::Criteria(arg) => criteria::run(&arg)?,
        Mode::Assess(arg) => assess::run(&arg)?,
        Mode::Summarize(arg) => summarize::run(&arg)?,
        Mode::ExportModel(arg) => export_model::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_classify_with_date() {
        let args = CommandArgs::try_parse_from([
            "cogrisk",
            "classify",
            "session.json",
            "--profile",
            "child.json",
            "--evaluated-on",
            "2025-03-01",
        ])
        .unwrap();
        let Mode::Classify(arg) = args.mode else {
            panic!("expected classify");
        };
        assert_eq!(
            arg.scoring.evaluated_on(),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
        );
    }

    #[test]
    fn test_reject_malformed_date() {
        let result = CommandArgs::try_parse_from([
            "cogrisk",
            "assess",
            "request.json",
            "--evaluated-on",
            "01/03/2025",
        ]);
        assert!(result.is_err());
    }
}
