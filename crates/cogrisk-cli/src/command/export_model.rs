use std::path::PathBuf;

use crate::{schema::model_file::ModelFile, util::Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ExportModelArg {
    /// Output file path (defaults to stdout)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ExportModelArg) -> anyhow::Result<()> {
    let ExportModelArg { output } = arg;
    Output::save_json(&ModelFile::shipped(), output.as_deref())?;
    Ok(())
}
