use border_checkpoint::config::AppConfig;
use border_checkpoint::error::AppError;
use border_checkpoint::workflows::checkpoint::shifts::DocumentBundle;
use border_checkpoint::workflows::checkpoint::{InspectionConfig, Inspector, Verdict};
use chrono::NaiveDate;
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct InspectArgs {
    /// Text file with one bulletin per line, applied in order
    #[arg(long)]
    pub(crate) bulletins: PathBuf,
    /// JSON object mapping document kinds (passport, access_permit, ...) to document text
    #[arg(long)]
    pub(crate) documents: PathBuf,
    /// Documents expiring on or before this date (YYYY-MM-DD) are rejected
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) expiry_cutoff: Option<NaiveDate>,
    /// Print the rule tables after the bulletins are applied
    #[arg(long)]
    pub(crate) show_rules: bool,
}

pub(crate) fn run_inspect(args: InspectArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?.inspection;
    if let Some(cutoff) = args.expiry_cutoff {
        config.expiry_cutoff = cutoff;
    }

    let inspector = load_inspector(&args.bulletins, config)?;
    if args.show_rules {
        println!("{}", serde_json::to_string_pretty(&inspector.snapshot())?);
    }

    let verdict = inspect_file(&inspector, &args.documents)?;
    println!("{verdict}");
    Ok(())
}

pub(crate) fn load_inspector(
    bulletins: &Path,
    config: InspectionConfig,
) -> Result<Inspector, AppError> {
    let text = fs::read_to_string(bulletins)?;
    let mut inspector = Inspector::with_config(config);
    inspector.receive_bulletin(&text)?;
    Ok(inspector)
}

pub(crate) fn inspect_file(inspector: &Inspector, documents: &Path) -> Result<Verdict, AppError> {
    let raw = fs::read_to_string(documents)?;
    let bundle: DocumentBundle = serde_json::from_str(&raw)?;
    Ok(inspector.inspect(bundle.iter())?)
}
