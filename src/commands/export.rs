//! Export of Jira activity to CSV or JSON.

use super::activity::{fetch_report, WindowArgs};
use crate::{
    libs::{
        export::{DataExporter, ExportActivity, ExportFormat},
        messages::Message,
    },
    msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    window: WindowArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file, defaults to `jutrack_<from>_<to>.<format>` in the current directory
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn cmd(args: ExportArgs) -> Result<()> {
    let report = fetch_report(&args.window).await?;
    let window = &report.window;

    let output_path = args.output.unwrap_or_else(|| {
        let extension = match args.format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        };
        PathBuf::from(format!(
            "jutrack_{}_{}.{}",
            window.start_date().format("%Y%m%d"),
            window.end_date().format("%Y%m%d"),
            extension
        ))
    });

    let exporter = DataExporter::new(args.format, output_path);
    exporter.export(&ExportActivity::new(&report.events, &report.matrix, window))?;

    msg_success!(Message::ExportCompleted(exporter.output_path().display().to_string()));
    Ok(())
}
