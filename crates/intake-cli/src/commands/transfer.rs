use crate::commands::{print_json, Context};
use anyhow::{Context as _, Result};
use clap::Args;
use intake_store::snapshot::Snapshot;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Write to this file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    pub file: PathBuf,
}

pub fn export(ctx: &Context<'_>, args: ExportArgs) -> Result<()> {
    let snapshot = ctx.store.snapshot().with_context(|| "load records")?;
    let body = snapshot.to_json_pretty()?;

    match args.out {
        Some(path) => {
            fs::write(&path, format!("{body}\n"))
                .with_context(|| format!("write export {}", path.display()))?;
            info!(
                path = %path.display(),
                inquiries = snapshot.inquiries.len(),
                follow_ups = snapshot.follow_ups.len(),
                "export written"
            );
            if !ctx.json {
                println!(
                    "exported {} inquiries and {} follow-ups to {}",
                    snapshot.inquiries.len(),
                    snapshot.follow_ups.len(),
                    path.display()
                );
            }
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{body}")?;
        }
    }
    Ok(())
}

pub fn import(ctx: &Context<'_>, args: ImportArgs) -> Result<()> {
    let snapshot = Snapshot::read_from(&args.file)
        .with_context(|| format!("read snapshot {}", args.file.display()))?;
    let report = ctx.store.import(&snapshot).with_context(|| "import records")?;

    if ctx.json {
        return print_json(&report);
    }
    println!(
        "imported {} inquiries ({} skipped) and {} follow-ups ({} skipped)",
        report.inquiries_added,
        report.inquiries_skipped,
        report.follow_ups_added,
        report.follow_ups_skipped
    );
    let invalid = report.inquiries_invalid + report.follow_ups_invalid;
    if invalid > 0 {
        eprintln!("warning: {invalid} records lacked an id or a required field and were skipped");
    }
    Ok(())
}
