use crate::args::{FilterArgs, OutputFormat};
use crate::context::ExecutionContext;
use anyhow::{Context, Result};
use chrono::Local;
use roster_engine::{report_rows, ReportRow, RosterSummary, SortField};
use serde::Serialize;
use std::path::PathBuf;

/// JSON report document: the rows plus the full-snapshot statistics the
/// rendered report carries in its header.
#[derive(Serialize)]
struct ReportDocument {
    rows: Vec<ReportRow>,
    summary: RosterSummary,
}

pub fn handle(
    ctx: &ExecutionContext,
    filter: &FilterArgs,
    sort_by: SortField,
    desc: bool,
    output: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let roster = ctx.roster()?;
    let today = Local::now().date_naive();

    let view = super::build_view(roster, today, ctx.page_size(None)?, filter, sort_by, desc)?;

    // The report consumes the whole filtered+sorted sequence, never a page.
    let sequence = view.filtered_sorted();
    let rows = report_rows(&sequence, today);

    let output_path = output.unwrap_or_else(|| {
        PathBuf::from(match format {
            OutputFormat::Json => "roster_export.json",
            OutputFormat::Plain => "roster_export.csv",
        })
    });

    match format {
        OutputFormat::Json => {
            let document = ReportDocument {
                rows,
                summary: view.summary(),
            };
            let content = serde_json::to_string_pretty(&document)?;
            std::fs::write(&output_path, content)
                .with_context(|| format!("Failed to write {}", output_path.display()))?;
        }
        OutputFormat::Plain => {
            let mut writer = csv::Writer::from_path(&output_path)
                .with_context(|| format!("Failed to write {}", output_path.display()))?;
            for row in &rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }
    }

    println!(
        "Exported {} members to {}",
        sequence.len(),
        output_path.display()
    );

    Ok(())
}
