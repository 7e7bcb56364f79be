use crate::args::OutputFormat;
use crate::context::ExecutionContext;
use anyhow::Result;
use chrono::Local;
use owo_colors::OwoColorize;
use roster_engine::RosterSummary;

pub fn handle(ctx: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let roster = ctx.roster()?;
    let today = Local::now().date_naive();

    // Headline numbers always cover the whole snapshot; filters belong to
    // the list view, not here.
    let summary = roster.summary(today);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Plain => print_summary(&summary),
    }

    Ok(())
}

fn print_summary(summary: &RosterSummary) {
    println!("Members: {}", summary.total_members.bold());
    println!("Mean age: {:.1}", summary.mean_age);
    if let Some(role) = summary.most_common_role {
        println!("Most common role: {}", role);
    }
    println!();

    println!("{}", "By role".cyan());
    for entry in &summary.role_breakdown {
        println!(
            "  {:<12} {:>4}  {:>5.1}%",
            entry.role.to_string(),
            entry.count,
            entry.percentage
        );
    }
    println!();

    println!("{}", "By age bracket".cyan());
    for entry in &summary.age_breakdown {
        println!(
            "  {:<12} {:>4}  {:>5.1}%",
            entry.bracket.label(),
            entry.count,
            entry.percentage
        );
    }
    println!();

    println!("{}", "By unit".cyan());
    for entry in &summary.unit_breakdown {
        println!(
            "  {:<12} {:>4}  {:>5.1}%",
            entry.unit, entry.count, entry.percentage
        );
    }
}
