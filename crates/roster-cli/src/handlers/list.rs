use crate::args::{FilterArgs, OutputFormat};
use crate::context::ExecutionContext;
use anyhow::Result;
use chrono::Local;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use roster_engine::{age, Page, SortField};
use serde::Serialize;

#[derive(Serialize)]
struct ListOutput {
    items: Vec<ListRow>,
    page_number: usize,
    total_pages: usize,
    total_count: usize,
}

#[derive(Serialize)]
struct ListRow {
    name: String,
    age: i32,
    role: String,
    unit: String,
    national_id: String,
}

#[allow(clippy::too_many_arguments)]
pub fn handle(
    ctx: &ExecutionContext,
    filter: &FilterArgs,
    sort_by: SortField,
    desc: bool,
    page: usize,
    page_size: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let roster = ctx.roster()?;
    let today = Local::now().date_naive();
    let page_size = ctx.page_size(page_size)?;

    let mut view = super::build_view(roster, today, page_size, filter, sort_by, desc)?;
    view.set_page(page);
    let visible = view.visible();

    let output = ListOutput {
        items: visible
            .items
            .iter()
            .map(|m| ListRow {
                name: m.full_name.clone(),
                age: age::age_on(m.birth_date, today),
                role: m.role.to_string(),
                unit: m.unit_name().unwrap_or("-").to_string(),
                national_id: m.national_id.clone(),
            })
            .collect(),
        page_number: visible.page_number,
        total_pages: visible.total_pages,
        total_count: visible.total_count,
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
        OutputFormat::Plain => print_table(&output, &visible),
    }

    Ok(())
}

fn print_table(output: &ListOutput, visible: &Page) {
    let colored = std::io::stdout().is_terminal();

    let header = format!(
        "{:<28} {:>4}  {:<12} {:<14} {:<16}",
        "NAME", "AGE", "ROLE", "UNIT", "NATIONAL ID"
    );
    if colored {
        println!("{}", header.bold());
    } else {
        println!("{}", header);
    }

    for row in &output.items {
        println!(
            "{:<28} {:>4}  {:<12} {:<14} {:<16}",
            row.name, row.age, row.role, row.unit, row.national_id
        );
    }

    if output.items.is_empty() {
        println!("(no members match)");
    }

    println!();
    println!(
        "Page {} of {} ({} members)",
        visible.page_number, visible.total_pages, visible.total_count
    );
}
