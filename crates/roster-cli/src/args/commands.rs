use super::common::FilterArgs;
use clap::Subcommand;
use roster_engine::SortField;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List the visible roster page")]
    List {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, default_value = "name", help = "Sort field: name, birth-date, role or unit-name")]
        sort_by: SortField,

        #[arg(long, help = "Sort descending")]
        desc: bool,

        #[arg(long, default_value = "1", help = "Page number (1-based)")]
        page: usize,

        #[arg(long, help = "Rows per page (defaults to the configured page size)")]
        page_size: Option<usize>,
    },

    #[command(about = "Show roster statistics over the full snapshot")]
    Stats,

    #[command(about = "Export the filtered roster as CSV")]
    Export {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, default_value = "name", help = "Sort field: name, birth-date, role or unit-name")]
        sort_by: SortField,

        #[arg(long, help = "Sort descending")]
        desc: bool,

        #[arg(long, help = "Output file (defaults to roster_export.csv)")]
        output: Option<PathBuf>,
    },
}
