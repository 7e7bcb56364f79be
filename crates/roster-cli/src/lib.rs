mod args;
mod context;
mod handlers;

pub use args::Cli;

use anyhow::Result;
use args::Commands;
use context::ExecutionContext;

pub fn run(cli: Cli) -> Result<()> {
    let ctx = ExecutionContext::new(cli.data_dir, cli.snapshot)?;

    match cli.command {
        Commands::List {
            filter,
            sort_by,
            desc,
            page,
            page_size,
        } => handlers::list::handle(&ctx, &filter, sort_by, desc, page, page_size, cli.format),

        Commands::Stats => handlers::stats::handle(&ctx, cli.format),

        Commands::Export {
            filter,
            sort_by,
            desc,
            output,
        } => handlers::export::handle(&ctx, &filter, sort_by, desc, output, cli.format),
    }
}
