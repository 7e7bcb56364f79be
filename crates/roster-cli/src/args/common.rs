use clap::Args;
use roster_types::{AgeBracket, Role};

/// Filter flags shared by `list` and `export`.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    #[arg(long, help = "Name substring (case-insensitive) or national id substring")]
    pub search: Option<String>,

    #[arg(long, help = "Exact role (member, leader, pastor, deacon, ...)")]
    pub role: Option<Role>,

    #[arg(long, help = "Organization unit display name")]
    pub unit: Option<String>,

    #[arg(long, help = "Age bracket: <18, 18-29, 30-49, 50-64 or 65+")]
    pub bracket: Option<AgeBracket>,
}
