use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitcal")]
#[command(about = "Contribution calendar for your local git repositories")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, env = "GITCAL_REGISTRY", help = "Path to the repository registry file")]
    pub registry: Option<PathBuf>,

    #[arg(long, hide = true, help = "Treat this RFC3339 instant as the current time")]
    pub now: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a folder for git repositories and register them
    Add {
        #[arg(help = "Folder to scan recursively")]
        folder: PathBuf,
    },
    /// Render the contribution calendar of one author
    Stats {
        #[arg(long, help = "Author email to count commits for (exact match)")]
        email: String,

        #[arg(
            long,
            default_value_t = 6,
            allow_negative_numbers = true,
            help = "Number of months back to include (non-positive shows an empty window)"
        )]
        months: i64,

        #[arg(long, help = "Output day buckets as JSON")]
        json: bool,
    },
    /// List registered repositories
    List,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Add { folder } => crate::scan::exec(self.common, folder),
            Commands::Stats { email, months, json } => {
                crate::stats::exec(self.common, email, window_months(months), json)
            }
            Commands::List => crate::registry::exec(self.common),
        }
    }
}

/// Clamp a user-supplied month count into the window size; negatives become 0.
pub fn window_months(months: i64) -> u32 {
    u32::try_from(months.max(0)).unwrap_or(u32::MAX)
}
