use anyhow::Result;
use gitcal::cli::Cli;

fn main() -> Result<()> {
    gitcal::logging::setup_logger();
    let cli = Cli::parse();
    cli.execute()
}
