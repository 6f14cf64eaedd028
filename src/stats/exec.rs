use super::{collect_buckets, output_calendar, output_json};
use crate::cli::CommonArgs;
use crate::registry::Registry;
use crate::util::Today;
use anyhow::Context;
use console::style;

pub fn exec(common: CommonArgs, email: String, months: u32, json: bool) -> anyhow::Result<()> {
    let registry =
        Registry::locate(common.registry.as_deref()).context("Failed to locate registry")?;
    let today = Today::from_arg(common.now.as_deref()).context("Failed to resolve current time")?;

    let collected = collect_buckets(&registry, &email, months, today)
        .with_context(|| format!("Failed to read {}", registry.path().display()))?;

    for (path, err) in &collected.skipped {
        eprintln!("{} {}: {}", style("Skip repo").yellow(), path.display(), err);
    }

    if json {
        output_json(&collected, &email, months)?;
    } else {
        output_calendar(&collected, months, today)?;
    }

    Ok(())
}
