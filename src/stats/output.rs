use super::Collected;
use crate::calendar::Grid;
use crate::model::{DayCount, SkippedRepository, StatsOutput, SCHEMA_VERSION};
use crate::render::Calendar;
use crate::util::Today;
use anyhow::Result;
use chrono::Utc;
use std::io::{self, Write};

pub fn output_json(collected: &Collected, email: &str, months: u32) -> Result<()> {
    let buckets = &collected.buckets;
    let output = StatsOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        email: email.to_string(),
        months,
        max_days: buckets.max_days(),
        total_commits: buckets.total(),
        buckets: buckets
            .iter()
            .map(|(offset, count)| DayCount { offset, count })
            .collect(),
        skipped: collected
            .skipped
            .iter()
            .map(|(path, err)| SkippedRepository {
                path: path.to_string_lossy().to_string(),
                reason: err.to_string(),
            })
            .collect(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn output_calendar(collected: &Collected, months: u32, today: Today) -> Result<()> {
    let grid = Grid::build(&collected.buckets);
    let calendar = Calendar::new(&grid, months, today);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write!(out, "{calendar}")?;
    out.flush()?;
    Ok(())
}
