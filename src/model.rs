use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SCHEMA_VERSION: u32 = 1;

/// One authored commit as read from a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub id: String,
    pub author_email: String,
    pub authored: DateTime<FixedOffset>,
}

/// Commit counts keyed by day offset from today.
///
/// Every offset of the window `1..=max_days` is present from construction, so
/// a day without commits is an explicit zero rather than a missing key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayBucketMap {
    max_days: u32,
    counts: BTreeMap<u32, u32>,
}

impl DayBucketMap {
    pub fn with_window(max_days: u32) -> Self {
        Self {
            max_days,
            counts: (1..=max_days).map(|day| (day, 0)).collect(),
        }
    }

    pub fn max_days(&self) -> u32 {
        self.max_days
    }

    pub fn increment(&mut self, offset: u32) {
        *self.counts.entry(offset).or_insert(0) += 1;
    }

    pub fn get(&self, offset: u32) -> Option<u32> {
        self.counts.get(&offset).copied()
    }

    pub fn contains(&self, offset: u32) -> bool {
        self.counts.contains_key(&offset)
    }

    /// Entries in ascending offset order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.counts.iter().map(|(&offset, &count)| (offset, count))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| c as u64).sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayCount {
    pub offset: u32,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedRepository {
    pub path: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub email: String,
    pub months: u32,
    pub max_days: u32,
    pub total_commits: u64,
    pub buckets: Vec<DayCount>,
    pub skipped: Vec<SkippedRepository>,
}
