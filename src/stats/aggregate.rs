use crate::model::{CommitRecord, DayBucketMap};
use crate::util::Today;
use chrono::{DateTime, FixedOffset};

/// Sums commits into day buckets relative to one fixed `Today`.
pub struct Aggregator {
    today: Today,
    max_days: u32,
    buckets: DayBucketMap,
}

impl Aggregator {
    /// Window of `months` thirty-day months.
    pub fn new(today: Today, months: u32) -> Self {
        let max_days = months.saturating_mul(30);
        Self {
            today,
            max_days,
            buckets: DayBucketMap::with_window(max_days),
        }
    }

    pub fn max_days(&self) -> u32 {
        self.max_days
    }

    /// Bucket key for a commit date, `None` when it falls outside the window.
    pub fn day_offset(&self, authored: DateTime<FixedOffset>) -> Option<u32> {
        self.today
            .count_days_since(authored, self.max_days)
            .map(|days| days + self.today.alignment())
    }

    pub fn add(&mut self, commit: &CommitRecord) -> bool {
        match self.day_offset(commit.authored) {
            Some(offset) => {
                self.buckets.increment(offset);
                true
            }
            None => false,
        }
    }

    /// Returns how many of `commits` landed inside the window.
    pub fn extend<'a, I>(&mut self, commits: I) -> usize
    where
        I: IntoIterator<Item = &'a CommitRecord>,
    {
        commits.into_iter().filter(|c| self.add(c)).count()
    }

    pub fn buckets(&self) -> &DayBucketMap {
        &self.buckets
    }

    pub fn finish(self) -> DayBucketMap {
        self.buckets
    }
}
