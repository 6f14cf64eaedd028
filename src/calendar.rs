use crate::model::DayBucketMap;
use std::collections::BTreeMap;

pub const DAYS_PER_WEEK: u32 = 7;

/// Daily counts of one week, in the order the offsets were visited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Column(Vec<u32>);

impl Column {
    pub fn get(&self, day: usize) -> Option<u32> {
        self.0.get(day).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.0.iter().map(|&c| c as u64).sum()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }
}

/// Week index (0 = the week holding today) to its column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    weeks: BTreeMap<u32, Column>,
}

impl Grid {
    /// Fold day offsets into week columns.
    ///
    /// A column is stored only once an offset falling on the last slot of its
    /// week (`offset % 7 == 6`) has been seen; a trailing partial week is dropped.
    pub fn build(buckets: &DayBucketMap) -> Self {
        let mut weeks = BTreeMap::new();
        let mut column: Vec<u32> = Vec::with_capacity(DAYS_PER_WEEK as usize);

        for (offset, count) in buckets.iter() {
            let week = offset / DAYS_PER_WEEK;
            let day = offset % DAYS_PER_WEEK;

            if day == 0 {
                column = Vec::with_capacity(DAYS_PER_WEEK as usize);
            }
            column.push(count);

            if day == DAYS_PER_WEEK - 1 {
                weeks.insert(week, Column(column.clone()));
            }
        }

        Self { weeks }
    }

    pub fn column(&self, week: u32) -> Option<&Column> {
        self.weeks.get(&week)
    }

    /// Count at `(week, day)`; anything not stored reads as zero.
    pub fn count(&self, week: u32, day: usize) -> u32 {
        self.column(week).and_then(|c| c.get(day)).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.weeks.values().map(Column::total).sum()
    }
}
