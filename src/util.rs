use crate::error::{GitcalError, Result};
use chrono::{DateTime, Datelike, Days, FixedOffset, Local, NaiveDate, TimeZone, Weekday};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// The reference point of one run: the current instant and its local midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Today {
    now: DateTime<FixedOffset>,
    midnight: DateTime<FixedOffset>,
}

impl Today {
    pub fn at(now: DateTime<FixedOffset>) -> Self {
        Self {
            now,
            midnight: beginning_of_day(&now),
        }
    }

    pub fn local() -> Self {
        Self::at(Local::now().into())
    }

    /// Parse an RFC3339 instant, or fall back to the local clock when `None`.
    pub fn from_arg(input: Option<&str>) -> Result<Self> {
        match input {
            Some(s) => DateTime::parse_from_rfc3339(s)
                .map(Self::at)
                .map_err(|e| GitcalError::InvalidDate(format!("'{s}': {e}"))),
            None => Ok(Self::local()),
        }
    }

    pub fn now(&self) -> DateTime<FixedOffset> {
        self.now
    }

    pub fn midnight(&self) -> DateTime<FixedOffset> {
        self.midnight
    }

    pub fn alignment(&self) -> u32 {
        weekday_alignment(self.now.weekday())
    }

    /// Midnight today, `months` calendar months back.
    ///
    /// The day of month is kept and any overflow rolls into the next month,
    /// so March 31st minus one month is March 2nd in a leap year.
    pub fn months_ago(&self, months: u32) -> DateTime<FixedOffset> {
        let date = self.midnight.date_naive();
        let total = i64::from(date.year()) * 12 + i64::from(date.month0()) - i64::from(months);
        let year = i32::try_from(total.div_euclid(12)).ok();
        let month = total.rem_euclid(12) as u32 + 1;

        year.and_then(|year| NaiveDate::from_ymd_opt(year, month, 1))
            .and_then(|first| first.checked_add_days(Days::new(u64::from(date.day() - 1))))
            .and_then(|day| day.and_hms_opt(0, 0, 0))
            .and_then(|midnight| self.midnight.offset().from_local_datetime(&midnight).single())
            .unwrap_or(self.midnight)
    }

    /// Number of whole 24-hour steps that carry `date` to or past midnight today.
    ///
    /// `date` is compared as recorded, in its own offset and without truncation
    /// to its own midnight. Returns `None` once the count exceeds `max_days`.
    pub fn count_days_since(&self, date: DateTime<FixedOffset>, max_days: u32) -> Option<u32> {
        let behind = self.midnight.signed_duration_since(date);
        let secs = behind.num_seconds();
        if secs < 0 || (secs == 0 && behind.subsec_nanos() <= 0) {
            return Some(0);
        }

        let partial = secs % SECONDS_PER_DAY != 0 || behind.subsec_nanos() > 0;
        let days = secs / SECONDS_PER_DAY + i64::from(partial);
        if days > i64::from(max_days) {
            None
        } else {
            u32::try_from(days).ok()
        }
    }
}

/// Shift that lines the day sequence up with calendar weeks ending today.
pub fn weekday_alignment(weekday: Weekday) -> u32 {
    7 - weekday.num_days_from_sunday()
}

pub fn beginning_of_day(t: &DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    t.date_naive()
        .and_hms_opt(0, 0, 0)
        .and_then(|midnight| t.offset().from_local_datetime(&midnight).single())
        .unwrap_or(*t)
}
