use crate::calendar::{Grid, DAYS_PER_WEEK};
use crate::util::Today;
use chrono::{Datelike, Duration};
use std::fmt;

pub const RESET: &str = "\x1b[0m";

/// Color tier of one calendar cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Empty,
    Low,
    Medium,
    High,
    Today,
}

impl Shade {
    pub fn classify(count: u32, today: bool) -> Self {
        if today {
            return Shade::Today;
        }
        match count {
            0 => Shade::Empty,
            1..=4 => Shade::Low,
            5..=9 => Shade::Medium,
            _ => Shade::High,
        }
    }

    pub fn escape(self) -> &'static str {
        match self {
            Shade::Empty => "\x1b[0;37;30m",
            Shade::Low => "\x1b[1;30;47m",
            Shade::Medium => "\x1b[1;30;43m",
            Shade::High => "\x1b[1;30;42m",
            Shade::Today => "\x1b[1;37;45m",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub count: u32,
    pub shade: Shade,
}

impl Cell {
    pub fn new(count: u32, today: bool) -> Self {
        Self {
            count,
            shade: Shade::classify(count, today),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.shade.escape())?;
        if self.count == 0 {
            f.write_str(" - ")?;
        } else {
            write!(f, " {} ", self.count)?;
        }
        f.write_str(RESET)
    }
}

pub fn weekday_label(day: usize) -> &'static str {
    match day {
        1 => " Mon ",
        3 => " Wed ",
        5 => " Fri ",
        _ => "     ",
    }
}

/// Contribution calendar ready to be printed.
///
/// Rows run from the last slot of a week down to the first; columns run
/// from the oldest week on the left to the current one on the right.
pub struct Calendar<'a> {
    grid: &'a Grid,
    months: u32,
    today: Today,
}

impl<'a> Calendar<'a> {
    pub fn new(grid: &'a Grid, months: u32, today: Today) -> Self {
        Self { grid, months, today }
    }

    pub fn weeks(&self) -> u32 {
        self.months.saturating_mul(30) / DAYS_PER_WEEK
    }

    pub fn is_today(&self, week: u32, day: usize) -> bool {
        week == 0 && day as u32 + 1 == self.today.alignment()
    }

    pub fn cell(&self, week: u32, day: usize) -> Cell {
        Cell::new(self.grid.count(week, day), self.is_today(week, day))
    }

    fn write_months(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut week = self.today.months_ago(self.months);
        let mut month = week.month();

        f.write_str("  ")?;
        loop {
            if week.month() != month {
                write!(f, "{} ", week.format("%b"))?;
                month = week.month();
            } else {
                f.write_str("  ")?;
            }
            week = week + Duration::days(7);
            if week > self.today.now() {
                break;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for Calendar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_months(f)?;

        let weeks = self.weeks();
        for day in (0..DAYS_PER_WEEK as usize).rev() {
            f.write_str(weekday_label(day))?;
            for week in (0..=weeks + 1).rev() {
                write!(f, "{}", self.cell(week, day))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
