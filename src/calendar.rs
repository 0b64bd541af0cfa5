//! Time-window helpers for season, month, and week views.

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};
use serde::Serialize;

use crate::types::{RaceEntry, RaceStatus};

/// An inclusive date window, typically one season (calendar year).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeasonWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl SeasonWindow {
    /// The calendar-year window for `year`.
    ///
    /// Returns `None` for years chrono cannot represent.
    pub fn calendar_year(year: i32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1)?.and_hms_opt(0, 0, 0)?.and_utc();
        let end = NaiveDate::from_ymd_opt(year, 12, 31)?.and_hms_opt(23, 59, 59)?.and_utc();
        Some(SeasonWindow { start, end })
    }

    /// The season window containing `date`.
    pub fn containing(date: DateTime<Utc>) -> Option<Self> {
        Self::calendar_year(date.year())
    }

    pub fn contains(&self, date: DateTime<Utc>) -> bool {
        date >= self.start && date <= self.end
    }
}

/// The calendar month window containing `date`.
pub fn month_window(date: DateTime<Utc>) -> Option<SeasonWindow> {
    let first = NaiveDate::from_ymd_opt(date.year(), date.month(), 1)?;
    let next_month = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)?
    };
    let last = next_month.pred_opt()?;
    Some(SeasonWindow {
        start: first.and_hms_opt(0, 0, 0)?.and_utc(),
        end: last.and_hms_opt(23, 59, 59)?.and_utc(),
    })
}

/// The Monday-start week window containing `date`.
pub fn week_window(date: DateTime<Utc>) -> Option<SeasonWindow> {
    let offset = u64::from(date.weekday().num_days_from_monday());
    let monday = date.date_naive().checked_sub_days(Days::new(offset))?;
    let sunday = monday.checked_add_days(Days::new(6))?;
    Some(SeasonWindow {
        start: monday.and_hms_opt(0, 0, 0)?.and_utc(),
        end: sunday.and_hms_opt(23, 59, 59)?.and_utc(),
    })
}

/// The next race still ahead of `now`: upcoming status, earliest date.
pub fn next_upcoming(races: &[RaceEntry], now: DateTime<Utc>) -> Option<&RaceEntry> {
    races
        .iter()
        .filter(|race| race.status == RaceStatus::Upcoming && race.date > now)
        .min_by_key(|race| race.date)
}

/// The `n` most recently completed races, newest first.
pub fn recent_completed(races: &[RaceEntry], n: usize) -> Vec<&RaceEntry> {
    let mut completed: Vec<&RaceEntry> = races.iter().filter(|r| r.is_completed()).collect();
    completed.sort_by(|a, b| b.date.cmp(&a.date));
    completed.truncate(n);
    completed
}

/// How far through the planned season the driver is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonProgress {
    pub completed: u32,
    pub remaining: u32,
    /// Completed share of (completed + remaining), 0-100. Zero when
    /// nothing is planned.
    pub percent: f64,
}

/// Season progress: completed races against future upcoming ones.
pub fn season_progress(races: &[RaceEntry], now: DateTime<Utc>) -> SeasonProgress {
    let completed = races.iter().filter(|r| r.is_completed()).count() as u32;
    let remaining = races
        .iter()
        .filter(|r| r.status == RaceStatus::Upcoming && r.date > now)
        .count() as u32;
    let total = completed + remaining;
    let percent =
        if total == 0 { 0.0 } else { f64::from(completed) / f64::from(total) * 100.0 };
    SeasonProgress { completed, remaining, percent }
}
