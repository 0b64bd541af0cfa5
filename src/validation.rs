//! Field-level validation for race entries.
//!
//! Used by import paths before entries reach the store. A failed check
//! lands in a field-keyed error map; validation of one entry never aborts
//! processing of the rest.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Utc};

use crate::types::RaceEntry;

/// Maximum race week within a season.
pub const MAX_SEASON_WEEK: u32 = 13;

/// Outcome of validating one entry: empty error map means valid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    /// Error messages keyed by field name.
    pub errors: BTreeMap<String, String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn push(&mut self, field: &str, message: impl Into<String>) {
        self.errors.insert(field.to_string(), message.into());
    }
}

/// Validate one race entry against `now` (used for the season-year check).
pub fn validate_race(race: &RaceEntry, now: DateTime<Utc>) -> ValidationResult {
    let mut result = ValidationResult::default();

    if race.series.trim().is_empty() {
        result.push("series", "Series is required");
    }
    if race.vehicle.trim().is_empty() {
        result.push("vehicle", "Vehicle is required");
    }
    if race.track.name.trim().is_empty() {
        result.push("track", "Track name is required");
    }

    if let Some(end_date) = race.end_date {
        if end_date < race.date {
            result.push("endDate", "End date must be after start date");
        }
    }

    if race.week < 1 {
        result.push("week", "Week must be 1 or greater");
    } else if race.week > MAX_SEASON_WEEK {
        result.push("week", format!("Week cannot exceed {MAX_SEASON_WEEK}"));
    }

    if !race.season.trim().is_empty() {
        let current_year = now.year();
        match race.season.trim().parse::<i32>() {
            Ok(year) if (current_year - 1..=current_year + 1).contains(&year) => {}
            _ => {
                result.push("season", "Season year must be within one year of current year");
            }
        }
    }

    result
}
