//! The race entry: one logged or planned race.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::result::{ChampionshipStanding, RaceResult};
use super::track::{RaceClass, Track};

/// Lifecycle status of a race entry. Drives which aggregations apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RaceStatus {
    Upcoming,
    Completed,
    Cancelled,
}

impl RaceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RaceStatus::Upcoming => "upcoming",
            RaceStatus::Completed => "completed",
            RaceStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for RaceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RaceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upcoming" => Ok(RaceStatus::Upcoming),
            "completed" => Ok(RaceStatus::Completed),
            "cancelled" => Ok(RaceStatus::Cancelled),
            other => Err(format!("unknown race status '{other}'")),
        }
    }
}

/// Schedule pattern linking generated repeating entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrencePattern {
    Daily,
    Weekly,
    None,
}

/// One logged or planned race.
///
/// Entries are created by the planner or an import path, mutated in place
/// when results are recorded, and removed by explicit delete. Aggregations
/// never mutate entries; they read the full collection and produce fresh
/// derived values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceEntry {
    pub id: String,
    pub series: String,
    /// Competition class; entries recorded before classes were explicit
    /// leave this unset and derive it from the track type instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<RaceClass>,
    pub vehicle: String,
    /// Position within the season, starting at 1.
    pub week: u32,
    /// Season identifier, commonly a year like "2025".
    pub season: String,
    pub track: Track,
    pub date: DateTime<Utc>,
    /// For multi-day events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<RecurrencePattern>,
    /// Groups recurring races generated from the same template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence_group_id: Option<String>,
    pub status: RaceStatus,
    /// Present only once the race has been completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<RaceResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub championship_standing: Option<ChampionshipStanding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl RaceEntry {
    pub fn is_completed(&self) -> bool {
        self.status == RaceStatus::Completed
    }

    /// The class this entry counts towards: explicit when set, otherwise
    /// derived deterministically from the track type.
    pub fn effective_class(&self) -> RaceClass {
        self.class.unwrap_or_else(|| RaceClass::from_track_type(self.track.track_type))
    }

    /// Recorded finish position, if any (positions start at 1).
    pub fn finish_position(&self) -> Option<u32> {
        self.result.as_ref().and_then(RaceResult::valid_finish)
    }

    /// Recorded best lap, if any (> 0 seconds).
    pub fn best_lap_time(&self) -> Option<f64> {
        self.result.as_ref().and_then(RaceResult::valid_best_lap)
    }

    /// Championship points scored, zero when no result was recorded.
    pub fn championship_points(&self) -> u32 {
        self.result.as_ref().and_then(|r| r.championship_points).unwrap_or(0)
    }
}
