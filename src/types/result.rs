//! Race result and championship standing detail.

use serde::{Deserialize, Serialize};

/// A rating delta recorded around a race (iRating or safety rating).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingChange {
    pub before: f64,
    pub after: f64,
    pub change: f64,
}

/// Qualifying session outcome attached to a race result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualifyingResult {
    pub position: u32,
    pub best_lap_time: f64,
    /// Gap to pole, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f64>,
}

/// Outcome of a completed race.
///
/// Every field is optional: results arrive from several import paths and
/// partial data is common. Aggregations treat an absent field as "no data"
/// rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RaceResult {
    pub finish_position: Option<u32>,
    pub start_position: Option<u32>,
    pub incident_points: Option<u32>,
    pub championship_points: Option<u32>,
    /// Best race lap, in seconds. Zero or negative values are ignored.
    pub best_lap_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualifying_result: Option<QualifyingResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_splits: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength_of_field: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub i_rating: Option<RatingChange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_rating: Option<RatingChange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_lap_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_laps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_laps: Option<u32>,
    /// Gap to the race leader at the flag, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap_to_leader: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_usage_per_lap: Option<f64>,
}

impl RaceResult {
    /// Best lap time if recorded and physically plausible (> 0 seconds).
    pub fn valid_best_lap(&self) -> Option<f64> {
        self.best_lap_time.filter(|&lap| lap > 0.0)
    }

    /// Finish position if recorded and valid (positions start at 1).
    pub fn valid_finish(&self) -> Option<u32> {
        self.finish_position.filter(|&pos| pos >= 1)
    }
}

/// Championship standing snapshot attached to a race entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionshipStanding {
    pub position: u32,
    pub points: u32,
    /// Race weeks excluded from the season total per series drop rules.
    #[serde(default)]
    pub dropped_weeks: Vec<u32>,
    pub required_races: u32,
    #[serde(default)]
    pub completed_races: u32,
}
