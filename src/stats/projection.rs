//! Championship scenario projection.
//!
//! A heuristic estimator, not a statistical model: the points table and
//! probability bands are tunable configuration, and the output is an
//! outlook for the dashboard rather than a prediction with error bars.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::stats::{FINISH_MEAN_POLICY, RunningMean};
use crate::types::RaceEntry;

/// Tunable constants for the projection heuristic.
///
/// `Default` reproduces the dashboard's historical values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioConfig {
    /// Flat points awarded for finishing P1 through P5.
    pub points_by_position: [u32; 5],
    /// Probability assigned to finishing at or better than the average
    /// position.
    pub likely_probability: f64,
    /// Probability inside the band just above the average position.
    pub possible_probability: f64,
    /// Probability everywhere else.
    pub unlikely_probability: f64,
    /// Width of the "possible" band, in positions above the average.
    pub possible_band_width: f64,
    /// Season points total the driver is chasing.
    pub season_points_target: u32,
    /// Outlook when the predicted final position is a podium.
    pub podium_outlook: f64,
    /// Outlook when the predicted final position is top five.
    pub top_five_outlook: f64,
    /// Outlook everywhere else.
    pub long_shot_outlook: f64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        ScenarioConfig {
            points_by_position: [43, 40, 38, 35, 32],
            likely_probability: 0.8,
            possible_probability: 0.5,
            unlikely_probability: 0.2,
            possible_band_width: 2.0,
            season_points_target: 400,
            podium_outlook: 0.7,
            top_five_outlook: 0.4,
            long_shot_outlook: 0.2,
        }
    }
}

impl ScenarioConfig {
    fn probability_for(&self, position: u32, average_position: f64) -> f64 {
        let pos = f64::from(position);
        if pos <= average_position {
            self.likely_probability
        } else if pos <= average_position + self.possible_band_width {
            self.possible_probability
        } else {
            self.unlikely_probability
        }
    }
}

/// A hypothetical finish and its estimated likelihood.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub position: u32,
    pub points: u32,
    pub probability: f64,
}

/// Season outlook for one series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub series: String,
    /// Standing position after the most recent completed race, zero when
    /// no standing snapshot exists yet.
    pub current_position: u32,
    /// Midpoint of current standing and average finish, rounded.
    pub predicted_position: u32,
    /// Points still needed to reach the season target.
    pub points_needed: u32,
    pub remaining_races: u32,
    pub scenarios: Vec<Scenario>,
    /// Confidence in the predicted final position.
    pub probability: f64,
}

/// Impact of forcing one scenario finish onto a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioImpact {
    pub points: u32,
    pub probability: f64,
    pub new_position: u32,
}

/// Project a season outlook per series from historical performance.
///
/// Races completed before `now` feed the averages; races dated after `now`
/// count as remaining. Series with no completed races are omitted.
pub fn predictions(
    races: &[RaceEntry],
    now: DateTime<Utc>,
    config: &ScenarioConfig,
) -> Vec<Prediction> {
    let mut order: Vec<&str> = Vec::new();
    let mut by_series: HashMap<&str, Vec<&RaceEntry>> = HashMap::new();
    for race in races {
        by_series
            .entry(race.series.as_str())
            .or_insert_with(|| {
                order.push(race.series.as_str());
                Vec::new()
            })
            .push(race);
    }

    let mut output = Vec::new();
    for series in order {
        let Some(entries) = by_series.get(series) else { continue };
        let completed: Vec<&&RaceEntry> =
            entries.iter().filter(|r| r.date < now && r.is_completed()).collect();
        let remaining = entries.iter().filter(|r| r.date > now).count() as u32;
        if completed.is_empty() {
            continue;
        }

        let mut average_position = RunningMean::new(FINISH_MEAN_POLICY);
        let mut scored_points: u32 = 0;
        for race in &completed {
            average_position.push(race.finish_position().map(f64::from));
            scored_points += race.championship_points();
        }
        let average_position = average_position.value();

        let current_position = completed
            .last()
            .and_then(|race| race.championship_standing.as_ref())
            .map_or(0, |standing| standing.position);

        let scenarios: Vec<Scenario> = config
            .points_by_position
            .iter()
            .enumerate()
            .map(|(i, &points)| {
                let position = i as u32 + 1;
                Scenario {
                    position,
                    points,
                    probability: config.probability_for(position, average_position),
                }
            })
            .collect();

        let predicted_position =
            ((f64::from(current_position) + average_position) / 2.0).round() as u32;
        let probability = if predicted_position <= 3 {
            config.podium_outlook
        } else if predicted_position <= 5 {
            config.top_five_outlook
        } else {
            config.long_shot_outlook
        };

        output.push(Prediction {
            series: series.to_string(),
            current_position,
            predicted_position,
            points_needed: config.season_points_target.saturating_sub(scored_points),
            remaining_races: remaining,
            scenarios,
            probability,
        });
    }
    output
}

/// What finishing `scenario_position` would do to a prediction.
///
/// Returns `None` when the position has no scenario (outside P1-P5).
pub fn scenario_impact(prediction: &Prediction, scenario_position: u32) -> Option<ScenarioImpact> {
    let scenario = prediction.scenarios.iter().find(|s| s.position == scenario_position)?;
    let positions_gained = 5u32.saturating_sub(scenario_position);
    Some(ScenarioImpact {
        points: scenario.points,
        probability: scenario.probability,
        new_position: prediction.predicted_position.saturating_sub(positions_gained).max(1),
    })
}
