//! Career-wide statistics over all completed races.

use serde::Serialize;

use crate::types::RaceEntry;

/// Lifetime summary across every completed race.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerStats {
    pub total_races: u32,
    pub wins: u32,
    pub podiums: u32,
    /// Wins as a percentage of completed races.
    pub win_rate: f64,
    /// Podiums as a percentage of completed races.
    pub podium_rate: f64,
    pub total_points: u32,
    /// Batch mean of finish positions, absent finishes counted as zero.
    pub average_finish: f64,
    pub total_incidents: u32,
    pub average_incidents: f64,
}

/// Compute career statistics over the completed races in the collection.
///
/// Returns `None` when no race has been completed; an empty career is a
/// normal state, not an error.
pub fn career_stats(races: &[RaceEntry]) -> Option<CareerStats> {
    let completed: Vec<&RaceEntry> = races.iter().filter(|r| r.is_completed()).collect();
    let total_races = completed.len() as u32;
    if total_races == 0 {
        return None;
    }

    let wins = completed.iter().filter(|r| r.finish_position() == Some(1)).count() as u32;
    let podiums = completed
        .iter()
        .filter(|r| r.finish_position().is_some_and(|pos| pos <= 3))
        .count() as u32;
    let total_points: u32 = completed.iter().map(|r| r.championship_points()).sum();
    let finish_sum: u32 = completed.iter().map(|r| r.finish_position().unwrap_or(0)).sum();
    let total_incidents: u32 = completed
        .iter()
        .map(|r| r.result.as_ref().and_then(|res| res.incident_points).unwrap_or(0))
        .sum();

    Some(CareerStats {
        total_races,
        wins,
        podiums,
        win_rate: f64::from(wins) / f64::from(total_races) * 100.0,
        podium_rate: f64::from(podiums) / f64::from(total_races) * 100.0,
        total_points,
        average_finish: f64::from(finish_sum) / f64::from(total_races),
        total_incidents,
        average_incidents: f64::from(total_incidents) / f64::from(total_races),
    })
}
