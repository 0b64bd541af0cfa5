//! Per-track statistics over completed races.

use std::collections::HashMap;

use serde::Serialize;

use crate::stats::{FINISH_MEAN_POLICY, RunningMean, RunningMin};
use crate::types::{RaceEntry, TrackType};

/// Aggregated record at one track.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackStats {
    pub name: String,
    pub track_type: TrackType,
    pub total_races: u32,
    pub wins: u32,
    pub podiums: u32,
    /// Lowest finish position seen; `None` until a finish is recorded.
    pub best_finish: Option<u32>,
    /// Fastest recorded lap in seconds; `None` until a lap is recorded.
    pub best_lap_time: Option<f64>,
    /// Running mean of finish positions under [`FINISH_MEAN_POLICY`].
    pub average_finish: f64,
}

struct TrackAccumulator {
    stats: TrackStats,
    best_finish: RunningMin<u32>,
    best_lap: RunningMin<f64>,
    average_finish: RunningMean,
}

impl TrackAccumulator {
    fn new(name: String, track_type: TrackType) -> Self {
        TrackAccumulator {
            stats: TrackStats {
                name,
                track_type,
                total_races: 0,
                wins: 0,
                podiums: 0,
                best_finish: None,
                best_lap_time: None,
                average_finish: 0.0,
            },
            best_finish: RunningMin::new(),
            best_lap: RunningMin::new(),
            average_finish: RunningMean::new(FINISH_MEAN_POLICY),
        }
    }

    fn fold(&mut self, race: &RaceEntry) {
        let finish = race.finish_position();

        self.stats.total_races += 1;
        if finish == Some(1) {
            self.stats.wins += 1;
        }
        if finish.is_some_and(|pos| pos <= 3) {
            self.stats.podiums += 1;
        }
        if let Some(pos) = finish {
            self.best_finish.push(pos);
        }
        if let Some(lap) = race.best_lap_time() {
            self.best_lap.push(lap);
        }
        self.average_finish.push(finish.map(f64::from));
    }

    fn finish(mut self) -> TrackStats {
        self.stats.best_finish = self.best_finish.get();
        self.stats.best_lap_time = self.best_lap.get();
        self.stats.average_finish = self.average_finish.value();
        self.stats
    }
}

/// Group completed races by track name and fold each into a [`TrackStats`].
///
/// Tracks appear in first-seen collection order, then sorted by descending
/// win count (stable, so ties keep their first-seen order).
pub fn track_stats(races: &[RaceEntry]) -> Vec<TrackStats> {
    let mut order: Vec<TrackAccumulator> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for race in races.iter().filter(|r| r.is_completed()) {
        let slot = *index.entry(race.track.name.clone()).or_insert_with(|| {
            order.push(TrackAccumulator::new(race.track.name.clone(), race.track.track_type));
            order.len() - 1
        });
        order[slot].fold(race);
    }

    let mut stats: Vec<TrackStats> = order.into_iter().map(TrackAccumulator::finish).collect();
    stats.sort_by(|a, b| b.wins.cmp(&a.wins));
    stats
}

/// The `n` tracks with the most wins.
pub fn top_tracks(races: &[RaceEntry], n: usize) -> Vec<TrackStats> {
    let mut stats = track_stats(races);
    stats.truncate(n);
    stats
}
