//! Lap-time and time-of-day performance analytics.

use std::collections::HashMap;

use chrono::{DateTime, Timelike, Utc};
use serde::Serialize;

use crate::stats::{FINISH_MEAN_POLICY, RunningMean, RunningMin};
use crate::types::RaceEntry;

/// Lap-time record at one track, over races that recorded a best lap.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackPerformance {
    pub track_name: String,
    /// Fastest recorded lap, seconds.
    pub best_lap_time: f64,
    /// Running mean of best laps, weighted by the lap count accumulated
    /// before each fold. Deliberately not a plain per-race mean.
    pub average_lap_time: f64,
    pub total_laps: u32,
    /// Races whose best lap beat the running best at the time they were
    /// folded in. Order-dependent by construction.
    pub improvements: u32,
}

/// Results bucketed by hour of day (0-23) extracted from the race date.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HourBucket {
    pub hour: u32,
    pub average_finish: f64,
    pub total_races: u32,
    pub wins: u32,
}

/// One completed race on the chronological performance trend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: DateTime<Utc>,
    pub finish_position: u32,
    pub i_rating: f64,
    pub incidents: u32,
}

struct LapAccumulator {
    performance: TrackPerformance,
    best_lap: RunningMin<f64>,
}

impl LapAccumulator {
    fn new(track_name: String) -> Self {
        LapAccumulator {
            performance: TrackPerformance {
                track_name,
                best_lap_time: 0.0,
                average_lap_time: 0.0,
                total_laps: 0,
                improvements: 0,
            },
            best_lap: RunningMin::new(),
        }
    }

    fn fold(&mut self, lap: f64, laps_completed: u32) {
        if self.best_lap.push(lap) {
            self.performance.improvements += 1;
        }
        // Weighted by laps accumulated before this race, matching the
        // historical dashboard numbers.
        let prior_laps = f64::from(self.performance.total_laps);
        self.performance.average_lap_time =
            (self.performance.average_lap_time * prior_laps + lap) / (prior_laps + 1.0);
        self.performance.total_laps += laps_completed;
    }

    fn finish(mut self) -> TrackPerformance {
        self.performance.best_lap_time = self.best_lap.get().unwrap_or(0.0);
        self.performance
    }
}

/// Per-track lap analysis over races that recorded a best lap time.
///
/// Sorted ascending by best lap, fastest track first.
pub fn track_performance(races: &[RaceEntry]) -> Vec<TrackPerformance> {
    let mut order: Vec<LapAccumulator> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for race in races {
        let Some(lap) = race.best_lap_time() else {
            continue;
        };
        let laps_completed =
            race.result.as_ref().and_then(|result| result.total_laps).unwrap_or(0);
        let slot = *index.entry(race.track.name.clone()).or_insert_with(|| {
            order.push(LapAccumulator::new(race.track.name.clone()));
            order.len() - 1
        });
        order[slot].fold(lap, laps_completed);
    }

    let mut performances: Vec<TrackPerformance> =
        order.into_iter().map(LapAccumulator::finish).collect();
    performances.sort_by(|a, b| a.best_lap_time.total_cmp(&b.best_lap_time));
    performances
}

/// Finish performance bucketed by hour of day; 24 buckets, one per hour.
///
/// Only races carrying a finish position are counted.
pub fn time_of_day(races: &[RaceEntry]) -> [HourBucket; 24] {
    let mut means = [RunningMean::new(FINISH_MEAN_POLICY); 24];
    let mut buckets: [HourBucket; 24] = std::array::from_fn(|hour| HourBucket {
        hour: hour as u32,
        average_finish: 0.0,
        total_races: 0,
        wins: 0,
    });

    for race in races {
        let Some(finish) = race.finish_position() else {
            continue;
        };
        let hour = race.date.hour() as usize;
        means[hour].push(Some(f64::from(finish)));
        buckets[hour].total_races += 1;
        if finish == 1 {
            buckets[hour].wins += 1;
        }
    }

    for (bucket, mean) in buckets.iter_mut().zip(&means) {
        bucket.average_finish = mean.value();
    }
    buckets
}

/// Completed races in chronological order, for trend charts.
pub fn performance_trend(races: &[RaceEntry]) -> Vec<TrendPoint> {
    let mut completed: Vec<&RaceEntry> =
        races.iter().filter(|r| r.is_completed() && r.result.is_some()).collect();
    completed.sort_by_key(|race| race.date);

    completed
        .into_iter()
        .map(|race| {
            let result = race.result.as_ref();
            TrendPoint {
                date: race.date,
                finish_position: race.finish_position().unwrap_or(0),
                i_rating: result
                    .and_then(|r| r.i_rating.as_ref())
                    .map_or(0.0, |rating| rating.after),
                incidents: result.and_then(|r| r.incident_points).unwrap_or(0),
            }
        })
        .collect()
}
