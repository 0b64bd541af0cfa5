//! Performance breakdown by competition class.

use serde::Serialize;

use crate::stats::{MeanPolicy, RunningMean, RunningMin};
use crate::types::{RaceClass, RaceEntry};

/// Statistics for one class.
///
/// Stricter than the track breakdown: a completed race without a positive
/// finish position is excluded from this aggregation entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClassStats {
    pub total_races: u32,
    pub wins: u32,
    pub podiums: u32,
    pub win_rate: f64,
    pub podium_rate: f64,
    pub average_finish: f64,
    pub best_finish: Option<u32>,
}

/// Per-class statistics for all four classes, zeroed when unraced.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub struct ClassBreakdown {
    pub oval: ClassStats,
    pub road: ClassStats,
    pub dirt_road: ClassStats,
    pub dirt_oval: ClassStats,
}

impl ClassBreakdown {
    pub fn get(&self, class: RaceClass) -> &ClassStats {
        match class {
            RaceClass::Oval => &self.oval,
            RaceClass::Road => &self.road,
            RaceClass::DirtRoad => &self.dirt_road,
            RaceClass::DirtOval => &self.dirt_oval,
        }
    }

    fn get_mut(&mut self, class: RaceClass) -> &mut ClassStats {
        match class {
            RaceClass::Oval => &mut self.oval,
            RaceClass::Road => &mut self.road,
            RaceClass::DirtRoad => &mut self.dirt_road,
            RaceClass::DirtOval => &mut self.dirt_oval,
        }
    }
}

/// Fold completed races with a positive finish into per-class statistics.
///
/// The class is the entry's explicit class when set, otherwise the track
/// type fallback ([`RaceClass::from_track_type`]).
pub fn class_stats(races: &[RaceEntry]) -> ClassBreakdown {
    let mut breakdown = ClassBreakdown::default();
    let mut averages =
        [(); 4].map(|_| (RunningMean::new(MeanPolicy::ExcludeMissing), RunningMin::new()));

    for race in races.iter().filter(|r| r.is_completed()) {
        let Some(finish) = race.finish_position() else {
            continue;
        };
        let class = race.effective_class();
        let stats = breakdown.get_mut(class);
        stats.total_races += 1;
        if finish == 1 {
            stats.wins += 1;
        }
        if finish <= 3 {
            stats.podiums += 1;
        }
        let slot = RaceClass::ALL.iter().position(|&c| c == class).unwrap_or(0);
        averages[slot].0.push(Some(f64::from(finish)));
        averages[slot].1.push(finish);
    }

    for (slot, class) in RaceClass::ALL.into_iter().enumerate() {
        let stats = breakdown.get_mut(class);
        stats.average_finish = averages[slot].0.value();
        stats.best_finish = averages[slot].1.get();
        if stats.total_races > 0 {
            stats.win_rate = f64::from(stats.wins) / f64::from(stats.total_races) * 100.0;
            stats.podium_rate = f64::from(stats.podiums) / f64::from(stats.total_races) * 100.0;
        }
    }
    breakdown
}
