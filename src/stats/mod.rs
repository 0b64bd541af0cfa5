//! Aggregation engine: pure reductions over the full race collection.
//!
//! Every operation here takes an immutable snapshot of the record collection
//! and returns a fresh derived value. Nothing is cached or mutated; callers
//! recompute after the underlying collection changes. All functions are
//! total: missing optional fields mean "no data", never an error, and empty
//! collections produce an explicit no-data result.
//!
//! Averages are maintained as *online running means* updated in collection
//! order, `(avg * n + value) / (n + 1)`, rather than batch sums. The two are
//! numerically equal only when every folded record carries a real value, so
//! the treatment of absent values is an explicit policy
//! ([`MeanPolicy`]) instead of an inline branch.

mod career;
mod class;
mod performance;
mod projection;
mod series;
mod track;

pub use career::{CareerStats, career_stats};
pub use class::{ClassBreakdown, ClassStats, class_stats};
pub use performance::{
    HourBucket, TrackPerformance, TrendPoint, performance_trend, time_of_day, track_performance,
};
pub use projection::{
    Prediction, Scenario, ScenarioConfig, ScenarioImpact, predictions, scenario_impact,
};
pub use series::{SeriesChampionship, championship_stats};
pub use track::{TrackStats, top_tracks, track_stats};

use serde::Serialize;

/// How running means treat records with no value for the averaged field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MeanPolicy {
    /// Fold a zero into the mean. Matches the historical behavior of the
    /// tracker: an unrecorded finish drags the average towards zero.
    CountMissingAsZero,
    /// Skip the record entirely; the mean covers only real values.
    ExcludeMissing,
}

/// Policy applied to finish-position averages across the engine.
///
/// Kept as the historical count-as-zero behavior so recomputed dashboards
/// match previously displayed numbers.
pub const FINISH_MEAN_POLICY: MeanPolicy = MeanPolicy::CountMissingAsZero;

/// Online running mean, updated per insertion in collection order.
#[derive(Debug, Clone, Copy)]
pub struct RunningMean {
    avg: f64,
    count: u64,
    policy: MeanPolicy,
}

impl RunningMean {
    pub fn new(policy: MeanPolicy) -> Self {
        RunningMean { avg: 0.0, count: 0, policy }
    }

    /// Fold one observation. `None` is resolved through the policy.
    pub fn push(&mut self, value: Option<f64>) {
        match (value, self.policy) {
            (Some(v), _) => self.fold(v),
            (None, MeanPolicy::CountMissingAsZero) => self.fold(0.0),
            (None, MeanPolicy::ExcludeMissing) => {}
        }
    }

    fn fold(&mut self, value: f64) {
        self.avg = (self.avg * self.count as f64 + value) / (self.count + 1) as f64;
        self.count += 1;
    }

    /// Current mean; zero when nothing has been folded, matching the
    /// dashboard's display of empty aggregations.
    pub fn value(&self) -> f64 {
        self.avg
    }

    /// Mean as an optional: `None` when nothing has been folded.
    pub fn finite(&self) -> Option<f64> {
        (self.count > 0).then_some(self.avg)
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

/// Running minimum initialized to "no value".
#[derive(Debug, Clone, Copy, Default)]
pub struct RunningMin<T>(Option<T>);

impl<T: PartialOrd + Copy> RunningMin<T> {
    pub fn new() -> Self {
        RunningMin(None)
    }

    /// Fold one observation; returns whether it became the new minimum.
    pub fn push(&mut self, value: T) -> bool {
        match self.0 {
            Some(best) if value >= best => false,
            _ => {
                self.0 = Some(value);
                true
            }
        }
    }

    pub fn get(&self) -> Option<T> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn batch_mean(values: &[f64]) -> f64 {
        if values.is_empty() { 0.0 } else { values.iter().sum::<f64>() / values.len() as f64 }
    }

    proptest! {
        #[test]
        fn running_mean_matches_batch_mean_when_all_values_present(
            values in prop::collection::vec(0.0f64..100.0, 0..50)
        ) {
            let mut mean = RunningMean::new(MeanPolicy::CountMissingAsZero);
            for &v in &values {
                mean.push(Some(v));
            }
            prop_assert!((mean.value() - batch_mean(&values)).abs() < 1e-9);
        }

        #[test]
        fn count_as_zero_policy_equals_batch_mean_over_zero_filled_input(
            values in prop::collection::vec(prop::option::of(1.0f64..100.0), 1..50)
        ) {
            let mut mean = RunningMean::new(MeanPolicy::CountMissingAsZero);
            for &v in &values {
                mean.push(v);
            }
            let zero_filled: Vec<f64> = values.iter().map(|v| v.unwrap_or(0.0)).collect();
            prop_assert!((mean.value() - batch_mean(&zero_filled)).abs() < 1e-9);
        }

        #[test]
        fn exclude_policy_equals_batch_mean_over_present_values(
            values in prop::collection::vec(prop::option::of(1.0f64..100.0), 1..50)
        ) {
            let mut mean = RunningMean::new(MeanPolicy::ExcludeMissing);
            for &v in &values {
                mean.push(v);
            }
            let present: Vec<f64> = values.iter().flatten().copied().collect();
            prop_assert!((mean.value() - batch_mean(&present)).abs() < 1e-9);
            prop_assert_eq!(mean.count(), present.len() as u64);
        }

        #[test]
        fn running_min_is_monotonically_non_increasing(
            values in prop::collection::vec(1u32..100, 1..50)
        ) {
            let mut min = RunningMin::new();
            let mut previous: Option<u32> = None;
            for &v in &values {
                min.push(v);
                let current = min.get().unwrap();
                if let Some(prev) = previous {
                    prop_assert!(current <= prev);
                }
                previous = Some(current);
            }
            prop_assert_eq!(min.get(), values.iter().copied().min());
        }
    }

    #[test]
    fn empty_running_mean_is_zero_and_none() {
        let mean = RunningMean::new(FINISH_MEAN_POLICY);
        assert_eq!(mean.value(), 0.0);
        assert_eq!(mean.finite(), None);
    }

    #[test]
    fn the_two_policies_diverge_on_missing_values() {
        // Positions [4, missing, 2]: count-as-zero yields 2.0, exclude yields 3.0.
        let observations = [Some(4.0), None, Some(2.0)];

        let mut zeroed = RunningMean::new(MeanPolicy::CountMissingAsZero);
        let mut excluded = RunningMean::new(MeanPolicy::ExcludeMissing);
        for v in observations {
            zeroed.push(v);
            excluded.push(v);
        }
        assert_eq!(zeroed.value(), 2.0);
        assert_eq!(excluded.value(), 3.0);
    }

    #[test]
    fn running_min_reports_new_bests() {
        let mut min = RunningMin::new();
        assert!(min.push(10));
        assert!(!min.push(12));
        assert!(min.push(9));
        assert!(!min.push(9));
        assert_eq!(min.get(), Some(9));
    }
}
