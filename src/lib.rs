//! Personal racing statistics, championship standings, and season planning.
//!
//! Paddock turns a flat collection of race entries into the numbers a
//! driver actually wants on a dashboard: career totals, per-track and
//! per-series breakdowns, championship standings over a season window,
//! lap-time performance, and a points projection for the rest of the
//! season.
//!
//! # Features
//!
//! - **Pure aggregation**: every statistic is recomputed from the full
//!   collection, nothing is cached or incrementally maintained
//! - **Total functions**: missing optional fields mean "no data", never an
//!   error; empty collections produce explicit no-data results
//! - **Import/export**: lossless JSON, spreadsheet CSV, and versioned
//!   backup bundles
//! - **Pluggable storage**: in-memory or JSON-file stores behind one trait
//!
//! # Quick Start
//!
//! ```rust
//! use paddock::StatBook;
//!
//! let book = StatBook::new(Vec::new());
//! assert!(book.career().is_none());
//! assert!(book.to_csv()?.starts_with("Date,Series,Track"));
//! # Ok::<(), paddock::PaddockError>(())
//! ```

// Core types and error handling
mod error;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod types;

// Aggregation engine
pub mod calendar;
pub mod search;
pub mod stats;

// Collection edges
pub mod export;
pub mod store;
pub mod validation;

// Core exports
pub use error::{PaddockError, Result};
pub use types::*;

// Aggregation exports
pub use calendar::{SeasonProgress, SeasonWindow};
pub use search::{SearchFilters, search_races};
pub use stats::{
    CareerStats, ClassBreakdown, ClassStats, HourBucket, Prediction, Scenario, ScenarioConfig,
    ScenarioImpact, SeriesChampionship, TrackPerformance, TrackStats, TrendPoint,
};

// Edge exports
pub use export::{BackupBundle, BackupReport};
pub use store::{JsonFileStore, MemoryStore, RecordStore};
pub use validation::{ValidationResult, validate_race};

use chrono::{DateTime, Utc};

/// Unified entry point over one snapshot of the race collection.
///
/// A `StatBook` owns an immutable snapshot and exposes every aggregation
/// in one place. Rebuild it after the underlying store changes; the
/// individual functions in [`stats`], [`search`], and [`calendar`] remain
/// available for callers that want finer control.
///
/// # Example
///
/// ```rust,no_run
/// use paddock::{JsonFileStore, StatBook};
///
/// fn main() -> paddock::Result<()> {
///     let store = JsonFileStore::open("races.json")?;
///     let book = StatBook::from_store(&store)?;
///     for track in book.top_tracks(5) {
///         println!("{}: {} wins", track.name, track.wins);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct StatBook {
    races: Vec<RaceEntry>,
}

impl StatBook {
    /// Build a book over an owned snapshot.
    pub fn new(races: Vec<RaceEntry>) -> Self {
        StatBook { races }
    }

    /// Build a book from the current contents of a store.
    pub fn from_store(store: &impl RecordStore) -> Result<Self> {
        Ok(StatBook { races: store.get_all()? })
    }

    /// The underlying snapshot, in collection order.
    pub fn races(&self) -> &[RaceEntry] {
        &self.races
    }

    /// Career totals, or `None` when no race has been completed.
    pub fn career(&self) -> Option<CareerStats> {
        stats::career_stats(&self.races)
    }

    /// Per-track statistics, best tracks first.
    pub fn tracks(&self) -> Vec<TrackStats> {
        stats::track_stats(&self.races)
    }

    /// The `n` best tracks by wins, then points.
    pub fn top_tracks(&self, n: usize) -> Vec<TrackStats> {
        stats::top_tracks(&self.races, n)
    }

    /// Championship standings per series inside a season window.
    pub fn championships(&self, window: &SeasonWindow) -> Vec<SeriesChampionship> {
        stats::championship_stats(&self.races, window)
    }

    /// Statistics broken down by license class.
    pub fn classes(&self) -> ClassBreakdown {
        stats::class_stats(&self.races)
    }

    /// Per-track lap-time performance, fastest tracks first.
    pub fn track_performance(&self) -> Vec<TrackPerformance> {
        stats::track_performance(&self.races)
    }

    /// Results bucketed by hour of day.
    pub fn time_of_day(&self) -> [HourBucket; 24] {
        stats::time_of_day(&self.races)
    }

    /// Chronological finish and rating trend over completed races.
    pub fn trend(&self) -> Vec<TrendPoint> {
        stats::performance_trend(&self.races)
    }

    /// Season outlook per series, relative to `now`.
    pub fn predictions(&self, now: DateTime<Utc>, config: &ScenarioConfig) -> Vec<Prediction> {
        stats::predictions(&self.races, now, config)
    }

    /// Free-text search intersected with structured filters.
    pub fn search(&self, term: &str, filters: &SearchFilters) -> Vec<RaceEntry> {
        search_races(&self.races, term, filters)
    }

    /// The next race still ahead of `now`.
    pub fn next_upcoming(&self, now: DateTime<Utc>) -> Option<&RaceEntry> {
        calendar::next_upcoming(&self.races, now)
    }

    /// Completed versus planned season progress.
    pub fn season_progress(&self, now: DateTime<Utc>) -> SeasonProgress {
        calendar::season_progress(&self.races, now)
    }

    /// The snapshot as spreadsheet CSV.
    pub fn to_csv(&self) -> Result<String> {
        export::export_csv(&self.races)
    }

    /// The snapshot as lossless JSON.
    pub fn to_json(&self) -> Result<String> {
        export::export_json(&self.races)
    }
}
