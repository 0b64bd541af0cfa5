//! Core types for race record representation.
//!
//! The data model mirrors what the planner and import paths produce:
//! - [`RaceEntry`] is one logged or planned race
//! - [`Track`] and [`RaceClass`] categorize where and what was raced
//! - [`RaceResult`] holds the optional completed-race detail
//! - [`ChampionshipStanding`] snapshots the season standing after a race
//!
//! All types serialize with serde; dates are ISO-8601 strings on the wire
//! and optional fields are omitted when unset, so exports stay compact and
//! import round-trips are exact.

mod race;
mod result;
mod track;

pub use race::{RaceEntry, RaceStatus, RecurrencePattern};
pub use result::{ChampionshipStanding, QualifyingResult, RaceResult, RatingChange};
pub use track::{RaceClass, Track, TrackType};
