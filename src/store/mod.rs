//! Persistence for the race collection.
//!
//! Stores abstract over where the collection lives (memory, a JSON file)
//! and always operate on whole records. Mutations are collection-level:
//! the aggregation layer reads everything and never writes.

mod json_file;

pub use json_file::JsonFileStore;

use crate::error::{PaddockError, Result};
use crate::types::RaceEntry;

/// Storage backend for race entries.
///
/// Implementations persist whole records keyed by id. `update` and
/// `delete` fail with [`PaddockError::NotFound`] when the id is absent, so
/// callers can tell a stale id from a successful no-op.
pub trait RecordStore {
    /// All entries, in stored order.
    fn get_all(&self) -> Result<Vec<RaceEntry>>;

    /// Replace the whole collection, as a backup restore does.
    fn replace_all(&mut self, races: Vec<RaceEntry>) -> Result<()>;

    /// Append one entry.
    fn add(&mut self, race: RaceEntry) -> Result<()>;

    /// Replace the entry with the same id.
    fn update(&mut self, race: RaceEntry) -> Result<()>;

    /// Remove the entry with this id.
    fn delete(&mut self, id: &str) -> Result<()>;
}

/// In-memory store, used for tests and for callers that load and save
/// through the export layer themselves.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    races: Vec<RaceEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an existing collection.
    pub fn with_races(races: Vec<RaceEntry>) -> Self {
        MemoryStore { races }
    }
}

impl RecordStore for MemoryStore {
    fn get_all(&self) -> Result<Vec<RaceEntry>> {
        Ok(self.races.clone())
    }

    fn replace_all(&mut self, races: Vec<RaceEntry>) -> Result<()> {
        self.races = races;
        Ok(())
    }

    fn add(&mut self, race: RaceEntry) -> Result<()> {
        self.races.push(race);
        Ok(())
    }

    fn update(&mut self, race: RaceEntry) -> Result<()> {
        match self.races.iter_mut().find(|r| r.id == race.id) {
            Some(slot) => {
                *slot = race;
                Ok(())
            }
            None => Err(PaddockError::not_found(race.id)),
        }
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        let before = self.races.len();
        self.races.retain(|r| r.id != id);
        if self.races.len() == before {
            return Err(PaddockError::not_found(id));
        }
        Ok(())
    }
}
