//! JSON-file backed record store.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{PaddockError, Result};
use crate::store::RecordStore;
use crate::types::RaceEntry;

/// A [`RecordStore`] that keeps the whole collection in one JSON file.
///
/// The collection is read into memory on open and written back in full on
/// every mutation. A missing file means an empty collection; a file that
/// exists but does not parse is an error, never silently discarded.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    races: Vec<RaceEntry>,
}

impl JsonFileStore {
    /// Open the store at `path`, loading the collection if the file exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let races = match fs::read_to_string(&path) {
            Ok(text) => {
                let races: Vec<RaceEntry> = serde_json::from_str(&text)?;
                debug!(path = %path.display(), count = races.len(), "loaded race collection");
                races
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "store file absent, starting empty");
                Vec::new()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read store file");
                return Err(PaddockError::storage(path, e));
            }
        };
        Ok(JsonFileStore { path, races })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        let text = serde_json::to_string_pretty(&self.races)?;
        fs::write(&self.path, text)
            .map_err(|e| PaddockError::storage(self.path.clone(), e))?;
        debug!(path = %self.path.display(), count = self.races.len(), "wrote race collection");
        Ok(())
    }
}

impl RecordStore for JsonFileStore {
    fn get_all(&self) -> Result<Vec<RaceEntry>> {
        Ok(self.races.clone())
    }

    fn replace_all(&mut self, races: Vec<RaceEntry>) -> Result<()> {
        self.races = races;
        self.flush()
    }

    fn add(&mut self, race: RaceEntry) -> Result<()> {
        self.races.push(race);
        self.flush()
    }

    fn update(&mut self, race: RaceEntry) -> Result<()> {
        match self.races.iter_mut().find(|r| r.id == race.id) {
            Some(slot) => {
                *slot = race;
                self.flush()
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
        self.flush()
    }
}
