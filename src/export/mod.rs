//! Export and import of the race collection.
//!
//! Three formats with different fidelity: JSON is lossless, CSV is a
//! spreadsheet-friendly projection of the core fields, and the backup
//! bundle wraps the JSON form in a versioned envelope with settings.

mod backup;
mod csv;
mod json;

pub use backup::{
    BACKUP_VERSION, BackupBundle, BackupData, BackupReport, RecordIssue, export_backup,
    import_backup, validate_backup,
};
pub use csv::{CSV_HEADERS, export_csv, import_csv};
pub use json::{export_json, import_json};
