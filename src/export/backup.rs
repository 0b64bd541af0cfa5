//! Versioned backup bundles.
//!
//! A backup wraps the race collection and opaque application settings in a
//! versioned envelope, so an import can tell a real backup from an
//! arbitrary JSON document and report broken records by index before
//! anything touches the store.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{PaddockError, Result};
use crate::types::{RaceEntry, RaceStatus};

/// Bundle format version written by [`export_backup`].
pub const BACKUP_VERSION: &str = "1.0";

/// The versioned envelope around a full backup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupBundle {
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub data: BackupData,
}

/// Backup payload: the collection plus opaque settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupData {
    pub races: Vec<RaceEntry>,
    /// Application settings are carried through untouched.
    #[serde(default)]
    pub settings: Value,
}

/// A broken record inside an otherwise well-formed bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordIssue {
    /// Index of the record in the bundle's race array.
    pub index: usize,
    /// Error messages keyed by field name.
    pub errors: BTreeMap<String, String>,
}

/// Outcome of structurally validating a backup document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BackupReport {
    /// Problems with the envelope itself.
    pub errors: Vec<String>,
    /// Per-record problems, in record order.
    pub record_issues: Vec<RecordIssue>,
}

impl BackupReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.record_issues.is_empty()
    }

    fn summary(&self) -> String {
        if let Some(error) = self.errors.first() {
            return error.clone();
        }
        match self.record_issues.first() {
            Some(issue) => {
                let fields: Vec<&str> =
                    issue.errors.keys().map(String::as_str).collect();
                format!("record {} has invalid fields: {}", issue.index, fields.join(", "))
            }
            None => "unknown validation failure".to_string(),
        }
    }
}

/// Write the collection and settings into a versioned bundle.
pub fn export_backup(races: &[RaceEntry], settings: Value, now: DateTime<Utc>) -> Result<String> {
    let bundle = BackupBundle {
        version: BACKUP_VERSION.to_string(),
        timestamp: now,
        data: BackupData { races: races.to_vec(), settings },
    };
    Ok(serde_json::to_string_pretty(&bundle)?)
}

fn require_string(record: &Value, field: &str, issue: &mut BTreeMap<String, String>) {
    match record.get(field).and_then(Value::as_str) {
        Some(value) if !value.trim().is_empty() => {}
        _ => {
            issue.insert(field.to_string(), format!("{field} must be a non-empty string"));
        }
    }
}

fn check_record(record: &Value) -> BTreeMap<String, String> {
    let mut issue = BTreeMap::new();

    if !record.is_object() {
        issue.insert("record".to_string(), "record must be an object".to_string());
        return issue;
    }

    require_string(record, "id", &mut issue);
    require_string(record, "series", &mut issue);
    require_string(record, "vehicle", &mut issue);

    match record.get("track").and_then(|t| t.get("name")).and_then(Value::as_str) {
        Some(name) if !name.trim().is_empty() => {}
        _ => {
            issue.insert("track".to_string(), "track must carry a non-empty name".to_string());
        }
    }

    match record.get("date").and_then(Value::as_str) {
        Some(raw) if raw.parse::<DateTime<Utc>>().is_ok() => {}
        _ => {
            issue.insert("date".to_string(), "date must be an ISO-8601 timestamp".to_string());
        }
    }

    match record.get("status").and_then(Value::as_str) {
        Some(raw) if raw.parse::<RaceStatus>().is_ok() => {}
        _ => {
            issue.insert("status".to_string(), "status must be a known race status".to_string());
        }
    }

    issue
}

/// Structurally validate a backup document without deserializing it.
///
/// Envelope problems land in `errors`; broken records are reported
/// individually so one bad entry does not hide the rest.
pub fn validate_backup(text: &str) -> BackupReport {
    let mut report = BackupReport::default();

    let document: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(e) => {
            report.errors.push(format!("backup is not valid JSON: {e}"));
            return report;
        }
    };

    match document.get("version").and_then(Value::as_str) {
        Some(BACKUP_VERSION) => {}
        Some(other) => report.errors.push(format!("unsupported backup version {other:?}")),
        None => report.errors.push("backup is missing a version".to_string()),
    }

    if document
        .get("timestamp")
        .and_then(Value::as_str)
        .is_none_or(|raw| raw.parse::<DateTime<Utc>>().is_err())
    {
        report.errors.push("backup is missing a valid timestamp".to_string());
    }

    let Some(races) = document.get("data").and_then(|d| d.get("races")) else {
        report.errors.push("backup is missing data.races".to_string());
        return report;
    };
    let Some(races) = races.as_array() else {
        report.errors.push("data.races must be an array".to_string());
        return report;
    };

    for (index, record) in races.iter().enumerate() {
        let errors = check_record(record);
        if !errors.is_empty() {
            report.record_issues.push(RecordIssue { index, errors });
        }
    }

    report
}

/// Validate and deserialize a backup document.
pub fn import_backup(text: &str) -> Result<BackupBundle> {
    let report = validate_backup(text);
    if !report.is_valid() {
        return Err(PaddockError::invalid_backup(report.summary()));
    }
    Ok(serde_json::from_str(text)?)
}
