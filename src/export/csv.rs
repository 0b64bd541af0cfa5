//! CSV export and import.
//!
//! The column layout is fixed for compatibility with spreadsheets built on
//! earlier exports. Free-text notes are sanitized (commas become `;`,
//! newlines become spaces) so a row never spills.

use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use uuid::Uuid;

use crate::error::{PaddockError, Result};
use crate::types::{RaceEntry, RaceResult, RaceStatus, Track, TrackType};

/// Exported column headers, in order.
pub const CSV_HEADERS: [&str; 14] = [
    "Date",
    "Series",
    "Track",
    "Vehicle",
    "Week",
    "Status",
    "Position",
    "Start Position",
    "Finish Position",
    "iRating Change",
    "Safety Rating Change",
    "Incidents",
    "Championship Points",
    "Notes",
];

fn sanitize_notes(notes: &str) -> String {
    notes.replace(',', ";").replace('\n', " ")
}

fn opt_to_string<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Serialize the collection to CSV with the fixed header row.
pub fn export_csv(races: &[RaceEntry]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADERS)?;

    for race in races {
        let result = race.result.as_ref();
        writer.write_record([
            race.date.to_rfc3339_opts(SecondsFormat::Secs, true),
            race.series.clone(),
            race.track.name.clone(),
            race.vehicle.clone(),
            race.week.to_string(),
            race.status.to_string(),
            opt_to_string(race.championship_standing.as_ref().map(|s| s.position)),
            opt_to_string(result.and_then(|r| r.start_position)),
            opt_to_string(result.and_then(|r| r.finish_position)),
            opt_to_string(result.and_then(|r| r.i_rating.as_ref()).map(|r| r.change)),
            opt_to_string(result.and_then(|r| r.safety_rating.as_ref()).map(|r| r.change)),
            opt_to_string(result.and_then(|r| r.incident_points)),
            opt_to_string(result.and_then(|r| r.championship_points)),
            sanitize_notes(race.notes.as_deref().unwrap_or_default()),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| PaddockError::parse("CSV export", e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| PaddockError::parse("CSV export", e.to_string()))
}

fn field<'a>(record: &'a csv::StringRecord, index: usize) -> &'a str {
    record.get(index).unwrap_or_default().trim()
}

fn parse_opt_u32(record: &csv::StringRecord, index: usize, row: usize) -> Result<Option<u32>> {
    let raw = field(record, index);
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<u32>()
        .map(Some)
        .map_err(|e| PaddockError::parse(format!("CSV import row {row}"), e.to_string()))
}

/// Parse core race data back out of an exported CSV.
///
/// CSV carries less than the full record: ids are regenerated, the track
/// type defaults to road, the season is derived from the date, and rating
/// deltas are not rehydrated (the CSV only carries the change, not the
/// before/after pair).
pub fn import_csv(text: &str) -> Result<Vec<RaceEntry>> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let mut races = Vec::new();

    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let row = row + 2; // 1-based, after the header row

        let date: DateTime<Utc> = field(&record, 0)
            .parse()
            .map_err(|e: chrono::ParseError| {
                PaddockError::parse(format!("CSV import row {row}"), e.to_string())
            })?;
        let status: RaceStatus = field(&record, 5)
            .parse()
            .map_err(|e: String| PaddockError::parse(format!("CSV import row {row}"), e))?;
        let week: u32 = field(&record, 4)
            .parse()
            .map_err(|e: std::num::ParseIntError| {
                PaddockError::parse(format!("CSV import row {row}"), e.to_string())
            })?;

        let start_position = parse_opt_u32(&record, 7, row)?;
        let finish_position = parse_opt_u32(&record, 8, row)?;
        let incident_points = parse_opt_u32(&record, 11, row)?;
        let championship_points = parse_opt_u32(&record, 12, row)?;
        let has_result = start_position.is_some()
            || finish_position.is_some()
            || incident_points.is_some()
            || championship_points.is_some();

        let notes = field(&record, 13);
        races.push(RaceEntry {
            id: Uuid::new_v4().to_string(),
            series: field(&record, 1).to_string(),
            class: None,
            vehicle: field(&record, 3).to_string(),
            week,
            season: date.year().to_string(),
            track: Track::new(field(&record, 2), TrackType::Road),
            date,
            end_date: None,
            recurrence: None,
            recurrence_group_id: None,
            status,
            result: has_result.then(|| RaceResult {
                finish_position,
                start_position,
                incident_points,
                championship_points,
                ..Default::default()
            }),
            championship_standing: None,
            notes: (!notes.is_empty()).then(|| notes.to_string()),
            title: None,
        });
    }

    Ok(races)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{completed, upcoming};

    #[test]
    fn header_row_is_exact() {
        let csv = export_csv(&[]).unwrap();
        assert_eq!(
            csv.trim_end(),
            "Date,Series,Track,Vehicle,Week,Status,Position,Start Position,\
             Finish Position,iRating Change,Safety Rating Change,Incidents,\
             Championship Points,Notes"
        );
    }

    #[test]
    fn notes_are_sanitized() {
        let mut race = completed("Draftmasters", "Daytona", 0, 1);
        race.notes = Some("spun in T3,\nrecovered".to_string());
        let csv = export_csv(&[race]).unwrap();
        assert!(csv.contains("spun in T3; recovered"));
        assert!(!csv.lines().nth(1).unwrap().contains('\n'));
    }

    #[test]
    fn dates_are_iso_8601() {
        let race = completed("Draftmasters", "Daytona", 0, 1);
        let csv = export_csv(&[race]).unwrap();
        assert!(csv.contains("2025-02-01T18:00:00Z"));
    }

    #[test]
    fn round_trip_preserves_core_fields() {
        let races = vec![
            completed("Draftmasters", "Daytona", 0, 3),
            upcoming("Pro Series", "Watkins Glen", 14),
        ];
        let imported = import_csv(&export_csv(&races).unwrap()).unwrap();
        assert_eq!(imported.len(), races.len());
        for (original, back) in races.iter().zip(&imported) {
            assert_eq!(back.date, original.date);
            assert_eq!(back.series, original.series);
            assert_eq!(back.track.name, original.track.name);
            assert_eq!(back.vehicle, original.vehicle);
            assert_eq!(back.week, original.week);
            assert_eq!(back.status, original.status);
        }
    }

    #[test]
    fn imported_result_appears_only_when_fields_are_present() {
        let races = vec![
            completed("Draftmasters", "Daytona", 0, 3),
            upcoming("Pro Series", "Watkins Glen", 14),
        ];
        let imported = import_csv(&export_csv(&races).unwrap()).unwrap();
        assert_eq!(imported[0].result.as_ref().unwrap().finish_position, Some(3));
        assert!(imported[1].result.is_none());
    }

    #[test]
    fn malformed_rows_fail_with_row_context() {
        let text = "Date,Series,Track,Vehicle,Week,Status,Position,Start Position,\
                    Finish Position,iRating Change,Safety Rating Change,Incidents,\
                    Championship Points,Notes\n\
                    not-a-date,S,T,V,1,completed,,,,,,,,\n";
        let err = import_csv(text).unwrap_err();
        assert!(err.to_string().contains("row 2"));
    }
}
