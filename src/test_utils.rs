//! Shared builders for unit tests.

use chrono::{DateTime, TimeZone, Utc};

use crate::types::{RaceEntry, RaceResult, RaceStatus, Track, TrackType};

/// A date inside the 2025 season, offset by `days` from February 1st.
pub fn season_date(days: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 2, 1, 18, 0, 0).unwrap() + chrono::Duration::days(days)
}

/// A minimal upcoming entry.
pub fn upcoming(series: &str, track_name: &str, days: i64) -> RaceEntry {
    RaceEntry {
        id: format!("{}-{}-{}", series, track_name, days),
        series: series.to_string(),
        class: None,
        vehicle: "Stock Car".to_string(),
        week: 1,
        season: "2025".to_string(),
        track: Track::new(track_name, TrackType::Oval),
        date: season_date(days),
        end_date: None,
        recurrence: None,
        recurrence_group_id: None,
        status: RaceStatus::Upcoming,
        result: None,
        championship_standing: None,
        notes: None,
        title: None,
    }
}

/// A completed entry with a finish position.
pub fn completed(series: &str, track_name: &str, days: i64, finish: u32) -> RaceEntry {
    let mut race = upcoming(series, track_name, days);
    race.status = RaceStatus::Completed;
    race.result = Some(RaceResult { finish_position: Some(finish), ..Default::default() });
    race
}

/// A completed entry whose result carries no finish position.
pub fn completed_without_finish(series: &str, track_name: &str, days: i64) -> RaceEntry {
    let mut race = upcoming(series, track_name, days);
    race.status = RaceStatus::Completed;
    race.result = Some(RaceResult::default());
    race
}
