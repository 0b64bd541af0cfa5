//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::sync::Once;

use chrono::{DateTime, TimeZone, Utc};
use paddock::{
    ChampionshipStanding, RaceEntry, RaceResult, RaceStatus, RatingChange, Track, TrackType,
};

static TRACING: Once = Once::new();

/// Install a fmt subscriber once per test binary so store events show up
/// under `--nocapture`, filtered by `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A date inside the 2025 season, offset by `days` from February 1st.
pub fn season_date(days: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 2, 1, 18, 0, 0).unwrap() + chrono::Duration::days(days)
}

pub fn race(series: &str, track_name: &str, track_type: TrackType, days: i64) -> RaceEntry {
    RaceEntry {
        id: format!("{}-{}-{}", series, track_name, days),
        series: series.to_string(),
        class: None,
        vehicle: "Stock Car".to_string(),
        week: 1,
        season: "2025".to_string(),
        track: Track::new(track_name, track_type),
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

pub struct Finish {
    pub position: u32,
    pub start: u32,
    pub points: u32,
    pub best_lap: f64,
    pub i_rating_change: f64,
}

pub fn finished(
    series: &str,
    track_name: &str,
    track_type: TrackType,
    days: i64,
    finish: Finish,
) -> RaceEntry {
    let mut entry = race(series, track_name, track_type, days);
    entry.status = RaceStatus::Completed;
    entry.result = Some(RaceResult {
        finish_position: Some(finish.position),
        start_position: Some(finish.start),
        championship_points: Some(finish.points),
        best_lap_time: Some(finish.best_lap),
        total_laps: Some(40),
        i_rating: Some(RatingChange {
            before: 2000.0,
            after: 2000.0 + finish.i_rating_change,
            change: finish.i_rating_change,
        }),
        ..Default::default()
    });
    entry
}

pub fn with_standing(mut entry: RaceEntry, position: u32, points: u32) -> RaceEntry {
    entry.championship_standing = Some(ChampionshipStanding {
        position,
        points,
        dropped_weeks: vec![],
        required_races: 8,
        completed_races: 1,
    });
    entry
}
