//! Free-text search and structured filtering over the race collection.

use chrono::{DateTime, Utc};

use crate::types::{RaceEntry, RaceStatus};

/// Structured filters intersected with the free-text term.
///
/// Unset fields match everything; an entirely default filter set combined
/// with an empty term returns the collection unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    /// Exact series match.
    pub series: Option<String>,
    /// Races dated on or after this instant.
    pub start_date: Option<DateTime<Utc>>,
    /// Races dated on or before this instant.
    pub end_date: Option<DateTime<Utc>>,
    /// Case-insensitive substring on the track name.
    pub track: Option<String>,
    /// Case-insensitive substring on the vehicle.
    pub vehicle: Option<String>,
    /// Exact status match.
    pub status: Option<RaceStatus>,
}

impl SearchFilters {
    pub fn is_empty(&self) -> bool {
        *self == SearchFilters::default()
    }

    fn matches(&self, race: &RaceEntry) -> bool {
        if let Some(series) = &self.series {
            if race.series != *series {
                return false;
            }
        }
        if let Some(start) = self.start_date {
            if race.date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if race.date > end {
                return false;
            }
        }
        if let Some(track) = &self.track {
            if !race.track.name.to_lowercase().contains(&track.to_lowercase()) {
                return false;
            }
        }
        if let Some(vehicle) = &self.vehicle {
            if !race.vehicle.to_lowercase().contains(&vehicle.to_lowercase()) {
                return false;
            }
        }
        if let Some(status) = self.status {
            if race.status != status {
                return false;
            }
        }
        true
    }
}

fn matches_term(race: &RaceEntry, term: &str) -> bool {
    let haystacks = [
        Some(race.track.name.as_str()),
        Some(race.track.track_type.as_str()),
        Some(race.vehicle.as_str()),
        Some(race.series.as_str()),
        race.notes.as_deref(),
        race.title.as_deref(),
        Some(race.status.as_str()),
        Some(race.season.as_str()),
    ];
    haystacks
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(term))
}

/// Filter the collection by a lowercased free-text term intersected with
/// structured filters. Collection order is preserved.
pub fn search_races(races: &[RaceEntry], term: &str, filters: &SearchFilters) -> Vec<RaceEntry> {
    let normalized = term.trim().to_lowercase();
    races
        .iter()
        .filter(|race| normalized.is_empty() || matches_term(race, &normalized))
        .filter(|race| filters.matches(race))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{completed, season_date, upcoming};

    fn collection() -> Vec<RaceEntry> {
        let mut daytona = completed("Draftmasters", "Daytona International Speedway", 0, 1);
        daytona.notes = Some("Wrecked on the last lap, salvaged P1".to_string());
        vec![
            daytona,
            completed("Pro Series", "Watkins Glen", 5, 4),
            upcoming("Pro Series", "Spa-Francorchamps", 30),
        ]
    }

    #[test]
    fn empty_term_and_filters_return_identity() {
        let races = collection();
        let results = search_races(&races, "", &SearchFilters::default());
        assert_eq!(results, races);
    }

    #[test]
    fn term_matches_track_name_case_insensitively() {
        let results = search_races(&collection(), "daytona", &SearchFilters::default());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].track.name, "Daytona International Speedway");
    }

    #[test]
    fn term_matches_notes_and_status() {
        let results = search_races(&collection(), "salvaged", &SearchFilters::default());
        assert_eq!(results.len(), 1);

        let results = search_races(&collection(), "upcoming", &SearchFilters::default());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].track.name, "Spa-Francorchamps");
    }

    #[test]
    fn term_matches_track_type() {
        let mut races = collection();
        races[1].track.track_type = crate::types::TrackType::Road;
        races[2].track.track_type = crate::types::TrackType::Road;

        let results = search_races(&races, "oval", &SearchFilters::default());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].track.name, "Daytona International Speedway");

        let results = search_races(&races, "road", &SearchFilters::default());
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn series_filter_is_exact() {
        let filters = SearchFilters { series: Some("Pro Series".to_string()), ..Default::default() };
        let results = search_races(&collection(), "", &filters);
        assert_eq!(results.len(), 2);

        let filters = SearchFilters { series: Some("Pro".to_string()), ..Default::default() };
        assert!(search_races(&collection(), "", &filters).is_empty());
    }

    #[test]
    fn date_range_filter_bounds_inclusively() {
        let filters = SearchFilters {
            start_date: Some(season_date(1)),
            end_date: Some(season_date(10)),
            ..Default::default()
        };
        let results = search_races(&collection(), "", &filters);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].track.name, "Watkins Glen");
    }

    #[test]
    fn term_and_filters_intersect() {
        let filters = SearchFilters {
            status: Some(crate::types::RaceStatus::Completed),
            ..Default::default()
        };
        let results = search_races(&collection(), "pro series", &filters);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].track.name, "Watkins Glen");
    }

    #[test]
    fn track_filter_is_substring() {
        let filters = SearchFilters { track: Some("glen".to_string()), ..Default::default() };
        let results = search_races(&collection(), "", &filters);
        assert_eq!(results.len(), 1);
    }
}
