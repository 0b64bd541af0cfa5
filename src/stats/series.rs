//! Per-series championship statistics within a season window.

use std::collections::HashMap;

use serde::Serialize;

use crate::calendar::SeasonWindow;
use crate::stats::{FINISH_MEAN_POLICY, MeanPolicy, RunningMean, RunningMin};
use crate::types::RaceEntry;

/// Season standing for one series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesChampionship {
    pub series: String,
    pub total_points: u32,
    /// 1-based rank across all series, by descending points. Ties keep
    /// first-seen order.
    pub position: u32,
    pub wins: u32,
    pub podiums: u32,
    pub completed_races: u32,
    /// Races required for championship eligibility; taken from the first
    /// standing snapshot seen for the series.
    pub required_races: u32,
    /// Most recent dropped-week list seen on a standing snapshot.
    pub dropped_weeks: Vec<u32>,
    pub average_finish: f64,
    pub best_finish: Option<u32>,
    /// Mean strength of field over races where it was recorded.
    pub strength_of_field: Option<f64>,
    /// Net iRating change over the window's completed races.
    pub i_rating_gain: f64,
}

struct SeriesAccumulator {
    stats: SeriesChampionship,
    average_finish: RunningMean,
    best_finish: RunningMin<u32>,
    strength_of_field: RunningMean,
}

impl SeriesAccumulator {
    fn new(race: &RaceEntry) -> Self {
        SeriesAccumulator {
            stats: SeriesChampionship {
                series: race.series.clone(),
                total_points: 0,
                position: 0,
                wins: 0,
                podiums: 0,
                completed_races: 0,
                required_races: race
                    .championship_standing
                    .as_ref()
                    .map_or(0, |standing| standing.required_races),
                dropped_weeks: Vec::new(),
                average_finish: 0.0,
                best_finish: None,
                strength_of_field: None,
                i_rating_gain: 0.0,
            },
            average_finish: RunningMean::new(FINISH_MEAN_POLICY),
            best_finish: RunningMin::new(),
            // SoF averages only over races that recorded one.
            strength_of_field: RunningMean::new(MeanPolicy::ExcludeMissing),
        }
    }

    fn fold(&mut self, race: &RaceEntry) {
        let Some(result) = race.result.as_ref().filter(|_| race.is_completed()) else {
            return;
        };

        self.stats.completed_races += 1;
        self.stats.total_points += result.championship_points.unwrap_or(0);

        let finish = result.valid_finish();
        if finish == Some(1) {
            self.stats.wins += 1;
        }
        if finish.is_some_and(|pos| pos <= 3) {
            self.stats.podiums += 1;
        }
        self.average_finish.push(finish.map(f64::from));
        if let Some(pos) = finish {
            self.best_finish.push(pos);
        }
        self.strength_of_field.push(result.strength_of_field.map(f64::from));
        if let Some(rating) = &result.i_rating {
            self.stats.i_rating_gain += rating.change;
        }
        if let Some(standing) = &race.championship_standing {
            self.stats.dropped_weeks = standing.dropped_weeks.clone();
        }
    }

    fn finish(mut self) -> SeriesChampionship {
        self.stats.average_finish = self.average_finish.value();
        self.stats.best_finish = self.best_finish.get();
        self.stats.strength_of_field = self.strength_of_field.finite();
        self.stats
    }
}

/// Championship standings per series over the races inside `window`.
///
/// Every race inside the window registers its series (so a series with only
/// upcoming races still appears with zeroed counters); only completed races
/// move the counters. Positions are assigned after a stable sort by
/// descending total points.
pub fn championship_stats(races: &[RaceEntry], window: &SeasonWindow) -> Vec<SeriesChampionship> {
    let mut order: Vec<SeriesAccumulator> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for race in races.iter().filter(|r| window.contains(r.date)) {
        let slot = *index.entry(race.series.clone()).or_insert_with(|| {
            order.push(SeriesAccumulator::new(race));
            order.len() - 1
        });
        order[slot].fold(race);
    }

    let mut stats: Vec<SeriesChampionship> =
        order.into_iter().map(SeriesAccumulator::finish).collect();
    stats.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    for (rank, stat) in stats.iter_mut().enumerate() {
        stat.position = rank as u32 + 1;
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{completed, season_date, upcoming};
    use crate::types::{ChampionshipStanding, RaceResult, RatingChange};

    fn window() -> SeasonWindow {
        SeasonWindow::calendar_year(2025).unwrap()
    }

    fn scoring(series: &str, days: i64, finish: u32, points: u32) -> crate::types::RaceEntry {
        let mut race = completed(series, "Daytona", days, finish);
        race.result = Some(RaceResult {
            finish_position: Some(finish),
            championship_points: Some(points),
            ..Default::default()
        });
        race
    }

    #[test]
    fn series_ranked_by_descending_points() {
        let races = vec![
            scoring("Draftmasters", 0, 2, 40),
            scoring("Draftmasters", 7, 1, 43),
            scoring("Draftmasters", 14, 4, 37),
            scoring("Pro Series", 1, 1, 43),
            scoring("Pro Series", 8, 1, 43),
            scoring("Pro Series", 15, 1, 43),
            scoring("Pro Series", 22, 5, 21),
        ];
        let stats = championship_stats(&races, &window());
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].series, "Pro Series");
        assert_eq!(stats[0].position, 1);
        assert_eq!(stats[0].total_points, 150);
        assert_eq!(stats[1].series, "Draftmasters");
        assert_eq!(stats[1].position, 2);
        assert_eq!(stats[1].total_points, 120);
    }

    #[test]
    fn races_outside_the_window_are_excluded() {
        let mut last_season = scoring("Draftmasters", 0, 1, 43);
        last_season.date = season_date(-400);

        let races = vec![last_season, scoring("Draftmasters", 0, 3, 38)];
        let stats = championship_stats(&races, &window());
        assert_eq!(stats[0].total_points, 38);
        assert_eq!(stats[0].completed_races, 1);
    }

    #[test]
    fn upcoming_races_register_the_series_without_scoring() {
        let races = vec![upcoming("World Championship", "Spa", 30)];
        let stats = championship_stats(&races, &window());
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].completed_races, 0);
        assert_eq!(stats[0].total_points, 0);
        assert_eq!(stats[0].best_finish, None);
    }

    #[test]
    fn strength_of_field_averages_present_values_only() {
        let mut with_sof = scoring("Draftmasters", 0, 2, 40);
        if let Some(result) = with_sof.result.as_mut() {
            result.strength_of_field = Some(2400);
        }
        let without_sof = scoring("Draftmasters", 7, 3, 38);

        let stats = championship_stats(&[with_sof, without_sof], &window());
        assert_eq!(stats[0].strength_of_field, Some(2400.0));
    }

    #[test]
    fn i_rating_gain_sums_changes() {
        let mut up = scoring("Draftmasters", 0, 1, 43);
        if let Some(result) = up.result.as_mut() {
            result.i_rating = Some(RatingChange { before: 2000.0, after: 2065.0, change: 65.0 });
        }
        let mut down = scoring("Draftmasters", 7, 20, 10);
        if let Some(result) = down.result.as_mut() {
            result.i_rating = Some(RatingChange { before: 2065.0, after: 2040.0, change: -25.0 });
        }

        let stats = championship_stats(&[up, down], &window());
        assert_eq!(stats[0].i_rating_gain, 40.0);
    }

    #[test]
    fn dropped_weeks_take_the_last_seen_snapshot() {
        let mut first = scoring("Draftmasters", 0, 1, 43);
        first.championship_standing = Some(ChampionshipStanding {
            position: 2,
            points: 43,
            dropped_weeks: vec![1],
            required_races: 8,
            completed_races: 1,
        });
        let mut second = scoring("Draftmasters", 7, 2, 40);
        second.championship_standing = Some(ChampionshipStanding {
            position: 1,
            points: 83,
            dropped_weeks: vec![1, 4],
            required_races: 8,
            completed_races: 2,
        });

        let stats = championship_stats(&[first, second], &window());
        assert_eq!(stats[0].dropped_weeks, vec![1, 4]);
        assert_eq!(stats[0].required_races, 8);
    }

    #[test]
    fn cleared_dropped_weeks_overwrite_an_earlier_list() {
        let mut first = scoring("Draftmasters", 0, 1, 43);
        first.championship_standing = Some(ChampionshipStanding {
            position: 2,
            points: 43,
            dropped_weeks: vec![1],
            required_races: 8,
            completed_races: 1,
        });
        let mut second = scoring("Draftmasters", 7, 2, 40);
        second.championship_standing = Some(ChampionshipStanding {
            position: 1,
            points: 83,
            dropped_weeks: vec![],
            required_races: 8,
            completed_races: 2,
        });

        let stats = championship_stats(&[first, second], &window());
        assert_eq!(stats[0].dropped_weeks, Vec::<u32>::new());
    }
}
