use chrono::NaiveDateTime;

use crate::catalog::FixtureCatalog;
use crate::domain::{Fixture, RoundNumber};

/// Earliest known kickoff among the fixtures of a round
pub fn earliest_kickoff<'a, I>(fixtures: I) -> Option<NaiveDateTime>
where
    I: IntoIterator<Item = &'a Fixture>,
{
    fixtures.into_iter().filter_map(|f| f.kickoff).min()
}

/// A round locks when its first match kicks off. Rounds without any dated
/// fixture stay open.
pub fn is_locked<'a, I>(fixtures: I, now: NaiveDateTime) -> bool
where
    I: IntoIterator<Item = &'a Fixture>,
{
    match earliest_kickoff(fixtures) {
        Some(first_kickoff) => now >= first_kickoff,
        None => false,
    }
}

pub fn is_round_locked(catalog: &FixtureCatalog, round: RoundNumber, now: NaiveDateTime) -> bool {
    is_locked(catalog.round_fixtures(round), now)
}

/// Round to offer a player first.
///
/// Walks rounds in order. A round with a match already started moves the
/// choice on to the round after it; the first round that has only future
/// kickoffs wins. Undated rounds are passed over.
pub fn default_round(catalog: &FixtureCatalog, now: NaiveDateTime) -> Option<RoundNumber> {
    let rounds = catalog.rounds();
    let mut chosen = *rounds.first()?;

    for (pos, &round) in rounds.iter().enumerate() {
        let kickoffs: Vec<NaiveDateTime> = catalog
            .round_fixtures(round)
            .iter()
            .filter_map(|f| f.kickoff)
            .collect();

        if kickoffs.iter().any(|&k| k <= now) {
            chosen = rounds.get(pos + 1).copied().unwrap_or(round);
        } else if !kickoffs.is_empty() {
            chosen = round;
            break;
        }
    }

    Some(chosen)
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};

    use super::*;
    use crate::domain::FixtureKey;

    fn noon(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 9, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn fixture(round: RoundNumber, index: usize, kickoff: Option<NaiveDateTime>) -> Fixture {
        Fixture {
            key: FixtureKey::new(round, index),
            home_team: "Home".into(),
            away_team: "Away".into(),
            kickoff,
            location: String::new(),
            home_score: None,
            away_score: None,
        }
    }

    #[test]
    fn empty_round_is_open() {
        let fixtures: [Fixture; 0] = [];
        assert!(!is_locked(&fixtures, noon(1)));
        assert_eq!(earliest_kickoff(&fixtures), None);
    }

    #[test]
    fn undated_round_is_open() {
        let fixtures = [fixture(1, 0, None), fixture(1, 1, None)];
        assert!(!is_locked(&fixtures, noon(30)));
    }

    #[test]
    fn locks_at_first_kickoff() {
        let fixtures = [
            fixture(1, 0, Some(noon(14))),
            fixture(1, 1, Some(noon(13))),
            fixture(1, 2, None),
        ];
        assert_eq!(earliest_kickoff(&fixtures), Some(noon(13)));
        assert!(!is_locked(&fixtures, noon(13) - Duration::seconds(1)));
        assert!(is_locked(&fixtures, noon(13)));
        assert!(is_locked(&fixtures, noon(14)));
    }

    #[test]
    fn lock_is_monotone_in_time() {
        let fixtures = [fixture(1, 0, Some(noon(10)))];
        let mut was_locked = false;
        for hours in 0..24 * 20 {
            let now = noon(1) + Duration::hours(hours);
            let locked = is_locked(&fixtures, now);
            assert!(locked || !was_locked, "unlocked again at {}", now);
            was_locked = locked;
        }
        assert!(was_locked);
    }

    #[test]
    fn default_round_is_first_upcoming_round() {
        let catalog = FixtureCatalog::new(vec![
            fixture(1, 0, Some(noon(1))),
            fixture(2, 1, Some(noon(8))),
            fixture(3, 2, Some(noon(15))),
        ]);

        assert_eq!(default_round(&catalog, noon(1) - Duration::days(1)), Some(1));
        assert_eq!(default_round(&catalog, noon(3)), Some(2));
        assert_eq!(default_round(&catalog, noon(9)), Some(3));
        assert_eq!(default_round(&catalog, noon(20)), Some(3));
    }

    #[test]
    fn started_round_advances_past_undated_round() {
        let catalog = FixtureCatalog::new(vec![
            fixture(1, 0, Some(noon(1))),
            fixture(2, 1, None),
            fixture(3, 2, Some(noon(15))),
        ]);

        assert_eq!(default_round(&catalog, noon(3)), Some(3));
    }

    #[test]
    fn default_round_of_empty_catalog_is_none() {
        assert_eq!(default_round(&FixtureCatalog::default(), noon(1)), None);
    }
}
