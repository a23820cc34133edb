use serde::Serialize;

use crate::config::ScoringSettings;
use crate::domain::{Fixture, Prediction};

/// Win/draw/loss label of a scoreline, from the home side's view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Home,
    Draw,
    Away,
}

impl Outcome {
    pub fn of(home: i64, away: i64) -> Self {
        if home == away {
            Outcome::Draw
        } else if home > away {
            Outcome::Home
        } else {
            Outcome::Away
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureScore {
    pub points: i64,
    pub is_exact: bool,
    pub is_correct_result: bool,
}

impl FixtureScore {
    /// Returned whenever an input is missing
    pub const NONE: FixtureScore = FixtureScore {
        points: 0,
        is_exact: false,
        is_correct_result: false,
    };
}

/// Point rules for a single prediction
#[derive(Debug, Clone, Copy)]
pub struct ScoringRules {
    pub exact_score_points: i64,
    pub correct_result_points: i64,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self::from(&ScoringSettings::default())
    }
}

impl From<&ScoringSettings> for ScoringRules {
    fn from(settings: &ScoringSettings) -> Self {
        Self {
            exact_score_points: settings.exact_score_points,
            correct_result_points: settings.correct_result_points,
        }
    }
}

impl ScoringRules {
    pub fn score(
        &self,
        predicted_home: Option<i64>,
        predicted_away: Option<i64>,
        actual_home: Option<i64>,
        actual_away: Option<i64>,
    ) -> FixtureScore {
        let (Some(ph), Some(pa), Some(ah), Some(aa)) =
            (predicted_home, predicted_away, actual_home, actual_away)
        else {
            return FixtureScore::NONE;
        };

        if ph == ah && pa == aa {
            return FixtureScore {
                points: self.exact_score_points,
                is_exact: true,
                is_correct_result: true,
            };
        }

        if Outcome::of(ph, pa) == Outcome::of(ah, aa) {
            return FixtureScore {
                points: self.correct_result_points,
                is_exact: false,
                is_correct_result: true,
            };
        }

        FixtureScore::NONE
    }

    pub fn score_prediction(&self, prediction: &Prediction, fixture: &Fixture) -> FixtureScore {
        self.score(
            prediction.home,
            prediction.away,
            fixture.home_score,
            fixture.away_score,
        )
    }
}

/// Score with the standard 5/2 rules
pub fn score(
    predicted_home: Option<i64>,
    predicted_away: Option<i64>,
    actual_home: Option<i64>,
    actual_away: Option<i64>,
) -> FixtureScore {
    ScoringRules::default().score(predicted_home, predicted_away, actual_home, actual_away)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exact(h: i64, a: i64) -> FixtureScore {
        score(Some(h), Some(a), Some(h), Some(a))
    }

    #[test]
    fn outcome_labels() {
        assert_eq!(Outcome::of(1, 1), Outcome::Draw);
        assert_eq!(Outcome::of(3, 1), Outcome::Home);
        assert_eq!(Outcome::of(0, 2), Outcome::Away);
    }

    #[test]
    fn exact_score_is_five_points() {
        for h in -2..12 {
            for a in -2..12 {
                let result = exact(h, a);
                assert_eq!(result.points, 5, "{}-{}", h, a);
                assert!(result.is_exact);
                assert!(result.is_correct_result);
            }
        }
    }

    #[test]
    fn matching_outcome_is_two_points() {
        let result = score(Some(2), Some(0), Some(3), Some(1));
        assert_eq!(
            result,
            FixtureScore {
                points: 2,
                is_exact: false,
                is_correct_result: true
            }
        );

        assert_eq!(score(Some(1), Some(1), Some(2), Some(2)).points, 2);
        assert_eq!(score(Some(0), Some(4), Some(1), Some(2)).points, 2);
    }

    #[test]
    fn wrong_outcome_is_zero() {
        assert_eq!(score(Some(1), Some(0), Some(0), Some(1)), FixtureScore::NONE);
        assert_eq!(score(Some(2), Some(2), Some(2), Some(1)), FixtureScore::NONE);
    }

    #[test]
    fn missing_input_scores_nothing() {
        assert_eq!(score(None, Some(1), Some(1), Some(1)), FixtureScore::NONE);
        assert_eq!(score(Some(1), None, Some(1), Some(1)), FixtureScore::NONE);
        assert_eq!(score(Some(1), Some(1), None, Some(1)), FixtureScore::NONE);
        assert_eq!(score(Some(1), Some(1), Some(1), None), FixtureScore::NONE);
    }

    #[test]
    fn custom_rules_change_point_values() {
        let rules = ScoringRules {
            exact_score_points: 3,
            correct_result_points: 1,
        };
        assert_eq!(rules.score(Some(1), Some(0), Some(1), Some(0)).points, 3);
        assert_eq!(rules.score(Some(2), Some(0), Some(1), Some(0)).points, 1);
    }
}
