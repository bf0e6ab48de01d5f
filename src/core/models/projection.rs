//! Projection result models

use serde::{Deserialize, Serialize};
use std::fmt;

/// How far the required future average sits above the current trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DifficultyTier {
    /// The current trajectory already meets the goal
    Comfortable,
    /// A small step up is needed
    EasyReach,
    /// A noticeable step up is needed
    Moderate,
    /// A large step up is needed
    HardGrind,
    /// The goal needs more than the scale maximum
    Impossible,
}

impl DifficultyTier {
    /// Label shown to the student
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Comfortable => "COMFORTABLE",
            Self::EasyReach => "EASY REACH",
            Self::Moderate => "MODERATE",
            Self::HardGrind => "HARD GRIND",
            Self::Impossible => "IMPOSSIBLE",
        }
    }

    /// Lowercase identifier used as a CSS class and in machine output
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Comfortable => "comfortable",
            Self::EasyReach => "easy",
            Self::Moderate => "moderate",
            Self::HardGrind => "hard",
            Self::Impossible => "impossible",
        }
    }
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the what-if table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioPoint {
    /// Assumed average over every future credit
    pub assumed_average: f64,
    /// Cumulative average that assumption produces
    pub projected_average: f64,
    /// `projected_average - current_average`
    pub delta: f64,
}

/// Immutable snapshot of one projection.
///
/// Built in one step by the projector; there is no way to obtain a partially
/// filled result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Cumulative average over past credits
    pub current_average: f64,
    /// Credits already earned
    pub past_credits: f64,
    /// Credits still to earn within the strategy's horizon
    pub credits_to_earn: f64,
    /// Credit base at the end of the horizon
    pub total_credits: f64,
    /// Goal average, when one was given
    pub target_average: Option<f64>,
    /// Average needed on every future credit to hit the goal
    pub required_average: Option<f64>,
    /// Cumulative average if every future credit scores the scale maximum
    pub max_possible_average: f64,
    /// False only when the goal is classified [`DifficultyTier::Impossible`]
    pub is_goal_reachable: bool,
    /// Difficulty of the goal, absent without a goal
    pub difficulty_tier: Option<DifficultyTier>,
    /// What-if rows, best case first
    pub scenarios: Vec<ScenarioPoint>,
}

impl ProjectionResult {
    /// Whether a goal took part in the projection
    #[must_use]
    pub const fn has_goal(&self) -> bool {
        self.target_average.is_some()
    }

    /// Scenario row whose assumed average equals `assumed`, if sampled
    #[must_use]
    pub fn scenario_at(&self, assumed: f64) -> Option<&ScenarioPoint> {
        self.scenarios
            .iter()
            .find(|point| crate::core::numeric::approx_eq(point.assumed_average, assumed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_labels() {
        assert_eq!(DifficultyTier::EasyReach.to_string(), "EASY REACH");
        assert_eq!(DifficultyTier::HardGrind.slug(), "hard");
    }

    #[test]
    fn test_scenario_lookup() {
        let result = ProjectionResult {
            current_average: 8.0,
            past_credits: 20.0,
            credits_to_earn: 20.0,
            total_credits: 40.0,
            target_average: None,
            required_average: None,
            max_possible_average: 9.0,
            is_goal_reachable: true,
            difficulty_tier: None,
            scenarios: vec![ScenarioPoint {
                assumed_average: 9.6,
                projected_average: 8.8,
                delta: 0.8,
            }],
        };
        assert!(result.scenario_at(9.6).is_some());
        assert!(result.scenario_at(9.4).is_none());
        assert!(!result.has_goal());
    }
}
