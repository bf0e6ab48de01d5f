//! Grade projection
//!
//! Turns aggregated past totals, a future-credit [`Strategy`] and an optional
//! [`Goal`] into a [`ProjectionResult`]. Every division is rounded with the
//! same helper the aggregator uses.

use crate::core::difficulty;
use crate::core::error::ProjectionError;
use crate::core::models::{DifficultyTier, Goal, PastTotals, ProjectionResult, Strategy};
use crate::core::numeric::{div4, mul4, round4};
use crate::core::scale::GradingScale;
use crate::core::scenarios::{build_scenarios, Horizon};

/// Projection engine bound to a grading scale.
///
/// Stateless: the same inputs always produce an identical result, and a
/// projector can be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Projector {
    scale: GradingScale,
}

impl Projector {
    /// Projector on the default 10-point scale
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Projector on a custom scale
    #[must_use]
    pub const fn with_scale(scale: GradingScale) -> Self {
        Self { scale }
    }

    /// The scale this projector evaluates against
    #[must_use]
    pub const fn scale(&self) -> &GradingScale {
        &self.scale
    }

    /// Project from aggregated totals.
    ///
    /// # Errors
    /// See [`Projector::project`].
    pub fn project_totals(
        &self,
        totals: PastTotals,
        strategy: &Strategy,
        goal: Option<Goal>,
    ) -> Result<ProjectionResult, ProjectionError> {
        self.project(totals.total_points, totals.total_credits, strategy, goal)
    }

    /// Project a cumulative average forward.
    ///
    /// # Arguments
    /// * `total_points` - Past grade points (sum of `average * credits`)
    /// * `past_credits` - Past credits
    /// * `strategy` - Future credit horizon
    /// * `goal` - Optional target average; a non-finite target counts as absent
    ///
    /// # Errors
    /// - [`ProjectionError::InvalidPastRecord`] when `past_credits` is not positive
    /// - [`ProjectionError::InvalidFutureCredits`] when the strategy's credits were not entered
    /// - [`ProjectionError::InvalidStrategyCredits`] when no credits remain to earn
    pub fn project(
        &self,
        total_points: f64,
        past_credits: f64,
        strategy: &Strategy,
        goal: Option<Goal>,
    ) -> Result<ProjectionResult, ProjectionError> {
        if !total_points.is_finite() || !past_credits.is_finite() || past_credits <= 0.0 {
            return Err(ProjectionError::InvalidPastRecord);
        }

        let credits = strategy
            .credits()
            .ok_or(ProjectionError::InvalidFutureCredits)?;

        let (credits_to_earn, total_credits) = match strategy {
            Strategy::NextTerm { .. } => (round4(credits), round4(past_credits + credits)),
            Strategy::ToCompletion { .. } => (round4(credits - past_credits), round4(credits)),
        };
        if credits_to_earn <= 0.0 {
            return Err(ProjectionError::InvalidStrategyCredits {
                total_credits,
                past_credits,
            });
        }

        let current_average = div4(total_points, past_credits);
        let max_possible_average = div4(
            round4(total_points + mul4(self.scale.max, credits_to_earn)),
            total_credits,
        );

        let target_average = goal
            .map(|g| g.target_average)
            .filter(|target| target.is_finite());

        let (required_average, difficulty_tier, is_goal_reachable) = match target_average {
            Some(target) => {
                let required = div4(
                    round4(mul4(target, total_credits) - total_points),
                    credits_to_earn,
                );
                let tier = difficulty::classify(required, current_average, &self.scale);
                crate::debug!(
                    "Target {target}: required {required} against current {current_average} -> {tier}"
                );
                (
                    Some(required),
                    Some(tier),
                    tier != DifficultyTier::Impossible,
                )
            }
            None => (None, None, true),
        };

        let horizon = Horizon {
            total_points,
            credits_to_earn,
            total_credits,
            current_average,
        };
        let scenarios = build_scenarios(&horizon, &self.scale);

        crate::debug!(
            "Projected {} scenarios over {credits_to_earn} future credits (total {total_credits})",
            scenarios.len()
        );

        Ok(ProjectionResult {
            current_average,
            past_credits,
            credits_to_earn,
            total_credits,
            target_average,
            required_average,
            max_possible_average,
            is_goal_reachable,
            difficulty_tier,
            scenarios,
        })
    }
}

/// Project on the default scale.
///
/// # Errors
/// See [`Projector::project`].
pub fn project(
    total_points: f64,
    past_credits: f64,
    strategy: &Strategy,
    goal: Option<Goal>,
) -> Result<ProjectionResult, ProjectionError> {
    Projector::new().project(total_points, past_credits, strategy, goal)
}
