//! What-if scenario sampling

use crate::core::models::ScenarioPoint;
use crate::core::numeric::{div4, mul4, round4};
use crate::core::scale::GradingScale;

/// Credit horizon and past totals a scenario table is computed against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Horizon {
    /// Past grade points
    pub total_points: f64,
    /// Credits still to earn
    pub credits_to_earn: f64,
    /// Credit base at the end of the horizon
    pub total_credits: f64,
    /// Current cumulative average
    pub current_average: f64,
}

impl Horizon {
    /// Cumulative average if every future credit scores `assumed`.
    #[must_use]
    pub fn projected_average(&self, assumed: f64) -> f64 {
        div4(
            round4(self.total_points + mul4(assumed, self.credits_to_earn)),
            self.total_credits,
        )
    }
}

/// Assumed averages from the scale maximum downward, best first.
///
/// Stops are computed from an integer index so each lands on an exact
/// decimal (`9.6`, never `9.600000000000001`).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sample_points(scale: &GradingScale) -> Vec<f64> {
    (0..scale.scenario_count())
        .map(|i| round4(scale.max - i as f64 * scale.scenario_step))
        .collect()
}

/// Build the scenario table for a horizon.
#[must_use]
pub fn build_scenarios(horizon: &Horizon, scale: &GradingScale) -> Vec<ScenarioPoint> {
    sample_points(scale)
        .into_iter()
        .map(|assumed_average| {
            let projected_average = horizon.projected_average(assumed_average);
            ScenarioPoint {
                assumed_average,
                projected_average,
                delta: round4(projected_average - horizon.current_average),
            }
        })
        .collect()
}
