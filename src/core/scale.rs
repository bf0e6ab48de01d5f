//! Grading scale and projection policy constants

use serde::{Deserialize, Serialize};

/// Maximum average on the default grading scale.
pub const DEFAULT_SCALE_MAX: f64 = 10.0;

/// Gap (in grading-scale points) below which a goal is an easy reach.
pub const EASY_REACH_GAP: f64 = 0.5;

/// Gap (in grading-scale points) below which a goal is moderate.
pub const MODERATE_GAP: f64 = 1.0;

/// Distance from the scale maximum down to the lowest sampled scenario.
pub const SCENARIO_SPAN: f64 = 6.0;

/// Distance between consecutive sampled scenarios.
pub const SCENARIO_STEP: f64 = 0.2;

/// Upper bound on the number of sampled scenarios a scale may produce.
pub const MAX_SCENARIOS: usize = 1000;

/// The grading scale and the policy values the projector evaluates against.
///
/// The gap thresholds are absolute points on the scale. They stay fixed when
/// `max` changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradingScale {
    /// Highest attainable average
    pub max: f64,
    /// See [`EASY_REACH_GAP`]
    pub easy_reach_gap: f64,
    /// See [`MODERATE_GAP`]
    pub moderate_gap: f64,
    /// See [`SCENARIO_SPAN`]
    pub scenario_span: f64,
    /// See [`SCENARIO_STEP`]
    pub scenario_step: f64,
}

impl Default for GradingScale {
    fn default() -> Self {
        Self {
            max: DEFAULT_SCALE_MAX,
            easy_reach_gap: EASY_REACH_GAP,
            moderate_gap: MODERATE_GAP,
            scenario_span: SCENARIO_SPAN,
            scenario_step: SCENARIO_STEP,
        }
    }
}

impl GradingScale {
    /// Default policy on a scale with a different maximum
    #[must_use]
    pub fn with_max(max: f64) -> Self {
        Self {
            max,
            ..Self::default()
        }
    }

    /// Check that the scale can drive a projection.
    ///
    /// # Errors
    /// Returns a description of the first offending field.
    pub fn validate(&self) -> Result<(), String> {
        let finite = [
            self.max,
            self.easy_reach_gap,
            self.moderate_gap,
            self.scenario_span,
            self.scenario_step,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err("grading scale values must be finite numbers".to_string());
        }
        if self.max <= 0.0 {
            return Err(format!("scale max must be positive, got {}", self.max));
        }
        if self.easy_reach_gap <= 0.0 || self.moderate_gap <= self.easy_reach_gap {
            return Err(format!(
                "difficulty gaps must satisfy 0 < easy_reach_gap < moderate_gap, got {} and {}",
                self.easy_reach_gap, self.moderate_gap
            ));
        }
        if self.scenario_step <= 0.0 {
            return Err(format!(
                "scenario step must be positive, got {}",
                self.scenario_step
            ));
        }
        if self.scenario_span < 0.0 {
            return Err(format!(
                "scenario span must not be negative, got {}",
                self.scenario_span
            ));
        }
        #[allow(clippy::cast_precision_loss)]
        let limit = (MAX_SCENARIOS - 1) as f64;
        if (self.scenario_span / self.scenario_step).round() > limit {
            return Err(format!(
                "scenario span {} with step {} gives more than {MAX_SCENARIOS} scenarios",
                self.scenario_span, self.scenario_step
            ));
        }
        Ok(())
    }

    /// Number of sampled scenarios, both ends included.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn scenario_count(&self) -> usize {
        (self.scenario_span / self.scenario_step).round() as usize + 1
    }
}
