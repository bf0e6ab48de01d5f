//! Report generation for projection results
//!
//! A [`ReportContext`] turns a [`ProjectionResult`] into display-ready values
//! (fixed precision, signed deltas, per-row trend and target markers) that the
//! text, Markdown and HTML reporters share.

pub mod formats;

use crate::core::models::{ProjectionResult, ScenarioPoint, StrategyKind};
use crate::core::scale::GradingScale;
use std::error::Error;
use std::fs;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat, TextReporter};

/// Deltas within this distance of zero are shown as flat.
pub const TREND_EPSILON: f64 = 0.01;

/// Tolerance when deciding whether a scenario reaches the target.
pub const TARGET_TOLERANCE: f64 = 0.001;

/// Direction a scenario moves the cumulative average.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    /// Average rises by more than [`TREND_EPSILON`]
    Up,
    /// Average falls by more than [`TREND_EPSILON`]
    Down,
    /// Average stays within [`TREND_EPSILON`]
    Flat,
}

impl Trend {
    /// Classify a delta
    #[must_use]
    pub fn of(delta: f64) -> Self {
        if delta > TREND_EPSILON {
            Self::Up
        } else if delta < -TREND_EPSILON {
            Self::Down
        } else {
            Self::Flat
        }
    }

    /// CSS class / machine name
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Up => "positive",
            Self::Down => "negative",
            Self::Flat => "neutral",
        }
    }

    /// Arrow used in plain-text output
    #[must_use]
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Up => "↑",
            Self::Down => "↓",
            Self::Flat => "→",
        }
    }
}

/// One scenario row formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioRow {
    /// Assumed average, one decimal
    pub assumed: String,
    /// Projected average, two decimals
    pub projected: String,
    /// Signed change, two decimals
    pub delta: String,
    /// CSS class for the change cell
    pub trend: &'static str,
    /// Arrow for plain-text output
    pub arrow: &'static str,
    /// Whether this row meets the target
    pub meets_target: bool,
}

/// What the report says about the goal.
#[derive(Debug, Clone, PartialEq)]
pub enum Feedback {
    /// No goal was given
    NoGoal,
    /// The goal can be reached
    Reachable {
        /// Required future average
        required: f64,
        /// Tier label
        tier: &'static str,
        /// Tier CSS class
        slug: &'static str,
    },
    /// The goal needs more than the scale maximum
    Unreachable {
        /// Best achievable cumulative average
        max_possible: f64,
    },
}

/// Everything a reporter needs to render one projection.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// The projection being reported
    pub result: &'a ProjectionResult,
    /// Strategy the projection used
    pub strategy: StrategyKind,
    /// Scale the projection was evaluated on
    pub scale: &'a GradingScale,
}

/// Format with a leading `+` for positive values
fn signed(value: f64, decimals: usize) -> String {
    if value > 0.0 {
        format!("+{value:.decimals$}")
    } else {
        format!("{value:.decimals$}")
    }
}

/// Credits print without a fractional part when they have none
fn credits(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(
        result: &'a ProjectionResult,
        strategy: StrategyKind,
        scale: &'a GradingScale,
    ) -> Self {
        Self {
            result,
            strategy,
            scale,
        }
    }

    /// Current average, two decimals
    #[must_use]
    pub fn current_average(&self) -> String {
        format!("{:.2}", self.result.current_average)
    }

    /// Past credits
    #[must_use]
    pub fn past_credits(&self) -> String {
        credits(self.result.past_credits)
    }

    /// Credits still to earn
    #[must_use]
    pub fn credits_to_earn(&self) -> String {
        credits(self.result.credits_to_earn)
    }

    /// Credit base at the end of the horizon
    #[must_use]
    pub fn total_credits(&self) -> String {
        credits(self.result.total_credits)
    }

    /// Target average or `--`
    #[must_use]
    pub fn goal(&self) -> String {
        self.result
            .target_average
            .map_or_else(|| "--".to_string(), |t| format!("{t:.2}"))
    }

    /// Best achievable average, two decimals
    #[must_use]
    pub fn max_possible_average(&self) -> String {
        format!("{:.2}", self.result.max_possible_average)
    }

    /// Scale maximum as entered
    #[must_use]
    pub fn scale_max(&self) -> String {
        format!("{}", self.scale.max)
    }

    /// Goal feedback
    #[must_use]
    pub fn feedback(&self) -> Feedback {
        match (self.result.required_average, self.result.difficulty_tier) {
            (Some(required), Some(tier)) if self.result.is_goal_reachable => Feedback::Reachable {
                required,
                tier: tier.label(),
                slug: tier.slug(),
            },
            (Some(_), _) => Feedback::Unreachable {
                max_possible: self.result.max_possible_average,
            },
            _ => Feedback::NoGoal,
        }
    }

    /// Whether a scenario reaches the target
    #[must_use]
    pub fn meets_target(&self, point: &ScenarioPoint) -> bool {
        self.result
            .target_average
            .is_some_and(|target| point.projected_average >= target - TARGET_TOLERANCE)
    }

    /// Scenario rows formatted for display, best case first
    #[must_use]
    pub fn rows(&self) -> Vec<ScenarioRow> {
        self.result
            .scenarios
            .iter()
            .map(|point| {
                let trend = Trend::of(point.delta);
                ScenarioRow {
                    assumed: format!("{:.1}", point.assumed_average),
                    projected: format!("{:.2}", point.projected_average),
                    delta: signed(point.delta, 2),
                    trend: trend.slug(),
                    arrow: trend.arrow(),
                    meets_target: self.meets_target(point),
                }
            })
            .collect()
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;

    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(output_path, content)?;
        Ok(())
    }
}
