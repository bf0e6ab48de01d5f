//! Report format implementations
//!
//! Provides reporters for different output formats: plain text, Markdown, and HTML.

pub mod html;
pub mod markdown;
pub mod text;

pub use html::HtmlReporter;
pub use markdown::MarkdownReporter;
pub use text::TextReporter;

use crate::core::models::DifficultyTier;
use crate::core::report::{Feedback, ReportContext, ReportGenerator, ScenarioRow};
use std::fmt;
use std::str::FromStr;

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Terminal-friendly plain text
    #[default]
    Text,
    /// Markdown tables
    Markdown,
    /// Self-contained HTML page
    Html,
}

impl ReportFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Markdown => "md",
            Self::Html => "html",
        }
    }

    /// Reporter that renders this format
    #[must_use]
    pub fn reporter(&self) -> Box<dyn ReportGenerator> {
        match self {
            Self::Text => Box::new(TextReporter::new()),
            Self::Markdown => Box::new(MarkdownReporter::new()),
            Self::Html => Box::new(HtmlReporter::new()),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "plain" => Ok(Self::Text),
            "md" | "markdown" => Ok(Self::Markdown),
            "html" | "htm" => Ok(Self::Html),
            _ => Err(format!("Unknown report format: {s}")),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Markdown => write!(f, "markdown"),
            Self::Html => write!(f, "html"),
        }
    }
}

/// Flat, pre-formatted values the templates render.
///
/// Templates only interpolate strings and test booleans; all number
/// formatting happens here.
#[derive(Debug, Clone)]
pub struct ReportView {
    /// Crate version for the footer
    pub version: &'static str,
    /// Current average
    pub current_average: String,
    /// Past credits
    pub past_credits: String,
    /// Target or `--`
    pub goal: String,
    /// Strategy label
    pub strategy: &'static str,
    /// Credits to earn
    pub credits_to_earn: String,
    /// Total credits at the end of the horizon
    pub total_credits: String,
    /// Best achievable average
    pub max_possible_average: String,
    /// Scale maximum
    pub scale_max: String,
    /// A goal was given
    pub has_goal: bool,
    /// The goal is reachable
    pub reachable: bool,
    /// Required average (empty without a goal)
    pub required_average: String,
    /// Tier label (empty without a goal)
    pub tier: &'static str,
    /// Tier CSS class (empty without a goal)
    pub tier_slug: &'static str,
    /// Scenario rows
    pub rows: Vec<ScenarioRow>,
}

impl ReportView {
    /// Flatten a report context
    #[must_use]
    pub fn from_context(ctx: &ReportContext) -> Self {
        let (has_goal, reachable, required_average, tier, tier_slug) = match ctx.feedback() {
            Feedback::NoGoal => (false, true, String::new(), "", ""),
            Feedback::Reachable {
                required,
                tier,
                slug,
            } => (true, true, format!("{required:.2}"), tier, slug),
            Feedback::Unreachable { .. } => (
                true,
                false,
                ctx.result
                    .required_average
                    .map(|r| format!("{r:.2}"))
                    .unwrap_or_default(),
                DifficultyTier::Impossible.label(),
                DifficultyTier::Impossible.slug(),
            ),
        };
        Self {
            version: crate::core::get_version(),
            current_average: ctx.current_average(),
            past_credits: ctx.past_credits(),
            goal: ctx.goal(),
            strategy: ctx.strategy.label(),
            credits_to_earn: ctx.credits_to_earn(),
            total_credits: ctx.total_credits(),
            max_possible_average: ctx.max_possible_average(),
            scale_max: ctx.scale_max(),
            has_goal,
            reachable,
            required_average,
            tier,
            tier_slug,
            rows: ctx.rows(),
        }
    }
}
