//! Plain-text report generator
//!
//! Renders a projection as aligned columns for the terminal.

use crate::core::report::formats::ReportView;
use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;

/// Plain-text reporter
pub struct TextReporter;

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn render_view(view: &ReportView) -> Result<String, std::fmt::Error> {
        let mut out = String::new();

        writeln!(out, "=== Grade Projection ===")?;
        writeln!(out)?;
        writeln!(out, "Current average   {}", view.current_average)?;
        writeln!(out, "Past credits      {}", view.past_credits)?;
        writeln!(out, "Goal              {}", view.goal)?;
        writeln!(
            out,
            "Strategy          {} ({} to earn, {} total)",
            view.strategy, view.credits_to_earn, view.total_credits
        )?;
        writeln!(
            out,
            "Best case         {} (all {})",
            view.max_possible_average, view.scale_max
        )?;

        if view.has_goal {
            writeln!(out)?;
            if view.reachable {
                writeln!(
                    out,
                    "Required performance: {} [{}]",
                    view.required_average, view.tier
                )?;
            } else {
                writeln!(out, "Goal unreachable [{}]", view.tier)?;
                writeln!(
                    out,
                    "Maximum possible average is {}",
                    view.max_possible_average
                )?;
            }
        }

        writeln!(out)?;
        writeln!(out, "{:>11}  {:>11}  {:>8}", "Performance", "New average", "Change")?;
        for row in &view.rows {
            let marker = if row.meets_target { " *" } else { "" };
            writeln!(
                out,
                "{:>11}  {:>11}  {:>6} {}{marker}",
                row.assumed, row.projected, row.delta, row.arrow
            )?;
        }
        if view.has_goal && view.rows.iter().any(|r| r.meets_target) {
            writeln!(out)?;
            writeln!(out, "* reaches the goal")?;
        }

        Ok(out)
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TextReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let view = ReportView::from_context(ctx);
        Ok(Self::render_view(&view)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Goal, Strategy, StrategyKind};
    use crate::core::projector::project;
    use crate::core::scale::GradingScale;

    #[test]
    fn test_text_report_contents() {
        let result = project(
            408.0,
            48.0,
            &Strategy::next_term(24.0),
            Some(Goal::new(9.0)),
        )
        .unwrap();
        let scale = GradingScale::default();
        let ctx = ReportContext::new(&result, StrategyKind::NextTerm, &scale);
        let text = TextReporter::new().render(&ctx).unwrap();

        assert!(text.contains("Current average   8.50"));
        assert!(text.contains("Required performance: 10.00 [HARD GRIND]"));
        assert!(text.contains("10.0"));
        assert!(text.contains("+0.50"));
        assert!(text.contains("* reaches the goal"));
    }

    #[test]
    fn test_text_report_unreachable() {
        let result = project(
            408.0,
            48.0,
            &Strategy::next_term(24.0),
            Some(Goal::new(9.5)),
        )
        .unwrap();
        let scale = GradingScale::default();
        let ctx = ReportContext::new(&result, StrategyKind::NextTerm, &scale);
        let text = TextReporter::new().render(&ctx).unwrap();

        assert!(text.contains("Goal unreachable [IMPOSSIBLE]"));
        assert!(text.contains("Maximum possible average is 9.00"));
        assert!(!text.contains("reaches the goal"));
    }
}
