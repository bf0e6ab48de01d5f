//! Markdown report generator
//!
//! Renders a projection as GitHub-flavored Markdown tables. The layout lives in
//! `templates/report.md`.

use crate::core::report::formats::ReportView;
use crate::core::report::{ReportContext, ReportGenerator};
use askama::Template;
use std::error::Error;

#[derive(Template)]
#[template(path = "report.md")]
struct MarkdownTemplate {
    view: ReportView,
}

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let template = MarkdownTemplate {
            view: ReportView::from_context(ctx),
        };
        Ok(template.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Goal, Strategy, StrategyKind};
    use crate::core::projector::project;
    use crate::core::scale::GradingScale;

    #[test]
    fn test_markdown_report_tables() {
        let result = project(
            408.0,
            48.0,
            &Strategy::next_term(24.0),
            Some(Goal::new(9.0)),
        )
        .unwrap();
        let scale = GradingScale::default();
        let ctx = ReportContext::new(&result, StrategyKind::NextTerm, &scale);
        let md = MarkdownReporter::new().render(&ctx).unwrap();

        assert!(md.starts_with("# Grade Projection"));
        assert!(md.contains("| Current average | 8.50 |"));
        assert!(md.contains("**HARD GRIND**"));
        assert!(md.contains("| 10.0 | 9.00 | +0.50 ↑ | ✓ |"));
        assert!(md.contains("| 4.0 | 7.00 | -1.50 ↓ |  |"));
    }

    #[test]
    fn test_markdown_report_without_goal() {
        let result = project(408.0, 48.0, &Strategy::to_completion(160.0), None).unwrap();
        let scale = GradingScale::default();
        let ctx = ReportContext::new(&result, StrategyKind::ToCompletion, &scale);
        let md = MarkdownReporter::new().render(&ctx).unwrap();

        assert!(md.contains("| Goal | -- |"));
        assert!(!md.contains("Required performance"));
        assert!(!md.contains('✓'));
    }
}
