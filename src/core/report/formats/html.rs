//! HTML report generator
//!
//! Produces a single self-contained page with inline styles; the layout lives in
//! `templates/report.html`. Values are HTML-escaped by the template engine.

use crate::core::report::formats::ReportView;
use crate::core::report::{ReportContext, ReportGenerator};
use askama::Template;
use std::error::Error;

#[derive(Template)]
#[template(path = "report.html")]
struct HtmlTemplate {
    view: ReportView,
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let template = HtmlTemplate {
            view: ReportView::from_context(ctx),
        };
        Ok(template.render()?)
    }
}
