//! Integration tests for report rendering

use grade_projector::core::models::{Goal, Strategy, StrategyKind};
use grade_projector::core::report::{ReportContext, ReportFormat, ReportGenerator};
use grade_projector::core::{project, GradingScale};
use std::fs;
use tempfile::TempDir;

fn render(format: ReportFormat, target: Option<f64>) -> String {
    let result = project(
        408.0,
        48.0,
        &Strategy::next_term(24.0),
        target.map(Goal::new),
    )
    .expect("fixture projects");
    let scale = GradingScale::default();
    let ctx = ReportContext::new(&result, StrategyKind::NextTerm, &scale);
    format.reporter().render(&ctx).expect("report renders")
}

#[test]
fn test_every_format_reports_the_fixture() {
    for format in [ReportFormat::Text, ReportFormat::Markdown, ReportFormat::Html] {
        let out = render(format, Some(9.0));
        assert!(out.contains("8.50"), "{format} misses current average");
        assert!(out.contains("HARD GRIND"), "{format} misses tier");
        assert!(out.contains("10.00"), "{format} misses required average");
        assert!(out.contains("-1.50"), "{format} misses worst delta");
    }
}

#[test]
fn test_unreachable_goal_reports_maximum() {
    for format in [ReportFormat::Text, ReportFormat::Markdown, ReportFormat::Html] {
        let out = render(format, Some(9.5));
        assert!(out.contains("IMPOSSIBLE"), "{format} misses tier");
        assert!(out.contains("9.00"), "{format} misses maximum");
    }
}

#[test]
fn test_reports_without_goal_have_no_tier() {
    for format in [ReportFormat::Text, ReportFormat::Markdown, ReportFormat::Html] {
        let out = render(format, None);
        assert!(out.contains("--"), "{format} misses goal placeholder");
        assert!(!out.contains("HARD GRIND"));
        assert!(!out.contains("IMPOSSIBLE"));
    }
}

#[test]
fn test_generate_writes_each_extension() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let result = project(408.0, 48.0, &Strategy::to_completion(160.0), Some(Goal::new(8.75)))
        .expect("projection");
    let scale = GradingScale::default();
    let ctx = ReportContext::new(&result, StrategyKind::ToCompletion, &scale);

    for format in [ReportFormat::Text, ReportFormat::Markdown, ReportFormat::Html] {
        let path = dir.path().join(format!("projection.{}", format.extension()));
        format
            .reporter()
            .generate(&ctx, &path)
            .expect("report written");
        let content = fs::read_to_string(&path).expect("report readable");
        assert!(content.contains(StrategyKind::ToCompletion.label()));
    }
}
