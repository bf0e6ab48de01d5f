//! Project command handler
//!
//! Resolves inputs from flags and the saved session, runs the projector and
//! renders the result in the requested format.

use super::session::{load_or_exit, save_or_exit};
use crate::args::ProjectArgs;
use grade_projector::config::Config;
use grade_projector::core::models::{AggregateRecord, Goal, PastRecord, Strategy};
use grade_projector::core::report::{ReportContext, ReportFormat, ReportGenerator};
use grade_projector::core::session::Session;
use grade_projector::core::{aggregate, ProjectionError, Projector};
use grade_projector::{error, info, verbose};
use std::path::{Path, PathBuf};

/// Base name for reports written to the reports directory
const REPORT_FILE_STEM: &str = "projection";

/// Engine inputs for one run, after flags are merged over the session.
#[derive(Debug, Clone, PartialEq)]
pub struct Inputs {
    /// Past record
    pub past: PastRecord,
    /// Credit horizon
    pub strategy: Strategy,
    /// Optional target
    pub goal: Option<Goal>,
}

impl Inputs {
    /// Take each input from its flag when given, otherwise from the session
    pub fn resolve(args: &ProjectArgs, session: &Session) -> Self {
        Self {
            past: resolve_past(args, session),
            strategy: resolve_strategy(args, session),
            goal: args.target.map(Goal::new).or_else(|| session.to_goal()),
        }
    }

    /// Write these inputs into the session, leaving the inactive mode alone
    pub fn record(&self, session: &mut Session) {
        session.capture_into(&self.past, &self.strategy, self.goal);
    }
}

/// Run the project command.
///
/// With `--save` the inputs are persisted before projecting, so they are kept
/// even when the projection rejects them.
pub fn run(args: &ProjectArgs, config: &Config) {
    let session_path = Session::path_for(config);
    let mut session = load_or_exit(&session_path);
    let inputs = Inputs::resolve(args, &session);

    if args.save {
        inputs.record(&mut session);
        save_or_exit(&session, &session_path);
        verbose!("Inputs saved to {}", session_path.display());
    }

    info!(
        "Projecting {} record with {} strategy",
        inputs.past.mode_name(),
        inputs.strategy.kind()
    );

    let projector = Projector::with_scale(config.grading_scale());
    let result = aggregate(&inputs.past)
        .and_then(|totals| {
            verbose!(
                "Past record: {} points over {} credits",
                totals.total_points,
                totals.total_credits
            );
            projector.project_totals(totals, &inputs.strategy, inputs.goal)
        })
        .unwrap_or_else(|e| fail(&e));

    let ctx = ReportContext::new(&result, inputs.strategy.kind(), projector.scale());
    let reporter = args.format.reporter();

    let target = match (&args.output, args.format) {
        (Some(path), _) => Some(path.clone()),
        (None, ReportFormat::Text) => None,
        (None, format) => Some(default_report_path(config, format)),
    };

    match target {
        None => match reporter.render(&ctx) {
            Ok(text) => print!("{text}"),
            Err(e) => {
                error!("Report rendering failed: {e}");
                eprintln!("✗ Failed to render report: {e}");
                std::process::exit(1);
            }
        },
        Some(path) => write_report(&*reporter, &ctx, &path),
    }
}

fn resolve_past(args: &ProjectArgs, session: &Session) -> PastRecord {
    if !args.terms.is_empty() {
        return PastRecord::Itemized(args.terms.clone());
    }
    match (args.cgpa, args.credits) {
        (Some(average), Some(credits)) => {
            PastRecord::Aggregate(AggregateRecord::new(average, credits))
        }
        _ => session.to_past_record(),
    }
}

fn resolve_strategy(args: &ProjectArgs, session: &Session) -> Strategy {
    match (args.next_term, args.to_completion) {
        (Some(credits), _) => Strategy::next_term(credits),
        (None, Some(total)) => Strategy::to_completion(total),
        (None, None) => session.to_strategy(),
    }
}

fn default_report_path(config: &Config, format: ReportFormat) -> PathBuf {
    PathBuf::from(&config.paths.reports_dir)
        .join(format!("{REPORT_FILE_STEM}.{}", format.extension()))
}

fn write_report(reporter: &dyn ReportGenerator, ctx: &ReportContext, path: &Path) {
    match reporter.generate(ctx, path) {
        Ok(()) => {
            info!("Report written to {}", path.display());
            println!("✓ Report generated: {}", path.display());
        }
        Err(e) => {
            error!("Report generation failed for {}: {e}", path.display());
            eprintln!("✗ Failed to write report {}: {e}", path.display());
            std::process::exit(1);
        }
    }
}

fn fail(e: &ProjectionError) -> ! {
    error!("Projection failed: {e}");
    eprintln!("✗ Check {}: {e}", e.field());
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{Cli, Command};
    use clap::Parser;
    use grade_projector::core::models::GradeEntry;
    use grade_projector::core::session::{InputMode, TermRow};

    fn project_args(flags: &[&str]) -> ProjectArgs {
        let argv: Vec<&str> = ["gradeprojector", "project"]
            .into_iter()
            .chain(flags.iter().copied())
            .collect();
        match Cli::parse_from(argv).command {
            Command::Project(args) => args,
            _ => panic!("expected project command"),
        }
    }

    fn saved_session() -> Session {
        let mut session = Session::default();
        session.add_term("8", "24");
        session.add_term("9", "24");
        session.set("future_credits", "24").unwrap();
        session.set("target", "9").unwrap();
        session
    }

    #[test]
    fn test_missing_flags_fall_back_to_session() {
        let inputs = Inputs::resolve(&project_args(&["--target", "8.8"]), &saved_session());
        assert_eq!(
            inputs.past,
            PastRecord::Itemized(vec![GradeEntry::new(8.0, 24.0), GradeEntry::new(9.0, 24.0)])
        );
        assert_eq!(inputs.strategy, Strategy::next_term(24.0));
        assert_eq!(inputs.goal, Some(Goal::new(8.8)));
    }

    #[test]
    fn test_quick_save_keeps_saved_terms() {
        let mut session = saved_session();
        let args = project_args(&["--cgpa", "8.5", "--credits", "48", "--save"]);
        Inputs::resolve(&args, &session).record(&mut session);

        assert_eq!(session.mode, InputMode::Quick);
        assert_eq!(
            session.terms,
            vec![TermRow::new("8", "24"), TermRow::new("9", "24")]
        );
    }

    #[test]
    fn test_rejected_inputs_are_still_recorded() {
        let mut session = saved_session();
        let args = project_args(&["--to-completion", "40", "--save"]);
        let inputs = Inputs::resolve(&args, &session);
        inputs.record(&mut session);

        assert_eq!(session.strategy.as_str(), "degree");
        assert_eq!(session.future_credits, "40");
        let totals = aggregate(&inputs.past).unwrap();
        assert!(matches!(
            Projector::new().project_totals(totals, &inputs.strategy, inputs.goal),
            Err(ProjectionError::InvalidStrategyCredits { .. })
        ));
    }
}
