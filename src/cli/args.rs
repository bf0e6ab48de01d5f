//! CLI argument definitions for `gradeprojector`

use clap::{builder::BoolishValueParser, ArgGroup, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use grade_projector::config::ConfigOverrides;
use grade_projector::core::input::parse_term_pair;
use grade_projector::core::models::GradeEntry;
use grade_projector::core::report::ReportFormat;
use grade_projector::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `scale_max`, `reports_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum SessionSubcommand {
    /// Display the saved inputs.
    Show,
    /// Append a past term to the detailed record.
    AddTerm {
        /// Term average
        #[arg(value_name = "AVG", allow_hyphen_values = true)]
        average: String,
        /// Credits the term carried
        #[arg(value_name = "CREDITS", allow_hyphen_values = true)]
        credits: String,
    },
    /// Remove a past term by its zero-based index.
    RemoveTerm {
        /// Row index as shown by `session show`
        #[arg(value_name = "INDEX")]
        index: usize,
    },
    /// Set a saved input (`mode`, `strategy`, `future_credits`, `target`, `cgpa`, `credits`).
    Set {
        /// Session key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE", allow_hyphen_values = true)]
        value: String,
    },
    /// Clear every saved input (requires confirmation).
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Inputs for a single projection.
///
/// Anything left out is taken from the saved session.
#[derive(Debug, Args)]
#[command(group(ArgGroup::new("past").args(["terms", "cgpa"])))]
#[command(group(ArgGroup::new("horizon").args(["next_term", "to_completion"])))]
pub struct ProjectArgs {
    /// Past term as `AVG:CREDITS` (repeatable; detailed mode)
    #[arg(long = "term", value_name = "AVG:CREDITS", value_parser = parse_term_pair)]
    pub terms: Vec<GradeEntry>,

    /// Cumulative average so far (quick mode; requires --credits)
    #[arg(long, value_name = "CGPA", requires = "credits")]
    pub cgpa: Option<f64>,

    /// Credits behind --cgpa
    #[arg(long, value_name = "CREDITS", requires = "cgpa")]
    pub credits: Option<f64>,

    /// Project over the next term carrying CREDITS
    #[arg(long, value_name = "CREDITS")]
    pub next_term: Option<f64>,

    /// Project to the end of a degree worth TOTAL credits
    #[arg(long, value_name = "TOTAL")]
    pub to_completion: Option<f64>,

    /// Target cumulative average
    #[arg(long, value_name = "CGPA")]
    pub target: Option<f64>,

    /// Report format: text, markdown (md) or html
    #[arg(short, long, value_name = "FORMAT", default_value = "text")]
    pub format: ReportFormat,

    /// Output file path (text prints to stdout; other formats default to the reports directory)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Save the inputs used into the session
    #[arg(long)]
    pub save: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Manage the saved projection inputs.
    ///
    /// If no subcommand is provided, displays the session.
    Session {
        #[command(subcommand)]
        subcommand: Option<SessionSubcommand>,
    },
    /// Project the cumulative average forward.
    ///
    /// Computes the current average, the performance needed for a target, its
    /// difficulty and a table of what-if scenarios.
    Project(ProjectArgs),
}

#[derive(Parser, Debug)]
#[command(
    name = "gradeprojector",
    about = "Cumulative grade average projection",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override the top of the grading scale
    #[arg(long = "scale-max", value_name = "MAX")]
    pub scale_max: Option<f64>,

    /// Override the session file
    #[arg(long = "session-file", value_name = "PATH")]
    pub session_file: Option<PathBuf>,

    /// Override the reports directory
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            scale_max: self.scale_max,
            session_file: self
                .session_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let cli = Cli::parse_from(["gradeprojector", "config"]);
        let overrides = cli.to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.scale_max.is_none());
        assert!(overrides.session_file.is_none());
        assert!(overrides.reports_dir.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let cli = Cli::parse_from([
            "gradeprojector",
            "--config-level",
            "debug",
            "--config-log-file",
            "/tmp/test.log",
            "--config-verbose",
            "yes",
            "--scale-max",
            "4",
            "--session-file",
            "/tmp/session.toml",
            "--reports-dir",
            "/output",
            "session",
        ]);

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.scale_max, Some(4.0));
        assert_eq!(overrides.session_file, Some("/tmp/session.toml".to_string()));
        assert_eq!(overrides.reports_dir, Some("/output".to_string()));
    }

    #[test]
    fn test_project_detailed_terms() {
        let cli = Cli::parse_from([
            "gradeprojector",
            "project",
            "--term",
            "8.0:20",
            "--term",
            "9.0:28",
            "--next-term",
            "24",
            "--target",
            "9",
            "--format",
            "md",
        ]);
        let Command::Project(args) = cli.command else {
            panic!("expected project command");
        };
        assert_eq!(
            args.terms,
            vec![GradeEntry::new(8.0, 20.0), GradeEntry::new(9.0, 28.0)]
        );
        assert_eq!(args.next_term, Some(24.0));
        assert_eq!(args.target, Some(9.0));
        assert_eq!(args.format, ReportFormat::Markdown);
        assert!(!args.save);
    }

    #[test]
    fn test_project_rejects_mixed_past_inputs() {
        let result = Cli::try_parse_from([
            "gradeprojector",
            "project",
            "--term",
            "8.0:20",
            "--cgpa",
            "8.5",
            "--credits",
            "48",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_project_rejects_two_strategies() {
        let result = Cli::try_parse_from([
            "gradeprojector",
            "project",
            "--next-term",
            "24",
            "--to-completion",
            "160",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_project_rejects_malformed_term() {
        let result = Cli::try_parse_from(["gradeprojector", "project", "--term", "8.5"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cgpa_requires_credits() {
        let result = Cli::try_parse_from(["gradeprojector", "project", "--cgpa", "8.5"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_session_reset_yes() {
        let cli = Cli::parse_from(["gradeprojector", "session", "reset", "--yes"]);
        assert!(matches!(
            cli.command,
            Command::Session {
                subcommand: Some(SessionSubcommand::Reset { yes: true })
            }
        ));
    }
}
