//! Command-line interface entry point for `gradeprojector`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use grade_projector::config::Config;
use grade_projector::info;
use grade_projector::logger::{
    enable_debug, enable_verbose, init_file_logging, set_level, Level,
};
use std::path::PathBuf;

/// Logging settings for one run, resolved from flags over config
#[derive(Debug, Clone, PartialEq, Eq)]
struct LogSetup {
    level: Level,
    verbose: bool,
    file: Option<PathBuf>,
}

impl LogSetup {
    /// Flags win over config; an unreadable config level falls back to warn.
    fn resolve(args: &Cli, config: &Config) -> Self {
        let level = if args.debug_flag {
            Level::Debug
        } else {
            args.log_level
                .map(Level::from)
                .or_else(|| Level::parse(&config.logging.level))
                .unwrap_or(Level::Warn)
        };
        let file = args.log_file.clone().or_else(|| {
            Some(&config.logging.file)
                .filter(|f| !f.is_empty())
                .map(PathBuf::from)
        });
        Self {
            level,
            verbose: args.verbose || config.logging.verbose,
            file,
        }
    }

    fn install(&self) {
        if self.level == Level::Debug {
            enable_debug();
        }
        if self.verbose {
            enable_verbose();
        }
        set_level(self.level);

        let Some(path) = &self.file else { return };
        if init_file_logging(path) {
            info!("Logging to {}", path.display());
            if self.verbose {
                eprintln!("✓ Logging to {}", path.display());
            }
        } else {
            eprintln!("✗ Could not open log file {}", path.display());
        }
    }
}

fn main() {
    let args = Cli::parse();

    let defaults = Config::from_defaults();
    let mut config = Config::load();
    config.apply_overrides(&args.to_config_overrides());

    LogSetup::resolve(&args, &config).install();

    match args.command {
        Command::Project(project_args) => commands::project::run(&project_args, &config),
        Command::Session { subcommand } => commands::session::run(subcommand, &config),
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(flags: &[&str]) -> Cli {
        let argv: Vec<&str> = std::iter::once("gradeprojector")
            .chain(flags.iter().copied())
            .chain(std::iter::once("config"))
            .collect();
        Cli::parse_from(argv)
    }

    #[test]
    fn test_config_logging_used_without_flags() {
        let mut config = Config::from_defaults();
        config.logging.level = "info".to_string();
        config.logging.file = "/tmp/gp.log".to_string();

        let setup = LogSetup::resolve(&cli(&[]), &config);
        assert_eq!(setup.level, Level::Info);
        assert_eq!(setup.file, Some(PathBuf::from("/tmp/gp.log")));
        assert!(!setup.verbose);
    }

    #[test]
    fn test_flags_override_config_logging() {
        let mut config = Config::from_defaults();
        config.logging.level = "info".to_string();
        config.logging.file = "/tmp/gp.log".to_string();

        let setup = LogSetup::resolve(
            &cli(&["--log-level", "error", "--log-file", "/tmp/run.log", "-v"]),
            &config,
        );
        assert_eq!(setup.level, Level::Error);
        assert_eq!(setup.file, Some(PathBuf::from("/tmp/run.log")));
        assert!(setup.verbose);
    }

    #[test]
    fn test_debug_flag_and_bad_level() {
        let mut config = Config::from_defaults();
        config.logging.level = "loud".to_string();
        config.logging.file = String::new();

        assert_eq!(LogSetup::resolve(&cli(&[]), &config).level, Level::Warn);
        assert_eq!(LogSetup::resolve(&cli(&[]), &config).file, None);
        assert_eq!(
            LogSetup::resolve(&cli(&["--debug", "--log-level", "error"]), &config).level,
            Level::Debug
        );
    }
}
