//! Config command handler
//!
//! Edits are applied in memory first. A `[scale]` edit that would leave the
//! projector without a usable grading scale is refused before anything is saved.

use super::confirm;
use crate::args::ConfigSubcommand;
use grade_projector::config::Config;
use grade_projector::core::GradingScale;
use grade_projector::{error, info};

/// A single change requested on the command line
enum Edit<'a> {
    Set { key: &'a str, value: &'a str },
    Unset { key: &'a str },
}

impl<'a> Edit<'a> {
    const fn key(&self) -> &'a str {
        match *self {
            Self::Set { key, .. } | Self::Unset { key } => key,
        }
    }
}

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    let edit = match &subcommand {
        None => return show_all(config),
        Some(ConfigSubcommand::Get { key: None }) => return show_all(config),
        Some(ConfigSubcommand::Get { key: Some(key) }) => return show_key(config, key),
        Some(ConfigSubcommand::Reset) => return reset(),
        Some(ConfigSubcommand::Set { key, value }) => Edit::Set { key, value },
        Some(ConfigSubcommand::Unset { key }) => Edit::Unset { key },
    };

    let message = apply(config, defaults, &edit).unwrap_or_else(|e| {
        error!("Config edit of '{}' rejected: {e}", edit.key());
        eprintln!("✗ {e}");
        std::process::exit(1);
    });

    if let Err(e) = config.save() {
        error!("Failed to save config: {e}");
        eprintln!("✗ Failed to save config: {e}");
        std::process::exit(1);
    }

    info!("Config key '{}' updated", edit.key());
    println!("✓ {message}");
}

/// Apply an edit to `config` and describe the outcome
///
/// Scale keys are checked against the combined `[scale]` section, and the
/// previous config is restored when the result is unusable.
fn apply(config: &mut Config, defaults: &Config, edit: &Edit<'_>) -> Result<String, String> {
    let before = config.clone();
    let message = match edit {
        Edit::Set { key, value } => {
            config.set(key, value)?;
            format!("Set {key} = {value}")
        }
        Edit::Unset { key } => {
            config.unset(key, defaults)?;
            format!("Reset {key} to default")
        }
    };

    if !Config::is_scale_key(edit.key()) {
        return Ok(message);
    }
    match config.try_grading_scale() {
        Ok(scale) => Ok(format!("{message} ({})", describe_scale(&scale))),
        Err(e) => {
            *config = before;
            Err(format!("Rejected {}: {e}", edit.key()))
        }
    }
}

fn describe_scale(scale: &GradingScale) -> String {
    format!(
        "scale 0-{}, {} scenarios per projection",
        scale.max,
        scale.scenario_count()
    )
}

fn show_key(config: &Config, key: &str) {
    match config.get(key) {
        Some(value) => println!("{value}"),
        None => {
            eprintln!("✗ Unknown config key: '{key}'");
            std::process::exit(1);
        }
    }
}

fn show_all(config: &Config) {
    println!("\n=== Configuration ===\n");
    print!("{config}");
    match config.try_grading_scale() {
        Ok(scale) => println!("\nEffective {}", describe_scale(&scale)),
        Err(e) => println!("\n[scale] is invalid ({e}); projections use the default scale"),
    }
}

fn reset() {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return;
    }

    if !confirm("Reset the configuration to defaults?") {
        println!("✗ Reset cancelled");
        return;
    }
    if let Err(e) = Config::reset() {
        error!("Failed to remove config file: {e}");
        eprintln!("✗ Failed to remove config file: {e}");
        std::process::exit(1);
    }
    println!("✓ Config reset to defaults");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_edit_reports_effective_scale() {
        let defaults = Config::from_defaults();
        let mut config = defaults.clone();
        let message = apply(
            &mut config,
            &defaults,
            &Edit::Set { key: "scale_max", value: "4" },
        )
        .unwrap();

        assert_eq!(config.scale.max, Some(4.0));
        assert_eq!(message, "Set scale_max = 4 (scale 0-4, 31 scenarios per projection)");
    }

    #[test]
    fn test_unusable_scale_edit_is_rolled_back() {
        let defaults = Config::from_defaults();
        let mut config = defaults.clone();
        let result = apply(
            &mut config,
            &defaults,
            &Edit::Set { key: "scenario_step", value: "1e-12" },
        );

        assert!(result.unwrap_err().starts_with("Rejected scenario_step:"));
        assert_eq!(config.scale.scenario_step, defaults.scale.scenario_step);
    }

    #[test]
    fn test_unset_restores_default_step() {
        let defaults = Config::from_defaults();
        let mut config = defaults.clone();
        config.set("scenario_step", "0.5").unwrap();
        let message = apply(&mut config, &defaults, &Edit::Unset { key: "scenario_step" }).unwrap();

        assert_eq!(config.scale.scenario_step, defaults.scale.scenario_step);
        assert!(message.ends_with("31 scenarios per projection)"));
    }

    #[test]
    fn test_non_scale_edit_has_plain_message() {
        let defaults = Config::from_defaults();
        let mut config = defaults.clone();
        let message = apply(
            &mut config,
            &defaults,
            &Edit::Set { key: "reports_dir", value: "/tmp/reports" },
        )
        .unwrap();

        assert_eq!(message, "Set reports_dir = /tmp/reports");
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let defaults = Config::from_defaults();
        let mut config = defaults.clone();
        let result = apply(&mut config, &defaults, &Edit::Unset { key: "nope" });
        assert_eq!(result, Err("Unknown config key: 'nope'".to_string()));
    }
}
