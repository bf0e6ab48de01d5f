//! Configuration module for `grade_projector`

use crate::core::scale::GradingScale;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Variable expanded to the application directory in path values
const APP_DIR_VAR: &str = "$GRADE_PROJECTOR";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Grading scale configuration
///
/// Unset fields fall back to the compiled-in defaults when loaded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScaleConfig {
    /// Highest attainable average
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Gap below which a goal is an easy reach
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easy_reach_gap: Option<f64>,
    /// Gap below which a goal is moderate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moderate_gap: Option<f64>,
    /// Distance from the maximum to the lowest scenario
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario_span: Option<f64>,
    /// Distance between scenarios
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario_step: Option<f64>,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Session file holding the persisted inputs
    #[serde(default)]
    pub session_file: String,
    /// Directory for report output files
    #[serde(default)]
    pub reports_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Grading scale settings
    #[serde(default)]
    pub scale: ScaleConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override grading scale maximum
    pub scale_max: Option<f64>,
    /// Override session file path
    pub session_file: Option<String>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
}

fn parse_scale_value(key: &str, value: &str) -> Result<f64, String> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("Invalid number for '{key}': '{value}'"))
}

fn merge_option(target: &mut Option<f64>, default: Option<f64>) -> bool {
    if target.is_none() && default.is_some() {
        *target = default;
        true
    } else {
        false
    }
}

fn merge_string(target: &mut String, default: &str) -> bool {
    if target.is_empty() && !default.is_empty() {
        default.clone_into(target);
        true
    } else {
        false
    }
}

fn display_option(value: Option<f64>) -> String {
    value.map_or_else(|| "(default)".to_string(), |v| v.to_string())
}

impl Config {
    /// Get the `$GRADE_PROJECTOR` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/gradeprojector`
    /// - macOS: `~/Library/Application Support/gradeprojector`
    /// - Windows: `%APPDATA%\gradeprojector`
    #[must_use]
    pub fn get_app_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gradeprojector")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Fields that are empty (or unset) here and present in `defaults` are
    /// copied over, so configs written by older versions pick up new keys.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let merged = [
            merge_string(&mut self.logging.level, &defaults.logging.level),
            merge_string(&mut self.logging.file, &defaults.logging.file),
            merge_option(&mut self.scale.max, defaults.scale.max),
            merge_option(&mut self.scale.easy_reach_gap, defaults.scale.easy_reach_gap),
            merge_option(&mut self.scale.moderate_gap, defaults.scale.moderate_gap),
            merge_option(&mut self.scale.scenario_span, defaults.scale.scenario_span),
            merge_option(&mut self.scale.scenario_step, defaults.scale.scenario_step),
            merge_string(&mut self.paths.session_file, &defaults.paths.session_file),
            merge_string(&mut self.paths.reports_dir, &defaults.paths.reports_dir),
        ];
        merged.contains(&true)
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides only affect this run; they are never written back to the
    /// config file. `None` leaves the loaded value untouched.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(max) = overrides.scale_max {
            self.scale.max = Some(max);
        }

        if let Some(session_file) = &overrides.session_file {
            self.paths.session_file.clone_from(session_file);
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, inside
    /// [`get_app_dir`](Self::get_app_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_app_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$GRADE_PROJECTOR` variable in a string
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(APP_DIR_VAR) {
            let app_dir = Self::get_app_dir();
            value.replace(APP_DIR_VAR, app_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Expands `$GRADE_PROJECTOR` in path values. Missing fields use their
    /// serde defaults (empty strings, `false`, unset scale values).
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.session_file = Self::expand_variables(&config.paths.session_file);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The
    /// defaults are compiled into the binary and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from the user config file, creating it from defaults on first run
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_file_path())
    }

    /// Load configuration from a specific file, creating it from defaults when absent
    #[must_use]
    pub fn load_from(config_file: &Path) -> Self {
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save_to(config_file);
                    }
                    return config;
                }
            }
            crate::warn!(
                "Could not read config {}; using defaults",
                config_file.display()
            );
        } else {
            // First run: create directory and config file from defaults
            let _ = defaults.save_to(config_file);
        }

        defaults
    }

    /// Save config to the user config file
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::get_config_file_path())
    }

    /// Save config to a specific file, creating its directory as needed
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written
    pub fn save_to(&self, config_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = config_file.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(config_file, toml_str)?;
        Ok(())
    }

    /// The grading scale described by the `[scale]` section, if it is usable
    ///
    /// Unset values use the built-in policy.
    ///
    /// # Errors
    /// Returns the validation message when the combined scale cannot drive a projection
    pub fn try_grading_scale(&self) -> Result<GradingScale, String> {
        let defaults = GradingScale::default();
        let scale = GradingScale {
            max: self.scale.max.unwrap_or(defaults.max),
            easy_reach_gap: self.scale.easy_reach_gap.unwrap_or(defaults.easy_reach_gap),
            moderate_gap: self.scale.moderate_gap.unwrap_or(defaults.moderate_gap),
            scenario_span: self.scale.scenario_span.unwrap_or(defaults.scenario_span),
            scenario_step: self.scale.scenario_step.unwrap_or(defaults.scenario_step),
        };
        scale.validate().map(|()| scale)
    }

    /// The grading scale the projector should use
    ///
    /// A scale that fails validation is replaced by the default scale with a warning.
    #[must_use]
    pub fn grading_scale(&self) -> GradingScale {
        self.try_grading_scale().unwrap_or_else(|e| {
            crate::warn!("Invalid [scale] configuration ({e}); using the default scale");
            GradingScale::default()
        })
    }

    /// Whether a key belongs to the `[scale]` section
    #[must_use]
    pub fn is_scale_key(key: &str) -> bool {
        matches!(
            key,
            "scale_max"
                | "scale-max"
                | "easy_reach_gap"
                | "moderate_gap"
                | "scenario_span"
                | "scenario_step"
        )
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `scale_max`,
    /// `easy_reach_gap`, `moderate_gap`, `scenario_span`, `scenario_step`,
    /// `session_file`, `reports_dir`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "scale_max" | "scale-max" => Some(display_option(self.scale.max)),
            "easy_reach_gap" => Some(display_option(self.scale.easy_reach_gap)),
            "moderate_gap" => Some(display_option(self.scale.moderate_gap)),
            "scenario_span" => Some(display_option(self.scale.scenario_span)),
            "scenario_step" => Some(display_option(self.scale.scenario_step)),
            "session_file" | "session-file" => Some(self.paths.session_file.clone()),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only. Call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value does not parse
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "scale_max" | "scale-max" => self.scale.max = Some(parse_scale_value(key, value)?),
            "easy_reach_gap" => self.scale.easy_reach_gap = Some(parse_scale_value(key, value)?),
            "moderate_gap" => self.scale.moderate_gap = Some(parse_scale_value(key, value)?),
            "scenario_span" => self.scale.scenario_span = Some(parse_scale_value(key, value)?),
            "scenario_step" => self.scale.scenario_step = Some(parse_scale_value(key, value)?),
            "session_file" | "session-file" => self.paths.session_file = value.to_string(),
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "scale_max" | "scale-max" => self.scale.max = defaults.scale.max,
            "easy_reach_gap" => self.scale.easy_reach_gap = defaults.scale.easy_reach_gap,
            "moderate_gap" => self.scale.moderate_gap = defaults.scale.moderate_gap,
            "scenario_span" => self.scale.scenario_span = defaults.scale.scenario_span,
            "scenario_step" => self.scale.scenario_step = defaults.scale.scenario_step,
            "session_file" | "session-file" => self
                .paths
                .session_file
                .clone_from(&defaults.paths.session_file),
            "reports_dir" | "reports-dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults by deleting the config file
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[scale]")?;
        writeln!(f, "  max = {}", display_option(self.scale.max))?;
        writeln!(
            f,
            "  easy_reach_gap = {}",
            display_option(self.scale.easy_reach_gap)
        )?;
        writeln!(f, "  moderate_gap = {}", display_option(self.scale.moderate_gap))?;
        writeln!(
            f,
            "  scenario_span = {}",
            display_option(self.scale.scenario_span)
        )?;
        writeln!(
            f,
            "  scenario_step = {}",
            display_option(self.scale.scenario_step)
        )?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  session_file = \"{}\"", self.paths.session_file)?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        Ok(())
    }
}
