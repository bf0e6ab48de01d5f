//! Persisted session inputs
//!
//! A session keeps the student's inputs exactly as typed, so half-filled term
//! rows survive between runs. Text is only parsed into engine values when a
//! projection is requested.

use crate::config::Config;
use crate::core::input::{parse_credits, parse_entry, parse_number};
use crate::core::models::{AggregateRecord, Goal, PastRecord, Strategy, StrategyKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the session inside the application directory
pub const SESSION_FILE_NAME: &str = "session.toml";

/// Which past-record representation is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Term-by-term rows
    #[default]
    Detailed,
    /// A single cumulative average and credit total
    Quick,
}

impl std::str::FromStr for InputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "detailed" | "itemized" | "terms" => Ok(Self::Detailed),
            "quick" | "aggregate" => Ok(Self::Quick),
            _ => Err(format!("Unknown mode: '{s}' (expected 'detailed' or 'quick')")),
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Detailed => write!(f, "detailed"),
            Self::Quick => write!(f, "quick"),
        }
    }
}

/// One term row as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermRow {
    /// Term average text
    #[serde(default)]
    pub average: String,
    /// Term credits text
    #[serde(default)]
    pub credits: String,
}

impl TermRow {
    /// Create a row from text fields
    #[must_use]
    pub fn new(average: &str, credits: &str) -> Self {
        Self {
            average: average.trim().to_string(),
            credits: credits.trim().to_string(),
        }
    }
}

/// The quick-mode aggregate as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickRow {
    /// Cumulative average text
    #[serde(default)]
    pub average: String,
    /// Credit total text
    #[serde(default)]
    pub credits: String,
}

fn default_terms() -> Vec<TermRow> {
    vec![TermRow::default()]
}

/// Everything the student entered, as persisted between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Active past-record mode
    #[serde(default)]
    pub mode: InputMode,
    /// Active strategy
    #[serde(default)]
    pub strategy: StrategyKind,
    /// Strategy credit text (future credits or program total)
    #[serde(default)]
    pub future_credits: String,
    /// Target average text
    #[serde(default)]
    pub target: String,
    /// Quick-mode fields
    #[serde(default)]
    pub quick: QuickRow,
    /// Detailed-mode rows
    #[serde(default = "default_terms")]
    pub terms: Vec<TermRow>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            mode: InputMode::Detailed,
            strategy: StrategyKind::NextTerm,
            future_credits: String::new(),
            target: String::new(),
            quick: QuickRow::default(),
            terms: default_terms(),
        }
    }
}

fn format_value(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl Session {
    /// Default session path inside the application directory
    #[must_use]
    pub fn default_path() -> PathBuf {
        Config::get_app_dir().join(SESSION_FILE_NAME)
    }

    /// Session path for a configuration: `paths.session_file` when set, otherwise [`Session::default_path`]
    #[must_use]
    pub fn path_for(config: &Config) -> PathBuf {
        if config.paths.session_file.is_empty() {
            Self::default_path()
        } else {
            PathBuf::from(&config.paths.session_file)
        }
    }

    /// Parse a session from TOML
    ///
    /// # Errors
    /// Returns an error if the TOML does not match the session schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut session: Self = toml::from_str(toml_str)?;
        if session.terms.is_empty() {
            session.terms = default_terms();
        }
        Ok(session)
    }

    /// Load a session, falling back to an empty one when the file does not exist
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read session {}: {e}", path.display()))?;
        Self::from_toml(&content)
            .map_err(|e| format!("Failed to parse session {}: {e}", path.display()))
    }

    /// Save the session, creating parent directories as needed
    ///
    /// # Errors
    /// Returns an error if the session cannot be serialized or written
    pub fn save_to(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(path, toml_str)?;
        Ok(())
    }

    /// Delete the persisted session
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be removed
    pub fn reset(path: &Path) -> Result<(), std::io::Error> {
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Capture engine inputs as a fresh session
    #[must_use]
    pub fn capture(past: &PastRecord, strategy: &Strategy, goal: Option<Goal>) -> Self {
        let mut session = Self::default();
        session.capture_into(past, strategy, goal);
        session
    }

    /// Record engine inputs in this session.
    ///
    /// Only the mode the record belongs to is overwritten; rows kept for the
    /// other mode survive so switching back restores them.
    pub fn capture_into(&mut self, past: &PastRecord, strategy: &Strategy, goal: Option<Goal>) {
        self.strategy = strategy.kind();
        self.future_credits = format_value(strategy.credits());
        self.target = format_value(goal.map(|g| g.target_average));
        match past {
            PastRecord::Itemized(entries) => {
                self.mode = InputMode::Detailed;
                self.terms = entries
                    .iter()
                    .map(|entry| TermRow {
                        average: format_value(entry.average),
                        credits: format_value(entry.credits),
                    })
                    .collect();
                if self.terms.is_empty() {
                    self.terms = default_terms();
                }
            }
            PastRecord::Aggregate(pair) => {
                self.mode = InputMode::Quick;
                self.quick = QuickRow {
                    average: format_value(pair.average),
                    credits: format_value(pair.credits),
                };
            }
        }
    }

    /// The past record for the active mode
    #[must_use]
    pub fn to_past_record(&self) -> PastRecord {
        match self.mode {
            InputMode::Detailed => PastRecord::Itemized(
                self.terms
                    .iter()
                    .map(|row| parse_entry(&row.average, &row.credits))
                    .collect(),
            ),
            InputMode::Quick => PastRecord::Aggregate(AggregateRecord {
                average: parse_number(&self.quick.average),
                credits: parse_credits(&self.quick.credits),
            }),
        }
    }

    /// The strategy with its parsed credit value
    #[must_use]
    pub fn to_strategy(&self) -> Strategy {
        Strategy::from_kind(self.strategy, parse_number(&self.future_credits))
    }

    /// The goal, when a target was entered
    #[must_use]
    pub fn to_goal(&self) -> Option<Goal> {
        parse_number(&self.target).map(Goal::new)
    }

    /// Append a term row
    pub fn add_term(&mut self, average: &str, credits: &str) {
        // Replace the placeholder row left by a fresh or cleared session.
        if self.terms.len() == 1 && self.terms[0] == TermRow::default() {
            self.terms.clear();
        }
        self.terms.push(TermRow::new(average, credits));
    }

    /// Remove a term row by its zero-based index, keeping at least one (empty) row
    ///
    /// # Errors
    /// Returns an error if the index is out of range
    pub fn remove_term(&mut self, index: usize) -> Result<TermRow, String> {
        if index >= self.terms.len() {
            return Err(format!(
                "No term at index {index} ({} term row(s))",
                self.terms.len()
            ));
        }
        let removed = self.terms.remove(index);
        if self.terms.is_empty() {
            self.terms = default_terms();
        }
        Ok(removed)
    }

    /// Get a scalar session value by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "mode" => Some(self.mode.to_string()),
            "strategy" => Some(self.strategy.to_string()),
            "future_credits" => Some(self.future_credits.clone()),
            "target" => Some(self.target.clone()),
            "cgpa" => Some(self.quick.average.clone()),
            "credits" => Some(self.quick.credits.clone()),
            _ => None,
        }
    }

    /// Set a scalar session value by key
    ///
    /// Numeric fields are stored as typed; they are parsed when projecting.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or an enumerated value is invalid
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        let value = value.trim();
        match key {
            "mode" => self.mode = value.parse()?,
            "strategy" => self.strategy = value.parse()?,
            "future_credits" => self.future_credits = value.to_string(),
            "target" => self.target = value.to_string(),
            "cgpa" => self.quick.average = value.to_string(),
            "credits" => self.quick.credits = value.to_string(),
            _ => return Err(format!("Unknown session key: '{key}'")),
        }
        Ok(())
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "mode = \"{}\"", self.mode)?;
        writeln!(f, "strategy = \"{}\" ({})", self.strategy, self.strategy.label())?;
        writeln!(f, "future_credits = \"{}\"", self.future_credits)?;
        writeln!(f, "target = \"{}\"", self.target)?;

        writeln!(f, "\n[quick]")?;
        writeln!(f, "  cgpa = \"{}\"", self.quick.average)?;
        writeln!(f, "  credits = \"{}\"", self.quick.credits)?;

        writeln!(f, "\n[terms]")?;
        for (idx, row) in self.terms.iter().enumerate() {
            writeln!(
                f,
                "  {idx}: average = \"{}\", credits = \"{}\"",
                row.average, row.credits
            )?;
        }
        Ok(())
    }
}
