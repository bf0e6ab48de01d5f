//! Future-credit strategy and goal models

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the future credit horizon is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Strategy {
    /// Project through the immediately following term only.
    NextTerm {
        /// Credits the next term carries
        future_credits: Option<f64>,
    },
    /// Project through the end of the program.
    ToCompletion {
        /// Credit base at program completion (past credits included)
        total_credits: Option<f64>,
    },
}

/// Which credit horizon a strategy uses, without its credit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StrategyKind {
    /// See [`Strategy::NextTerm`]
    #[default]
    #[serde(rename = "next")]
    NextTerm,
    /// See [`Strategy::ToCompletion`]
    #[serde(rename = "degree")]
    ToCompletion,
}

impl Strategy {
    /// Next-term strategy with an entered credit value
    #[must_use]
    pub const fn next_term(future_credits: f64) -> Self {
        Self::NextTerm {
            future_credits: Some(future_credits),
        }
    }

    /// Completion strategy with an entered credit value
    #[must_use]
    pub const fn to_completion(total_credits: f64) -> Self {
        Self::ToCompletion {
            total_credits: Some(total_credits),
        }
    }

    /// Build a strategy of the given kind from a possibly missing credit value
    #[must_use]
    pub const fn from_kind(kind: StrategyKind, credits: Option<f64>) -> Self {
        match kind {
            StrategyKind::NextTerm => Self::NextTerm {
                future_credits: credits,
            },
            StrategyKind::ToCompletion => Self::ToCompletion {
                total_credits: credits,
            },
        }
    }

    /// Which variant this is
    #[must_use]
    pub const fn kind(&self) -> StrategyKind {
        match self {
            Self::NextTerm { .. } => StrategyKind::NextTerm,
            Self::ToCompletion { .. } => StrategyKind::ToCompletion,
        }
    }

    /// The raw credit value, if entered and finite
    #[must_use]
    pub fn credits(&self) -> Option<f64> {
        let value = match self {
            Self::NextTerm { future_credits } => *future_credits,
            Self::ToCompletion { total_credits } => *total_credits,
        };
        value.filter(|v| v.is_finite())
    }
}

impl StrategyKind {
    /// Name used in sessions and on the command line
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NextTerm => "next",
            Self::ToCompletion => "degree",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::NextTerm => "Next term only",
            Self::ToCompletion => "Rest of program",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "next" | "next-term" | "next_term" => Ok(Self::NextTerm),
            "degree" | "completion" | "to-completion" | "to_completion" => Ok(Self::ToCompletion),
            _ => Err(format!("Unknown strategy: '{s}' (expected 'next' or 'degree')")),
        }
    }
}

/// The average the student wants to reach at the end of the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Target cumulative average
    pub target_average: f64,
}

impl Goal {
    /// Create a goal
    #[must_use]
    pub const fn new(target_average: f64) -> Self {
        Self { target_average }
    }
}
