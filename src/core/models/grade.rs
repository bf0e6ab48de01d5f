//! Past grade record models

use serde::{Deserialize, Serialize};

/// One past academic term.
///
/// Either field may be absent while the student is still filling the row in;
/// the aggregator skips such rows instead of rejecting the whole record.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GradeEntry {
    /// Term average on the grading scale (e.g. `8.5` on a 10-point scale)
    pub average: Option<f64>,
    /// Credits the term carried
    pub credits: Option<f64>,
}

impl GradeEntry {
    /// Create a fully entered term
    #[must_use]
    pub const fn new(average: f64, credits: f64) -> Self {
        Self {
            average: Some(average),
            credits: Some(credits),
        }
    }

    /// Create a term from possibly missing fields
    #[must_use]
    pub const fn partial(average: Option<f64>, credits: Option<f64>) -> Self {
        Self { average, credits }
    }

    /// Both fields present, finite, and credits non-negative.
    ///
    /// # Returns
    /// `Some((average, credits))` when the row can take part in a calculation
    #[must_use]
    pub fn usable(&self) -> Option<(f64, f64)> {
        match (self.average, self.credits) {
            (Some(average), Some(credits))
                if average.is_finite() && credits.is_finite() && credits >= 0.0 =>
            {
                Some((average, credits))
            }
            _ => None,
        }
    }
}

/// An already-summarized history: one cumulative average and its credit base.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AggregateRecord {
    /// Cumulative average so far
    pub average: Option<f64>,
    /// Credits behind that average
    pub credits: Option<f64>,
}

impl AggregateRecord {
    /// Create a fully entered aggregate record
    #[must_use]
    pub const fn new(average: f64, credits: f64) -> Self {
        Self {
            average: Some(average),
            credits: Some(credits),
        }
    }

    /// Same sanity rule as [`GradeEntry::usable`].
    #[must_use]
    pub fn usable(&self) -> Option<(f64, f64)> {
        GradeEntry::partial(self.average, self.credits).usable()
    }
}

/// The past record in exactly one of its two input modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PastRecord {
    /// Term-by-term entries
    Itemized(Vec<GradeEntry>),
    /// A single pre-aggregated pair
    Aggregate(AggregateRecord),
}

impl PastRecord {
    /// Name of the input mode, as stored in a session
    #[must_use]
    pub const fn mode_name(&self) -> &'static str {
        match self {
            Self::Itemized(_) => "detailed",
            Self::Aggregate(_) => "quick",
        }
    }
}

/// Aggregated past totals fed into the projector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PastTotals {
    /// Sum of `average * credits` over every usable term
    pub total_points: f64,
    /// Sum of credits over every usable term
    pub total_credits: f64,
}
