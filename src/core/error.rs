//! Projection error types.
//!
//! Every failure the engine reports is an input-validation failure. None of
//! them is transient, and a failed call never yields a partial result.

use thiserror::Error;

/// Errors returned by [`aggregate`](crate::core::aggregator::aggregate) and
/// [`project`](crate::core::projector::project).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    /// No usable past credits: every term was incomplete or the credit total is zero.
    #[error("enter valid past grades")]
    InvalidPastRecord,

    /// The strategy's credit value was not entered or did not parse.
    #[error("enter future credit information")]
    InvalidFutureCredits,

    /// The strategy leaves no credits to earn.
    #[error("total credits must exceed past credits (total {total_credits}, past {past_credits})")]
    InvalidStrategyCredits {
        /// Credit base at the end of the strategy's horizon.
        total_credits: f64,
        /// Credits already earned.
        past_credits: f64,
    },
}

impl ProjectionError {
    /// Short, user-facing hint for the input field that needs attention.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidPastRecord => "past grades",
            Self::InvalidFutureCredits | Self::InvalidStrategyCredits { .. } => "future credits",
        }
    }
}
