//! Difficulty classification ladder
//!
//! The ladder is an ordered list of `(rule, tier)` pairs. The first rule that
//! matches decides the tier, so the tie-break order is exactly the order of
//! [`LADDER`].

use crate::core::models::DifficultyTier;
use crate::core::numeric::round4;
use crate::core::scale::GradingScale;

/// A single predicate on the ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Required average exceeds the scale maximum (strictly)
    AboveScaleMax,
    /// Required average does not exceed the current average
    AtOrBelowCurrent,
    /// Gap to the current average is below the easy-reach threshold
    GapBelowEasyReach,
    /// Gap to the current average is below the moderate threshold
    GapBelowModerate,
    /// Matches everything
    Otherwise,
}

/// Rules in evaluation order.
pub const LADDER: [(Rule, DifficultyTier); 5] = [
    (Rule::AboveScaleMax, DifficultyTier::Impossible),
    (Rule::AtOrBelowCurrent, DifficultyTier::Comfortable),
    (Rule::GapBelowEasyReach, DifficultyTier::EasyReach),
    (Rule::GapBelowModerate, DifficultyTier::Moderate),
    (Rule::Otherwise, DifficultyTier::HardGrind),
];

impl Rule {
    /// Evaluate the rule for a required and current average.
    #[must_use]
    pub fn matches(self, required: f64, current: f64, scale: &GradingScale) -> bool {
        let gap = round4(required - current);
        match self {
            Self::AboveScaleMax => required > scale.max,
            Self::AtOrBelowCurrent => required <= current,
            Self::GapBelowEasyReach => gap < scale.easy_reach_gap,
            Self::GapBelowModerate => gap < scale.moderate_gap,
            Self::Otherwise => true,
        }
    }
}

/// Classify a goal by walking [`LADDER`].
#[must_use]
pub fn classify(required: f64, current: f64, scale: &GradingScale) -> DifficultyTier {
    LADDER
        .iter()
        .find(|(rule, _)| rule.matches(required, current, scale))
        .map_or(DifficultyTier::HardGrind, |(_, tier)| *tier)
}
