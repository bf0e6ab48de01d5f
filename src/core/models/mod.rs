//! Data models for `grade_projector`

pub mod grade;
pub mod projection;
pub mod strategy;

pub use grade::{AggregateRecord, GradeEntry, PastRecord, PastTotals};
pub use projection::{DifficultyTier, ProjectionResult, ScenarioPoint};
pub use strategy::{Goal, Strategy, StrategyKind};
