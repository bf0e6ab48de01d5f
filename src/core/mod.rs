//! Projection engine and its supporting modules

pub mod aggregator;
pub mod difficulty;
pub mod error;
pub mod input;
pub mod models;
pub mod numeric;
pub mod projector;
pub mod report;
pub mod scale;
pub mod scenarios;
pub mod session;

pub use aggregator::aggregate;
pub use error::ProjectionError;
pub use projector::{project, Projector};
pub use scale::GradingScale;

/// Returns the current version of the `grade_projector` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
