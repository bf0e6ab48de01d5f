//! Shared library for `grade_projector`
//! Contains the projection engine plus the configuration, session and logging
//! layers the CLI builds on.

pub mod config;
pub mod core;
pub mod logger;

pub use crate::core::get_version;
