//! CLI command handlers
//!
//! Each subcommand is implemented in its own module.

pub mod classify;
pub mod config;
pub mod feedback;
pub mod helpers;
pub mod reference;
pub mod review;
pub mod track;
