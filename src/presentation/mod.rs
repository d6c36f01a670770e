//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - JSON output payloads

pub mod cli;
pub mod output;

pub use cli::{Cli, ColorWhen, Commands, InputArgs};
pub use output::projection_event;
