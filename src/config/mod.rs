//! Configuration module
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (GROWTH_*)
//! 3. Explicit `--config` file, or `./growth.toml`
//! 4. User config (`<config dir>/growth/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE};
pub use types::{ColorMode, Config, DefaultsConfig, LabelsConfig, OutputConfig};
