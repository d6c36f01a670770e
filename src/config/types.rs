//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::calculator::DEFAULT_SUMMARY_PREFIX;
use crate::chart::{ChartLabels, ChartTheme};
use crate::error::ProjectorResult;
use crate::input::FieldValues;
use crate::models::{Currency, DurationUnit};

use super::loader::{self, ConfigWarning, LoadedConfig};

/// Field values used when a flag or prompt is left empty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub amount: f64,
    pub duration: f64,
    pub unit: DurationUnit,
    pub rate: f64,
    pub currency: Currency,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            amount: 100_000.0,
            duration: 10.0,
            unit: DurationUnit::Years,
            rate: 8.0,
            currency: Currency::Ils,
        }
    }
}

impl DefaultsConfig {
    /// The defaults as raw field text
    pub fn fields(&self) -> FieldValues {
        FieldValues::new(
            self.amount.to_string(),
            self.duration.to_string(),
            self.unit.as_str(),
            self.rate.to_string(),
            self.currency.code(),
        )
    }
}

/// User-visible text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelsConfig {
    pub principal: String,
    pub growth: String,
    pub series: String,
    pub x_axis: String,
    pub y_axis: String,
    pub summary_prefix: String,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        let chart = ChartLabels::default();
        Self {
            principal: chart.principal,
            growth: chart.growth,
            series: chart.series,
            x_axis: chart.x_axis,
            y_axis: chart.y_axis,
            summary_prefix: DEFAULT_SUMMARY_PREFIX.to_string(),
        }
    }
}

impl LabelsConfig {
    pub fn chart_labels(&self) -> ChartLabels {
        ChartLabels {
            principal: self.principal.clone(),
            growth: self.growth.clone(),
            series: self.series.clone(),
            x_axis: self.x_axis.clone(),
            y_axis: self.y_axis.clone(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,

    /// Disable chart animations
    #[serde(default)]
    pub reduced_motion: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
            reduced_motion: false,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub labels: LabelsConfig,

    #[serde(default)]
    pub chart: ChartTheme,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ProjectorResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ProjectorResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve the config hierarchy for `project_root`, honoring an explicit path
    pub fn load_layered(explicit: Option<&Path>, project_root: &Path) -> ProjectorResult<LoadedConfig> {
        loader::load_layered(explicit, project_root)
    }

    /// Apply environment variable overrides (GROWTH_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
