//! growth-projector - compound-interest investment projections
//!
//! Turns calculator fields (starting capital, duration, annual rate and
//! currency) into a year-by-year value series, a principal/growth split,
//! chart specifications for a Chart.js-style renderer, and a formatted
//! summary line.

pub mod calculator;
pub mod chart;
pub mod config;
pub mod error;
pub mod format;
pub mod input;
pub mod models;
pub mod presentation;
pub mod projector;

// Re-exports for convenience
pub use calculator::{Calculator, ChartRenderer, ChartSlot, RecordingRenderer, ResultSink, Trigger};
pub use chart::{ChartLabels, ChartSet, ChartSpec, ChartSpecBuilder, ChartTheme};
pub use config::Config;
pub use error::{ProjectorError, ProjectorResult};
pub use format::format_currency;
pub use input::{FieldValues, InputNormalizer};
pub use models::{Breakdown, Currency, DurationUnit, Projection, ProjectionInput, ProjectionResult, SeriesPoint};
pub use projector::{monthly_equivalent_rate, project, project_in_year};
