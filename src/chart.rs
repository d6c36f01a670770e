//! Chart specifications for the charting collaborator
//!
//! Two charts are produced per projection: a doughnut over principal vs.
//! growth, and a line over the sampled series. The serialized shape follows
//! the Chart.js configuration object so a web page can hand it straight to
//! `new Chart(ctx, spec)`. Value formatting callbacks cannot travel as JSON,
//! so tick and tooltip entries carry a `format: "currency"` hint plus the
//! currency code instead.

use serde::{Deserialize, Serialize};

use crate::error::ProjectorResult;
use crate::format::format_currency;
use crate::models::{Currency, Projection};

/// Colors and motion settings shared by both charts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartTheme {
    pub principal_color: String,
    pub growth_color: String,
    pub line_fill: String,
    pub text_color: String,
    pub grid_color: String,
    pub tension: f64,
    pub donut_animation_ms: u32,
    pub line_animation_ms: u32,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            principal_color: "#bd8604".to_string(),
            growth_color: "#012b1a".to_string(),
            line_fill: "rgba(189,134,4,0.12)".to_string(),
            text_color: "#fefefe".to_string(),
            grid_color: "rgba(255,255,255,0.08)".to_string(),
            tension: 0.25,
            donut_animation_ms: 800,
            line_animation_ms: 900,
        }
    }
}

/// Visible text of both charts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartLabels {
    pub principal: String,
    pub growth: String,
    pub series: String,
    pub x_axis: String,
    pub y_axis: String,
}

impl Default for ChartLabels {
    fn default() -> Self {
        Self {
            principal: "סכום התחלתי".to_string(),
            growth: "ריבית מצטברת".to_string(),
            series: "ערך השקעה".to_string(),
            x_axis: "שנה".to_string(),
            y_axis: "שווי השקעה".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Doughnut,
    Line,
}

/// One color for the whole dataset, or one per data point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    One(String),
    PerPoint(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    pub background_color: ColorSpec,
    pub border_color: ColorSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// `false` disables animation entirely
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Animation {
    Off(bool),
    On(AnimationOptions),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animate_rotate: Option<bool>,
    pub duration: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorOnly {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticks {
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: AxisTitle,
    pub ticks: Ticks,
    pub grid: ColorOnly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    pub labels: ColorOnly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub format: String,
    /// Show `"{label}: {value}"` rather than the value alone
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub prefix_label: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plugins {
    pub legend: Legend,
    pub tooltip: Tooltip,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub animation: Animation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
    pub plugins: Plugins,
}

/// A complete chart configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
    /// Currency used for tick and tooltip values
    pub currency: Currency,
}

impl ChartSpec {
    /// Format a data value the way tooltips and ticks display it
    pub fn format_value(&self, value: f64) -> String {
        format_currency(value, self.currency)
    }

    /// Tooltip text for the `index`th point of the first dataset
    pub fn tooltip_text(&self, index: usize) -> Option<String> {
        let value = *self.data.datasets.first()?.data.get(index)?;
        let text = self.format_value(value);
        if self.options.plugins.tooltip.prefix_label {
            let label = self.data.labels.get(index)?;
            Some(format!("{}: {}", label, text))
        } else {
            Some(text)
        }
    }
}

/// Both charts for one projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSet {
    pub donut: ChartSpec,
    pub line: ChartSpec,
}

impl ChartSet {
    pub fn to_json(&self, pretty: bool) -> ProjectorResult<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

const CURRENCY_FORMAT: &str = "currency";

/// Builds chart specs from projections
#[derive(Debug, Clone, Default)]
pub struct ChartSpecBuilder {
    pub theme: ChartTheme,
    pub labels: ChartLabels,
    pub reduced_motion: bool,
}

impl ChartSpecBuilder {
    pub fn new(theme: ChartTheme, labels: ChartLabels) -> Self {
        Self {
            theme,
            labels,
            reduced_motion: false,
        }
    }

    pub fn reduced_motion(mut self, reduced: bool) -> Self {
        self.reduced_motion = reduced;
        self
    }

    pub fn build(&self, projection: &Projection) -> ChartSet {
        ChartSet {
            donut: self.donut(projection),
            line: self.line(projection),
        }
    }

    /// Proportion chart over principal and growth
    pub fn donut(&self, projection: &Projection) -> ChartSpec {
        let colors = vec![
            self.theme.principal_color.clone(),
            self.theme.growth_color.clone(),
        ];

        ChartSpec {
            kind: ChartKind::Doughnut,
            data: ChartData {
                labels: vec![self.labels.principal.clone(), self.labels.growth.clone()],
                datasets: vec![Dataset {
                    label: None,
                    data: vec![projection.breakdown.principal, projection.breakdown.growth],
                    background_color: ColorSpec::PerPoint(colors.clone()),
                    border_color: ColorSpec::PerPoint(colors),
                    border_width: Some(1),
                    hover_offset: Some(4),
                    fill: None,
                    tension: None,
                    point_radius: None,
                }],
            },
            options: ChartOptions {
                responsive: true,
                animation: self.animation(self.theme.donut_animation_ms, Some(true)),
                scales: None,
                plugins: Plugins {
                    legend: Legend {
                        position: Some("bottom".to_string()),
                        labels: self.text_color(),
                    },
                    tooltip: Tooltip {
                        format: CURRENCY_FORMAT.to_string(),
                        prefix_label: true,
                    },
                },
            },
            currency: projection.input.currency,
        }
    }

    /// Time-series chart over the sampled values
    pub fn line(&self, projection: &Projection) -> ChartSpec {
        ChartSpec {
            kind: ChartKind::Line,
            data: ChartData {
                labels: projection.result.labels(),
                datasets: vec![Dataset {
                    label: Some(self.labels.series.clone()),
                    data: projection.result.values(),
                    background_color: ColorSpec::One(self.theme.line_fill.clone()),
                    border_color: ColorSpec::One(self.theme.principal_color.clone()),
                    border_width: None,
                    hover_offset: None,
                    fill: Some(true),
                    tension: Some(self.theme.tension),
                    point_radius: Some(0),
                }],
            },
            options: ChartOptions {
                responsive: true,
                animation: self.animation(self.theme.line_animation_ms, None),
                scales: Some(Scales {
                    x: self.axis(&self.labels.x_axis, None),
                    y: self.axis(&self.labels.y_axis, Some(CURRENCY_FORMAT)),
                }),
                plugins: Plugins {
                    legend: Legend {
                        position: None,
                        labels: self.text_color(),
                    },
                    tooltip: Tooltip {
                        format: CURRENCY_FORMAT.to_string(),
                        prefix_label: false,
                    },
                },
            },
            currency: projection.input.currency,
        }
    }

    fn animation(&self, duration: u32, animate_rotate: Option<bool>) -> Animation {
        if self.reduced_motion {
            Animation::Off(false)
        } else {
            Animation::On(AnimationOptions {
                animate_rotate,
                duration,
            })
        }
    }

    fn text_color(&self) -> ColorOnly {
        ColorOnly {
            color: self.theme.text_color.clone(),
        }
    }

    fn axis(&self, title: &str, format: Option<&str>) -> Axis {
        Axis {
            title: AxisTitle {
                display: true,
                text: title.to_string(),
                color: self.theme.text_color.clone(),
            },
            ticks: Ticks {
                color: self.theme.text_color.clone(),
                format: format.map(str::to_string),
            },
            grid: ColorOnly {
                color: self.theme.grid_color.clone(),
            },
        }
    }
}
