//! The calculator component
//!
//! Wires field values through normalization and projection, then replaces
//! the two charts and the summary text. Chart instances live in
//! [`ChartSlot`]s: the previous instance is always destroyed before its
//! replacement is created, so at most one instance per slot is alive.

use std::fmt;

use crate::chart::{ChartKind, ChartSet, ChartSpec, ChartSpecBuilder};
use crate::config::Config;
use crate::format::format_currency;
use crate::input::{FieldValues, InputNormalizer};
use crate::models::{Breakdown, Projection, ProjectionInput};
use crate::projector::{project, project_in_year};

/// Prefix of the summary line when none is configured
pub const DEFAULT_SUMMARY_PREFIX: &str = "השקעה זו תהיה שווה: ";

/// What caused a recompute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// First render
    InitialLoad,
    /// A field is being edited
    Input,
    /// A field's committed value changed
    Change,
    /// Explicit calculate action
    Submit,
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Trigger::InitialLoad => "initial-load",
            Trigger::Input => "input",
            Trigger::Change => "change",
            Trigger::Submit => "submit",
        };
        f.write_str(name)
    }
}

/// Something that can draw a chart and later tear it down
pub trait ChartRenderer {
    type Handle;

    fn create(&mut self, spec: &ChartSpec) -> Self::Handle;
    fn destroy(&mut self, handle: Self::Handle);
}

/// Owner of at most one live chart instance
#[derive(Debug)]
pub struct ChartSlot<H> {
    name: &'static str,
    handle: Option<H>,
}

impl<H> ChartSlot<H> {
    pub fn new(name: &'static str) -> Self {
        Self { name, handle: None }
    }

    pub fn is_occupied(&self) -> bool {
        self.handle.is_some()
    }

    /// Destroy the current instance (if any), then create one from `spec`.
    pub fn replace<R>(&mut self, renderer: &mut R, spec: &ChartSpec)
    where
        R: ChartRenderer<Handle = H>,
    {
        self.clear(renderer);
        tracing::debug!(slot = self.name, "creating chart");
        self.handle = Some(renderer.create(spec));
    }

    pub fn clear<R>(&mut self, renderer: &mut R)
    where
        R: ChartRenderer<Handle = H>,
    {
        if let Some(old) = self.handle.take() {
            tracing::debug!(slot = self.name, "destroying chart");
            renderer.destroy(old);
        }
    }
}

/// Target of the formatted summary line
pub trait ResultSink {
    fn write_summary(&mut self, text: &str);
}

impl ResultSink for String {
    fn write_summary(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

/// Renderer that keeps every spec it was asked to draw.
///
/// Useful for exporting the latest charts and for tests.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    next_id: usize,
    live: Vec<usize>,
    pub created: Vec<ChartSpec>,
    pub destroyed: Vec<usize>,
}

impl RecordingRenderer {
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Most recently created spec of `kind`
    pub fn latest(&self, kind: ChartKind) -> Option<&ChartSpec> {
        self.created.iter().rev().find(|spec| spec.kind == kind)
    }
}

impl ChartRenderer for RecordingRenderer {
    type Handle = usize;

    fn create(&mut self, spec: &ChartSpec) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        self.live.push(id);
        self.created.push(spec.clone());
        id
    }

    fn destroy(&mut self, handle: usize) {
        self.live.retain(|id| *id != handle);
        self.destroyed.push(handle);
    }
}

/// Recomputes projections and owns the rendered output
pub struct Calculator<R: ChartRenderer, S: ResultSink> {
    normalizer: InputNormalizer,
    builder: ChartSpecBuilder,
    summary_prefix: String,
    start_year: Option<i32>,
    renderer: R,
    sink: S,
    donut: ChartSlot<R::Handle>,
    line: ChartSlot<R::Handle>,
}

impl<R: ChartRenderer, S: ResultSink> Calculator<R, S> {
    pub fn new(normalizer: InputNormalizer, builder: ChartSpecBuilder, renderer: R, sink: S) -> Self {
        Self {
            normalizer,
            builder,
            summary_prefix: DEFAULT_SUMMARY_PREFIX.to_string(),
            start_year: None,
            renderer,
            sink,
            donut: ChartSlot::new("donut"),
            line: ChartSlot::new("line"),
        }
    }

    /// Build a calculator using the configured defaults, labels and theme
    pub fn from_config(config: &Config, renderer: R, sink: S) -> Self {
        let builder = ChartSpecBuilder::new(config.chart.clone(), config.labels.chart_labels())
            .reduced_motion(config.output.reduced_motion);
        Self::new(
            InputNormalizer::new(config.defaults.currency),
            builder,
            renderer,
            sink,
        )
        .with_summary_prefix(config.labels.summary_prefix.clone())
    }

    pub fn with_summary_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.summary_prefix = prefix.into();
        self
    }

    /// Pin the first series label instead of reading the clock
    pub fn with_start_year(mut self, year: i32) -> Self {
        self.start_year = Some(year);
        self
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn charts(&self) -> &ChartSpecBuilder {
        &self.builder
    }

    /// Normalize `fields` and recompute everything
    pub fn recompute(&mut self, trigger: Trigger, fields: &FieldValues) -> Projection {
        let input = self.normalizer.normalize(fields);
        self.recompute_input(trigger, input)
    }

    /// Recompute from an already normalized input
    pub fn recompute_input(&mut self, trigger: Trigger, input: ProjectionInput) -> Projection {
        tracing::info!(%trigger, "recomputing projection");

        let result = match self.start_year {
            Some(year) => project_in_year(&input, year),
            None => project(&input),
        };
        let breakdown = Breakdown::new(&input, &result);
        let projection = Projection {
            input,
            result,
            breakdown,
        };

        let ChartSet { donut, line } = self.builder.build(&projection);
        self.donut.replace(&mut self.renderer, &donut);
        self.line.replace(&mut self.renderer, &line);

        let summary = self.summary(&projection);
        self.sink.write_summary(&summary);

        projection
    }

    /// Summary line for a projection
    pub fn summary(&self, projection: &Projection) -> String {
        format!(
            "{}{}",
            self.summary_prefix,
            format_currency(projection.result.final_value, projection.input.currency)
        )
    }

    /// Destroy any live charts and hand back the renderer and sink
    pub fn finish(mut self) -> (R, S) {
        self.donut.clear(&mut self.renderer);
        self.line.clear(&mut self.renderer);
        (self.renderer, self.sink)
    }
}
