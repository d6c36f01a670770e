//! Terminal rendering of chart specifications
//!
//! The renderer acts as a canvas: `create` draws a spec into a frame,
//! `destroy` drops the frame, and `frames` yields whatever is currently live
//! in creation order. Commands print the live frames after each recompute.

use std::collections::BTreeMap;

use growth_projector::chart::{ChartKind, ChartSpec};
use growth_projector::ChartRenderer;

use crate::ui::primitives::border::{bar_glyph, BarCell};
use crate::ui::primitives::text::{dim, paint};
use crate::ui::theme;
use crate::ui::widgets::bar::{split_bar, value_bar};
use crate::ui::widgets::panel::visible_width;

const MIN_BAR_WIDTH: usize = 10;
const MAX_BAR_WIDTH: usize = 48;

#[derive(Debug)]
pub struct TerminalChartRenderer {
    color: bool,
    unicode: bool,
    bar_width: usize,
    next_id: u64,
    frames: BTreeMap<u64, String>,
}

impl TerminalChartRenderer {
    pub fn new(color: bool, unicode: bool, terminal_width: u16) -> Self {
        let bar_width = (terminal_width as usize / 2).clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH);
        Self {
            color,
            unicode,
            bar_width,
            next_id: 0,
            frames: BTreeMap::new(),
        }
    }

    /// Live frames, oldest first
    pub fn frames(&self) -> impl Iterator<Item = &str> {
        self.frames.values().map(String::as_str)
    }

    fn draw(&self, spec: &ChartSpec) -> String {
        match spec.kind {
            ChartKind::Doughnut => self.draw_proportion(spec),
            ChartKind::Line => self.draw_series(spec),
        }
    }

    /// Split bar plus a legend line per segment
    fn draw_proportion(&self, spec: &ChartSpec) -> String {
        let Some(dataset) = spec.data.datasets.first() else {
            return String::new();
        };
        let principal = dataset.data.first().copied().unwrap_or(0.0);
        let growth = dataset.data.get(1).copied().unwrap_or(0.0);
        let total = principal + growth;
        let share = if total > 0.0 { growth / total } else { 0.0 };

        let colors = (theme::colors::PRINCIPAL, theme::colors::GROWTH);
        let mut out = split_bar(share, self.bar_width, colors, self.color, self.unicode);
        out.push('\n');

        for (i, (value, color)) in [(principal, colors.0), (growth, colors.1)].iter().enumerate() {
            let text = spec
                .tooltip_text(i)
                .unwrap_or_else(|| spec.format_value(*value));
            let pct = if total > 0.0 { value / total * 100.0 } else { 0.0 };
            let cell = if i == 0 { BarCell::Full } else { BarCell::Medium };
            let marker = paint(bar_glyph(cell, self.unicode), *color, self.color);
            out.push_str(&format!(
                "{} {} {}\n",
                marker,
                text,
                dim(&format!("({:.1}%)", pct), self.color),
            ));
        }
        out
    }

    /// One row per sample: label, formatted value, value bar
    fn draw_series(&self, spec: &ChartSpec) -> String {
        let Some(dataset) = spec.data.datasets.first() else {
            return String::new();
        };
        let max = dataset.data.iter().copied().fold(0.0_f64, f64::max);

        let formatted: Vec<String> = dataset.data.iter().map(|v| spec.format_value(*v)).collect();
        let value_width = formatted.iter().map(|s| visible_width(s)).max().unwrap_or(0);
        let label_width = spec
            .data
            .labels
            .iter()
            .map(|l| visible_width(l))
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        if let Some(title) = &dataset.label {
            out.push_str(title);
            out.push('\n');
        }
        for (i, value) in dataset.data.iter().enumerate() {
            let label = spec.data.labels.get(i).map(String::as_str).unwrap_or("");
            let text = &formatted[i];
            out.push_str(&format!(
                "{}{}  {}{}  {}\n",
                label,
                " ".repeat(label_width - visible_width(label)),
                " ".repeat(value_width - visible_width(text)),
                text,
                value_bar(
                    *value,
                    max,
                    self.bar_width,
                    theme::colors::PRINCIPAL,
                    self.color,
                    self.unicode
                ),
            ));
        }
        out
    }
}

impl ChartRenderer for TerminalChartRenderer {
    type Handle = u64;

    fn create(&mut self, spec: &ChartSpec) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let frame = self.draw(spec);
        self.frames.insert(id, frame);
        id
    }

    fn destroy(&mut self, handle: u64) {
        self.frames.remove(&handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use growth_projector::chart::ChartSpecBuilder;
    use growth_projector::models::{Breakdown, Currency, DurationUnit, Projection, ProjectionInput};
    use growth_projector::projector::project_in_year;

    fn projection() -> Projection {
        let input = ProjectionInput::new(10_000.0, 2.0, DurationUnit::Years, 12.0, Currency::Usd);
        let result = project_in_year(&input, 2026);
        let breakdown = Breakdown::new(&input, &result);
        Projection {
            input,
            result,
            breakdown,
        }
    }

    #[test]
    fn destroy_removes_frame() {
        let mut r = TerminalChartRenderer::new(false, false, 80);
        let spec = ChartSpecBuilder::default().line(&projection());
        let a = r.create(&spec);
        let _b = r.create(&spec);
        r.destroy(a);
        assert_eq!(r.frames().count(), 1);
    }

    #[test]
    fn series_rows_are_aligned() {
        let mut r = TerminalChartRenderer::new(false, false, 40);
        let spec = ChartSpecBuilder::default().line(&projection());
        r.create(&spec);
        let frame = r.frames().next().unwrap().to_string();

        let rows: Vec<&str> = frame.lines().skip(1).collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with("2026  "));
        assert!(rows[2].starts_with("2027  $12,544  "));
        let bar_cols: Vec<usize> = rows.iter().map(|r| r.find('#').unwrap()).collect();
        assert!(bar_cols.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn proportion_lists_both_segments() {
        let mut r = TerminalChartRenderer::new(false, false, 40);
        let builder = ChartSpecBuilder::new(
            Default::default(),
            growth_projector::ChartLabels {
                principal: "Principal".to_string(),
                growth: "Growth".to_string(),
                ..Default::default()
            },
        );
        r.create(&builder.donut(&projection()));
        let frame = r.frames().next().unwrap().to_string();

        assert!(frame.contains("Principal: $10,000"));
        assert!(frame.contains("Growth: $2,544"));
    }
}
