//! Charts command handler

use anyhow::{Context, Result};

use growth_projector::chart::{ChartKind, ChartSet};
use growth_projector::presentation::InputArgs;
use growth_projector::{Calculator, RecordingRenderer, Trigger};

use super::Session;

pub fn cmd_charts(session: &Session, input: &InputArgs, pretty: bool) -> Result<()> {
    let config = session.config_for(input);
    let fields = input.fields(&config.defaults);

    let mut calc = Calculator::from_config(&config, RecordingRenderer::default(), String::new());
    calc.recompute(Trigger::InitialLoad, &fields);

    let renderer = calc.renderer();
    let charts = ChartSet {
        donut: renderer
            .latest(ChartKind::Doughnut)
            .cloned()
            .context("doughnut chart was not rendered")?,
        line: renderer
            .latest(ChartKind::Line)
            .cloned()
            .context("line chart was not rendered")?,
    };

    if session.ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "charts",
            "summary": calc.sink(),
            "charts": charts,
        }))?;
        return Ok(());
    }

    println!("{}", charts.to_json(pretty)?);
    Ok(())
}
