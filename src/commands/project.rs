//! Project command handler

use anyhow::Result;

use growth_projector::presentation::{projection_event, InputArgs};
use growth_projector::projector::{monthly_equivalent_rate, nominal_monthly_rate};
use growth_projector::{Calculator, Trigger};

use super::Session;
use crate::ui::chart::TerminalChartRenderer;
use crate::ui::primitives::text::dim;
use crate::ui::views::projection::render_projection;

pub fn cmd_project(session: &Session, input: &InputArgs) -> Result<()> {
    let ui = &session.ui;
    let config = session.config_for(input);
    let fields = input.fields(&config.defaults);

    let renderer = TerminalChartRenderer::new(ui.color, ui.unicode, ui.caps.width);
    let mut calc = Calculator::from_config(&config, renderer, String::new());
    let projection = calc.recompute(Trigger::InitialLoad, &fields);

    if ui.json {
        crate::ui::json::emit(projection_event(&projection, calc.sink()))?;
        return Ok(());
    }

    print!(
        "{}",
        render_projection(&projection, calc.sink(), ui.color, ui.unicode)
    );
    for frame in calc.renderer().frames() {
        println!();
        print!("{}", frame);
    }

    if ui.verbose > 0 {
        let rate = projection.input.annual_rate_percent;
        println!();
        println!(
            "{}",
            dim(
                &format!(
                    "Monthly rate {:.4}% (annual effective); a nominal APR reading would use {:.4}%",
                    monthly_equivalent_rate(rate) * 100.0,
                    nominal_monthly_rate(rate) * 100.0
                ),
                ui.color
            )
        );
    }

    Ok(())
}
