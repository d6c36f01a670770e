use growth_projector::format::format_currency;
use growth_projector::models::Projection;

use crate::ui::primitives::text::{bold, Icon};
use crate::ui::widgets::panel::{Panel, PanelStyle};

/// Boxed summary: inputs as normalized, then the outcome
pub fn render_projection(
    projection: &Projection,
    summary: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let input = &projection.input;
    let currency = input.currency;
    // Nothing grew: zero capital or a zero rate
    let style = if projection.breakdown.growth > 0.0 {
        PanelStyle::Success
    } else {
        PanelStyle::Warning
    };

    let mut p = Panel::with_title(format!(
        "{} {}",
        Icon::Chart.render(supports_unicode),
        bold("Growth Projection", supports_color)
    ))
    .style(style);
    p.add_empty();
    p.add_field("Starting amount", format_currency(input.start_amount, currency));
    p.add_field(
        "Duration",
        format!("{} {}", trim_number(input.duration_value), input.duration_unit),
    );
    p.add_field(
        "Annual rate",
        format!("{}%", trim_number(input.annual_rate_percent)),
    );
    p.add_field("Currency", format!("{} ({})", currency, currency.locale()));
    p.add_empty();
    p.add_field(
        "Final value",
        bold(&format_currency(projection.result.final_value, currency), supports_color),
    );
    p.add_field(
        "Interest",
        format_currency(projection.result.total_interest, currency),
    );
    p.add_empty();
    p.add_line(summary);
    p.render(supports_color, supports_unicode)
}

/// `12` rather than `12.0`, but keep real fractions
fn trim_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
