use growth_projector::models::Currency;

use crate::ui::widgets::panel::{Panel, PanelStyle};

pub fn render_version(version: &str, supports_color: bool, supports_unicode: bool) -> String {
    let mut p = Panel::with_style(PanelStyle::Info);
    p.add_line(format!("growth v{}", version));
    p.add_line("Rate model: annual effective, compounded monthly");
    p.add_empty();
    p.add_line("Currencies:");
    for currency in Currency::ALL {
        p.add_line(format!("  - {:<4} {}", currency.code(), currency.locale()));
    }
    p.render(supports_color, supports_unicode)
}
