use anyhow::Result;

use growth_projector::models::Currency;

use super::Session;

pub fn cmd_version(session: &Session) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    let ui = &session.ui;

    if ui.json {
        let currencies: Vec<_> = Currency::ALL
            .iter()
            .map(|c| serde_json::json!({ "code": c.code(), "locale": c.locale() }))
            .collect();
        crate::ui::json::emit(serde_json::json!({
            "event": "version",
            "command": "version",
            "version": version,
            "rate_model": "annual-effective",
            "currencies": currencies,
        }))?;
        return Ok(());
    }

    print!(
        "{}",
        crate::ui::views::version::render_version(version, ui.color, ui.unicode)
    );
    Ok(())
}
