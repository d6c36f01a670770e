use growth_projector::config::{ConfigWarning, LoadedConfig};

use crate::ui::primitives::text::Icon;

/// Print unknown-key warnings for the loaded config file to stderr
pub fn print_config_warnings(loaded: &LoadedConfig, unicode: bool) {
    let Some(path) = &loaded.source else {
        return;
    };
    for w in &loaded.warnings {
        eprint!("{}", format_warning(w, &path.display().to_string(), unicode));
    }
}

fn format_warning(w: &ConfigWarning, path: &str, unicode: bool) -> String {
    let icon = Icon::Warning.render(unicode);
    let mut out = match w.line {
        Some(line) => format!("{} Unknown config key '{}' in {}:{}\n", icon, w.key, path, line),
        None => format!("{} Unknown config key '{}' in {}\n", icon, w.key, path),
    };
    if let Some(suggestion) = &w.suggestion {
        out.push_str(&format!("   Did you mean '{}'?\n", suggestion));
    }
    out
}
