//! What the attached terminal can show
//!
//! Detection reads the environment through a lookup closure so tests can
//! feed a fixed map instead of the process environment.

use is_terminal::IsTerminal;

/// Column count assumed when the terminal size is unknown
const FALLBACK_COLUMNS: u16 = 80;

/// Variables whose presence marks a CI runner
const CI_MARKERS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "BUILDKITE",
    "CIRCLECI",
    "JENKINS_HOME",
    "TEAMCITY_VERSION",
];

/// Locale variables in precedence order; the first non-empty one wins
const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    /// stdout is attached to a terminal
    pub is_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
    /// Columns available for bars and panels
    pub width: u16,
}

impl TerminalCapabilities {
    /// Inspect the current process's stdout and environment
    pub fn detect() -> Self {
        let columns = crossterm::terminal::size().ok().map(|(cols, _rows)| cols);
        Self::from_env(
            |name| std::env::var(name).ok(),
            std::io::stdout().is_terminal(),
            columns,
        )
    }

    fn from_env(var: impl Fn(&str) -> Option<String>, is_tty: bool, columns: Option<u16>) -> Self {
        let dumb = var("TERM").is_some_and(|term| term.eq_ignore_ascii_case("dumb"));

        Self {
            is_tty,
            supports_color: is_tty && !dumb && var("NO_COLOR").is_none(),
            supports_unicode: !dumb && locale_is_utf8(&var),
            is_ci: CI_MARKERS.iter().any(|name| var(name).is_some()),
            width: columns.filter(|cols| *cols > 0).unwrap_or(FALLBACK_COLUMNS),
        }
    }
}

/// Unset locale means a modern UTF-8 default; an explicit one must say so
fn locale_is_utf8(var: &impl Fn(&str) -> Option<String>) -> bool {
    let Some(locale) = LOCALE_VARS
        .iter()
        .filter_map(|name| var(name))
        .find(|value| !value.is_empty())
    else {
        return true;
    };

    let locale = locale.to_ascii_lowercase();
    locale.contains("utf-8") || locale.contains("utf8")
}
