use crossterm::style::{Color, Stylize};

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Error,
    Warning,
    Chart,
    Arrow,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        use theme::{icons as u, icons_ascii as a};

        let (unicode, ascii) = match self {
            Icon::Error => (u::ERROR, a::ERROR),
            Icon::Warning => (u::WARNING, a::WARNING),
            Icon::Chart => (u::CHART, a::CHART),
            Icon::Arrow => (u::ARROW, a::ARROW),
        };
        if supports_unicode {
            unicode
        } else {
            ascii
        }
    }
}

/// Wrap `text` in `color` when color output is enabled
pub fn paint(text: &str, color: Color, supports_color: bool) -> String {
    if supports_color {
        format!("{}", text.with(color))
    } else {
        text.to_string()
    }
}

pub fn bold(text: &str, supports_color: bool) -> String {
    if supports_color {
        format!("{}", text.bold())
    } else {
        text.to_string()
    }
}

pub fn dim(text: &str, supports_color: bool) -> String {
    paint(text, theme::colors::DIM, supports_color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_without_color_returns_plain_text() {
        assert_eq!(paint("ok", theme::colors::SUCCESS, false), "ok");
    }

    #[test]
    fn paint_with_color_includes_ansi_escape() {
        assert!(paint("no", theme::colors::WARNING, true).contains("\u{1b}["));
    }

    #[test]
    fn icon_renders_ascii_when_unicode_unsupported() {
        assert_eq!(Icon::Warning.render(false), theme::icons_ascii::WARNING);
        assert_eq!(Icon::Chart.render(true), theme::icons::CHART);
    }
}
