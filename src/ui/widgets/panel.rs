use std::borrow::Cow;

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::ui::primitives::border::BorderChar;
use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelStyle {
    #[default]
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Row {
    Text(String),
    Field { label: String, value: String },
    Empty,
}

/// Bordered block of text with optional aligned label/value rows
#[derive(Debug, Default, Clone)]
pub struct Panel {
    title: Option<String>,
    rows: Vec<Row>,
    style: PanelStyle,
}

impl Panel {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_style(style: PanelStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    pub fn style(mut self, style: PanelStyle) -> Self {
        self.style = style;
        self
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        for part in line.lines() {
            self.rows.push(Row::Text(part.to_string()));
        }
    }

    /// Row whose value column lines up with every other field row
    pub fn add_field(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.rows.push(Row::Field {
            label: label.into(),
            value: value.into(),
        });
    }

    pub fn add_empty(&mut self) {
        self.rows.push(Row::Empty);
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let label_width = self
            .rows
            .iter()
            .filter_map(|row| match row {
                Row::Field { label, .. } => Some(visible_width(label)),
                _ => None,
            })
            .max()
            .unwrap_or(0);

        let mut lines = Vec::new();
        if let Some(title) = &self.title {
            lines.push(title.clone());
        }
        for row in &self.rows {
            lines.push(match row {
                Row::Text(text) => text.clone(),
                Row::Field { label, value } => {
                    let pad = label_width - visible_width(label);
                    format!("{}{}  {}", label, " ".repeat(pad), value)
                }
                Row::Empty => String::new(),
            });
        }

        let inner_width = lines
            .iter()
            .map(|l| visible_width(l))
            .max()
            .unwrap_or(0)
            .saturating_add(2)
            .max(2);

        let h = BorderChar::Horizontal.render(supports_unicode);
        let v = BorderChar::Vertical.render(supports_unicode);
        let top = format!(
            "{}{}{}",
            BorderChar::TopLeft.render(supports_unicode),
            h.repeat(inner_width),
            BorderChar::TopRight.render(supports_unicode)
        );
        let bottom = format!(
            "{}{}{}",
            BorderChar::BottomLeft.render(supports_unicode),
            h.repeat(inner_width),
            BorderChar::BottomRight.render(supports_unicode)
        );

        let mut out = String::new();
        out.push_str(&self.color_border(&top, supports_color));
        out.push('\n');
        for line in &lines {
            let pad = inner_width - 1 - visible_width(line);
            out.push_str(&self.color_border(v, supports_color));
            out.push(' ');
            out.push_str(line);
            out.push_str(&" ".repeat(pad));
            out.push_str(&self.color_border(v, supports_color));
            out.push('\n');
        }
        out.push_str(&self.color_border(&bottom, supports_color));
        out.push('\n');
        out
    }

    fn color_border(&self, s: &str, supports_color: bool) -> String {
        if !supports_color {
            return s.to_string();
        }

        let color = match self.style {
            PanelStyle::Info => theme::colors::INFO,
            PanelStyle::Success => theme::colors::SUCCESS,
            PanelStyle::Warning => theme::colors::WARNING,
        };
        format!("{}", s.with(color))
    }
}

pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains('\u{1b}') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // ESC [ ... <final letter>
            if matches!(chars.peek(), Some('[') | Some(']')) {
                let _ = chars.next();
            }
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }

    Cow::Owned(out)
}
