use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderChar {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Horizontal,
    Vertical,
}

impl BorderChar {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        use theme::{borders as u, borders_ascii as a};

        match self {
            BorderChar::TopLeft => pick(supports_unicode, u::TOP_LEFT, a::TOP_LEFT),
            BorderChar::TopRight => pick(supports_unicode, u::TOP_RIGHT, a::TOP_RIGHT),
            BorderChar::BottomLeft => pick(supports_unicode, u::BOTTOM_LEFT, a::BOTTOM_LEFT),
            BorderChar::BottomRight => pick(supports_unicode, u::BOTTOM_RIGHT, a::BOTTOM_RIGHT),
            BorderChar::Horizontal => pick(supports_unicode, u::HORIZONTAL, a::HORIZONTAL),
            BorderChar::Vertical => pick(supports_unicode, u::VERTICAL, a::VERTICAL),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarCell {
    Full,
    /// Second segment of a split bar
    Medium,
    Empty,
}

pub fn bar_glyph(cell: BarCell, supports_unicode: bool) -> &'static str {
    use theme::{bars as u, bars_ascii as a};

    match cell {
        BarCell::Full => pick(supports_unicode, u::FULL, a::FULL),
        BarCell::Medium => pick(supports_unicode, u::MEDIUM, a::MEDIUM),
        BarCell::Empty => pick(supports_unicode, u::LIGHT, a::LIGHT),
    }
}

fn pick(supports_unicode: bool, unicode: &'static str, ascii: &'static str) -> &'static str {
    if supports_unicode {
        unicode
    } else {
        ascii
    }
}
