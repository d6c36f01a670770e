use crossterm::style::Color;

/// Design tokens for the growth CLI.
///
/// All colors, icons, borders and bar glyphs used by views come from here.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;

    /// #bd8604, the principal segment and the value line
    pub const PRINCIPAL: Color = Color::Rgb {
        r: 0xbd,
        g: 0x86,
        b: 0x04,
    };
    /// Growth segment. The web palette's #012b1a is unreadable on dark
    /// terminals, so the terminal uses a brighter green.
    pub const GROWTH: Color = Color::Rgb {
        r: 0x1f,
        g: 0x9d,
        b: 0x5c,
    };
}

pub mod icons {
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const CHART: &str = "📈";
    pub const ARROW: &str = "→";
}

pub mod icons_ascii {
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const CHART: &str = "[CHART]";
    pub const ARROW: &str = "->";
}

pub mod borders {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

pub mod borders_ascii {
    pub const TOP_LEFT: &str = "+";
    pub const TOP_RIGHT: &str = "+";
    pub const BOTTOM_LEFT: &str = "+";
    pub const BOTTOM_RIGHT: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}

/// Glyphs for proportion and value bars
pub mod bars {
    pub const FULL: &str = "█";
    pub const MEDIUM: &str = "▓";
    pub const LIGHT: &str = "░";
}

pub mod bars_ascii {
    pub const FULL: &str = "#";
    pub const MEDIUM: &str = "=";
    pub const LIGHT: &str = ".";
}
