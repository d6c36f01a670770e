use crossterm::style::Color;

use crate::ui::primitives::border::{bar_glyph, BarCell};
use crate::ui::primitives::text::paint;

/// Two-segment bar splitting `width` cells by `share` (clamped to `[0, 1]`)
pub fn split_bar(
    share: f64,
    width: usize,
    colors: (Color, Color),
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let share = if share.is_finite() { share.clamp(0.0, 1.0) } else { 0.0 };
    let second = (share * width as f64).round() as usize;
    let first = width - second.min(width);

    let mut out = paint(
        &bar_glyph(BarCell::Full, supports_unicode).repeat(first),
        colors.0,
        supports_color,
    );
    out.push_str(&paint(
        &bar_glyph(BarCell::Medium, supports_unicode).repeat(second.min(width)),
        colors.1,
        supports_color,
    ));
    out
}

/// Bar of `value / max` filled cells, padded with light cells to `width`
pub fn value_bar(
    value: f64,
    max: f64,
    width: usize,
    color: Color,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let filled = if max > 0.0 && value.is_finite() {
        ((value / max).clamp(0.0, 1.0) * width as f64).round() as usize
    } else {
        0
    };

    let mut out = paint(
        &bar_glyph(BarCell::Full, supports_unicode).repeat(filled),
        color,
        supports_color,
    );
    out.push_str(&bar_glyph(BarCell::Empty, supports_unicode).repeat(width - filled));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLORS: (Color, Color) = (Color::Yellow, Color::Green);

    #[test]
    fn split_bar_divides_cells() {
        assert_eq!(split_bar(0.25, 8, COLORS, false, false), "######==");
        assert_eq!(split_bar(0.0, 4, COLORS, false, false), "####");
    }

    #[test]
    fn split_bar_clamps_share() {
        assert_eq!(split_bar(3.0, 5, COLORS, false, false), "=====");
        assert_eq!(split_bar(f64::NAN, 5, COLORS, false, false), "#####");
    }

    #[test]
    fn value_bar_scales_to_max() {
        assert_eq!(value_bar(50.0, 100.0, 10, Color::Yellow, false, false), "#####.....");
        assert_eq!(value_bar(1.0, 0.0, 4, Color::Yellow, false, false), "....");
    }
}
