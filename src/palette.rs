//! Shared per-chart color rotation for series defaults.

use crate::color::Color;
use crate::error::{StyleError, StyleResult};

/// A stateful source of palette colors.
///
/// Each call advances a shared cursor, so a draw must only happen when a
/// color is actually needed. Given the same prior call count, the same
/// color comes back.
pub trait ColorRotation {
    /// Draw the next color from the palette.
    fn next_color(&mut self) -> Color;
}

/// Rotation over a repeating color cycle, owned by the chart and shared
/// across all series that need a default appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteRotation {
    colors: Vec<Color>,
    cursor: usize,
}

impl PaletteRotation {
    /// Create a rotation over the default cycle.
    pub fn new() -> Self {
        PaletteRotation {
            colors: default_color_cycle(),
            cursor: 0,
        }
    }

    /// Create a rotation over a custom cycle.
    pub fn from_colors(colors: Vec<Color>) -> StyleResult<Self> {
        if colors.is_empty() {
            return Err(StyleError::InvalidConfig(
                "palette color cycle is empty".to_string(),
            ));
        }
        Ok(PaletteRotation { colors, cursor: 0 })
    }

    /// The colors in the cycle.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// How many colors have been drawn so far.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Rewind the cursor to the start of the cycle.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

impl Default for PaletteRotation {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorRotation for PaletteRotation {
    fn next_color(&mut self) -> Color {
        let color = self.colors[self.cursor % self.colors.len()];
        self.cursor += 1;
        log::trace!("palette draw {}: {}", self.cursor, color);
        color
    }
}

/// The default color cycle.
pub fn default_color_cycle() -> Vec<Color> {
    vec![
        Color::rgb(0x1f, 0x77, 0xb4), // blue
        Color::rgb(0xff, 0x7f, 0x0e), // orange
        Color::rgb(0x2c, 0xa0, 0x2c), // green
        Color::rgb(0xd6, 0x27, 0x28), // red
        Color::rgb(0x94, 0x67, 0xbd), // purple
        Color::rgb(0x8c, 0x56, 0x4b), // brown
        Color::rgb(0xe3, 0x77, 0xc2), // pink
        Color::rgb(0x7f, 0x7f, 0x7f), // gray
        Color::rgb(0xbc, 0xbd, 0x22), // olive
        Color::rgb(0x17, 0xbe, 0xcf), // cyan
    ]
}

/// Color cycle tuned for dark backgrounds.
pub fn dark_color_cycle() -> Vec<Color> {
    vec![
        Color::rgb(0x58, 0xa6, 0xff), // bright blue
        Color::rgb(0xf0, 0x88, 0x3e), // orange
        Color::rgb(0x3f, 0xb9, 0x50), // green
        Color::rgb(0xf8, 0x51, 0x49), // red
        Color::rgb(0xa3, 0x71, 0xf7), // purple
        Color::rgb(0xdb, 0x6d, 0x28), // brown
        Color::rgb(0xff, 0x7b, 0x72), // pink
        Color::rgb(0x8b, 0x94, 0x9e), // gray
        Color::rgb(0xd2, 0x99, 0x22), // yellow
        Color::rgb(0x56, 0xd4, 0xdd), // cyan
    ]
}

/// Short high-contrast cycle for accessibility.
pub fn high_contrast_color_cycle() -> Vec<Color> {
    vec![
        Color::rgb(0x00, 0x00, 0xff), // blue
        Color::rgb(0xff, 0x00, 0x00), // red
        Color::rgb(0x00, 0x80, 0x00), // green
        Color::rgb(0xff, 0x8c, 0x00), // dark orange
        Color::rgb(0x80, 0x00, 0x80), // purple
        Color::rgb(0x00, 0x00, 0x00), // black
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_is_deterministic() {
        let mut a = PaletteRotation::new();
        let mut b = PaletteRotation::new();
        for _ in 0..7 {
            assert_eq!(a.next_color(), b.next_color());
        }
        assert_eq!(a.position(), 7);
    }

    #[test]
    fn test_rotation_wraps_around() {
        let cycle = vec![Color::RED, Color::GREEN, Color::BLUE];
        let mut rotation = PaletteRotation::from_colors(cycle).unwrap();
        assert_eq!(rotation.next_color(), Color::RED);
        assert_eq!(rotation.next_color(), Color::GREEN);
        assert_eq!(rotation.next_color(), Color::BLUE);
        assert_eq!(rotation.next_color(), Color::RED);
        assert_eq!(rotation.position(), 4);
    }

    #[test]
    fn test_empty_cycle_rejected() {
        let result = PaletteRotation::from_colors(Vec::new());
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("color cycle is empty"));
    }

    #[test]
    fn test_reset_rewinds() {
        let mut rotation = PaletteRotation::new();
        let first = rotation.next_color();
        rotation.next_color();
        rotation.reset();
        assert_eq!(rotation.position(), 0);
        assert_eq!(rotation.next_color(), first);
    }

    #[test]
    fn test_cycles_are_opaque() {
        for cycle in [
            default_color_cycle(),
            dark_color_cycle(),
            high_contrast_color_cycle(),
        ] {
            assert!(!cycle.is_empty());
            assert!(cycle.iter().all(|c| c.is_opaque()));
        }
    }
}
