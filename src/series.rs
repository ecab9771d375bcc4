//! Capability view of a series that carries stroke and fill styling.

use crate::brush::BrushProvider;
use crate::palette::ColorRotation;
use crate::resolve::{ensure_default_brushes, DEFAULT_FILL_OPACITY};
use crate::series_style::{SeriesStyle, StyleSnapshot};

/// A series with an outline and an interior fill.
///
/// Concrete series types own the data and coordinate mapping; this trait
/// only exposes the styling surface the chart needs. Theme defaults are
/// applied into [`StrokedSeries::style_mut`] at construction. Before the
/// first render the chart resolves any unset brush from its palette, and
/// the renderer pulls an immutable snapshot per pass.
pub trait StrokedSeries {
    /// The mutable style of this series.
    fn style(&self) -> &SeriesStyle;

    fn style_mut(&mut self) -> &mut SeriesStyle;

    /// Fraction in `[0, 1]` applied to the alpha of a default fill brush.
    /// Subtypes with a denser visual weight override this.
    fn default_fill_opacity(&self) -> f64 {
        DEFAULT_FILL_OPACITY
    }

    /// Resolve any unset brush from the chart palette. Idempotent; draws
    /// nothing once both brushes are assigned.
    fn resolve_default_brushes(
        &mut self,
        rotation: &mut dyn ColorRotation,
        brushes: &dyn BrushProvider,
    ) {
        let fill_opacity = self.default_fill_opacity();
        ensure_default_brushes(self.style_mut(), rotation, brushes, fill_opacity);
    }

    /// Read-only copy of the current style for the renderer.
    fn style_snapshot(&self) -> StyleSnapshot {
        self.style().snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::{Brush, SolidBrushProvider};
    use crate::color::Color;
    use crate::palette::PaletteRotation;
    use crate::theme::{SeriesCapability, Theme, ThemeConfig};

    struct AreaSeries {
        style: SeriesStyle,
        fill_opacity: f64,
    }

    impl AreaSeries {
        fn new(theme: &Theme, fill_opacity: f64) -> Self {
            let mut style = SeriesStyle::new();
            theme.build(SeriesCapability::Stroked, &mut style);
            AreaSeries {
                style,
                fill_opacity,
            }
        }
    }

    impl StrokedSeries for AreaSeries {
        fn style(&self) -> &SeriesStyle {
            &self.style
        }

        fn style_mut(&mut self) -> &mut SeriesStyle {
            &mut self.style
        }

        fn default_fill_opacity(&self) -> f64 {
            self.fill_opacity
        }
    }

    #[test]
    fn test_theme_applies_at_construction() {
        let theme = Theme::from_config(&ThemeConfig::default_theme());
        let series = AreaSeries::new(&theme, 0.35);

        assert_eq!(series.style().stroke_thickness(), 1.5);
        assert_eq!(series.style().stroke(), None);
        assert_eq!(series.style().fill(), None);
    }

    #[test]
    fn test_series_resolves_through_trait() {
        // An empty theme sets nothing; the palette fills both brushes in.
        let theme = Theme::new();
        let mut series = AreaSeries::new(&theme, 0.35);
        let mut rotation =
            PaletteRotation::from_colors(vec![Color::argb(255, 10, 20, 30)]).unwrap();

        series.resolve_default_brushes(&mut rotation, &SolidBrushProvider);

        assert_eq!(series.style().stroke(), Some(&Brush::solid(255, 10, 20, 30)));
        assert_eq!(series.style().fill(), Some(&Brush::solid(89, 10, 20, 30)));
        assert_eq!(rotation.position(), 1);

        series.resolve_default_brushes(&mut rotation, &SolidBrushProvider);
        assert_eq!(rotation.position(), 1);
    }

    #[test]
    fn test_subtype_opacity_reaches_fill() {
        let mut series = AreaSeries::new(&Theme::new(), 0.8);
        let mut rotation = PaletteRotation::new();

        series.resolve_default_brushes(&mut rotation, &SolidBrushProvider);

        let fill = series.style().fill().unwrap().as_solid().unwrap();
        assert_eq!(fill.a, 204); // round(0.8 * 255)
    }

    #[test]
    fn test_snapshot_through_trait() {
        let theme = Theme::from_config(&ThemeConfig::default_theme());
        let mut series = AreaSeries::new(&theme, 0.35);
        let mut rotation = PaletteRotation::new();
        series.resolve_default_brushes(&mut rotation, &SolidBrushProvider);

        let snap = series.style_snapshot();
        assert_eq!(snap.stroke_thickness, 1.5);
        assert!(snap.stroke.is_some());
        assert!(snap.fill.is_some());
        assert_eq!(snap, series.style_snapshot());
    }

    #[test]
    fn test_two_series_draw_consecutive_palette_colors() {
        let theme = Theme::new();
        let mut first = AreaSeries::new(&theme, 0.35);
        let mut second = AreaSeries::new(&theme, 0.35);
        let mut rotation = PaletteRotation::new();
        let cycle = rotation.colors().to_vec();

        first.resolve_default_brushes(&mut rotation, &SolidBrushProvider);
        second.resolve_default_brushes(&mut rotation, &SolidBrushProvider);

        let first_stroke = first.style().stroke().unwrap().as_solid().unwrap();
        let second_stroke = second.style().stroke().unwrap().as_solid().unwrap();
        assert_eq!(first_stroke, cycle[0]);
        assert_eq!(second_stroke, cycle[1]);
    }
}
