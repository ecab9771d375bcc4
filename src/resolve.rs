//! Default stroke/fill resolution against the chart palette.

use crate::brush::BrushProvider;
use crate::palette::ColorRotation;
use crate::series_style::SeriesStyle;

/// Fill opacity applied to a default fill brush unless the series subtype
/// configures its own fraction.
pub const DEFAULT_FILL_OPACITY: f64 = 0.35;

/// Make sure a series has both a stroke and a fill brush before it is
/// first rendered.
///
/// When at least one brush is unset, exactly one color is drawn from the
/// chart's rotation and both missing brushes derive from it: the stroke
/// keeps the full channels, the fill keeps the RGB with an alpha of
/// `round(fill_opacity * 255)`. A brush the caller already assigned is
/// left untouched. When both brushes are present this is a no-op and the
/// rotation is not consulted, so repeated calls never advance the shared
/// cursor.
pub fn ensure_default_brushes(
    style: &mut SeriesStyle,
    rotation: &mut dyn ColorRotation,
    brushes: &dyn BrushProvider,
    fill_opacity: f64,
) {
    if style.has_brushes() {
        return;
    }

    let color = rotation.next_color();
    log::debug!("resolving default series brushes from palette color {}", color);

    if style.stroke().is_none() {
        style.set_stroke(Some(brushes.solid_brush(color.a, color.r, color.g, color.b)));
    }

    if style.fill().is_none() {
        let alpha = (fill_opacity * 255.0).round() as u8;
        style.set_fill(Some(brushes.solid_brush(alpha, color.r, color.g, color.b)));
    }
}
