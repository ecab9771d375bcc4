//! Series styling and default-appearance resolution.
//!
//! Holds the mutable visual state of a plotted series (stroke brush,
//! thickness, dash pattern, fill brush), notifies observers on every
//! mutation, fills unset brushes from the chart's shared color rotation,
//! and publishes immutable style snapshots to the renderer.

pub mod brush;
pub mod color;
pub mod error;
pub mod palette;
pub mod resolve;
pub mod series;
pub mod series_style;
pub mod theme;

pub use brush::{Brush, BrushProvider, GradientStop, SolidBrushProvider};
pub use color::Color;
pub use error::{StyleError, StyleResult};
pub use palette::{ColorRotation, PaletteRotation};
pub use resolve::{ensure_default_brushes, DEFAULT_FILL_OPACITY};
pub use series::StrokedSeries;
pub use series_style::{SeriesStyle, StyleProperty, StyleSnapshot};
pub use theme::{SeriesCapability, Theme, ThemeConfig};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::brush::{Brush, BrushProvider, SolidBrushProvider};
    pub use crate::color::Color;
    pub use crate::error::{StyleError, StyleResult};
    pub use crate::palette::{ColorRotation, PaletteRotation};
    pub use crate::resolve::ensure_default_brushes;
    pub use crate::series::StrokedSeries;
    pub use crate::series_style::{SeriesStyle, StyleProperty, StyleSnapshot};
    pub use crate::theme::{SeriesCapability, Theme, ThemeConfig};
}
