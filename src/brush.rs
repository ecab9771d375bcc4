//! Brush types consumed by the renderer.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{StyleError, StyleResult};

/// A single stop in a gradient brush.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position along the gradient axis, 0.0 to 1.0
    pub offset: f64,
    /// Color at this stop
    pub color: Color,
}

/// An abstract paint description for strokes and fills.
///
/// The variant tag replaces downcasting through a shared brush interface;
/// narrowing to a concrete representation goes through [`Brush::as_solid`]
/// and fails with a configuration error when the variants disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Brush {
    /// A uniform color
    Solid(Color),
    /// A linear gradient over one or more stops
    LinearGradient { stops: Vec<GradientStop> },
}

impl Brush {
    /// Create a solid brush from ARGB channels.
    pub const fn solid(a: u8, r: u8, g: u8, b: u8) -> Self {
        Brush::Solid(Color::argb(a, r, g, b))
    }

    /// The variant name, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Brush::Solid(_) => "solid",
            Brush::LinearGradient { .. } => "linear-gradient",
        }
    }

    pub fn is_solid(&self) -> bool {
        matches!(self, Brush::Solid(_))
    }

    /// Narrow to the solid-color representation.
    pub fn as_solid(&self) -> StyleResult<Color> {
        match self {
            Brush::Solid(color) => Ok(*color),
            other => Err(StyleError::BrushKind {
                expected: "solid",
                found: other.kind(),
            }),
        }
    }
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Brush::Solid(color)
    }
}

/// Capability of the UI layer to construct brushes.
///
/// Construction is total: any valid 8-bit channel combination yields a
/// brush. A platform integration substitutes its own provider to produce
/// backend-native paint objects.
pub trait BrushProvider {
    /// Create a solid-color brush from ARGB channels.
    fn solid_brush(&self, a: u8, r: u8, g: u8, b: u8) -> Brush;
}

/// Default provider building the tagged [`Brush`] variants directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolidBrushProvider;

impl BrushProvider for SolidBrushProvider {
    fn solid_brush(&self, a: u8, r: u8, g: u8, b: u8) -> Brush {
        Brush::solid(a, r, g, b)
    }
}
