//! Theme defaults applied to series at construction time.

use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{StyleError, StyleResult};
use crate::palette::{default_color_cycle, dark_color_cycle, high_contrast_color_cycle, PaletteRotation};
use crate::series_style::SeriesStyle;

/// Style surface a series subtype declares so the theme knows which
/// defaults apply to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SeriesCapability {
    /// Series drawn with an outline and an interior fill.
    Stroked,
}

type StyleInitializer = Box<dyn Fn(&mut SeriesStyle)>;

/// An explicit table of per-capability default initializers.
///
/// A series constructor calls [`Theme::build`] with the capabilities it
/// declares; the registered initializers run in registration order and
/// may assign any subset of the style properties, or none at all. The
/// brushes a theme leaves unset are later filled in from the chart
/// palette.
#[derive(Default)]
pub struct Theme {
    initializers: IndexMap<SeriesCapability, Vec<StyleInitializer>>,
}

impl Theme {
    /// Create a theme with no registered defaults.
    pub fn new() -> Self {
        Theme {
            initializers: IndexMap::new(),
        }
    }

    /// Build a theme from concrete preset values.
    pub fn from_config(config: &ThemeConfig) -> Self {
        let mut theme = Theme::new();
        let stroke_width = config.stroke_width;
        let stroke_dash = config.stroke_dash.clone();
        theme.register(SeriesCapability::Stroked, move |style| {
            style.set_stroke_thickness(stroke_width);
            if let Some(dashes) = &stroke_dash {
                style.set_stroke_dash_array(Some(dashes.clone()));
            }
        });
        theme
    }

    /// Register a default-assignment function for a capability.
    pub fn register(
        &mut self,
        capability: SeriesCapability,
        initializer: impl Fn(&mut SeriesStyle) + 'static,
    ) {
        self.initializers
            .entry(capability)
            .or_default()
            .push(Box::new(initializer));
    }

    /// Apply every initializer registered for a capability, in
    /// registration order. A capability nothing was registered for is a
    /// no-op.
    pub fn build(&self, capability: SeriesCapability, style: &mut SeriesStyle) {
        match self.initializers.get(&capability) {
            Some(initializers) => {
                log::trace!(
                    "applying {} theme initializer(s) for {:?}",
                    initializers.len(),
                    capability
                );
                for initializer in initializers {
                    initializer(style);
                }
            }
            None => log::trace!("no theme defaults registered for {:?}", capability),
        }
    }
}

impl fmt::Debug for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (capability, initializers) in &self.initializers {
            map.entry(capability, &initializers.len());
        }
        map.finish()
    }
}

/// Concrete preset values a theme is built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Default outline width for stroked series
    pub stroke_width: f32,
    /// Default dash pattern; absent means solid lines
    #[serde(default)]
    pub stroke_dash: Option<Vec<f64>>,
    /// Color cycle the chart rotation hands out to series
    pub color_cycle: Vec<Color>,
}

impl ThemeConfig {
    pub fn default_theme() -> Self {
        ThemeConfig {
            stroke_width: 1.5,
            stroke_dash: None,
            color_cycle: default_color_cycle(),
        }
    }

    pub fn dark_theme() -> Self {
        ThemeConfig {
            stroke_width: 1.5,
            stroke_dash: None,
            color_cycle: dark_color_cycle(),
        }
    }

    pub fn high_contrast_theme() -> Self {
        ThemeConfig {
            stroke_width: 2.5,
            stroke_dash: None,
            color_cycle: high_contrast_color_cycle(),
        }
    }

    /// Load preset values from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> StyleResult<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config: ThemeConfig = serde_json::from_reader(reader)
            .map_err(|e| StyleError::InvalidConfig(e.to_string()))?;
        Ok(config)
    }

    /// Build the chart's palette rotation from the configured cycle.
    pub fn rotation(&self) -> StyleResult<PaletteRotation> {
        PaletteRotation::from_colors(self.color_cycle.clone())
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::default_theme()
    }
}
