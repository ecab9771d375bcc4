//! Mutable per-series visual state and its immutable snapshot.

use std::fmt;

use crate::brush::Brush;

/// Identifies which visual attribute of a series changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    Stroke,
    StrokeThickness,
    StrokeDashArray,
    Fill,
}

impl StyleProperty {
    /// Property name, for diagnostics and logging.
    pub fn name(&self) -> &'static str {
        match self {
            StyleProperty::Stroke => "stroke",
            StyleProperty::StrokeThickness => "stroke_thickness",
            StyleProperty::StrokeDashArray => "stroke_dash_array",
            StyleProperty::Fill => "fill",
        }
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

type Observer = Box<dyn FnMut(StyleProperty)>;

/// The visual attributes of one series instance.
///
/// Stroke and fill start out unset; the theme step and the default-color
/// resolution fill them in before first render. Every setter notifies the
/// subscribed observers, even when the value did not change. Values are
/// not validated; callers own the sanity of thickness and dash lengths.
pub struct SeriesStyle {
    stroke: Option<Brush>,
    stroke_thickness: f32,
    stroke_dash_array: Option<Vec<f64>>,
    fill: Option<Brush>,
    observers: Vec<(usize, Observer)>,
    next_observer_id: usize,
}

impl SeriesStyle {
    /// Create an unstyled state. Thickness starts at zero until a theme
    /// or a caller assigns one.
    pub fn new() -> Self {
        SeriesStyle {
            stroke: None,
            stroke_thickness: 0.0,
            stroke_dash_array: None,
            fill: None,
            observers: Vec::new(),
            next_observer_id: 0,
        }
    }

    /// Outline paint, if assigned.
    pub fn stroke(&self) -> Option<&Brush> {
        self.stroke.as_ref()
    }

    /// Assign or clear the outline paint.
    pub fn set_stroke(&mut self, brush: Option<Brush>) {
        self.stroke = brush;
        self.notify(StyleProperty::Stroke);
    }

    /// Outline width.
    pub fn stroke_thickness(&self) -> f32 {
        self.stroke_thickness
    }

    pub fn set_stroke_thickness(&mut self, thickness: f32) {
        self.stroke_thickness = thickness;
        self.notify(StyleProperty::StrokeThickness);
    }

    /// Alternating on/off dash lengths; `None` draws a solid line.
    pub fn stroke_dash_array(&self) -> Option<&[f64]> {
        self.stroke_dash_array.as_deref()
    }

    pub fn set_stroke_dash_array(&mut self, dashes: Option<Vec<f64>>) {
        self.stroke_dash_array = dashes;
        self.notify(StyleProperty::StrokeDashArray);
    }

    /// Interior paint, if assigned.
    pub fn fill(&self) -> Option<&Brush> {
        self.fill.as_ref()
    }

    /// Assign or clear the interior paint.
    pub fn set_fill(&mut self, brush: Option<Brush>) {
        self.fill = brush;
        self.notify(StyleProperty::Fill);
    }

    /// Whether both brushes are assigned and the series can be rendered
    /// without drawing a default color.
    pub fn has_brushes(&self) -> bool {
        self.stroke.is_some() && self.fill.is_some()
    }

    /// Register an observer called synchronously on every property
    /// assignment. Returns an id for [`SeriesStyle::unsubscribe`].
    pub fn subscribe(&mut self, observer: impl FnMut(StyleProperty) + 'static) -> usize {
        let id = self.next_observer_id;
        self.next_observer_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove a previously registered observer. Returns whether it was
    /// still registered.
    pub fn unsubscribe(&mut self, id: usize) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(obs_id, _)| *obs_id != id);
        self.observers.len() != before
    }

    fn notify(&mut self, property: StyleProperty) {
        for (_, observer) in &mut self.observers {
            observer(property);
        }
    }

    /// Assemble a read-only copy of the current style for the renderer.
    ///
    /// Pure read; a fresh value on every call, so two snapshots are only
    /// value-equal, never the same allocation. Dash lengths are narrowed
    /// to the renderer's single-precision representation.
    pub fn snapshot(&self) -> StyleSnapshot {
        StyleSnapshot {
            fill: self.fill.clone(),
            stroke: self.stroke.clone(),
            stroke_thickness: self.stroke_thickness,
            stroke_dash_array: self
                .stroke_dash_array
                .as_ref()
                .map(|dashes| dashes.iter().map(|&len| len as f32).collect()),
        }
    }
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SeriesStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeriesStyle")
            .field("stroke", &self.stroke)
            .field("stroke_thickness", &self.stroke_thickness)
            .field("stroke_dash_array", &self.stroke_dash_array)
            .field("fill", &self.fill)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Immutable bundle of resolved visual attributes handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSnapshot {
    pub fill: Option<Brush>,
    pub stroke: Option<Brush>,
    pub stroke_thickness: f32,
    pub stroke_dash_array: Option<Vec<f32>>,
}
