// Copyright 2025 the Chartink Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative style records.
//!
//! These are plain data: a backend reads a record, issues the matching engine
//! calls, and forgets it. Nothing here retains state between drawing calls.
//! All enums are closed; adapters match them exhaustively, so an unmapped
//! variant fails at compile time rather than at render time.

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::color::{Color, opaque, transparent};

/// How stroke endpoints are capped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineCap {
    /// Flat end at the exact endpoint.
    #[default]
    Butt,
    /// Rounded end.
    Round,
    /// Square end extending past the endpoint.
    Square,
}

/// How stroke segments are joined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineJoin {
    /// Sharp corner.
    #[default]
    Miter,
    /// Rounded corner.
    Round,
    /// Beveled corner.
    Bevel,
}

/// Font slant (normal/italic/oblique).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FontSlant {
    /// Upright glyphs.
    #[default]
    Normal,
    /// Italic glyphs.
    Italic,
    /// Slanted upright glyphs.
    Oblique,
}

/// CSS-style font weights.
///
/// Engines with a coarser weight model bucket this (e.g. ≥ 600 ⇒ bold).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Font family selection.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family.
    Serif,
    /// A generic sans-serif family.
    SansSerif,
    /// A generic monospace family.
    Monospace,
    /// A named family (e.g. `"Inter"`, `"Helvetica Neue"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the family name handed to the engine's font selection call.
    #[must_use]
    pub fn as_family_name(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

impl Default for FontFamily {
    fn default() -> Self {
        Self::SansSerif
    }
}

/// The shape of a point marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointShape {
    /// A filled, outlined disc.
    Circle,
    /// A regular polygon with `sides` vertices.
    Polygon {
        /// Number of vertices (clamped to at least 3 by adapters).
        sides: u32,
        /// Rotates the vertex ring by half a sector.
        rotated: bool,
    },
    /// Two axis-aligned crossing segments, stroke only.
    Plus,
    /// Two diagonal crossing segments, stroke only.
    Cross,
    /// The union of [`Self::Plus`] and [`Self::Cross`], stroke only.
    Star,
}

/// Stroke styling for polylines and outlines.
#[derive(Clone, Debug, PartialEq)]
pub struct LineStyle {
    /// Stroke width in logical units.
    pub width: f64,
    /// Stroke color.
    pub color: Color,
    /// Endpoint cap.
    pub cap: LineCap,
    /// Segment join.
    pub join: LineJoin,
    /// On/off dash lengths; empty means solid.
    pub dashes: Vec<f64>,
}

impl LineStyle {
    /// Creates a solid one-unit stroke in the given color.
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            width: 1.0,
            color,
            cap: LineCap::default(),
            join: LineJoin::default(),
            dashes: Vec::new(),
        }
    }

    /// Sets the stroke width.
    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Sets the endpoint cap.
    #[must_use]
    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    /// Sets the segment join.
    #[must_use]
    pub fn with_join(mut self, join: LineJoin) -> Self {
        self.join = join;
        self
    }

    /// Sets the dash pattern (empty for solid).
    #[must_use]
    pub fn with_dashes(mut self, dashes: Vec<f64>) -> Self {
        self.dashes = dashes;
        self
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::new(opaque(0.0, 0.0, 0.0))
    }
}

/// Solid region fill.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FillStyle {
    /// Fill color.
    pub color: Color,
}

impl FillStyle {
    /// Creates a solid fill in the given color.
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Default for FillStyle {
    fn default() -> Self {
        Self::new(opaque(1.0, 1.0, 1.0))
    }
}

/// Font selection plus text color.
#[derive(Clone, Debug, PartialEq)]
pub struct FontStyle {
    /// Preferred family.
    pub family: FontFamily,
    /// Size in logical units.
    pub size: f64,
    /// Slant.
    pub slant: FontSlant,
    /// Weight.
    pub weight: FontWeight,
    /// Glyph color.
    pub color: Color,
}

impl FontStyle {
    /// Creates a black, normal-slant, normal-weight style of the given size.
    #[must_use]
    pub fn new(size: f64) -> Self {
        Self {
            family: FontFamily::default(),
            size,
            slant: FontSlant::default(),
            weight: FontWeight::default(),
            color: opaque(0.0, 0.0, 0.0),
        }
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_family(mut self, family: FontFamily) -> Self {
        self.family = family;
        self
    }

    /// Sets the slant.
    #[must_use]
    pub fn with_slant(mut self, slant: FontSlant) -> Self {
        self.slant = slant;
        self
    }

    /// Sets the weight.
    #[must_use]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Sets the glyph color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Default for FontStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// Styling for a point marker.
#[derive(Clone, Debug, PartialEq)]
pub struct PointStyle {
    /// Marker shape.
    pub shape: PointShape,
    /// Interior color for shapes that fill.
    pub fill_color: Color,
    /// Outline color, used by the closing stroke of every shape.
    pub border_color: Color,
    /// Outline width.
    pub border_width: f64,
    /// Marker radius in logical units.
    pub radius: f64,
}

impl PointStyle {
    /// Creates a marker style with the given shape and radius.
    #[must_use]
    pub fn new(shape: PointShape, radius: f64) -> Self {
        Self {
            shape,
            fill_color: transparent(),
            border_color: opaque(0.0, 0.0, 0.0),
            border_width: 1.0,
            radius,
        }
    }

    /// Sets the interior color.
    #[must_use]
    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    /// Sets the outline color.
    #[must_use]
    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    /// Sets the outline width.
    #[must_use]
    pub fn with_border_width(mut self, width: f64) -> Self {
        self.border_width = width;
        self
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn line_style_builder_sets_fields() {
        let style = LineStyle::new(opaque(1.0, 0.0, 0.0))
            .with_width(2.5)
            .with_cap(LineCap::Round)
            .with_join(LineJoin::Bevel)
            .with_dashes(alloc::vec![4.0, 2.0]);
        assert_eq!(style.width, 2.5);
        assert_eq!(style.cap, LineCap::Round);
        assert_eq!(style.join, LineJoin::Bevel);
        assert_eq!(style.dashes, [4.0, 2.0]);
    }

    #[test]
    fn default_line_style_is_solid() {
        assert!(LineStyle::default().dashes.is_empty());
    }

    #[test]
    fn named_family_round_trips() {
        let family = FontFamily::Named(Arc::from("Inter"));
        assert_eq!(family.as_family_name(), "Inter");
        assert_eq!(FontFamily::default().as_family_name(), "sans-serif");
    }
}
