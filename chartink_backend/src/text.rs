// Copyright 2025 the Chartink Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text anchoring math.
//!
//! An anchored text draw names a point and a symbolic anchor (corner, edge
//! midpoint, center, baseline); the engine draws from a baseline origin. The
//! functions here compute the offset between the two from the metrics the
//! engine reports at measurement time. Metrics are consumed per call and
//! never cached.
//!
//! Sign convention: y-bearing is the signed distance from the baseline to the
//! top of the glyph ink, so it is negative for upright text (negative y is
//! up). The multi-line formulas keep that sign, which is why `total_height`
//! below comes out negative.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;

/// Horizontal text anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HAnchor {
    /// Anchor at the left edge of the text.
    #[default]
    Left,
    /// Anchor at the horizontal center.
    Centre,
    /// Anchor at the right edge.
    Right,
}

/// Vertical text anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum VAnchor {
    /// Anchor at the top of the ink.
    Top,
    /// Anchor at the vertical center of the ink.
    Centre,
    /// Anchor on the baseline.
    #[default]
    Baseline,
    /// Anchor at the bottom of the font's descent.
    Bottom,
}

/// Extents of one measured line of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineMetrics {
    /// Advance width of the line.
    pub width: f64,
    /// Signed distance from baseline to the top of the ink (≤ 0 for upright
    /// text).
    pub y_bearing: f64,
}

/// Font-wide vertical metrics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontMetrics {
    /// Distance from baseline to the typographic top.
    pub ascent: f64,
    /// Distance from baseline to the typographic bottom.
    pub descent: f64,
}

impl HAnchor {
    /// Offset from the anchor x to the draw origin for a line of `width`.
    #[must_use]
    pub fn offset(self, width: f64) -> f64 {
        match self {
            Self::Left => 0.0,
            Self::Centre => -width / 2.0,
            Self::Right => -width,
        }
    }
}

impl VAnchor {
    /// Offset from the anchor y to the baseline for a single line.
    #[must_use]
    pub fn offset(self, font: FontMetrics, line: LineMetrics) -> f64 {
        match self {
            Self::Top => font.ascent,
            Self::Centre => -line.y_bearing / 2.0,
            Self::Baseline => 0.0,
            Self::Bottom => -font.descent,
        }
    }
}

/// The draw origin for a single anchored line, relative to the anchor point.
///
/// An empty line measures as width 0 with zero bearing, so every anchor
/// combination degenerates to (0, v-offset) at worst; nothing fails.
#[must_use]
pub fn line_origin(h: HAnchor, v: VAnchor, font: FontMetrics, line: LineMetrics) -> Point {
    Point::new(h.offset(line.width), v.offset(font, line))
}

/// Per-line draw origins for a stacked block of lines, relative to the anchor
/// point.
///
/// The block is laid out on a uniform grid: the deepest (most negative)
/// y-bearing across the lines sets the row height, half of it sets the
/// inter-line gap, and successive baselines step down by the sum of the two.
/// Each line's x offset comes from its own width, so ragged edges follow the
/// horizontal anchor.
///
/// For a single line prefer [`line_origin`]: the grid anchors a block by its
/// rows, not by the line's own ink extents, and the two agree only for the
/// top and baseline anchors.
#[must_use]
pub fn block_origins(
    h: HAnchor,
    v: VAnchor,
    font: FontMetrics,
    lines: &[LineMetrics],
) -> Vec<Point> {
    let max_bearing = lines.iter().map(|l| l.y_bearing).fold(0.0, f64::min);
    let gap = max_bearing / 2.0;
    let n = lines.len() as f64;
    let total_height = n * max_bearing + (n - 1.0) * gap;
    let y0 = match v {
        VAnchor::Top => font.ascent,
        VAnchor::Baseline => 0.0,
        VAnchor::Centre => total_height / 2.0 + font.ascent,
        VAnchor::Bottom => total_height + font.ascent,
    };

    let mut y = y0;
    lines
        .iter()
        .map(|line| {
            let origin = Point::new(h.offset(line.width), y);
            // max_bearing and gap are negative, so this steps downward.
            y -= gap + max_bearing;
            origin
        })
        .collect()
}
