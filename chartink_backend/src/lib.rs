// Copyright 2025 the Chartink Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine-independent drawing model for Chartink.
//!
//! Chart code describes what to draw (polylines, filled regions, point
//! markers, anchored text) in logical coordinates, together with declarative
//! style records. A rendering backend translates that description into calls
//! on a concrete 2D engine. This crate holds everything in that contract that
//! is independent of the engine:
//!
//! - **Style records** ([`LineStyle`], [`FillStyle`], [`FontStyle`],
//!   [`PointStyle`]) and the closed enums they are built from.
//! - **Text anchoring** math: given font metrics reported by the engine,
//!   where does the draw origin sit relative to a symbolic anchor?
//! - **Coordinate alignment**: the per-target correction that keeps strokes
//!   and fills crisp on raster output while leaving vector output untouched.
//!
//! Engine adapters (e.g. `chartink_cairo`) consume these types; nothing here
//! performs any drawing itself.

#![no_std]

extern crate alloc;

mod align;
mod color;
#[cfg(not(feature = "std"))]
mod float;
mod style;
mod text;

pub use align::AlignmentScheme;
pub use color::{Color, opaque, split_premultiplied, transparent};
pub use style::{
    FillStyle, FontFamily, FontSlant, FontStyle, FontWeight, LineCap, LineJoin, LineStyle,
    PointShape, PointStyle,
};
pub use text::{FontMetrics, HAnchor, LineMetrics, VAnchor, block_origins, line_origin};
