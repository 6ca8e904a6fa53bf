// Copyright 2025 the Chartink Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cairo rendering backend for Chartink.
//!
//! This crate adapts the engine-independent drawing model of
//! [`chartink_backend`] onto the `cairo` crate. It is glue by design: style
//! records are replayed as cairo state, anchored text becomes a measured
//! translate/rotate/show-text sequence, and polylines, fills and point
//! markers become cairo paths. Path construction, rasterization, font
//! shaping and file encoding all stay cairo's business.
//!
//! The entry points are the output drivers: [`render_to_png`] runs a drawing
//! closure against a raster surface (with pixel-snapping coordinate
//! alignment), [`render_to_vector`] against a PDF/PS/SVG surface (with
//! identity alignment). Both hand the closure a [`RenderContext`], the
//! execution environment for exactly one render pass.
//!
//! ```no_run
//! use chartink_backend::{HAnchor, LineStyle, VAnchor, opaque};
//! use chartink_cairo::render_to_png;
//! use kurbo::Point;
//!
//! render_to_png(320, 240, "out.png", |ctx| {
//!     ctx.set_line_style(&LineStyle::new(opaque(0.2, 0.4, 0.8)))?;
//!     ctx.stroke_path(&[Point::new(10.0, 10.0), Point::new(310.0, 230.0)])?;
//!     ctx.draw_text(
//!         HAnchor::Centre,
//!         VAnchor::Top,
//!         0.0,
//!         Point::new(160.0, 10.0),
//!         "hello",
//!     )
//! })
//! .unwrap();
//! ```

mod context;
mod error;
mod output;
mod path;
mod style;
mod text;

pub use context::RenderContext;
pub use error::{RenderError, RenderResult};
pub use output::{VectorFormat, render_to_png, render_to_vector};
