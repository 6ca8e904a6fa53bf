// Copyright 2025 the Chartink Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polylines, filled regions and point markers.
//!
//! Every coordinate is aligned exactly once, immediately before it enters a
//! cairo path: stroke endpoints through point alignment, fill corners through
//! region alignment, and a marker's center through point alignment (its
//! shape geometry is relative to that center).

use std::f64::consts::{SQRT_2, TAU};

use chartink_backend::{PointShape, PointStyle};
use kurbo::Point;

use crate::context::RenderContext;
use crate::error::RenderResult;

impl RenderContext {
    /// Strokes an open polyline through `points` with the current line style.
    ///
    /// An empty slice is a no-op, not an error.
    pub fn stroke_path(&self, points: &[Point]) -> RenderResult<()> {
        let Some((first, rest)) = points.split_first() else {
            return Ok(());
        };
        let cr = self.cairo();
        cr.new_path();
        let p = self.align_point(*first);
        cr.move_to(p.x, p.y);
        for q in rest {
            let q = self.align_point(*q);
            cr.line_to(q.x, q.y);
        }
        cr.stroke()?;
        Ok(())
    }

    /// Fills the region enclosed by `points` with the current fill style.
    ///
    /// Cairo closes the path implicitly. An empty slice is a no-op.
    pub fn fill_path(&self, points: &[Point]) -> RenderResult<()> {
        let Some((first, rest)) = points.split_first() else {
            return Ok(());
        };
        let cr = self.cairo();
        cr.new_path();
        let p = self.align_coord(*first);
        cr.move_to(p.x, p.y);
        for q in rest {
            let q = self.align_coord(*q);
            cr.line_to(q.x, q.y);
        }
        cr.fill()?;
        Ok(())
    }

    /// Draws a point marker centered at `pos`.
    ///
    /// Filled shapes (circle, polygon) fill first and keep their path;
    /// stroke-only shapes (plus, cross, star) just build segments. Either
    /// way the marker finishes with one border stroke in the style's border
    /// width and color.
    pub fn draw_marker(&self, style: &PointStyle, pos: Point) -> RenderResult<()> {
        let p = self.align_point(pos);
        let r = style.radius;
        let cr = self.cairo();
        match style.shape {
            PointShape::Circle => {
                self.set_source(style.fill_color);
                cr.new_path();
                cr.arc(p.x, p.y, r, 0.0, TAU);
                cr.fill_preserve()?;
            }
            PointShape::Polygon { sides, rotated } => {
                let sides = sides.max(3);
                let sector = TAU / f64::from(sides);
                let phase = if rotated { sector / 2.0 } else { 0.0 };
                self.set_source(style.fill_color);
                cr.new_path();
                for k in 0..sides {
                    let angle = f64::from(k) * sector + phase;
                    let v = Point::new(p.x + r * angle.sin(), p.y + r * angle.cos());
                    if k == 0 {
                        cr.move_to(v.x, v.y);
                    } else {
                        cr.line_to(v.x, v.y);
                    }
                }
                cr.close_path();
                cr.fill_preserve()?;
            }
            PointShape::Plus => {
                cr.new_path();
                plus_segments(cr, p, r);
            }
            PointShape::Cross => {
                cr.new_path();
                cross_segments(cr, p, r);
            }
            PointShape::Star => {
                cr.new_path();
                plus_segments(cr, p, r);
                cross_segments(cr, p, r);
            }
        }
        cr.set_line_width(style.border_width);
        self.set_source(style.border_color);
        cr.stroke()?;
        Ok(())
    }
}

fn plus_segments(cr: &cairo::Context, p: Point, r: f64) {
    cr.move_to(p.x + r, p.y);
    cr.line_to(p.x - r, p.y);
    cr.move_to(p.x, p.y - r);
    cr.line_to(p.x, p.y + r);
}

fn cross_segments(cr: &cairo::Context, p: Point, r: f64) {
    let arm = r / SQRT_2;
    cr.move_to(p.x + arm, p.y + arm);
    cr.line_to(p.x - arm, p.y - arm);
    cr.move_to(p.x + arm, p.y - arm);
    cr.line_to(p.x - arm, p.y + arm);
}

#[cfg(test)]
mod tests {
    use cairo::{Format, ImageSurface};
    use chartink_backend::{AlignmentScheme, FillStyle, LineStyle, opaque};

    use super::*;

    fn bitmap_pass() -> (ImageSurface, RenderContext) {
        let surface = ImageSurface::create(Format::ARgb32, 60, 60).unwrap();
        let cr = cairo::Context::new(&surface).unwrap();
        (surface, RenderContext::new(cr, AlignmentScheme::bitmap()))
    }

    fn png_bytes(surface: &ImageSurface) -> Vec<u8> {
        let mut bytes = Vec::new();
        surface.write_to_png(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn empty_paths_are_no_ops() {
        let (surface, ctx) = bitmap_pass();
        let before = png_bytes(&surface);
        ctx.set_line_style(&LineStyle::new(opaque(0.0, 0.0, 0.0)))
            .unwrap();
        ctx.stroke_path(&[]).unwrap();
        ctx.set_fill_style(&FillStyle::new(opaque(0.0, 0.0, 0.0)))
            .unwrap();
        ctx.fill_path(&[]).unwrap();
        assert_eq!(png_bytes(&surface), before);
    }

    #[test]
    fn aligned_hairline_covers_exactly_one_pixel_row() {
        let (mut surface, ctx) = bitmap_pass();
        ctx.set_line_style(&LineStyle::new(opaque(0.0, 0.0, 0.0)))
            .unwrap();
        // A one-unit stroke at a fractional y: point alignment snaps its
        // spine to y = 10.5, so the ink lands entirely in pixel row 10.
        ctx.stroke_path(&[Point::new(5.3, 10.2), Point::new(50.7, 10.2)])
            .unwrap();
        drop(ctx);

        let stride = usize::try_from(surface.stride()).unwrap();
        let data = surface.data().unwrap();
        let alpha = |x: usize, y: usize| data[y * stride + x * 4 + 3];
        assert_eq!(alpha(20, 9), 0, "row above the snapped spine has ink");
        assert_ne!(alpha(20, 10), 0, "snapped row has no ink");
        assert_eq!(alpha(20, 11), 0, "row below the snapped spine has ink");
    }

    #[test]
    fn every_marker_shape_draws_something() {
        for shape in [
            PointShape::Circle,
            PointShape::Polygon {
                sides: 5,
                rotated: false,
            },
            PointShape::Polygon {
                sides: 4,
                rotated: true,
            },
            PointShape::Plus,
            PointShape::Cross,
            PointShape::Star,
        ] {
            let (surface, ctx) = bitmap_pass();
            let blank = png_bytes(&surface);
            let style = PointStyle::new(shape, 8.0)
                .with_fill_color(opaque(0.9, 0.4, 0.1))
                .with_border_color(opaque(0.0, 0.0, 0.0))
                .with_border_width(1.5);
            ctx.draw_marker(&style, Point::new(30.0, 30.0)).unwrap();
            assert_ne!(png_bytes(&surface), blank, "shape {shape:?} drew nothing");
        }
    }

    #[test]
    fn marker_border_stroke_is_applied_last() {
        let (_surface, ctx) = bitmap_pass();
        let style = PointStyle::new(PointShape::Circle, 8.0)
            .with_fill_color(opaque(0.9, 0.4, 0.1))
            .with_border_width(2.5);
        ctx.draw_marker(&style, Point::new(30.0, 30.0)).unwrap();
        assert_eq!(ctx.cairo().line_width(), 2.5);
    }
}
