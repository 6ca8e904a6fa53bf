// Copyright 2025 the Chartink Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchored text drawing.
//!
//! Cairo draws text from a baseline origin under the current transform. The
//! operations here measure with `text_extents`/`font_extents`, ask
//! [`chartink_backend`] for the anchor offset, and compose the draw as
//! translate-to-anchor, rotate, move-to-offset, show. Translating before
//! rotating makes the anchor the pivot: the text is positioned relative to
//! the anchor in the rotated frame.

use chartink_backend::{FontMetrics, HAnchor, LineMetrics, VAnchor, block_origins, line_origin};
use kurbo::{Point, Rect};

use crate::context::RenderContext;
use crate::error::RenderResult;

impl RenderContext {
    fn line_metrics(&self, text: &str) -> RenderResult<LineMetrics> {
        let extents = self.cairo().text_extents(text)?;
        Ok(LineMetrics {
            width: extents.width(),
            y_bearing: extents.y_bearing(),
        })
    }

    fn font_metrics(&self) -> RenderResult<FontMetrics> {
        let extents = self.cairo().font_extents()?;
        Ok(FontMetrics {
            ascent: extents.ascent(),
            descent: extents.descent(),
        })
    }

    /// Draws a single line of text anchored at `pos`.
    ///
    /// `angle_degrees` rotates the text clockwise about the anchor point.
    /// An empty string measures as zero-width and draws nothing.
    pub fn draw_text(
        &self,
        h: HAnchor,
        v: VAnchor,
        angle_degrees: f64,
        pos: Point,
        text: &str,
    ) -> RenderResult<()> {
        self.preserved(|ctx| {
            let line = ctx.line_metrics(text)?;
            let font = ctx.font_metrics()?;
            let origin = line_origin(h, v, font, line);
            let cr = ctx.cairo();
            cr.translate(pos.x, pos.y);
            cr.rotate(angle_degrees.to_radians());
            cr.move_to(origin.x, origin.y);
            cr.show_text(text)?;
            Ok(())
        })
    }

    /// Draws a multi-line block of text anchored at `pos`.
    ///
    /// The input splits on `\n`. A single line draws exactly like
    /// [`Self::draw_text`]; no lines is a no-op. Otherwise the lines stack
    /// downward on a uniform grid in the rotated frame, each anchored
    /// horizontally by its own width.
    pub fn draw_text_block(
        &self,
        h: HAnchor,
        v: VAnchor,
        angle_degrees: f64,
        pos: Point,
        text: &str,
    ) -> RenderResult<()> {
        let lines: Vec<&str> = text.lines().collect();
        match lines.as_slice() {
            [] => Ok(()),
            [only] => self.draw_text(h, v, angle_degrees, pos, only),
            _ => self.preserved(|ctx| {
                let metrics = lines
                    .iter()
                    .map(|line| ctx.line_metrics(line))
                    .collect::<RenderResult<Vec<_>>>()?;
                let font = ctx.font_metrics()?;
                let origins = block_origins(h, v, font, &metrics);
                let cr = ctx.cairo();
                cr.translate(pos.x, pos.y);
                cr.rotate(angle_degrees.to_radians());
                for (line, origin) in lines.iter().zip(origins) {
                    cr.move_to(origin.x, origin.y);
                    cr.show_text(line)?;
                }
                Ok(())
            }),
        }
    }

    /// The axis-aligned rectangle a single, unrotated line would cover when
    /// drawn anchored at `pos`.
    ///
    /// Purely a measurement: the graphics state is saved and restored around
    /// it, so callers can use it for layout without disturbing a pass in
    /// progress.
    pub fn text_rect(
        &self,
        h: HAnchor,
        v: VAnchor,
        pos: Point,
        text: &str,
    ) -> RenderResult<Rect> {
        self.preserved(|ctx| {
            let extents = ctx.cairo().text_extents(text)?;
            let font = ctx.font_metrics()?;
            let line = LineMetrics {
                width: extents.width(),
                y_bearing: extents.y_bearing(),
            };
            let origin = line_origin(h, v, font, line);
            let corner = Point::new(pos.x + origin.x, pos.y + origin.y);
            Ok(Rect::new(
                corner.x,
                corner.y,
                corner.x + extents.width(),
                corner.y + extents.height(),
            ))
        })
    }
}
