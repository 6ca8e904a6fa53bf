// Copyright 2025 the Chartink Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style records to cairo state.
//!
//! Each setter replays one style record onto the cairo context and retains
//! nothing. The enum translators are total: the style enums are closed, and
//! the matches are exhaustive, so an unmapped variant is a compile error.

use chartink_backend::{
    Color, FillStyle, FontSlant, FontStyle, FontWeight, LineCap, LineJoin, LineStyle,
    split_premultiplied,
};
use kurbo::Rect;

use crate::context::RenderContext;
use crate::error::RenderResult;

fn cairo_line_cap(cap: LineCap) -> cairo::LineCap {
    match cap {
        LineCap::Butt => cairo::LineCap::Butt,
        LineCap::Round => cairo::LineCap::Round,
        LineCap::Square => cairo::LineCap::Square,
    }
}

fn cairo_line_join(join: LineJoin) -> cairo::LineJoin {
    match join {
        LineJoin::Miter => cairo::LineJoin::Miter,
        LineJoin::Round => cairo::LineJoin::Round,
        LineJoin::Bevel => cairo::LineJoin::Bevel,
    }
}

fn cairo_font_slant(slant: FontSlant) -> cairo::FontSlant {
    match slant {
        FontSlant::Normal => cairo::FontSlant::Normal,
        FontSlant::Italic => cairo::FontSlant::Italic,
        FontSlant::Oblique => cairo::FontSlant::Oblique,
    }
}

/// Cairo's toy font API knows two weights; 600 is the usual semibold cutoff.
fn cairo_font_weight(weight: FontWeight) -> cairo::FontWeight {
    if weight.0 >= 600 {
        cairo::FontWeight::Bold
    } else {
        cairo::FontWeight::Normal
    }
}

impl RenderContext {
    pub(crate) fn set_source(&self, color: Color) {
        let (r, g, b, a) = split_premultiplied(color);
        self.cairo().set_source_rgba(r, g, b, a);
    }

    /// Applies a line style to the graphics state.
    pub fn set_line_style(&self, style: &LineStyle) -> RenderResult<()> {
        let cr = self.cairo();
        cr.set_line_width(style.width);
        self.set_source(style.color);
        cr.set_line_cap(cairo_line_cap(style.cap));
        cr.set_line_join(cairo_line_join(style.join));
        cr.set_dash(&style.dashes, 0.0);
        Ok(())
    }

    /// Applies a fill style to the graphics state.
    pub fn set_fill_style(&self, style: &FillStyle) -> RenderResult<()> {
        self.set_source(style.color);
        Ok(())
    }

    /// Applies a font style to the graphics state.
    pub fn set_font_style(&self, style: &FontStyle) -> RenderResult<()> {
        let cr = self.cairo();
        cr.select_font_face(
            style.family.as_family_name(),
            cairo_font_slant(style.slant),
            cairo_font_weight(style.weight),
        );
        cr.set_font_size(style.size);
        self.set_source(style.color);
        Ok(())
    }

    /// Clips subsequent drawing to `rect`.
    ///
    /// Corners go through region alignment so the clip edge agrees with fill
    /// edges on raster targets. The clip composes with any clip already in
    /// the graphics state; scope it with [`Self::preserved`] to undo it.
    pub fn set_clip_region(&self, rect: Rect) -> RenderResult<()> {
        let p0 = self.align_coord(rect.origin());
        let p1 = self.align_coord(kurbo::Point::new(rect.x1, rect.y1));
        let cr = self.cairo();
        cr.new_path();
        cr.move_to(p0.x, p0.y);
        cr.line_to(p1.x, p0.y);
        cr.line_to(p1.x, p1.y);
        cr.line_to(p0.x, p1.y);
        cr.close_path();
        cr.clip();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use cairo::{Format, ImageSurface};
    use chartink_backend::{AlignmentScheme, opaque};

    use super::*;

    fn test_context() -> RenderContext {
        let surface = ImageSurface::create(Format::ARgb32, 40, 40).unwrap();
        let cr = cairo::Context::new(&surface).unwrap();
        RenderContext::new(cr, AlignmentScheme::vector())
    }

    #[test]
    fn line_style_lands_in_the_graphics_state() {
        let ctx = test_context();
        let style = LineStyle::new(opaque(1.0, 0.0, 0.0))
            .with_width(3.0)
            .with_cap(LineCap::Square)
            .with_join(LineJoin::Round)
            .with_dashes(vec![6.0, 2.0]);
        ctx.set_line_style(&style).unwrap();

        let cr = ctx.cairo();
        assert_eq!(cr.line_width(), 3.0);
        assert_eq!(cr.line_cap(), cairo::LineCap::Square);
        assert_eq!(cr.line_join(), cairo::LineJoin::Round);
        assert_eq!(cr.dash().0, vec![6.0, 2.0]);
    }

    #[test]
    fn solid_line_clears_any_dash_pattern() {
        let ctx = test_context();
        ctx.cairo().set_dash(&[1.0, 1.0], 0.0);
        ctx.set_line_style(&LineStyle::default()).unwrap();
        assert!(ctx.cairo().dash().0.is_empty());
    }

    #[test]
    fn weight_buckets_onto_cairos_two_weights() {
        assert_eq!(cairo_font_weight(FontWeight::NORMAL), cairo::FontWeight::Normal);
        assert_eq!(cairo_font_weight(FontWeight::BOLD), cairo::FontWeight::Bold);
        assert_eq!(cairo_font_weight(FontWeight(600)), cairo::FontWeight::Bold);
        assert_eq!(cairo_font_weight(FontWeight(599)), cairo::FontWeight::Normal);
    }
}
