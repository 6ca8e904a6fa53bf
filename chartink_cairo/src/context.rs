// Copyright 2025 the Chartink Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-pass execution environment.

use chartink_backend::AlignmentScheme;
use kurbo::Point;

use crate::error::RenderResult;

/// Execution environment for one render pass.
///
/// Wraps the cairo context for the pass's surface together with the
/// [`AlignmentScheme`] the output driver selected for that surface kind.
/// Drawing operations take `&self` and thread the environment through every
/// call, so alignment is decided once at the top and applied uniformly.
///
/// A context belongs to exactly one pass on one thread; the cairo graphics
/// state behind it (current color, line width, clip, transform, save stack)
/// is owned by that pass.
#[derive(Debug)]
pub struct RenderContext {
    cr: cairo::Context,
    align: AlignmentScheme,
}

impl RenderContext {
    /// Wraps an existing cairo context with the given alignment scheme.
    ///
    /// The output drivers do this for you; constructing one directly is the
    /// escape hatch for rendering onto a surface this crate does not manage.
    #[must_use]
    pub fn new(cr: cairo::Context, align: AlignmentScheme) -> Self {
        Self { cr, align }
    }

    /// The underlying cairo context.
    ///
    /// Coordinates handed to it directly bypass alignment; callers that mix
    /// raw cairo calls with the aligned drawing operations are on their own.
    #[must_use]
    pub fn cairo(&self) -> &cairo::Context {
        &self.cr
    }

    /// The alignment scheme active for this pass.
    #[must_use]
    pub fn alignment(&self) -> AlignmentScheme {
        self.align
    }

    /// Aligns a stroke endpoint for this pass's target.
    #[must_use]
    pub fn align_point(&self, p: Point) -> Point {
        self.align.align_point(p)
    }

    /// Aligns a fill-region or clip corner for this pass's target.
    #[must_use]
    pub fn align_coord(&self, p: Point) -> Point {
        self.align.align_coord(p)
    }

    /// Runs `f` with the cairo graphics state saved around it.
    ///
    /// The state is restored on every exit path, including early returns via
    /// `?`: the restore lives in a drop guard rather than a trailing call.
    pub fn preserved<T>(&self, f: impl FnOnce(&Self) -> RenderResult<T>) -> RenderResult<T> {
        self.cr.save()?;
        let _restore = RestoreGuard { cr: &self.cr };
        f(self)
    }
}

struct RestoreGuard<'a> {
    cr: &'a cairo::Context,
}

impl Drop for RestoreGuard<'_> {
    fn drop(&mut self) {
        // A restore failure here means the context is already in an error
        // state, which the surrounding call reports; nothing to add.
        let _ = self.cr.restore();
    }
}

#[cfg(test)]
mod tests {
    use cairo::{Format, ImageSurface};

    use super::*;
    use crate::error::RenderError;

    fn test_context() -> RenderContext {
        let surface = ImageSurface::create(Format::ARgb32, 40, 40).unwrap();
        let cr = cairo::Context::new(&surface).unwrap();
        RenderContext::new(cr, AlignmentScheme::bitmap())
    }

    #[test]
    fn preserved_restores_state_on_success() {
        let ctx = test_context();
        ctx.cairo().set_line_width(1.0);
        ctx.preserved(|c| {
            c.cairo().set_line_width(9.0);
            Ok(())
        })
        .unwrap();
        assert_eq!(ctx.cairo().line_width(), 1.0);
    }

    #[test]
    fn preserved_restores_state_on_failure() {
        let ctx = test_context();
        ctx.cairo().set_line_width(1.0);
        let result: RenderResult<()> = ctx.preserved(|c| {
            c.cairo().set_line_width(9.0);
            Err(RenderError::Cairo(cairo::Error::InvalidStatus))
        });
        assert!(result.is_err(), "inner error must propagate");
        assert_eq!(ctx.cairo().line_width(), 1.0);
    }

    #[test]
    fn alignment_is_the_scheme_passed_in() {
        let ctx = test_context();
        assert_eq!(
            ctx.align_point(Point::new(3.2, 3.2)),
            Point::new(3.5, 3.5)
        );
        assert_eq!(ctx.align_coord(Point::new(3.2, 3.2)), Point::new(3.0, 3.0));
    }
}
