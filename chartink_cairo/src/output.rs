// Copyright 2025 the Chartink Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Output drivers.
//!
//! A driver owns the destination surface for the duration of one render
//! pass: it allocates the surface, picks the alignment scheme that matches
//! the target medium, runs the caller's drawing closure under a fresh
//! [`RenderContext`], and finalizes the file. I/O failures propagate as
//! [`RenderError`](crate::RenderError); no partial-file cleanup is attempted.

use std::fs::File;
use std::path::Path;

use cairo::{Format, ImageSurface, PdfSurface, PsSurface, SvgSurface};
use chartink_backend::AlignmentScheme;
use log::debug;

use crate::context::RenderContext;
use crate::error::RenderResult;

/// Vector surface kinds supported by [`render_to_vector`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VectorFormat {
    /// Portable Document Format.
    Pdf,
    /// PostScript.
    Ps,
    /// Scalable Vector Graphics.
    Svg,
}

/// Renders `draw` onto a `width` × `height` pixel bitmap and writes it as a
/// PNG file to `path`.
///
/// The pass runs under [`AlignmentScheme::bitmap`], so strokes and fills
/// land crisply on the pixel grid.
pub fn render_to_png<F>(
    width: i32,
    height: i32,
    path: impl AsRef<Path>,
    draw: F,
) -> RenderResult<()>
where
    F: FnOnce(&RenderContext) -> RenderResult<()>,
{
    let path = path.as_ref();
    debug!("rendering {width}x{height} bitmap to {}", path.display());
    let surface = ImageSurface::create(Format::ARgb32, width, height)?;
    let cr = cairo::Context::new(&surface)?;
    draw(&RenderContext::new(cr, AlignmentScheme::bitmap()))?;
    let mut file = File::create(path)?;
    surface.write_to_png(&mut file)?;
    Ok(())
}

/// Renders `draw` onto a `width` × `height` vector surface (engine-native
/// units) of the given `format` at `path`.
///
/// The pass runs under [`AlignmentScheme::vector`] (no coordinate
/// correction), and the page is explicitly emitted before the surface is
/// finalized.
pub fn render_to_vector<F>(
    format: VectorFormat,
    width: f64,
    height: f64,
    path: impl AsRef<Path>,
    draw: F,
) -> RenderResult<()>
where
    F: FnOnce(&RenderContext) -> RenderResult<()>,
{
    let path = path.as_ref();
    debug!("rendering {width}x{height} {format:?} to {}", path.display());
    match format {
        VectorFormat::Pdf => finish_vector(PdfSurface::new(width, height, path)?, draw),
        VectorFormat::Ps => finish_vector(PsSurface::new(width, height, path)?, draw),
        VectorFormat::Svg => finish_vector(SvgSurface::new(width, height, Some(path))?, draw),
    }
}

/// The three vector drivers differ only in the surface constructor; the pass
/// itself is shared.
fn finish_vector<S, F>(surface: S, draw: F) -> RenderResult<()>
where
    S: AsRef<cairo::Surface>,
    F: FnOnce(&RenderContext) -> RenderResult<()>,
{
    let cr = cairo::Context::new(&surface)?;
    let ctx = RenderContext::new(cr, AlignmentScheme::vector());
    draw(&ctx)?;
    ctx.cairo().show_page()?;
    surface.as_ref().finish();
    Ok(())
}

#[cfg(test)]
mod tests {
    use chartink_backend::{FillStyle, opaque};
    use kurbo::Point;

    use super::*;

    fn scratch_path(name: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("chartink_{}_{name}", std::process::id()));
        path
    }

    fn draw_square(ctx: &RenderContext) -> RenderResult<()> {
        ctx.set_fill_style(&FillStyle::new(opaque(0.1, 0.6, 0.3)))?;
        ctx.fill_path(&[
            Point::new(2.0, 2.0),
            Point::new(18.0, 2.0),
            Point::new(18.0, 18.0),
            Point::new(2.0, 18.0),
        ])
    }

    #[test]
    fn png_driver_writes_a_png_file() {
        let path = scratch_path("out.png");
        render_to_png(20, 20, &path, draw_square).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn svg_driver_writes_svg_markup() {
        let path = scratch_path("out.svg");
        render_to_vector(VectorFormat::Svg, 20.0, 20.0, &path, draw_square).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("<svg"), "not an SVG document: {text:.60}");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn pdf_driver_writes_a_pdf_file() {
        let path = scratch_path("out.pdf");
        render_to_vector(VectorFormat::Pdf, 20.0, 20.0, &path, draw_square).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..5], b"%PDF-");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn drawing_failures_propagate_out_of_the_driver() {
        let path = scratch_path("failed.png");
        let result = render_to_png(20, 20, &path, |_ctx| {
            Err(crate::RenderError::Cairo(cairo::Error::InvalidStatus))
        });
        assert!(result.is_err(), "driver must not swallow drawing errors");
    }
}
