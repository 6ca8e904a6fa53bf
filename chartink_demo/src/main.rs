// Copyright 2025 the Chartink Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart demo for the cairo backend.
//!
//! Draws the same small line-and-scatter chart through both output drivers,
//! which exercises every drawing operation once: fills, clipping, dashed
//! grid lines, the polyline stroke, all five marker shapes, rotated and
//! multi-line anchored text.

use chartink_backend::{
    FillStyle, FontFamily, FontStyle, FontWeight, HAnchor, LineCap, LineStyle, PointShape,
    PointStyle, VAnchor, opaque,
};
use chartink_cairo::{RenderContext, RenderResult, VectorFormat, render_to_png, render_to_vector};
use kurbo::{Point, Rect};

const WIDTH: f64 = 480.0;
const HEIGHT: f64 = 320.0;

/// Plot area inside the axis margins.
const PLOT: Rect = Rect::new(56.0, 48.0, 456.0, 288.0);

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        log::error!("demo failed: {err}");
        std::process::exit(1);
    }
}

fn run() -> RenderResult<()> {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "demo dimensions are small integers"
    )]
    render_to_png(WIDTH as i32, HEIGHT as i32, "chartink_demo.png", draw_chart)?;
    println!("wrote chartink_demo.png");

    render_to_vector(
        VectorFormat::Svg,
        WIDTH,
        HEIGHT,
        "chartink_demo.svg",
        draw_chart,
    )?;
    println!("wrote chartink_demo.svg");
    Ok(())
}

fn draw_chart(ctx: &RenderContext) -> RenderResult<()> {
    let samples = [
        (0.0, 12.0),
        (1.0, 31.0),
        (2.0, 23.0),
        (3.0, 52.0),
        (4.0, 44.0),
        (5.0, 67.0),
    ];
    let to_plot = |(x, y): (f64, f64)| {
        Point::new(
            PLOT.x0 + x / 5.0 * PLOT.width(),
            PLOT.y1 - y / 70.0 * PLOT.height(),
        )
    };

    // Background.
    ctx.set_fill_style(&FillStyle::new(opaque(0.97, 0.97, 0.95)))?;
    ctx.fill_path(&[
        Point::new(0.0, 0.0),
        Point::new(WIDTH, 0.0),
        Point::new(WIDTH, HEIGHT),
        Point::new(0.0, HEIGHT),
    ])?;

    // Dashed horizontal grid lines.
    ctx.set_line_style(
        &LineStyle::new(opaque(0.75, 0.75, 0.75)).with_dashes(vec![4.0, 4.0]),
    )?;
    for step in 1..5 {
        let y = PLOT.y1 - f64::from(step) / 5.0 * PLOT.height();
        ctx.stroke_path(&[Point::new(PLOT.x0, y), Point::new(PLOT.x1, y)])?;
    }

    // Axis frame.
    ctx.set_line_style(&LineStyle::new(opaque(0.2, 0.2, 0.2)).with_cap(LineCap::Square))?;
    ctx.stroke_path(&[
        Point::new(PLOT.x0, PLOT.y0),
        Point::new(PLOT.x0, PLOT.y1),
        Point::new(PLOT.x1, PLOT.y1),
    ])?;

    // The series, clipped to the plot area.
    ctx.preserved(|ctx| {
        ctx.set_clip_region(PLOT)?;
        ctx.set_line_style(&LineStyle::new(opaque(0.15, 0.35, 0.65)).with_width(2.0))?;
        let polyline: Vec<Point> = samples.iter().copied().map(to_plot).collect();
        ctx.stroke_path(&polyline)
    })?;

    let shapes = [
        PointShape::Circle,
        PointShape::Polygon {
            sides: 4,
            rotated: true,
        },
        PointShape::Plus,
        PointShape::Cross,
        PointShape::Star,
        PointShape::Polygon {
            sides: 6,
            rotated: false,
        },
    ];
    for (sample, shape) in samples.into_iter().zip(shapes) {
        let style = PointStyle::new(shape, 4.5)
            .with_fill_color(opaque(0.9, 0.85, 0.6))
            .with_border_color(opaque(0.15, 0.35, 0.65))
            .with_border_width(1.2);
        ctx.draw_marker(&style, to_plot(sample))?;
    }

    // Labels.
    ctx.set_font_style(
        &FontStyle::new(16.0)
            .with_weight(FontWeight::BOLD)
            .with_color(opaque(0.1, 0.1, 0.1)),
    )?;
    ctx.draw_text_block(
        HAnchor::Centre,
        VAnchor::Top,
        0.0,
        Point::new(WIDTH / 2.0, 10.0),
        "Widget throughput\n(units per hour)",
    )?;

    ctx.set_font_style(&FontStyle::new(12.0).with_family(FontFamily::SansSerif))?;
    for step in 0..=5 {
        let x = PLOT.x0 + f64::from(step) / 5.0 * PLOT.width();
        ctx.draw_text(
            HAnchor::Centre,
            VAnchor::Top,
            0.0,
            Point::new(x, PLOT.y1 + 6.0),
            &format!("{step}"),
        )?;
    }
    ctx.draw_text(
        HAnchor::Centre,
        VAnchor::Bottom,
        -90.0,
        Point::new(18.0, (PLOT.y0 + PLOT.y1) / 2.0),
        "throughput",
    )?;
    ctx.draw_text(
        HAnchor::Centre,
        VAnchor::Top,
        0.0,
        Point::new((PLOT.x0 + PLOT.x1) / 2.0, PLOT.y1 + 22.0),
        "hour",
    )
}
