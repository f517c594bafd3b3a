//! Renders an [`UnrolledNet`] as a printable chart on a single A4-landscape
//! PDF page: equal-aspect axes with a dashed grid, the bottom edge and both
//! cut curves, a legend outside the plot area, and dimension annotations
//! under the baseline.
//!
//! Everything is drawn in PDF points (1/72 inch) on a cairo [`PdfSurface`];
//! the surface is non-interactive, so a headless run and a desktop run
//! produce the same bytes.

use crate::errors::RenderError;
use crate::float_types::Real;
use crate::net::{NetParams, UnrolledNet};
use cairo::{Context, FontSlant, FontWeight, PdfMetadata, PdfSurface};
use nalgebra::Point2;
use std::path::Path;
use tracing::info;

// A4 landscape, in PDF points (11.69 x 8.27 inch)
const PAGE_LONG_EDGE: f64 = 11.69 * 72.0;
const PAGE_SHORT_EDGE: f64 = 8.27 * 72.0;

const MARGIN: f64 = 36.0;
const TITLE_AREA: f64 = 40.0;
const LEGEND_WIDTH: f64 = 140.0;
const AXIS_LABEL_AREA: f64 = 46.0;
const BASELINE_AREA: f64 = 58.0;

const GRID_GRAY: f64 = 0.72;
const CUT_RED: (f64, f64, f64) = (0.85, 0.1, 0.1);
const EDGE_BLUE: (f64, f64, f64) = (0.1, 0.1, 0.85);

/// Maps net coordinates (mm) onto page coordinates (points), equal aspect,
/// y growing upward.
struct PageFrame {
    scale: f64,
    origin_x: f64,
    origin_y: f64,
}

impl PageFrame {
    /// Fits the world rectangle `[0, width] x [0, height]` into the plot
    /// area, centered, preserving aspect ratio.
    fn fit(width: Real, height: Real) -> Self {
        let plot_w = PAGE_LONG_EDGE - 2.0 * MARGIN - LEGEND_WIDTH - AXIS_LABEL_AREA;
        let plot_h = PAGE_SHORT_EDGE - 2.0 * MARGIN - TITLE_AREA - BASELINE_AREA;
        let scale = (plot_w / width as f64).min(plot_h / height as f64);
        let origin_x = MARGIN + AXIS_LABEL_AREA + (plot_w - scale * width as f64) / 2.0;
        let origin_y = PAGE_SHORT_EDGE
            - MARGIN
            - BASELINE_AREA
            - (plot_h - scale * height as f64) / 2.0;
        PageFrame {
            scale,
            origin_x,
            origin_y,
        }
    }

    fn map(&self, x: Real, y: Real) -> (f64, f64) {
        (
            self.origin_x + self.scale * x as f64,
            self.origin_y - self.scale * y as f64,
        )
    }
}

/// Grid spacing in mm: the 1/2/5 ladder closest above `range / 6`.
fn tick_step(range: f64) -> f64 {
    let raw = range / 6.0;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let step = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    step * magnitude
}

fn show_text_centered(ctx: &Context, x: f64, y: f64, text: &str) -> Result<(), cairo::Error> {
    let extents = ctx.text_extents(text)?;
    ctx.move_to(x - extents.width() / 2.0, y);
    ctx.show_text(text)
}

fn show_text_right_aligned(
    ctx: &Context,
    x: f64,
    y: f64,
    text: &str,
) -> Result<(), cairo::Error> {
    let extents = ctx.text_extents(text)?;
    ctx.move_to(x - extents.width(), y);
    ctx.show_text(text)
}

fn draw_polyline(
    ctx: &Context,
    frame: &PageFrame,
    points: &[Point2<Real>],
) -> Result<(), cairo::Error> {
    let (x0, y0) = frame.map(points[0].x, points[0].y);
    ctx.move_to(x0, y0);
    for point in &points[1..] {
        let (x, y) = frame.map(point.x, point.y);
        ctx.line_to(x, y);
    }
    ctx.stroke()
}

fn draw_grid_and_axes(
    ctx: &Context,
    frame: &PageFrame,
    width: Real,
    height: Real,
) -> Result<(), cairo::Error> {
    let (left, bottom) = frame.map(0.0, 0.0);
    let (right, top) = frame.map(width, height);

    let x_step = tick_step(width as f64);
    let y_step = tick_step(height as f64);

    // dashed grid
    ctx.set_source_rgb(GRID_GRAY, GRID_GRAY, GRID_GRAY);
    ctx.set_line_width(0.5);
    ctx.set_dash(&[3.0, 3.0], 0.0);
    let mut x = x_step;
    while x < width as f64 {
        let (px, _) = frame.map(x as Real, 0.0);
        ctx.move_to(px, bottom);
        ctx.line_to(px, top);
        ctx.stroke()?;
        x += x_step;
    }
    let mut y = y_step;
    while y < height as f64 {
        let (_, py) = frame.map(0.0, y as Real);
        ctx.move_to(left, py);
        ctx.line_to(right, py);
        ctx.stroke()?;
        y += y_step;
    }
    ctx.set_dash(&[], 0.0);

    // axes box
    ctx.set_source_rgb(0.0, 0.0, 0.0);
    ctx.set_line_width(1.0);
    ctx.rectangle(left, top, right - left, bottom - top);
    ctx.stroke()?;

    // tick labels
    ctx.set_font_size(9.0);
    let mut x = 0.0;
    while x <= width as f64 + 1e-9 {
        let (px, _) = frame.map(x as Real, 0.0);
        show_text_centered(ctx, px, bottom + 12.0, &format!("{}", x))?;
        x += x_step;
    }
    let mut y = 0.0;
    while y <= height as f64 + 1e-9 {
        let (_, py) = frame.map(0.0, y as Real);
        show_text_right_aligned(ctx, left - 5.0, py + 3.0, &format!("{}", y))?;
        y += y_step;
    }

    // axis labels
    ctx.set_font_size(12.0);
    show_text_centered(ctx, (left + right) / 2.0, bottom + 30.0, "Width (mm)")?;
    ctx.save()?;
    ctx.translate(left - 32.0, (top + bottom) / 2.0);
    ctx.rotate(-std::f64::consts::FRAC_PI_2);
    show_text_centered(ctx, 0.0, 0.0, "Height (mm)")?;
    ctx.restore()
}

fn draw_legend(
    ctx: &Context,
    x: f64,
    y: f64,
    entries: &[(&str, (f64, f64, f64), bool)],
) -> Result<(), cairo::Error> {
    const ROW: f64 = 18.0;
    const SAMPLE: f64 = 24.0;
    const PAD: f64 = 8.0;

    ctx.set_font_size(10.0);
    let mut label_width: f64 = 0.0;
    for (label, _, _) in entries {
        label_width = label_width.max(ctx.text_extents(label)?.width());
    }
    let box_w = PAD + SAMPLE + 6.0 + label_width + PAD;
    let box_h = PAD + ROW * entries.len() as f64 + PAD - 6.0;

    ctx.set_source_rgb(0.0, 0.0, 0.0);
    ctx.set_line_width(0.75);
    ctx.rectangle(x, y, box_w, box_h);
    ctx.stroke()?;

    for (i, (label, color, dashed)) in entries.iter().enumerate() {
        let row_y = y + PAD + ROW * i as f64 + 4.0;
        ctx.set_source_rgb(color.0, color.1, color.2);
        ctx.set_line_width(2.0);
        if *dashed {
            ctx.set_dash(&[6.0, 4.0], 0.0);
        }
        ctx.move_to(x + PAD, row_y);
        ctx.line_to(x + PAD + SAMPLE, row_y);
        ctx.stroke()?;
        ctx.set_dash(&[], 0.0);

        ctx.set_source_rgb(0.0, 0.0, 0.0);
        ctx.move_to(x + PAD + SAMPLE + 6.0, row_y + 3.0);
        ctx.show_text(label)?;
    }
    Ok(())
}

/// Draws the net and writes the single-page PDF to `path`.
///
/// The document carries `Creator`/`Title` metadata identifying it as a
/// lampshade cutting template. Any cairo failure, including being unable to
/// write the file, comes back as [`RenderError`].
pub fn render_net(
    net: &UnrolledNet,
    params: &NetParams,
    path: &Path,
) -> Result<(), RenderError> {
    info!("creating plot");

    let surface = PdfSurface::new(PAGE_LONG_EDGE, PAGE_SHORT_EDGE, path)?;
    surface.set_metadata(PdfMetadata::Creator, "Lampshade Generator")?;
    surface.set_metadata(PdfMetadata::Title, "Lampshade Cutting Template")?;
    let ctx = Context::new(&surface)?;

    ctx.set_source_rgb(1.0, 1.0, 1.0);
    ctx.paint()?;

    let frame = PageFrame::fit(net.perimeter, params.height);
    ctx.select_font_face("sans-serif", FontSlant::Normal, FontWeight::Normal);

    draw_grid_and_axes(&ctx, &frame, net.perimeter, params.height)?;

    // title
    ctx.set_source_rgb(0.0, 0.0, 0.0);
    ctx.select_font_face("sans-serif", FontSlant::Normal, FontWeight::Bold);
    ctx.set_font_size(14.0);
    show_text_centered(
        &ctx,
        PAGE_LONG_EDGE / 2.0,
        MARGIN + 14.0,
        "Lampshade Net with Height-Limited Cuts",
    )?;
    ctx.select_font_face("sans-serif", FontSlant::Normal, FontWeight::Normal);

    // bottom edge
    ctx.set_source_rgb(EDGE_BLUE.0, EDGE_BLUE.1, EDGE_BLUE.2);
    ctx.set_line_width(2.0);
    draw_polyline(&ctx, &frame, &net.bottom_edge())?;

    // cut curves
    ctx.set_source_rgb(CUT_RED.0, CUT_RED.1, CUT_RED.2);
    draw_polyline(&ctx, &frame, &net.cut1)?;
    ctx.set_dash(&[6.0, 4.0], 0.0);
    draw_polyline(&ctx, &frame, &net.cut2)?;
    ctx.set_dash(&[], 0.0);

    // dimension annotations under the baseline
    ctx.set_source_rgb(0.0, 0.0, 0.0);
    ctx.set_font_size(10.0);
    let (ax, ay) = frame.map(0.0, 0.0);
    ctx.move_to(ax, ay + 44.0);
    ctx.show_text(&format!("Major Axis: {}mm", params.major_axis))?;
    let (bx, _) = frame.map(net.perimeter / 2.0, 0.0);
    ctx.move_to(bx, ay + 44.0);
    ctx.show_text(&format!("Minor Axis: {}mm", params.minor_axis))?;

    let cut1_label = format!("Cut 1 ({}\u{b0})", params.cut1.angle_deg);
    let cut2_label = format!("Cut 2 ({}\u{b0})", params.cut2.angle_deg);
    let legend_entries = [
        ("Bottom Edge", EDGE_BLUE, false),
        (cut1_label.as_str(), CUT_RED, false),
        (cut2_label.as_str(), CUT_RED, true),
    ];
    draw_legend(
        &ctx,
        PAGE_LONG_EDGE - MARGIN - LEGEND_WIDTH + 10.0,
        MARGIN + TITLE_AREA,
        &legend_entries,
    )?;

    surface.finish();
    info!(path = %path.display(), "PDF saved");
    Ok(())
}
