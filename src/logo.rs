use crate::canvas::{Canvas, Rgba};
use crate::error::ArcmarkResult;

/// Unit grid the mark is designed on; all geometry below is in these units.
pub const REFERENCE_SIZE: u32 = 512;

pub const PANEL: Rgba = Rgba::opaque(248, 245, 238);
pub const LINE: Rgba = Rgba::opaque(16, 16, 16);
pub const INNER: Rgba = Rgba::opaque(236, 234, 228);
pub const BLUE: Rgba = Rgba::opaque(30, 97, 255);
pub const RED: Rgba = Rgba::opaque(226, 71, 57);
pub const YELLOW: Rgba = Rgba::opaque(244, 210, 11);
pub const MINT: Rgba = Rgba::opaque(71, 195, 162);

/// Scale a reference-grid value to a target canvas size, rounding half-up.
///
/// Clamped to >= 1 so no stroke or shape collapses to nothing, even at 16 px.
pub fn scaled(value: u32, size: u32) -> i32 {
    let num = u64::from(value) * u64::from(size) + u64::from(REFERENCE_SIZE / 2);
    (num / u64::from(REFERENCE_SIZE)).max(1) as i32
}

/// Rasterize the arcade mark at `size` x `size` pixels.
///
/// Pure function of `size`: same input, byte-identical canvas. Shapes are
/// painted back to front, strokes after fills so outlines stay on top.
#[tracing::instrument]
pub fn compose_logo(size: u32) -> ArcmarkResult<Canvas> {
    let mut canvas = Canvas::new(size, PANEL)?;
    let s = |v: u32| scaled(v, size);
    let edge = size as i32;

    let margin = s(32);
    let frame = edge - 2 * margin;
    canvas.stroke_rect(margin, margin, frame, frame, s(20), LINE);

    let inset = s(86);
    let panel = edge - 2 * inset;
    canvas.fill_rect(inset, inset, panel, panel, INNER);
    canvas.stroke_rect(inset, inset, panel, panel, s(14), LINE);

    canvas.fill_circle(s(188), s(170), s(44), BLUE);
    canvas.stroke_circle(s(188), s(170), s(44), s(12), LINE);

    canvas.fill_circle(s(324), s(170), s(44), RED);
    canvas.stroke_circle(s(324), s(170), s(44), s(12), LINE);

    canvas.fill_rect(s(172), s(258), s(168), s(58), YELLOW);
    canvas.stroke_rect(s(172), s(258), s(168), s(58), s(12), LINE);

    canvas.fill_circle(s(256), s(366), s(30), MINT);
    canvas.stroke_circle(s(256), s(366), s(30), s(12), LINE);

    Ok(canvas)
}
