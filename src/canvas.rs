use crate::error::{ArcmarkError, ArcmarkResult};

/// Straight (non-premultiplied) RGBA8.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Square RGBA8 pixel buffer, row-major, one byte per channel.
///
/// Every drawing primitive clips to the canvas bounds; coordinates outside
/// `[0, size)` are skipped, never written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    size: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    pub fn new(size: u32, fill: Rgba) -> ArcmarkResult<Self> {
        if size == 0 {
            return Err(ArcmarkError::invalid_size("canvas size must be > 0"));
        }
        let px = fill.to_bytes();
        let pixels = px.repeat((size as usize) * (size as usize));
        Ok(Self { size, pixels })
    }

    /// Edge length in pixels; the canvas is always square.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Raw buffer, exactly `4 * size * size` bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.size || y >= self.size {
            return None;
        }
        let i = (y as usize * self.size as usize + x as usize) * 4;
        Some(Rgba::new(
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ))
    }

    /// Paint the intersection of `[x, x+w) x [y, y+h)` with the canvas.
    /// Empty intersections (including non-positive extents) are a no-op.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba) {
        let size = i64::from(self.size);
        let x0 = i64::from(x).max(0);
        let y0 = i64::from(y).max(0);
        let x1 = (i64::from(x) + i64::from(w)).min(size);
        let y1 = (i64::from(y) + i64::from(h)).min(size);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let stride = self.size as usize * 4;
        let px = color.to_bytes();
        for yy in y0..y1 {
            let row = yy as usize * stride;
            let span = &mut self.pixels[row + x0 as usize * 4..row + x1 as usize * 4];
            for chunk in span.chunks_exact_mut(4) {
                chunk.copy_from_slice(&px);
            }
        }
    }

    /// Draw a rectangular border as four strips of thickness `stroke`.
    /// The corner overlap is harmless since all strips share one color.
    pub fn stroke_rect(&mut self, x: i32, y: i32, w: i32, h: i32, stroke: i32, color: Rgba) {
        // Far-edge strip origins are widened to i64 like fill_rect's clipping;
        // anything past the i32 range is off-canvas in the same direction.
        let bottom = clamp_coord(i64::from(y) + i64::from(h) - i64::from(stroke));
        let right = clamp_coord(i64::from(x) + i64::from(w) - i64::from(stroke));
        self.fill_rect(x, y, w, stroke, color);
        self.fill_rect(x, bottom, w, stroke, color);
        self.fill_rect(x, y, stroke, h, color);
        self.fill_rect(right, y, stroke, h, color);
    }

    /// Paint every pixel whose squared distance to `(cx, cy)` is <= `radius^2`.
    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Rgba) {
        self.paint_annulus(cx, cy, radius, 0, color);
    }

    /// Paint the ring with squared distance in `[max(0, radius-stroke)^2, radius^2]`.
    /// A stroke >= radius degenerates to a full disc.
    pub fn stroke_circle(&mut self, cx: i32, cy: i32, radius: i32, stroke: i32, color: Rgba) {
        let inner = (i64::from(radius) - i64::from(stroke)).max(0);
        self.paint_annulus(cx, cy, radius, inner, color);
    }

    fn paint_annulus(&mut self, cx: i32, cy: i32, radius: i32, inner: i64, color: Rgba) {
        let size = i64::from(self.size);
        let (cx, cy, radius) = (i64::from(cx), i64::from(cy), i64::from(radius));
        let outer_sq = radius * radius;
        let inner_sq = inner * inner;
        let y_min = (cy - radius).max(0);
        let y_max = (cy + radius).min(size - 1);
        let x_min = (cx - radius).max(0);
        let x_max = (cx + radius).min(size - 1);
        if radius < 0 || y_min > y_max || x_min > x_max {
            return;
        }

        let stride = self.size as usize * 4;
        let px = color.to_bytes();
        for y in y_min..=y_max {
            let dy = y - cy;
            let row = y as usize * stride;
            for x in x_min..=x_max {
                let dx = x - cx;
                let dist_sq = dx * dx + dy * dy;
                if inner_sq <= dist_sq && dist_sq <= outer_sq {
                    let i = row + x as usize * 4;
                    self.pixels[i..i + 4].copy_from_slice(&px);
                }
            }
        }
    }
}

fn clamp_coord(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Rgba = Rgba::opaque(10, 20, 30);
    const INK: Rgba = Rgba::opaque(200, 100, 50);

    #[test]
    fn new_rejects_zero_size() {
        assert!(matches!(
            Canvas::new(0, BG),
            Err(ArcmarkError::InvalidSize(_))
        ));
    }

    #[test]
    fn new_fills_every_pixel() {
        let c = Canvas::new(3, BG).unwrap();
        assert_eq!(c.pixels().len(), 3 * 3 * 4);
        for chunk in c.pixels().chunks_exact(4) {
            assert_eq!(chunk, BG.to_bytes());
        }
    }

    #[test]
    fn fill_rect_clips_to_bounds() {
        let mut c = Canvas::new(4, BG).unwrap();
        c.fill_rect(-2, -2, 4, 4, INK);
        assert_eq!(c.pixel(0, 0), Some(INK));
        assert_eq!(c.pixel(1, 1), Some(INK));
        assert_eq!(c.pixel(2, 0), Some(BG));
        assert_eq!(c.pixel(0, 2), Some(BG));
    }

    #[test]
    fn offscreen_shapes_leave_canvas_untouched() {
        let before = Canvas::new(8, BG).unwrap();

        let mut c = before.clone();
        c.fill_rect(20, 20, 5, 5, INK);
        c.fill_rect(-10, -10, 5, 5, INK);
        c.fill_circle(-30, 4, 6, INK);
        c.stroke_circle(40, 40, 6, 2, INK);
        assert_eq!(c, before);
    }

    #[test]
    fn negative_extents_are_a_no_op() {
        let before = Canvas::new(8, BG).unwrap();

        let mut c = before.clone();
        c.fill_rect(2, 2, -3, 4, INK);
        c.fill_rect(2, 2, 4, 0, INK);
        c.fill_circle(4, 4, -1, INK);
        c.stroke_circle(4, 4, -1, 2, INK);
        assert_eq!(c, before);
    }

    #[test]
    fn stroke_rect_paints_border_only() {
        let mut c = Canvas::new(8, BG).unwrap();
        c.stroke_rect(1, 1, 6, 6, 1, INK);

        assert_eq!(c.pixel(1, 1), Some(INK)); // corner
        assert_eq!(c.pixel(4, 1), Some(INK)); // top edge
        assert_eq!(c.pixel(1, 4), Some(INK)); // left edge
        assert_eq!(c.pixel(6, 6), Some(INK)); // far corner
        assert_eq!(c.pixel(3, 3), Some(BG)); // interior
        assert_eq!(c.pixel(0, 0), Some(BG)); // outside
    }

    #[test]
    fn stroke_rect_clips_extreme_extents_instead_of_overflowing() {
        let mut c = Canvas::new(8, BG).unwrap();
        c.stroke_rect(0, 0, i32::MAX, i32::MAX, 1, INK);
        assert_eq!(c.pixel(4, 0), Some(INK)); // top strip
        assert_eq!(c.pixel(0, 4), Some(INK)); // left strip
        assert_eq!(c.pixel(4, 4), Some(BG)); // far strips are off-canvas

        let before = Canvas::new(8, BG).unwrap();
        let mut c = before.clone();
        c.stroke_rect(i32::MIN, i32::MIN, i32::MAX, i32::MAX, 3, INK);
        assert_eq!(c, before);
    }

    #[test]
    fn stroke_circle_paints_exactly_the_annulus() {
        let (cx, cy, r, s) = (10i64, 10i64, 6i64, 2i64);
        let mut c = Canvas::new(21, BG).unwrap();
        c.stroke_circle(cx as i32, cy as i32, r as i32, s as i32, INK);

        let inner = (r - s).max(0);
        for y in 0..21i64 {
            for x in 0..21i64 {
                let d = (x - cx) * (x - cx) + (y - cy) * (y - cy);
                let expect = if inner * inner <= d && d <= r * r {
                    INK
                } else {
                    BG
                };
                assert_eq!(c.pixel(x as u32, y as u32), Some(expect), "at ({x},{y})");
            }
        }
    }

    #[test]
    fn oversized_stroke_degenerates_to_filled_circle() {
        let mut ringed = Canvas::new(16, BG).unwrap();
        ringed.stroke_circle(8, 8, 5, 9, INK);

        let mut filled = Canvas::new(16, BG).unwrap();
        filled.fill_circle(8, 8, 5, INK);

        assert_eq!(ringed, filled);
    }
}
