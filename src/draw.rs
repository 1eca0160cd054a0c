//! Raster primitives for painting on an RGB canvas
//!
//! Shapes are described by an inclusive pixel bounding box, the same way a
//! classic 2D drawing API takes them. A pixel belongs to a shape when its
//! center lies inside it. Boxes may extend past the canvas; everything is
//! clipped, and degenerate boxes simply draw nothing.

use image::{Rgb, RgbImage};

/// Inclusive pixel box `[left, right] x [top, bottom]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl BoundingBox {
    pub fn new(left: i64, top: i64, right: i64, bottom: i64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Box of a circle with the given center and radius
    pub fn around(center_x: i64, center_y: i64, radius: i64) -> Self {
        Self::new(
            center_x - radius,
            center_y - radius,
            center_x + radius,
            center_y + radius,
        )
    }

    fn is_degenerate(&self) -> bool {
        self.right < self.left || self.bottom < self.top
    }
}

/// Continuous ellipse inscribed in a bounding box
#[derive(Debug, Clone, Copy)]
struct Ellipse {
    center_x: f64,
    center_y: f64,
    radius_x: f64,
    radius_y: f64,
}

impl Ellipse {
    fn inscribed(bbox: &BoundingBox) -> Self {
        // The box covers pixels left..=right, i.e. [left, right + 1) in continuous space
        let (left, right) = (bbox.left as f64, (bbox.right + 1) as f64);
        let (top, bottom) = (bbox.top as f64, (bbox.bottom + 1) as f64);
        Self {
            center_x: (left + right) / 2.0,
            center_y: (top + bottom) / 2.0,
            radius_x: (right - left) / 2.0,
            radius_y: (bottom - top) / 2.0,
        }
    }

    /// Same center, radii shrunk by `amount`
    fn inset(&self, amount: f64) -> Self {
        Self {
            radius_x: self.radius_x - amount,
            radius_y: self.radius_y - amount,
            ..*self
        }
    }

    fn is_empty(&self) -> bool {
        self.radius_x <= 0.0 || self.radius_y <= 0.0
    }

    fn contains(&self, x: f64, y: f64) -> bool {
        if self.is_empty() {
            return false;
        }
        let dx = (x - self.center_x) / self.radius_x;
        let dy = (y - self.center_y) / self.radius_y;
        dx * dx + dy * dy <= 1.0
    }

    /// Screen angle of a point in degrees, in [0, 360)
    ///
    /// 0 is at 3 o'clock and angles grow clockwise because y points down.
    fn angle_of(&self, x: f64, y: f64) -> f64 {
        (y - self.center_y)
            .atan2(x - self.center_x)
            .to_degrees()
            .rem_euclid(360.0)
    }
}

/// Color of row `y` in a vertical gradient of `height` rows
///
/// Each channel is `top + (bottom - top) * y / height`, truncated toward zero.
pub fn gradient_color(top: Rgb<u8>, bottom: Rgb<u8>, y: u32, height: u32) -> Rgb<u8> {
    if height == 0 {
        return top;
    }
    let t = y as f64 / height as f64;
    let channel = |i: usize| {
        let start = top[i] as f64;
        let end = bottom[i] as f64;
        (start + (end - start) * t).clamp(0.0, 255.0) as u8
    };
    Rgb([channel(0), channel(1), channel(2)])
}

/// Fill every row of the canvas with its gradient color
pub fn vertical_gradient(canvas: &mut RgbImage, top: Rgb<u8>, bottom: Rgb<u8>) {
    let height = canvas.height();
    for (y, row) in canvas.enumerate_rows_mut() {
        let color = gradient_color(top, bottom, y, height);
        for (_, _, pixel) in row {
            *pixel = color;
        }
    }
}

/// Draw the ellipse inscribed in `bbox`
///
/// `fill` paints the interior, `outline` strokes a ring of `(color, width)`
/// inward from the edge on top of it.
pub fn draw_ellipse(
    canvas: &mut RgbImage,
    bbox: BoundingBox,
    fill: Option<Rgb<u8>>,
    outline: Option<(Rgb<u8>, u32)>,
) {
    if bbox.is_degenerate() {
        return;
    }
    let outer = Ellipse::inscribed(&bbox);

    if let Some(color) = fill {
        paint_where(canvas, &bbox, color, |x, y| outer.contains(x, y));
    }

    if let Some((color, width)) = outline {
        stroke_ring(canvas, &bbox, color, width, |_| true);
    }
}

/// Stroke the part of the inscribed ellipse between `start` and `end` degrees
///
/// The sweep runs clockwise on screen from `start` to `end`; a sweep of 360
/// degrees or more strokes the whole ellipse. A `width` of 0 is drawn as a
/// one-pixel hairline.
pub fn draw_arc(
    canvas: &mut RgbImage,
    bbox: BoundingBox,
    start: f64,
    end: f64,
    color: Rgb<u8>,
    width: u32,
) {
    if bbox.is_degenerate() {
        return;
    }
    let full_turn = end - start >= 360.0;
    let sweep = (end - start).rem_euclid(360.0);
    stroke_ring(canvas, &bbox, color, width, |angle| {
        full_turn || (angle - start).rem_euclid(360.0) <= sweep
    });
}

fn stroke_ring<F>(
    canvas: &mut RgbImage,
    bbox: &BoundingBox,
    color: Rgb<u8>,
    width: u32,
    in_sweep: F,
) where
    F: Fn(f64) -> bool,
{
    let outer = Ellipse::inscribed(bbox);
    let inner = outer.inset(width.max(1) as f64);
    paint_where(canvas, bbox, color, |x, y| {
        outer.contains(x, y) && !inner.contains(x, y) && in_sweep(outer.angle_of(x, y))
    });
}

/// Paint every in-canvas pixel of `bbox` whose center passes `inside`
fn paint_where<F>(canvas: &mut RgbImage, bbox: &BoundingBox, color: Rgb<u8>, inside: F)
where
    F: Fn(f64, f64) -> bool,
{
    let (width, height) = (canvas.width() as i64, canvas.height() as i64);
    let x_range = bbox.left.max(0)..=bbox.right.min(width - 1);
    let y_range = bbox.top.max(0)..=bbox.bottom.min(height - 1);

    for y in y_range {
        for x in x_range.clone() {
            if inside(x as f64 + 0.5, y as f64 + 0.5) {
                canvas.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}
