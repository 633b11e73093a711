//! Frame geometry: aspect-fill cropping and rounded-rectangle distance fields
//!
//! Coordinates are in pixels with the origin at the top-left and y growing
//! downwards, so "top" corners have the smaller y.

/// Region of a source image, in source pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Part of a `src_width`x`src_height` image that fills a
/// `frame_width`x`frame_height` frame when scaled uniformly
///
/// The image is scaled until it covers the frame on both axes; the overflow
/// on the longer axis is cropped equally from both sides.
pub fn aspect_fill_crop(
    src_width: u32,
    src_height: u32,
    frame_width: u32,
    frame_height: u32,
) -> CropRect {
    if src_width == 0 || src_height == 0 || frame_width == 0 || frame_height == 0 {
        return CropRect {
            x: 0,
            y: 0,
            width: src_width,
            height: src_height,
        };
    }

    let scale = f64::max(
        frame_width as f64 / src_width as f64,
        frame_height as f64 / src_height as f64,
    );
    let width = ((frame_width as f64 / scale).round() as u32).clamp(1, src_width);
    let height = ((frame_height as f64 / scale).round() as u32).clamp(1, src_height);

    CropRect {
        x: (src_width - width) / 2,
        y: (src_height - height) / 2,
        width,
        height,
    }
}

/// Per-corner radii
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    /// Rounded top corners, square bottom corners
    pub fn top(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: 0.0,
            bottom_left: 0.0,
        }
    }
}

/// Rectangle with individually rounded corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub radii: CornerRadii,
}

impl RoundedRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32, radii: CornerRadii) -> Self {
        Self {
            x,
            y,
            width,
            height,
            radii,
        }
    }

    /// Shrink by `amount` on every side, keeping the radii
    pub fn inset(&self, amount: f32) -> Self {
        Self {
            x: self.x + amount,
            y: self.y + amount,
            width: (self.width - 2.0 * amount).max(0.0),
            height: (self.height - 2.0 * amount).max(0.0),
            radii: self.radii,
        }
    }

    /// Signed distance from (`px`, `py`) to the outline
    /// - Negative inside, positive outside, zero on the edge
    pub fn signed_distance(&self, px: f32, py: f32) -> f32 {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        let dx = px - (self.x + half_w);
        let dy = py - (self.y + half_h);

        let radius = match (dx < 0.0, dy < 0.0) {
            (true, true) => self.radii.top_left,
            (false, true) => self.radii.top_right,
            (false, false) => self.radii.bottom_right,
            (true, false) => self.radii.bottom_left,
        }
        .min(half_w)
        .min(half_h)
        .max(0.0);

        let qx = dx.abs() - half_w + radius;
        let qy = dy.abs() - half_h + radius;
        let outside = qx.max(0.0).hypot(qy.max(0.0));
        let inside = qx.max(qy).min(0.0);
        outside + inside - radius
    }

    /// Fraction of the pixel at (`col`, `row`) covered by the filled shape
    pub fn fill_coverage(&self, col: u32, row: u32) -> f32 {
        let d = self.signed_distance(col as f32 + 0.5, row as f32 + 0.5);
        (0.5 - d).clamp(0.0, 1.0)
    }

    /// Fraction of the pixel at (`col`, `row`) covered by a centred stroke
    pub fn stroke_coverage(&self, col: u32, row: u32, line_width: f32) -> f32 {
        let d = self.signed_distance(col as f32 + 0.5, row as f32 + 0.5);
        (line_width / 2.0 + 0.5 - d.abs()).clamp(0.0, 1.0)
    }
}
