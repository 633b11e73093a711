//! Aspect-preserving thumbnail resize
//!
//! A [`SourceImage`] is consumed by [`resize`] and turned into a
//! [`Thumbnail`] of the requested width. The height always follows the
//! source aspect ratio, rounded to the nearest pixel.

use image::{imageops::FilterType, RgbaImage};
use std::fmt;
use std::sync::Arc;

/// Largest thumbnail, in pixels, that `resize` will allocate
pub const MAX_THUMBNAIL_PIXELS: u64 = 4096 * 4096;

/// Decoded desktop image at its native size
#[derive(Debug, Clone, PartialEq)]
pub struct SourceImage {
    pixels: RgbaImage,
}

impl SourceImage {
    pub fn new(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

/// Downscaled desktop image, ready for display
///
/// Cloning is cheap: the pixel buffer is shared, so the same thumbnail can sit
/// in the published state and in any number of reader snapshots.
#[derive(Clone, PartialEq)]
pub struct Thumbnail {
    pixels: Arc<RgbaImage>,
}

impl Thumbnail {
    pub fn new(pixels: RgbaImage) -> Self {
        Self {
            pixels: Arc::new(pixels),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.pixels
    }
}

impl fmt::Debug for Thumbnail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Thumbnail")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

/// Height of a thumbnail `target_width` wide cut from a `width`x`height` image
///
/// Never returns 0, so an extremely wide source still yields one row.
pub fn thumbnail_height(width: u32, height: u32, target_width: u32) -> u32 {
    let exact = target_width as f64 * height as f64 / width as f64;
    (exact.round() as u32).max(1)
}

/// Resize `source` to `target_width`, preserving its aspect ratio
///
/// Returns `None` when the source has no drawable representation at that
/// size: empty source, zero target width, or an output larger than
/// [`MAX_THUMBNAIL_PIXELS`]. A source that already has the requested width is
/// passed through untouched.
pub fn resize(source: SourceImage, target_width: u32) -> Option<Thumbnail> {
    let (width, height) = (source.width(), source.height());
    if width == 0 || height == 0 || target_width == 0 {
        return None;
    }

    let target_height = thumbnail_height(width, height, target_width);
    if target_width as u64 * target_height as u64 > MAX_THUMBNAIL_PIXELS {
        return None;
    }
    if (width, height) == (target_width, target_height) {
        return Some(Thumbnail::new(source.pixels));
    }

    let resized = image::imageops::resize(
        &source.pixels,
        target_width,
        target_height,
        FilterType::Lanczos3,
    );
    Some(Thumbnail::new(resized))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid(width: u32, height: u32, color: [u8; 4]) -> SourceImage {
        SourceImage::new(RgbaImage::from_pixel(width, height, Rgba(color)))
    }

    #[test]
    fn test_desktop_sized_source() {
        let thumbnail = resize(solid(1920, 1200, [10, 20, 30, 255]), 300).unwrap();
        assert_eq!(thumbnail.width(), 300);
        assert_eq!(thumbnail.height(), 188);
    }

    #[test]
    fn test_height_follows_aspect_ratio() {
        let cases = [
            (100, 100, 50, 50),
            (400, 300, 120, 90),
            (300, 400, 120, 160),
            (7, 3, 10, 4),
            (1000, 1, 10, 1),
        ];
        for (w, h, target, expected) in cases {
            assert_eq!(thumbnail_height(w, h, target), expected, "{}x{} -> {}", w, h, target);
            let thumbnail = resize(solid(w, h, [0, 0, 0, 255]), target).unwrap();
            assert_eq!((thumbnail.width(), thumbnail.height()), (target, expected));
        }
    }

    #[test]
    fn test_same_width_is_unchanged() {
        let mut pixels = RgbaImage::from_pixel(40, 25, Rgba([200, 100, 50, 255]));
        pixels.put_pixel(3, 7, Rgba([1, 2, 3, 4]));
        let source = SourceImage::new(pixels.clone());

        let thumbnail = resize(source, 40).unwrap();
        assert_eq!(thumbnail.image(), &pixels);
    }

    #[test]
    fn test_solid_color_survives_resampling() {
        let thumbnail = resize(solid(64, 40, [255, 0, 0, 255]), 16).unwrap();
        let center = thumbnail.image().get_pixel(8, 5);
        assert_eq!(center.0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_no_drawable_representation() {
        assert!(resize(solid(0, 0, [0; 4]), 300).is_none());
        assert!(resize(solid(10, 10, [0; 4]), 0).is_none());
    }

    #[test]
    fn test_oversized_output_is_rejected() {
        // 1x60000 at width 300 would need an 18 million row buffer
        assert!(resize(solid(1, 60_000, [0, 0, 0, 255]), 300).is_none());
        assert!(resize(solid(16, 10, [0, 0, 0, 255]), 100_000).is_none());

        let tall = resize(solid(10, 40, [0, 0, 0, 255]), 300).unwrap();
        assert_eq!((tall.width(), tall.height()), (300, 1200));
    }
}
