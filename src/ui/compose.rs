//! CPU compositing of the preview frame
//!
//! Produces the exact pixels the widget shows: placeholder or aspect-filled
//! thumbnail, clipped to the rounded frame, with the decorative borders on
//! top. Transitions are blended here too, so the widget only ever displays
//! a finished RGBA buffer.

use image::{imageops, imageops::FilterType, Rgba, RgbaImage};

use super::geometry::aspect_fill_crop;
use super::style::FrameStyle;
use crate::thumbnail::Thumbnail;

/// Render the frame for the given thumbnail, or the placeholder if `None`
pub fn render(thumbnail: Option<&Thumbnail>, style: &FrameStyle) -> RgbaImage {
    let mut frame = match thumbnail {
        Some(thumbnail) => aspect_fill(thumbnail.image(), style.width, style.height),
        None => RgbaImage::from_pixel(style.width, style.height, style.fill),
    };

    clip(&mut frame, style);
    for border in &style.borders {
        let outline = style.border_outline(border);
        for (col, row, pixel) in frame.enumerate_pixels_mut() {
            let coverage = outline.stroke_coverage(col, row, border.line_width);
            blend_over(pixel, border.color, coverage);
        }
    }
    frame
}

/// Scale `source` uniformly to cover `width`x`height`, cropping the overflow
pub fn aspect_fill(source: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let crop = aspect_fill_crop(source.width(), source.height(), width, height);
    let visible = imageops::crop_imm(source, crop.x, crop.y, crop.width, crop.height).to_image();
    if visible.dimensions() == (width, height) {
        return visible;
    }
    imageops::resize(&visible, width, height, FilterType::Triangle)
}

/// Linear blend from `from` to `to`; `t` = 0 is `from`, 1 is `to`
///
/// Frames of different sizes cannot be blended, so `to` wins outright.
pub fn cross_fade(from: &RgbaImage, to: &RgbaImage, t: f32) -> RgbaImage {
    let t = t.clamp(0.0, 1.0);
    if from.dimensions() != to.dimensions() || t >= 1.0 {
        return to.clone();
    }

    let mut out = to.clone();
    for ((dst, a), b) in out.pixels_mut().zip(from.pixels()).zip(to.pixels()) {
        for c in 0..4 {
            dst[c] = lerp(a[c], b[c], t);
        }
    }
    out
}

/// Copy of `frame` with its alpha scaled by `opacity`
pub fn with_opacity(frame: &RgbaImage, opacity: f32) -> RgbaImage {
    let opacity = opacity.clamp(0.0, 1.0);
    let mut out = frame.clone();
    if opacity < 1.0 {
        for pixel in out.pixels_mut() {
            pixel[3] = (pixel[3] as f32 * opacity).round() as u8;
        }
    }
    out
}

fn clip(frame: &mut RgbaImage, style: &FrameStyle) {
    let outline = style.clip();
    for (col, row, pixel) in frame.enumerate_pixels_mut() {
        let coverage = outline.fill_coverage(col, row);
        if coverage < 1.0 {
            pixel[3] = (pixel[3] as f32 * coverage).round() as u8;
        }
    }
}

fn lerp(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round() as u8
}

/// Source-over blend of `color` at `coverage` onto `dst` (straight alpha)
fn blend_over(dst: &mut Rgba<u8>, color: Rgba<u8>, coverage: f32) {
    let src_a = color[3] as f32 / 255.0 * coverage;
    if src_a <= 0.0 {
        return;
    }
    let dst_a = dst[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);

    for c in 0..3 {
        let blended =
            (color[c] as f32 * src_a + dst[c] as f32 * dst_a * (1.0 - src_a)) / out_a;
        dst[c] = blended.round().clamp(0.0, 255.0) as u8;
    }
    dst[3] = (out_a * 255.0).round() as u8;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> FrameStyle {
        FrameStyle::new(160, (16, 10))
    }

    fn solid_thumbnail(width: u32, height: u32, color: [u8; 4]) -> Thumbnail {
        Thumbnail::new(RgbaImage::from_pixel(width, height, Rgba(color)))
    }

    #[test]
    fn test_placeholder_fill() {
        let frame = render(None, &style());
        assert_eq!(frame.dimensions(), (160, 100));
        assert_eq!(frame.get_pixel(80, 50).0, [0, 0, 0, 255]);
    }

    #[test]
    fn test_loaded_fills_frame() {
        let thumbnail = solid_thumbnail(300, 188, [200, 10, 10, 255]);
        let frame = render(Some(&thumbnail), &style());
        assert_eq!(frame.dimensions(), (160, 100));
        assert_eq!(frame.get_pixel(80, 50).0, [200, 10, 10, 255]);
    }

    #[test]
    fn test_top_corners_clipped_bottom_corners_square() {
        let thumbnail = solid_thumbnail(300, 188, [255, 255, 255, 255]);
        let frame = render(Some(&thumbnail), &style());

        assert_eq!(frame.get_pixel(0, 0)[3], 0);
        assert_eq!(frame.get_pixel(159, 0)[3], 0);
        assert_eq!(frame.get_pixel(0, 99)[3], 255);
        assert_eq!(frame.get_pixel(159, 99)[3], 255);
    }

    #[test]
    fn test_borders_drawn_without_thumbnail() {
        let mut style = FrameStyle::new(160, (16, 10));
        style.fill = Rgba([255, 255, 255, 255]);
        let frame = render(None, &style);

        // Bezel covers the top five rows of a white fill
        assert_eq!(frame.get_pixel(80, 3).0, [0, 0, 0, 255]);
        // Faint highlight lifts the outermost row slightly
        let rim = frame.get_pixel(80, 0);
        assert!(rim[0] > 0 && rim[0] < 60);
        assert_eq!(rim[3], 255);
        // Inside the bezel the fill is untouched
        assert_eq!(frame.get_pixel(80, 5).0, [255, 255, 255, 255]);
        assert_eq!(frame.get_pixel(80, 50).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_square_source_is_center_cropped_not_stretched() {
        // Red band across the top and bottom fifth, green in the middle
        let mut pixels = RgbaImage::from_pixel(100, 100, Rgba([0, 255, 0, 255]));
        for (_, row, pixel) in pixels.enumerate_pixels_mut() {
            if row < 15 || row >= 85 {
                *pixel = Rgba([255, 0, 0, 255]);
            }
        }

        let filled = aspect_fill(&pixels, 160, 100);
        assert_eq!(filled.dimensions(), (160, 100));
        // Bands fall outside the centred 100x63 crop
        assert_eq!(filled.get_pixel(80, 0).0, [0, 255, 0, 255]);
        assert_eq!(filled.get_pixel(80, 99).0, [0, 255, 0, 255]);
        assert_eq!(filled.get_pixel(0, 50).0, [0, 255, 0, 255]);
    }

    #[test]
    fn test_cross_fade_endpoints() {
        let black = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        let white = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255]));

        assert_eq!(cross_fade(&black, &white, 0.0), black);
        assert_eq!(cross_fade(&black, &white, 1.0), white);
        let mid = cross_fade(&black, &white, 0.5);
        assert_eq!(mid.get_pixel(1, 1).0, [128, 128, 128, 255]);
    }

    #[test]
    fn test_with_opacity() {
        let frame = RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 200]));
        assert_eq!(with_opacity(&frame, 0.5).get_pixel(0, 0).0, [10, 20, 30, 100]);
        assert_eq!(with_opacity(&frame, 1.0), frame);
        assert_eq!(with_opacity(&frame, 0.0).get_pixel(1, 1)[3], 0);
    }
}
