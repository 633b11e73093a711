//! Visual constants of the preview frame

use image::Rgba;

use super::geometry::{CornerRadii, RoundedRect};
use crate::config::PreviewConfig;

/// Radius of the frame's rounded top corners
pub const CLIP_RADIUS: f32 = 12.0;

/// Placeholder background
pub const PLACEHOLDER_FILL: Rgba<u8> = Rgba([0, 0, 0, 255]);

const GRAY: Rgba<u8> = Rgba([142, 142, 147, 255]);
const GRAY_FAINT: Rgba<u8> = Rgba([142, 142, 147, 51]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// One decorative stroke around the frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderStyle {
    /// Top corner radius of the stroked outline
    pub radius: f32,
    pub line_width: f32,
    /// Distance of the outline from the frame edge
    pub inset: f32,
    pub color: Rgba<u8>,
}

/// Three concentric strokes: outer gray rim, thick black bezel, faint
/// highlight just inside the rim
pub const BORDERS: [BorderStyle; 3] = [
    BorderStyle {
        radius: 12.0,
        line_width: 2.0,
        inset: 0.0,
        color: GRAY,
    },
    BorderStyle {
        radius: 9.5,
        line_width: 5.0,
        inset: 2.5,
        color: BLACK,
    },
    BorderStyle {
        radius: 11.5,
        line_width: 1.0,
        inset: 0.5,
        color: GRAY_FAINT,
    },
];

/// Size and decoration of the preview frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameStyle {
    pub width: u32,
    pub height: u32,
    pub fill: Rgba<u8>,
    pub clip_radius: f32,
    pub borders: Vec<BorderStyle>,
}

impl FrameStyle {
    /// Frame `width` pixels wide with the given (width, height) aspect
    pub fn new(width: u32, aspect: (u32, u32)) -> Self {
        let (aspect_w, aspect_h) = aspect;
        let height = width as f64 * aspect_h as f64 / aspect_w.max(1) as f64;
        Self {
            width,
            height: (height.round() as u32).max(1),
            fill: PLACEHOLDER_FILL,
            clip_radius: CLIP_RADIUS,
            borders: BORDERS.to_vec(),
        }
    }

    pub fn from_config(config: &PreviewConfig) -> Self {
        Self::new(config.preview_width, config.frame_aspect)
    }

    fn bounds(&self, radius: f32) -> RoundedRect {
        RoundedRect::new(
            0.0,
            0.0,
            self.width as f32,
            self.height as f32,
            CornerRadii::top(radius),
        )
    }

    /// Outline that clips the frame's content
    pub fn clip(&self) -> RoundedRect {
        self.bounds(self.clip_radius)
    }

    /// Outline stroked for `border`
    pub fn border_outline(&self, border: &BorderStyle) -> RoundedRect {
        self.bounds(border.radius).inset(border.inset)
    }
}
