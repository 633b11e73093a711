//! Translucent window shell hosting the preview
//!
//! The title bar is hidden and made transparent so content runs under it on
//! macOS. A requested background blur makes the window transparent; the blur
//! itself needs a private compositor API and is skipped.

use iced::{window, Color, Size};
use std::time::Instant;
use tracing::warn;

use super::animation::{AnimationSpec, Transition};
use crate::config::PreviewConfig;

/// Space around the preview frame inside the window
const WINDOW_MARGIN: f32 = 40.0;

#[derive(Debug, Clone)]
pub struct WindowShell {
    size: Size,
    blur_radius: Option<f32>,
    show_animation: AnimationSpec,
}

impl WindowShell {
    pub fn from_config(config: &PreviewConfig) -> Self {
        let size = Size::new(
            config.preview_width as f32 + 2.0 * WINDOW_MARGIN,
            config.preview_height() as f32 + 3.0 * WINDOW_MARGIN,
        );
        Self {
            size,
            blur_radius: config.blur_radius,
            show_animation: config.animation,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Whether the window background lets the desktop through
    pub fn is_translucent(&self) -> bool {
        self.blur_radius.is_some()
    }

    /// Window settings for the iced runtime
    pub fn settings(&self) -> window::Settings {
        #[allow(unused_mut)]
        let mut settings = window::Settings {
            size: self.size,
            min_size: Some(self.size),
            transparent: self.is_translucent(),
            ..window::Settings::default()
        };

        #[cfg(target_os = "macos")]
        {
            settings.platform_specific.title_hidden = true;
            settings.platform_specific.titlebar_transparent = true;
            settings.platform_specific.fullsize_content_view = true;
        }

        settings
    }

    /// Ask the compositor for a background blur
    ///
    /// Returns whether the blur was applied. No backend currently supports
    /// it, so the request is logged and the window stays merely transparent.
    pub fn request_background_blur(&self) -> bool {
        if let Some(radius) = self.blur_radius {
            warn!("Background blur (radius {}) is not supported here, skipping", radius);
        }
        false
    }

    /// Fade-in that starts when the window is shown
    pub fn show(&self) -> Transition {
        Transition::start(self.show_animation)
    }
}

/// `color` as seen through the window's fade-in at `now`
///
/// Everything drawn in the window goes through this (or the equivalent frame
/// opacity) so the whole content fades in together.
pub fn fade_in_color(color: Color, fade: &Transition, now: Instant) -> Color {
    Color {
        a: color.a * fade.progress_at(now),
        ..color
    }
}
