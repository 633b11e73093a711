/// Preview configuration
///
/// All tunables of the screen preview live here. The struct is serialized to
/// JSON so a user can override any subset of fields in
/// `<config dir>/screen-preview/config.json`; missing fields fall back to the
/// defaults below.
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::error::{PreviewError, Result};
use crate::ui::animation::AnimationSpec;

/// Width the desktop image is downscaled to before display
pub const DEFAULT_TARGET_WIDTH: u32 = 300;

/// Width of the on-screen preview frame
pub const DEFAULT_PREVIEW_WIDTH: u32 = 320;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PreviewConfig {
    /// Thumbnail width in pixels; height follows the source aspect ratio
    pub target_width: u32,

    /// Width of the presentation frame in pixels
    pub preview_width: u32,

    /// Presentation frame aspect ratio as (width, height)
    /// - The thumbnail is aspect-filled into this ratio, never letterboxed
    pub frame_aspect: (u32, u32),

    /// Padding around the caller's overlay content
    pub overlay_padding: f32,

    /// Cross-fade between states and the window fade-in
    pub animation: AnimationSpec,

    /// Placeholder glyph fade-out
    pub fast_animation: AnimationSpec,

    /// Glyph drawn on the placeholder while no thumbnail exists
    pub placeholder_glyph: String,

    /// Requested background blur for the window shell
    /// - None keeps an opaque window
    pub blur_radius: Option<f32>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            target_width: DEFAULT_TARGET_WIDTH,
            preview_width: DEFAULT_PREVIEW_WIDTH,
            frame_aspect: (16, 10),
            overlay_padding: 5.0,
            animation: AnimationSpec::SMOOTH,
            fast_animation: AnimationSpec::FAST,
            placeholder_glyph: "\u{25C6}".to_string(),
            blur_radius: None,
        }
    }
}

impl PreviewConfig {
    /// Convert to JSON string
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse from JSON string and validate
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the pipeline cannot render
    pub fn validate(&self) -> Result<()> {
        if self.target_width == 0 {
            return Err(PreviewError::Config("target_width must be positive".into()));
        }
        if self.preview_width == 0 {
            return Err(PreviewError::Config("preview_width must be positive".into()));
        }
        let (aspect_w, aspect_h) = self.frame_aspect;
        if aspect_w == 0 || aspect_h == 0 {
            return Err(PreviewError::Config(format!(
                "frame_aspect {}:{} is degenerate",
                aspect_w, aspect_h
            )));
        }
        if !self.overlay_padding.is_finite() || self.overlay_padding < 0.0 {
            return Err(PreviewError::Config("overlay_padding must be >= 0".into()));
        }
        Ok(())
    }

    /// Height of the presentation frame for the configured width and aspect
    pub fn preview_height(&self) -> u32 {
        let (aspect_w, aspect_h) = self.frame_aspect;
        let height = self.preview_width as f64 * aspect_h as f64 / aspect_w.max(1) as f64;
        (height.round() as u32).max(1)
    }

    /// Get the path where the config file is looked up
    /// - Linux: ~/.config/screen-preview/config.json
    /// - macOS: ~/Library/Application Support/screen-preview/config.json
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("screen-preview");
        path.push("config.json");
        Some(path)
    }

    /// Load the config from the default location, or defaults if absent
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(path),
            None => {
                debug!("No config directory on this platform, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load the config from `path`, or defaults if the file does not exist
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let json = fs::read_to_string(&path).map_err(|e| {
            PreviewError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::from_json(&json)?;
        info!("Loaded preview config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::animation::Easing;

    #[test]
    fn test_defaults_match_reference_behaviour() {
        let config = PreviewConfig::default();
        assert_eq!(config.target_width, 300);
        assert_eq!(config.frame_aspect, (16, 10));
        assert_eq!(config.preview_height(), 200);
        assert_eq!(config.animation.duration_ms, 200);
        assert_eq!(config.fast_animation.easing, Easing::EaseOut);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_serialization() {
        let mut config = PreviewConfig::default();
        config.target_width = 480;
        config.blur_radius = Some(20.0);

        let json = config.to_json().unwrap();
        let restored = PreviewConfig::from_json(&json).unwrap();

        assert_eq!(config, restored);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = PreviewConfig::from_json(r#"{ "target_width": 640 }"#).unwrap();
        assert_eq!(config.target_width, 640);
        assert_eq!(config.preview_width, DEFAULT_PREVIEW_WIDTH);
        assert_eq!(config.animation, AnimationSpec::SMOOTH);
    }

    #[test]
    fn test_validation_rejects_degenerate_values() {
        assert!(PreviewConfig::from_json(r#"{ "target_width": 0 }"#).is_err());
        assert!(PreviewConfig::from_json(r#"{ "frame_aspect": [16, 0] }"#).is_err());
        assert!(PreviewConfig::from_json(r#"{ "overlay_padding": -1.0 }"#).is_err());
        assert!(PreviewConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_load_from_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PreviewConfig::load_from(dir.path().join("config.json")).unwrap();
        assert_eq!(config, PreviewConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "placeholder_glyph": "*", "preview_width": 160 }"#).unwrap();

        let config = PreviewConfig::load_from(path).unwrap();
        assert_eq!(config.placeholder_glyph, "*");
        assert_eq!(config.preview_height(), 100);
    }
}
