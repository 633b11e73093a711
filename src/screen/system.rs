//! Display queries against the running desktop environment
//!
//! On Linux the primary display is assumed present when a Wayland or X11
//! display is advertised, and the background image comes from GNOME's
//! `org.gnome.desktop.background` settings. Other platforms only honour the
//! `SCREEN_PREVIEW_WALLPAPER` override.

use std::env;
use std::path::PathBuf;
use tracing::debug;
use url::Url;

use super::{DisplaySource, DisplaySurface};

/// Environment variable that forces a specific wallpaper path
pub const WALLPAPER_ENV: &str = "SCREEN_PREVIEW_WALLPAPER";

#[cfg(target_os = "linux")]
const GNOME_BACKGROUND_SCHEMA: &str = "org.gnome.desktop.background";
#[cfg(target_os = "linux")]
const GNOME_INTERFACE_SCHEMA: &str = "org.gnome.desktop.interface";

/// Display source backed by the host desktop
#[derive(Debug, Clone, Default)]
pub struct SystemDisplaySource {
    wallpaper_override: Option<PathBuf>,
}

impl SystemDisplaySource {
    /// Build from the process environment
    pub fn from_env() -> Self {
        let wallpaper_override = env::var_os(WALLPAPER_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        Self { wallpaper_override }
    }

    /// Always report `path` as the desktop image
    pub fn with_wallpaper(path: impl Into<PathBuf>) -> Self {
        Self {
            wallpaper_override: Some(path.into()),
        }
    }
}

impl DisplaySource for SystemDisplaySource {
    fn primary_display(&self) -> Option<DisplaySurface> {
        if self.wallpaper_override.is_some() {
            return Some(DisplaySurface::new("primary"));
        }
        detect_display()
    }

    fn desktop_image(&self, surface: &DisplaySurface) -> Option<PathBuf> {
        if let Some(path) = &self.wallpaper_override {
            return Some(path.clone());
        }
        query_desktop_image(surface)
    }
}

#[cfg(target_os = "linux")]
fn detect_display() -> Option<DisplaySurface> {
    ["WAYLAND_DISPLAY", "DISPLAY"]
        .iter()
        .filter_map(|var| env::var(var).ok())
        .find(|value| !value.is_empty())
        .map(DisplaySurface::new)
}

#[cfg(not(target_os = "linux"))]
fn detect_display() -> Option<DisplaySurface> {
    Some(DisplaySurface::new("primary"))
}

#[cfg(target_os = "linux")]
fn query_desktop_image(surface: &DisplaySurface) -> Option<PathBuf> {
    // Dark mode swaps which key the shell actually displays
    let prefers_dark = gsettings_get(GNOME_INTERFACE_SCHEMA, "color-scheme")
        .map(|scheme| scheme.contains("prefer-dark"))
        .unwrap_or(false);
    let keys = if prefers_dark {
        ["picture-uri-dark", "picture-uri"]
    } else {
        ["picture-uri", "picture-uri-dark"]
    };

    for key in keys {
        let Some(raw) = gsettings_get(GNOME_BACKGROUND_SCHEMA, key) else {
            continue;
        };
        if let Some(path) = parse_gsettings_uri(&raw) {
            debug!("Desktop image for {} from {}: {}", surface.name, key, path.display());
            return Some(path);
        }
    }
    None
}

#[cfg(not(target_os = "linux"))]
fn query_desktop_image(surface: &DisplaySurface) -> Option<PathBuf> {
    debug!("No desktop image lookup available for {}", surface.name);
    None
}

#[cfg(target_os = "linux")]
fn gsettings_get(schema: &str, key: &str) -> Option<String> {
    let output = std::process::Command::new("gsettings")
        .args(["get", schema, key])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout).ok()
}

/// Turn a gsettings string value such as `'file:///usr/share/a%20b.jpg'`
/// into a filesystem path
///
/// Plain absolute paths are accepted as-is; non-`file` URIs yield `None`.
pub fn parse_gsettings_uri(raw: &str) -> Option<PathBuf> {
    let value = raw.trim().trim_matches('\'');
    if value.is_empty() {
        return None;
    }
    if value.starts_with('/') {
        return Some(PathBuf::from(value));
    }

    let uri = Url::parse(value).ok()?;
    if uri.scheme() != "file" {
        return None;
    }
    uri.to_file_path().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_parse_file_uri() {
        assert_eq!(
            parse_gsettings_uri("'file:///usr/share/backgrounds/My%20Wall.jpg'\n"),
            Some(PathBuf::from("/usr/share/backgrounds/My Wall.jpg"))
        );
        assert_eq!(
            parse_gsettings_uri("'/home/me/wall.png'"),
            Some(PathBuf::from("/home/me/wall.png"))
        );
    }

    #[test]
    fn test_parse_rejects_non_file_values() {
        assert_eq!(parse_gsettings_uri("''"), None);
        assert_eq!(parse_gsettings_uri(""), None);
        assert_eq!(parse_gsettings_uri("'https://example.com/wall.jpg'"), None);
        assert_eq!(parse_gsettings_uri("'not a uri'"), None);
    }

    #[test]
    fn test_override_wins() {
        let source = SystemDisplaySource::with_wallpaper("/tmp/override.png");
        let surface = source.primary_display().unwrap();
        assert_eq!(
            source.desktop_image(&surface),
            Some(PathBuf::from("/tmp/override.png"))
        );
    }
}
