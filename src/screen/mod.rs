/// Host display queries
///
/// The thumbnail loader asks a [`DisplaySource`] two questions:
/// - Is there a primary display surface?
/// - Which image is that surface's desktop background?
///
/// `system.rs` answers them from the running desktop environment.
pub mod system;

pub use system::SystemDisplaySource;

use std::path::PathBuf;

/// The host's primary screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySurface {
    /// Human-readable name, used in logs only
    pub name: String,
}

impl DisplaySurface {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Source of the primary display and its background image
///
/// Both queries are cheap lookups; decoding the image is the loader's job.
pub trait DisplaySource: Send + Sync {
    /// The primary display surface, if one is attached
    fn primary_display(&self) -> Option<DisplaySurface>;

    /// Path of the background image shown on `surface`
    fn desktop_image(&self, surface: &DisplaySurface) -> Option<PathBuf>;
}

/// A display source with a fixed answer
///
/// Handy for embedding the preview in an app that already knows which image
/// to show.
#[derive(Debug, Clone, Default)]
pub struct StaticDisplaySource {
    surface: Option<DisplaySurface>,
    image: Option<PathBuf>,
}

impl StaticDisplaySource {
    /// A primary display showing `image`
    pub fn new(image: impl Into<PathBuf>) -> Self {
        Self {
            surface: Some(DisplaySurface::new("primary")),
            image: Some(image.into()),
        }
    }

    /// A primary display without a background image
    pub fn without_image() -> Self {
        Self {
            surface: Some(DisplaySurface::new("primary")),
            image: None,
        }
    }

    /// No display attached at all
    pub fn headless() -> Self {
        Self::default()
    }
}

impl DisplaySource for StaticDisplaySource {
    fn primary_display(&self) -> Option<DisplaySurface> {
        self.surface.clone()
    }

    fn desktop_image(&self, _surface: &DisplaySurface) -> Option<PathBuf> {
        self.image.clone()
    }
}
