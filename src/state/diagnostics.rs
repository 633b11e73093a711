//! Side-channel counters for the thumbnail pipeline
//!
//! Failures never reach the preview's caller, so this is the only place
//! they can be observed.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::PreviewError;

/// Per-outcome counters, safe to share between the loader task and readers
#[derive(Debug, Default)]
pub struct Diagnostics {
    loads: AtomicU64,
    no_display_surface: AtomicU64,
    no_background_image: AtomicU64,
    image_decode: AtomicU64,
    no_drawable_representation: AtomicU64,
    other: AtomicU64,
}

/// Point-in-time copy of [`Diagnostics`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiagnosticsSnapshot {
    pub loads: u64,
    pub no_display_surface: u64,
    pub no_background_image: u64,
    pub image_decode: u64,
    pub no_drawable_representation: u64,
    pub other: u64,
}

impl DiagnosticsSnapshot {
    pub fn total_failures(&self) -> u64 {
        self.no_display_surface
            + self.no_background_image
            + self.image_decode
            + self.no_drawable_representation
            + self.other
    }
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a thumbnail that made it into the state
    pub fn record_load(&self) {
        self.loads.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a swallowed pipeline failure
    pub fn record_failure(&self, error: &PreviewError) {
        let counter = match error {
            PreviewError::NoDisplaySurface => &self.no_display_surface,
            PreviewError::NoBackgroundImage { .. } => &self.no_background_image,
            PreviewError::ImageDecode { .. } => &self.image_decode,
            PreviewError::NoDrawableRepresentation { .. } => &self.no_drawable_representation,
            PreviewError::Join(_) | PreviewError::Config(_) => &self.other,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> DiagnosticsSnapshot {
        DiagnosticsSnapshot {
            loads: self.loads.load(Ordering::Relaxed),
            no_display_surface: self.no_display_surface.load(Ordering::Relaxed),
            no_background_image: self.no_background_image.load(Ordering::Relaxed),
            image_decode: self.image_decode.load(Ordering::Relaxed),
            no_drawable_representation: self.no_drawable_representation.load(Ordering::Relaxed),
            other: self.other.load(Ordering::Relaxed),
        }
    }
}
