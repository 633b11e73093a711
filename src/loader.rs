/// Thumbnail loader
///
/// Fetches the primary display's desktop image, downscales it and publishes
/// the result once. Every failure is swallowed: the preview keeps its
/// placeholder and the failure is only visible through [`Diagnostics`].
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::{self, JoinHandle};
use tracing::{debug, info};

use crate::config::PreviewConfig;
use crate::error::{PreviewError, Result};
use crate::screen::DisplaySource;
use crate::state::{Diagnostics, LoadState, StateSubject};
use crate::thumbnail::{self, SourceImage, Thumbnail};

pub struct ThumbnailLoader {
    source: Arc<dyn DisplaySource>,
    target_width: u32,
    subject: StateSubject,
    /// Latch for `on_first_activate`
    activated: AtomicBool,
    diagnostics: Diagnostics,
}

impl ThumbnailLoader {
    pub fn new(source: Arc<dyn DisplaySource>, config: &PreviewConfig) -> Self {
        Self {
            source,
            target_width: config.target_width,
            subject: StateSubject::new(),
            activated: AtomicBool::new(false),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Latest published state
    pub fn state(&self) -> LoadState {
        self.subject.snapshot()
    }

    /// Observe state changes
    pub fn subscribe(&self) -> watch::Receiver<LoadState> {
        self.subject.subscribe()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Lifecycle hook for the first time the preview is shown
    ///
    /// The first call spawns [`Self::request_load`] on the current tokio
    /// runtime and returns its handle; every later call returns `None`.
    /// Must be called from within a tokio runtime.
    pub fn on_first_activate(self: &Arc<Self>) -> Option<JoinHandle<()>> {
        if self.activated.swap(true, Ordering::AcqRel) {
            return None;
        }

        let loader = Arc::clone(self);
        Some(tokio::spawn(async move { loader.request_load().await }))
    }

    /// Run the pipeline once
    ///
    /// A no-op once a thumbnail is loaded. On failure the state is left as it
    /// was and the failure is counted.
    pub async fn request_load(&self) {
        if self.subject.is_loaded() {
            debug!("Thumbnail already loaded, skipping fetch");
            return;
        }

        match self.load().await {
            Ok(thumbnail) => {
                let (width, height) = (thumbnail.width(), thumbnail.height());
                if self.subject.publish(thumbnail) {
                    self.diagnostics.record_load();
                    info!("Screen preview thumbnail ready: {}x{}", width, height);
                }
            }
            Err(err) => {
                // Best-effort decoration: keep the placeholder
                debug!("Screen preview unavailable: {}", err);
                self.diagnostics.record_failure(&err);
            }
        }
    }

    async fn load(&self) -> Result<Thumbnail> {
        // Host lookups may shell out, so they share the blocking task with decode
        let display = Arc::clone(&self.source);
        let source = task::spawn_blocking(move || fetch_source(display.as_ref())).await??;

        let (width, height) = (source.width(), source.height());
        thumbnail::resize(source, self.target_width).ok_or(
            PreviewError::NoDrawableRepresentation {
                width,
                height,
                target_width: self.target_width,
            },
        )
    }
}

/// Find the primary display's desktop image and decode it (blocking)
fn fetch_source(display: &dyn DisplaySource) -> Result<SourceImage> {
    let surface = display
        .primary_display()
        .ok_or(PreviewError::NoDisplaySurface)?;
    let path = display
        .desktop_image(&surface)
        .ok_or_else(|| PreviewError::NoBackgroundImage {
            display: surface.name.clone(),
        })?;

    debug!("Loading desktop image {} for {}", path.display(), surface.name);
    thumbnail::decode_source(&path)
}
