//! Screen preview: a thumbnail of the desktop wallpaper in a rounded 16:10
//! frame, loaded once in the background and shown with a cross-fade.
//!
//! The [`loader::ThumbnailLoader`] owns the pipeline and publishes a
//! [`state::LoadState`]; the [`ui`] module turns that state into pixels and
//! iced widgets.

pub mod config;
pub mod error;
pub mod loader;
pub mod screen;
pub mod state;
pub mod thumbnail;
pub mod ui;

pub use error::{PreviewError, Result};
