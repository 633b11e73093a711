/// Desktop image thumbnail module
///
/// This module handles:
/// - Decoding the desktop background image from disk
/// - Downscaling it to the configured width, preserving aspect ratio

pub mod decode;
pub mod resize;

pub use decode::decode_source;
pub use resize::{resize, thumbnail_height, SourceImage, Thumbnail, MAX_THUMBNAIL_PIXELS};
