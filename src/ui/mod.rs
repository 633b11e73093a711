/// Presentation layer for the screen preview
///
/// Architecture:
/// - `geometry.rs` - aspect-fill cropping and rounded-rectangle distances
/// - `style.rs` - frame size, clip radius and the three border strokes
/// - `compose.rs` - CPU compositing of the frame and its transitions
/// - `animation.rs` - easing curves and timed transitions
/// - `screen_view.rs` - iced widget stacking frame, glyph and overlay
/// - `window.rs` - translucent window shell settings

pub mod animation;
pub mod compose;
pub mod geometry;
pub mod screen_view;
pub mod style;
pub mod window;

pub use screen_view::ScreenView;
pub use style::FrameStyle;
pub use window::WindowShell;
