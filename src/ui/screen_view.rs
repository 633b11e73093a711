//! Screen preview widget
//!
//! Stacks the composited frame, the placeholder glyph and the caller's
//! overlay. The frame pixels come from [`super::compose`]; this module only
//! decides which layers are visible.

use iced::widget::image::Handle;
use iced::widget::{container, image, text, Stack};
use iced::{Color, ContentFit, Element, Length, Size};

/// Which layers sit on top of the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleLayers {
    pub glyph: bool,
    pub overlay: bool,
}

impl VisibleLayers {
    /// The glyph shows while it has any opacity left; the overlay only once a
    /// thumbnail exists
    pub fn resolve(loaded: bool, glyph_opacity: f32, has_overlay: bool) -> Self {
        Self {
            glyph: glyph_opacity > 0.0,
            overlay: loaded && has_overlay,
        }
    }
}

pub struct ScreenView<'a, Message> {
    frame: Handle,
    size: Size,
    loaded: bool,
    glyph: String,
    glyph_opacity: f32,
    overlay_padding: f32,
    overlay: Option<Element<'a, Message>>,
}

impl<'a, Message: 'a> ScreenView<'a, Message> {
    /// Preview showing `frame`, displayed at `size`
    pub fn new(frame: Handle, size: Size) -> Self {
        Self {
            frame,
            size,
            loaded: false,
            glyph: String::new(),
            glyph_opacity: 0.0,
            overlay_padding: 5.0,
            overlay: None,
        }
    }

    pub fn loaded(mut self, loaded: bool) -> Self {
        self.loaded = loaded;
        self
    }

    /// Centred placeholder glyph at the given opacity
    pub fn placeholder(mut self, glyph: impl Into<String>, opacity: f32) -> Self {
        self.glyph = glyph.into();
        self.glyph_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Content drawn over the thumbnail once it is loaded
    pub fn overlay(mut self, content: impl Into<Element<'a, Message>>, padding: f32) -> Self {
        self.overlay = Some(content.into());
        self.overlay_padding = padding;
        self
    }
}

impl<'a, Message: 'a> From<ScreenView<'a, Message>> for Element<'a, Message> {
    fn from(view: ScreenView<'a, Message>) -> Self {
        let layers = VisibleLayers::resolve(view.loaded, view.glyph_opacity, view.overlay.is_some());

        let picture = image(view.frame)
            .width(Length::Fixed(view.size.width))
            .height(Length::Fixed(view.size.height))
            .content_fit(ContentFit::Fill);

        let mut stack = Stack::new()
            .width(Length::Fixed(view.size.width))
            .height(Length::Fixed(view.size.height))
            .push(picture);

        if layers.glyph {
            let glyph = text(view.glyph).size(20).color(Color {
                a: view.glyph_opacity,
                ..Color::WHITE
            });
            stack = stack.push(container(glyph).center(Length::Fill));
        }

        if layers.overlay {
            if let Some(overlay) = view.overlay {
                stack = stack.push(
                    container(overlay)
                        .padding(view.overlay_padding)
                        .width(Length::Fill)
                        .height(Length::Fill),
                );
            }
        }

        stack.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_suppressed_while_empty() {
        let layers = VisibleLayers::resolve(false, 1.0, true);
        assert!(layers.glyph);
        assert!(!layers.overlay);
    }

    #[test]
    fn test_overlay_shown_once_loaded() {
        let layers = VisibleLayers::resolve(true, 0.0, true);
        assert!(!layers.glyph);
        assert!(layers.overlay);

        assert!(!VisibleLayers::resolve(true, 0.0, false).overlay);
    }

    #[test]
    fn test_glyph_fades_with_opacity() {
        assert!(VisibleLayers::resolve(true, 0.3, true).glyph);
    }
}
