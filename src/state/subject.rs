//! Observable load state
//!
//! The loader is the only writer; any number of readers can take a snapshot
//! or await the next change. Built on `tokio::sync::watch`, which always holds
//! the latest value and never blocks the writer.

use tokio::sync::watch;

use super::data::LoadState;
use crate::thumbnail::Thumbnail;

/// Single-writer, multi-reader cell holding the current [`LoadState`]
#[derive(Debug)]
pub struct StateSubject {
    sender: watch::Sender<LoadState>,
}

impl StateSubject {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(LoadState::Empty);
        Self { sender }
    }

    /// Latest published state
    pub fn snapshot(&self) -> LoadState {
        self.sender.borrow().clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.sender.borrow().is_loaded()
    }

    /// Receiver that observes every publication from now on
    pub fn subscribe(&self) -> watch::Receiver<LoadState> {
        self.sender.subscribe()
    }

    /// Publish `thumbnail` unless one was already published
    ///
    /// Returns `true` if the state changed. Subscribers are only notified on
    /// an actual change.
    pub fn publish(&self, thumbnail: Thumbnail) -> bool {
        self.sender.send_if_modified(|state| {
            if state.is_loaded() {
                return false;
            }
            *state = LoadState::Loaded(thumbnail);
            true
        })
    }
}

impl Default for StateSubject {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn thumbnail(color: u8) -> Thumbnail {
        Thumbnail::new(RgbaImage::from_pixel(2, 2, Rgba([color, color, color, 255])))
    }

    #[test]
    fn test_starts_empty() {
        let subject = StateSubject::new();
        assert_eq!(subject.snapshot(), LoadState::Empty);
        assert!(!subject.is_loaded());
    }

    #[test]
    fn test_first_publish_wins() {
        let subject = StateSubject::new();
        let first = thumbnail(10);

        assert!(subject.publish(first.clone()));
        assert!(!subject.publish(thumbnail(200)));
        assert_eq!(subject.snapshot(), LoadState::Loaded(first));
    }

    #[tokio::test]
    async fn test_subscribers_see_publication() {
        let subject = StateSubject::new();
        let mut first = subject.subscribe();
        let mut second = subject.subscribe();
        assert!(!first.has_changed().unwrap());

        subject.publish(thumbnail(42));

        first.changed().await.unwrap();
        assert!(first.borrow_and_update().is_loaded());
        assert!(second.has_changed().unwrap());
        assert!(second.borrow_and_update().is_loaded());
    }

    #[test]
    fn test_rejected_publish_does_not_notify() {
        let subject = StateSubject::new();
        subject.publish(thumbnail(1));

        let receiver = subject.subscribe();
        subject.publish(thumbnail(2));
        assert!(!receiver.has_changed().unwrap());
    }
}
