/// Shared data structures for the preview state
///
/// These types flow from the thumbnail loader to the UI layer.
use crate::thumbnail::Thumbnail;

/// Lifecycle of the preview thumbnail
///
/// Starts `Empty` and becomes `Loaded` at most once. There is no error
/// variant: a failed load simply stays `Empty`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Empty,
    Loaded(Thumbnail),
}

impl LoadState {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded(_))
    }

    pub fn thumbnail(&self) -> Option<&Thumbnail> {
        match self {
            LoadState::Loaded(thumbnail) => Some(thumbnail),
            LoadState::Empty => None,
        }
    }
}
