/// State management module
///
/// This module handles the preview's observable state:
/// - The two-variant load state (data.rs)
/// - The single-writer state subject readers subscribe to (subject.rs)
/// - Side-channel failure counters (diagnostics.rs)

pub mod data;
pub mod diagnostics;
pub mod subject;

pub use data::LoadState;
pub use diagnostics::{Diagnostics, DiagnosticsSnapshot};
pub use subject::StateSubject;
