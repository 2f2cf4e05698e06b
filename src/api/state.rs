//! Application state for the fee schedule engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::LetterheadConfig;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers, such as
/// the loaded letterhead configuration.
#[derive(Clone)]
pub struct AppState {
    /// The letterhead used by every rendered document.
    letterhead: Arc<LetterheadConfig>,
}

impl AppState {
    /// Creates a new application state with the given letterhead.
    pub fn new(letterhead: LetterheadConfig) -> Self {
        Self {
            letterhead: Arc::new(letterhead),
        }
    }

    /// Returns a reference to the letterhead configuration.
    pub fn letterhead(&self) -> &LetterheadConfig {
        &self.letterhead
    }
}
