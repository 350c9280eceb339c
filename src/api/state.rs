//! Application state for the Attendance Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, PreferencesStore};
use crate::source::InMemorySource;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// loaded operations policy, the record source, and the preferences
/// store. Preferences are loaded from storage once when the store is
/// opened and threaded through this state, never read ad hoc.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    source: InMemorySource,
    preferences: Arc<PreferencesStore>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: ConfigLoader, source: InMemorySource, preferences: PreferencesStore) -> Self {
        Self {
            config: Arc::new(config),
            source,
            preferences: Arc::new(preferences),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a reference to the record source.
    pub fn source(&self) -> &InMemorySource {
        &self.source
    }

    /// Returns a reference to the preferences store.
    pub fn preferences(&self) -> &PreferencesStore {
        &self.preferences
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
