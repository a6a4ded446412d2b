// SPDX-License-Identifier: MPL-2.0
//! Thread-safe key to locator registry.

use crate::domain::navigation::{Locator, PageKey};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Maps page keys to locators.
///
/// Clones share the same table, so a startup thread can keep registering
/// destinations while the UI thread already navigates. Registering a key
/// twice overwrites the previous locator.
#[derive(Debug, Clone, Default)]
pub struct DestinationRegistry {
    routes: Arc<Mutex<HashMap<PageKey, Locator>>>,
}

impl DestinationRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<PageKey, Locator>> {
        // The map is always left consistent, so a poisoned lock is still usable.
        self.routes.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers `locator` under `key`, returning the locator it replaced.
    pub fn register(&self, key: impl Into<PageKey>, locator: impl Into<Locator>) -> Option<Locator> {
        let key = key.into();
        let locator = locator.into();
        let previous = self.lock().insert(key.clone(), locator);
        if let Some(previous) = &previous {
            log::debug!("Page '{key}' re-registered, replacing '{previous}'");
        }
        previous
    }

    /// Returns the locator registered under `key`.
    #[must_use]
    pub fn locator(&self, key: &str) -> Option<Locator> {
        self.lock().get(key).cloned()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    /// Registered keys in sorted order.
    #[must_use]
    pub fn keys(&self) -> Vec<PageKey> {
        let mut keys: Vec<PageKey> = self.lock().keys().cloned().collect();
        keys.sort();
        keys
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn register_overwrites_previous_locator() {
        let registry = DestinationRegistry::new();
        assert_eq!(registry.register("first", "/View/A"), None);
        assert_eq!(
            registry.register("first", "/View/B"),
            Some(Locator::from("/View/A"))
        );
        assert_eq!(registry.locator("first"), Some(Locator::from("/View/B")));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn unknown_key_has_no_locator() {
        let registry = DestinationRegistry::new();
        assert!(registry.locator("missing").is_none());
        assert!(!registry.contains("missing"));
        assert!(registry.is_empty());
    }

    #[test]
    fn clones_share_entries_across_threads() {
        let registry = DestinationRegistry::new();
        let config_side = registry.clone();

        thread::spawn(move || {
            config_side.register("dialog", "/View/DialogView");
        })
        .join()
        .expect("config thread panicked");

        assert!(registry.contains("dialog"));
    }

    #[test]
    fn keys_are_sorted() {
        let registry = DestinationRegistry::new();
        registry.register("second", "/b");
        registry.register("first", "/a");
        assert_eq!(
            registry.keys(),
            vec![PageKey::from("first"), PageKey::from("second")]
        );
    }
}
