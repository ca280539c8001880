//! Notification preferences: the global switch and per-server opt-ins.
//!
//! Preferences live in memory and are written through to a [`KeyValueStore`]
//! on every mutation. Storage failures never abort an operation: the
//! in-memory value stays authoritative and the failure is logged.

mod errors;
mod store;

use std::collections::BTreeMap;

use serde::Serialize;

pub use errors::StorageError;
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};

use crate::servers::ServerKey;

/// Store key for the global notification switch (JSON boolean).
pub const GLOBAL_KEY: &str = "notificationsEnabled";
/// Store key for the per-server map (JSON object of ServerKey to boolean).
pub const SERVERS_KEY: &str = "notificationSettings";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Preferences {
    pub global_enabled: bool,
    pub per_server_enabled: BTreeMap<ServerKey, bool>,
}

impl Preferences {
    /// Whether notifications for `key` would fire, ignoring the global switch.
    pub fn is_server_enabled(&self, key: &ServerKey) -> bool {
        self.per_server_enabled.get(key).copied().unwrap_or(false)
    }

    /// Whether a progress increase on `key` should produce a notification.
    pub fn is_tracking(&self, key: &ServerKey) -> bool {
        self.global_enabled && self.is_server_enabled(key)
    }
}

/// Preferences backed by a persistent store.
pub struct PreferenceStore<S> {
    store: S,
    current: Preferences,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    /// Wrap `store` with default preferences. Call [`load`](Self::load) to
    /// read the persisted values.
    pub fn new(store: S) -> Self {
        Self {
            store,
            current: Preferences::default(),
        }
    }

    /// Open `store` and load whatever it holds.
    pub fn open(store: S) -> Self {
        let mut prefs = Self::new(store);
        prefs.load();
        prefs
    }

    /// Refresh from storage.
    ///
    /// Each field is read independently. A missing entry resets that field to
    /// its default; a read or decode failure keeps the last-known value.
    pub fn load(&mut self) -> &Preferences {
        match self.read_json::<bool>(GLOBAL_KEY) {
            Ok(Some(v)) => self.current.global_enabled = v,
            Ok(None) => self.current.global_enabled = false,
            Err(e) => log_load_failure(GLOBAL_KEY, &e),
        }

        match self.read_json::<BTreeMap<ServerKey, bool>>(SERVERS_KEY) {
            Ok(Some(map)) => self.current.per_server_enabled = map,
            Ok(None) => self.current.per_server_enabled.clear(),
            Err(e) => log_load_failure(SERVERS_KEY, &e),
        }

        tracing::debug!(
            event = "core.preferences.load_completed",
            global_enabled = self.current.global_enabled,
            tracked = self.current.per_server_enabled.values().filter(|v| **v).count(),
        );
        &self.current
    }

    pub fn preferences(&self) -> &Preferences {
        &self.current
    }

    pub fn set_global_enabled(&mut self, enabled: bool) -> Result<(), StorageError> {
        self.current.global_enabled = enabled;
        tracing::info!(event = "core.preferences.global_set", enabled);
        self.persist(GLOBAL_KEY, &enabled)
    }

    pub fn set_server_enabled(&mut self, key: ServerKey, enabled: bool) -> Result<(), StorageError> {
        tracing::info!(event = "core.preferences.server_set", server = %key, enabled);
        self.current.per_server_enabled.insert(key, enabled);
        let map = self.current.per_server_enabled.clone();
        self.persist(SERVERS_KEY, &map)
    }

    /// Flip a server's opt-in, returning the new value.
    pub fn toggle_server(&mut self, key: ServerKey) -> Result<bool, StorageError> {
        let enabled = !self.current.is_server_enabled(&key);
        self.set_server_enabled(key, enabled)?;
        Ok(enabled)
    }

    fn read_json<T: serde::de::DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StorageError::Corrupt {
                key: key.to_string(),
                message: e.to_string(),
            })
    }

    fn persist<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value).map_err(|e| StorageError::Corrupt {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.store.set(key, &raw).inspect_err(|e| {
            tracing::warn!(
                event = "core.preferences.persist_failed",
                key = key,
                error = %e,
                "Keeping in-memory preferences"
            );
        })
    }
}

fn log_load_failure(key: &str, error: &StorageError) {
    tracing::warn!(
        event = "core.preferences.load_failed",
        key = key,
        error = %error,
        "Keeping last-known value"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::servers::{Core, Ladder, Region, Server};

    /// Store that fails every operation after construction.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Io {
                source: std::io::Error::other("disk gone"),
            })
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Io {
                source: std::io::Error::other("disk gone"),
            })
        }
    }

    fn key() -> ServerKey {
        Server::new(Region::Americas, Ladder::Ladder, Core::Hardcore).key()
    }

    #[test]
    fn test_defaults_on_empty_store() {
        let prefs = PreferenceStore::open(MemoryStore::new());
        assert!(!prefs.preferences().global_enabled);
        assert!(prefs.preferences().per_server_enabled.is_empty());
        assert!(!prefs.preferences().is_tracking(&key()));
    }

    #[test]
    fn test_mutations_persist_in_wire_format() {
        let mut prefs = PreferenceStore::open(MemoryStore::new());
        prefs.set_global_enabled(true).unwrap();
        prefs.set_server_enabled(key(), true).unwrap();

        assert_eq!(prefs.store.get(GLOBAL_KEY).unwrap().as_deref(), Some("true"));
        assert_eq!(
            prefs.store.get(SERVERS_KEY).unwrap().as_deref(),
            Some(r#"{"americas-ladder-hardcore":true}"#)
        );
        assert!(prefs.preferences().is_tracking(&key()));
    }

    #[test]
    fn test_load_reads_existing_entries() {
        let mut store = MemoryStore::new();
        store.set(GLOBAL_KEY, "true").unwrap();
        store
            .set(SERVERS_KEY, r#"{"americas-ladder-hardcore":true,"asia-ladder-softcore":false}"#)
            .unwrap();

        let prefs = PreferenceStore::open(store);
        assert!(prefs.preferences().global_enabled);
        assert!(prefs.preferences().is_tracking(&key()));
        let asia = Server::new(Region::Asia, Ladder::Ladder, Core::Softcore).key();
        assert!(!prefs.preferences().is_tracking(&asia));
    }

    #[test]
    fn test_toggle_flips_and_returns_new_value() {
        let mut prefs = PreferenceStore::open(MemoryStore::new());
        assert!(prefs.toggle_server(key()).unwrap());
        assert!(prefs.preferences().is_server_enabled(&key()));
        assert!(!prefs.toggle_server(key()).unwrap());
        assert!(!prefs.preferences().is_server_enabled(&key()));
    }

    #[test]
    fn test_corrupt_field_keeps_last_known_value_independently() {
        let mut prefs = PreferenceStore::open(MemoryStore::new());
        prefs.set_global_enabled(true).unwrap();
        prefs.set_server_enabled(key(), true).unwrap();

        prefs.store.set(SERVERS_KEY, "[not a map").unwrap();
        prefs.store.set(GLOBAL_KEY, "false").unwrap();
        let loaded = prefs.load().clone();

        // Global switch read fine, per-server map kept from memory
        assert!(!loaded.global_enabled);
        assert!(loaded.is_server_enabled(&key()));
    }

    #[test]
    fn test_write_failure_keeps_in_memory_value() {
        let mut prefs = PreferenceStore::new(BrokenStore);
        assert!(prefs.set_global_enabled(true).is_err());
        assert!(prefs.set_server_enabled(key(), true).is_err());
        assert!(prefs.preferences().is_tracking(&key()));

        // Failed reads also keep memory
        prefs.load();
        assert!(prefs.preferences().is_tracking(&key()));
    }
}
