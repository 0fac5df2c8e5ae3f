use std::{collections::HashMap, sync::RwLock};

mod sqlite;

pub use sqlite::SqliteStore;

/// Opaque blob storage by caller-constructed key (`"<prefix>_<userId>"`).
///
/// Reads that fail for any reason surface as `None`; writes that fail are
/// logged and dropped. Absence of data always means "nothing stored yet",
/// never an error the caller has to handle.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<Vec<u8>>;
    fn set(&self, key: &str, value: &[u8]);
}

/// Process-local store for tests and previews.
#[derive(Default)]
pub struct MemoryStore {
    data: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.data.read().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &[u8]) {
        self.data.write().unwrap().insert(key.to_string(), value.to_vec());
    }
}
