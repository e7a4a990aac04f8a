use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;
use tracing::{error, warn};

/// Key-value storage of JSON-encoded text, the shape the site keeps all of
/// its state in. Implementations are cheap shareable handles so each store
/// can hold its own copy, the way repositories share a database connection.
pub trait Storage {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: String);
    fn remove(&self, key: &str);
}

/// Decode the value under `key`, falling back to `default` when the key is
/// absent or the stored JSON is malformed. Decode failures are logged and
/// never propagated.
pub fn get_item<T: DeserializeOwned>(storage: &impl Storage, key: &str, default: T) -> T {
    match storage.load(key) {
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "malformed stored value, using default");
                default
            }
        },
        None => default,
    }
}

/// Encode `value` and store it under `key`.
pub fn set_item<T: Serialize>(storage: &impl Storage, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => storage.save(key, raw),
        Err(e) => error!(key, error = %e, "failed to encode value for storage"),
    }
}

/// In-memory storage used by tests and throwaway sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: String) {
        self.items.borrow_mut().insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// Storage backed by a single JSON file holding the whole key-value map.
/// The map is kept in memory and rewritten on every save; write failures
/// are logged and the in-memory state stays authoritative for the session.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl FileStorage {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let items = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(items) => items,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "malformed storage file, starting empty");
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        Self {
            path,
            items: Rc::new(RefCell::new(items)),
        }
    }

    fn flush(&self) {
        let items = self.items.borrow();
        match serde_json::to_string_pretty(&*items) {
            Ok(raw) => {
                if let Err(e) = std::fs::write(&self.path, raw) {
                    error!(path = %self.path.display(), error = %e, "failed to write storage file");
                }
            }
            Err(e) => error!(error = %e, "failed to encode storage file"),
        }
    }
}

impl Storage for FileStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: String) {
        self.items.borrow_mut().insert(key.to_string(), value);
        self.flush();
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
        self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_item_returns_default_when_absent() {
        let storage = MemoryStorage::new();
        let value: Vec<u32> = get_item(&storage, "missing", Vec::new());
        assert!(value.is_empty());
    }

    #[test]
    fn test_get_item_falls_back_on_malformed_json() {
        let storage = MemoryStorage::new();
        storage.save("broken", "{not json".to_string());
        let value: Vec<u32> = get_item(&storage, "broken", vec![7]);
        assert_eq!(value, vec![7]);
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let storage = MemoryStorage::new();
        set_item(&storage, "numbers", &vec![1u32, 2, 3]);
        let value: Vec<u32> = get_item(&storage, "numbers", Vec::new());
        assert_eq!(value, vec![1, 2, 3]);
    }

    #[test]
    fn test_cloned_handle_shares_state() {
        let storage = MemoryStorage::new();
        let other = storage.clone();
        storage.save("shared", "\"yes\"".to_string());
        assert_eq!(other.load("shared").as_deref(), Some("\"yes\""));
        other.remove("shared");
        assert_eq!(storage.load("shared"), None);
    }

    #[test]
    fn test_file_storage_persists_across_opens() {
        let path = std::env::temp_dir().join(format!(
            "funzone_storage_test_{}.json",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);

        {
            let storage = FileStorage::open(&path);
            set_item(&storage, "score", &450u32);
        }
        let reopened = FileStorage::open(&path);
        assert_eq!(get_item(&reopened, "score", 0u32), 450);

        let _ = std::fs::remove_file(&path);
    }
}
