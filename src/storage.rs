// Manages the local key-value store backing inventory, settings and the
// shopping list.
//
// ⚠️ VERSION BUMP REQUIRED:
// Changes to the persisted shape of FoodItem, RefrigeratorSettings or
// ShoppingItem require incrementing STORE_VERSION below so stale files are
// refused instead of misread.
use crate::context::AppContext;
use anyhow::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use fs2::FileExt;

// Fixed keys for the three persisted collections.
pub const KEY_FOOD_ITEMS: &str = "food-items";
pub const KEY_SETTINGS: &str = "settings";
pub const KEY_SHOPPING_LIST: &str = "shopping-list";

const STORE_VERSION: u32 = 1;

/// Wrapper struct for versioned storage files.
#[derive(serde::Serialize, serde::Deserialize)]
struct StoreEnvelope<T> {
    #[serde(default)]
    version: u32,
    data: T,
}

/// Tracks whether the last load operation succeeded for each store file.
/// This prevents data loss by blocking saves when we couldn't read the
/// existing data (corruption, future-version file, IO failure).
static LOAD_STATE_MAP: OnceLock<Mutex<HashMap<PathBuf, LoadState>>> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadState {
    /// Never attempted to load
    Uninitialized,
    /// Last load succeeded
    Success,
    /// Last load failed (deserialization error, corruption, etc.)
    Failed,
}

impl LoadState {
    fn get(path: &Path) -> LoadState {
        let map = LOAD_STATE_MAP.get_or_init(|| Mutex::new(HashMap::new()));
        *map.lock()
            .unwrap()
            .get(path)
            .unwrap_or(&LoadState::Uninitialized)
    }

    fn set(path: &Path, state: LoadState) {
        let map = LOAD_STATE_MAP.get_or_init(|| Mutex::new(HashMap::new()));
        map.lock().unwrap().insert(path.to_path_buf(), state);
    }
}

pub struct LocalStore;

impl LocalStore {
    /// Returns the file path for a store key. Keys are sanitized to
    /// alphanumerics and hyphens; "food-items" -> food-items.json.
    pub fn get_path(ctx: &dyn AppContext, key: &str) -> Result<PathBuf> {
        let safe_key: String = key
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '-')
            .collect();
        if safe_key.is_empty() {
            anyhow::bail!("Invalid store key: {:?}", key);
        }
        Ok(ctx.get_data_dir()?.join(format!("{}.json", safe_key)))
    }

    /// Helper to get a sidecar lock file path.
    fn get_lock_path(file_path: &Path) -> PathBuf {
        let mut lock_path = file_path.to_path_buf();
        if let Some(ext) = lock_path.extension() {
            let mut new_ext = ext.to_os_string();
            new_ext.push(".lock");
            lock_path.set_extension(new_ext);
        } else {
            lock_path.set_extension("lock");
        }
        lock_path
    }

    pub fn with_lock<F, T>(file_path: &Path, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        let lock_path = Self::get_lock_path(file_path);
        let file = fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        file.lock_exclusive()?;
        let result = f();
        file.unlock()?;
        result
    }

    /// Atomic write: Write to .tmp file then rename
    pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
        let path = path.as_ref();
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(tmp_path, path)?;
        Ok(())
    }

    /// Saves a value under `key`. Refused when the previous load of that
    /// file failed, so an unreadable store is never silently overwritten.
    pub fn save<T: Serialize>(ctx: &dyn AppContext, key: &str, value: &T) -> Result<()> {
        let path = Self::get_path(ctx, key)?;
        if LoadState::get(&path) == LoadState::Failed {
            anyhow::bail!(
                "Cannot save {}: previous load failed. This prevents overwriting data that couldn't be read.",
                key
            );
        }
        Self::with_lock(&path, || {
            let envelope = StoreEnvelope {
                version: STORE_VERSION,
                data: value,
            };
            let json = serde_json::to_string_pretty(&envelope)?;
            Self::atomic_write(&path, json)?;
            Ok(())
        })
    }

    /// Best-effort save wrapper: failures are logged and dropped, in-memory
    /// state stays the source of truth for the session.
    pub fn save_or_log<T: Serialize>(ctx: &dyn AppContext, key: &str, value: &T) {
        if let Err(e) = Self::save(ctx, key, value) {
            log::warn!("Failed to save {}: {}", key, e);
        }
    }

    fn load_inner<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }
        Self::with_lock(path, || {
            let json = fs::read_to_string(path)?;
            let envelope: StoreEnvelope<T> = serde_json::from_str(&json)?;
            if envelope.version != STORE_VERSION {
                // A different (likely newer) format on disk; refuse to guess.
                anyhow::bail!(
                    "Store file {:?} has version {} (expected {})",
                    path,
                    envelope.version,
                    STORE_VERSION
                );
            }
            Ok(Some(envelope.data))
        })
    }

    /// Loads the value stored under `key`, falling back to `default` when
    /// the file is missing or unreadable. Failures are logged, never
    /// propagated; a failed load additionally blocks later saves to the
    /// same key for this session.
    pub fn load<T: DeserializeOwned>(ctx: &dyn AppContext, key: &str, default: T) -> T {
        let path = match Self::get_path(ctx, key) {
            Ok(p) => p,
            Err(e) => {
                log::error!("Cannot resolve path for store key {}: {}", key, e);
                return default;
            }
        };

        match Self::load_inner(&path) {
            Ok(Some(value)) => {
                LoadState::set(&path, LoadState::Success);
                value
            }
            Ok(None) => {
                // First run for this key.
                LoadState::set(&path, LoadState::Success);
                default
            }
            Err(e) => {
                log::error!("Failed to load {}: {}", key, e);
                LoadState::set(&path, LoadState::Failed);
                default
            }
        }
    }

    /// True when the store file for `key` exists on disk. Used to decide
    /// whether to seed demo data on first run.
    pub fn exists(ctx: &dyn AppContext, key: &str) -> bool {
        Self::get_path(ctx, key).map(|p| p.exists()).unwrap_or(false)
    }
}

#[cfg(test)]
mod store_tests {
    use super::*;
    use crate::context::TestContext;
    use crate::model::{Category, FoodItem, Unit};
    use chrono::Utc;

    #[test]
    fn test_save_and_load_roundtrip() {
        let ctx = TestContext::new();
        let items = vec![FoodItem::new(
            "Milk",
            Category::Dairy,
            Utc::now(),
            1.0,
            Unit::L,
        )];

        LocalStore::save(&ctx, KEY_FOOD_ITEMS, &items).unwrap();
        let loaded: Vec<FoodItem> = LocalStore::load(&ctx, KEY_FOOD_ITEMS, vec![]);

        assert_eq!(loaded, items);
    }

    #[test]
    fn test_missing_key_yields_default() {
        let ctx = TestContext::new();
        let loaded: Vec<FoodItem> = LocalStore::load(&ctx, KEY_FOOD_ITEMS, vec![]);
        assert!(loaded.is_empty());
        assert!(!LocalStore::exists(&ctx, KEY_FOOD_ITEMS));
    }

    #[test]
    fn test_corrupt_file_blocks_save() {
        let ctx = TestContext::new();
        let path = LocalStore::get_path(&ctx, KEY_SETTINGS).unwrap();
        std::fs::write(&path, "{ not json").unwrap();

        let loaded: Vec<FoodItem> = LocalStore::load(&ctx, KEY_SETTINGS, vec![]);
        assert!(loaded.is_empty());

        // The failed load must block subsequent saves to this key.
        let result = LocalStore::save(&ctx, KEY_SETTINGS, &Vec::<FoodItem>::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_version_mismatch_yields_default() {
        let ctx = TestContext::new();
        let path = LocalStore::get_path(&ctx, KEY_FOOD_ITEMS).unwrap();
        std::fs::write(&path, r#"{"version": 99, "data": []}"#).unwrap();

        let loaded: Vec<FoodItem> =
            LocalStore::load(&ctx, KEY_FOOD_ITEMS, vec![]);
        assert!(loaded.is_empty());
    }
}
