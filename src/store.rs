// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Kudibook", "kudibook"));

// Collection keys. Each holds one JSON document that is replaced wholesale
// on every write.
pub const USERS_KEY: &str = "users";
pub const SESSION_KEY: &str = "user";
pub const WALLETS_KEY: &str = "wallets";
pub const INVOICES_KEY: &str = "invoices";
pub const TRANSACTIONS_KEY: &str = "transactions";
pub const SETTINGS_KEY: &str = "settings";

/// Keyed JSON storage. Ledger operations take this as an explicit
/// dependency; `JsonStore` persists to disk, `MemoryStore` backs tests.
pub trait Store {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&self, key: &str, payload: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

pub fn data_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let dir = proj.data_dir().to_path_buf();
    fs::create_dir_all(&dir).context("Failed to create data dir")?;
    Ok(dir)
}

/// Production store: one `<key>.json` file per collection in a data
/// directory.
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn open_default() -> Result<Self> {
        Ok(Self { dir: data_dir()? })
    }

    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create store dir {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Store for JsonStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let raw =
            fs::read_to_string(&path).with_context(|| format!("Read {}", path.display()))?;
        Ok(Some(raw))
    }

    fn write(&self, key: &str, payload: &str) -> Result<()> {
        let path = self.path_for(key);
        fs::write(&path, payload).with_context(|| format!("Write {}", path.display()))
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(&path).with_context(|| format!("Remove {}", path.display()))?;
        }
        Ok(())
    }
}

/// In-memory store for tests: same contract, no filesystem.
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, payload: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), payload.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

pub fn load_list<T: DeserializeOwned>(store: &dyn Store, key: &str) -> Result<Vec<T>> {
    match store.read(key)? {
        Some(raw) => {
            serde_json::from_str(&raw).with_context(|| format!("Malformed data under '{}'", key))
        }
        None => Ok(Vec::new()),
    }
}

pub fn save_list<T: Serialize>(store: &dyn Store, key: &str, items: &[T]) -> Result<()> {
    let raw = serde_json::to_string(items)?;
    store.write(key, &raw)
}

pub fn load_record<T: DeserializeOwned>(store: &dyn Store, key: &str) -> Result<Option<T>> {
    match store.read(key)? {
        Some(raw) => {
            let v = serde_json::from_str(&raw)
                .with_context(|| format!("Malformed data under '{}'", key))?;
            Ok(Some(v))
        }
        None => Ok(None),
    }
}

pub fn save_record<T: Serialize>(store: &dyn Store, key: &str, record: &T) -> Result<()> {
    let raw = serde_json::to_string(record)?;
    store.write(key, &raw)
}
