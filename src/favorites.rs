//! Per-user saved listings, persisted through a key-value collaborator.

use crate::error::{FavoriteError, StoreError};
use crate::models::{Role, User};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{debug, info};

/// Key the favorites map is stored under
pub const FAVORITES_KEY: &str = "userFavorites";

/// Minimal string key-value storage, the shape of browser local storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryKv {
    entries: HashMap<String, String>,
}

impl KeyValueStore for MemoryKv {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// One file per key, under a directory
#[derive(Debug, Clone)]
pub struct FileKv {
    dir: PathBuf,
}

impl FileKv {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileKv {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// Saved property ids per user, in the order they were saved
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Favorites {
    by_user: HashMap<String, Vec<String>>,
}

impl Favorites {
    /// Load from `kv`; absent key means nobody has favorites yet
    pub fn load(kv: &impl KeyValueStore) -> Result<Self, StoreError> {
        match kv.get(FAVORITES_KEY)? {
            Some(json) => {
                let favorites: Self = serde_json::from_str(&json)?;
                debug!("Loaded favorites for {} users", favorites.by_user.len());
                Ok(favorites)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn save(&self, kv: &mut impl KeyValueStore) -> Result<(), StoreError> {
        kv.set(FAVORITES_KEY, serde_json::to_string(self)?)
    }

    pub fn for_user(&self, user_id: &str) -> &[String] {
        self.by_user.get(user_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, user_id: &str, property_id: &str) -> bool {
        self.for_user(user_id).iter().any(|id| id == property_id)
    }

    /// Flip `property_id` for `user_id`; returns whether it is now saved
    pub fn toggle(&mut self, user_id: &str, property_id: &str) -> bool {
        let saved = self.by_user.entry(user_id.to_string()).or_default();
        if let Some(pos) = saved.iter().position(|id| id == property_id) {
            saved.remove(pos);
            false
        } else {
            saved.push(property_id.to_string());
            true
        }
    }

    /// Toggle on behalf of a signed-in user; only buyers keep favorites
    pub fn toggle_for(&mut self, user: &User, property_id: &str) -> Result<bool, FavoriteError> {
        match user.role {
            Role::Buyer => {
                let now_saved = self.toggle(&user.id, property_id);
                info!(
                    "{} {} {}",
                    user.id,
                    if now_saved { "saved" } else { "removed" },
                    property_id
                );
                Ok(now_saved)
            }
            Role::Seller => Err(FavoriteError::SellerCannotFavorite(user.id.clone())),
        }
    }
}
