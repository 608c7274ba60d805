use crate::error::StoreError;
use crate::models::{Message, MessageDraft, Property, PropertyDraft, User};
use crate::store::memory::Snapshot;
use crate::store::traits::MarketStore;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Store backed by one pretty-printed JSON snapshot file
///
/// The file is read once on open and rewritten after every mutation.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    snapshot: Snapshot,
}

impl JsonFileStore {
    /// Open the snapshot at `path`; a missing file starts from `seed` and is created
    pub async fn open(path: impl AsRef<Path>, seed: Snapshot) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let snapshot = match tokio::fs::read_to_string(&path).await {
            Ok(json) => {
                let snapshot: Snapshot = serde_json::from_str(&json)?;
                info!(
                    "Loaded {} properties and {} messages from {}",
                    snapshot.properties.len(),
                    snapshot.messages.len(),
                    path.display()
                );
                snapshot
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                warn!("No store file at {}, starting from seed data", path.display());
                seed
            }
            Err(err) => return Err(err.into()),
        };

        let store = Self { path, snapshot };
        store.save(&store.snapshot).await?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(snapshot)?;
        tokio::fs::write(&self.path, json).await?;
        debug!("Saved store to {}", self.path.display());
        Ok(())
    }
}

#[async_trait]
impl MarketStore for JsonFileStore {
    async fn properties(&self) -> Result<Vec<Property>, StoreError> {
        Ok(self.snapshot.properties.clone())
    }

    async fn messages(&self) -> Result<Vec<Message>, StoreError> {
        Ok(self.snapshot.messages.clone())
    }

    async fn user_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        Ok(self.snapshot.users.iter().find(|u| u.id == id).cloned())
    }

    async fn append_message(&mut self, draft: MessageDraft) -> Result<Message, StoreError> {
        // Only commit the change once it is on disk
        let mut next = self.snapshot.clone();
        let message = next.push_message(draft)?;
        self.save(&next).await?;
        self.snapshot = next;
        Ok(message)
    }

    async fn add_property(&mut self, draft: PropertyDraft) -> Result<Property, StoreError> {
        let mut next = self.snapshot.clone();
        let property = next.push_property(draft);
        self.save(&next).await?;
        self.snapshot = next;
        Ok(property)
    }

    fn source_name(&self) -> &'static str {
        "json-file"
    }
}
