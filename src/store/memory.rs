use crate::error::StoreError;
use crate::fixtures;
use crate::models::{Message, MessageDraft, Property, PropertyDraft, User};
use crate::store::traits::MarketStore;
use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

/// Everything the marketplace keeps, in its serialized shape
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    pub users: Vec<User>,
    pub properties: Vec<Property>,
    pub messages: Vec<Message>,
}

impl Snapshot {
    /// Demo marketplace with a few users, listings and messages
    pub fn seeded() -> Self {
        Self {
            users: fixtures::users(),
            properties: fixtures::properties(),
            messages: fixtures::messages(),
        }
    }

    pub(crate) fn push_message(&mut self, draft: MessageDraft) -> Result<Message, StoreError> {
        if !self.properties.iter().any(|p| p.id == draft.property_id) {
            return Err(StoreError::UnknownProperty(draft.property_id));
        }
        let message = draft.into_message(Uuid::new_v4().to_string());
        debug!("Appended message {} on {}", message.id, message.property_id);
        self.messages.push(message.clone());
        Ok(message)
    }

    pub(crate) fn push_property(&mut self, draft: PropertyDraft) -> Property {
        let property = draft.into_property(Uuid::new_v4().to_string(), Utc::now());
        info!("Listed {} ({})", property.title, property.id);
        self.properties.insert(0, property.clone());
        property
    }
}

/// Store that lives only as long as the process
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    snapshot: Snapshot,
}

impl InMemoryStore {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    pub fn seeded() -> Self {
        Self::new(Snapshot::seeded())
    }
}

#[async_trait]
impl MarketStore for InMemoryStore {
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
        self.snapshot.push_message(draft)
    }

    async fn add_property(&mut self, draft: PropertyDraft) -> Result<Property, StoreError> {
        Ok(self.snapshot.push_property(draft))
    }

    fn source_name(&self) -> &'static str {
        "memory"
    }
}
