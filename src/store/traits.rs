use crate::error::StoreError;
use crate::models::{Message, MessageDraft, Property, PropertyDraft, User};
use async_trait::async_trait;

/// Common trait for the marketplace data store
/// The filter and messaging functions only read from it; writes go through here
#[async_trait]
pub trait MarketStore: Send + Sync {
    /// All listings, newest first
    async fn properties(&self) -> Result<Vec<Property>, StoreError>;

    /// All messages in arrival order
    async fn messages(&self) -> Result<Vec<Message>, StoreError>;

    async fn user_by_id(&self, id: &str) -> Result<Option<User>, StoreError>;

    /// Append a drafted message, assigning its id
    async fn append_message(&mut self, draft: MessageDraft) -> Result<Message, StoreError>;

    /// Publish a new listing, assigning id and creation time
    async fn add_property(&mut self, draft: PropertyDraft) -> Result<Property, StoreError>;

    /// Get the name of the store backend
    fn source_name(&self) -> &'static str;
}
