//! Listing filters and buyer/seller messaging for a property marketplace.

pub mod catalog;
pub mod config;
pub mod error;
pub mod favorites;
pub mod filters;
pub mod fixtures;
pub mod messaging;
pub mod models;
pub mod store;

pub use error::{RejectionKind, RejectionReason};
pub use filters::{filter_properties, FilterSpec};
pub use messaging::{derive_conversations, prepare_message, Conversation, SendContext};
