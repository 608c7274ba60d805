use crate::error::RejectionReason;
use crate::messaging::conversations::Conversation;
use crate::models::{MessageDraft, Property, Role};
use chrono::{DateTime, Utc};
use tracing::debug;

/// What the sender can see when composing a message
#[derive(Debug, Clone, Copy)]
pub struct SendContext<'a> {
    pub properties: &'a [Property],
    /// Conversations derived for the sender
    pub conversations: &'a [Conversation],
}

/// Draft a message from `current_user_id` about `property_id`, timestamped now
pub fn prepare_message(
    current_user_id: &str,
    property_id: &str,
    content: &str,
    context: SendContext<'_>,
) -> Result<MessageDraft, RejectionReason> {
    prepare_message_at(current_user_id, property_id, content, context, Utc::now())
}

/// Same as [`prepare_message`] with an explicit clock value
pub fn prepare_message_at(
    current_user_id: &str,
    property_id: &str,
    content: &str,
    context: SendContext<'_>,
    now: DateTime<Utc>,
) -> Result<MessageDraft, RejectionReason> {
    if content.trim().is_empty() {
        return Err(RejectionReason::EmptyContent);
    }

    let property = context
        .properties
        .iter()
        .find(|p| p.id == property_id)
        .ok_or_else(|| RejectionReason::UnknownProperty(property_id.to_string()))?;

    let receiver_id = resolve_receiver(current_user_id, property, context.conversations)
        .ok_or_else(|| RejectionReason::UnresolvableReceiver {
            property_id: property_id.to_string(),
        })?;

    debug!(
        "Drafted message from {} to {} about {}",
        current_user_id, receiver_id, property_id
    );

    Ok(MessageDraft {
        sender_id: current_user_id.to_string(),
        receiver_id,
        property_id: property_id.to_string(),
        content: content.to_string(),
        timestamp: now,
        read: false,
    })
}

fn resolve_receiver(
    current_user_id: &str,
    property: &Property,
    conversations: &[Conversation],
) -> Option<String> {
    match Role::for_property(current_user_id, property) {
        Role::Buyer => Some(property.seller_id.clone()),
        // A seller answers whoever last wrote in this listing's thread
        Role::Seller => conversations
            .iter()
            .find(|c| c.property_id == property.id)
            .map(|c| c.counterparty_id.clone())
            .filter(|id| !id.is_empty() && id != current_user_id),
    }
}
