use crate::models::Message;
use chrono::{DateTime, Utc};
use std::cmp::Reverse;
use std::collections::HashMap;
use tracing::debug;

/// All messages about one property that involve the current user
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    pub property_id: String,
    /// Arrival order, as found in the message list
    pub messages: Vec<Message>,
    /// The other participant, taken from the most recent message
    pub counterparty_id: String,
    pub latest_timestamp: DateTime<Utc>,
}

impl Conversation {
    fn from_group(property_id: String, messages: Vec<Message>, user_id: &str) -> Option<Self> {
        let latest = latest_of(&messages)?;
        let counterparty_id = latest.other_party(user_id).to_string();
        let latest_timestamp = latest.timestamp;

        Some(Self {
            property_id,
            messages,
            counterparty_id,
            latest_timestamp,
        })
    }

    /// Message with the greatest timestamp; the later arrival wins a tie
    pub fn latest_message(&self) -> Option<&Message> {
        latest_of(&self.messages)
    }

    /// Messages sorted oldest first, for the thread view
    pub fn chronological(&self) -> Vec<&Message> {
        let mut ordered: Vec<&Message> = self.messages.iter().collect();
        ordered.sort_by_key(|message| message.timestamp);
        ordered
    }

    /// Messages addressed to `user_id` that are not read yet
    pub fn unread_count(&self, user_id: &str) -> usize {
        self.messages
            .iter()
            .filter(|message| message.receiver_id == user_id && !message.read)
            .count()
    }
}

fn latest_of(messages: &[Message]) -> Option<&Message> {
    // max_by_key returns the last maximum, so ties go to the later arrival
    messages.iter().max_by_key(|message| message.timestamp)
}

/// Group `messages` into per-property conversations for `current_user_id`,
/// most recently active first
pub fn derive_conversations(messages: &[Message], current_user_id: &str) -> Vec<Conversation> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<Message>)> = Vec::new();

    for message in messages.iter().filter(|m| m.involves(current_user_id)) {
        let slot = *slots.entry(message.property_id.as_str()).or_insert_with(|| {
            groups.push((message.property_id.clone(), Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(message.clone());
    }

    let mut conversations: Vec<Conversation> = groups
        .into_iter()
        .filter_map(|(property_id, group)| {
            Conversation::from_group(property_id, group, current_user_id)
        })
        .collect();

    // Stable: groups with equal timestamps keep first-seen order
    conversations.sort_by_key(|conversation| Reverse(conversation.latest_timestamp));

    debug!(
        "Derived {} conversations for user {}",
        conversations.len(),
        current_user_id
    );
    conversations
}

/// Which conversation the messages view has open
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    NoConversationSelected,
    ConversationSelected(String),
}

/// Selection state of the messages view
#[derive(Debug, Clone, Default)]
pub struct ConversationView {
    selection: Selection,
}

impl ConversationView {
    /// Open the view, optionally preselecting the property the user came from
    pub fn new(target_property_id: Option<&str>) -> Self {
        let selection = match target_property_id {
            Some(id) => Selection::ConversationSelected(id.to_string()),
            None => Selection::NoConversationSelected,
        };
        Self { selection }
    }

    pub fn select(&mut self, property_id: &str) {
        self.selection = Selection::ConversationSelected(property_id.to_string());
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_property_id(&self) -> Option<&str> {
        match &self.selection {
            Selection::ConversationSelected(id) => Some(id),
            Selection::NoConversationSelected => None,
        }
    }

    /// The open conversation, if it has any messages yet
    pub fn selected<'a>(&self, conversations: &'a [Conversation]) -> Option<&'a Conversation> {
        let id = self.selected_property_id()?;
        conversations.iter().find(|c| c.property_id == id)
    }

    /// Messages of the open conversation, oldest first; empty for a new thread
    pub fn selected_messages<'a>(&self, conversations: &'a [Conversation]) -> Vec<&'a Message> {
        self.selected(conversations)
            .map(Conversation::chronological)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{at, message};

    fn property_ids(conversations: &[Conversation]) -> Vec<&str> {
        conversations.iter().map(|c| c.property_id.as_str()).collect()
    }

    #[test]
    fn newest_conversation_comes_first() {
        let messages = vec![
            message("1", "buyer-1", "seller-1", "A", 10, 0),
            message("2", "buyer-1", "seller-2", "B", 11, 0),
            message("3", "seller-1", "buyer-1", "A", 10, 30),
        ];

        let conversations = derive_conversations(&messages, "buyer-1");

        assert_eq!(property_ids(&conversations), vec!["B", "A"]);
        let a = &conversations[1];
        assert_eq!(a.latest_timestamp, at(10, 30));
        assert_eq!(a.latest_message().map(|m| m.id.as_str()), Some("3"));
        assert_eq!(a.messages.len(), 2);
    }

    #[test]
    fn user_without_messages_has_no_conversations() {
        let messages = vec![message("1", "buyer-2", "seller-1", "A", 10, 0)];
        assert!(derive_conversations(&messages, "buyer-1").is_empty());
        assert!(derive_conversations(&[], "buyer-1").is_empty());
    }

    #[test]
    fn only_messages_involving_the_user_are_grouped() {
        let messages = vec![
            message("1", "buyer-1", "seller-1", "A", 10, 0),
            message("2", "buyer-2", "seller-1", "A", 12, 0),
        ];

        let conversations = derive_conversations(&messages, "buyer-1");

        assert_eq!(conversations.len(), 1);
        assert_eq!(conversations[0].messages.len(), 1);
        assert_eq!(conversations[0].latest_timestamp, at(10, 0));
    }

    #[test]
    fn output_is_non_increasing_and_stable_for_ties() {
        let messages = vec![
            message("1", "buyer-1", "s", "C", 9, 0),
            message("2", "buyer-1", "s", "X", 12, 0),
            message("3", "buyer-1", "s", "Y", 12, 0),
            message("4", "buyer-1", "s", "Z", 12, 0),
            message("5", "buyer-1", "s", "D", 8, 0),
        ];

        let conversations = derive_conversations(&messages, "buyer-1");

        assert_eq!(property_ids(&conversations), vec!["X", "Y", "Z", "C", "D"]);
        assert!(conversations
            .windows(2)
            .all(|pair| pair[0].latest_timestamp >= pair[1].latest_timestamp));
    }

    #[test]
    fn group_keeps_arrival_order() {
        let messages = vec![
            message("late", "seller-1", "buyer-1", "A", 11, 0),
            message("early", "buyer-1", "seller-1", "A", 9, 0),
        ];

        let conversations = derive_conversations(&messages, "buyer-1");
        let ids: Vec<&str> = conversations[0].messages.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["late", "early"]);

        let chronological: Vec<&str> = conversations[0]
            .chronological()
            .into_iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(chronological, vec!["early", "late"]);
    }

    #[test]
    fn counterparty_is_resolved_per_conversation() {
        let messages = vec![
            // Seller's view: buyer-1 on A, buyer-2 on B
            message("1", "buyer-1", "seller-1", "A", 9, 0),
            message("2", "seller-1", "buyer-1", "A", 9, 30),
            message("3", "buyer-2", "seller-1", "B", 10, 0),
        ];

        let conversations = derive_conversations(&messages, "seller-1");

        assert_eq!(property_ids(&conversations), vec!["B", "A"]);
        assert_eq!(conversations[0].counterparty_id, "buyer-2");
        assert_eq!(conversations[1].counterparty_id, "buyer-1");
    }

    #[test]
    fn counterparty_follows_latest_message_not_last_arrival() {
        let messages = vec![
            message("1", "buyer-2", "seller-1", "A", 12, 0),
            message("2", "seller-1", "buyer-1", "A", 9, 0),
        ];

        let conversations = derive_conversations(&messages, "seller-1");
        assert_eq!(conversations[0].counterparty_id, "buyer-2");
    }

    #[test]
    fn unread_counts_only_incoming() {
        let mut messages = vec![
            message("1", "buyer-1", "seller-1", "A", 9, 0),
            message("2", "seller-1", "buyer-1", "A", 9, 30),
            message("3", "seller-1", "buyer-1", "A", 9, 45),
        ];
        messages[2].read = true;

        let conversations = derive_conversations(&messages, "buyer-1");
        assert_eq!(conversations[0].unread_count("buyer-1"), 1);
        assert_eq!(conversations[0].unread_count("seller-1"), 1);
    }

    #[test]
    fn view_starts_empty_or_on_target() {
        let view = ConversationView::new(None);
        assert_eq!(view.selection(), &Selection::NoConversationSelected);

        let view = ConversationView::new(Some("A"));
        assert_eq!(view.selection(), &Selection::ConversationSelected("A".into()));
    }

    #[test]
    fn picking_a_conversation_selects_it() {
        let messages = vec![
            message("1", "buyer-1", "seller-1", "A", 10, 0),
            message("2", "buyer-1", "seller-2", "B", 11, 0),
        ];
        let conversations = derive_conversations(&messages, "buyer-1");

        let mut view = ConversationView::default();
        assert!(view.selected_messages(&conversations).is_empty());

        view.select("A");
        assert_eq!(view.selected_property_id(), Some("A"));
        let selected = view.selected_messages(&conversations);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, "1");
    }

    #[test]
    fn target_without_history_has_no_messages() {
        let view = ConversationView::new(Some("new-listing"));
        assert!(view.selected(&[]).is_none());
        assert!(view.selected_messages(&[]).is_empty());
    }
}
