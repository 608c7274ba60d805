pub mod compose;
pub mod conversations;

pub use compose::{prepare_message, prepare_message_at, SendContext};
pub use conversations::{derive_conversations, Conversation, ConversationView, Selection};
