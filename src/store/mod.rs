pub mod json;
pub mod memory;
pub mod traits;

pub use json::JsonFileStore;
pub use memory::{InMemoryStore, Snapshot};
pub use traits::MarketStore;
