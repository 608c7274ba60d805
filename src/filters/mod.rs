pub mod engine;
pub mod types;

pub use engine::filter_properties;
pub use types::FilterSpec;
