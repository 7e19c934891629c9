//! Common types and traits shared by the configuration aggregates

pub mod aggregate_root;
pub mod entity_metadata;
pub mod validation;

pub use aggregate_root::AggregateRoot;
pub use entity_metadata::EntityMetadata;
