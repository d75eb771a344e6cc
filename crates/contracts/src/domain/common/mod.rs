//! Common types and traits for all aggregates

pub mod aggregate_id;
pub mod aggregate_root;
pub mod localized_text;

// Re-exports
pub use aggregate_id::AggregateId;
pub use aggregate_root::AggregateRoot;
pub use localized_text::{LocalizedPatch, LocalizedText};
