//! Persisted domain records for the assignment and profile editors.
//!
//! # Responsibility
//! - Define the serialized shapes written to the key-value store.
//! - Keep serialized field naming aligned with the historical storage blobs.
//!
//! # Invariants
//! - Records are serialized wholesale; there is no partial-update shape.
//! - `Assignment::id` is stable once generated and never reused.

pub mod assignment;
pub mod profile;
