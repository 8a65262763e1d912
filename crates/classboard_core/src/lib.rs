//! Core domain logic for Classboard.
//! This crate is the single source of truth for editor invariants.

pub mod db;
pub mod editor;
pub mod logging;
pub mod model;
pub mod store;

pub use editor::assignment_list::{AssignmentForm, AssignmentListEditor, FormField, RowAction};
pub use editor::profile::{EditorMode, ProfileEditor, ProfileField};
pub use editor::{EditorConfig, EditorError, EditorResult, DEFAULT_NOTIFICATION_DURATION};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::assignment::{Assignment, AssignmentId};
pub use model::profile::{Profile, GENDER_OPTIONS};
pub use store::{
    KeyValueStore, MemoryStore, SqliteKeyValueStore, StoreError, StoreResult, ASSIGNMENTS_KEY,
    PROFILE_KEY,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
