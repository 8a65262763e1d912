//! Key-value persistence boundary for editor state.
//!
//! # Responsibility
//! - Define the storage capability editors depend on.
//! - Isolate SQLite details from editor orchestration.
//!
//! # Invariants
//! - Values are complete UTF-8 JSON blobs; `set` replaces wholesale.
//! - Editor keys never overlap, so components share no mutable state.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteKeyValueStore;

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key holding the persisted assignment collection.
pub const ASSIGNMENTS_KEY: &str = "assignments";
/// Storage key holding the persisted user profile.
pub const PROFILE_KEY: &str = "userProfileData";

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for persistence and connection-shape problems.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} is behind expected {expected_version}; run migrations first"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table is missing: {table}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Capability interface for durable key-value persistence.
///
/// Editors treat the store as an injected collaborator rather than a
/// process-wide singleton, so tests can swap in a memory-backed
/// implementation without a real storage backend.
pub trait KeyValueStore {
    /// Returns the stored value for `key`, or `None` when absent.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value wholesale.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }
}
