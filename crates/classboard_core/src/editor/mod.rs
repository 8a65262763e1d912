//! Editor state machines over the key-value persistence boundary.
//!
//! # Responsibility
//! - Own in-memory editor state and its persistence choreography.
//! - Keep full-blob serialization at defined mutation points only.
//!
//! # Invariants
//! - `persist()` is explicit and idempotent; no mutation writes storage
//!   except where its contract says it does.
//! - After a persisted mutation succeeds, the stored blob deserializes to
//!   the in-memory state.

pub mod assignment_list;
pub mod profile;

use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::time::Duration;

use self::assignment_list::RowAction;

/// Default lifetime of the transient save-confirmation banner.
pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_secs(3);

/// Tunable editor behavior.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// How long the save banner stays visible before auto-hiding.
    pub notification_duration: Duration,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            notification_duration: DEFAULT_NOTIFICATION_DURATION,
        }
    }
}

pub type EditorResult<T> = Result<T, EditorError>;

/// Editor-level error for hydration, persistence and mode violations.
#[derive(Debug)]
pub enum EditorError {
    /// Persistence-layer failure.
    Store(StoreError),
    /// Blob under `key` could not be decoded from, or encoded to, JSON for
    /// its expected shape.
    InvalidBlob {
        key: &'static str,
        source: serde_json::Error,
    },
    /// Field mutation attempted outside edit mode.
    NotEditing,
    /// Row action surfaced in the list table but not yet implemented.
    UnsupportedAction(RowAction),
    /// Avatar source file could not be read.
    AvatarRead {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for EditorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::InvalidBlob { key, source } => {
                write!(f, "invalid JSON blob under key `{key}`: {source}")
            }
            Self::NotEditing => write!(f, "profile is not in edit mode"),
            Self::UnsupportedAction(action) => {
                write!(f, "row action is not supported yet: {}", action.as_str())
            }
            Self::AvatarRead { path, source } => {
                write!(f, "failed to read avatar file `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for EditorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::InvalidBlob { source, .. } => Some(source),
            Self::NotEditing => None,
            Self::UnsupportedAction(_) => None,
            Self::AvatarRead { source, .. } => Some(source),
        }
    }
}

impl From<StoreError> for EditorError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}
