//! Single-record profile editor.
//!
//! # Responsibility
//! - Toggle the profile between viewing and editing renditions.
//! - Buffer edits in a draft committed on save and discarded on cancel.
//!
//! # Invariants
//! - The committed profile changes only through `save`.
//! - The notification slot holds at most one banner; a new save resets it.

use super::{EditorConfig, EditorError, EditorResult};
use crate::model::profile::Profile;
use crate::store::{KeyValueStore, PROFILE_KEY};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use log::info;
use std::path::Path;
use std::time::Instant;

const SAVE_NOTIFICATION: &str = "Profile Updated Successfully!";

/// Rendering mode of the profile page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Viewing,
    Editing,
}

/// Editable profile inputs. The avatar is set through file upload instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    FullName,
    Email,
    Birthday,
    Phone,
    Gender,
    Job,
}

#[derive(Debug, Clone)]
struct Notification {
    message: &'static str,
    shown_at: Instant,
}

/// Single-record editor owning the committed profile, an optional draft and
/// the injected store.
#[derive(Debug)]
pub struct ProfileEditor<S: KeyValueStore> {
    store: S,
    config: EditorConfig,
    committed: Profile,
    draft: Option<Profile>,
    notification: Option<Notification>,
}

impl<S: KeyValueStore> ProfileEditor<S> {
    /// Hydrates the editor from the `userProfileData` key. Runs once.
    ///
    /// An absent key falls back to the seed profile.
    ///
    /// # Errors
    /// - `InvalidBlob` when the persisted profile fails to deserialize.
    pub fn load(store: S, config: EditorConfig) -> EditorResult<Self> {
        let (committed, origin) = match store.get(PROFILE_KEY)? {
            Some(raw) => {
                let profile =
                    serde_json::from_str(&raw).map_err(|source| EditorError::InvalidBlob {
                        key: PROFILE_KEY,
                        source,
                    })?;
                (profile, "stored")
            }
            None => (Profile::default(), "seed"),
        };
        info!("event=profile_load module=editor status=ok origin={origin}");

        Ok(Self {
            store,
            config,
            committed,
            draft: None,
            notification: None,
        })
    }

    /// Current rendering mode, derived from draft presence.
    pub fn mode(&self) -> EditorMode {
        if self.draft.is_some() {
            EditorMode::Editing
        } else {
            EditorMode::Viewing
        }
    }

    /// Profile values to render for the current mode: the draft while
    /// editing, the committed profile otherwise.
    pub fn displayed(&self) -> &Profile {
        self.draft.as_ref().unwrap_or(&self.committed)
    }

    /// Last committed profile, regardless of mode.
    pub fn profile(&self) -> &Profile {
        &self.committed
    }

    /// Enters edit mode, buffering further edits in a draft copy.
    ///
    /// Re-entering edit mode keeps an existing draft untouched.
    pub fn begin_edit(&mut self) {
        if self.draft.is_none() {
            self.draft = Some(self.committed.clone());
        }
    }

    /// Writes one field value into the draft.
    ///
    /// # Errors
    /// - `NotEditing` outside edit mode.
    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) -> EditorResult<()> {
        let draft = self.draft.as_mut().ok_or(EditorError::NotEditing)?;
        let value = value.into();
        match field {
            ProfileField::FullName => draft.full_name = value,
            ProfileField::Email => draft.email = value,
            ProfileField::Birthday => draft.birthday = value,
            ProfileField::Phone => draft.phone = value,
            ProfileField::Gender => draft.gender = value,
            ProfileField::Job => draft.job = value,
        }
        Ok(())
    }

    /// Reads a local image file into the draft avatar as a base64 data URI.
    ///
    /// A single upload is in flight at a time; starting another one simply
    /// overwrites the field. There is no queue and no cancellation.
    ///
    /// # Errors
    /// - `NotEditing` outside edit mode.
    /// - `AvatarRead` when the file cannot be read.
    pub fn set_avatar_from_file(&mut self, path: impl AsRef<Path>) -> EditorResult<()> {
        if self.draft.is_none() {
            return Err(EditorError::NotEditing);
        }

        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| EditorError::AvatarRead {
            path: path.to_path_buf(),
            source,
        })?;
        let data_uri = format!("data:{};base64,{}", mime_for_path(path), BASE64.encode(&bytes));

        if let Some(draft) = self.draft.as_mut() {
            draft.avatar = data_uri;
        }
        Ok(())
    }

    /// Commits the draft, persists it and arms the save banner.
    ///
    /// Saving while the banner is still visible resets its timer; there is
    /// only one banner slot.
    ///
    /// # Errors
    /// - `NotEditing` outside edit mode.
    /// - Store/serialization errors from `persist`; the in-memory commit
    ///   stands and `persist` can be retried.
    pub fn save(&mut self, now: Instant) -> EditorResult<()> {
        let draft = self.draft.take().ok_or(EditorError::NotEditing)?;
        self.committed = draft;
        self.persist()?;
        self.notification = Some(Notification {
            message: SAVE_NOTIFICATION,
            shown_at: now,
        });
        info!("event=profile_save module=editor status=ok");
        Ok(())
    }

    /// Leaves edit mode, discarding in-progress edits entirely.
    pub fn cancel(&mut self) {
        self.draft = None;
    }

    /// Serializes the committed profile to the `userProfileData` key.
    ///
    /// Idempotent: repeated calls with unchanged state rewrite the same blob.
    pub fn persist(&self) -> EditorResult<()> {
        let raw =
            serde_json::to_string(&self.committed).map_err(|source| EditorError::InvalidBlob {
                key: PROFILE_KEY,
                source,
            })?;
        self.store.set(PROFILE_KEY, &raw)?;
        Ok(())
    }

    /// Returns the banner text while it is within its configured lifetime.
    pub fn notification_at(&self, now: Instant) -> Option<&'static str> {
        let notification = self.notification.as_ref()?;
        if now.duration_since(notification.shown_at) < self.config.notification_duration {
            Some(notification.message)
        } else {
            None
        }
    }

    /// `notification_at` against the current instant.
    pub fn notification(&self) -> Option<&'static str> {
        self.notification_at(Instant::now())
    }
}

fn mime_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
