//! User profile domain model.
//!
//! # Responsibility
//! - Define the single mutable profile record edited in place.
//! - Provide the seed account used before any profile has been saved.
//!
//! # Invariants
//! - All fields are free text; presence is the only contract.
//! - `avatar` holds either an asset path or a `data:<mime>;base64,` URI.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Gender values offered by the profile form select.
pub const GENDER_OPTIONS: &[&str] = &["Male", "Female"];

static DATA_URI_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^data:[a-zA-Z0-9.+-]+/[a-zA-Z0-9.+-]+;base64,").expect("valid data uri regex")
});

/// Single user profile record backing the profile editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub full_name: String,
    /// Asset path, or an embedded data URI after an avatar upload.
    pub avatar: String,
    pub email: String,
    pub birthday: String,
    pub phone: String,
    pub gender: String,
    pub job: String,
}

impl Default for Profile {
    /// Seed account displayed before any profile has been persisted.
    fn default() -> Self {
        Self {
            full_name: "William Smith".to_string(),
            avatar: "/public/assets/image/ava-big-author.jpg".to_string(),
            email: "smith@email.com".to_string(),
            birthday: "23/05/1993".to_string(),
            phone: "0123456789".to_string(),
            gender: "Male".to_string(),
            job: "Assistant Teacher".to_string(),
        }
    }
}

impl Profile {
    /// Returns whether `avatar` holds an embedded data URI rather than an
    /// asset path.
    pub fn avatar_is_data_uri(&self) -> bool {
        DATA_URI_RE.is_match(&self.avatar)
    }
}

#[cfg(test)]
mod tests {
    use super::{Profile, GENDER_OPTIONS};

    #[test]
    fn gender_options_match_the_form_select() {
        assert_eq!(GENDER_OPTIONS, &["Male", "Female"][..]);
    }

    #[test]
    fn default_profile_is_the_seed_account() {
        let profile = Profile::default();
        assert_eq!(profile.full_name, "William Smith");
        assert_eq!(profile.job, "Assistant Teacher");
        assert!(!profile.avatar_is_data_uri());
    }

    #[test]
    fn serializes_with_camel_case_field_names() {
        let json = serde_json::to_value(Profile::default()).expect("profile should serialize");
        assert!(json.get("fullName").is_some());
        assert!(json.get("birthday").is_some());
        assert!(json.get("full_name").is_none());
    }

    #[test]
    fn detects_embedded_data_uri_avatars() {
        let mut profile = Profile::default();
        profile.avatar = "data:image/png;base64,aGVsbG8=".to_string();
        assert!(profile.avatar_is_data_uri());

        profile.avatar = "/assets/image/avatar.png".to_string();
        assert!(!profile.avatar_is_data_uri());
    }
}
