//! Assignment domain model.
//!
//! # Responsibility
//! - Define the row shape entered through the assignment-list form.
//! - Keep serialized field names compatible with previously persisted blobs.
//!
//! # Invariants
//! - `id` is stable and never reused for another assignment.
//! - All form-entered fields are free text; empty strings are valid.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one assignment row.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type AssignmentId = Uuid;

/// One assignment as entered through the list editor form.
///
/// Serialized field names match the historical blob (`assignmentName`,
/// `courseID`, `lessonID`). Earlier revisions persisted rows without an
/// identifier, so `id` is backfilled with a fresh value during hydration
/// when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Backfilled for rows persisted before ids existed.
    #[serde(default = "Uuid::new_v4")]
    pub id: AssignmentId,
    #[serde(rename = "assignmentName")]
    pub assignment_name: String,
    /// Date string taken verbatim from the form; no format enforcement.
    pub deadline: String,
    /// Free text; not cross-checked against any course entity.
    #[serde(rename = "courseID")]
    pub course_id: String,
    /// Free text; not cross-checked against any lesson entity.
    #[serde(rename = "lessonID")]
    pub lesson_id: String,
}

impl Assignment {
    /// Creates a row from raw form values with a generated stable id.
    ///
    /// Values are stored verbatim; empty strings are accepted.
    pub fn new(
        assignment_name: impl Into<String>,
        deadline: impl Into<String>,
        course_id: impl Into<String>,
        lesson_id: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            assignment_name: assignment_name.into(),
            deadline: deadline.into(),
            course_id: course_id.into(),
            lesson_id: lesson_id.into(),
        }
    }
}
