//! Assignment list editor.
//!
//! # Responsibility
//! - Hold the ordered assignment collection and the add-form state.
//! - Persist the full collection wholesale at defined mutation points.
//!
//! # Invariants
//! - Insertion order is display order; `submit` only appends.
//! - `cancel` and row actions never change the record count.

use super::{EditorError, EditorResult};
use crate::model::assignment::{Assignment, AssignmentId};
use crate::store::{KeyValueStore, ASSIGNMENTS_KEY};
use log::info;

/// Inputs of the add-assignment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    AssignmentName,
    Deadline,
    CourseId,
    LessonId,
}

/// Per-row actions surfaced in the list table.
///
/// Both buttons existed in the source UI without handlers behind them; they
/// are kept as explicit not-yet-supported operations rather than guessed
/// semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
}

impl RowAction {
    /// Stable string id used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Edit => "edit",
            Self::Delete => "delete",
        }
    }
}

/// Current values of the add form; cleared on submit and on cancel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentForm {
    pub assignment_name: String,
    pub deadline: String,
    pub course_id: String,
    pub lesson_id: String,
}

impl AssignmentForm {
    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// List editor owning the assignment collection, the add form and the
/// injected store.
#[derive(Debug)]
pub struct AssignmentListEditor<S: KeyValueStore> {
    store: S,
    records: Vec<Assignment>,
    form: AssignmentForm,
}

impl<S: KeyValueStore> AssignmentListEditor<S> {
    /// Hydrates the editor from the `assignments` key. Runs once.
    ///
    /// An absent key starts an empty collection.
    ///
    /// # Errors
    /// - `InvalidBlob` when the persisted collection fails to deserialize.
    pub fn load(store: S) -> EditorResult<Self> {
        let records: Vec<Assignment> = match store.get(ASSIGNMENTS_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|source| EditorError::InvalidBlob {
                key: ASSIGNMENTS_KEY,
                source,
            })?,
            None => Vec::new(),
        };
        info!(
            "event=list_load module=editor status=ok records={}",
            records.len()
        );

        Ok(Self {
            store,
            records,
            form: AssignmentForm::default(),
        })
    }

    /// Writes one form input value. No validation; empty strings are kept.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::AssignmentName => self.form.assignment_name = value,
            FormField::Deadline => self.form.deadline = value,
            FormField::CourseId => self.form.course_id = value,
            FormField::LessonId => self.form.lesson_id = value,
        }
    }

    /// Returns the current form values.
    pub fn form(&self) -> &AssignmentForm {
        &self.form
    }

    /// Appends a record built from the current form values.
    ///
    /// # Contract
    /// - Prior order is preserved; the new record goes last.
    /// - Form fields are cleared afterwards.
    /// - The full collection is persisted before returning.
    pub fn submit(&mut self) -> EditorResult<AssignmentId> {
        let record = Assignment::new(
            self.form.assignment_name.clone(),
            self.form.deadline.clone(),
            self.form.course_id.clone(),
            self.form.lesson_id.clone(),
        );
        let id = record.id;

        self.records.push(record);
        self.form.clear();
        self.persist()?;
        info!(
            "event=list_submit module=editor status=ok id={id} records={}",
            self.records.len()
        );

        Ok(id)
    }

    /// Clears form fields without touching the collection.
    pub fn cancel(&mut self) {
        self.form.clear();
    }

    /// Serializes the full collection to the `assignments` key.
    ///
    /// Idempotent: repeated calls with unchanged state rewrite the same blob.
    pub fn persist(&self) -> EditorResult<()> {
        let raw =
            serde_json::to_string(&self.records).map_err(|source| EditorError::InvalidBlob {
                key: ASSIGNMENTS_KEY,
                source,
            })?;
        self.store.set(ASSIGNMENTS_KEY, &raw)?;
        Ok(())
    }

    /// Records in display order (== insertion order).
    pub fn records(&self) -> &[Assignment] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Applies one per-row table action.
    ///
    /// # Errors
    /// - `UnsupportedAction` always, until edit/delete semantics are defined.
    pub fn apply_row_action(
        &mut self,
        _id: AssignmentId,
        action: RowAction,
    ) -> EditorResult<()> {
        Err(EditorError::UnsupportedAction(action))
    }
}
