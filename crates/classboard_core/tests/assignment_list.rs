use classboard_core::db::open_db_in_memory;
use classboard_core::{
    Assignment, AssignmentListEditor, EditorError, FormField, KeyValueStore, MemoryStore,
    RowAction, SqliteKeyValueStore, StoreError, StoreResult, ASSIGNMENTS_KEY,
};
use uuid::Uuid;

/// Store whose writes always fail, standing in for a broken backend.
struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> StoreResult<Option<String>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> StoreResult<()> {
        Err(StoreError::MissingRequiredTable("kv_entries"))
    }
}

fn fill_form(editor: &mut AssignmentListEditor<&MemoryStore>, suffix: &str) {
    editor.set_field(FormField::AssignmentName, format!("HW{suffix}"));
    editor.set_field(FormField::Deadline, format!("2024-01-0{suffix}"));
    editor.set_field(FormField::CourseId, format!("C{suffix}"));
    editor.set_field(FormField::LessonId, format!("L{suffix}"));
}

#[test]
fn starts_empty_with_no_persisted_data() {
    let store = MemoryStore::new();
    let editor = AssignmentListEditor::load(&store).unwrap();

    assert!(editor.is_empty());
    assert_eq!(editor.len(), 0);
}

#[test]
fn submit_appends_one_row_and_clears_the_form() {
    let store = MemoryStore::new();
    let mut editor = AssignmentListEditor::load(&store).unwrap();
    fill_form(&mut editor, "1");

    let id = editor.submit().unwrap();

    assert_eq!(editor.len(), 1);
    let row = &editor.records()[0];
    assert_eq!(row.id, id);
    assert_eq!(row.assignment_name, "HW1");
    assert_eq!(row.deadline, "2024-01-01");
    assert_eq!(row.course_id, "C1");
    assert_eq!(row.lesson_id, "L1");

    let form = editor.form();
    assert!(form.assignment_name.is_empty());
    assert!(form.deadline.is_empty());
    assert!(form.course_id.is_empty());
    assert!(form.lesson_id.is_empty());
}

#[test]
fn two_submits_persist_in_insertion_order() {
    let store = MemoryStore::new();
    let mut editor = AssignmentListEditor::load(&store).unwrap();

    fill_form(&mut editor, "1");
    editor.submit().unwrap();
    fill_form(&mut editor, "2");
    editor.submit().unwrap();

    let raw = store.get(ASSIGNMENTS_KEY).unwrap().unwrap();
    let persisted: Vec<Assignment> = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted.len(), 2);
    assert_eq!(persisted[0].assignment_name, "HW1");
    assert_eq!(persisted[1].assignment_name, "HW2");

    // Serialized rows keep the historical field names.
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(json[0].get("assignmentName").is_some());
    assert!(json[0].get("courseID").is_some());
    assert!(json[0].get("lessonID").is_some());
}

#[test]
fn cancel_clears_the_form_and_never_changes_the_record_count() {
    let store = MemoryStore::new();
    let mut editor = AssignmentListEditor::load(&store).unwrap();
    fill_form(&mut editor, "1");
    editor.submit().unwrap();

    fill_form(&mut editor, "2");
    editor.cancel();

    assert_eq!(editor.len(), 1);
    assert!(editor.form().assignment_name.is_empty());
}

#[test]
fn empty_form_values_are_accepted_and_stored() {
    let store = MemoryStore::new();
    let mut editor = AssignmentListEditor::load(&store).unwrap();

    editor.submit().unwrap();

    assert_eq!(editor.len(), 1);
    assert!(editor.records()[0].assignment_name.is_empty());
}

#[test]
fn reload_round_trips_the_collection() {
    let store = MemoryStore::new();
    let mut editor = AssignmentListEditor::load(&store).unwrap();
    fill_form(&mut editor, "1");
    editor.submit().unwrap();
    fill_form(&mut editor, "2");
    editor.submit().unwrap();
    let before: Vec<Assignment> = editor.records().to_vec();

    let reloaded = AssignmentListEditor::load(&store).unwrap();
    assert_eq!(reloaded.records(), before.as_slice());
}

#[test]
fn row_actions_are_explicitly_unsupported() {
    let store = MemoryStore::new();
    let mut editor = AssignmentListEditor::load(&store).unwrap();
    fill_form(&mut editor, "1");
    let id = editor.submit().unwrap();

    let edit_err = editor.apply_row_action(id, RowAction::Edit).unwrap_err();
    assert!(matches!(
        edit_err,
        EditorError::UnsupportedAction(RowAction::Edit)
    ));

    let delete_err = editor.apply_row_action(id, RowAction::Delete).unwrap_err();
    assert!(matches!(
        delete_err,
        EditorError::UnsupportedAction(RowAction::Delete)
    ));

    assert_eq!(editor.len(), 1);
}

#[test]
fn malformed_persisted_blob_is_a_typed_error() {
    let store = MemoryStore::new();
    store.set(ASSIGNMENTS_KEY, "{not json").unwrap();

    let err = AssignmentListEditor::load(&store).unwrap_err();
    assert!(matches!(
        err,
        EditorError::InvalidBlob {
            key: ASSIGNMENTS_KEY,
            ..
        }
    ));
}

#[test]
fn legacy_rows_without_ids_are_backfilled_on_load() {
    let store = MemoryStore::new();
    store
        .set(
            ASSIGNMENTS_KEY,
            r#"[
                {"assignmentName": "HW1", "deadline": "2024-01-01", "courseID": "C1", "lessonID": "L1"},
                {"assignmentName": "HW2", "deadline": "2024-01-02", "courseID": "C2", "lessonID": "L2"}
            ]"#,
        )
        .unwrap();

    let editor = AssignmentListEditor::load(&store).unwrap();
    assert_eq!(editor.len(), 2);

    let ids: Vec<Uuid> = editor.records().iter().map(|row| row.id).collect();
    assert!(ids.iter().all(|id| !id.is_nil()));
    assert_ne!(ids[0], ids[1]);
}

#[test]
fn failed_write_on_submit_surfaces_as_a_store_error() {
    let mut editor = AssignmentListEditor::load(FailingStore).unwrap();
    editor.set_field(FormField::AssignmentName, "HW1");
    editor.set_field(FormField::Deadline, "2024-01-01");
    editor.set_field(FormField::CourseId, "C1");
    editor.set_field(FormField::LessonId, "L1");

    let err = editor.submit().unwrap_err();
    assert!(matches!(err, EditorError::Store(_)));

    // The in-memory append stands and persist stays retriable.
    assert_eq!(editor.len(), 1);
    let persist_err = editor.persist().unwrap_err();
    assert!(matches!(persist_err, EditorError::Store(_)));
}

#[test]
fn sqlite_store_round_trips_through_a_second_editor() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::try_new(&conn).unwrap();

    let mut editor = AssignmentListEditor::load(&store).unwrap();
    editor.set_field(FormField::AssignmentName, "HW1");
    editor.set_field(FormField::Deadline, "2024-01-01");
    editor.set_field(FormField::CourseId, "C1");
    editor.set_field(FormField::LessonId, "L1");
    editor.submit().unwrap();

    let reloaded = AssignmentListEditor::load(&store).unwrap();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.records()[0].assignment_name, "HW1");
}
