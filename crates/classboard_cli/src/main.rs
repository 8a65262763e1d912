//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `classboard_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use classboard_core::{AssignmentListEditor, FormField, MemoryStore};
use std::error::Error;

fn main() {
    if let Err(err) = run() {
        eprintln!("classboard_cli error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    println!("classboard_core version={}", classboard_core::core_version());

    // One in-memory add/reload round-trip to exercise the store boundary.
    let store = MemoryStore::new();
    let mut editor = AssignmentListEditor::load(&store)?;
    editor.set_field(FormField::AssignmentName, "HW1");
    editor.set_field(FormField::Deadline, "2024-01-01");
    editor.set_field(FormField::CourseId, "C1");
    editor.set_field(FormField::LessonId, "L1");
    editor.submit()?;

    let reloaded = AssignmentListEditor::load(&store)?;
    println!("assignments persisted={}", reloaded.len());
    Ok(())
}
