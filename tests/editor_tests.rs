//! Tests for launching a real editor process.
//!
//! `true` and `false` stand in for an editor that exits cleanly or not.

#![cfg(unix)]

use std::path::Path;

use smed::app_deps::{EditorLauncher, RealEditor};
use smed::edit::edit_value;
use smed::errors::EditorError;

#[tokio::test]
async fn test_successful_editor_keeps_content() {
    let editor = RealEditor::new("true");
    let edited = edit_value(&editor, r#"{"a":1}"#).await.unwrap();
    assert_eq!(edited, r#"{"a":1}"#);
}

#[tokio::test]
async fn test_failing_editor_is_an_error() {
    let editor = RealEditor::new("false");
    let err = editor.launch(Path::new("/dev/null")).await.unwrap_err();
    match err.downcast_ref::<EditorError>() {
        Some(EditorError::Failed { program, code }) => {
            assert_eq!(program, "false");
            assert_eq!(*code, Some(1));
        }
        other => panic!("unexpected error: {other:?}"),
    }

    assert!(edit_value(&editor, "{}").await.is_err());
}

#[tokio::test]
async fn test_missing_editor_is_reported_by_name() {
    let editor = RealEditor::new("smed-test-editor-that-does-not-exist");
    let err = edit_value(&editor, "{}").await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<EditorError>(),
        Some(EditorError::NotFound { .. })
    ));
}
