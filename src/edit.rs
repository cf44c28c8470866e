//! The edit round trip: stage a value in a temporary file, hand the file to
//! the editor, and read back whatever the editor left there.
//!
//! The temporary file is owned by a [`tempfile::TempPath`] for the whole
//! round trip, so it is removed on every exit path, including early returns
//! and panics that unwind.

use anyhow::Result;
use std::io::Write;
use tracing::{debug, warn};

use crate::app_deps::EditorLauncher;
use crate::constants;
use crate::errors::EditorError;

/// Run `initial` through the editor and return the edited content.
///
/// Nothing is returned unless the editor exited successfully. The content is
/// returned even when unchanged; callers always write it back.
pub async fn edit_value(launcher: &dyn EditorLauncher, initial: &str) -> Result<String> {
    let mut file = tempfile::Builder::new()
        .prefix(constants::editor::TEMP_FILE_PREFIX)
        .suffix(constants::editor::TEMP_FILE_SUFFIX)
        .tempfile()
        .map_err(EditorError::TempFile)?;

    file.write_all(initial.as_bytes())
        .and_then(|()| file.flush())
        .map_err(EditorError::TempFile)?;

    // Close our handle; some editors replace the file rather than rewrite it.
    let path = file.into_temp_path();
    debug!(path = %path.display(), "staged secret in temporary file");

    launcher.launch(&path).await?;

    let edited = std::fs::read_to_string(&path).map_err(EditorError::ReadBack)?;

    let shown = path.display().to_string();
    if let Err(err) = path.close() {
        warn!(path = %shown, error = %err, "failed to remove temporary file");
    }

    Ok(edited)
}
