//! Compose entry content in an external editor
//!
//! Used by `add` and `edit` when no message is given on the command line:
//! a draft file is opened in the configured editor and read back once the
//! editor exits.

use crate::error::Result;
use crate::infrastructure::{EditorSession, FileSystemRepository, JournalRepository};
use std::fs;

/// Relative path of the draft file inside the journal
const DRAFT_FILE: &str = ".moodlog/draft.md";

/// Open the configured editor on a draft file seeded with `initial` and
/// return the edited text. The draft is removed afterwards.
pub fn compose_content(repository: &FileSystemRepository, initial: &str) -> Result<String> {
    let config = repository.load_config()?;
    let draft_path = repository.root().join(DRAFT_FILE);

    fs::write(&draft_path, initial)?;

    let editor = EditorSession::new(config.get_editor());
    let edit_result = editor.edit(&draft_path);

    let content = fs::read_to_string(&draft_path).unwrap_or_default();
    let _ = fs::remove_file(&draft_path);

    edit_result?;
    Ok(content.trim().to_string())
}
