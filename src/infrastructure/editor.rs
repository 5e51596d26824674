//! External editor integration for composing entries

use crate::error::{MoodlogError, Result};
use std::path::Path;
use std::process::Command;

/// Session for editing a draft file in an external editor
pub struct EditorSession {
    command: String,
}

impl EditorSession {
    /// Create a new editor session with the given command
    pub fn new(editor_command: String) -> Self {
        EditorSession {
            command: editor_command,
        }
    }

    /// Open a file in the editor and block until the editor exits.
    /// The caller reads the draft back afterwards.
    pub fn edit(&self, file_path: &Path) -> Result<()> {
        let (program, args) = self.parse_command();

        let mut all_args = args;
        all_args.push(file_path.to_string_lossy().to_string());

        // On Windows, use cmd /c to ensure .bat and .cmd files are found
        let status = if cfg!(windows) {
            Command::new("cmd")
                .arg("/C")
                .arg(&program)
                .args(&all_args)
                .status()
        } else {
            Command::new(&program).args(&all_args).status()
        };

        let status = status.map_err(|e| {
            MoodlogError::Editor(format!("Failed to launch editor '{}': {}", program, e))
        })?;

        if !status.success() {
            return Err(MoodlogError::Editor(format!(
                "Editor '{}' exited with status {}",
                program, status
            )));
        }

        Ok(())
    }

    /// Parse command into program and arguments
    fn parse_command(&self) -> (String, Vec<String>) {
        let parts: Vec<&str> = self.command.split_whitespace().collect();

        if parts.is_empty() {
            // Fallback if the configured command is empty
            return ("nano".to_string(), vec![]);
        }

        let program = parts[0].to_string();
        let args = parts[1..].iter().map(|s| s.to_string()).collect();

        (program, args)
    }
}
