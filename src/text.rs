//! Line-append editor for plain-text files.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::editor::FileEditor;
use crate::error::{EditorError, Result};
use crate::validate;

const EXTENSIONS: &[&str] = &["txt"];

/// Editor for `.txt` files.
///
/// `create` writes an empty file. `update` appends the content with
/// surrounding whitespace trimmed, followed by a single space and a
/// newline, so repeated updates accumulate one line per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextEditor;

impl TextEditor {
    pub fn new() -> Self {
        TextEditor
    }
}

impl FileEditor for TextEditor {
    type CreateSpec<'a> = ();
    type UpdateSpec<'a> = &'a str;

    fn accepted_extensions(&self) -> &'static [&'static str] {
        EXTENSIONS
    }

    fn check_signature(&self, path: &Path) -> Result<()> {
        validate::require_text_content(path)
    }

    fn create(&self, directory: &Path, file_name: &str, _spec: ()) -> Result<PathBuf> {
        validate::require_directory(directory)?;
        validate::require_extension(file_name, EXTENSIONS)?;

        let path = directory.join(file_name);
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => EditorError::AlreadyExists(path.clone()),
                _ => EditorError::Io(e),
            })?;

        log::debug!("created text file {}", path.display());
        Ok(path)
    }

    fn update(&self, path: &Path, content: &str) -> Result<()> {
        validate::require_file(path)?;
        self.validate_signature(path)?;

        let line = format!("{} \n", content.trim());
        let mut file = OpenOptions::new().append(true).open(path)?;
        file.write_all(line.as_bytes())?;

        log::debug!("appended {} bytes to {}", line.len(), path.display());
        Ok(())
    }
}
