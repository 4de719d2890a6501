//! Validation helpers shared by the editors.
//!
//! Name checks are purely syntactic and never read the file; content
//! checks are purely byte-level and never look at the name. The editors
//! compose the two, name first.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use content_inspector::{inspect, ContentType};

use crate::error::{EditorError, Result};

/// Bytes inspected when deciding whether content is binary.
const BINARY_SNIFF_LEN: u64 = 1024;

/// Fail unless `path` is an existing directory.
pub fn require_directory(path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(EditorError::DirectoryNotFound(path.to_path_buf()))
    }
}

/// Fail unless `path` is an existing file.
pub fn require_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(EditorError::FileNotFound(path.to_path_buf()))
    }
}

/// Fail if `path` already exists in any form.
pub fn require_absent(path: &Path) -> Result<()> {
    if path.exists() {
        Err(EditorError::AlreadyExists(path.to_path_buf()))
    } else {
        Ok(())
    }
}

/// Fail unless `file_name` splits on `.` into exactly a stem and one
/// extension listed in `accepted`.
///
/// The comparison is case-sensitive and exact: `notes.txt` passes for
/// `["txt"]`, while `notes`, `notes.TXT`, and `my.notes.txt` all fail.
pub fn require_extension(file_name: &str, accepted: &[&str]) -> Result<()> {
    let segments: Vec<&str> = file_name.split('.').collect();
    if segments.len() == 2 && accepted.contains(&segments[1]) {
        Ok(())
    } else {
        Err(invalid_file_name(file_name, accepted))
    }
}

/// Extract the final path component as UTF-8.
pub fn file_name_of<'a>(path: &'a Path, accepted: &[&str]) -> Result<&'a str> {
    path.file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| invalid_file_name(&path.display().to_string(), accepted))
}

pub(crate) fn invalid_file_name(name: &str, accepted: &[&str]) -> EditorError {
    EditorError::InvalidFileName {
        name: name.to_string(),
        accepted: accepted.join(", "),
    }
}

/// Fail unless the head of the file (first kilobyte) is UTF-8 text.
/// BOM'd UTF-16/32 content fails like outright binary data. An empty
/// file counts as text.
pub fn require_text_content(path: &Path) -> Result<()> {
    let mut head = Vec::with_capacity(BINARY_SNIFF_LEN as usize);
    File::open(path)?
        .take(BINARY_SNIFF_LEN)
        .read_to_end(&mut head)?;
    match inspect(&head) {
        ContentType::UTF_8 | ContentType::UTF_8_BOM => Ok(()),
        _ => Err(EditorError::BinaryContent(path.to_path_buf())),
    }
}

/// Fail unless magic-number sniffing maps the file's content to one of
/// the `accepted` extensions.
///
/// A recognized-but-wrong signature and an unrecognizable one are
/// reported as distinct errors.
pub fn require_signature(path: &Path, accepted: &[&str]) -> Result<()> {
    match infer::get_from_path(path)? {
        Some(kind) if accepted.contains(&kind.extension()) => Ok(()),
        Some(kind) => Err(EditorError::SignatureMismatch {
            path: path.to_path_buf(),
            detected: kind.extension().to_string(),
            accepted: accepted.join(", "),
        }),
        None => Err(EditorError::SignatureUnknown(path.to_path_buf())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_exact_extension() {
        assert!(require_extension("notes.txt", &["txt"]).is_ok());
        assert!(require_extension("report.xlsx", &["xlsx"]).is_ok());
    }

    #[test]
    fn test_accepts_empty_stem() {
        assert!(require_extension(".txt", &["txt"]).is_ok());
    }

    #[test]
    fn test_rejects_missing_extension() {
        assert!(require_extension("notes", &["txt"]).is_err());
    }

    #[test]
    fn test_rejects_wrong_extension() {
        assert!(require_extension("notes.md", &["txt"]).is_err());
    }

    #[test]
    fn test_rejects_extra_dots() {
        assert!(require_extension("my.notes.txt", &["txt"]).is_err());
        assert!(require_extension("notes.txt.", &["txt"]).is_err());
    }

    #[test]
    fn test_rejects_case_mismatch() {
        assert!(require_extension("notes.TXT", &["txt"]).is_err());
        assert!(require_extension("notes.Txt", &["txt"]).is_err());
    }

    #[test]
    fn test_invalid_name_lists_accepted_extensions() {
        let err = require_extension("notes", &["txt", "text"]).unwrap_err();
        match err {
            EditorError::InvalidFileName { name, accepted } => {
                assert_eq!(name, "notes");
                assert_eq!(accepted, "txt, text");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
