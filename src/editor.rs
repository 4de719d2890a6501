//! The contract shared by every format editor.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::validate;

/// One format-specific editor over files of a single kind.
///
/// Editors validate the target before touching it and perform exactly one
/// bounded mutation per call. The associated types let each format keep
/// its natural argument shape while exposing the same three operations.
pub trait FileEditor {
    /// Format-specific arguments for [`FileEditor::create`].
    type CreateSpec<'a>;

    /// Format-specific payload for [`FileEditor::update`].
    type UpdateSpec<'a>;

    /// Extensions this editor accepts, without the leading dot.
    fn accepted_extensions(&self) -> &'static [&'static str];

    /// Create a minimal valid document named `file_name` inside
    /// `directory` and return its path.
    ///
    /// Fails if the directory is missing, the name does not carry an
    /// accepted extension, or the target already exists. Nothing is
    /// written on failure.
    fn create(
        &self,
        directory: &Path,
        file_name: &str,
        spec: Self::CreateSpec<'_>,
    ) -> Result<PathBuf>;

    /// Apply one append to the existing file at `path`.
    ///
    /// The file must exist and pass [`FileEditor::validate_signature`];
    /// a failed update leaves the file's bytes as they were.
    fn update(&self, path: &Path, spec: Self::UpdateSpec<'_>) -> Result<()>;

    /// Check the file's byte content against this editor's format,
    /// ignoring the file name entirely.
    fn check_signature(&self, path: &Path) -> Result<()>;

    /// Validate the file name's extension, then the byte content.
    ///
    /// The name check runs first and its failure wins; content is only
    /// inspected once the name is acceptable.
    fn validate_signature(&self, path: &Path) -> Result<()> {
        let accepted = self.accepted_extensions();
        let file_name = validate::file_name_of(path, accepted)?;
        validate::require_extension(file_name, accepted)?;
        self.check_signature(path)
    }
}
