//! Error types shared by every editor.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T, E = EditorError> = std::result::Result<T, E>;

/// Failures reported by the file editors.
///
/// Validation failures (directories, names, signatures) are raised before
/// any filesystem mutation, so an `Err` from a single editor call means
/// the target was left as it was.
#[derive(Debug, Error)]
pub enum EditorError {
    /// The directory a file should be created in does not exist.
    #[error("directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// The file an update targets does not exist.
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The file a create targets already exists.
    #[error("file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// The file name does not carry exactly one accepted extension.
    #[error("invalid file name `{name}` (accepted: {accepted})")]
    InvalidFileName { name: String, accepted: String },

    /// A text-format update hit binary content.
    #[error("binary content in {} where text was expected", .0.display())]
    BinaryContent(PathBuf),

    /// Magic-number sniffing recognized the content as a different format.
    #[error("{} has content type `{detected}` (accepted: {accepted})", .path.display())]
    SignatureMismatch {
        path: PathBuf,
        detected: String,
        accepted: String,
    },

    /// Magic-number sniffing could not recognize the content at all.
    #[error("content type of {} could not be determined", .0.display())]
    SignatureUnknown(PathBuf),

    /// The sheet name is empty, too long, or uses characters Excel rejects.
    #[error("invalid sheet name `{name}`: {reason}")]
    InvalidSheetName { name: String, reason: String },

    /// A sheet with the requested name already exists in the workbook.
    #[error("sheet `{name}` already exists in {}", .path.display())]
    SheetCollision { path: PathBuf, name: String },

    /// The spreadsheet library failed to read or write the workbook.
    #[error("workbook error for {}: {message}", .path.display())]
    Workbook { path: PathBuf, message: String },

    /// The XML document could not be parsed; the file is left untouched.
    #[error("malformed XML in {}: {message}", .path.display())]
    MalformedXml { path: PathBuf, message: String },

    /// The element name does not satisfy the XML name rules.
    #[error("invalid XML element name `{0}`")]
    InvalidElementName(String),

    /// A row's width does not match the table's column count.
    #[error("row has {found} cells, expected {expected}")]
    RaggedRow { expected: usize, found: usize },

    /// Any other I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl EditorError {
    /// True for failures raised by the workbook reader or writer, as
    /// opposed to this crate's own validation.
    pub fn is_workbook_error(&self) -> bool {
        matches!(self, EditorError::Workbook { .. })
    }
}
