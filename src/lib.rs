//! Validated create/append editors for text, spreadsheet, and XML files.
//!
//! Three editors share one contract, [`FileEditor`]:
//! - [`TextEditor`] creates empty `.txt` files and appends trimmed lines
//! - [`SpreadsheetEditor`] creates empty `.xlsx` workbooks and appends a
//!   [`Table`] as a new, uniquely named sheet
//! - [`XmlEditor`] creates single-root `.xml` documents and appends a
//!   child element under the root
//!
//! Every operation validates the target's name and byte content before
//! mutating it, performs exactly one bounded append, and reports failures
//! through the typed [`EditorError`]. A failed call leaves the target
//! file as it was. Nothing retries: a failed call is safe to retry by
//! hand, but retrying a call that succeeded appends its content again.
//!
//! # Example
//!
//! ```rust,no_run
//! use editkit::{
//!     ChildElement, FileEditor, SheetUpdate, SpreadsheetEditor, Table, TextEditor, XmlEditor,
//! };
//! use std::path::Path;
//!
//! fn main() -> editkit::Result<()> {
//!     let dir = Path::new("out");
//!
//!     let text = TextEditor::new();
//!     let notes = text.create(dir, "notes.txt", ())?;
//!     text.update(&notes, "first line")?;
//!
//!     let mut table = Table::new(["calories", "duration"]);
//!     table.push_row(vec![420.into(), 50.into()])?;
//!
//!     let books = SpreadsheetEditor::new();
//!     let report = books.create(dir, "report.xlsx", ())?;
//!     books.update(&report, SheetUpdate { sheet_name: "Sheet1", table: &table })?;
//!
//!     let xml = XmlEditor::new();
//!     let journal = xml.create(dir, "journal.xml", "entries")?;
//!     xml.update(&journal, ChildElement { name: "entry", text: "started" })?;
//!     Ok(())
//! }
//! ```

pub mod editor;
pub mod error;
pub mod spreadsheet;
pub mod table;
pub mod text;
pub mod validate;
pub mod xml;

pub use editor::FileEditor;
pub use error::{EditorError, Result};
pub use spreadsheet::{SheetUpdate, SpreadsheetEditor, WritePolicy};
pub use table::{CellValue, Table};
pub use text::TextEditor;
pub use xml::{ChildElement, XmlEditor};
