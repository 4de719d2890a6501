//! Sheet-append editor for spreadsheet workbooks.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use umya_spreadsheet::{new_file_empty_worksheet, reader, writer, Worksheet};

use crate::editor::FileEditor;
use crate::error::{EditorError, Result};
use crate::table::{CellValue, Table};
use crate::validate;

const EXTENSIONS: &[&str] = &["xlsx"];

/// Longest sheet name Excel accepts.
pub const SHEET_NAME_MAX_LEN: usize = 31;

/// Characters Excel rejects in sheet names.
const SHEET_NAME_ILLEGAL: [char; 7] = ['*', ':', '?', '/', '\\', '[', ']'];

/// How workbook-level failures are reported by an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WritePolicy {
    /// Propagate every failure to the caller.
    Strict,
    /// Log workbook read/write failures and report success. Validation
    /// failures and sheet collisions still propagate.
    BestEffort,
}

impl Default for WritePolicy {
    fn default() -> Self {
        WritePolicy::Strict
    }
}

/// Payload for a spreadsheet update: one table plus the workbook-unique
/// name of the sheet it becomes.
#[derive(Debug, Clone, Copy)]
pub struct SheetUpdate<'a> {
    pub sheet_name: &'a str,
    pub table: &'a Table,
}

/// Editor for `.xlsx` workbooks.
///
/// `create` writes a workbook with no sheets; Excel expects at least one,
/// so a fresh workbook is meant to receive an update before it ships.
/// `update` appends the given [`Table`] as a new sheet, column labels in
/// row 1 and data rows below, leaving existing sheets untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpreadsheetEditor {
    policy: WritePolicy,
}

impl SpreadsheetEditor {
    /// Editor that propagates every failure.
    pub fn new() -> Self {
        SpreadsheetEditor {
            policy: WritePolicy::Strict,
        }
    }

    /// Editor that logs workbook read/write failures instead of
    /// propagating them.
    pub fn best_effort() -> Self {
        SpreadsheetEditor {
            policy: WritePolicy::BestEffort,
        }
    }

    pub fn policy(&self) -> WritePolicy {
        self.policy
    }

    fn append_sheet(&self, path: &Path, sheet_name: &str, table: &Table) -> Result<()> {
        let mut book = reader::xlsx::read(path).map_err(|e| EditorError::Workbook {
            path: path.to_path_buf(),
            message: format!("failed to open workbook: {}", e),
        })?;

        if book.get_sheet_by_name(sheet_name).is_some() {
            return Err(EditorError::SheetCollision {
                path: path.to_path_buf(),
                name: sheet_name.to_string(),
            });
        }

        let sheet = book.new_sheet(sheet_name).map_err(|e| EditorError::Workbook {
            path: path.to_path_buf(),
            message: format!("failed to add sheet: {}", e),
        })?;
        write_table(sheet, table);

        writer::xlsx::write(&book, path).map_err(|e| EditorError::Workbook {
            path: path.to_path_buf(),
            message: format!("failed to save workbook: {}", e),
        })?;

        log::debug!(
            "appended sheet `{}` ({} rows) to {}",
            sheet_name,
            table.row_count(),
            path.display()
        );
        Ok(())
    }
}

impl FileEditor for SpreadsheetEditor {
    type CreateSpec<'a> = ();
    type UpdateSpec<'a> = SheetUpdate<'a>;

    fn accepted_extensions(&self) -> &'static [&'static str] {
        EXTENSIONS
    }

    fn check_signature(&self, path: &Path) -> Result<()> {
        validate::require_signature(path, EXTENSIONS)
    }

    fn create(&self, directory: &Path, file_name: &str, _spec: ()) -> Result<PathBuf> {
        validate::require_directory(directory)?;
        validate::require_extension(file_name, EXTENSIONS)?;

        let path = directory.join(file_name);
        validate::require_absent(&path)?;

        // No default sheet; the first update supplies the first one.
        let book = new_file_empty_worksheet();
        writer::xlsx::write(&book, &path).map_err(|e| EditorError::Workbook {
            path: path.clone(),
            message: format!("failed to write workbook: {}", e),
        })?;

        log::debug!("created workbook {}", path.display());
        Ok(path)
    }

    fn update(&self, path: &Path, spec: SheetUpdate<'_>) -> Result<()> {
        validate::require_file(path)?;
        self.validate_signature(path)?;
        check_sheet_name(spec.sheet_name)?;

        match self.append_sheet(path, spec.sheet_name, spec.table) {
            Err(e) if self.policy == WritePolicy::BestEffort && e.is_workbook_error() => {
                log::warn!("update of {} dropped: {}", path.display(), e);
                Ok(())
            }
            result => result,
        }
    }
}

/// Write the column labels as row 1 and the data rows below them.
fn write_table(sheet: &mut Worksheet, table: &Table) {
    for (col_idx, label) in table.columns().iter().enumerate() {
        let col_num = (col_idx + 1) as u32;
        sheet.get_cell_mut((col_num, 1)).set_value(label);
    }

    for (row_idx, row) in table.rows().iter().enumerate() {
        let row_num = (row_idx + 2) as u32;
        for (col_idx, cell) in row.iter().enumerate() {
            let col_num = (col_idx + 1) as u32;
            let cell_ref = sheet.get_cell_mut((col_num, row_num));
            match cell {
                CellValue::Empty => {}
                CellValue::String(s) => {
                    cell_ref.set_value(s);
                }
                CellValue::Number(n) => {
                    cell_ref.set_value(n.to_string());
                }
                CellValue::Boolean(b) => {
                    cell_ref.set_value(if *b { "TRUE" } else { "FALSE" });
                }
            }
        }
    }
}

/// Reject names Excel itself would refuse, before any workbook I/O.
fn check_sheet_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(invalid_sheet_name(name, "name is empty"));
    }
    if name.chars().count() > SHEET_NAME_MAX_LEN {
        return Err(invalid_sheet_name(
            name,
            &format!("name is longer than {} characters", SHEET_NAME_MAX_LEN),
        ));
    }
    if let Some(c) = name.chars().find(|c| SHEET_NAME_ILLEGAL.contains(c)) {
        return Err(invalid_sheet_name(name, &format!("`{}` is not allowed", c)));
    }
    Ok(())
}

fn invalid_sheet_name(name: &str, reason: &str) -> EditorError {
    EditorError::InvalidSheetName {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_name_accepts_plain_names() {
        assert!(check_sheet_name("Sheet1").is_ok());
        assert!(check_sheet_name("Q3 revenue").is_ok());
        assert!(check_sheet_name(&"x".repeat(SHEET_NAME_MAX_LEN)).is_ok());
    }

    #[test]
    fn test_sheet_name_rejects_empty_and_blank() {
        assert!(check_sheet_name("").is_err());
        assert!(check_sheet_name("   ").is_err());
    }

    #[test]
    fn test_sheet_name_rejects_overlong_names() {
        assert!(check_sheet_name(&"x".repeat(SHEET_NAME_MAX_LEN + 1)).is_err());
    }

    #[test]
    fn test_sheet_name_rejects_illegal_characters() {
        for name in ["a*b", "a:b", "a?b", "a/b", "a\\b", "a[b", "a]b"] {
            assert!(check_sheet_name(name).is_err(), "accepted `{name}`");
        }
    }

    #[test]
    fn test_default_policy_is_strict() {
        assert_eq!(SpreadsheetEditor::default().policy(), WritePolicy::Strict);
        assert_eq!(
            SpreadsheetEditor::best_effort().policy(),
            WritePolicy::BestEffort
        );
    }
}
