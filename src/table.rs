//! The tabular payload consumed by the spreadsheet editor.

use serde::{Deserialize, Serialize};

use crate::error::{EditorError, Result};

/// A single cell value with its type made explicit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum CellValue {
    Empty,
    String(String),
    Number(f64),
    Boolean(bool),
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Empty
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::String(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::String(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Boolean(value)
    }
}

/// A column-labeled, row-ordered table that becomes one worksheet.
///
/// Rows are checked against the column count as they are added, so a
/// `Table` handed to the spreadsheet editor is always rectangular.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Empty table with the given column labels.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Table {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Build a table from complete rows, checking every row's width.
    pub fn from_rows<I, S>(columns: I, rows: Vec<Vec<CellValue>>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Table::new(columns);
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Append one row. Fails without modifying the table if the row's
    /// width does not match the column count.
    pub fn push_row(&mut self, row: Vec<CellValue>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(EditorError::RaggedRow {
                expected: self.columns.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Column labels, in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Data rows, excluding the column labels.
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True when the table holds no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_row_accepts_matching_width() {
        let mut table = Table::new(["name", "qty"]);
        table
            .push_row(vec!["apples".into(), 3.into()])
            .unwrap();
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn test_push_row_rejects_ragged_row() {
        let mut table = Table::new(["name", "qty"]);
        let err = table.push_row(vec!["apples".into()]).unwrap_err();
        match err {
            EditorError::RaggedRow { expected, found } => {
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(table.is_empty());
    }

    #[test]
    fn test_from_rows_checks_every_row() {
        let rows = vec![
            vec![CellValue::from("a"), CellValue::from(1)],
            vec![CellValue::from("b")],
        ];
        assert!(Table::from_rows(["x", "y"], rows).is_err());
    }

    #[test]
    fn test_cell_value_conversions() {
        assert_eq!(CellValue::from("hi"), CellValue::String("hi".to_string()));
        assert_eq!(CellValue::from(2.5), CellValue::Number(2.5));
        assert_eq!(CellValue::from(4), CellValue::Number(4.0));
        assert_eq!(CellValue::from(true), CellValue::Boolean(true));
        assert_eq!(CellValue::default(), CellValue::Empty);
    }
}
