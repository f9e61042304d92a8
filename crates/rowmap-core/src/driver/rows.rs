use super::{Cursor, ScanTargets};
use crate::{stmt::Value, Error, Result};

use std::collections::VecDeque;

/// A fully buffered result set.
///
/// Drivers read every row up front and hand the buffer to the mapper, so
/// the cursor never holds a borrow on the driver's statement.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Rows {
    columns: Vec<String>,
    rows: VecDeque<Vec<Value>>,
    current: Option<Vec<Value>>,
}

impl Rows {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self {
            columns,
            rows: rows.into(),
            current: None,
        }
    }

    /// Number of rows not yet advanced past.
    pub fn remaining(&self) -> usize {
        self.rows.len()
    }

    fn column_name(&self, column: usize) -> &str {
        self.columns.get(column).map_or("?", String::as_str)
    }
}

impl Cursor for Rows {
    fn columns(&mut self) -> Result<Vec<String>> {
        Ok(self.columns.clone())
    }

    fn advance(&mut self) -> Result<bool> {
        self.current = self.rows.pop_front();
        Ok(self.current.is_some())
    }

    fn scan(&mut self, targets: &mut ScanTargets<'_>) -> Result<()> {
        let Some(row) = self.current.as_ref() else {
            return Err(Error::scan("scan called without a current row"));
        };

        if row.len() != self.columns.len() {
            return Err(Error::scan(format!(
                "row has {} values but {} columns",
                row.len(),
                self.columns.len()
            )));
        }

        if targets.len() < row.len() {
            return Err(Error::scan(format!(
                "expected {} destination arguments in scan, not {}",
                row.len(),
                targets.len()
            )));
        }

        if let Some(column) = (0..row.len()).find(|column| !targets.covers(*column)) {
            return Err(Error::scan(format!(
                "column {column} (`{}`) has no scan destination",
                self.column_name(column)
            )));
        }

        let sources: Vec<usize> = targets.iter().map(|target| target.column).collect();

        for (position, column) in sources.into_iter().enumerate() {
            let Some(value) = row.get(column) else {
                return Err(Error::scan(format!(
                    "scan destination reads column {column}, but the row has {} columns",
                    row.len()
                )));
            };

            targets.set(position, value.clone()).map_err(|err| {
                let field = targets.field(position).map(|field| field.name).unwrap_or("?");
                err.context(Error::scan(format!(
                    "column {column} (`{}`) into field `{field}`",
                    self.column_name(column)
                )))
            })?;
        }

        Ok(())
    }
}
