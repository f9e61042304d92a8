use rowmap_core::{stmt::Value, Record, Result};

/// A single-row INSERT.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// Target table, emitted verbatim
    pub table: String,

    /// Inserted columns, in field declaration order
    pub columns: Vec<&'static str>,

    /// One value per column
    pub values: Vec<Value>,
}

impl Insert {
    /// Collects every insertable field of `record`.
    ///
    /// Auto-increment and read-only fields are left for the database to
    /// fill in.
    pub fn from_record<R: Record>(table: &str, record: &R) -> Result<Self> {
        let mut columns = vec![];
        let mut values = vec![];

        for (index, field) in R::fields().iter().enumerate() {
            if !field.is_insertable() {
                continue;
            }

            columns.push(field.column);
            values.push(record.get(index)?);
        }

        Ok(Self {
            table: table.to_string(),
            columns,
            values,
        })
    }
}
