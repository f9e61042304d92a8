use rowmap_core::{stmt::Value, Error, Record, Result};

/// A single-row UPDATE.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    /// Target table, emitted verbatim
    pub table: String,

    /// `column = ?` assignments, in field declaration order
    pub assignments: Vec<(&'static str, Value)>,

    /// Which row(s) to update
    pub filter: UpdateFilter,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UpdateFilter {
    /// `WHERE <column> = ?` on the primary key
    PrimaryKey { column: &'static str, value: Value },

    /// Caller-supplied clause appended verbatim. The primary-key value, when
    /// the record has one, is still bound as the last parameter.
    Custom { clause: String, key: Option<Value> },
}

impl Update {
    /// Collects every updatable field of `record` and picks the row filter.
    ///
    /// Fails with a missing-primary-key error when the record type declares
    /// no primary key and no `custom_where` is given.
    pub fn from_record<R: Record>(
        table: &str,
        record: &R,
        custom_where: Option<&str>,
    ) -> Result<Self> {
        let mut assignments = vec![];
        let mut key = None;

        for (index, field) in R::fields().iter().enumerate() {
            if field.primary_key {
                if key.is_none() {
                    key = Some((field.column, record.get(index)?));
                }
                continue;
            }

            if field.read_only {
                continue;
            }

            assignments.push((field.column, record.get(index)?));
        }

        let filter = match (custom_where, key) {
            (Some(clause), key) => UpdateFilter::Custom {
                clause: clause.to_string(),
                key: key.map(|(_, value)| value),
            },
            (None, Some((column, value))) => UpdateFilter::PrimaryKey { column, value },
            (None, None) => return Err(Error::missing_primary_key(table)),
        };

        Ok(Self {
            table: table.to_string(),
            assignments,
            filter,
        })
    }
}
