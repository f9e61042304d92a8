use super::Field;
use crate::{stmt::Value, Result};

/// A record type that maps to relational rows.
///
/// Implemented by `#[derive(Record)]`. The descriptor table returned by
/// [`fields`](Record::fields) drives both result mapping and statement
/// generation; [`get`](Record::get) and [`set`](Record::set) address fields by
/// their position in that table.
pub trait Record: Default + Sized {
    /// Record type name
    const NAME: &'static str;

    /// Descriptor table of the mapped fields, in declaration order.
    fn fields() -> &'static [Field];

    /// Reads the current value of the field at `index`.
    fn get(&self, index: usize) -> Result<Value>;

    /// Stores `value` into the field at `index`.
    fn set(&mut self, index: usize, value: Value) -> Result<()>;

    /// Returns the primary-key field and its index, if the type declares one.
    ///
    /// When several fields are marked, the first one in declaration order is
    /// the key.
    fn primary_key() -> Option<(usize, &'static Field)> {
        Self::fields()
            .iter()
            .enumerate()
            .find(|(_, field)| field.primary_key)
    }

    /// Indices of every field mapped to `column`, in declaration order.
    fn field_indices(column: &str) -> impl Iterator<Item = usize> + '_ {
        Self::fields()
            .iter()
            .enumerate()
            .filter(move |(_, field)| field.column == column)
            .map(|(index, _)| index)
    }
}

/// Object-safe mutator view of a record, handed to cursors as the
/// destination of a scan.
pub trait RecordMut {
    fn record_name(&self) -> &'static str;

    fn field(&self, index: usize) -> Option<&'static Field>;

    fn set_field(&mut self, index: usize, value: Value) -> Result<()>;
}

impl<R: Record> RecordMut for R {
    fn record_name(&self) -> &'static str {
        R::NAME
    }

    fn field(&self, index: usize) -> Option<&'static Field> {
        R::fields().get(index)
    }

    fn set_field(&mut self, index: usize, value: Value) -> Result<()> {
        self.set(index, value)
    }
}
