use crate::{schema::RecordMut, stmt::Value, Error, Field, Result};

/// A pull-based result set.
///
/// [`columns`](Cursor::columns) reports the column names once;
/// [`advance`](Cursor::advance) moves to the next row and returns `false`
/// once exhausted; [`scan`](Cursor::scan) writes the current row into the
/// given targets.
pub trait Cursor {
    fn columns(&mut self) -> Result<Vec<String>>;

    fn advance(&mut self) -> Result<bool>;

    fn scan(&mut self, targets: &mut ScanTargets<'_>) -> Result<()>;
}

/// One scan destination: the field at `field` receives the value of the
/// column at `column`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanTarget {
    /// Position of the source column in the result set
    pub column: usize,

    /// Index of the destination field in the record's descriptor table
    pub field: usize,
}

/// The ordered destinations for scanning one row into one record.
///
/// Targets are kept in column order. A column matched by several fields
/// contributes one target per field; a column matched by none contributes
/// nothing.
pub struct ScanTargets<'a> {
    record: &'a mut dyn RecordMut,
    targets: Vec<ScanTarget>,
}

impl<'a> ScanTargets<'a> {
    pub fn new(record: &'a mut dyn RecordMut) -> Self {
        Self {
            record,
            targets: Vec::new(),
        }
    }

    pub fn push(&mut self, column: usize, field: usize) {
        self.targets.push(ScanTarget { column, field });
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScanTarget> + '_ {
        self.targets.iter()
    }

    /// Returns `true` if at least one target reads from `column`.
    pub fn covers(&self, column: usize) -> bool {
        self.targets.iter().any(|target| target.column == column)
    }

    /// Descriptor of the field behind the target at `position`.
    pub fn field(&self, position: usize) -> Option<&'static Field> {
        let target = self.targets.get(position)?;
        self.record.field(target.field)
    }

    /// Writes `value` through the record's mutator for the target at
    /// `position`.
    pub fn set(&mut self, position: usize, value: Value) -> Result<()> {
        let Some(target) = self.targets.get(position) else {
            return Err(Error::scan(format!(
                "no scan destination at position {position} ({} destinations)",
                self.targets.len()
            )));
        };

        self.record.set_field(target.field, value)
    }
}

impl core::fmt::Debug for ScanTargets<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("ScanTargets")
            .field("record", &self.record.record_name())
            .field("targets", &self.targets)
            .finish()
    }
}
