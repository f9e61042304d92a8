use super::Error;

/// Error when an UPDATE is generated for a record type that declares no
/// primary key and the caller supplied no custom WHERE clause.
#[derive(Debug)]
pub(super) struct MissingPrimaryKeyError {
    table: Box<str>,
}

impl std::error::Error for MissingPrimaryKeyError {}

impl core::fmt::Display for MissingPrimaryKeyError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "missing primary key: table `{}` has no primary-key field and no custom WHERE clause was given",
            self.table
        )
    }
}

impl Error {
    /// Creates a missing primary key error for the given table.
    pub fn missing_primary_key(table: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingPrimaryKey(MissingPrimaryKeyError {
            table: table.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing primary key error.
    pub fn is_missing_primary_key(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingPrimaryKey(_))
    }
}
