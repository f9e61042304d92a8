use super::Error;

/// Error when a cursor cannot report the column names of its result set.
///
/// The underlying driver failure, if any, is attached as the cause.
#[derive(Debug)]
pub(super) struct ColumnRetrievalError;

impl std::error::Error for ColumnRetrievalError {}

impl core::fmt::Display for ColumnRetrievalError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("failed to retrieve result columns")
    }
}

impl Error {
    /// Creates a column retrieval error.
    ///
    /// Usually attached as context to the driver error that caused it:
    /// `err.context(Error::column_retrieval())`.
    pub fn column_retrieval() -> Error {
        Error::from(super::ErrorKind::ColumnRetrieval(ColumnRetrievalError))
    }

    /// Returns `true` if this error is a column retrieval error.
    pub fn is_column_retrieval(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ColumnRetrieval(_))
    }
}
