use super::Error;

/// Error when a record type's field metadata is inconsistent with how it is
/// being used, e.g. an accessor is asked for a field index the descriptor
/// table does not have.
///
/// Derived records never produce this; it guards hand-written
/// [`Record`](crate::Record) implementations.
#[derive(Debug)]
pub(super) struct MetadataError {
    record: &'static str,
    message: Box<str>,
}

impl std::error::Error for MetadataError {}

impl core::fmt::Display for MetadataError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid record metadata for `{}`: {}",
            self.record, self.message
        )
    }
}

impl Error {
    /// Creates a metadata error for the named record type.
    pub fn metadata(record: &'static str, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Metadata(MetadataError {
            record,
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a metadata error.
    pub fn is_metadata(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Metadata(_))
    }
}
