use super::Error;

/// Error when a row cannot be scanned into its targets.
///
/// This occurs when:
/// - The number of scan targets does not match the number of result columns
///   (the query returned a column the record does not declare)
/// - A column value cannot be converted into the target field's type
/// - The driver fails while reading the row
#[derive(Debug)]
pub(super) struct ScanError {
    message: Box<str>,
}

impl std::error::Error for ScanError {}

impl core::fmt::Display for ScanError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "scan failed: {}", self.message)
    }
}

impl Error {
    /// Creates a scan error.
    pub fn scan(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Scan(ScanError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a scan error.
    pub fn is_scan(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Scan(_))
    }
}
