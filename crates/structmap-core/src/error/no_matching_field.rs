use super::{Error, ErrorKind};

#[derive(Debug)]
pub(super) struct NoMatchingFieldError;

impl core::fmt::Display for NoMatchingFieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("no matching source field found")
    }
}

impl Error {
    /// Creates an error for a destination field that no source field
    /// supplies while strict mode is enabled.
    pub fn no_matching_field() -> Error {
        Error::from(ErrorKind::NoMatchingField(NoMatchingFieldError))
    }

    /// Returns `true` if this error is a strict-mode miss.
    pub fn is_no_matching_field(&self) -> bool {
        matches!(self.kind(), ErrorKind::NoMatchingField(_))
    }
}
