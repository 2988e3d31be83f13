use super::{Error, ErrorKind};

#[derive(Debug)]
pub(super) struct UnsettableFieldError;

impl core::fmt::Display for UnsettableFieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("destination field cannot be set")
    }
}

impl Error {
    /// Creates an error for a write into a read-only destination field.
    pub fn unsettable_field() -> Error {
        Error::from(ErrorKind::UnsettableField(UnsettableFieldError))
    }

    pub fn is_unsettable_field(&self) -> bool {
        matches!(self.kind(), ErrorKind::UnsettableField(_))
    }
}
