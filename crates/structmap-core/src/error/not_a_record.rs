use super::{Error, ErrorKind};
use crate::Type;

#[derive(Debug)]
pub(super) struct NotARecordError {
    ty: Type,
}

impl core::fmt::Display for NotARecordError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "type is not a record: {}", self.ty)
    }
}

impl Error {
    /// Creates an error for a metadata lookup on a non-record type.
    pub fn not_a_record(ty: &Type) -> Error {
        Error::from(ErrorKind::NotARecord(NotARecordError { ty: ty.clone() }))
    }

    pub fn is_not_a_record(&self) -> bool {
        matches!(self.kind(), ErrorKind::NotARecord(_))
    }
}
