use super::{Error, ErrorKind};
use crate::Value;

/// A [`Value`] variant handed to a loader that expects a different one.
#[derive(Debug)]
pub(super) struct TypeConversionError {
    value: &'static str,
    to_type: &'static str,
}

impl core::fmt::Display for TypeConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot convert {} to {}", self.value, self.to_type)
    }
}

impl Error {
    /// Creates an error for a value of the wrong variant.
    ///
    /// The engine only produces values of the declared type, so this
    /// surfaces from hand-written `Field` implementations or hand-built
    /// value trees.
    pub fn type_conversion(value: &Value, to_type: &'static str) -> Error {
        Error::from(ErrorKind::TypeConversion(TypeConversionError {
            value: value.variant_name(),
            to_type,
        }))
    }

    pub fn is_type_conversion(&self) -> bool {
        matches!(self.kind(), ErrorKind::TypeConversion(_))
    }
}
