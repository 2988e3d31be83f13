use super::{Error, ErrorKind};

#[derive(Debug)]
pub(super) struct UnsupportedConversionError {
    target: Box<str>,
}

impl core::fmt::Display for UnsupportedConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported mapconv target type: {}", self.target)
    }
}

impl Error {
    /// Creates an error for a conversion directive naming an unknown kind.
    pub fn unsupported_conversion(target: impl Into<String>) -> Error {
        Error::from(ErrorKind::UnsupportedConversion(
            UnsupportedConversionError {
                target: target.into().into(),
            },
        ))
    }

    pub fn is_unsupported_conversion(&self) -> bool {
        matches!(self.kind(), ErrorKind::UnsupportedConversion(_))
    }
}
