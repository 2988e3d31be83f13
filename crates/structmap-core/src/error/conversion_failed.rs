use super::{Error, ErrorKind};

type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Text that could not be parsed into the kind named by a conversion
/// directive.
#[derive(Debug)]
pub(super) struct ConversionFailedError {
    text: Box<str>,
    target: Box<str>,
    cause: Cause,
}

impl ConversionFailedError {
    pub(super) fn cause(&self) -> &(dyn std::error::Error + 'static) {
        &*self.cause
    }
}

impl core::fmt::Display for ConversionFailedError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot convert {:?} to {}: {}",
            self.text, self.target, self.cause
        )
    }
}

impl Error {
    /// Creates an error for text that does not parse as the requested kind.
    ///
    /// The underlying parser error is kept and exposed through
    /// [`std::error::Error::source`].
    pub fn conversion_failed(
        text: impl Into<String>,
        target: impl Into<String>,
        cause: impl Into<Cause>,
    ) -> Error {
        Error::from(ErrorKind::ConversionFailed(ConversionFailedError {
            text: text.into().into(),
            target: target.into().into(),
            cause: cause.into(),
        }))
    }

    pub fn is_conversion_failed(&self) -> bool {
        matches!(self.kind(), ErrorKind::ConversionFailed(_))
    }
}
