use super::{Error, ErrorKind};

#[derive(Debug)]
pub(super) struct DepthExceededError;

impl core::fmt::Display for DepthExceededError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("maximum nesting depth exceeded (possible circular reference)")
    }
}

impl Error {
    /// Creates an error for a mapping that ran out of depth budget.
    ///
    /// Deep but finite nesting and reference chains that loop back on
    /// themselves are not distinguished.
    pub fn depth_exceeded() -> Error {
        Error::from(ErrorKind::DepthExceeded(DepthExceededError))
    }

    pub fn is_depth_exceeded(&self) -> bool {
        matches!(self.kind(), ErrorKind::DepthExceeded(_))
    }
}
