use super::{Error, ErrorKind};

/// Which precondition on the root of a mapping call was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RootViolation {
    /// Either side is an untyped null value.
    NilInput,

    /// The destination is an absent optional record.
    NilDestination,

    /// The destination does not hold a record.
    DestinationNotRecord,

    /// The source is neither a record nor a reference to one.
    SourceNotRecord,

    /// The source is an absent optional record.
    NilSource,
}

impl RootViolation {
    pub fn as_str(self) -> &'static str {
        match self {
            RootViolation::NilInput => "nil src or dst",
            RootViolation::NilDestination => "dst must be a non-nil reference to a record",
            RootViolation::DestinationNotRecord => "dst must point to a record",
            RootViolation::SourceNotRecord => "src must be a record or reference to a record",
            RootViolation::NilSource => "src is a nil reference",
        }
    }
}

impl core::fmt::Display for RootViolation {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub(super) struct InvalidRootError {
    violation: RootViolation,
}

impl core::fmt::Display for InvalidRootError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.violation, f)
    }
}

impl Error {
    /// Creates an error for a mapping call whose root arguments have the
    /// wrong shape.
    pub fn invalid_root(violation: RootViolation) -> Error {
        Error::from(ErrorKind::InvalidRoot(InvalidRootError { violation }))
    }

    /// Returns `true` if this error is a root precondition failure.
    pub fn is_invalid_root(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidRoot(_))
    }

    /// The violated root precondition, if this is a root failure.
    pub fn root_violation(&self) -> Option<RootViolation> {
        match self.kind() {
            ErrorKind::InvalidRoot(err) => Some(err.violation),
            _ => None,
        }
    }
}
