mod conversion_failed;
mod depth_exceeded;
mod field_path;
mod incompatible_types;
mod invalid_root;
mod no_matching_field;
mod not_a_record;
mod type_conversion;
mod unsettable_field;
mod unsupported_conversion;

pub use field_path::{FieldPath, PathSegment};
pub use invalid_root::RootViolation;

use conversion_failed::ConversionFailedError;
use depth_exceeded::DepthExceededError;
use incompatible_types::IncompatibleTypesError;
use invalid_root::InvalidRootError;
use no_matching_field::NoMatchingFieldError;
use not_a_record::NotARecordError;
use type_conversion::TypeConversionError;
use unsettable_field::UnsettableFieldError;
use unsupported_conversion::UnsupportedConversionError;

/// An error raised while mapping one record onto another.
///
/// Every failure carries the source and destination record type names, the
/// path from the mapping root to the offending field, element, or map key,
/// and a reason. The path is composed lazily: each frame of the recursive
/// engine prepends its own segment only once a failure has occurred.
pub struct Error {
    inner: Box<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    src_ty: String,
    dst_ty: String,
    path: FieldPath,
    kind: ErrorKind,
}

impl Error {
    /// Records the source and destination type names.
    ///
    /// Names are only recorded once; an error that already carries type
    /// names keeps them.
    pub fn with_types(mut self, src_ty: impl Into<String>, dst_ty: impl Into<String>) -> Error {
        let inner = &mut *self.inner;
        if inner.src_ty.is_empty() && inner.dst_ty.is_empty() {
            inner.src_ty = src_ty.into();
            inner.dst_ty = dst_ty.into();
        }
        self
    }

    /// Prepends a record field segment to the error path.
    #[cold]
    pub fn in_field(mut self, name: impl Into<String>) -> Error {
        self.inner.path.prepend(PathSegment::Field(name.into()));
        self
    }

    /// Prepends a sequence index segment to the error path.
    #[cold]
    pub fn at_index(mut self, index: usize) -> Error {
        self.inner.path.prepend(PathSegment::Index(index));
        self
    }

    /// Prepends a map key segment to the error path.
    #[cold]
    pub fn at_key(mut self, key: impl core::fmt::Display) -> Error {
        self.inner.path.prepend(PathSegment::Key(key.to_string()));
        self
    }

    /// Name of the source type the failed mapping started from.
    pub fn src_ty(&self) -> &str {
        &self.inner.src_ty
    }

    /// Name of the destination type the failed mapping started from.
    pub fn dst_ty(&self) -> &str {
        &self.inner.dst_ty
    }

    /// Route from the mapping root to the failure.
    pub fn path(&self) -> &FieldPath {
        &self.inner.path
    }

    /// The rendered field path, e.g. `items[0].name`. Empty at the root.
    pub fn field_path(&self) -> String {
        self.inner.path.to_string()
    }

    /// Human readable reason for the failure.
    pub fn reason(&self) -> String {
        self.inner.kind.to_string()
    }

    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::ConversionFailed(err) => Some(err.cause()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot map {} → {} at field \"{}\": {}",
            self.inner.src_ty, self.inner.dst_ty, self.inner.path, self.inner.kind
        )
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("src_ty", &self.inner.src_ty)
                .field("dst_ty", &self.inner.dst_ty)
                .field("path", &self.inner.path)
                .field("kind", &self.inner.kind)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    InvalidRoot(InvalidRootError),
    UnsettableField(UnsettableFieldError),
    IncompatibleTypes(IncompatibleTypesError),
    NoMatchingField(NoMatchingFieldError),
    DepthExceeded(DepthExceededError),
    ConversionFailed(ConversionFailedError),
    UnsupportedConversion(UnsupportedConversionError),
    NotARecord(NotARecordError),
    TypeConversion(TypeConversionError),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            InvalidRoot(err) => core::fmt::Display::fmt(err, f),
            UnsettableField(err) => core::fmt::Display::fmt(err, f),
            IncompatibleTypes(err) => core::fmt::Display::fmt(err, f),
            NoMatchingField(err) => core::fmt::Display::fmt(err, f),
            DepthExceeded(err) => core::fmt::Display::fmt(err, f),
            ConversionFailed(err) => core::fmt::Display::fmt(err, f),
            UnsupportedConversion(err) => core::fmt::Display::fmt(err, f),
            NotARecord(err) => core::fmt::Display::fmt(err, f),
            TypeConversion(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Box::new(ErrorInner {
                src_ty: String::new(),
                dst_ty: String::new(),
                path: FieldPath::root(),
                kind,
            }),
        }
    }
}
