mod error;
pub use error::{Error, FieldPath, PathSegment, RootViolation};

pub mod data;
pub use data::{Type, Value};

pub mod schema;

/// A Result type alias that uses structmap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
