//! Copy matching fields from one record into another.
//!
//! ```ignore
//! use structmap::Record;
//!
//! #[derive(Debug, Default, Record)]
//! struct UserDto {
//!     #[tag(map = "full_name")]
//!     pub name: String,
//!     #[mapconv("int")]
//!     pub age: String,
//! }
//!
//! #[derive(Debug, Default, Record)]
//! struct User {
//!     pub full_name: String,
//!     pub age: isize,
//! }
//!
//! let dto = UserDto { name: "Ada".into(), age: "36".into() };
//! let mut user = User::default();
//! structmap::map(&mut user, &dto)?;
//! ```

mod engine;

mod field;
pub use field::Field;

mod options;
pub use options::{MapOptions, DEFAULT_MAX_DEPTH};

mod record;
pub use record::Record;

pub use structmap_core::{
    schema::{MetadataIndex, RecordMetadata, RecordSchema, RecordType},
    Error, FieldPath, PathSegment, Result, RootViolation, Type, Value,
};
pub use structmap_macros::Record;

/// Copies matching fields from `src` into `dst` using the default options.
///
/// See [`map_with_options`].
pub fn map<D: Field, S: Field>(dst: &mut D, src: &S) -> Result<()> {
    map_with_options(dst, src, &MapOptions::default())
}

/// Copies matching fields from `src` into `dst`.
///
/// `dst` must be a record, or an `Option` holding one; `src` may be a
/// record, a `Box` or an `Option` holding one. Every public destination
/// field looks for a source field with the same name, then for a source
/// field whose alias under [`MapOptions::tag_name`] is that name. Matched
/// values are copied deeply.
///
/// On error `dst` is left unchanged.
pub fn map_with_options<D: Field, S: Field>(
    dst: &mut D,
    src: &S,
    options: &MapOptions,
) -> Result<()> {
    engine::run(dst, src, options)
}

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{record::load_record, Field, Record};
    pub use structmap_core::{
        schema::{FieldSchema, RecordSchema, RecordType, Tag},
        Result, Type, Value,
    };
}
