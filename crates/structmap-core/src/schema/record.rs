use super::FieldSchema;

use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Field layout of a record type, generated by `#[derive(Record)]`.
///
/// Only public fields are listed; everything else is invisible to mapping.
#[derive(Debug, Clone)]
pub struct RecordSchema {
    /// The struct name as written in source
    pub name: &'static str,

    /// Public fields in declaration order
    pub fields: Vec<FieldSchema>,
}

/// A handle to a record type.
///
/// Identity is the Rust `TypeId`. The schema is reached through a function
/// pointer so a record can refer to itself (`Option<Box<Self>>`) without
/// building its schema eagerly.
#[derive(Clone, Copy)]
pub struct RecordType {
    id: TypeId,
    name: &'static str,
    schema: fn() -> &'static RecordSchema,
}

impl RecordSchema {
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|field| field.name == name)
    }
}

impl RecordType {
    pub fn of<T: 'static>(schema: fn() -> &'static RecordSchema) -> RecordType {
        RecordType {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
            schema,
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name, used in error messages.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn schema(&self) -> &'static RecordSchema {
        (self.schema)()
    }
}

impl PartialEq for RecordType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for RecordType {}

impl Hash for RecordType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RecordType").field(&self.name).finish()
    }
}
