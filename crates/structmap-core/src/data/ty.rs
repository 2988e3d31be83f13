use super::{Value, ValueMap, ValueRecord};
use crate::schema::RecordType;

use std::fmt;

/// The declared type of a record field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// Boolean value
    Bool,

    /// String type
    String,

    /// Signed 8-bit integer
    I8,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// Pointer-sized signed integer
    ISize,

    /// Unsigned 8-bit integer
    U8,

    /// Unsigned 16-bit integer
    U16,

    /// Unsigned 32-bit integer
    U32,

    /// Unsigned 64-bit integer
    U64,

    /// Pointer-sized unsigned integer
    USize,

    /// 32-bit float
    F32,

    /// 64-bit float
    F64,

    /// A sequence of a single type
    List(Box<Type>),

    /// An associative container
    Map(Box<Type>, Box<Type>),

    /// A value that may be absent
    Option(Box<Type>),

    /// A record with its own field schema
    Record(RecordType),

    /// An opaque dynamic value. Accepts any source value verbatim.
    Any,
}

/// Coarse classification of a [`Type`], used to pick how two values are
/// assigned to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Primitive,
    Record,
    List,
    Map,
    Option,
    Any,
}

impl Type {
    pub fn list(ty: impl Into<Self>) -> Self {
        Self::List(Box::new(ty.into()))
    }

    pub fn map(key: impl Into<Self>, value: impl Into<Self>) -> Self {
        Self::Map(Box::new(key.into()), Box::new(value.into()))
    }

    pub fn option(ty: impl Into<Self>) -> Self {
        Self::Option(Box::new(ty.into()))
    }

    pub fn shape(&self) -> Shape {
        match self {
            Self::Record(_) => Shape::Record,
            Self::List(_) => Shape::List,
            Self::Map(..) => Shape::Map,
            Self::Option(_) => Shape::Option,
            Self::Any => Shape::Any,
            _ => Shape::Primitive,
        }
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::String)
    }

    pub fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Self::Map(..))
    }

    pub fn is_option(&self) -> bool {
        matches!(self, Self::Option(_))
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Records, sequences, maps, and optionals. Values of these types are
    /// assigned by recursing into them.
    pub fn is_composite(&self) -> bool {
        matches!(
            self.shape(),
            Shape::Record | Shape::List | Shape::Map | Shape::Option
        )
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::I8
                | Self::I16
                | Self::I32
                | Self::I64
                | Self::ISize
                | Self::U8
                | Self::U16
                | Self::U32
                | Self::U64
                | Self::USize
        )
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    pub fn is_numeric(&self) -> bool {
        self.is_integer() || self.is_float()
    }

    /// A value of this type can be copied into `dst` without changing it.
    pub fn is_assignable_to(&self, dst: &Type) -> bool {
        self == dst || dst.is_any()
    }

    /// A value of this type can be converted into `dst` by a numeric cast.
    pub fn is_convertible_to(&self, dst: &Type) -> bool {
        self.is_numeric() && dst.is_numeric()
    }

    /// Both types have the same composite shape, so a value of one can be
    /// assigned to the other by recursing into it.
    pub fn is_shape_compatible(&self, dst: &Type) -> bool {
        self.is_composite() && self.shape() == dst.shape()
    }

    /// The record type, if this is a record.
    pub fn as_record(&self) -> Option<RecordType> {
        match self {
            Self::Record(record_type) => Some(*record_type),
            _ => None,
        }
    }

    /// The zero value of this type: what a freshly allocated destination
    /// holds before anything is assigned into it.
    pub fn zero_value(&self) -> Value {
        match self {
            Self::Bool => Value::Bool(false),
            Self::String => Value::String(String::new()),
            Self::I8 => Value::I8(0),
            Self::I16 => Value::I16(0),
            Self::I32 => Value::I32(0),
            Self::I64 => Value::I64(0),
            Self::ISize => Value::ISize(0),
            Self::U8 => Value::U8(0),
            Self::U16 => Value::U16(0),
            Self::U32 => Value::U32(0),
            Self::U64 => Value::U64(0),
            Self::USize => Value::USize(0),
            Self::F32 => Value::F32(0.0),
            Self::F64 => Value::F64(0.0),
            Self::List(_) => Value::List(vec![]),
            Self::Map(..) => Value::Map(ValueMap::new()),
            Self::Option(_) | Self::Any => Value::Null,
            Self::Record(record_type) => {
                let schema = record_type.schema();
                ValueRecord::from_vec(
                    schema
                        .fields
                        .iter()
                        .map(|field| field.ty.zero_value())
                        .collect(),
                )
                .into()
            }
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::String => f.write_str("String"),
            Self::I8 => f.write_str("i8"),
            Self::I16 => f.write_str("i16"),
            Self::I32 => f.write_str("i32"),
            Self::I64 => f.write_str("i64"),
            Self::ISize => f.write_str("isize"),
            Self::U8 => f.write_str("u8"),
            Self::U16 => f.write_str("u16"),
            Self::U32 => f.write_str("u32"),
            Self::U64 => f.write_str("u64"),
            Self::USize => f.write_str("usize"),
            Self::F32 => f.write_str("f32"),
            Self::F64 => f.write_str("f64"),
            Self::List(item) => write!(f, "Vec<{item}>"),
            Self::Map(key, value) => write!(f, "Map<{key}, {value}>"),
            Self::Option(inner) => write!(f, "Option<{inner}>"),
            Self::Record(record_type) => f.write_str(record_type.name()),
            Self::Any => f.write_str("Value"),
        }
    }
}

impl From<RecordType> for Type {
    fn from(value: RecordType) -> Self {
        Self::Record(value)
    }
}

impl From<&Type> for Type {
    fn from(value: &Type) -> Self {
        value.clone()
    }
}
