use crate::Type;

use std::fmt;

/// The kinds a conversion directive may name.
///
/// `Int` and `Uint` are the pointer-sized integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ConvertTarget {
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
    Bool,
}

impl ConvertTarget {
    pub const ALL: [ConvertTarget; 13] = [
        ConvertTarget::Int,
        ConvertTarget::Int8,
        ConvertTarget::Int16,
        ConvertTarget::Int32,
        ConvertTarget::Int64,
        ConvertTarget::Uint,
        ConvertTarget::Uint8,
        ConvertTarget::Uint16,
        ConvertTarget::Uint32,
        ConvertTarget::Uint64,
        ConvertTarget::Float32,
        ConvertTarget::Float64,
        ConvertTarget::Bool,
    ];

    pub fn parse(directive: &str) -> Option<ConvertTarget> {
        ConvertTarget::ALL
            .into_iter()
            .find(|target| target.as_str() == directive)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ConvertTarget::Int => "int",
            ConvertTarget::Int8 => "int8",
            ConvertTarget::Int16 => "int16",
            ConvertTarget::Int32 => "int32",
            ConvertTarget::Int64 => "int64",
            ConvertTarget::Uint => "uint",
            ConvertTarget::Uint8 => "uint8",
            ConvertTarget::Uint16 => "uint16",
            ConvertTarget::Uint32 => "uint32",
            ConvertTarget::Uint64 => "uint64",
            ConvertTarget::Float32 => "float32",
            ConvertTarget::Float64 => "float64",
            ConvertTarget::Bool => "bool",
        }
    }

    /// The type a converted value has.
    pub fn ty(self) -> Type {
        match self {
            ConvertTarget::Int => Type::ISize,
            ConvertTarget::Int8 => Type::I8,
            ConvertTarget::Int16 => Type::I16,
            ConvertTarget::Int32 => Type::I32,
            ConvertTarget::Int64 => Type::I64,
            ConvertTarget::Uint => Type::USize,
            ConvertTarget::Uint8 => Type::U8,
            ConvertTarget::Uint16 => Type::U16,
            ConvertTarget::Uint32 => Type::U32,
            ConvertTarget::Uint64 => Type::U64,
            ConvertTarget::Float32 => Type::F32,
            ConvertTarget::Float64 => Type::F64,
            ConvertTarget::Bool => Type::Bool,
        }
    }
}

impl fmt::Display for ConvertTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
