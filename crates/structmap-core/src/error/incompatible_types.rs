use super::{Error, ErrorKind};
use crate::Type;

#[derive(Debug)]
pub(super) struct IncompatibleTypesError {
    position: Position,
    src: Type,
    dst: Type,
}

/// Where in a composite the mismatch was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Field,
    Element,
    MapKey,
    MapValue,
}

impl core::fmt::Display for IncompatibleTypesError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let prefix = match self.position {
            Position::Field => "incompatible field types",
            Position::Element => "slice element types are incompatible",
            Position::MapKey => "map key types are incompatible",
            Position::MapValue => "map value types are incompatible",
        };

        write!(f, "{prefix}: {} -> {}", self.src, self.dst)
    }
}

impl Error {
    /// Creates an error for a value whose type can neither be assigned nor
    /// converted to the destination type.
    pub fn incompatible_types(src: &Type, dst: &Type) -> Error {
        Error::incompatible(Position::Field, src, dst)
    }

    /// Creates an error for sequences whose element types do not line up.
    pub fn incompatible_elements(src: &Type, dst: &Type) -> Error {
        Error::incompatible(Position::Element, src, dst)
    }

    /// Creates an error for maps whose key types do not line up.
    pub fn incompatible_map_keys(src: &Type, dst: &Type) -> Error {
        Error::incompatible(Position::MapKey, src, dst)
    }

    /// Creates an error for maps whose value types do not line up.
    pub fn incompatible_map_values(src: &Type, dst: &Type) -> Error {
        Error::incompatible(Position::MapValue, src, dst)
    }

    fn incompatible(position: Position, src: &Type, dst: &Type) -> Error {
        Error::from(ErrorKind::IncompatibleTypes(IncompatibleTypesError {
            position,
            src: src.clone(),
            dst: dst.clone(),
        }))
    }

    /// Returns `true` for any type mismatch, whether between plain fields,
    /// sequence elements, map keys, or map values.
    pub fn is_incompatible_types(&self) -> bool {
        matches!(self.kind(), ErrorKind::IncompatibleTypes(_))
    }

    pub fn is_incompatible_elements(&self) -> bool {
        self.is_incompatible_at(Position::Element)
    }

    pub fn is_incompatible_map_keys(&self) -> bool {
        self.is_incompatible_at(Position::MapKey)
    }

    pub fn is_incompatible_map_values(&self) -> bool {
        self.is_incompatible_at(Position::MapValue)
    }

    fn is_incompatible_at(&self, position: Position) -> bool {
        matches!(self.kind(), ErrorKind::IncompatibleTypes(err) if err.position == position)
    }
}
