use super::{coerce, Engine};
use structmap_core::{Error, Result, Type, Value};

/// Per-field instructions carried into a single assignment.
#[derive(Debug, Clone, Copy)]
pub(super) struct Directive {
    /// Conversion directive declared on the source field
    pub(super) convert_to: Option<&'static str>,

    /// False if the destination rejects writes
    pub(super) settable: bool,
}

impl Directive {
    /// Sequence elements and map values: writable, no conversion.
    pub(super) const ELEMENT: Directive = Directive {
        convert_to: None,
        settable: true,
    };

    /// Steps through an optional keep the conversion directive; the
    /// writability check has already passed.
    fn unwrapped(self) -> Directive {
        Directive {
            convert_to: self.convert_to,
            settable: true,
        }
    }
}

impl Engine<'_> {
    /// Assigns `src` (declared as `src_ty`) into `dst` (declared as
    /// `dst_ty`).
    ///
    /// Rules are tried in a fixed order: depth budget, writability,
    /// conversion directive, then the pair of shapes. Every step into a
    /// record, sequence, map, or optional spends one level of depth.
    pub(super) fn assign(
        &self,
        dst: &mut Value,
        dst_ty: &Type,
        src: &Value,
        src_ty: &Type,
        directive: Directive,
        depth: usize,
    ) -> Result<()> {
        if depth == 0 {
            return Err(Error::depth_exceeded());
        }

        if !directive.settable {
            return Err(Error::unsettable_field());
        }

        if let (Some(convert_to), Value::String(text)) = (directive.convert_to, src) {
            let (converted, converted_ty) = coerce::convert(text, convert_to)?;
            return self.assign(dst, dst_ty, &converted, &converted_ty, Directive::ELEMENT, depth);
        }

        match (src_ty, dst_ty) {
            (Type::Record(src_record), Type::Record(dst_record)) => {
                self.assign_record(dst, *dst_record, src, *src_record, depth - 1)
            }
            (Type::List(src_item), Type::List(dst_item)) => {
                self.assign_sequence(dst, dst_item, src, src_item, depth - 1)
            }
            (Type::Map(src_key, src_value), Type::Map(dst_key, dst_value)) => self.assign_map(
                dst,
                (dst_key, dst_value),
                src,
                (src_key, src_value),
                depth - 1,
            ),
            (Type::Option(src_inner), Type::Option(dst_inner)) => {
                if src.is_null() {
                    *dst = Value::Null;
                    return Ok(());
                }

                let mut holder = dst_inner.zero_value();
                self.assign(
                    &mut holder,
                    dst_inner,
                    src.unwrap_some(),
                    src_inner,
                    directive.unwrapped(),
                    depth - 1,
                )?;
                *dst = Value::some(holder);
                Ok(())
            }
            (Type::Option(src_inner), _) => {
                // An absent source leaves the destination as it was.
                if src.is_null() {
                    return Ok(());
                }

                self.assign(
                    dst,
                    dst_ty,
                    src.unwrap_some(),
                    src_inner,
                    directive.unwrapped(),
                    depth - 1,
                )
            }
            (_, Type::Option(dst_inner)) => {
                let mut holder = dst_inner.zero_value();
                self.assign(
                    &mut holder,
                    dst_inner,
                    src,
                    src_ty,
                    directive.unwrapped(),
                    depth - 1,
                )?;
                *dst = Value::some(holder);
                Ok(())
            }
            _ => assign_primitive(dst, dst_ty, src, src_ty),
        }
    }
}

/// Copies a value whose type is assignable, or casts one whose type is
/// convertible.
fn assign_primitive(dst: &mut Value, dst_ty: &Type, src: &Value, src_ty: &Type) -> Result<()> {
    if src_ty.is_assignable_to(dst_ty) {
        *dst = src.clone();
        return Ok(());
    }

    if src_ty.is_convertible_to(dst_ty) {
        if let Some(converted) = src.cast_numeric(dst_ty) {
            *dst = converted;
            return Ok(());
        }
    }

    Err(Error::incompatible_types(src_ty, dst_ty))
}

/// Whether sequence elements or map values of `src` can be assigned into
/// `dst` one by one.
pub(super) fn is_element_compatible(src: &Type, dst: &Type) -> bool {
    src.is_assignable_to(dst)
        || src.is_convertible_to(dst)
        || src.is_shape_compatible(dst)
        || src.is_option()
        || dst.is_option()
}
