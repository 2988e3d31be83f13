use structmap_core::{schema::RecordType, Error, Result, RootViolation, Type, Value};

/// The record types a mapping call starts from.
#[derive(Debug)]
pub(super) struct Roots {
    pub(super) dst: RecordType,
    pub(super) src: RecordType,
}

/// Checks the arguments of a mapping call and finds the record on each
/// side.
///
/// The destination must be a record or a present optional record. The
/// source may also be a record or a present optional record. An opaque
/// `Value::Null` on either side is reported first.
pub(super) fn classify(dst_ty: &Type, dst: &Value, src_ty: &Type, src: &Value) -> Result<Roots> {
    let fail = |violation| {
        Err(Error::invalid_root(violation).with_types(src_ty.to_string(), dst_ty.to_string()))
    };

    if (dst_ty.is_any() && dst.is_null()) || (src_ty.is_any() && src.is_null()) {
        return fail(RootViolation::NilInput);
    }

    let dst_record = match dst_ty {
        Type::Record(record_type) => *record_type,
        Type::Option(_) if dst.is_null() => return fail(RootViolation::NilDestination),
        Type::Option(inner) => match inner.as_record() {
            Some(record_type) => record_type,
            None => return fail(RootViolation::DestinationNotRecord),
        },
        _ => return fail(RootViolation::DestinationNotRecord),
    };

    let src_record = match src_ty {
        Type::Record(record_type) => *record_type,
        Type::Option(_) if src.is_null() => return fail(RootViolation::NilSource),
        Type::Option(inner) => match inner.as_record() {
            Some(record_type) => record_type,
            None => return fail(RootViolation::SourceNotRecord),
        },
        _ => return fail(RootViolation::SourceNotRecord),
    };

    Ok(Roots {
        dst: dst_record,
        src: src_record,
    })
}
