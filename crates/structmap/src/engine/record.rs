use super::{Directive, Engine};
use structmap_core::{data::ValueRecord, schema::RecordType, Error, Result, Type, Value};

impl Engine<'_> {
    /// Fills the fields of the `dst` record from the `src` record.
    ///
    /// Destination fields are visited in declaration order and each asks the
    /// source for a field of the same name, then for one aliased to it. A
    /// destination field nothing supplies keeps its value, unless strict
    /// mode turns the miss into an error.
    pub(super) fn assign_record(
        &self,
        dst: &mut Value,
        dst_type: RecordType,
        src: &Value,
        src_type: RecordType,
        depth: usize,
    ) -> Result<()> {
        if depth == 0 {
            return Err(Error::depth_exceeded());
        }

        let tag_name = self.options.tag();
        let src_meta = self.index.resolve(src_type, tag_name);

        if src_type == dst_type && src_meta.is_plain() && !self.options.ignores_zero_source() {
            *dst = src.clone();
            return Ok(());
        }

        let dst_meta = self.index.resolve(dst_type, tag_name);

        let Some(src_record) = src.as_record() else {
            return Err(Error::type_conversion(src, src_type.name()));
        };

        if !dst.is_record() {
            *dst = Type::Record(dst_type).zero_value();
        }

        let Some(dst_record) = dst.as_record_mut() else {
            return Err(Error::type_conversion(&Value::Null, dst_type.name()));
        };

        for dst_field in dst_meta.fields() {
            let Some(src_field) = src_meta.resolve(dst_field.name) else {
                if self.options.is_strict() {
                    return Err(Error::no_matching_field().in_field(dst_field.name));
                }
                continue;
            };

            let src_value = field_value(src_record, src_field.index, src_type)?;

            if self.options.ignores_zero_source() && src_value.is_zero() {
                continue;
            }

            let Some(dst_value) = dst_record.get_mut(dst_field.index) else {
                return Err(Error::type_conversion(&Value::Null, dst_type.name()));
            };

            let directive = Directive {
                convert_to: src_field.convert_to,
                settable: dst_field.settable,
            };

            self.assign(
                dst_value,
                &dst_field.ty,
                src_value,
                &src_field.ty,
                directive,
                depth,
            )
            .map_err(|err| err.in_field(dst_field.name))?;
        }

        Ok(())
    }
}

fn field_value(record: &ValueRecord, index: usize, record_type: RecordType) -> Result<&Value> {
    record
        .get(index)
        .ok_or_else(|| Error::type_conversion(&Value::Null, record_type.name()))
}
