use super::{assign::is_element_compatible, Directive, Engine};
use structmap_core::{data::ValueMap, Error, Result, Type, Value};

impl Engine<'_> {
    /// Builds a new destination map from `src`, entry by entry.
    ///
    /// Key and value compatibility are checked once, before any entry is
    /// copied. Keys are copied or cast; values are assigned recursively.
    pub(super) fn assign_map(
        &self,
        dst: &mut Value,
        (dst_key, dst_value): (&Type, &Type),
        src: &Value,
        (src_key, src_value): (&Type, &Type),
        depth: usize,
    ) -> Result<()> {
        if depth == 0 {
            return Err(Error::depth_exceeded());
        }

        if src.is_null() {
            *dst = Value::Null;
            return Ok(());
        }

        let Some(entries) = src.as_map() else {
            return Err(Error::type_conversion(src, "Map"));
        };

        let keys_assignable = src_key.is_assignable_to(dst_key);
        if !keys_assignable && !src_key.is_convertible_to(dst_key) {
            return Err(Error::incompatible_map_keys(src_key, dst_key));
        }

        if !is_element_compatible(src_value, dst_value) {
            return Err(Error::incompatible_map_values(src_value, dst_value));
        }

        let copy_values = src_value == dst_value && !src_value.is_composite();
        let mut assigned = ValueMap::with_capacity(entries.len());

        for (key, value) in entries.iter() {
            let key_copy = if keys_assignable {
                key.clone()
            } else {
                key.cast_numeric(dst_key)
                    .ok_or_else(|| Error::incompatible_map_keys(src_key, dst_key))?
            };

            let value_copy = if copy_values {
                value.clone()
            } else {
                let mut slot = dst_value.zero_value();
                self.assign(&mut slot, dst_value, value, src_value, Directive::ELEMENT, depth)
                    .map_err(|err| err.at_key(key))?;
                slot
            };

            assigned.push(key_copy, value_copy);
        }

        *dst = Value::Map(assigned);
        Ok(())
    }
}
