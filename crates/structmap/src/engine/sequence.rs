use super::{assign::is_element_compatible, Directive, Engine};
use structmap_core::{Error, Result, Type, Value};

impl Engine<'_> {
    /// Builds a new destination sequence from `src`, element by element.
    ///
    /// An absent source yields an absent destination; an empty one yields an
    /// empty one.
    pub(super) fn assign_sequence(
        &self,
        dst: &mut Value,
        dst_item: &Type,
        src: &Value,
        src_item: &Type,
        depth: usize,
    ) -> Result<()> {
        if depth == 0 {
            return Err(Error::depth_exceeded());
        }

        if src.is_null() {
            *dst = Value::Null;
            return Ok(());
        }

        let Some(items) = src.as_list() else {
            return Err(Error::type_conversion(src, "Vec"));
        };

        if !is_element_compatible(src_item, dst_item) {
            return Err(Error::incompatible_elements(src_item, dst_item));
        }

        if src_item == dst_item && !src_item.is_composite() {
            *dst = Value::List(items.to_vec());
            return Ok(());
        }

        let mut assigned = Vec::with_capacity(items.len());

        for (i, item) in items.iter().enumerate() {
            let mut slot = dst_item.zero_value();
            self.assign(&mut slot, dst_item, item, src_item, Directive::ELEMENT, depth)
                .map_err(|err| err.at_index(i))?;
            assigned.push(slot);
        }

        *dst = Value::List(assigned);
        Ok(())
    }
}
