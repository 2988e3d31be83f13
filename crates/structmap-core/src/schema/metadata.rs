use super::RecordType;
use crate::Type;

use indexmap::IndexMap;

/// What the engine needs to know about one public field of a record.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// The field name
    pub name: &'static str,

    /// Position in the record's value
    pub index: usize,

    /// Declared type
    pub ty: Type,

    /// Alias under the tag name the metadata was built for
    pub alias: Option<&'static str>,

    /// Conversion directive, applied when the field is read as a source
    pub convert_to: Option<&'static str>,

    /// False for `#[readonly]` fields
    pub settable: bool,
}

/// Field lookup tables of a record type for one tag name.
#[derive(Debug)]
pub struct RecordMetadata {
    record_type: RecordType,

    tag_name: String,

    /// Fields by declared name, in declaration order
    by_name: IndexMap<&'static str, FieldDescriptor>,

    /// Position in `by_name`, by alias
    by_alias: IndexMap<&'static str, usize>,

    /// True if any field is a record, sequence, map, or optional
    has_composite: bool,

    /// True if a value of this record can be copied wholesale onto another
    /// value of the same record type
    is_plain: bool,
}

impl RecordMetadata {
    /// Builds the lookup tables for `record_type`, reading aliases declared
    /// under `tag_name`.
    ///
    /// An empty tag name disables alias lookups. When two fields declare the
    /// same alias, the later one wins.
    pub fn build(record_type: RecordType, tag_name: &str) -> RecordMetadata {
        let schema = record_type.schema();

        let mut by_name = IndexMap::with_capacity(schema.fields.len());
        let mut by_alias = IndexMap::new();
        let mut has_composite = false;
        let mut is_plain = true;

        for field in &schema.fields {
            let alias = if tag_name.is_empty() {
                None
            } else {
                field.tag(tag_name)
            };

            if field.ty.is_composite() {
                has_composite = true;
            }

            if field.read_only || field.convert_to.is_some() {
                is_plain = false;
            }

            let (position, _) = by_name.insert_full(
                field.name,
                FieldDescriptor {
                    name: field.name,
                    index: field.index,
                    ty: field.ty.clone(),
                    alias,
                    convert_to: field.convert_to,
                    settable: !field.read_only,
                },
            );

            if let Some(alias) = alias {
                by_alias.insert(alias, position);
            }
        }

        RecordMetadata {
            record_type,
            tag_name: tag_name.to_string(),
            by_name,
            by_alias,
            has_composite,
            is_plain: is_plain && !has_composite,
        }
    }

    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> impl ExactSizeIterator<Item = &FieldDescriptor> {
        self.by_name.values()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    pub fn by_name(&self, name: &str) -> Option<&FieldDescriptor> {
        self.by_name.get(name)
    }

    pub fn by_alias(&self, alias: &str) -> Option<&FieldDescriptor> {
        let position = *self.by_alias.get(alias)?;
        self.by_name.get_index(position).map(|(_, field)| field)
    }

    /// Finds the field that supplies `name`: by declared name first, then
    /// by alias.
    pub fn resolve(&self, name: &str) -> Option<&FieldDescriptor> {
        self.by_name(name).or_else(|| self.by_alias(name))
    }

    pub fn has_composite(&self) -> bool {
        self.has_composite
    }

    /// No composite fields, no read-only fields, and no conversion
    /// directives. Copying such a record onto its own type field by field
    /// is the same as copying it whole.
    pub fn is_plain(&self) -> bool {
        self.is_plain
    }
}
