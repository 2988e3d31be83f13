use crate::Type;

#[derive(Debug, Clone)]
pub struct FieldSchema {
    /// The field name
    pub name: &'static str,

    /// Position among the record's public fields
    pub index: usize,

    /// Declared type
    pub ty: Type,

    /// Aliases, one per tag name (`#[tag(map = "Alias")]`)
    pub tags: Vec<Tag>,

    /// Conversion directive (`#[mapconv("int")]`)
    pub convert_to: Option<&'static str>,

    /// True if the field rejects writes (`#[readonly]`)
    pub read_only: bool,
}

/// One `key = "value"` pair from a field's `#[tag(...)]` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    pub key: &'static str,
    pub value: &'static str,
}

impl FieldSchema {
    /// The alias this field declares under `key`, if any. Empty aliases
    /// count as absent.
    pub fn tag(&self, key: &str) -> Option<&'static str> {
        self.tags
            .iter()
            .find(|tag| tag.key == key)
            .map(|tag| tag.value)
            .filter(|value| !value.is_empty())
    }
}
