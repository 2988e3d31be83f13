/// Nesting depth a mapping may reach before it is assumed to be circular.
pub const DEFAULT_MAX_DEPTH: usize = 64;

const DEFAULT_TAG_NAME: &str = "map";

/// Settings for a mapping call.
///
/// Built by chaining setters on [`MapOptions::default`]; each setter changes
/// one setting, and later calls override earlier ones.
///
/// ```
/// use structmap::MapOptions;
///
/// let options = MapOptions::new().tag_name("json").strict().max_depth(8);
/// assert_eq!(options.depth_limit(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct MapOptions {
    tag_name: String,
    ignore_zero_source: bool,
    strict: bool,
    max_depth: usize,
}

impl MapOptions {
    pub fn new() -> MapOptions {
        MapOptions::default()
    }

    /// Tag name whose aliases are used to match fields. An empty name
    /// matches by field name only.
    pub fn tag_name(mut self, tag_name: impl Into<String>) -> MapOptions {
        self.tag_name = tag_name.into();
        self
    }

    /// Skip source fields holding their type's zero value, leaving the
    /// destination field as it was.
    ///
    /// A nested record counts as zero when all of its public fields are
    /// zero. Private fields are not inspected, so a record whose only
    /// non-zero data is private is still skipped. A present `Option` is
    /// never zero, even `Some(0)` or `Some(String::new())`.
    pub fn ignore_zero_source(mut self) -> MapOptions {
        self.ignore_zero_source = true;
        self
    }

    /// Fail when a destination field has no matching source field.
    pub fn strict(mut self) -> MapOptions {
        self.strict = true;
        self
    }

    /// Maximum nesting depth. Zero is ignored.
    pub fn max_depth(mut self, max_depth: usize) -> MapOptions {
        if max_depth > 0 {
            self.max_depth = max_depth;
        }
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag_name
    }

    pub fn ignores_zero_source(&self) -> bool {
        self.ignore_zero_source
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn depth_limit(&self) -> usize {
        // A deserialized 0 means "not configured".
        if self.max_depth == 0 {
            DEFAULT_MAX_DEPTH
        } else {
            self.max_depth
        }
    }
}

impl Default for MapOptions {
    fn default() -> Self {
        MapOptions {
            tag_name: DEFAULT_TAG_NAME.to_string(),
            ignore_zero_source: false,
            strict: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
