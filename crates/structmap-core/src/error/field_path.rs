use std::fmt;

/// One step on the route from the mapping root to a failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A named record field.
    Field(String),

    /// A position in a sequence.
    Index(usize),

    /// A map entry, rendered from the source key.
    Key(String),
}

/// The route from the mapping root to the field, element, or map entry
/// where a mapping failed.
///
/// Rendered dot-joined for record fields and bracketed for indices and keys,
/// e.g. `Items[0].Name` or `Config[database].Host`. The root path renders
/// as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    /// Stored innermost first; the error travels outwards and each frame
    /// pushes its own segment.
    segments: Vec<PathSegment>,
}

impl FieldPath {
    pub fn root() -> FieldPath {
        FieldPath::default()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments from the root outwards.
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = &PathSegment> + ExactSizeIterator {
        self.segments.iter().rev()
    }

    pub(crate) fn prepend(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments().enumerate() {
            match segment {
                PathSegment::Field(name) if i == 0 => f.write_str(name)?,
                PathSegment::Field(name) => write!(f, ".{name}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
                PathSegment::Key(key) => write!(f, "[{key}]")?,
            }
        }

        Ok(())
    }
}
