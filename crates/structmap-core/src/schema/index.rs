use super::{RecordMetadata, RecordType};
use crate::{Error, Result, Type};

use dashmap::DashMap;
use std::any::TypeId;
use std::sync::{Arc, OnceLock};

/// Memoized [`RecordMetadata`], keyed by record type and tag name.
///
/// Lookups are safe from any number of threads. Two threads missing on the
/// same key may both build the metadata; the first to insert wins and every
/// caller receives the winner's copy.
#[derive(Debug, Default)]
pub struct MetadataIndex {
    entries: DashMap<TypeId, DashMap<String, Arc<RecordMetadata>>>,
}

impl MetadataIndex {
    pub fn new() -> MetadataIndex {
        MetadataIndex::default()
    }

    /// The process-wide index used by mapping calls.
    pub fn global() -> &'static MetadataIndex {
        static GLOBAL: OnceLock<MetadataIndex> = OnceLock::new();
        GLOBAL.get_or_init(MetadataIndex::new)
    }

    pub fn resolve(&self, record_type: RecordType, tag_name: &str) -> Arc<RecordMetadata> {
        if let Some(by_tag) = self.entries.get(&record_type.id()) {
            if let Some(metadata) = by_tag.get(tag_name) {
                return Arc::clone(&metadata);
            }
        }

        tracing::trace!(
            record = record_type.name(),
            tag = tag_name,
            "building record metadata"
        );

        // Built outside any shard lock.
        let metadata = Arc::new(RecordMetadata::build(record_type, tag_name));

        let by_tag = self.entries.entry(record_type.id()).or_default();
        let winner = by_tag.entry(tag_name.to_string()).or_insert(metadata);
        Arc::clone(&winner)
    }

    /// Same as [`resolve`](Self::resolve), for a declared type that may not
    /// be a record.
    pub fn resolve_type(&self, ty: &Type, tag_name: &str) -> Result<Arc<RecordMetadata>> {
        match ty {
            Type::Record(record_type) => Ok(self.resolve(*record_type, tag_name)),
            _ => Err(Error::not_a_record(ty)),
        }
    }

    /// Number of cached (type, tag name) entries.
    pub fn len(&self) -> usize {
        self.entries.iter().map(|by_tag| by_tag.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}
