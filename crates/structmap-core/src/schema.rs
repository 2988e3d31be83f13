mod convert_to;
pub use convert_to::ConvertTarget;

mod field;
pub use field::{FieldSchema, Tag};

mod index;
pub use index::MetadataIndex;

mod metadata;
pub use metadata::{FieldDescriptor, RecordMetadata};

mod record;
pub use record::{RecordSchema, RecordType};
