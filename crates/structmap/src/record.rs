use crate::Field;
use structmap_core::{
    data::ValueRecord,
    schema::{RecordSchema, RecordType},
    Error, Result, Value,
};

/// A struct whose public fields can be mapped. Implemented by
/// `#[derive(Record)]`.
pub trait Record: Field {
    /// Field layout of the record, built once.
    fn schema() -> &'static RecordSchema;

    fn record_type() -> RecordType;
}

/// Unpacks the value of a record, checking it has one entry per public
/// field.
pub fn load_record(value: Value, record_type: RecordType) -> Result<ValueRecord> {
    match value {
        Value::Record(record) if record.len() == record_type.schema().fields.len() => Ok(record),
        value => Err(Error::type_conversion(&value, record_type.name())),
    }
}
