mod num;

mod ty;
pub use ty::{Shape, Type};

mod value;
pub use value::Value;

mod value_map;
pub use value_map::ValueMap;

mod value_record;
pub use value_record::ValueRecord;
