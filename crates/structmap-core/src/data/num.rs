use super::{Type, Value};
use crate::Error;

macro_rules! impl_num {
    (
        $(
            $variant:ident($ty:ty) {
                $is:ident
            } )*
    ) => {
        impl Type {
            $(
                pub fn $is(&self) -> bool {
                    matches!(self, Self::$variant)
                }
            )*
        }

        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::$variant(*value)
                }
            }

            impl TryFrom<Value> for $ty {
                type Error = Error;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        _ => Err(Error::type_conversion(&value, stringify!($ty))),
                    }
                }
            }
        )*

        impl Value {
            /// Converts a numeric value into the numeric type `ty`.
            ///
            /// Follows `as` semantics: integers wrap, floats saturate when
            /// cast to integers. Returns `None` if either side is not
            /// numeric.
            pub fn cast_numeric(&self, ty: &Type) -> Option<Value> {
                let num = match *self {
                    Value::F32(v) => Num::Float(v as f64),
                    Value::F64(v) => Num::Float(v),
                    $(
                        Value::$variant(v) => Num::Int(v as i128),
                    )*
                    _ => return None,
                };

                let value = match ty {
                    Type::F32 => Value::F32(num.cast_f64() as f32),
                    Type::F64 => Value::F64(num.cast_f64()),
                    $(
                        Type::$variant => Value::$variant(match num {
                            Num::Int(v) => v as $ty,
                            Num::Float(v) => v as $ty,
                        }),
                    )*
                    _ => return None,
                };

                Some(value)
            }
        }
    };
}

#[derive(Clone, Copy)]
enum Num {
    Int(i128),
    Float(f64),
}

impl Num {
    fn cast_f64(self) -> f64 {
        match self {
            Num::Int(v) => v as f64,
            Num::Float(v) => v,
        }
    }
}

impl_num! {
    I8(i8) {
        is_i8
    }
    I16(i16) {
        is_i16
    }
    I32(i32) {
        is_i32
    }
    I64(i64) {
        is_i64
    }
    ISize(isize) {
        is_isize
    }
    U8(u8) {
        is_u8
    }
    U16(u16) {
        is_u16
    }
    U32(u32) {
        is_u32
    }
    U64(u64) {
        is_u64
    }
    USize(usize) {
        is_usize
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::F32(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::F64(value)
    }
}

impl TryFrom<Value> for f32 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::F32(v) => Ok(v),
            _ => Err(Error::type_conversion(&value, "f32")),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::F64(v) => Ok(v),
            _ => Err(Error::type_conversion(&value, "f64")),
        }
    }
}
