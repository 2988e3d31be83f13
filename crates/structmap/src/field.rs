mod collections;

use structmap_core::{Result, Type, Value};

/// A type that can appear as a field of a mappable record.
///
/// The mapping engine works on [`Value`] trees. A field describes its
/// declared [`Type`], renders itself as a value, and is written back either
/// by building a new instance ([`load`](Field::load)) or by updating an
/// existing one in place ([`store`](Field::store)).
pub trait Field: Sized {
    fn ty() -> Type;

    fn to_value(&self) -> Value;

    fn load(value: Value) -> Result<Self>;

    /// Writes `value` into `self`. Records override this to keep the state
    /// the value does not describe, such as private fields.
    fn store(&mut self, value: Value) -> Result<()> {
        *self = Self::load(value)?;
        Ok(())
    }
}

macro_rules! impl_primitive {
    ( $( $ty:ty => $variant:ident, )* ) => {
        $(
            impl Field for $ty {
                fn ty() -> Type {
                    Type::$variant
                }

                fn to_value(&self) -> Value {
                    Value::$variant(*self)
                }

                fn load(value: Value) -> Result<Self> {
                    value.try_into()
                }
            }
        )*
    };
}

impl_primitive! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => ISize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => USize,
    f32 => F32,
    f64 => F64,
}

impl Field for String {
    fn ty() -> Type {
        Type::String
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn load(value: Value) -> Result<Self> {
        value.try_into()
    }
}

/// An opaque field. Accepts any source value as is.
impl Field for Value {
    fn ty() -> Type {
        Type::Any
    }

    fn to_value(&self) -> Value {
        self.clone()
    }

    fn load(value: Value) -> Result<Self> {
        Ok(value)
    }
}

impl<T: Field> Field for Box<T> {
    fn ty() -> Type {
        T::ty()
    }

    fn to_value(&self) -> Value {
        (**self).to_value()
    }

    fn load(value: Value) -> Result<Self> {
        Ok(Box::new(T::load(value)?))
    }

    fn store(&mut self, value: Value) -> Result<()> {
        (**self).store(value)
    }
}

impl<T: Field> Field for Option<T> {
    fn ty() -> Type {
        Type::option(T::ty())
    }

    fn to_value(&self) -> Value {
        match self {
            Some(value) => Value::some(value.to_value()),
            None => Value::Null,
        }
    }

    /// `Null` loads as `None`. Anything else is present; a `Value::Some`
    /// wrapper is removed before the content is loaded.
    fn load(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value.into_some_inner())?))
        }
    }

    fn store(&mut self, value: Value) -> Result<()> {
        if value.is_null() {
            *self = None;
            return Ok(());
        }

        let value = value.into_some_inner();

        match self {
            Some(inner) => inner.store(value),
            None => {
                *self = Some(T::load(value)?);
                Ok(())
            }
        }
    }
}
