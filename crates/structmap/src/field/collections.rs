use super::Field;
use structmap_core::{data::ValueMap, Error, Result, Type, Value};

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

impl<T: Field> Field for Vec<T> {
    fn ty() -> Type {
        Type::list(T::ty())
    }

    fn to_value(&self) -> Value {
        Value::List(self.iter().map(Field::to_value).collect())
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::List(items) => items.into_iter().map(T::load).collect(),
            value => Err(Error::type_conversion(&value, "Vec")),
        }
    }
}

impl<K, V, S> Field for HashMap<K, V, S>
where
    K: Field + Eq + Hash,
    V: Field,
    S: BuildHasher + Default,
{
    fn ty() -> Type {
        Type::map(K::ty(), V::ty())
    }

    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(key, value)| (key.to_value(), value.to_value()))
                .collect(),
        )
    }

    fn load(value: Value) -> Result<Self> {
        let entries = map_entries(value, "HashMap")?;
        let mut map = HashMap::with_capacity_and_hasher(entries.len(), S::default());

        for (key, value) in entries {
            map.insert(K::load(key)?, V::load(value)?);
        }

        Ok(map)
    }
}

impl<K, V> Field for BTreeMap<K, V>
where
    K: Field + Ord,
    V: Field,
{
    fn ty() -> Type {
        Type::map(K::ty(), V::ty())
    }

    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(key, value)| (key.to_value(), value.to_value()))
                .collect(),
        )
    }

    fn load(value: Value) -> Result<Self> {
        let mut map = BTreeMap::new();

        for (key, value) in map_entries(value, "BTreeMap")? {
            map.insert(K::load(key)?, V::load(value)?);
        }

        Ok(map)
    }
}

fn map_entries(value: Value, to_type: &'static str) -> Result<ValueMap> {
    match value {
        Value::Map(entries) => Ok(entries),
        value => Err(Error::type_conversion(&value, to_type)),
    }
}
