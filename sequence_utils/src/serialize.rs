//! Serde support (feature `serde`).
//!
//! Sequences serialize as arrays with empty slots written as `null`.
//! Records serialize as maps of their own enumerable properties; inherited
//! and hidden properties are not written. A value that contains itself
//! fails with an error instead of recursing.

use serde::ser::{Error, Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::record::Record;
use crate::sequence::Sequence;
use crate::value::{CycleGuard, Value};

impl<T: Serialize> Serialize for Sequence<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for slot in self.iter_slots() {
            seq.serialize_element(&slot)?;
        }
        seq.end()
    }
}

impl<V: Serialize> Serialize for Record<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for property in self.own_enumerable() {
            map.serialize_entry(&property.name, &property.value)?;
        }
        map.end()
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Undefined | Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::Str(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                let _guard = CycleGuard::enter(arr).ok_or_else(circular::<S::Error>)?;
                arr.try_borrow().map_err(Error::custom)?.serialize(serializer)
            }
            Value::Object(obj) => {
                let _guard = CycleGuard::enter(obj).ok_or_else(circular::<S::Error>)?;
                obj.try_borrow().map_err(Error::custom)?.serialize(serializer)
            }
        }
    }
}

fn circular<E: Error>() -> E {
    E::custom("cannot serialize circular structure")
}
