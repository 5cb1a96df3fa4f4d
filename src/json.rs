// ============================================================================
// spark-collection - JSON
// Serde impls, JSON encoding/decoding, serde_json::Value interop
// ============================================================================
//
// Encoding rule: a collection whose keys are exactly 0..n-1 in iteration
// order is a JSON array. Anything else is a JSON object whose member names
// are the keys' Display form, in iteration order.
// ============================================================================

use std::fmt;
use std::marker::PhantomData;

use serde::de::{DeserializeOwned, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::collections::Collection;
use crate::common::error::Result;
use crate::common::key::Key;
use crate::common::traits::{Children, Lookup, Nested};
use crate::value::Value;

// =============================================================================
// FORMAT
// =============================================================================

/// Output layout for [`ToJson::to_json_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// No whitespace
    #[default]
    Compact,
    /// Two-space indentation, one entry per line
    Pretty,
}

/// Types that render themselves as JSON text.
pub trait ToJson {
    fn to_json_with(&self, format: JsonFormat) -> Result<String>;

    fn to_json(&self) -> Result<String> {
        self.to_json_with(JsonFormat::Compact)
    }
}

fn encode<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let text = match format {
        JsonFormat::Compact => serde_json::to_string(value)?,
        JsonFormat::Pretty => serde_json::to_string_pretty(value)?,
    };
    Ok(text)
}

impl<V: Serialize> ToJson for Collection<V> {
    fn to_json_with(&self, format: JsonFormat) -> Result<String> {
        encode(self, format)
    }
}

impl ToJson for Value {
    fn to_json_with(&self, format: JsonFormat) -> Result<String> {
        encode(self, format)
    }
}

impl<V> Collection<V> {
    /// Converts into a `serde_json::Value` tree.
    pub fn to_json_value(&self) -> Result<serde_json::Value>
    where
        V: Serialize,
    {
        Ok(serde_json::to_value(self)?)
    }

    /// Parses JSON text: arrays become lists, objects become keyed collections.
    ///
    /// # Example
    ///
    /// ```
    /// use spark_collection::{Collection, ToJson};
    ///
    /// let c: Collection<i32> = Collection::from_json(r#"{"x": 1, "2": 5}"#).unwrap();
    /// assert_eq!(c.get("x"), Some(&1));
    /// assert_eq!(c.get(2), Some(&5));
    /// assert_eq!(c.to_json().unwrap(), r#"{"x":1,"2":5}"#);
    /// ```
    pub fn from_json(text: &str) -> Result<Self>
    where
        V: DeserializeOwned,
    {
        Ok(serde_json::from_str(text)?)
    }
}

/// The JSON encoding of the collection.
///
/// # Panics
/// `to_string` panics when `V` fails to serialize, for example a map with
/// non-string keys. Use [`ToJson::to_json`] to get the error instead.
impl<V: Serialize> fmt::Display for Collection<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

// =============================================================================
// SERIALIZE
// =============================================================================

impl<V: Serialize> Serialize for Collection<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.is_list() {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for (_, value) in self.iter() {
                seq.serialize_element(value)?;
            }
            seq.end()
        } else {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (key, value) in self.iter() {
                map.serialize_entry(key, value)?;
            }
            map.end()
        }
    }
}

// =============================================================================
// DESERIALIZE
// =============================================================================

struct CollectionVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for CollectionVisitor<V> {
    type Value = Collection<V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence or a map")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error> {
        let mut collection = Collection::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(value) = seq.next_element()? {
            collection.push(value);
        }
        Ok(collection)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Self::Value, A::Error> {
        let mut collection = Collection::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<Key, V>()? {
            collection.put(key, value);
        }
        Ok(collection)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Collection<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(CollectionVisitor(PhantomData))
    }
}

// =============================================================================
// serde_json::Value AS AN ELEMENT
// =============================================================================

impl Nested for serde_json::Value {
    fn children(&self) -> Option<Children<'_, Self>> {
        match self {
            serde_json::Value::Array(values) => Some(Box::new(values.iter())),
            serde_json::Value::Object(map) => Some(Box::new(map.values())),
            _ => None,
        }
    }
}

impl Lookup for serde_json::Value {
    type Output = serde_json::Value;

    fn is_indexable(&self) -> bool {
        self.is_array() || self.is_object()
    }

    fn lookup(&self, key: &Key) -> Option<&serde_json::Value> {
        match self {
            serde_json::Value::Object(map) => map.get(&key.to_string()),
            serde_json::Value::Array(values) => key
                .as_int()
                .and_then(|i| usize::try_from(i).ok())
                .and_then(|i| values.get(i)),
            _ => None,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
