// ============================================================================
// spark-collection - Value
// A dynamically typed value for heterogeneous, nested collections
// ============================================================================

use crate::collections::Collection;
use crate::common::key::Key;
use crate::common::traits::{Children, Lookup, Nested};

// =============================================================================
// VALUE
// =============================================================================

/// A dynamically typed value.
///
/// [`Value::Array`] wraps a nested collection and is the only variant that
/// `flatten` descends into and `pluck` can index.
///
/// Equality is structural and type-sensitive: `Int(1)` and `Float(1.0)` differ.
///
/// # Example
///
/// ```
/// use spark_collection::{value, Collection, Value};
///
/// let row = value!({ "id" => 7, "tags" => ["a", "b"] });
///
/// let rows = Collection::from(vec![row]);
/// assert_eq!(rows.pluck("id").unwrap(), vec![Value::Int(7)]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(untagged))]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Array(Collection<Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the nested collection of an `Array`.
    pub fn as_collection(&self) -> Option<&Collection<Value>> {
        match self {
            Value::Array(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_collection_mut(&mut self) -> Option<&mut Collection<Value>> {
        match self {
            Value::Array(c) => Some(c),
            _ => None,
        }
    }
}

// =============================================================================
// ELEMENT TRAITS
// =============================================================================

impl Nested for Value {
    fn children(&self) -> Option<Children<'_, Self>> {
        match self {
            Value::Array(c) => Some(Box::new(c.all().values())),
            _ => None,
        }
    }
}

impl Lookup for Value {
    type Output = Value;

    fn is_indexable(&self) -> bool {
        self.is_array()
    }

    fn lookup(&self, key: &Key) -> Option<&Value> {
        match self {
            Value::Array(c) => c.get(key),
            _ => None,
        }
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Collection<Value>> for Value {
    fn from(value: Collection<Value>) -> Self {
        Value::Array(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map_or(Value::Null, Value::Float),
            },
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(values) => {
                Value::Array(values.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Array(Collection::from_pairs(
                map.into_iter().map(|(k, v)| (k, Value::from(v))),
            )),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
