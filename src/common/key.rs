// ============================================================================
// spark-collection - Keys
// Integer-or-string keys with canonical integer normalization
// ============================================================================

use std::fmt;

// =============================================================================
// KEY
// =============================================================================

/// A collection key: either an integer or a string.
///
/// Strings that spell a canonical decimal integer are normalized to
/// [`Key::Int`] on conversion, so `"7"` and `7` address the same entry.
/// A `Key::Str` built by hand is normalized by [`canonical`](Key::canonical),
/// which every collection operation applies to incoming keys.
///
/// # Example
///
/// ```
/// use spark_collection::Key;
///
/// assert_eq!(Key::from("7"), Key::Int(7));
/// assert_eq!(Key::from("-3"), Key::Int(-3));
///
/// // Not canonical, stays a string
/// assert_eq!(Key::from("07"), Key::Str("07".to_string()));
/// assert_eq!(Key::from("+7"), Key::Str("+7".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Int(i64),
    Str(String),
}

impl Key {
    /// Returns the integer value if this is an integer key.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(i) => Some(*i),
            Key::Str(_) => None,
        }
    }

    /// Returns the string value if this is a string key.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Int(_) => None,
            Key::Str(s) => Some(s),
        }
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Key::Int(_))
    }

    /// Returns the key in canonical form: a `Str` spelling a canonical
    /// decimal integer becomes the matching `Int`.
    pub fn canonical(self) -> Key {
        match self {
            Key::Str(s) => Key::normalize(s),
            int => int,
        }
    }

    /// Normalizes a string key, turning canonical decimal integers into `Int`.
    fn normalize(s: String) -> Key {
        match canonical_int(&s) {
            Some(i) => Key::Int(i),
            None => Key::Str(s),
        }
    }
}

/// Parses `s` as an integer only if it is written the one canonical way:
/// optional `-`, no leading zeros, no `+`, and no `-0`.
fn canonical_int(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    let bytes = digits.as_bytes();

    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes[0] == b'0' && (bytes.len() > 1 || digits.len() != s.len()) {
        return None;
    }

    // Out-of-range values fall through to string keys
    s.parse().ok()
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(i) => write!(f, "{i}"),
            Key::Str(s) => f.write_str(s),
        }
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Int(i64::from(value))
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Key::Int(i64::from(value))
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        // Positions past i64::MAX cannot exist in memory
        Key::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::normalize(value.to_owned())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::normalize(value)
    }
}

impl From<&String> for Key {
    fn from(value: &String) -> Self {
        Key::normalize(value.clone())
    }
}

impl From<&Key> for Key {
    fn from(value: &Key) -> Self {
        value.clone().canonical()
    }
}

// =============================================================================
// SERDE
// =============================================================================

#[cfg(feature = "json")]
mod serde_impls {
    use super::Key;
    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;

    impl Serialize for Key {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Key::Int(i) => serializer.serialize_i64(*i),
                Key::Str(s) => serializer.serialize_str(s),
            }
        }
    }

    struct KeyVisitor;

    impl Visitor<'_> for KeyVisitor {
        type Value = Key;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an integer or string key")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Key, E> {
            Ok(Key::Int(v))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Key, E> {
            match i64::try_from(v) {
                Ok(i) => Ok(Key::Int(i)),
                Err(_) => Ok(Key::Str(v.to_string())),
            }
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Key, E> {
            Ok(Key::from(v))
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<Key, E> {
            Ok(Key::from(v))
        }
    }

    impl<'de> Deserialize<'de> for Key {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Key, D::Error> {
            deserializer.deserialize_any(KeyVisitor)
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
