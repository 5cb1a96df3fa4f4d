// ============================================================================
// spark-collection - Ergonomic Macros
// ============================================================================

/// Build a [`Collection`](crate::Collection) from a list or from key-value pairs.
///
/// # Usage
///
/// ```rust
/// use spark_collection::{collection, Key};
///
/// // List form: keys 0..n
/// let list = collection![10, 20, 30];
/// assert_eq!(list.get(2), Some(&30));
///
/// // Keyed form
/// let keyed = collection! { "a" => 1, 5 => 2 };
/// assert_eq!(keyed.get("a"), Some(&1));
/// assert_eq!(keyed.get(5), Some(&2));
/// ```
#[macro_export]
macro_rules! collection {
    // Case 1: Empty
    () => {
        $crate::Collection::new()
    };
    // Case 2: Keyed entries
    ($($key:expr => $value:expr),+ $(,)?) => {
        {
            let mut collection = $crate::Collection::new();
            $( collection.put($key, $value); )+
            collection
        }
    };
    // Case 3: Plain values
    ($($value:expr),+ $(,)?) => {
        $crate::Collection::from(::std::vec![$($value),+])
    };
}

/// Build a [`Value`](crate::Value) tree from literal-like syntax.
///
/// Brackets make lists, braces make keyed arrays, `null` is `Value::Null`,
/// and anything else goes through `Value::from`. Each element must be a
/// single token tree, so wrap negative numbers or expressions in parentheses.
///
/// # Usage
///
/// ```rust
/// use spark_collection::{value, Value};
///
/// let v = value!([1, [2, 3, [4]], "five", null, (-6)]);
/// assert!(v.is_array());
///
/// let row = value!({ "id" => 1, "name" => "ada" });
/// assert_eq!(row.as_collection().unwrap().get("name"), Some(&Value::from("ada")));
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array($crate::Collection::from(
            ::std::vec![$($crate::value!($elem)),*] as ::std::vec::Vec<$crate::Value>
        ))
    };
    ({ $($key:tt => $elem:tt),* $(,)? }) => {
        {
            #[allow(unused_mut)]
            let mut collection = $crate::Collection::new();
            $( collection.put($key, $crate::value!($elem)); )*
            $crate::Value::Array(collection)
        }
    };
    ($other:expr) => {
        $crate::Value::from($other)
    };
}
