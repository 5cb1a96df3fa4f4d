#![cfg(feature = "json")]

use spark_collection::{collection, value, Collection, Key, ToJson, Value};

#[test]
fn showcase_list_and_keyed() {
    // List form: keys 0..n, encodes as a JSON array
    let list = collection![1, 2, 3];
    assert!(list.is_list());
    assert_eq!(list.to_json().unwrap(), "[1,2,3]");

    // Keyed form: encodes as a JSON object
    let keyed = collection! { "a" => 1, "b" => 2 };
    assert_eq!(keyed.to_json().unwrap(), r#"{"a":1,"b":2}"#);
}

#[test]
fn showcase_value_trees() {
    // Mixed nesting with null and parenthesized negatives
    let v = value!([1, [(-2), null], { "k" => "v" }]);
    assert_eq!(v.to_json().unwrap(), r#"[1,[-2,null],{"k":"v"}]"#);

    // Keyed arrays index by string
    let row = value!({ "id" => 7 });
    let fields = row.as_collection().unwrap();
    assert_eq!(fields.get("id"), Some(&Value::Int(7)));
}

#[test]
fn showcase_numeric_keys_normalize() {
    let c: Collection<&str> = collection! { "3" => "three", 4 => "four" };
    let keys: Vec<Key> = c.iter().map(|(k, _)| k.clone()).collect();
    assert_eq!(keys, [Key::Int(3), Key::Int(4)]);
}
