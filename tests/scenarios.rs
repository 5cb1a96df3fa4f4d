#![cfg(feature = "json")]

use spark_collection::{collection, value, Collection, CollectionError, Key, ToJson, Value};

#[test]
fn flatten_mixed_nesting() {
    let c = Collection::from(vec![value!(1), value!([2, 3, [4]]), value!(5)]);
    let flat = c.flatten();

    assert_eq!(flat, Collection::from([1, 2, 3, 4, 5].map(Value::Int)));
    assert_eq!(flat.flatten(), flat);
    assert_eq!(flat.to_json().unwrap(), "[1,2,3,4,5]");
}

#[test]
fn shopping_list_lifecycle() {
    let mut list: Collection<&str> = collection!["milk", "eggs"];
    list.push("bread");
    list.put("urgent", "coffee");
    list.remove(1);

    assert_eq!(list.to_json().unwrap(), r#"{"0":"milk","2":"bread","urgent":"coffee"}"#);

    list.reset_keys();
    assert_eq!(list.to_json().unwrap(), r#"["milk","bread","coffee"]"#);

    assert_eq!(list.pop(), Some("coffee"));
    assert_eq!(list.push("tea"), Key::Int(2));
}

#[test]
fn index_operators() {
    let mut c: Collection<i32> = Collection::new();
    c.store(None::<Key>, 1);
    c.store(Some("x"), 2);

    assert_eq!(c[0], 1);
    assert_eq!(c["x"], 2);

    c["x"] = 20;
    assert_eq!(c.get("x"), Some(&20));

    c.remove("x");
    assert!(!c.has("x"));
    assert!(matches!(c.try_get("x"), Err(CollectionError::MissingKey(_))));
}

#[test]
fn decode_transform_encode() {
    let mut prices: Collection<f64> = Collection::from_json(r#"{"tea": 2.5, "cake": 4.0}"#).unwrap();
    prices.transform(|p| p * 2.0);
    assert_eq!(prices.to_string(), r#"{"tea":5.0,"cake":8.0}"#);
}

#[test]
fn pluck_then_unique() {
    let orders = Collection::from(vec![
        value!({ "user" => "ada", "total" => 3 }),
        value!({ "user" => "alan", "total" => 5 }),
        value!({ "user" => "ada", "total" => 1 }),
    ]);

    let users = Collection::from(orders.pluck("user").unwrap()).unique();
    assert_eq!(users.to_json().unwrap(), r#"["ada","alan"]"#);
}

#[test]
fn iterate_owned_pairs() {
    let c = collection! { "a" => 1, "b" => 2 };
    let pairs: Vec<(Key, i32)> = c.into_iter().collect();
    assert_eq!(pairs, [(Key::from("a"), 1), (Key::from("b"), 2)]);
}
