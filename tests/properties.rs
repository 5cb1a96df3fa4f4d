use proptest::prelude::*;
use spark_collection::{Collection, Key, Nested, Value};

fn values<V: Clone>(c: &Collection<V>) -> Vec<V> {
    c.iter().map(|(_, v)| v.clone()).collect()
}

fn keyed() -> impl Strategy<Value = Collection<i32>> {
    prop::collection::vec(
        (prop_oneof![(-5i64..20).prop_map(Key::Int), "[a-d]{1,2}".prop_map(Key::from)], any::<i32>()),
        0..24,
    )
    .prop_map(Collection::from_pairs)
}

fn tree() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        "[a-z]{0,3}".prop_map(Value::from),
    ];
    leaf.prop_recursive(4, 48, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
            prop::collection::vec(("[a-c]", inner), 0..4)
                .prop_map(|pairs| Value::Array(Collection::from_pairs(pairs))),
        ]
    })
}

proptest! {
    #[test]
    fn flatten_is_idempotent(items in prop::collection::vec(tree(), 0..6)) {
        let once = Collection::from(items).flatten();
        prop_assert!(once.is_list());
        prop_assert!(once.iter().all(|(_, v)| v.children().is_none()));

        let twice = once.flatten();
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn count_matches_all(c in keyed()) {
        prop_assert_eq!(c.count(), c.all().len());
    }

    #[test]
    fn push_appends_one(mut c in keyed(), v: i32) {
        let before = c.count();
        let key = c.push(v);
        prop_assert_eq!(c.get(key), Some(&v));
        prop_assert_eq!(c.count(), before + 1);
        prop_assert_eq!(c.all().last().map(|(_, last)| *last), Some(v));
    }

    #[test]
    fn put_then_get(mut c in keyed(), k in "[a-z]{1,3}", v: i32) {
        c.put(k.as_str(), v);
        prop_assert!(c.has(k.as_str()));
        prop_assert_eq!(c.get(k.as_str()), Some(&v));
    }

    #[test]
    fn remove_is_idempotent(mut c in keyed(), k in -5i64..20) {
        c.remove(k);
        prop_assert!(!c.has(k));
        let count = c.count();
        c.remove(k);
        prop_assert_eq!(c.count(), count);
    }

    #[test]
    fn reverse_round_trips_lists(items: Vec<i32>) {
        let c = Collection::from(items);
        prop_assert_eq!(c.reverse().reverse(), c);
    }

    #[test]
    fn reverse_reverses_values(c in keyed()) {
        let mut expected = values(&c);
        expected.reverse();
        prop_assert_eq!(values(&c.reverse()), expected);
    }

    #[test]
    fn unique_has_no_duplicates(items in prop::collection::vec(0i32..6, 0..30)) {
        let u = Collection::from(items.clone()).unique();
        let kept = values(&u);

        for (i, a) in kept.iter().enumerate() {
            prop_assert!(!kept[i + 1..].contains(a));
        }

        let mut first_seen = Vec::new();
        for v in items {
            if !first_seen.contains(&v) {
                first_seen.push(v);
            }
        }
        prop_assert_eq!(kept, first_seen);
    }

    #[test]
    fn map_preserves_count_and_keys(c in keyed()) {
        let m = c.map(|v| i64::from(*v) * 2);
        prop_assert_eq!(m.count(), c.count());
        prop_assert!(m.all().keys().eq(c.all().keys()));
    }

    #[test]
    fn reset_keys_makes_a_list(mut c in keyed()) {
        let before = values(&c);
        c.reset_keys();
        prop_assert!(c.is_list());
        prop_assert_eq!(values(&c), before);
    }

    #[test]
    fn pop_returns_last(mut c in keyed()) {
        let last = c.all().last().map(|(_, v)| *v);
        let count = c.count();
        prop_assert_eq!(c.pop(), last);
        prop_assert_eq!(c.count(), count.saturating_sub(1));
    }
}
