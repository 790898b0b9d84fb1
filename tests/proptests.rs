// Property tests for the sequence and mapping decoder laws.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::BTreeMap;

use jsonbind::{cast, decode, decode_array_with, ArrayOptions, Decode, ValueKind};
use proptest::prelude::*;
use serde_json::{json, Value};

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        (-1.0e9f64..1.0e9).prop_map(|f| json!(f)),
        "[a-z]{0,8}".prop_map(Value::String),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(3, 64, 8, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
            proptest::collection::btree_map("[a-z]{1,4}", inner, 0..8)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn infallible_decoder_preserves_order_and_length(items in proptest::collection::vec(arb_value(), 0..16)) {
        let v = Value::Array(items.clone());
        let out = decode_array_with(&v, |e: &Value| Ok::<_, jsonbind::DecodeError>(e.clone()), ArrayOptions::default()).unwrap();
        prop_assert_eq!(out, items);
    }

    #[test]
    fn lossy_keeps_exactly_the_decodable_subsequence(items in proptest::collection::vec(arb_leaf(), 0..32)) {
        let v = Value::Array(items.clone());
        let expected: Vec<i64> = items.iter().filter_map(Value::as_i64).collect();
        let out = decode_array_with(&v, i64::decode, ArrayOptions::lossy()).unwrap();
        prop_assert_eq!(&out, &expected);

        let strict = decode::<Vec<i64>>(&v);
        if expected.len() == items.len() {
            prop_assert_eq!(strict.unwrap(), expected);
        } else {
            let err = strict.unwrap_err();
            prop_assert_eq!(Some(err), decode::<Vec<i64>>(&v).err());
        }
    }

    #[test]
    fn cast_mismatch_reports_true_kind(v in arb_value()) {
        match cast::<&[Value]>(&v) {
            Ok(items) => prop_assert!(std::ptr::eq(items, v.as_array().unwrap().as_slice())),
            Err(err) => prop_assert_eq!(
                err.kind(),
                &jsonbind::ErrorKind::TypeMismatch { expected: "array", actual: ValueKind::of(&v) }
            ),
        }
    }

    #[test]
    fn object_of_strings_roundtrips(m in proptest::collection::btree_map("[a-z]{1,6}", "[a-z]{0,6}", 0..12)) {
        let v = Value::Object(m.iter().map(|(k, s)| (k.clone(), json!(s))).collect());
        let out: BTreeMap<String, String> = decode(&v).unwrap();
        prop_assert_eq!(out, m);
    }
}
