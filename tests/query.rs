use jsonbind::{at, decode_at, decode_opt_at, field, opt_field, path, PathElem, PathSegment};
use serde_json::json;

#[test]
fn nested_path_key_key_index() {
    let doc = json!({"a": {"b": [true, null]}});

    let v0 = at(&doc, path!["a", "b", 0]).unwrap().unwrap();
    assert_eq!(v0, &json!(true));

    let v1 = at(&doc, &[PathElem::Key("a"), PathElem::Key("b"), PathElem::Index(1)])
        .unwrap()
        .unwrap();
    assert!(v1.is_null());

    assert!(at(&doc, path!["a", "nope"]).unwrap().is_none());
    assert!(at(&doc, path!["a", "b", 5]).unwrap().is_none());
    assert_eq!(at(&doc, path![]).unwrap(), Some(&doc));
}

#[test]
fn decode_at_locates_errors() {
    let doc = json!({"user": {"age": "old"}});
    let err = decode_at::<u8>(&doc, path!["user", "age"]).unwrap_err();
    assert!(err.is_type_mismatch());
    assert_eq!(
        err.path(),
        &[PathSegment::Key("user".into()), PathSegment::Key("age".into())]
    );

    let err = decode_at::<u8>(&doc, path!["user", "height"]).unwrap_err();
    assert!(err.is_missing_key());
    assert_eq!(err.to_string(), "decode failed: missing key `height` at $.user");
}

#[test]
fn optional_paths() {
    let doc = json!({"a": {"n": 5, "z": null}});
    assert_eq!(decode_opt_at::<i32>(&doc, path!["a", "n"]).unwrap(), Some(5));
    assert_eq!(decode_opt_at::<i32>(&doc, path!["a", "z"]).unwrap(), None);
    assert_eq!(decode_opt_at::<i32>(&doc, path!["a", "missing"]).unwrap(), None);
    assert!(decode_opt_at::<i32>(&doc, path!["a", "n", "deeper"]).is_err());
}

#[test]
fn single_fields() {
    let doc = json!({"name": "ana", "nick": null});
    let name: String = field(&doc, "name").unwrap();
    assert_eq!(name, "ana");
    assert!(field::<String>(&doc, "email").unwrap_err().is_missing_key());
    assert_eq!(opt_field::<String>(&doc, "nick").unwrap(), None);
    assert_eq!(opt_field::<String>(&doc, "email").unwrap(), None);

    let err = field::<String>(&json!([1]), "name").unwrap_err();
    assert!(err.is_type_mismatch());
}

#[test]
fn shape_error_names_the_bad_container() {
    let doc = json!({"a": {"b": 3}});
    let err = at(&doc, path!["a", "b", 0]).unwrap_err();
    assert!(err.is_type_mismatch());
    assert_eq!(
        err.path(),
        &[PathSegment::Key("a".into()), PathSegment::Key("b".into())]
    );
}

#[test]
fn missing_leaf_is_reported_under_parent() {
    let doc = json!({"a": {}});
    let err = decode_at::<i64>(&doc, path!["a", "n"]).unwrap_err();
    assert!(err.is_missing_key());
    assert_eq!(err.path(), &[PathSegment::Key("a".into())]);
}
