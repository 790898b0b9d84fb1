use std::collections::BTreeMap;

use jsonbind::{decode, Decode, ErrorKind, LossyVec, PathSegment};
use serde_json::json;

#[derive(Decode, Debug, PartialEq)]
struct Repo {
    id: u64,
    #[decode(rename = "full_name")]
    name: String,
    description: Option<String>,
    #[decode(default)]
    stars: u32,
    #[decode(skip)]
    local_note: String,
    topics: LossyVec<String>,
}

#[test]
fn named_struct_decodes_from_object() {
    let v = json!({
        "id": 42,
        "full_name": "octo/cat",
        "description": null,
        "topics": ["rust", 7, "json"],
        "ignored": {"anything": true}
    });
    let repo: Repo = decode(&v).unwrap();
    assert_eq!(
        repo,
        Repo {
            id: 42,
            name: "octo/cat".into(),
            description: None,
            stars: 0,
            local_note: String::new(),
            topics: LossyVec(vec!["rust".into(), "json".into()]),
        }
    );
}

#[test]
fn missing_required_key() {
    let v = json!({"id": 1, "topics": []});
    let err = decode::<Repo>(&v).unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::MissingKey {
            key: "full_name".into()
        }
    );
}

#[test]
fn field_error_is_located() {
    let v = json!({"id": "1", "full_name": "x", "topics": []});
    let err = decode::<Repo>(&v).unwrap_err();
    assert!(err.is_type_mismatch());
    assert_eq!(err.path(), &[PathSegment::Key("id".into())]);
}

#[derive(Decode, Debug, PartialEq)]
struct Owner {
    login: String,
    repos: Vec<Repo>,
}

#[test]
fn nested_entities() {
    let v = json!({
        "login": "octo",
        "repos": [
            {"id": 1, "full_name": "octo/a", "stars": 3, "topics": []},
            {"id": 2, "full_name": "octo/b", "topics": [], "description": "b"}
        ]
    });
    let owner: Owner = decode(&v).unwrap();
    assert_eq!(owner.repos.len(), 2);
    assert_eq!(owner.repos[0].stars, 3);
    assert_eq!(owner.repos[1].description.as_deref(), Some("b"));

    let bad = json!({"login": "octo", "repos": [{"id": 1, "full_name": 5, "topics": []}]});
    let err = decode::<Owner>(&bad).unwrap_err();
    assert_eq!(
        err.path(),
        &[
            PathSegment::Key("repos".into()),
            PathSegment::Index(0),
            PathSegment::Key("full_name".into()),
        ]
    );
}

#[derive(Decode, Debug, PartialEq)]
struct UserId(u64);

#[derive(Decode, Debug, PartialEq)]
struct Point(i32, i32);

#[derive(Decode, Debug, PartialEq)]
struct Nothing;

#[test]
fn tuple_newtype_unit() {
    assert_eq!(decode::<UserId>(&json!(9)).unwrap(), UserId(9));
    assert_eq!(decode::<Point>(&json!([1, -2])).unwrap(), Point(1, -2));
    assert_eq!(decode::<Nothing>(&json!(null)).unwrap(), Nothing);

    let err = decode::<Point>(&json!([1, 2, 3])).unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::LengthMismatch {
            expected: 2,
            actual: 3
        }
    );
    let err = decode::<Point>(&json!([1, "y"])).unwrap_err();
    assert_eq!(err.path(), &[PathSegment::Index(1)]);
}

#[derive(Decode, Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
enum State {
    #[decode(rename = "open")]
    Open,
    #[decode(rename = "closed")]
    Closed,
    Draft,
}

#[test]
fn raw_value_enum() {
    let states: Vec<State> = decode(&json!(["open", "closed", "Draft"])).unwrap();
    assert_eq!(states, [State::Open, State::Closed, State::Draft]);

    let err = decode::<State>(&json!("merged")).unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::UnknownVariant {
            value: "merged".into()
        }
    );
    assert!(decode::<State>(&json!(1)).unwrap_err().is_type_mismatch());
}

#[derive(Decode, Debug)]
struct Tree {
    label: String,
    children: Vec<Tree>,
}

#[test]
fn recursive_types() {
    let v = json!({"label": "root", "children": [{"label": "leaf", "children": []}]});
    let t: Tree = decode(&v).unwrap();
    assert_eq!(t.children[0].label, "leaf");
    assert!(t.children[0].children.is_empty());
}

#[derive(Decode, Debug)]
struct Borrowed<'a> {
    name: &'a str,
    counts: BTreeMap<String, u8>,
}

#[test]
fn borrowing_struct() {
    let v = json!({"name": "b", "counts": {"x": 1}});
    let b: Borrowed<'_> = decode(&v).unwrap();
    assert_eq!(b.name, "b");
    assert_eq!(b.counts["x"], 1);
}

#[derive(Decode, Debug, PartialEq)]
struct Wrapper<T> {
    inner: T,
}

#[test]
fn generic_struct() {
    let w: Wrapper<Vec<bool>> = decode(&json!({"inner": [true]})).unwrap();
    assert_eq!(w.inner, [true]);
}
