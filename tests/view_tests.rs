use std::ptr;

use frozen_view::{Error, FrozenView, Introspection, Kind, Mapping, Node, RawValue, build};

fn raw(json: &str) -> RawValue {
    serde_json::from_str(json).unwrap()
}

fn view(json: &str) -> FrozenView {
    FrozenView::try_from(raw(json)).unwrap()
}

#[test]
fn test_get_present_field() {
    let v = view(r#"{"a": 1, "b": "two"}"#);
    assert_eq!(v.get("a").unwrap().as_i64(), Some(1));
    assert_eq!(v.get("b").unwrap().as_str(), Some("two"));
}

#[test]
fn test_get_absent_field() {
    let v = view(r#"{"a": 1}"#);
    assert_eq!(v.get("z"), Err(Error::KeyNotFound("z".to_string())));
    assert_eq!(v.field("z"), Err(Error::KeyNotFound("z".to_string())));
}

#[test]
fn test_field_names_in_insertion_order() {
    let v = view(r#"{"a": 1, "b": 2}"#);
    assert_eq!(v.field_names().collect::<Vec<_>>(), ["a", "b"]);

    let v = view(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#);
    let names = v.field_names();
    assert_eq!(names.len(), 3);
    assert_eq!(names.rev().collect::<Vec<_>>(), ["mid", "alpha", "zeta"]);
}

#[test]
fn test_copy_on_construct() {
    let mut source = Mapping::new();
    source.insert("a".to_string(), RawValue::from(1));
    let v = FrozenView::new(&source);

    source.insert("a".to_string(), RawValue::from(2));
    source.insert("b".to_string(), RawValue::from(3));

    assert_eq!(v.get("a").unwrap().as_i64(), Some(1));
    assert!(!v.contains_field("b"));
    assert_eq!(v.len(), 1);
}

#[test]
fn test_copy_on_construct_through_try_from_ref() {
    let mut source = raw(r#"{"nested": {"x": 1}}"#);
    let v = FrozenView::try_from(&source).unwrap();

    source.as_mapping_mut().unwrap()["nested"]
        .as_mapping_mut()
        .unwrap()
        .insert("x".to_string(), RawValue::from(99));

    assert_eq!(
        v.get("nested").unwrap().get("x").unwrap().as_i64(),
        Some(1)
    );
}

#[test]
fn test_nested_access_is_not_memoized() {
    let v = view(r#"{"nested": {"x": 1}}"#);
    let first = v.get("nested").unwrap().into_view().unwrap();
    let second = v.get("nested").unwrap().into_view().unwrap();

    assert_eq!(first, second);
    let stored = |view: &FrozenView| view.as_mapping().get_index(0).unwrap().1 as *const RawValue;
    assert!(!ptr::eq(stored(&first), stored(&second)));
    let outer = v.as_mapping()["nested"].as_mapping().unwrap();
    assert!(!ptr::eq(stored(&first), outer.get_index(0).unwrap().1));
}

#[test]
fn test_introspection_keys() {
    let v = view(r#"{"b": 1, "a": {"c": 2}}"#);
    let keys = v.get("keys").unwrap();
    let names: Vec<_> = keys
        .as_sequence()
        .unwrap()
        .iter()
        .map(|n| n.as_str().unwrap())
        .collect();
    assert_eq!(names, ["b", "a"]);
}

#[test]
fn test_introspection_values_and_items() {
    let v = view(r#"{"b": 1, "a": {"c": 2}}"#);

    let values = v.get("values").unwrap();
    let values = values.as_sequence().unwrap();
    assert_eq!(values.len(), 2);
    assert_eq!(values[0].as_i64(), Some(1));
    assert_eq!(values[1].get("c").unwrap().as_i64(), Some(2));

    let items = v.get("items").unwrap();
    let first = items.get(0).unwrap();
    assert_eq!(first.get(0).unwrap().as_str(), Some("b"));
    assert_eq!(first.get(1).unwrap().as_i64(), Some(1));
    assert!(items.get(1).unwrap().get(1).unwrap().is_view());
}

#[test]
fn test_introspect_returns_raw() {
    let v = view(r#"{"b": 1, "a": {"c": 2}}"#);
    assert_eq!(v.introspect(Introspection::Keys), raw(r#"["b", "a"]"#));
    assert_eq!(
        v.introspect(Introspection::Values),
        raw(r#"[1, {"c": 2}]"#)
    );
    assert_eq!(
        v.introspect(Introspection::Items),
        raw(r#"[["b", 1], ["a", {"c": 2}]]"#)
    );
}

#[test]
fn test_introspection_shadows_field_but_field_reaches_it() {
    let v = view(r#"{"keys": "stored", "other": 1}"#);
    assert!(v.get("keys").unwrap().is_sequence());
    assert_eq!(v.field("keys").unwrap().as_str(), Some("stored"));
}

#[test]
fn test_introspection_names() {
    for op in Introspection::ALL {
        assert_eq!(Introspection::from_name(op.name()), Some(op));
    }
    assert_eq!(Introspection::from_name("len"), None);
    assert_eq!(Introspection::from_name("Keys"), None);
}

#[test]
fn test_fields_iterator_wraps_lazily() {
    let v = view(r#"{"a": 1, "b": [true], "c": {"d": null}}"#);
    let fields: Vec<(&str, Node)> = v.fields().collect();
    assert_eq!(fields.len(), 3);
    assert_eq!(fields[0], ("a", build(&RawValue::from(1))));
    assert!(fields[1].1.is_sequence());
    assert!(fields[2].1.get("d").unwrap().is_null());
}

#[test]
fn test_try_from_non_mapping() {
    assert_eq!(
        FrozenView::try_from(raw("[1]")),
        Err(Error::KindMismatch {
            expected: Kind::Mapping,
            actual: Kind::Sequence
        })
    );
    assert_eq!(
        FrozenView::try_from(&RawValue::from("x")),
        Err(Error::KindMismatch {
            expected: Kind::Mapping,
            actual: Kind::Scalar
        })
    );
}

#[test]
fn test_to_raw_and_into_raw() {
    let value = raw(r#"{"a": [1, 2], "b": {"c": "d"}}"#);
    let v = FrozenView::try_from(&value).unwrap();
    assert_eq!(v.to_raw(), value);
    assert_eq!(v.into_raw(), value);
}

#[test]
fn test_default_view_is_empty() {
    let v = FrozenView::default();
    assert!(v.is_empty());
    assert!(matches!(v.get("a"), Err(Error::KeyNotFound(_))));
    assert!(v.get("keys").unwrap().as_sequence().unwrap().is_empty());
}

#[test]
fn test_views_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FrozenView>();
    assert_send_sync::<Node>();
    assert_send_sync::<RawValue>();

    let v = view(r#"{"a": {"b": 1}}"#);
    let handle = std::thread::spawn(move || v.get("a").unwrap().get("b").unwrap().as_i64());
    assert_eq!(handle.join().unwrap(), Some(1));
}
