#![no_main]

use frozen_view::{Error, FrozenView, Node, RawValue, build};
use libfuzzer_sys::fuzz_target;

fn check(raw: &RawValue, depth: usize) {
    let node = build(raw);
    assert_eq!(node.kind(), raw.kind());
    if depth == 0 {
        return;
    }
    match (raw, &node) {
        (RawValue::Mapping(mapping), Node::View(view)) => {
            assert!(view.field_names().eq(mapping.keys().map(String::as_str)));
            for (key, value) in mapping {
                assert_eq!(view.field(key).unwrap(), build(value));
                check(value, depth - 1);
            }
            let missing = format!("{}~", view.field_names().collect::<String>());
            assert_eq!(
                view.field(&missing),
                Err(Error::KeyNotFound(missing.clone()))
            );
        }
        (RawValue::Sequence(items), Node::Sequence(built)) => {
            assert_eq!(items.len(), built.len());
            for item in items {
                check(item, depth - 1);
            }
        }
        (RawValue::Scalar(scalar), Node::Scalar(same)) => assert_eq!(scalar, same),
        _ => unreachable!("build changed the kind"),
    }
}

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = serde_json::from_slice::<RawValue>(data) {
        check(&raw, 8);
        assert_eq!(build(&raw).into_raw(), raw);
        if let Ok(view) = FrozenView::try_from(&raw) {
            let text = serde_json::to_string(&view).unwrap();
            let again: RawValue = serde_json::from_str(&text).unwrap();
            assert_eq!(again.as_mapping().map(|m| m.len()), Some(view.len()));
        }
    }
});
