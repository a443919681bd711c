use json_merge_patch::{
    apply_merge_patches, apply_merge_patches_with, merge_patch, merge_patch_owned,
    ApplyMergePatchOptions,
};
use proptest::prelude::*;
use serde_json::{Map, Value};

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,4}".prop_map(Value::String),
    ]
}

fn arb_tree(leaf: BoxedStrategy<Value>) -> impl Strategy<Value = Value> {
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(("[a-d]", inner), 0..4)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

fn arb_json() -> impl Strategy<Value = Value> {
    arb_tree(prop_oneof![1 => Just(Value::Null), 3 => arb_scalar()].boxed())
}

/// Objects with no `null` anywhere inside.
fn arb_null_free_object() -> impl Strategy<Value = Value> {
    prop::collection::vec(("[a-d]", arb_tree(arb_scalar().boxed())), 0..5)
        .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<_, _>>()))
}

fn arb_object() -> impl Strategy<Value = Value> {
    prop::collection::vec(("[a-d]", arb_json()), 0..5)
        .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<_, _>>()))
}

fn arb_non_object() -> impl Strategy<Value = Value> {
    arb_json().prop_filter("patch must not be an object", |v| !v.is_object())
}

fn keys(value: &Value) -> Vec<String> {
    value.as_object().map(|m| m.keys().cloned().collect()).unwrap_or_default()
}

proptest! {
    #[test]
    fn prop_empty_patch_is_noop(target in arb_json()) {
        let out = merge_patch(&target, &Value::Object(Map::new()));
        if target.is_object() {
            prop_assert_eq!(&out, &target);
        } else {
            prop_assert_eq!(&out, &Value::Object(Map::new()));
        }
        let again = merge_patch(&out, &Value::Object(Map::new()));
        prop_assert_eq!(again, out);
    }

    #[test]
    fn prop_non_object_patch_wins(target in arb_json(), patch in arb_non_object()) {
        prop_assert_eq!(merge_patch(&target, &patch), patch.clone());
        prop_assert_eq!(merge_patch_owned(target, &patch), patch);
    }

    #[test]
    fn prop_owned_matches_borrowed(target in arb_json(), patch in arb_json()) {
        let borrowed = merge_patch(&target, &patch);
        let owned = merge_patch_owned(target, &patch);
        prop_assert_eq!(keys(&owned), keys(&borrowed));
        prop_assert_eq!(owned, borrowed);
    }

    #[test]
    fn prop_inputs_untouched(target in arb_json(), patch in arb_json()) {
        let (t, p) = (target.clone(), patch.clone());
        let _ = merge_patch(&target, &patch);
        prop_assert_eq!(target, t);
        prop_assert_eq!(patch, p);
    }

    #[test]
    fn prop_null_free_patch_is_idempotent(target in arb_json(), patch in arb_null_free_object()) {
        let once = merge_patch(&target, &patch);
        let twice = merge_patch(&once, &patch);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn prop_null_members_are_removed(target in arb_object(), patch in arb_object()) {
        let out = merge_patch(&target, &patch);
        let out = out.as_object().expect("object patch yields object");
        for (key, value) in patch.as_object().expect("object strategy") {
            if value.is_null() {
                prop_assert!(!out.contains_key(key));
            } else {
                prop_assert!(out.contains_key(key));
            }
        }
    }

    #[test]
    fn prop_untouched_keys_first(target in arb_object(), patch in arb_object()) {
        let out = merge_patch(&target, &patch);
        let patch_map = patch.as_object().expect("object strategy");
        let expected: Vec<String> = if patch_map.is_empty() {
            keys(&target)
        } else {
            keys(&target)
                .into_iter()
                .filter(|k| !patch_map.contains_key(k))
                .chain(patch_map.iter().filter(|(_, v)| !v.is_null()).map(|(k, _)| k.clone()))
                .collect()
        };
        prop_assert_eq!(keys(&out), expected);
    }

    #[test]
    fn prop_sequence_is_left_fold(doc in arb_json(), patches in prop::collection::vec(arb_json(), 0..4)) {
        let folded = patches.iter().fold(doc.clone(), |acc, p| merge_patch(&acc, p));
        let with_snapshots = apply_merge_patches(doc.clone(), &patches);
        prop_assert_eq!(&with_snapshots.doc, &folded);
        prop_assert_eq!(with_snapshots.res.len(), patches.len());
        if let Some(last) = with_snapshots.res.last() {
            prop_assert_eq!(&last.doc, &folded);
        }
        let mutated = apply_merge_patches_with(doc, &patches, &ApplyMergePatchOptions { mutate: true });
        prop_assert_eq!(&mutated.doc, &folded);
        prop_assert!(mutated.res.is_empty());
    }
}
