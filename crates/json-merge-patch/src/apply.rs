//! JSON Merge Patch apply logic.
//!
//! Implements the `MergePatch` routine of RFC 7396, section 2.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use super::types::{ApplyMergePatchOptions, MergePatchResult, MergeResult};

type Object = Map<String, Value>;

// ── Borrowed form ─────────────────────────────────────────────────────────

/// Apply `patch` to `target` and return the patched document.
///
/// Neither argument is modified. The result is built from fresh maps, with
/// the target keys left untouched by the patch first (in target order),
/// followed by the keys the patch sets (in patch order).
///
/// # Example
///
/// ```
/// use json_merge_patch::merge_patch;
/// use serde_json::json;
///
/// let target = json!({"a": "b", "c": {"d": "e", "f": "g"}});
/// let patch = json!({"a": "z", "c": {"f": null}});
/// assert_eq!(merge_patch(&target, &patch), json!({"a": "z", "c": {"d": "e"}}));
///
/// // A non-object patch replaces the whole document.
/// assert_eq!(merge_patch(&target, &json!(["x"])), json!(["x"]));
/// ```
pub fn merge_patch(target: &Value, patch: &Value) -> Value {
    match patch {
        Value::Object(p) if p.is_empty() => trace!("empty merge patch, returning target"),
        Value::Object(p) => trace!(keys = p.len(), "applying merge patch"),
        _ => trace!("non-object merge patch replaces target"),
    }
    merge_value(target, patch)
}

fn merge_value(target: &Value, patch: &Value) -> Value {
    let Value::Object(patch) = patch else {
        return patch.clone();
    };
    match target {
        Value::Object(target) => Value::Object(merge_object(target, patch)),
        _ => Value::Object(merge_object(&Object::new(), patch)),
    }
}

fn merge_object(target: &Object, patch: &Object) -> Object {
    if patch.is_empty() {
        return target.clone();
    }
    let mut out = Object::with_capacity(target.len() + patch.len());
    for (key, value) in target {
        if !patch.contains_key(key) {
            out.insert(key.clone(), value.clone());
        }
    }
    for (key, value) in patch {
        match value {
            Value::Null => {}
            Value::Object(_) => {
                let merged = match target.get(key) {
                    Some(current) => merge_value(current, value),
                    None => merge_value(&Value::Null, value),
                };
                out.insert(key.clone(), merged);
            }
            _ => {
                out.insert(key.clone(), value.clone());
            }
        }
    }
    out
}

// ── Owned form ────────────────────────────────────────────────────────────

/// Apply `patch` to an owned `target`.
///
/// Produces the same document as [`merge_patch`], key order included, but
/// moves the target's untouched values into the result instead of cloning
/// them. Only values contributed by the patch are cloned.
pub fn merge_patch_owned(target: Value, patch: &Value) -> Value {
    let Value::Object(patch) = patch else {
        trace!("non-object merge patch replaces target");
        return patch.clone();
    };
    trace!(keys = patch.len(), "applying merge patch to owned target");
    Value::Object(merge_object_owned(into_object(target), patch))
}

/// The effective target: `{}` stands in for anything that is not an object.
fn into_object(value: Value) -> Object {
    match value {
        Value::Object(map) => map,
        _ => Object::new(),
    }
}

fn merge_object_owned(target: Object, patch: &Object) -> Object {
    if patch.is_empty() {
        return target;
    }
    let mut out = Object::with_capacity(target.len() + patch.len());
    let mut touched = Object::new();
    for (key, value) in target {
        if patch.contains_key(&key) {
            touched.insert(key, value);
        } else {
            out.insert(key, value);
        }
    }
    for (key, value) in patch {
        match value {
            Value::Null => {}
            Value::Object(nested) => {
                let current = touched.remove(key).map(into_object).unwrap_or_default();
                out.insert(key.clone(), Value::Object(merge_object_owned(current, nested)));
            }
            _ => {
                out.insert(key.clone(), value.clone());
            }
        }
    }
    out
}

// ── Sequences ─────────────────────────────────────────────────────────────

/// Apply a sequence of merge patches, returning the final document and the
/// document after each patch.
pub fn apply_merge_patches(doc: Value, patches: &[Value]) -> MergePatchResult {
    let mut doc = doc;
    let mut res = Vec::with_capacity(patches.len());
    for (index, patch) in patches.iter().enumerate() {
        debug!(index, snapshot = true, "applying merge patch from sequence");
        doc = merge_patch_owned(doc, patch);
        res.push(MergeResult { doc: doc.clone() });
    }
    MergePatchResult { doc, res }
}

/// Apply a sequence of merge patches with options.
///
/// When `mutate: true`, the document is threaded through every patch without
/// capturing per-patch snapshots. When `mutate: false`, this is
/// [`apply_merge_patches`].
pub fn apply_merge_patches_with(
    doc: Value,
    patches: &[Value],
    options: &ApplyMergePatchOptions,
) -> MergePatchResult {
    if !options.mutate {
        return apply_merge_patches(doc, patches);
    }
    let mut working = doc;
    for (index, patch) in patches.iter().enumerate() {
        debug!(index, snapshot = false, "applying merge patch from sequence");
        working = merge_patch_owned(working, patch);
    }
    MergePatchResult { doc: working, res: vec![] }
}

// ── Tests ─────────────────────────────────────────────────────────────────
