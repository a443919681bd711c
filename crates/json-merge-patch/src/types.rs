//! Core types for JSON Merge Patch.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

// ── Error ─────────────────────────────────────────────────────────────────

/// Errors raised by the text and typed layers.
///
/// Merging two `Value`s never fails; these only come from the `serde_json`
/// conversions around it.
#[derive(Debug, Error, PartialEq)]
pub enum MergePatchError {
    #[error("INVALID_TARGET: {0}")]
    InvalidTarget(String),
    #[error("INVALID_PATCH: {0}")]
    InvalidPatch(String),
    #[error("SERIALIZE: {0}")]
    Serialize(String),
    #[error("DESERIALIZE: {0}")]
    Deserialize(String),
}

// ── Patch document ────────────────────────────────────────────────────────

/// A JSON document used as an RFC 7396 merge patch.
///
/// Serializes transparently, so a `MergePatch` field in a request body reads
/// and writes as the bare patch document.
///
/// # Example
///
/// ```
/// use json_merge_patch::MergePatch;
/// use serde_json::json;
///
/// let patch = MergePatch::new(json!({"title": "Hello!", "author": {"familyName": null}}));
/// let doc = json!({"title": "Goodbye!", "author": {"givenName": "John", "familyName": "Doe"}});
/// assert_eq!(
///     patch.apply(&doc),
///     json!({"title": "Hello!", "author": {"givenName": "John"}}),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MergePatch(Value);

impl MergePatch {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The empty object patch, which leaves an object target unchanged.
    pub fn noop() -> Self {
        Self(Value::Object(Map::new()))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }

    /// Returns true for `{}`.
    ///
    /// Applying a no-op patch returns the target itself when it is an object,
    /// or `{}` otherwise.
    pub fn is_noop(&self) -> bool {
        matches!(&self.0, Value::Object(map) if map.is_empty())
    }

    /// Returns true when the patch is not an object, in which case applying
    /// it yields the patch itself whatever the target is.
    pub fn replaces_document(&self) -> bool {
        !self.0.is_object()
    }

    /// Apply this patch to `target`, leaving `target` untouched.
    pub fn apply(&self, target: &Value) -> Value {
        crate::apply::merge_patch(target, &self.0)
    }

    /// Apply this patch to an owned `target`, moving untouched subtrees into
    /// the result.
    pub fn apply_owned(&self, target: Value) -> Value {
        crate::apply::merge_patch_owned(target, &self.0)
    }
}

impl Default for MergePatch {
    fn default() -> Self {
        Self::noop()
    }
}

impl From<Value> for MergePatch {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<MergePatch> for Value {
    fn from(patch: MergePatch) -> Self {
        patch.0
    }
}

impl AsRef<Value> for MergePatch {
    fn as_ref(&self) -> &Value {
        &self.0
    }
}

// ── Sequential application ────────────────────────────────────────────────

/// Document state after one patch of a sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeResult {
    pub doc: Value,
}

/// Result of applying a sequence of merge patches.
#[derive(Debug, Clone, PartialEq)]
pub struct MergePatchResult {
    /// The document after the last patch.
    pub doc: Value,
    /// One snapshot per patch, in order. Empty when applied with `mutate: true`.
    pub res: Vec<MergeResult>,
}

/// Options for `apply_merge_patches_with`.
#[derive(Debug, Clone, Default)]
pub struct ApplyMergePatchOptions {
    /// If true, thread the document through every patch without capturing
    /// per-patch snapshots.
    /// If false, record the document after each patch.
    pub mutate: bool,
}
