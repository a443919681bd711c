//! JSON text codec for merge patches.
//!
//! Parsing and printing are delegated to `serde_json`; this module only tags
//! failures with the role of the document that caused them.

use serde_json::Value;
use tracing::debug;

use crate::apply::merge_patch_owned;
use crate::types::{MergePatch, MergePatchError};

/// Parse the text of a target document.
pub fn parse_target(text: &str) -> Result<Value, MergePatchError> {
    serde_json::from_str(text).map_err(|e| {
        debug!(error = %e, "target document is not valid JSON");
        MergePatchError::InvalidTarget(e.to_string())
    })
}

/// Parse the text of a patch document.
pub fn parse_patch(text: &str) -> Result<MergePatch, MergePatchError> {
    serde_json::from_str(text).map_err(|e| {
        debug!(error = %e, "patch document is not valid JSON");
        MergePatchError::InvalidPatch(e.to_string())
    })
}

fn merge_text(target: &str, patch: &str) -> Result<Value, MergePatchError> {
    let target = parse_target(target)?;
    let patch = parse_patch(patch)?;
    Ok(merge_patch_owned(target, patch.as_value()))
}

fn serialize_error(e: serde_json::Error) -> MergePatchError {
    debug!(error = %e, "failed to print merged document");
    MergePatchError::Serialize(e.to_string())
}

/// Merge two JSON texts and print the result compactly.
///
/// The target is parsed first, so when both documents are malformed the
/// error names the target.
///
/// # Example
///
/// ```
/// use json_merge_patch::merge_patch_str;
///
/// let out = merge_patch_str(r#"{"a":"b","c":"d"}"#, r#"{"a":null,"e":[1]}"#).unwrap();
/// assert_eq!(out, r#"{"c":"d","e":[1]}"#);
/// ```
pub fn merge_patch_str(target: &str, patch: &str) -> Result<String, MergePatchError> {
    let merged = merge_text(target, patch)?;
    serde_json::to_string(&merged).map_err(serialize_error)
}

/// Merge two JSON texts and pretty-print the result.
pub fn merge_patch_str_pretty(target: &str, patch: &str) -> Result<String, MergePatchError> {
    let merged = merge_text(target, patch)?;
    serde_json::to_string_pretty(&merged).map_err(serialize_error)
}
