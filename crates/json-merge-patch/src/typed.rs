//! Merge patches over `serde` types.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::apply::merge_patch_owned;
use crate::types::MergePatchError;

/// Apply `patch` to the JSON form of `target` and read the result back as `T`.
///
/// # Example
///
/// ```
/// use json_merge_patch::merge_patch_typed;
/// use serde::{Deserialize, Serialize};
/// use serde_json::json;
///
/// #[derive(Debug, PartialEq, Serialize, Deserialize)]
/// struct Server {
///     host: String,
///     port: u16,
///     tags: Vec<String>,
/// }
///
/// let server = Server { host: "localhost".into(), port: 80, tags: vec!["a".into()] };
/// let patched = merge_patch_typed(&server, &json!({"port": 8080, "tags": []})).unwrap();
/// assert_eq!(patched, Server { host: "localhost".into(), port: 8080, tags: vec![] });
/// ```
pub fn merge_patch_typed<T>(target: &T, patch: &Value) -> Result<T, MergePatchError>
where
    T: Serialize + DeserializeOwned,
{
    let doc = serde_json::to_value(target).map_err(|e| {
        debug!(error = %e, "failed to convert target to JSON");
        MergePatchError::Serialize(e.to_string())
    })?;
    let merged = merge_patch_owned(doc, patch);
    serde_json::from_value(merged).map_err(|e| {
        debug!(error = %e, "merged document does not fit the target type");
        MergePatchError::Deserialize(e.to_string())
    })
}
