//! JSON Merge Patch (RFC 7396).
//!
//! Applies a merge patch to a `serde_json::Value`. A merge patch describes
//! changes as a partial document: object members recurse, `null` members
//! delete, and everything else (including arrays) replaces the target value.
//!
//! # Example
//!
//! ```
//! use json_merge_patch::merge_patch;
//! use serde_json::json;
//!
//! let target = json!({
//!     "title": "Goodbye!",
//!     "author": {"givenName": "John", "familyName": "Doe"},
//!     "tags": ["example", "sample"],
//!     "content": "This will be unchanged"
//! });
//! let patch = json!({
//!     "title": "Hello!",
//!     "phoneNumber": "+01-123-456-7890",
//!     "author": {"familyName": null},
//!     "tags": ["example"]
//! });
//!
//! assert_eq!(
//!     merge_patch(&target, &patch),
//!     json!({
//!         "title": "Hello!",
//!         "author": {"givenName": "John"},
//!         "tags": ["example"],
//!         "content": "This will be unchanged",
//!         "phoneNumber": "+01-123-456-7890"
//!     })
//! );
//! ```

pub mod apply;
pub mod codec;
pub mod typed;
pub mod types;

pub use apply::{apply_merge_patches, apply_merge_patches_with, merge_patch, merge_patch_owned};
pub use codec::json::{merge_patch_str, merge_patch_str_pretty, parse_patch, parse_target};
pub use typed::merge_patch_typed;
pub use types::{ApplyMergePatchOptions, MergePatch, MergePatchError, MergePatchResult, MergeResult};
