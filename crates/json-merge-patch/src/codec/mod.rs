//! Codecs for merge patch documents.

pub mod json;
