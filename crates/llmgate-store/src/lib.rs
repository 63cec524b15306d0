//! File-backed storage for the llmgate registries.
//!
//! Each registry is a single JSON array on disk, pretty-printed with
//! two-space indentation so operators can edit it by hand.

pub mod document;
pub mod json_store;

pub use json_store::JsonFileStore;
