//! Domain types for the gateway.
//!
//! Model identifiers are plain `String`s; the allowlist is an ordered
//! `Vec<String>`. Key records and the typed request shapes live in the
//! submodules.

mod api_key;
mod listing;
mod requests;

pub use api_key::{ApiKeyRecord, mask_key};
pub use listing::{DEFAULT_PAGE_SIZE, ListQuery, Page};
pub use requests::{
    AddKeyRequest, AddModelRequest, GenerateRequest, RemoveKeyRequest, RemoveModelRequest,
    UpdateKeyRequest, ValidatedRequest,
};
