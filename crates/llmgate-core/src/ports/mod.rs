//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `serde_json`, filesystem or `reqwest` types in any signature
//! - The store is whole-document: load everything, save everything
//! - The upstream port issues exactly one completion per call

pub mod registry_store;
pub mod upstream;

pub use registry_store::{RegistryKind, RegistryStore};
pub use upstream::{DisabledUpstream, UpstreamPort};
