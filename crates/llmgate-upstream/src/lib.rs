//! OpenRouter upstream client for llmgate.
//!
//! Implements [`llmgate_core::UpstreamPort`] over the OpenAI-compatible
//! `chat/completions` endpoint. One request per call: no retries and no
//! streaming.

#![deny(unsafe_code)]

mod client;
mod config;
mod error;
mod wire;

pub use client::OpenRouterClient;
pub use config::UpstreamConfig;
pub use error::UpstreamError;
