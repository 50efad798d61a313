//! Anthropic Messages API adapter.
//!
//! Implements [`ProviderAdapter`](crate::ProviderAdapter) via
//! `https://api.anthropic.com/v1/messages`. The system instruction travels
//! in the top-level `system` field and is captured once, when the adapter
//! is built from the opening transcript.

mod api;
mod client;

#[cfg(test)]
mod tests;

pub use client::AnthropicAdapter;
