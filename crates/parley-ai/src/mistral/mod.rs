//! Mistral chat-completions adapter.
//!
//! Mistral does not accept system messages inline, so they are dropped
//! from every request, and its temperature scale is half of OpenAI's.

mod api;
mod client;

#[cfg(test)]
mod tests;

pub use client::MistralAdapter;
