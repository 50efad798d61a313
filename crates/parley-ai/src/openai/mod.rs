//! OpenAI chat-completions adapter.
//!
//! Sends the full conversation, system messages included, to
//! `https://api.openai.com/v1/chat/completions` with the configured
//! temperature unchanged and no client-side token cap.

mod api;
mod client;


pub use client::OpenAiAdapter;
