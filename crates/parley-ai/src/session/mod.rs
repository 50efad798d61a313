//! The chat session loop.
//!
//! A [`ChatSession`] owns the conversation and drives one turn at a time:
//! read input, dispatch commands, call the provider, then commit the reply
//! or roll the user message back.

mod chat;
mod manager;
mod types;


pub use manager::ChatSession;
pub use types::{
    CommandHandler, Console, Dispatch, Input, Interrupt, SessionIo, SessionState,
    TranscriptStore, TurnOutcome,
};
