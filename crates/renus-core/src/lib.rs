//! Domain layer of the Renus discovery engine.
//!
//! Everything in this crate is deterministic, in-memory data: conversation
//! transcripts and their scripted-reply tables, session lifecycle
//! management, the mock auth provider and the fixture directory the
//! dashboard reads. Timers and the response pipeline live in
//! `renus-interaction`.

pub mod config;
pub mod directory;
pub mod error;
pub mod script;
pub mod session;
pub mod user;

// Re-export common error type
pub use error::{RenusError, Result};
