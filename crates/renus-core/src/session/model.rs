//! Session summary model.
//!
//! This is the lightweight view of a mounted discovery session that the
//! session list and sidebar render. Transcripts themselves never leave the
//! runner that owns them.

use serde::{Deserialize, Serialize};

/// Summary of a mounted discovery session.
///
/// Sessions live only as long as a mounted chat surface; there is no
/// persistence across restarts, so a summary always describes a live
/// runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier
    pub id: String,
    /// Human-readable session title
    pub title: String,
    /// Timestamp when the session was created (ISO 8601 format)
    pub created_at: String,
    /// Timestamp when the session was last observed (ISO 8601 format)
    pub updated_at: String,
    /// Number of turns currently in the transcript
    pub turn_count: usize,
}
