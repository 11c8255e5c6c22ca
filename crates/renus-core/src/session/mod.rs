//! Session domain module.
//!
//! This module contains all session-related domain models and lifecycle
//! management logic.
//!
//! # Module Structure
//!
//! - `turn`: Conversation turn types (`Sender`, `Turn`, `TurnAction`)
//! - `transcript`: The append-only, seeded transcript (`Transcript`)
//! - `phase`: Agent phase types (`AgentPhase`)
//! - `event`: Events published by a running session (`SessionEvent`)
//! - `model`: Session summary model (`Session`)
//! - `manager`: Session lifecycle management (`SessionManager`)

mod event;
mod manager;
mod model;
mod phase;
mod transcript;
mod turn;

// Re-export public API
pub use event::SessionEvent;
pub use manager::{DiscoveryHandle, SessionManager};
pub use model::Session;
pub use phase::AgentPhase;
pub use transcript::Transcript;
pub use turn::{Sender, Turn, TurnAction, TurnId};
