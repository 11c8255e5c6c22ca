//! Agent phase types for session state management.

use serde::{Deserialize, Serialize};

/// Represents the current phase of the simulated agent within a session.
///
/// A response cycle walks `Idle -> Thinking -> Typing -> Idle`, entered
/// only via a valid submission. Invalid submissions leave the phase
/// untouched, and a reset returns to `Idle` from any phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentPhase {
    /// The agent is waiting for operator input.
    Idle,
    /// Simulated processing; a transient thinking turn is visible.
    Thinking,
    /// Simulated response composition; only a loading indicator is shown.
    Typing,
}

impl AgentPhase {
    /// Returns true while a response cycle phase is visible.
    pub fn is_busy(self) -> bool {
        !matches!(self, AgentPhase::Idle)
    }
}
