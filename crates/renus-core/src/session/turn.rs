//! Conversation turn types.
//!
//! This module contains types for representing turns in a discovery
//! transcript, including the sender side and optional action buttons.

use serde::{Deserialize, Serialize};

/// Identifier of a turn within a transcript.
///
/// Ids are allocated by the owning [`Transcript`](super::Transcript) from a
/// monotonically increasing counter and are only meaningful as rendering
/// keys; they carry no causal information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TurnId(pub u64);

/// Represents the author of a turn in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    /// Turn typed (or action-submitted) by the operator.
    User,
    /// Turn produced by the simulated agent.
    Agent,
}

/// A labeled button attached to an agent turn.
///
/// Invoking an action re-enters the submit pipeline with `payload` as if
/// the operator had typed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnAction {
    /// Button label shown to the operator.
    pub label: String,
    /// Fixed string submitted when the button is selected.
    pub payload: String,
}

impl TurnAction {
    pub fn new(label: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            payload: payload.into(),
        }
    }
}

/// A single turn in a discovery transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Rendering key, monotonically increasing within a transcript.
    pub id: TurnId,
    /// Who authored the turn.
    pub sender: Sender,
    /// The text content of the turn.
    pub text: String,
    /// Marks the transient "thinking" turn. At most one such turn exists
    /// in a transcript at any time.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_thinking: bool,
    /// Decorative keyword tags shown while thinking. Not derived from the
    /// operator's input.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    /// Action buttons attached to this turn.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<TurnAction>,
}

impl Turn {
    /// Returns true when this is an agent turn (thinking turns included).
    pub fn is_agent(&self) -> bool {
        self.sender == Sender::Agent
    }

    /// Returns true when this is an operator turn.
    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}
