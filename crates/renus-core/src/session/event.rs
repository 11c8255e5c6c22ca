use serde::{Deserialize, Serialize};

use super::phase::AgentPhase;
use super::turn::{Turn, TurnId};

/// High-level events published by a running discovery session.
///
/// Surfaces subscribe to these instead of polling the transcript; every
/// mutation the runner performs is mirrored by exactly one event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A turn was appended to the transcript (user, agent or follow-up).
    TurnAppended { turn: Turn },
    /// The transient thinking turn was appended.
    ThinkingStarted { turn: Turn },
    /// The transient thinking turn was removed.
    ThinkingCleared { turn_id: TurnId },
    /// The agent phase changed.
    PhaseChanged { phase: AgentPhase },
    /// The transcript was discarded and reseeded.
    TranscriptReset,
}
