//! Scripted-reply table models.
//!
//! A [`DialogueScript`] is the fixed, ordered set of canned responses a
//! discovery session plays back. Selection is governed by two independent,
//! explicitly ordered rules: keyword rules are checked first (substring
//! containment, case-insensitive), then the step table indexed by the
//! number of completed exchanges, then the recurring fallback.
//!
//! The step table is indexed by an explicit exchange counter rather than
//! by transcript length, so unrelated appends (the thinking turn, report
//! follow-ups) can never shift which step comes next.

use crate::session::TurnAction;
use serde::{Deserialize, Serialize};

/// Placeholder replaced by the operator's submitted text in step replies.
pub const INPUT_PLACEHOLDER: &str = "{input}";

/// Number of thinking keywords attached to the transient thinking turn.
pub const THINKING_PREVIEW_LEN: usize = 3;

/// A canned agent reply, with optional action buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedReply {
    /// Reply text; may contain [`INPUT_PLACEHOLDER`].
    pub text: String,
    /// Action buttons attached to the reply.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<TurnAction>,
}

impl ScriptedReply {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            actions: Vec::new(),
        }
    }

    pub fn with_action(text: impl Into<String>, action: TurnAction) -> Self {
        Self {
            text: text.into(),
            actions: vec![action],
        }
    }

    /// Resolves the reply against the operator's input, substituting the
    /// input placeholder.
    pub fn render(&self, input: &str) -> ScriptedReply {
        ScriptedReply {
            text: self.text.replace(INPUT_PLACEHOLDER, input),
            actions: self.actions.clone(),
        }
    }
}

/// Selects a specialized reply when the operator's text contains `needle`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    /// Substring matched case-insensitively against the submitted text.
    pub needle: String,
    pub reply: ScriptedReply,
}

impl KeywordRule {
    /// Case-insensitive substring containment.
    pub fn matches(&self, input: &str) -> bool {
        input.to_lowercase().contains(&self.needle.to_lowercase())
    }
}

/// Appends one additional delayed agent turn after a matching submission.
///
/// Used to simulate report generation: submitting the payload (via an
/// action button or as free text) schedules `reply` after the report
/// delay, once the main response cycle has finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUpRule {
    /// Exact submitted text that triggers the follow-up.
    pub payload: String,
    pub reply: ScriptedReply,
}

/// A complete conversation script for one chat surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueScript {
    /// Display name of the script (used as the session title).
    pub name: String,
    /// Fixed introductory agent turns seeded into every transcript.
    pub seeds: Vec<String>,
    /// Text of the transient thinking turn.
    pub thinking_text: String,
    /// Keyword pool for the thinking turn; a fixed-size slice is shown.
    /// Cosmetic only, never derived from the operator's input.
    pub thinking_keywords: Vec<String>,
    /// Specialized replies, checked before the step table.
    #[serde(default)]
    pub keyword_rules: Vec<KeywordRule>,
    /// Scripted exchanges, indexed by completed-exchange count.
    #[serde(default)]
    pub steps: Vec<ScriptedReply>,
    /// Generic reply recurring after the step table is exhausted.
    pub fallback: ScriptedReply,
    /// Delayed follow-up turns keyed by submitted payload.
    #[serde(default)]
    pub follow_ups: Vec<FollowUpRule>,
}

impl DialogueScript {
    /// First keyword rule matching the operator's text, in table order.
    pub fn keyword_match(&self, input: &str) -> Option<&KeywordRule> {
        self.keyword_rules.iter().find(|rule| rule.matches(input))
    }

    /// Scripted step for the given completed-exchange count.
    pub fn step(&self, exchange_index: usize) -> Option<&ScriptedReply> {
        self.steps.get(exchange_index)
    }

    /// Follow-up rule for an exactly matching submitted payload.
    pub fn follow_up(&self, payload: &str) -> Option<&FollowUpRule> {
        self.follow_ups.iter().find(|rule| rule.payload == payload)
    }

    /// The fixed-size keyword slice attached to thinking turns.
    pub fn thinking_preview(&self) -> Vec<String> {
        self.thinking_keywords
            .iter()
            .take(THINKING_PREVIEW_LEN)
            .cloned()
            .collect()
    }
}
