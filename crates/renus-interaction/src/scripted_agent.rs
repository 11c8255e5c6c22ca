//! The scripted reply agent.
//!
//! Reply selection over a [`DialogueScript`]: pure table lookup, no I/O
//! and no timers. Two independent rules apply in a fixed order: keyword
//! rules first, then the step table indexed by completed exchanges, then
//! the recurring fallback.

use renus_core::script::{DialogueScript, ScriptedReply};
use std::sync::Arc;

/// Selects canned replies from a dialogue script.
#[derive(Debug, Clone)]
pub struct ScriptedAgent {
    script: Arc<DialogueScript>,
}

impl ScriptedAgent {
    pub fn new(script: DialogueScript) -> Self {
        Self {
            script: Arc::new(script),
        }
    }

    /// Display name of the underlying script.
    pub fn name(&self) -> &str {
        &self.script.name
    }

    /// The fixed introductory turns seeded into every transcript.
    pub fn seed_turns(&self) -> Vec<String> {
        self.script.seeds.clone()
    }

    /// Text of the transient thinking turn.
    pub fn thinking_text(&self) -> String {
        self.script.thinking_text.clone()
    }

    /// The fixed-size keyword slice shown while thinking.
    pub fn thinking_preview(&self) -> Vec<String> {
        self.script.thinking_preview()
    }

    /// Selects the reply for the given exchange.
    ///
    /// Keyword rules are checked first; otherwise the step table is
    /// indexed by `exchange_index` (the number of completed exchanges),
    /// and past its end the fallback recurs.
    pub fn respond(&self, exchange_index: usize, input: &str) -> ScriptedReply {
        if let Some(rule) = self.script.keyword_match(input) {
            return rule.reply.render(input);
        }
        if let Some(step) = self.script.step(exchange_index) {
            return step.render(input);
        }
        self.script.fallback.render(input)
    }

    /// The delayed follow-up reply for a submitted payload, if the script
    /// defines one.
    pub fn follow_up(&self, payload: &str) -> Option<ScriptedReply> {
        self.script
            .follow_up(payload)
            .map(|rule| rule.reply.clone())
    }
}
