//! Scripted-reply tables and the official script presets.

mod model;
mod preset;

pub use model::{
    DialogueScript, FollowUpRule, KeywordRule, ScriptedReply, INPUT_PLACEHOLDER,
    THINKING_PREVIEW_LEN,
};
pub use preset::{discovery_script, showcase_script, GENERATE_REPORT_PAYLOAD, VIEW_REPORT_PAYLOAD};
