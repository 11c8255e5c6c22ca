//! The conversation script runner.
//!
//! [`DiscoveryRunner`] turns an operator's free-text submission into a
//! scripted, delayed agent reply, simulating "thinking" and "typing"
//! latency. The whole pipeline is a deterministic, fully offline script:
//! no network, no model, no persistence, just canned tables and tokio
//! timers.
//!
//! A response cycle is strictly sequential and non-interruptible once
//! started: thinking phase (a transient turn with decorative keyword
//! tags), typing phase (indicator only), final scripted reply, and
//! optionally one delayed follow-up turn. New submissions are silently
//! ignored while a cycle is in flight. Reset revokes the in-flight cycle
//! and reseeds the transcript; so does dropping the runner.

pub mod schedule;
mod scripted_agent;

pub use scripted_agent::ScriptedAgent;

use renus_core::config::TimingProfile;
use renus_core::script::DialogueScript;
use renus_core::session::{
    AgentPhase, DiscoveryHandle, Session, SessionEvent, Transcript, Turn,
};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{broadcast, RwLock};
use tokio_util::sync::CancellationToken;

/// Capacity of the session event channel. Slow surfaces lag rather than
/// block the engine.
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Result of handling a submission.
///
/// Both ignore cases are silent no-ops on the transcript; the variant only
/// tells callers (shells, logs) why nothing happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The user turn was appended and a response cycle was scheduled.
    Scheduled,
    /// The submitted text was empty or whitespace-only.
    IgnoredEmpty,
    /// A response cycle is already in flight.
    IgnoredBusy,
}

/// Mutable session state, guarded by a single lock so reset and in-flight
/// cycles serialize on it.
struct SessionState {
    transcript: Transcript,
    phase: AgentPhase,
    /// Number of completed exchanges; indexes the script's step table.
    exchanges: usize,
    /// True from an accepted submission until its reply lands.
    in_flight: bool,
}

/// A mounted discovery chat session.
///
/// The runner owns the transcript exclusively. Surfaces submit text (or
/// action payloads), subscribe to [`SessionEvent`]s and read snapshots;
/// nothing else can mutate the conversation.
pub struct DiscoveryRunner {
    session_id: String,
    title: String,
    created_at: String,
    agent: ScriptedAgent,
    timing: TimingProfile,
    state: Arc<RwLock<SessionState>>,
    events: broadcast::Sender<SessionEvent>,
    /// Cancellation epoch. Reset cancels and replaces it; drop cancels it.
    epoch: Mutex<CancellationToken>,
}

impl DiscoveryRunner {
    /// Creates a runner for the given script, seeding the transcript with
    /// the script's fixed introduction.
    pub fn new(
        session_id: impl Into<String>,
        script: DialogueScript,
        timing: TimingProfile,
    ) -> Self {
        let session_id = session_id.into();
        let agent = ScriptedAgent::new(script);
        let state = SessionState {
            transcript: Transcript::seeded(agent.seed_turns()),
            phase: AgentPhase::Idle,
            exchanges: 0,
            in_flight: false,
        };
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        tracing::info!(session_id = %session_id, script = %agent.name(), "discovery session mounted");

        Self {
            title: agent.name().to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            agent,
            timing,
            state: Arc::new(RwLock::new(state)),
            events,
            epoch: Mutex::new(CancellationToken::new()),
            session_id,
        }
    }

    /// Submits operator text.
    ///
    /// Empty or whitespace-only text, and any text submitted while a
    /// response cycle is in flight, is silently ignored. Otherwise the
    /// user turn is appended immediately and the response cycle is
    /// scheduled after the submit delay.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            tracing::debug!(session_id = %self.session_id, "ignoring empty submission");
            return SubmitOutcome::IgnoredEmpty;
        }

        let token = {
            let mut state = self.state.write().await;
            if state.in_flight {
                tracing::debug!(session_id = %self.session_id, "ignoring submission while busy");
                return SubmitOutcome::IgnoredBusy;
            }
            state.in_flight = true;
            let turn = state.transcript.push_user(trimmed);
            self.emit(SessionEvent::TurnAppended { turn });
            // Child of the current epoch, taken under the state lock so a
            // concurrent reset either revokes this cycle or precedes it
            // entirely.
            self.current_epoch().child_token()
        };

        let driver = CycleDriver {
            session_id: self.session_id.clone(),
            agent: self.agent.clone(),
            timing: self.timing.clone(),
            state: self.state.clone(),
            events: self.events.clone(),
        };
        tokio::spawn(driver.run(token, trimmed.to_string()));

        SubmitOutcome::Scheduled
    }

    /// Invokes an action button.
    ///
    /// Equivalent to typing the payload as free text and submitting it.
    pub async fn invoke_action(&self, payload: &str) -> SubmitOutcome {
        tracing::debug!(session_id = %self.session_id, payload, "action invoked");
        self.submit(payload).await
    }

    /// Discards the transcript and reseeds the fixed introduction.
    ///
    /// Any in-flight response cycle is revoked; no pending callback will
    /// touch the reseeded transcript.
    pub async fn reset(&self) {
        let mut state = self.state.write().await;
        // Revoke while holding the state lock: an in-flight cycle either
        // already finished its mutation or will observe the cancellation.
        self.swap_epoch();
        state.transcript.reset();
        state.phase = AgentPhase::Idle;
        state.exchanges = 0;
        state.in_flight = false;
        self.emit(SessionEvent::TranscriptReset);
        tracing::info!(session_id = %self.session_id, "session reset");
    }

    /// Subscribes to the session's event stream.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Snapshot of the current transcript.
    pub async fn turns(&self) -> Vec<Turn> {
        self.state.read().await.transcript.turns().to_vec()
    }

    /// The current agent phase.
    pub async fn phase(&self) -> AgentPhase {
        self.state.read().await.phase
    }

    /// True from an accepted submission until its reply lands.
    pub async fn is_busy(&self) -> bool {
        self.state.read().await.in_flight
    }

    /// Number of completed exchanges.
    pub async fn exchange_count(&self) -> usize {
        self.state.read().await.exchanges
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    fn emit(&self, event: SessionEvent) {
        // Fire-and-forget: with no subscribers the send just fails
        let _ = self.events.send(event);
    }

    fn current_epoch(&self) -> CancellationToken {
        self.epoch
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn swap_epoch(&self) {
        let mut epoch = self.epoch.lock().unwrap_or_else(PoisonError::into_inner);
        epoch.cancel();
        *epoch = CancellationToken::new();
    }
}

impl Drop for DiscoveryRunner {
    fn drop(&mut self) {
        self.epoch
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .cancel();
    }
}

impl DiscoveryHandle for DiscoveryRunner {
    fn session_id(&self) -> &str {
        &self.session_id
    }

    async fn summary(&self) -> Session {
        let state = self.state.read().await;
        Session {
            id: self.session_id.clone(),
            title: self.title.clone(),
            created_at: self.created_at.clone(),
            updated_at: chrono::Utc::now().to_rfc3339(),
            turn_count: state.transcript.len(),
        }
    }
}

/// Drives one response cycle on a spawned task.
struct CycleDriver {
    session_id: String,
    agent: ScriptedAgent,
    timing: TimingProfile,
    state: Arc<RwLock<SessionState>>,
    events: broadcast::Sender<SessionEvent>,
}

impl CycleDriver {
    async fn run(self, token: CancellationToken, input: String) {
        if !schedule::sleep_unless_revoked(&token, self.timing.submit_delay()).await {
            return;
        }

        // Thinking phase: transient turn with the decorative keyword slice
        let entered = self
            .mutate(&token, |state, events| {
                state.phase = AgentPhase::Thinking;
                let _ = events.send(SessionEvent::PhaseChanged {
                    phase: AgentPhase::Thinking,
                });
                let turn = state
                    .transcript
                    .push_thinking(self.agent.thinking_text(), self.agent.thinking_preview());
                let _ = events.send(SessionEvent::ThinkingStarted { turn });
            })
            .await;
        if !entered {
            return;
        }
        tracing::debug!(session_id = %self.session_id, "thinking phase entered");

        if !schedule::sleep_unless_revoked(&token, self.timing.thinking()).await {
            return;
        }

        // Typing phase: thinking turn removed, indicator only
        let entered = self
            .mutate(&token, |state, events| {
                if let Some(turn_id) = state.transcript.remove_thinking() {
                    let _ = events.send(SessionEvent::ThinkingCleared { turn_id });
                }
                state.phase = AgentPhase::Typing;
                let _ = events.send(SessionEvent::PhaseChanged {
                    phase: AgentPhase::Typing,
                });
            })
            .await;
        if !entered {
            return;
        }
        tracing::debug!(session_id = %self.session_id, "typing phase entered");

        if !schedule::sleep_unless_revoked(&token, self.timing.typing()).await {
            return;
        }

        // Final reply: the cycle completes and the runner goes idle
        let replied = self
            .mutate(&token, |state, events| {
                let reply = self.agent.respond(state.exchanges, &input);
                let turn = state.transcript.push_agent(reply.text, reply.actions);
                let _ = events.send(SessionEvent::TurnAppended { turn });
                state.exchanges += 1;
                state.phase = AgentPhase::Idle;
                state.in_flight = false;
                let _ = events.send(SessionEvent::PhaseChanged {
                    phase: AgentPhase::Idle,
                });
            })
            .await;
        if !replied {
            return;
        }
        tracing::debug!(session_id = %self.session_id, "reply appended");

        // Follow-up turn (report generation), still bound to this epoch
        if let Some(reply) = self.agent.follow_up(&input) {
            if !schedule::sleep_unless_revoked(&token, self.timing.report()).await {
                return;
            }
            self.mutate(&token, |state, events| {
                let turn = state.transcript.push_agent(reply.text, reply.actions);
                let _ = events.send(SessionEvent::TurnAppended { turn });
            })
            .await;
            tracing::debug!(session_id = %self.session_id, "follow-up appended");
        }
    }

    /// Runs `f` against the session state unless the cycle was revoked.
    ///
    /// The revocation check happens under the state lock, which reset also
    /// holds while cancelling; a revoked cycle can therefore never observe
    /// the reseeded transcript.
    async fn mutate<F>(&self, token: &CancellationToken, f: F) -> bool
    where
        F: FnOnce(&mut SessionState, &broadcast::Sender<SessionEvent>),
    {
        let mut state = self.state.write().await;
        if token.is_cancelled() {
            return false;
        }
        f(&mut state, &self.events);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use renus_core::script::showcase_script;

    #[tokio::test]
    async fn test_fresh_runner_is_idle_with_seeds() {
        let runner = DiscoveryRunner::new(
            "test-1",
            showcase_script(),
            TimingProfile::instant(),
        );
        assert_eq!(runner.turns().await.len(), 2);
        assert_eq!(runner.phase().await, AgentPhase::Idle);
        assert!(!runner.is_busy().await);
        assert_eq!(runner.exchange_count().await, 0);
    }

    #[tokio::test]
    async fn test_empty_submission_is_ignored() {
        let runner = DiscoveryRunner::new(
            "test-2",
            showcase_script(),
            TimingProfile::instant(),
        );
        assert_eq!(runner.submit("").await, SubmitOutcome::IgnoredEmpty);
        assert_eq!(runner.submit("   \t ").await, SubmitOutcome::IgnoredEmpty);
        assert_eq!(runner.turns().await.len(), 2);
    }

    #[tokio::test]
    async fn test_title_comes_from_script() {
        let runner = DiscoveryRunner::new(
            "test-3",
            showcase_script(),
            TimingProfile::instant(),
        );
        assert_eq!(runner.title(), "Demonstração do Site");
    }
}
