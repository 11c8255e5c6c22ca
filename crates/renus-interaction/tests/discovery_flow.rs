//! End-to-end tests of the discovery response pipeline.
//!
//! All tests run under tokio's paused clock: sleeping in the test advances
//! virtual time deterministically through the submit/thinking/typing
//! delays of the default timing profile (500/3000/2000/4000 ms).

use renus_core::config::TimingProfile;
use renus_core::script::{discovery_script, showcase_script, GENERATE_REPORT_PAYLOAD, VIEW_REPORT_PAYLOAD};
use renus_core::session::{AgentPhase, SessionEvent};
use renus_interaction::{DiscoveryRunner, SubmitOutcome};
use std::time::Duration;

fn showcase_runner(id: &str) -> DiscoveryRunner {
    DiscoveryRunner::new(id, showcase_script(), TimingProfile::default())
}

fn discovery_runner(id: &str) -> DiscoveryRunner {
    DiscoveryRunner::new(id, discovery_script(), TimingProfile::default())
}

async fn sleep_ms(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

/// Drives one full response cycle (submit delay + thinking + typing).
async fn complete_cycle() {
    sleep_ms(500 + 3000 + 2000 + 100).await;
}

#[tokio::test(start_paused = true)]
async fn empty_or_whitespace_submission_never_starts_a_cycle() {
    let runner = showcase_runner("empty");

    assert_eq!(runner.submit("").await, SubmitOutcome::IgnoredEmpty);
    assert_eq!(runner.submit("   \t\n").await, SubmitOutcome::IgnoredEmpty);

    // Nothing was appended and nothing ever fires
    sleep_ms(20_000).await;
    assert_eq!(runner.turns().await.len(), 2);
    assert_eq!(runner.phase().await, AgentPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn submission_while_busy_is_a_no_op() {
    let runner = showcase_runner("busy");

    assert_eq!(runner.submit("produtividade").await, SubmitOutcome::Scheduled);
    // Still pending: the cycle has not reached the thinking phase yet
    assert_eq!(runner.submit("segunda").await, SubmitOutcome::IgnoredBusy);

    // Thinking phase
    sleep_ms(1000).await;
    assert_eq!(runner.phase().await, AgentPhase::Thinking);
    let len_before = runner.turns().await.len();
    assert_eq!(runner.submit("terceira").await, SubmitOutcome::IgnoredBusy);
    assert_eq!(runner.turns().await.len(), len_before);

    // Typing phase
    sleep_ms(3000).await;
    assert_eq!(runner.phase().await, AgentPhase::Typing);
    assert_eq!(runner.submit("quarta").await, SubmitOutcome::IgnoredBusy);

    // Exactly one cycle completed: 2 seeds + 1 user + 1 reply
    sleep_ms(2000).await;
    assert_eq!(runner.turns().await.len(), 4);
    assert_eq!(runner.phase().await, AgentPhase::Idle);
    assert!(!runner.is_busy().await);
}

#[tokio::test(start_paused = true)]
async fn full_cycle_orders_turns_and_clears_the_thinking_turn() {
    let runner = showcase_runner("ordering");

    runner.submit("produtividade").await;

    // Thinking: the transient turn is visible with its keyword slice
    sleep_ms(600).await;
    let turns = runner.turns().await;
    assert_eq!(turns.len(), 4);
    let thinking = turns.last().unwrap();
    assert!(thinking.is_thinking);
    assert_eq!(thinking.text, "Processando informações...");
    assert_eq!(thinking.keywords, vec!["Automação", "Vendas", "Desafio"]);

    // Typing: the thinking turn is gone, only the indicator remains
    sleep_ms(3000).await;
    let turns = runner.turns().await;
    assert_eq!(runner.phase().await, AgentPhase::Typing);
    assert!(turns.iter().all(|t| !t.is_thinking));
    assert_eq!(turns.len(), 3);

    // Final state: seeds, user turn, agent reply - in order, no thinking
    sleep_ms(2000).await;
    let turns = runner.turns().await;
    assert_eq!(turns.len(), 4);
    assert!(turns[0].is_agent() && turns[1].is_agent());
    assert!(turns[2].is_user());
    assert!(turns[3].is_agent());
    assert!(turns.iter().all(|t| !t.is_thinking));
    assert_eq!(runner.phase().await, AgentPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn keyword_rule_selects_the_sales_reply() {
    let runner = showcase_runner("vendas");
    runner.submit("Quero melhorar minhas VENDAS online").await;
    complete_cycle().await;

    let turns = runner.turns().await;
    assert!(turns
        .last()
        .unwrap()
        .text
        .starts_with("Com base no seu interesse em vendas"));

    // Any other input earns the generic reply
    let runner = showcase_runner("generico");
    runner.submit("Quero aumentar minha produtividade").await;
    complete_cycle().await;

    let turns = runner.turns().await;
    assert!(turns.last().unwrap().text.starts_with("Entendido. Renus está analisando"));
}

#[tokio::test(start_paused = true)]
async fn reset_restores_the_seed_pair_and_revokes_the_cycle() {
    let runner = discovery_runner("reset");
    let seeds: Vec<String> = runner.turns().await.into_iter().map(|t| t.text).collect();

    runner.submit("logística").await;
    sleep_ms(1000).await;
    assert_eq!(runner.phase().await, AgentPhase::Thinking);

    runner.reset().await;

    let texts: Vec<String> = runner.turns().await.into_iter().map(|t| t.text).collect();
    assert_eq!(texts, seeds);
    assert_eq!(runner.phase().await, AgentPhase::Idle);
    assert!(!runner.is_busy().await);

    // The revoked cycle never fires into the reseeded transcript
    sleep_ms(30_000).await;
    assert_eq!(runner.turns().await.len(), 2);

    // And the runner accepts fresh submissions afterwards
    assert_eq!(runner.submit("saúde").await, SubmitOutcome::Scheduled);
    complete_cycle().await;
    let turns = runner.turns().await;
    assert_eq!(turns.len(), 4);
    assert!(turns.last().unwrap().text.contains("setor de saúde"));
}

#[tokio::test(start_paused = true)]
async fn action_invocation_matches_free_text_submission() {
    let by_action = discovery_runner("by-action");
    let by_text = discovery_runner("by-text");

    assert_eq!(
        by_action.invoke_action(GENERATE_REPORT_PAYLOAD).await,
        SubmitOutcome::Scheduled
    );
    assert_eq!(
        by_text.submit(GENERATE_REPORT_PAYLOAD).await,
        SubmitOutcome::Scheduled
    );

    complete_cycle().await;
    assert_eq!(by_action.turns().await, by_text.turns().await);

    // The report follow-up lands identically in both after its delay
    sleep_ms(4000).await;
    let action_turns = by_action.turns().await;
    assert_eq!(action_turns, by_text.turns().await);
    let report = action_turns.last().unwrap();
    assert!(report.text.starts_with("Relatório de Viabilidade Preliminar concluído!"));
    assert_eq!(report.actions[0].payload, VIEW_REPORT_PAYLOAD);
}

#[tokio::test(start_paused = true)]
async fn scripted_discovery_session_end_to_end() {
    let runner = discovery_runner("e2e");

    runner.submit("saúde").await;
    complete_cycle().await;
    assert!(runner.turns().await.last().unwrap().text.contains("setor de saúde"));

    runner.submit("triagem manual de pacientes").await;
    complete_cycle().await;
    assert!(runner
        .turns()
        .await
        .last()
        .unwrap()
        .text
        .starts_with("Excelente foco no gargalo"));

    runner.submit("até 3 meses, orçamento aberto").await;
    complete_cycle().await;
    let offer = runner.turns().await.last().unwrap().clone();
    assert!(offer.text.contains("relatório preliminar de viabilidade"));
    assert_eq!(offer.actions[0].payload, GENERATE_REPORT_PAYLOAD);
    assert_eq!(runner.exchange_count().await, 3);

    // Accept the offer: fallback reply, then the delayed report turn
    runner.invoke_action(GENERATE_REPORT_PAYLOAD).await;
    complete_cycle().await;
    assert!(runner
        .turns()
        .await
        .last()
        .unwrap()
        .text
        .starts_with("Agradeço a informação!"));

    sleep_ms(4000).await;
    let turns = runner.turns().await;
    let report = turns.last().unwrap();
    assert!(report.text.starts_with("Relatório de Viabilidade Preliminar concluído!"));
    assert_eq!(report.actions[0].payload, VIEW_REPORT_PAYLOAD);

    // 2 seeds + 4 exchanges (user+reply each) + report follow-up
    assert_eq!(turns.len(), 2 + 8 + 1);
}

#[tokio::test(start_paused = true)]
async fn event_stream_mirrors_one_cycle() {
    let runner = showcase_runner("events");
    let mut events = runner.subscribe();

    runner.submit("produtividade").await;
    complete_cycle().await;

    let mut kinds = Vec::new();
    while let Ok(event) = events.try_recv() {
        kinds.push(match event {
            SessionEvent::TurnAppended { turn } if turn.is_user() => "user",
            SessionEvent::TurnAppended { .. } => "agent",
            SessionEvent::ThinkingStarted { .. } => "thinking_started",
            SessionEvent::ThinkingCleared { .. } => "thinking_cleared",
            SessionEvent::PhaseChanged { phase: AgentPhase::Thinking } => "phase_thinking",
            SessionEvent::PhaseChanged { phase: AgentPhase::Typing } => "phase_typing",
            SessionEvent::PhaseChanged { phase: AgentPhase::Idle } => "phase_idle",
            SessionEvent::TranscriptReset => "reset",
        });
    }

    assert_eq!(
        kinds,
        vec![
            "user",
            "phase_thinking",
            "thinking_started",
            "thinking_cleared",
            "phase_typing",
            "agent",
            "phase_idle",
        ]
    );
}
