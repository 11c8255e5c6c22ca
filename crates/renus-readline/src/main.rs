use std::borrow::Cow::{self, Borrowed, Owned};
use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use tokio::sync::broadcast;

use renus_core::config::ConfigRoot;
use renus_core::directory::fixtures;
use renus_core::script::discovery_script;
use renus_core::session::{AgentPhase, SessionEvent, SessionManager, Turn};
use renus_core::user::{AuthProvider, MockAuthProvider};
use renus_interaction::{DiscoveryRunner, SubmitOutcome};

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: vec![
                "/new".to_string(),
                "/sessions".to_string(),
                "/projects".to_string(),
                "/billing".to_string(),
                "/integrations".to_string(),
                "/users".to_string(),
                "/login".to_string(),
                "/logout".to_string(),
                "/whoami".to_string(),
                "/do".to_string(),
                "/help".to_string(),
            ],
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

/// Renders one session event to the terminal.
fn print_event(event: SessionEvent) {
    match event {
        SessionEvent::TurnAppended { turn } if turn.is_agent() => print_agent_turn(&turn),
        SessionEvent::TurnAppended { .. } => {
            // Operator turns are already echoed by the REPL loop
        }
        SessionEvent::ThinkingStarted { turn } => {
            let keywords = turn.keywords.join(", ");
            println!(
                "{}",
                format!("Renus está pensando... [{}]", keywords).bright_black()
            );
        }
        SessionEvent::ThinkingCleared { .. } => {}
        SessionEvent::PhaseChanged { phase } => {
            if phase == AgentPhase::Typing {
                println!("{}", "Renus está digitando...".bright_black());
            }
        }
        SessionEvent::TranscriptReset => {
            println!("{}", "Nova conversa iniciada.".bright_green());
        }
    }
}

fn print_agent_turn(turn: &Turn) {
    println!("{}", "[Renus]".bright_magenta());
    for line in turn.text.lines() {
        println!("{}", line.bright_blue());
    }
    for action in &turn.actions {
        println!(
            "{}",
            format!("  -> {} (/do {})", action.label, action.payload).yellow()
        );
    }
    println!();
}

fn print_help() {
    println!("{}", "Comandos disponíveis:".bright_yellow());
    println!("  /new                     Nova conversa (reinicia a sessão)");
    println!("  /sessions                Sessões ativas e histórico");
    println!("  /projects                Portfólio de projetos");
    println!("  /billing                 Plano atual e faturas");
    println!("  /integrations            Status das integrações");
    println!("  /users                   Usuários e permissões");
    println!("  /login <email> <senha>   Entrar no dashboard");
    println!("  /logout                  Encerrar sessão de usuário");
    println!("  /whoami                  Usuário e função atuais");
    println!("  /do <payload>            Acionar um botão da última resposta");
    println!("  quit                     Sair");
}

/// Loads `renus.toml` from the working directory when present.
fn load_config() -> Result<ConfigRoot> {
    match std::fs::read_to_string("renus.toml") {
        Ok(text) => Ok(ConfigRoot::from_toml_str(&text)?),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(ConfigRoot::default()),
        Err(err) => Err(err.into()),
    }
}

/// The main entry point for the Renus discovery REPL.
///
/// This async function sets up a rustyline-based REPL that:
/// 1. Mounts a discovery session on the script runner
/// 2. Streams session events to the terminal in the background
/// 3. Provides command completion for the slash commands
/// 4. Forwards free text straight into the submit pipeline
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // ===== Backend Initialization =====
    let config = load_config()?;
    tracing::debug!(?config, "configuration loaded");
    let auth = Arc::new(MockAuthProvider::new(config.timing.clone()));
    let manager: SessionManager<DiscoveryRunner> = SessionManager::new();

    let timing = config.timing.clone();
    let runner = manager
        .create_session(uuid::Uuid::new_v4().to_string(), |id| {
            DiscoveryRunner::new(id, discovery_script(), timing)
        })
        .await;

    // Stream session events to the terminal as they happen
    let mut events = runner.subscribe();
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => print_event(event),
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    });

    // ===== REPL Setup =====
    let helper = CliHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    println!("{}", "=== Renus - Discovery Agent ===".bright_magenta().bold());
    println!(
        "{}",
        "Digite sua resposta ou solicitação, '/help' para comandos, 'quit' para sair."
            .bright_black()
    );
    println!();

    // Replay the seeded introduction
    for turn in runner.turns().await {
        print_agent_turn(&turn);
    }

    // ===== Main REPL Loop =====
    loop {
        let readline = rl.readline(">> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Até logo!".bright_green());
                    break;
                }

                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                if let Some(rest) = trimmed.strip_prefix('/') {
                    let mut parts = rest.split_whitespace();
                    let command = parts.next().unwrap_or_default();
                    let args: Vec<&str> = parts.collect();
                    handle_command(command, &args, &runner, &manager, auth.as_ref()).await;
                    continue;
                }

                println!("{}", format!("> {}", trimmed).green());

                if runner.submit(trimmed).await == SubmitOutcome::IgnoredBusy {
                    println!(
                        "{}",
                        "Renus ainda está processando a resposta anterior...".bright_black()
                    );
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("{}", "Até logo!".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Erro de leitura: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}

async fn handle_command(
    command: &str,
    args: &[&str],
    runner: &DiscoveryRunner,
    manager: &SessionManager<DiscoveryRunner>,
    auth: &dyn AuthProvider,
) {
    match command {
        "new" => runner.reset().await,
        "do" => match args.first() {
            Some(payload) => {
                println!("{}", format!("> {}", payload).green());
                if runner.invoke_action(payload).await == SubmitOutcome::IgnoredBusy {
                    println!(
                        "{}",
                        "Renus ainda está processando a resposta anterior...".bright_black()
                    );
                }
            }
            None => println!("{}", "Uso: /do <payload>".bright_black()),
        },
        "login" => match args {
            [email, password] => match auth.login(email, password).await {
                Ok(account) => {
                    println!("{}", format!("Bem-vindo, {}!", account.name).bright_green());
                }
                Err(_) => println!(
                    "{}",
                    "Credenciais inválidas. Tente admin@renum.tech ou client@alpha.com com \
                     senha: password"
                        .red()
                ),
            },
            _ => println!("{}", "Uso: /login <email> <senha>".bright_black()),
        },
        "logout" => {
            auth.logout().await;
            println!("{}", "Sessão encerrada.".bright_yellow());
        }
        "whoami" => match auth.current_user().await {
            Some(account) => println!(
                "{}",
                format!("{} <{}> ({})", account.name, account.email, account.role).bright_blue()
            ),
            None => println!("{}", "Não autenticado (função: guest)".bright_black()),
        },
        "projects" => {
            for project in fixtures::projects() {
                println!(
                    "{}",
                    format!(
                        "{} — {} — {} — {}%",
                        project.name, project.client_name, project.status, project.progress
                    )
                    .bright_blue()
                );
            }
        }
        "billing" => {
            let plan = fixtures::subscription_plan();
            println!(
                "{}",
                format!("{} ({})", plan.name, plan.price).bright_blue()
            );
            println!(
                "{}",
                format!(
                    "  Conversas: {} de {}",
                    plan.usage.conversations, plan.usage.limit
                )
                .bright_black()
            );
            for invoice in fixtures::invoices() {
                println!(
                    "{}",
                    format!(
                        "  #{} {} R$ {:.2} ({})",
                        invoice.id, invoice.date, invoice.amount, invoice.status
                    )
                    .bright_black()
                );
            }
        }
        "integrations" => {
            for integration in fixtures::integrations() {
                println!(
                    "{}",
                    format!("{} [{}]", integration.name, integration.status).bright_blue()
                );
            }
        }
        "users" => {
            for user in fixtures::staff_users() {
                let status = if user.active { "Active" } else { "Inactive" };
                println!(
                    "{}",
                    format!(
                        "{} <{}> {} ({}) - último acesso: {}",
                        user.name, user.email, user.role, status, user.last_login
                    )
                    .bright_blue()
                );
            }
        }
        "sessions" => {
            println!("{}", "Sessões ativas:".bright_yellow());
            for session in manager.list_sessions().await {
                println!(
                    "{}",
                    format!("  {} ({} turnos)", session.title, session.turn_count).bright_blue()
                );
            }
            println!("{}", "Histórico (Mock):".bright_yellow());
            for title in fixtures::session_history() {
                println!("{}", format!("  {}", title).bright_black());
            }
        }
        "help" => print_help(),
        _ => println!("{}", "Comando desconhecido. Use /help.".bright_black()),
    }
}
