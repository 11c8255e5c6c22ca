//! The append-only conversation transcript.

use super::turn::{Sender, Turn, TurnAction, TurnId};
use serde::{Deserialize, Serialize};

/// An ordered sequence of [`Turn`]s, seeded with a fixed introduction.
///
/// A transcript is mutated only by appending, with one exception: the
/// transient thinking turn is removed before the final agent turn of a
/// response cycle is appended. Invariant: at most one thinking turn exists
/// at any time.
///
/// `reset` discards all turns and reseeds the same fixed introduction;
/// turn ids restart because a reset transcript is, semantically, a new
/// transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    turns: Vec<Turn>,
    seeds: Vec<String>,
    next_id: u64,
}

impl Transcript {
    /// Creates a transcript seeded with the given introductory agent turns.
    pub fn seeded(seeds: Vec<String>) -> Self {
        let mut transcript = Self {
            turns: Vec::new(),
            seeds,
            next_id: 1,
        };
        transcript.append_seeds();
        transcript
    }

    fn append_seeds(&mut self) {
        let seeds = self.seeds.clone();
        for text in seeds {
            self.push(Sender::Agent, text, false, Vec::new(), Vec::new());
        }
    }

    fn allocate_id(&mut self) -> TurnId {
        let id = TurnId(self.next_id);
        self.next_id += 1;
        id
    }

    fn push(
        &mut self,
        sender: Sender,
        text: String,
        is_thinking: bool,
        keywords: Vec<String>,
        actions: Vec<TurnAction>,
    ) -> Turn {
        let turn = Turn {
            id: self.allocate_id(),
            sender,
            text,
            is_thinking,
            keywords,
            actions,
        };
        self.turns.push(turn.clone());
        turn
    }

    /// Appends an operator turn and returns a copy of it.
    pub fn push_user(&mut self, text: impl Into<String>) -> Turn {
        self.push(Sender::User, text.into(), false, Vec::new(), Vec::new())
    }

    /// Appends a final agent turn and returns a copy of it.
    pub fn push_agent(&mut self, text: impl Into<String>, actions: Vec<TurnAction>) -> Turn {
        self.push(Sender::Agent, text.into(), false, Vec::new(), actions)
    }

    /// Appends the transient thinking turn and returns a copy of it.
    ///
    /// Any thinking turn still present is removed first, upholding the
    /// at-most-one invariant structurally.
    pub fn push_thinking(&mut self, text: impl Into<String>, keywords: Vec<String>) -> Turn {
        self.remove_thinking();
        self.push(Sender::Agent, text.into(), true, keywords, Vec::new())
    }

    /// Removes the thinking turn, returning its id if one was present.
    pub fn remove_thinking(&mut self) -> Option<TurnId> {
        let index = self.turns.iter().position(|turn| turn.is_thinking)?;
        Some(self.turns.remove(index).id)
    }

    /// Returns true while a thinking turn is present.
    pub fn has_thinking(&self) -> bool {
        self.turns.iter().any(|turn| turn.is_thinking)
    }

    /// Discards all turns and reseeds the fixed introduction.
    pub fn reset(&mut self) {
        self.turns.clear();
        self.next_id = 1;
        self.append_seeds();
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The most recent turn, if any.
    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeds() -> Vec<String> {
        vec!["Olá!".to_string(), "Qual é o desafio?".to_string()]
    }

    #[test]
    fn test_seeded_transcript() {
        let transcript = Transcript::seeded(seeds());
        assert_eq!(transcript.len(), 2);
        assert!(transcript.turns().iter().all(Turn::is_agent));
        assert_eq!(transcript.turns()[0].id, TurnId(1));
        assert_eq!(transcript.turns()[1].id, TurnId(2));
    }

    #[test]
    fn test_append_order_and_monotonic_ids() {
        let mut transcript = Transcript::seeded(seeds());
        let user = transcript.push_user("vendas");
        let agent = transcript.push_agent("resposta", Vec::new());
        assert!(user.id < agent.id);
        let texts: Vec<&str> = transcript.turns().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Olá!", "Qual é o desafio?", "vendas", "resposta"]);
    }

    #[test]
    fn test_at_most_one_thinking_turn() {
        let mut transcript = Transcript::seeded(seeds());
        transcript.push_thinking("Processando...", vec!["Setor".to_string()]);
        transcript.push_thinking("Processando...", vec!["ROI".to_string()]);
        assert_eq!(
            transcript.turns().iter().filter(|t| t.is_thinking).count(),
            1
        );
        assert_eq!(transcript.turns().last().unwrap().keywords, vec!["ROI"]);
    }

    #[test]
    fn test_remove_thinking() {
        let mut transcript = Transcript::seeded(seeds());
        let thinking = transcript.push_thinking("Processando...", Vec::new());
        assert!(transcript.has_thinking());
        assert_eq!(transcript.remove_thinking(), Some(thinking.id));
        assert!(!transcript.has_thinking());
        assert_eq!(transcript.remove_thinking(), None);
    }

    #[test]
    fn test_reset_restores_exact_seed_pair() {
        let mut transcript = Transcript::seeded(seeds());
        transcript.push_user("primeira");
        transcript.push_thinking("Processando...", Vec::new());
        transcript.push_agent("resposta", Vec::new());

        transcript.reset();

        assert_eq!(transcript.len(), 2);
        let texts: Vec<&str> = transcript.turns().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Olá!", "Qual é o desafio?"]);
        // Ids restart: a reset transcript is a new transcript.
        assert_eq!(transcript.turns()[0].id, TurnId(1));
    }
}
