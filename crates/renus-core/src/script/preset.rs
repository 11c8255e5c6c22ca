//! Official discovery scripts.
//!
//! Two surfaces mount the engine: the homepage showcase widget and the
//! full discovery page. Each plays back its own fixed script; the copy
//! below is the production copy, verbatim.

use super::model::{DialogueScript, FollowUpRule, KeywordRule, ScriptedReply};
use crate::session::TurnAction;

/// Payload submitted by the "Gerar Relatório Preliminar" action.
pub const GENERATE_REPORT_PAYLOAD: &str = "GERAR_RELATORIO";

/// Payload carried by the report-ready follow-up button.
pub const VIEW_REPORT_PAYLOAD: &str = "VIEW_REPORT";

/// Script of the homepage showcase widget.
///
/// A single-branch demo: a sales-specific reply when the operator mentions
/// "vendas", the generic analysis reply otherwise. No scripted steps and
/// no follow-ups.
pub fn showcase_script() -> DialogueScript {
    DialogueScript {
        name: "Demonstração do Site".to_string(),
        seeds: vec![
            "Olá! Eu sou Renus, seu assistente de descoberta. Estou aqui para entender seus \
             desafios de negócio."
                .to_string(),
            "Qual é o principal desafio de automação ou IA que sua empresa enfrenta hoje?"
                .to_string(),
        ],
        thinking_text: "Processando informações...".to_string(),
        thinking_keywords: vec![
            "Automação".to_string(),
            "Vendas".to_string(),
            "Desafio".to_string(),
            "Análise".to_string(),
            "Estratégia".to_string(),
        ],
        keyword_rules: vec![KeywordRule {
            needle: "vendas".to_string(),
            reply: ScriptedReply::plain(
                "Com base no seu interesse em vendas, Renus pode analisar seus KPIs e sugerir \
                 um agente solo para qualificação de leads. Isso pode aumentar sua conversão \
                 em 30%.",
            ),
        }],
        steps: Vec::new(),
        fallback: ScriptedReply::plain(
            "Entendido. Renus está analisando sua solicitação. Nosso próximo passo seria gerar \
             um relatório de viabilidade técnica e ROI potencial.",
        ),
        follow_ups: Vec::new(),
    }
}

/// Script of the full discovery page.
///
/// Three scripted exchanges (sector, bottleneck, budget/deadline), the
/// third offering report generation; afterwards the generic fallback
/// recurs. Submitting the report payload earns a delayed report-ready
/// follow-up turn.
pub fn discovery_script() -> DialogueScript {
    DialogueScript {
        name: "Discovery Completo".to_string(),
        seeds: vec![
            "Bem-vindo à experiência completa do Renus! Eu sou seu assistente de Discovery, \
             pronto para mapear as soluções de IA ideais para o seu negócio."
                .to_string(),
            "Para começarmos, qual é o nome da sua empresa ou projeto e qual setor ela atua?"
                .to_string(),
        ],
        thinking_text: "Processando informações...".to_string(),
        thinking_keywords: vec![
            "Setor".to_string(),
            "Desafio".to_string(),
            "Objetivos".to_string(),
            "ROI".to_string(),
            "Automação".to_string(),
        ],
        keyword_rules: Vec::new(),
        steps: vec![
            ScriptedReply::plain(
                "Ótimo! Entendi que você atua no setor de {input}. Agora, me diga: qual é o \
                 principal problema ou gargalo que você gostaria de resolver com a ajuda da IA?",
            ),
            ScriptedReply::plain(
                "Excelente foco no gargalo. Para eu entender melhor o escopo, você tem alguma \
                 expectativa de prazo ou orçamento para essa solução?",
            ),
            ScriptedReply::with_action(
                "Perfeito. Com base nas suas respostas, Renus já tem dados suficientes para \
                 gerar um relatório preliminar de viabilidade.",
                TurnAction::new("Gerar Relatório Preliminar", GENERATE_REPORT_PAYLOAD),
            ),
        ],
        fallback: ScriptedReply::plain(
            "Agradeço a informação! Renus continua aprendendo. O que mais você gostaria de me \
             contar sobre seus objetivos?",
        ),
        follow_ups: vec![FollowUpRule {
            payload: GENERATE_REPORT_PAYLOAD.to_string(),
            reply: ScriptedReply::with_action(
                "Relatório de Viabilidade Preliminar concluído! Clique abaixo para visualizar \
                 e baixar.",
                TurnAction::new("Visualizar Relatório (Mock)", VIEW_REPORT_PAYLOAD),
            ),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_showcase_script_shape() {
        let script = showcase_script();
        assert_eq!(script.seeds.len(), 2);
        assert!(script.steps.is_empty());
        assert!(script.keyword_match("quero aumentar minhas Vendas").is_some());
        assert_eq!(
            script.thinking_preview(),
            vec!["Automação", "Vendas", "Desafio"]
        );
    }

    #[test]
    fn test_discovery_script_shape() {
        let script = discovery_script();
        assert_eq!(script.seeds.len(), 2);
        assert_eq!(script.steps.len(), 3);
        assert!(script.keyword_rules.is_empty());

        // The third exchange offers report generation
        let step = script.step(2).unwrap();
        assert_eq!(step.actions.len(), 1);
        assert_eq!(step.actions[0].payload, GENERATE_REPORT_PAYLOAD);

        // Generating the report earns the report-ready follow-up
        let follow_up = script.follow_up(GENERATE_REPORT_PAYLOAD).unwrap();
        assert_eq!(follow_up.reply.actions[0].payload, VIEW_REPORT_PAYLOAD);
    }

    #[test]
    fn test_discovery_first_step_echoes_sector() {
        let script = discovery_script();
        let reply = script.step(0).unwrap().render("logística");
        assert!(reply.text.contains("setor de logística"));
    }
}
