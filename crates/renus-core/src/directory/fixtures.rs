//! Read-only fixture data.
//!
//! The dashboard surfaces render static arrays; these accessors build the
//! same records on demand. There is deliberately no mutation API: the
//! contract of every fixture is "read-only data", and anything that looks
//! like a write elsewhere in the product is a timed simulation over
//! presentation state, not over this module.

use super::model::{
    Client, Integration, IntegrationStatus, Invoice, InvoiceStatus, PlanUsage, Project,
    ProjectStatus, ProjectType, StaffRole, StaffUser, SubscriptionPlan, TeamMember,
};
use chrono::{Months, NaiveDate, Utc};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// The agency delivery team.
pub fn team() -> Vec<TeamMember> {
    vec![
        TeamMember {
            id: "t1".to_string(),
            name: "Renato Carraro".to_string(),
            avatar_url: Some("https://i.pravatar.cc/150?img=1".to_string()),
        },
        TeamMember {
            id: "t2".to_string(),
            name: "Ana Silva".to_string(),
            avatar_url: Some("https://i.pravatar.cc/150?img=2".to_string()),
        },
        TeamMember {
            id: "t3".to_string(),
            name: "Bruno Costa".to_string(),
            avatar_url: Some("https://i.pravatar.cc/150?img=3".to_string()),
        },
    ]
}

/// The client organizations.
pub fn clients() -> Vec<Client> {
    vec![
        Client {
            id: "c1".to_string(),
            name: "Alpha Solutions".to_string(),
        },
        Client {
            id: "c2".to_string(),
            name: "Health Clinic Pro".to_string(),
        },
        Client {
            id: "c3".to_string(),
            name: "MMN Global".to_string(),
        },
    ]
}

/// The agency project portfolio.
///
/// The first project floats around the current date so the dashboard
/// always shows something in flight; the rest carry fixed dates.
pub fn projects() -> Vec<Project> {
    let team = team();
    let clients = clients();

    let today = Utc::now().date_naive();
    let next_month = today + Months::new(1);
    let last_month = today - Months::new(1);

    vec![
        Project {
            id: "p1".to_string(),
            name: "Sistema de Qualificação de Leads".to_string(),
            client_id: clients[0].id.clone(),
            client_name: clients[0].name.clone(),
            status: ProjectStatus::EmAndamento,
            kind: ProjectType::AgenteSolo,
            start_date: last_month,
            due_date: next_month,
            progress: 65,
            responsible: team[1].clone(),
            budget: 15000.0,
            description: "Implementação de um agente de IA para qualificar leads via WhatsApp."
                .to_string(),
            scope: "Integração com CRM, treinamento do modelo de linguagem.".to_string(),
        },
        Project {
            id: "p2".to_string(),
            name: "Plataforma de Análise de KPIs".to_string(),
            client_id: clients[1].id.clone(),
            client_name: clients[1].name.clone(),
            status: ProjectStatus::EmRevisao,
            kind: ProjectType::AiNative,
            start_date: date(2024, 7, 1),
            due_date: date(2024, 11, 30),
            progress: 90,
            responsible: team[0].clone(),
            budget: 45000.0,
            description: "Desenvolvimento de um SaaS para monitoramento de indicadores de saúde."
                .to_string(),
            scope: "Dashboard, API de dados, módulo de relatórios.".to_string(),
        },
        Project {
            id: "p3".to_string(),
            name: "Automação de Faturamento Mensal".to_string(),
            client_id: clients[2].id.clone(),
            client_name: clients[2].name.clone(),
            status: ProjectStatus::Concluido,
            kind: ProjectType::Workflow,
            start_date: date(2024, 5, 15),
            due_date: date(2024, 9, 1),
            progress: 100,
            responsible: team[2].clone(),
            budget: 8000.0,
            description: "Criação de um workflow para gerar e enviar faturas automaticamente."
                .to_string(),
            scope: "Integração com sistema financeiro e email.".to_string(),
        },
        Project {
            id: "p4".to_string(),
            name: "Sistema de Gestão Parlamentar".to_string(),
            client_id: clients[0].id.clone(),
            client_name: clients[0].name.clone(),
            status: ProjectStatus::Pausado,
            kind: ProjectType::AiNative,
            start_date: date(2024, 10, 1),
            due_date: date(2025, 3, 1),
            progress: 10,
            responsible: team[0].clone(),
            budget: 60000.0,
            description: "Sistema para gerenciar demandas de assessoria parlamentar.".to_string(),
            scope: "Módulo de documentos e comunicação interna.".to_string(),
        },
    ]
}

/// The user-permissions table.
pub fn staff_users() -> Vec<StaffUser> {
    vec![
        StaffUser {
            id: 1,
            name: "Renato Carraro".to_string(),
            email: "admin@renum.tech".to_string(),
            role: StaffRole::Admin,
            active: true,
            last_login: "Agora".to_string(),
        },
        StaffUser {
            id: 2,
            name: "Ana Silva".to_string(),
            email: "ana.s@renum.tech".to_string(),
            role: StaffRole::Manager,
            active: true,
            last_login: "1h atrás".to_string(),
        },
        StaffUser {
            id: 3,
            name: "Bruno Costa".to_string(),
            email: "bruno.c@renum.tech".to_string(),
            role: StaffRole::Staff,
            active: false,
            last_login: "3 dias atrás".to_string(),
        },
    ]
}

/// The billing history.
pub fn invoices() -> Vec<Invoice> {
    vec![
        Invoice {
            id: 101,
            date: date(2024, 10, 1),
            amount: 999.0,
            status: InvoiceStatus::Pago,
        },
        Invoice {
            id: 100,
            date: date(2024, 9, 1),
            amount: 999.0,
            status: InvoiceStatus::Pago,
        },
        Invoice {
            id: 99,
            date: date(2024, 8, 1),
            amount: 999.0,
            status: InvoiceStatus::Pago,
        },
    ]
}

/// The current subscription plan.
pub fn subscription_plan() -> SubscriptionPlan {
    SubscriptionPlan {
        name: "Plano Enterprise AI".to_string(),
        price: "R$ 999/mês".to_string(),
        features: vec![
            "Agente Renus Ilimitado".to_string(),
            "5 Usuários Admin".to_string(),
            "Relatórios Customizados".to_string(),
        ],
        usage: PlanUsage {
            conversations: 1500,
            limit: 5000,
        },
    }
}

/// The third-party integration slots.
pub fn integrations() -> Vec<Integration> {
    vec![
        Integration {
            name: "WhatsApp Business".to_string(),
            status: IntegrationStatus::Connected,
            config_key: "wa_token".to_string(),
            credential: Some("WA-XXXXX".to_string()),
        },
        Integration {
            name: "CRM Hub (Mock)".to_string(),
            status: IntegrationStatus::Disconnected,
            config_key: "crm_api".to_string(),
            credential: None,
        },
        Integration {
            name: "Google Calendar".to_string(),
            status: IntegrationStatus::Connected,
            config_key: "cal_key".to_string(),
            credential: Some("G-YYYYY".to_string()),
        },
        Integration {
            name: "Email SMTP".to_string(),
            status: IntegrationStatus::Disconnected,
            config_key: "smtp_pass".to_string(),
            credential: None,
        },
        Integration {
            name: "AWS S3 Storage".to_string(),
            status: IntegrationStatus::Connected,
            config_key: "s3_bucket".to_string(),
            credential: Some("renum-files-prod".to_string()),
        },
    ]
}

/// Titles of the mock session-history entries in the discovery sidebar.
pub fn session_history() -> Vec<String> {
    vec![
        "Sessão 1: Vendas MMN".to_string(),
        "Sessão 2: Saúde Clínica".to_string(),
        "Sessão 3: Automação".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portfolio_shape() {
        let projects = projects();
        assert_eq!(projects.len(), 4);
        assert!(projects.iter().all(|p| p.progress <= 100));

        let done = projects.iter().find(|p| p.id == "p3").unwrap();
        assert_eq!(done.status, ProjectStatus::Concluido);
        assert_eq!(done.progress, 100);
    }

    #[test]
    fn test_projects_reference_known_clients_and_team() {
        let client_ids: Vec<String> = clients().into_iter().map(|c| c.id).collect();
        let team_ids: Vec<String> = team().into_iter().map(|t| t.id).collect();
        for project in projects() {
            assert!(client_ids.contains(&project.client_id));
            assert!(team_ids.contains(&project.responsible.id));
        }
    }

    #[test]
    fn test_status_labels_render_in_portuguese() {
        assert_eq!(ProjectStatus::EmAndamento.to_string(), "Em Andamento");
        assert_eq!(ProjectStatus::EmRevisao.to_string(), "Em Revisão");
        assert_eq!(ProjectType::AgenteSolo.to_string(), "Agente Solo");
    }

    #[test]
    fn test_disconnected_integrations_have_no_credential() {
        for integration in integrations() {
            match integration.status {
                IntegrationStatus::Connected => assert!(integration.credential.is_some()),
                IntegrationStatus::Disconnected => assert!(integration.credential.is_none()),
            }
        }
    }

    #[test]
    fn test_plan_usage_is_within_limit() {
        let plan = subscription_plan();
        assert!(plan.usage.conversations <= plan.usage.limit);
    }
}
