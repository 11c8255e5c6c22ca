//! Directory domain models.
//!
//! These are the records behind the dashboard tables: projects, people,
//! billing and integrations. All instances come from the fixture module;
//! nothing here is ever written back anywhere.

use serde::{Deserialize, Serialize};

/// Delivery status of an agency project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[strum(serialize = "Em Andamento")]
    EmAndamento,
    #[strum(serialize = "Concluído")]
    Concluido,
    #[strum(serialize = "Pausado")]
    Pausado,
    #[strum(serialize = "Atrasado")]
    Atrasado,
    #[strum(serialize = "Em Revisão")]
    EmRevisao,
}

/// Engagement model of an agency project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    #[strum(serialize = "AI Native")]
    AiNative,
    #[strum(serialize = "Workflow")]
    Workflow,
    #[strum(serialize = "Agente Solo")]
    AgenteSolo,
}

/// A member of the agency delivery team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// A client organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
}

/// An agency project as shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub client_id: String,
    pub client_name: String,
    pub status: ProjectStatus,
    pub kind: ProjectType,
    pub start_date: chrono::NaiveDate,
    pub due_date: chrono::NaiveDate,
    /// Completion percentage, 0 to 100.
    pub progress: u8,
    pub responsible: TeamMember,
    pub budget: f64,
    pub description: String,
    pub scope: String,
}

/// Internal role of a staff account in the permissions table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
pub enum StaffRole {
    Admin,
    Manager,
    Staff,
    Client,
}

/// A row of the user-permissions table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffUser {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: StaffRole,
    pub active: bool,
    /// Human-readable relative timestamp, as rendered on the dashboard.
    pub last_login: String,
}

/// Payment state of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    #[strum(serialize = "Pago")]
    Pago,
    #[strum(serialize = "Pendente")]
    Pendente,
}

/// A row of the billing history table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: u32,
    pub date: chrono::NaiveDate,
    pub amount: f64,
    pub status: InvoiceStatus,
}

/// Conversation quota usage of the current plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanUsage {
    pub conversations: u32,
    pub limit: u32,
}

/// The subscription plan shown on the billing tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionPlan {
    pub name: String,
    pub price: String,
    pub features: Vec<String>,
    pub usage: PlanUsage,
}

/// Connection state of a third-party integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationStatus {
    #[strum(serialize = "connected")]
    Connected,
    #[strum(serialize = "disconnected")]
    Disconnected,
}

/// A third-party integration slot on the settings screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Integration {
    pub name: String,
    pub status: IntegrationStatus,
    /// Configuration key under which the credential is stored.
    pub config_key: String,
    /// Stored credential value, when one is configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential: Option<String>,
}
