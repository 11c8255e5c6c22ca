//! Fixture directory: the read-only mock data behind the dashboard.

pub mod fixtures;
mod model;

pub use model::{
    Client, Integration, IntegrationStatus, Invoice, InvoiceStatus, PlanUsage, Project,
    ProjectStatus, ProjectType, StaffRole, StaffUser, SubscriptionPlan, TeamMember,
};
