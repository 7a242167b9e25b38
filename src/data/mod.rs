//! The profile served by the bio endpoint.
//!
//! Edit [`SAJ_SAMUEL`] to change what both the JSON and HTML
//! representations show; nothing else holds profile content.

use crate::models::profile::Profile;

const CORE_EXPERTISE: [&str; 8] = [
    "SQL Server & T-SQL",
    "Stored Procedures & Performance Tuning",
    "ETL / ELT Pipelines",
    "Azure Functions (Serverless)",
    "GitHub Actions CI/CD",
    "SSRS Reporting",
    "Financial & Cost Data Systems",
    "Process Automation",
];

const CURRENT_FOCUS: [&str; 4] = [
    "Azure Serverless Architecture",
    "Cloud-native App Development",
    "Data Engineering Best Practices",
    "AI-powered Enterprise Solutions",
];

/// Saj Samuel's bio, shared read-only by every request.
pub static SAJ_SAMUEL: Profile = Profile {
    name: "Saj Samuel",
    headline: "Data Engineer | Azure | SQL",
    location: "New Hyde Park, NY",
    summary: "Data-focused technology professional specializing in SQL Server, \
              T-SQL optimization, financial data systems, and Azure-based cloud solutions. \
              Experienced in building ETL/ELT pipelines, automation workflows, reporting systems, \
              and modernizing enterprise data architectures.",
    core_expertise: &CORE_EXPERTISE,
    current_focus: &CURRENT_FOCUS,
    status: "Actively building modern Azure-based data solutions",
};

/// Returns the profile served by the endpoint.
pub fn profile() -> &'static Profile {
    &SAJ_SAMUEL
}
