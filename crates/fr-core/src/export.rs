//! Flattening a registration into the key-value record the document/export
//! utility consumes. Rendering itself is the collaborator's job; this module
//! only decides which fields appear and how lists are joined.

use crate::Registration;

/// Flatten a registration into ordered key-value pairs for export.
pub fn export_record(reg: &Registration) -> Vec<(String, String)> {
    let mut record: Vec<(String, String)> = Vec::new();

    let mut push = |key: &str, value: String| record.push((key.to_string(), value));

    push("Full Name", reg.who_you_are.full_name.clone());
    push("Email", reg.who_you_are.email.clone());
    push("Country", reg.who_you_are.country.clone());
    push("Time Zone", reg.who_you_are.time_zone.clone());
    push("Primary Domain", reg.core_role.primary_domain.clone());
    push("Skills", reg.elite_skill_cards.selected_skills.join(", "));

    let tools = reg
        .toolstack_proficiency
        .selected_tools
        .iter()
        .map(|sel| format!("{}: {}", sel.category, sel.tools.join(", ")))
        .collect::<Vec<_>>()
        .join("; ");
    push("Toolstack", tools);

    let roles = reg
        .domain_experience
        .roles
        .iter()
        .map(|role| format!("{} ({} yrs)", role.title, role.years))
        .collect::<Vec<_>>()
        .join("; ");
    push("Experience", roles);

    push(
        "Industries",
        reg.industry_experience.selected_industries.join(", "),
    );
    push(
        "Weekly Commitment",
        format!("{} hrs", reg.availability_workflow.weekly_commitment),
    );
    push(
        "Working Hours",
        reg.availability_workflow.working_hours.join(", "),
    );
    push("Team Style", reg.availability_workflow.team_style.clone());
    push("Languages", reg.soft_skills.languages.join(", "));

    let certificates = reg
        .certifications
        .certificates
        .iter()
        .map(|cert| format!("{} <{}>", cert.name, cert.url))
        .collect::<Vec<_>>()
        .join("; ");
    push("Certifications", certificates);

    push(
        "Compensation Preference",
        reg.project_quoting.compensation_preference.clone(),
    );
    push(
        "Small Project Price",
        format!("${}", reg.project_quoting.small_project_price),
    );
    push(
        "Mid Project Price",
        format!("${}", reg.project_quoting.mid_project_price),
    );
    push(
        "Long Term Price",
        format!("${}", reg.project_quoting.long_term_price),
    );
    push(
        "Milestone Terms",
        reg.project_quoting.milestone_terms.clone(),
    );

    record
}
