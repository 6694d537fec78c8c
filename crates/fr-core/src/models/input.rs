//! Creation payload for a registration.
//!
//! This is the wire shape the intake form submits: one nested object with a
//! group per wizard step. Array and map fields default to empty when absent;
//! required scalar fields are taken as given. No validation happens at this
//! layer — presence checking is the caller's responsibility.

use crate::models::certifications::Certificate;
use crate::models::domain_experience::DomainRole;
use crate::models::legal_agreements::AgreementConsent;
use crate::models::toolstack_proficiency::ToolSelection;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationInput {
    pub who_you_are: WhoYouAreInput,
    pub core_role: CoreRoleInput,
    pub elite_skill_cards: EliteSkillCardsInput,
    pub toolstack_proficiency: ToolstackProficiencyInput,
    pub domain_experience: DomainExperienceInput,
    pub industry_experience: IndustryExperienceInput,
    pub availability_workflow: AvailabilityWorkflowInput,
    pub soft_skills: SoftSkillsInput,
    pub certifications: CertificationsInput,
    pub project_quoting: ProjectQuotingInput,
    pub legal_agreements: LegalAgreementsInput,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhoYouAreInput {
    pub full_name: String,
    pub email: String,
    pub time_zone: String,
    pub country: String,
    #[serde(default)]
    pub professional_links: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreRoleInput {
    pub primary_domain: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EliteSkillCardsInput {
    #[serde(default)]
    pub selected_skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolstackProficiencyInput {
    #[serde(default)]
    pub selected_tools: Vec<ToolSelection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainExperienceInput {
    #[serde(default)]
    pub roles: Vec<DomainRole>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryExperienceInput {
    #[serde(default)]
    pub selected_industries: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityWorkflowInput {
    pub weekly_commitment: f64,
    #[serde(default)]
    pub working_hours: Vec<String>,
    #[serde(default)]
    pub collaboration_tools: Vec<String>,
    pub team_style: String,
    pub screen_sharing: String,
    #[serde(default)]
    pub availability_exceptions: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftSkillsInput {
    pub collaboration_style: String,
    pub communication_frequency: String,
    pub conflict_resolution: String,
    #[serde(default)]
    pub languages: Vec<String>,
    pub team_vs_solo: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationsInput {
    #[serde(default)]
    pub certificates: Vec<Certificate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectQuotingInput {
    pub compensation_preference: String,
    pub small_project_price: f64,
    pub mid_project_price: f64,
    pub long_term_price: f64,
    pub milestone_terms: String,
    pub will_submit_proposals: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalAgreementsInput {
    #[serde(default)]
    pub agreements: Vec<AgreementConsent>,
    pub identity_verification: IdentityVerificationInput,
    pub work_authorization: WorkAuthorizationInput,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityVerificationInput {
    pub id_type: String,
    pub tax_doc_type: String,
    pub address_verified: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkAuthorizationInput {
    pub interested: bool,
}
