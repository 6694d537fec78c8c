//! Registration DTO for JSON serialization.
//!
//! The wire shape mirrors the intake payload: camelCase keys, ids as
//! strings, timestamps as RFC 3339.

use fr_core::{AgreementConsent, Certificate, DomainRole, Registration, ToolSelection};

use std::collections::HashMap;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDto {
    pub id: String,
    pub user_id: Option<String>,
    pub is_accepted: bool,
    pub trashed_at: Option<String>,
    pub trashed_by: Option<String>,
    pub who_you_are: WhoYouAreDto,
    pub core_role: CoreRoleDto,
    pub elite_skill_cards: EliteSkillCardsDto,
    pub toolstack_proficiency: ToolstackProficiencyDto,
    pub domain_experience: DomainExperienceDto,
    pub industry_experience: IndustryExperienceDto,
    pub availability_workflow: AvailabilityWorkflowDto,
    pub soft_skills: SoftSkillsDto,
    pub certifications: CertificationsDto,
    pub project_quoting: ProjectQuotingDto,
    pub legal_agreements: LegalAgreementsDto,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WhoYouAreDto {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub time_zone: String,
    pub country: String,
    pub professional_links: HashMap<String, String>,
    pub phone: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreRoleDto {
    pub id: String,
    pub primary_domain: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EliteSkillCardsDto {
    pub id: String,
    pub selected_skills: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolstackProficiencyDto {
    pub id: String,
    pub selected_tools: Vec<ToolSelection>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainExperienceDto {
    pub id: String,
    pub roles: Vec<DomainRole>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryExperienceDto {
    pub id: String,
    pub selected_industries: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityWorkflowDto {
    pub id: String,
    pub weekly_commitment: f64,
    pub working_hours: Vec<String>,
    pub collaboration_tools: Vec<String>,
    pub team_style: String,
    pub screen_sharing: String,
    pub availability_exceptions: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftSkillsDto {
    pub id: String,
    pub collaboration_style: String,
    pub communication_frequency: String,
    pub conflict_resolution: String,
    pub languages: Vec<String>,
    pub team_vs_solo: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationsDto {
    pub id: String,
    pub certificates: Vec<Certificate>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectQuotingDto {
    pub id: String,
    pub compensation_preference: String,
    pub small_project_price: f64,
    pub mid_project_price: f64,
    pub long_term_price: f64,
    pub milestone_terms: String,
    pub will_submit_proposals: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalAgreementsDto {
    pub id: String,
    pub agreements: Vec<AgreementConsent>,
    pub identity_verification: IdentityVerificationDto,
    pub work_authorization: WorkAuthorizationDto,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityVerificationDto {
    pub id: String,
    pub id_type: String,
    pub tax_doc_type: String,
    pub address_verified: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkAuthorizationDto {
    pub id: String,
    pub interested: bool,
}

impl From<Registration> for RegistrationDto {
    fn from(r: Registration) -> Self {
        Self {
            id: r.id.to_string(),
            user_id: r.user_id.map(|id| id.to_string()),
            is_accepted: r.is_accepted,
            trashed_at: r.trashed_at.map(|at| at.to_rfc3339()),
            trashed_by: r.trashed_by,
            who_you_are: WhoYouAreDto {
                id: r.who_you_are.id.to_string(),
                full_name: r.who_you_are.full_name,
                email: r.who_you_are.email,
                time_zone: r.who_you_are.time_zone,
                country: r.who_you_are.country,
                professional_links: r.who_you_are.professional_links,
                phone: r.who_you_are.phone,
            },
            core_role: CoreRoleDto {
                id: r.core_role.id.to_string(),
                primary_domain: r.core_role.primary_domain,
            },
            elite_skill_cards: EliteSkillCardsDto {
                id: r.elite_skill_cards.id.to_string(),
                selected_skills: r.elite_skill_cards.selected_skills,
            },
            toolstack_proficiency: ToolstackProficiencyDto {
                id: r.toolstack_proficiency.id.to_string(),
                selected_tools: r.toolstack_proficiency.selected_tools,
            },
            domain_experience: DomainExperienceDto {
                id: r.domain_experience.id.to_string(),
                roles: r.domain_experience.roles,
            },
            industry_experience: IndustryExperienceDto {
                id: r.industry_experience.id.to_string(),
                selected_industries: r.industry_experience.selected_industries,
            },
            availability_workflow: AvailabilityWorkflowDto {
                id: r.availability_workflow.id.to_string(),
                weekly_commitment: r.availability_workflow.weekly_commitment,
                working_hours: r.availability_workflow.working_hours,
                collaboration_tools: r.availability_workflow.collaboration_tools,
                team_style: r.availability_workflow.team_style,
                screen_sharing: r.availability_workflow.screen_sharing,
                availability_exceptions: r.availability_workflow.availability_exceptions,
            },
            soft_skills: SoftSkillsDto {
                id: r.soft_skills.id.to_string(),
                collaboration_style: r.soft_skills.collaboration_style,
                communication_frequency: r.soft_skills.communication_frequency,
                conflict_resolution: r.soft_skills.conflict_resolution,
                languages: r.soft_skills.languages,
                team_vs_solo: r.soft_skills.team_vs_solo,
            },
            certifications: CertificationsDto {
                id: r.certifications.id.to_string(),
                certificates: r.certifications.certificates,
            },
            project_quoting: ProjectQuotingDto {
                id: r.project_quoting.id.to_string(),
                compensation_preference: r.project_quoting.compensation_preference,
                small_project_price: r.project_quoting.small_project_price,
                mid_project_price: r.project_quoting.mid_project_price,
                long_term_price: r.project_quoting.long_term_price,
                milestone_terms: r.project_quoting.milestone_terms,
                will_submit_proposals: r.project_quoting.will_submit_proposals,
            },
            legal_agreements: LegalAgreementsDto {
                id: r.legal_agreements.id.to_string(),
                agreements: r.legal_agreements.agreements,
                identity_verification: IdentityVerificationDto {
                    id: r.legal_agreements.identity_verification.id.to_string(),
                    id_type: r.legal_agreements.identity_verification.id_type,
                    tax_doc_type: r.legal_agreements.identity_verification.tax_doc_type,
                    address_verified: r.legal_agreements.identity_verification.address_verified,
                },
                work_authorization: WorkAuthorizationDto {
                    id: r.legal_agreements.work_authorization.id.to_string(),
                    interested: r.legal_agreements.work_authorization.interested,
                },
            },
        }
    }
}
