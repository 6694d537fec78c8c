//! Shared fixtures for fr-core tests.

use crate::{
    AgreementConsent, AvailabilityWorkflowInput, Certificate, CertificationsInput, CoreRoleInput,
    DomainExperienceInput, DomainRole, EliteSkillCardsInput, IdGenerator,
    IdentityVerificationInput, IndustryExperienceInput, LegalAgreementsInput, ProjectQuotingInput,
    RegistrationInput, SoftSkillsInput, ToolSelection, ToolstackProficiencyInput, WhoYouAreInput,
    WorkAuthorizationInput,
};

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Deterministic id source: 1, 2, 3, ... as UUIDs.
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl IdGenerator for SequentialIds {
    fn generate(&self) -> Uuid {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        Uuid::from_u128(n as u128)
    }
}

pub fn sample_input() -> RegistrationInput {
    RegistrationInput {
        who_you_are: WhoYouAreInput {
            full_name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            time_zone: "UTC+01:00".into(),
            country: "Germany".into(),
            professional_links: HashMap::from([(
                "github".to_string(),
                "https://github.com/janedoe".to_string(),
            )]),
        },
        core_role: CoreRoleInput {
            primary_domain: "Web Development".into(),
        },
        elite_skill_cards: EliteSkillCardsInput {
            selected_skills: vec!["Rust".into(), "TypeScript".into()],
        },
        toolstack_proficiency: ToolstackProficiencyInput {
            selected_tools: vec![ToolSelection {
                category: "Backend".into(),
                tools: vec!["Axum".into(), "PostgreSQL".into()],
            }],
        },
        domain_experience: DomainExperienceInput {
            roles: vec![DomainRole {
                title: "Backend Engineer".into(),
                years: 5.0,
            }],
        },
        industry_experience: IndustryExperienceInput {
            selected_industries: vec!["E-commerce".into()],
        },
        availability_workflow: AvailabilityWorkflowInput {
            weekly_commitment: 30.0,
            working_hours: vec!["09:00-17:00".into()],
            collaboration_tools: vec!["Slack".into()],
            team_style: "async-first".into(),
            screen_sharing: "comfortable".into(),
            availability_exceptions: String::new(),
        },
        soft_skills: SoftSkillsInput {
            collaboration_style: "proactive".into(),
            communication_frequency: "daily".into(),
            conflict_resolution: "direct".into(),
            languages: vec!["English".into(), "German".into()],
            team_vs_solo: "team".into(),
        },
        certifications: CertificationsInput {
            certificates: vec![Certificate {
                name: "AWS Solutions Architect".into(),
                url: "https://example.com/cert/123".into(),
            }],
        },
        project_quoting: ProjectQuotingInput {
            compensation_preference: "fixed".into(),
            small_project_price: 500.0,
            mid_project_price: 2500.0,
            long_term_price: 8000.0,
            milestone_terms: "50% upfront, 50% on delivery".into(),
            will_submit_proposals: "yes".into(),
        },
        legal_agreements: LegalAgreementsInput {
            agreements: vec![AgreementConsent {
                id: "nda".into(),
                accepted: true,
            }],
            identity_verification: IdentityVerificationInput {
                id_type: "passport".into(),
                tax_doc_type: "w8ben".into(),
                address_verified: true,
            },
            work_authorization: WorkAuthorizationInput { interested: true },
        },
    }
}
