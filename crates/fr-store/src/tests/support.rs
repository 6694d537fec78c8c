//! Fixtures for store tests.

use fr_core::{
    AvailabilityWorkflowInput, CertificationsInput, CoreRoleInput, DomainExperienceInput,
    EliteSkillCardsInput, IdentityVerificationInput, IndustryExperienceInput,
    LegalAgreementsInput, ProjectQuotingInput, RegistrationInput, SoftSkillsInput,
    ToolstackProficiencyInput, WhoYouAreInput, WorkAuthorizationInput,
};

use std::collections::HashMap;

pub fn sample_input() -> RegistrationInput {
    sample_input_named("Jane Doe", "jane@example.com")
}

/// Full intake payload with all optional arrays left empty.
pub fn sample_input_named(full_name: &str, email: &str) -> RegistrationInput {
    RegistrationInput {
        who_you_are: WhoYouAreInput {
            full_name: full_name.into(),
            email: email.into(),
            time_zone: "UTC".into(),
            country: "Germany".into(),
            professional_links: HashMap::new(),
        },
        core_role: CoreRoleInput {
            primary_domain: "Web Development".into(),
        },
        elite_skill_cards: EliteSkillCardsInput {
            selected_skills: Vec::new(),
        },
        toolstack_proficiency: ToolstackProficiencyInput {
            selected_tools: Vec::new(),
        },
        domain_experience: DomainExperienceInput { roles: Vec::new() },
        industry_experience: IndustryExperienceInput {
            selected_industries: Vec::new(),
        },
        availability_workflow: AvailabilityWorkflowInput {
            weekly_commitment: 20.0,
            working_hours: Vec::new(),
            collaboration_tools: Vec::new(),
            team_style: "async-first".into(),
            screen_sharing: "comfortable".into(),
            availability_exceptions: String::new(),
        },
        soft_skills: SoftSkillsInput {
            collaboration_style: "proactive".into(),
            communication_frequency: "daily".into(),
            conflict_resolution: "direct".into(),
            languages: Vec::new(),
            team_vs_solo: "team".into(),
        },
        certifications: CertificationsInput {
            certificates: Vec::new(),
        },
        project_quoting: ProjectQuotingInput {
            compensation_preference: "fixed".into(),
            small_project_price: 500.0,
            mid_project_price: 2500.0,
            long_term_price: 8000.0,
            milestone_terms: "net-30".into(),
            will_submit_proposals: "yes".into(),
        },
        legal_agreements: LegalAgreementsInput {
            agreements: Vec::new(),
            identity_verification: IdentityVerificationInput {
                id_type: "passport".into(),
                tax_doc_type: "w8ben".into(),
                address_verified: true,
            },
            work_authorization: WorkAuthorizationInput { interested: true },
        },
    }
}
