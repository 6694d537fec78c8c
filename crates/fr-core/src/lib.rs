pub mod export;
pub mod id;
pub mod models;
pub mod username;

#[cfg(test)]
mod tests;

pub use export::export_record;
pub use id::{IdGenerator, RandomIdGenerator};
pub use models::availability_workflow::AvailabilityWorkflow;
pub use models::certifications::{Certificate, Certifications};
pub use models::core_role::CoreRole;
pub use models::credentials::AcceptedCredentials;
pub use models::domain_experience::{DomainExperience, DomainRole};
pub use models::elite_skill_cards::EliteSkillCards;
pub use models::industry_experience::IndustryExperience;
pub use models::input::{
    AvailabilityWorkflowInput, CertificationsInput, CoreRoleInput, DomainExperienceInput,
    EliteSkillCardsInput, IdentityVerificationInput, IndustryExperienceInput, LegalAgreementsInput,
    ProjectQuotingInput, RegistrationInput, SoftSkillsInput, ToolstackProficiencyInput,
    WhoYouAreInput, WorkAuthorizationInput,
};
pub use models::legal_agreements::{
    AgreementConsent, IdentityVerification, LegalAgreements, WorkAuthorization,
};
pub use models::project_quoting::ProjectQuoting;
pub use models::registration::Registration;
pub use models::soft_skills::SoftSkills;
pub use models::toolstack_proficiency::{ToolSelection, ToolstackProficiency};
pub use models::who_you_are::WhoYouAre;
pub use username::derive_username;
