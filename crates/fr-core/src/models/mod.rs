pub mod availability_workflow;
pub mod certifications;
pub mod core_role;
pub mod credentials;
pub mod domain_experience;
pub mod elite_skill_cards;
pub mod industry_experience;
pub mod input;
pub mod legal_agreements;
pub mod project_quoting;
pub mod registration;
pub mod soft_skills;
pub mod toolstack_proficiency;
pub mod who_you_are;
