//! Registration entity - a freelancer's full application record.

use crate::models::availability_workflow::AvailabilityWorkflow;
use crate::models::certifications::Certifications;
use crate::models::core_role::CoreRole;
use crate::models::domain_experience::DomainExperience;
use crate::models::elite_skill_cards::EliteSkillCards;
use crate::models::industry_experience::IndustryExperience;
use crate::models::input::RegistrationInput;
use crate::models::legal_agreements::LegalAgreements;
use crate::models::project_quoting::ProjectQuoting;
use crate::models::soft_skills::SoftSkills;
use crate::models::toolstack_proficiency::ToolstackProficiency;
use crate::models::who_you_are::WhoYouAre;

use crate::IdGenerator;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registration is created in full from one intake payload and afterwards
/// only mutated by accept, trash and untrash.
///
/// `trashed_at` and `trashed_by` are a pair: both `None` or both `Some`.
/// `is_accepted` implies `user_id` is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub id: Uuid,
    /// Granted on acceptance; absent until then.
    pub user_id: Option<Uuid>,
    pub is_accepted: bool,
    pub trashed_at: Option<DateTime<Utc>>,
    pub trashed_by: Option<String>,
    pub who_you_are: WhoYouAre,
    pub core_role: CoreRole,
    pub elite_skill_cards: EliteSkillCards,
    pub toolstack_proficiency: ToolstackProficiency,
    pub domain_experience: DomainExperience,
    pub industry_experience: IndustryExperience,
    pub availability_workflow: AvailabilityWorkflow,
    pub soft_skills: SoftSkills,
    pub certifications: Certifications,
    pub project_quoting: ProjectQuoting,
    pub legal_agreements: LegalAgreements,
}

impl Registration {
    /// Build a complete registration from the intake payload.
    ///
    /// Every identified part (the record itself, the nine groups, and the
    /// two nested legal records) gets a fresh id from `ids`. Input fields
    /// are taken verbatim.
    pub fn from_input(input: RegistrationInput, ids: &dyn IdGenerator) -> Self {
        Self {
            id: ids.generate(),
            user_id: None,
            is_accepted: false,
            trashed_at: None,
            trashed_by: None,
            who_you_are: WhoYouAre::from_input(input.who_you_are, ids),
            core_role: CoreRole::from_input(input.core_role, ids),
            elite_skill_cards: EliteSkillCards::from_input(input.elite_skill_cards, ids),
            toolstack_proficiency: ToolstackProficiency::from_input(
                input.toolstack_proficiency,
                ids,
            ),
            domain_experience: DomainExperience::from_input(input.domain_experience, ids),
            industry_experience: IndustryExperience::from_input(input.industry_experience, ids),
            availability_workflow: AvailabilityWorkflow::from_input(
                input.availability_workflow,
                ids,
            ),
            soft_skills: SoftSkills::from_input(input.soft_skills, ids),
            certifications: Certifications::from_input(input.certifications, ids),
            project_quoting: ProjectQuoting::from_input(input.project_quoting, ids),
            legal_agreements: LegalAgreements::from_input(input.legal_agreements, ids),
        }
    }

    /// Check if the registration is soft-deleted.
    pub fn is_trashed(&self) -> bool {
        self.trashed_at.is_some()
    }

    /// Ids of every identified part: the record itself, the nine groups,
    /// and the two nested legal records.
    pub fn all_ids(&self) -> Vec<Uuid> {
        vec![
            self.id,
            self.who_you_are.id,
            self.core_role.id,
            self.elite_skill_cards.id,
            self.toolstack_proficiency.id,
            self.domain_experience.id,
            self.industry_experience.id,
            self.availability_workflow.id,
            self.soft_skills.id,
            self.certifications.id,
            self.project_quoting.id,
            self.legal_agreements.id,
            self.legal_agreements.identity_verification.id,
            self.legal_agreements.work_authorization.id,
        ]
    }
}
