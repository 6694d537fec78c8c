use crate::IdGenerator;
use crate::models::input::EliteSkillCardsInput;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EliteSkillCards {
    pub id: Uuid,
    pub selected_skills: Vec<String>,
}

impl EliteSkillCards {
    pub fn from_input(input: EliteSkillCardsInput, ids: &dyn IdGenerator) -> Self {
        Self {
            id: ids.generate(),
            selected_skills: input.selected_skills,
        }
    }
}
