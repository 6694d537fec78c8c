use crate::IdGenerator;
use crate::models::input::IndustryExperienceInput;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryExperience {
    pub id: Uuid,
    pub selected_industries: Vec<String>,
}

impl IndustryExperience {
    pub fn from_input(input: IndustryExperienceInput, ids: &dyn IdGenerator) -> Self {
        Self {
            id: ids.generate(),
            selected_industries: input.selected_industries,
        }
    }
}
