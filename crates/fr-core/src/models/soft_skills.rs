use crate::IdGenerator;
use crate::models::input::SoftSkillsInput;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoftSkills {
    pub id: Uuid,
    pub collaboration_style: String,
    pub communication_frequency: String,
    pub conflict_resolution: String,
    pub languages: Vec<String>,
    pub team_vs_solo: String,
}

impl SoftSkills {
    pub fn from_input(input: SoftSkillsInput, ids: &dyn IdGenerator) -> Self {
        Self {
            id: ids.generate(),
            collaboration_style: input.collaboration_style,
            communication_frequency: input.communication_frequency,
            conflict_resolution: input.conflict_resolution,
            languages: input.languages,
            team_vs_solo: input.team_vs_solo,
        }
    }
}
