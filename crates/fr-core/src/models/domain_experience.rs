use crate::IdGenerator;
use crate::models::input::DomainExperienceInput;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainExperience {
    pub id: Uuid,
    pub roles: Vec<DomainRole>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainRole {
    pub title: String,
    pub years: f64,
}

impl DomainExperience {
    pub fn from_input(input: DomainExperienceInput, ids: &dyn IdGenerator) -> Self {
        Self {
            id: ids.generate(),
            roles: input.roles,
        }
    }
}
