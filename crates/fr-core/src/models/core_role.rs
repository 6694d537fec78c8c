use crate::IdGenerator;
use crate::models::input::CoreRoleInput;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreRole {
    pub id: Uuid,
    pub primary_domain: String,
}

impl CoreRole {
    pub fn from_input(input: CoreRoleInput, ids: &dyn IdGenerator) -> Self {
        Self {
            id: ids.generate(),
            primary_domain: input.primary_domain,
        }
    }
}
