use crate::IdGenerator;
use crate::models::input::ToolstackProficiencyInput;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolstackProficiency {
    pub id: Uuid,
    pub selected_tools: Vec<ToolSelection>,
}

/// One tool category with the tools picked inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSelection {
    pub category: String,
    #[serde(default)]
    pub tools: Vec<String>,
}

impl ToolstackProficiency {
    pub fn from_input(input: ToolstackProficiencyInput, ids: &dyn IdGenerator) -> Self {
        Self {
            id: ids.generate(),
            selected_tools: input.selected_tools,
        }
    }
}
