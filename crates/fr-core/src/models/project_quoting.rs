//! Compensation and quoting preferences.

use crate::IdGenerator;
use crate::models::input::ProjectQuotingInput;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectQuoting {
    pub id: Uuid,
    pub compensation_preference: String,
    pub small_project_price: f64,
    pub mid_project_price: f64,
    pub long_term_price: f64,
    pub milestone_terms: String,
    pub will_submit_proposals: String,
}

impl ProjectQuoting {
    pub fn from_input(input: ProjectQuotingInput, ids: &dyn IdGenerator) -> Self {
        Self {
            id: ids.generate(),
            compensation_preference: input.compensation_preference,
            small_project_price: input.small_project_price,
            mid_project_price: input.mid_project_price,
            long_term_price: input.long_term_price,
            milestone_terms: input.milestone_terms,
            will_submit_proposals: input.will_submit_proposals,
        }
    }
}
