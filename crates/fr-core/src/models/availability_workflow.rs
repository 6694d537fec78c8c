//! Availability and collaboration preferences.

use crate::IdGenerator;
use crate::models::input::AvailabilityWorkflowInput;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityWorkflow {
    pub id: Uuid,
    /// Hours per week the freelancer commits to.
    pub weekly_commitment: f64,
    pub working_hours: Vec<String>,
    pub collaboration_tools: Vec<String>,
    pub team_style: String,
    pub screen_sharing: String,
    pub availability_exceptions: String,
}

impl AvailabilityWorkflow {
    pub fn from_input(input: AvailabilityWorkflowInput, ids: &dyn IdGenerator) -> Self {
        Self {
            id: ids.generate(),
            weekly_commitment: input.weekly_commitment,
            working_hours: input.working_hours,
            collaboration_tools: input.collaboration_tools,
            team_style: input.team_style,
            screen_sharing: input.screen_sharing,
            availability_exceptions: input.availability_exceptions,
        }
    }
}
