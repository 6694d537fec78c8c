//! Identity group of a registration.

use crate::IdGenerator;
use crate::models::input::WhoYouAreInput;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhoYouAre {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub time_zone: String,
    pub country: String,
    pub professional_links: HashMap<String, String>,
    /// Collected later in the flow; always absent at creation.
    pub phone: Option<String>,
}

impl WhoYouAre {
    pub fn from_input(input: WhoYouAreInput, ids: &dyn IdGenerator) -> Self {
        Self {
            id: ids.generate(),
            full_name: input.full_name,
            email: input.email,
            time_zone: input.time_zone,
            country: input.country,
            professional_links: input.professional_links,
            phone: None,
        }
    }
}
