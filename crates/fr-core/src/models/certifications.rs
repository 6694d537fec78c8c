use crate::IdGenerator;
use crate::models::input::CertificationsInput;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certifications {
    pub id: Uuid,
    pub certificates: Vec<Certificate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    pub name: String,
    pub url: String,
}

impl Certifications {
    pub fn from_input(input: CertificationsInput, ids: &dyn IdGenerator) -> Self {
        Self {
            id: ids.generate(),
            certificates: input.certificates,
        }
    }
}
