use crate::RegistrationDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RegistrationListResponse {
    pub registrations: Vec<RegistrationDto>,
}
