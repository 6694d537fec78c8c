use crate::RegistrationDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RegistrationResponse {
    pub registration: RegistrationDto,
}
