use fr_core::AcceptedCredentials;

use serde::Serialize;

/// Identity granted by accepting a registration.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptResponse {
    pub user_id: String,
    pub username: String,
    pub email: String,
}

impl From<AcceptedCredentials> for AcceptResponse {
    fn from(creds: AcceptedCredentials) -> Self {
        Self {
            user_id: creds.user_id.to_string(),
            username: creds.username,
            email: creds.email,
        }
    }
}
