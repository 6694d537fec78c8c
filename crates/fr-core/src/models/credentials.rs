use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity granted when a registration is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcceptedCredentials {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
}
