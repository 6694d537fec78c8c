use serde::Serialize;

/// Response for delete operations
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub deleted_id: String,
}
