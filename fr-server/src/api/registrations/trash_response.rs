use serde::Serialize;

/// Response for trash and untrash operations. `trashed` reflects the state
/// after the call.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrashResponse {
    pub id: String,
    pub trashed: bool,
}
