use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entity::episode;

/// Response DTO for a single episode record.
///
/// The `_id` and `filePath` names are the original wire contract; everything
/// else follows the same camelCase form.
#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeResponse {
    /// Episode record ID (UUIDv7).
    #[serde(rename = "_id")]
    #[schema(example = "01936f0e-1234-7abc-8000-000000000001")]
    pub id: String,
    /// Episode title; empty when the upload omitted it.
    #[schema(example = "Ep1")]
    pub title: String,
    /// Episode description; empty when the upload omitted it.
    pub description: String,
    /// Server-relative path to the stored audio file.
    #[schema(example = "/uploads/01936f0e-1234-7abc-8000-000000000001.mp3")]
    pub file_path: String,
    pub created_at: DateTime<Utc>,
}

impl From<episode::Model> for EpisodeResponse {
    fn from(model: episode::Model) -> Self {
        Self {
            id: model.id.to_string(),
            title: model.title,
            description: model.description,
            file_path: model.file_path,
            created_at: model.created_at,
        }
    }
}
