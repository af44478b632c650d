use axum::Json;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use sea_orm::{EntityTrait, QueryOrder, Set};
use tracing::instrument;
use uuid::Uuid;

use crate::entity::episode;
use crate::error::{AppError, ErrorBody};
use crate::models::episode::EpisodeResponse;
use crate::state::AppState;

pub fn upload_body_limit() -> DefaultBodyLimit {
    DefaultBodyLimit::max(512 * 1024 * 1024) // 512 MB
}

#[utoipa::path(
    post,
    path = "/upload",
    tag = "Episodes",
    operation_id = "uploadEpisode",
    summary = "Upload a podcast episode",
    description = "Uploads an episode audio file with its metadata. The `audio` multipart field is \
        required and must be non-empty; `title` and `description` are optional text fields that \
        default to empty strings. The file is written to the uploads directory under a generated \
        name before the metadata record is inserted.",
    request_body(content_type = "multipart/form-data", description = "Audio file with metadata fields"),
    responses(
        (status = 200, description = "Episode stored", body = String),
        (status = 400, description = "Missing or empty file, or oversized payload (VALIDATION_ERROR)", body = ErrorBody),
        (status = 500, description = "Blob write or metadata insert failed (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, multipart))]
pub async fn upload_episode(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut audio: Option<(Vec<u8>, Option<String>)> = None;
    let mut title = String::new();
    let mut description = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Multipart error: {e}")))?
    {
        match field.name() {
            Some("audio") => {
                let file_name = field.file_name().map(|s| s.to_string());
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Upload read error: {e}")))?;
                audio = Some((data.to_vec(), file_name));
            }
            Some("title") => {
                title = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read title: {e}")))?;
            }
            Some("description") => {
                description = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read description: {e}"))
                })?;
            }
            _ => {} // Ignore unknown fields.
        }
    }

    // An empty payload counts as no file; nothing may be written in that case.
    let (data, file_name) = audio.ok_or_else(|| AppError::Validation("No file uploaded.".into()))?;
    if data.is_empty() {
        return Err(AppError::Validation("No file uploaded.".into()));
    }

    let stored = state
        .blob_store
        .put(&data, file_name.as_deref().unwrap_or(""))
        .await?;

    let inserted = insert_episode(
        &state.db,
        title,
        description,
        format!("/uploads/{stored}"),
    )
    .await?;

    tracing::info!(episode_id = %inserted.id, file_path = %inserted.file_path, "episode uploaded");

    Ok((StatusCode::OK, "Episode uploaded successfully."))
}

#[utoipa::path(
    get,
    path = "/episodes",
    tag = "Episodes",
    operation_id = "listEpisodes",
    summary = "List all episodes",
    description = "Returns every stored episode record, oldest first.",
    responses(
        (status = 200, description = "All episode records", body = [EpisodeResponse]),
        (status = 500, description = "Persistence failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn list_episodes(
    State(state): State<AppState>,
) -> Result<Json<Vec<EpisodeResponse>>, AppError> {
    let episodes = episode::Entity::find()
        .order_by_asc(episode::Column::CreatedAt)
        .all(&state.db)
        .await?;

    Ok(Json(
        episodes.into_iter().map(EpisodeResponse::from).collect(),
    ))
}

/// Insert a new episode record with a generated UUIDv7 id.
async fn insert_episode<C: sea_orm::ConnectionTrait>(
    db: &C,
    title: String,
    description: String,
    file_path: String,
) -> Result<episode::Model, AppError> {
    let model = episode::ActiveModel {
        id: Set(Uuid::now_v7()),
        title: Set(title),
        description: Set(description),
        file_path: Set(file_path),
        created_at: Set(Utc::now()),
    };

    Ok(episode::Entity::insert(model).exec_with_returning(db).await?)
}
