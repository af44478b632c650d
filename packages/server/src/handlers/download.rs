use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::Response;
use common::storage::BlobName;
use tokio_util::io::ReaderStream;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/download/{filename}",
    tag = "Episodes",
    operation_id = "downloadEpisode",
    summary = "Download a stored episode file",
    description = "Streams a stored audio file as an attachment. The filename is the last segment \
        of a record's `filePath`. Resolution is restricted to the uploads directory; names with \
        path separators or traversal sequences are rejected.",
    params(("filename" = String, Path, description = "Stored filename from a record's filePath")),
    responses(
        (status = 200, description = "File content"),
        (status = 400, description = "Invalid filename (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "File not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn download_episode(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, AppError> {
    // Rejects anything that could escape the uploads directory.
    let name = BlobName::parse(&filename)?;

    let size = state.blob_store.size(&name).await?;
    let reader = state.blob_store.get_stream(&name).await?;
    let stream = ReaderStream::new(reader);
    let body = Body::from_stream(stream);

    let content_type = mime_guess::from_path(name.as_str()).first_or_octet_stream();

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type.as_ref())
        .header(header::CONTENT_LENGTH, size.to_string())
        .header(
            header::CONTENT_DISPOSITION,
            content_disposition_value(name.as_str()),
        )
        .body(body)
        .map_err(|e| AppError::Internal(format!("Failed to build response: {e}")))?;

    Ok(response)
}

/// Build a safe `Content-Disposition` header value.
fn content_disposition_value(filename: &str) -> String {
    let ascii_safe: String = filename
        .chars()
        .filter(|c| c.is_ascii_graphic() && !matches!(c, '"' | ';' | '\\'))
        .collect();
    let ascii_name = if ascii_safe.is_empty() {
        "download".to_string()
    } else {
        ascii_safe
    };

    format!("attachment; filename=\"{ascii_name}\"")
}
