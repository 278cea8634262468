//! Axum route handlers for the Extraction API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extraction::ExtractedData;
use crate::extraction::text::MediaType;
use crate::state::AppState;

/// Multipart field carrying the uploaded document.
const FILE_FIELD: &str = "file";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExtractTextRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub media_type: String,
    pub text_length: usize,
    pub extracted_at: DateTime<Utc>,
    pub extracted_data: ExtractedData,
}

/// A validated upload, ready for decoding.
#[derive(Debug)]
struct Upload {
    bytes: Bytes,
    media_type: MediaType,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/extract
///
/// Accepts a multipart upload (field `file`) of a PDF, DOC or DOCX résumé and
/// returns the structured data extracted from it.
pub async fn handle_extract_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ExtractResponse>, AppError> {
    let limit = state.config.max_upload_bytes;
    let upload = read_upload(multipart, limit).await?;
    let media_type = upload.media_type;
    let size = upload.bytes.len();

    // Decoding is CPU-bound — spawn_blocking to avoid blocking the async executor.
    let extractor = state.extractor.clone();
    let extraction =
        tokio::task::spawn_blocking(move || extractor.extract(&upload.bytes, upload.media_type.mime()))
            .await
            .map_err(|e| {
                warn!("Extraction task for {media_type} upload failed: {e}");
                AppError::DecodeFailure("document decoder aborted".to_string())
            })??;

    info!(
        "Extracted {} upload ({} bytes, {} chars of text)",
        media_type,
        size,
        extraction.text.len()
    );

    Ok(Json(ExtractResponse {
        media_type: media_type.mime().to_string(),
        text_length: extraction.text.chars().count(),
        extracted_at: Utc::now(),
        extracted_data: extraction.data,
    }))
}

/// POST /api/v1/resumes/extract-text
///
/// Runs extraction on already-decoded text. Never fails on content: text with
/// nothing recognisable yields empty fields.
pub async fn handle_extract_text(
    State(state): State<AppState>,
    Json(request): Json<ExtractTextRequest>,
) -> Result<Json<ExtractedData>, AppError> {
    let extractor = state.extractor.clone();
    let data = tokio::task::spawn_blocking(move || extractor.extract_data_from_text(&request.text))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in extraction: {e}")))?;
    Ok(Json(data))
}

// ────────────────────────────────────────────────────────────────────────────
// Upload validation
// ────────────────────────────────────────────────────────────────────────────

async fn read_upload(mut multipart: Multipart, limit: usize) -> Result<Upload, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, limit))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let content_type = field.content_type().map(str::to_string);
        let file_name = field.file_name().map(str::to_string);
        let bytes = field.bytes().await.map_err(|e| multipart_error(e, limit))?;

        if bytes.is_empty() {
            return Err(AppError::Validation("Uploaded file is empty".to_string()));
        }
        if bytes.len() > limit {
            return Err(AppError::PayloadTooLarge { limit });
        }

        let media_type = resolve_media_type(content_type.as_deref(), file_name.as_deref())?;
        return Ok(Upload { bytes, media_type });
    }

    Err(AppError::Validation(format!(
        "Multipart field '{FILE_FIELD}' is required"
    )))
}

/// Prefers the declared content type; falls back to the file extension when
/// the client sent a generic or unsupported type.
fn resolve_media_type(
    content_type: Option<&str>,
    file_name: Option<&str>,
) -> Result<MediaType, AppError> {
    let declared = content_type.map(MediaType::from_mime);
    if let Some(Ok(media_type)) = &declared {
        return Ok(*media_type);
    }
    if let Some(media_type) = file_name.and_then(MediaType::from_filename) {
        return Ok(media_type);
    }
    match declared {
        Some(Err(e)) => Err(e.into()),
        _ => Err(AppError::UnsupportedMediaType(
            file_name.unwrap_or("unknown").to_string(),
        )),
    }
}

fn multipart_error(e: MultipartError, limit: usize) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge { limit }
    } else {
        AppError::Validation(format!("Invalid multipart body: {}", e.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::text::{OPEN_XML_WORD_MIME, PDF_MIME};

    #[test]
    fn test_resolve_declared_content_type() {
        let mt = resolve_media_type(Some(PDF_MIME), Some("cv.docx")).unwrap();
        assert_eq!(mt, MediaType::Pdf);
    }

    #[test]
    fn test_resolve_falls_back_to_extension() {
        let mt = resolve_media_type(Some("application/octet-stream"), Some("cv.docx")).unwrap();
        assert_eq!(mt, MediaType::OpenXmlWord);
        let mt = resolve_media_type(None, Some("cv.doc")).unwrap();
        assert_eq!(mt, MediaType::LegacyWord);
    }

    #[test]
    fn test_resolve_unsupported_reports_declared_type() {
        let err = resolve_media_type(Some("image/png"), Some("photo.png")).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedMediaType(ref m) if m == "image/png"));
    }

    #[test]
    fn test_resolve_unsupported_without_content_type() {
        let err = resolve_media_type(None, Some("notes.txt")).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedMediaType(ref m) if m == "notes.txt"));
    }

    #[test]
    fn test_extract_response_serializes_mime() {
        let response = ExtractResponse {
            media_type: OPEN_XML_WORD_MIME.to_string(),
            text_length: 0,
            extracted_at: Utc::now(),
            extracted_data: ExtractedData::default(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["media_type"], OPEN_XML_WORD_MIME);
        assert_eq!(json["extracted_data"]["skills"], serde_json::json!([]));
    }
}
