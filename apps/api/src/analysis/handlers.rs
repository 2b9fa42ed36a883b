//! Axum route handlers for the Resume Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;
use uuid::Uuid;

use crate::analysis::{analyze_resume, AnalysisResult};
use crate::errors::AppError;
use crate::state::AppState;

/// Upload policy. The pipeline itself only understands txt/pdf/docx; `.doc`
/// is accepted at the boundary and rejected by the reader with an
/// unsupported-format error, matching the historical behavior.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const ALLOWED_UPLOAD_EXTENSIONS: &[&str] = &["pdf", "docx", "txt", "doc"];

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub report_id: Uuid,
    pub filename: String,
    pub analyzed_at: DateTime<Utc>,
    pub report: AnalysisResult,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/analyze
///
/// Accepts a multipart upload with a `resume` file field, stages it in a
/// temp file and runs the analysis pipeline. A degraded model still yields a
/// 200 with fallback scores; only an unreadable or unsupported document (or
/// a policy violation) is an error.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut upload: Option<(String, bytes::Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        if field.name() != Some("resume") {
            continue;
        }
        let filename = field.file_name().unwrap_or("resume").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        upload = Some((filename, data));
        break;
    }

    let (filename, data) =
        upload.ok_or_else(|| AppError::Validation("No resume file provided".to_string()))?;

    if data.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::Validation(
            "File size exceeds maximum limit of 10MB".to_string(),
        ));
    }

    let extension = std::path::Path::new(&filename)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_lowercase();

    if !ALLOWED_UPLOAD_EXTENSIONS.contains(&extension.as_str()) {
        return Err(AppError::Validation(format!(
            "Invalid file type. Allowed types: {}",
            ALLOWED_UPLOAD_EXTENSIONS
                .iter()
                .map(|e| format!(".{e}"))
                .collect::<Vec<_>>()
                .join(", ")
        )));
    }

    // The reader dispatches on extension, so the staged file must carry it.
    let mut staged = tempfile::Builder::new()
        .suffix(&format!(".{extension}"))
        .tempfile()
        .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to stage upload: {e}")))?;
    staged
        .write_all(&data)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to stage upload: {e}")))?;

    let report = analyze_resume(staged.path(), &state.template, state.invoker.as_ref()).await?;

    Ok(Json(AnalyzeResponse {
        report_id: Uuid::new_v4(),
        filename,
        analyzed_at: Utc::now(),
        report,
    }))
}
