//! Axum route handlers for the Resume API.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::render::text::{export_filename, render_plain_text};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub raw_text: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub generation_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub resume: Resume,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/generate
///
/// Turns free text into a structured resume. Blank input is refused before the
/// generator runs.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    if request.raw_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Please enter your information to generate a resume.".to_string(),
        ));
    }

    let max_chars = state.config.max_input_chars;
    if request.raw_text.chars().count() > max_chars {
        return Err(AppError::Validation(format!(
            "raw_text exceeds the {max_chars} character limit"
        )));
    }

    let generation_id = Uuid::new_v4();
    info!("Generating resume {generation_id}");
    let resume = state.generator.generate(&request.raw_text).await?;

    Ok(Json(GenerateResponse {
        generation_id,
        generated_at: Utc::now(),
        resume,
    }))
}

/// POST /api/v1/resumes/export
///
/// Renders a resume (typically an edited copy of a generated one) as a
/// plain-text attachment.
pub async fn handle_export(Json(resume): Json<Resume>) -> Response {
    let filename = export_filename(&resume.personal_info.full_name);
    let body = render_plain_text(&resume);

    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    )
        .into_response()
}
