use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::error;

use crate::llm::openai::truncate_for_log;
use crate::llm::{create_json_settings, extract_output_text};
use crate::prompt::build_prompt;
use crate::state::AppState;

/// Request body for `POST /api/camera-settings`. Every field is optional free
/// text; an absent body is treated the same as an empty object.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsRequest {
    pub scenario: Option<String>,
    pub camera_model: Option<String>,
    pub lens: Option<String>,
    pub constraints: Option<String>,
}

/// All failure modes surface as HTTP 500 with a generic message; raw model
/// output is only ever logged, never returned to the caller.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Model returned empty text. Check server logs.")]
    EmptyModelOutput,
    #[error("Model did not return valid JSON. Check server logs.")]
    InvalidModelJson,
    #[error("Internal server error")]
    Upstream(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Upstream(err) = &self {
            error!("Unexpected error in /api/camera-settings: {err:#}");
        }
        let body = Json(json!({ "error": self.to_string() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

pub async fn camera_settings(
    State(state): State<AppState>,
    request: Option<Json<SettingsRequest>>,
) -> Result<Json<Value>, ApiError> {
    let request = request.map(|Json(body)| body).unwrap_or_default();

    let prompt = build_prompt(
        request.scenario.as_deref(),
        request.camera_model.as_deref(),
        request.lens.as_deref(),
        request.constraints.as_deref(),
    );

    let response = create_json_settings(&state.http, &state.config, &prompt).await?;

    let Some(raw) = extract_output_text(&response) else {
        error!(
            "No text returned from model: {}",
            truncate_for_log(&response.to_string(), 2000)
        );
        return Err(ApiError::EmptyModelOutput);
    };

    match serde_json::from_str::<Value>(&raw) {
        Ok(settings) => Ok(Json(settings)),
        Err(err) => {
            error!(
                "Failed to parse JSON from model ({err}): {}",
                truncate_for_log(&raw, 2000)
            );
            Err(ApiError::InvalidModelJson)
        }
    }
}
