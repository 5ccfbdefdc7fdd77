//! Client for the OpenAI Responses API, used in JSON-object mode only.

use anyhow::{anyhow, Result};
use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::config::Config;

/// Fixed sampling temperature for settings generation.
pub const SETTINGS_TEMPERATURE: f64 = 0.4;

pub fn truncate_for_log(value: &str, limit: usize) -> String {
    if value.chars().count() <= limit {
        return value.to_string();
    }
    let truncated: String = value.chars().take(limit).collect();
    format!("{truncated}... (truncated)")
}

fn summarize_error_body(body: &str) -> (Option<String>, String) {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return (None, "empty response body".to_string());
    }

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        let message = value
            .pointer("/error/message")
            .and_then(|v| v.as_str())
            .map(|v| v.to_string())
            .or_else(|| {
                value
                    .get("message")
                    .and_then(|v| v.as_str())
                    .map(|v| v.to_string())
            });
        return (message, truncate_for_log(&value.to_string(), 2000));
    }

    (None, truncate_for_log(trimmed, 2000))
}

/// Submit a prompt and return the raw Responses API payload. The request pins
/// JSON-object output format and the fixed temperature; the model identifier
/// comes from config.
pub async fn create_json_settings(client: &Client, config: &Config, prompt: &str) -> Result<Value> {
    let payload = json!({
        "model": config.openai_model,
        "input": prompt,
        "text": {
            "format": { "type": "json_object" }
        },
        "temperature": SETTINGS_TEMPERATURE,
    });

    debug!(
        "OpenAI request: model={}, prompt_chars={}",
        config.openai_model,
        prompt.chars().count()
    );

    let response = client
        .post(format!(
            "{}/v1/responses",
            config.openai_base_url.trim_end_matches('/')
        ))
        .header(
            "Authorization",
            format!("Bearer {}", config.openai_api_key),
        )
        .json(&payload)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let (message, body_summary) = summarize_error_body(&body);
        warn!("OpenAI API error: status={}, body={}", status, body_summary);
        let detail = message.unwrap_or(body_summary);
        return Err(anyhow!(
            "OpenAI request failed with status {}: {}",
            status,
            detail
        ));
    }

    let value = response.json::<Value>().await?;
    debug!("OpenAI response received for model={}", config.openai_model);
    Ok(value)
}

/// Pull the model's text out of a Responses API payload. Prefers the
/// top-level `output_text` field, then scans the output items for the first
/// `output_text`-typed content block. Returns `None` when no nonempty text is
/// found anywhere.
pub fn extract_output_text(response: &Value) -> Option<String> {
    if let Some(text) = response.get("output_text").and_then(|v| v.as_str()) {
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            return Some(trimmed.to_string());
        }
    }

    let output = response.get("output").and_then(|v| v.as_array())?;
    for item in output {
        let Some(content) = item.get("content").and_then(|v| v.as_array()) else {
            continue;
        };
        for block in content {
            if block.get("type").and_then(|v| v.as_str()) != Some("output_text") {
                continue;
            }
            if let Some(text) = block.get("text").and_then(|v| v.as_str()) {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_top_level_output_text() {
        let response = json!({
            "output_text": "{\"device_type\": \"CAMERA\"}",
            "output": [{ "content": [{ "type": "output_text", "text": "ignored" }] }]
        });
        assert_eq!(
            extract_output_text(&response).as_deref(),
            Some("{\"device_type\": \"CAMERA\"}")
        );
    }

    #[test]
    fn falls_back_to_first_text_content_block() {
        let response = json!({
            "output_text": "",
            "output": [
                { "content": [{ "type": "reasoning", "text": "thinking" }] },
                { "content": [
                    { "type": "refusal", "refusal": "no" },
                    { "type": "output_text", "text": "  {\"mode\": \"Night mode\"}  " }
                ] }
            ]
        });
        assert_eq!(
            extract_output_text(&response).as_deref(),
            Some("{\"mode\": \"Night mode\"}")
        );
    }

    #[test]
    fn returns_none_when_all_text_is_empty() {
        let response = json!({
            "output_text": "   ",
            "output": [{ "content": [{ "type": "output_text", "text": "" }] }]
        });
        assert_eq!(extract_output_text(&response), None);
    }

    #[test]
    fn returns_none_for_missing_output() {
        assert_eq!(extract_output_text(&json!({})), None);
    }

    #[test]
    fn truncates_long_values_for_logging() {
        let long = "x".repeat(50);
        let truncated = truncate_for_log(&long, 10);
        assert!(truncated.starts_with("xxxxxxxxxx"));
        assert!(truncated.ends_with("(truncated)"));
        assert_eq!(truncate_for_log("short", 10), "short");
    }
}
