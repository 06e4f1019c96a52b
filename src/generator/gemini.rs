//! Gemini-backed style generator.

use super::{GeneratedStyle, StyleGenerator};
use crate::branding::APP_BINARY_NAME;
use crate::config::GeneratorConfig;
use crate::models::StyleRecord;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, warn};

/// Calls the Gemini `generateContent` endpoint with a JSON response schema.
#[derive(Debug, Clone)]
pub struct GeminiGenerator {
    endpoint: String,
    model: String,
    api_key: String,
    http_client: Client,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GeminiGenerator {
    /// Creates a client for `endpoint` (e.g. `https://generativelanguage.googleapis.com/v1beta`).
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: api_key.into(),
            http_client,
        })
    }

    /// Creates a client from the `[generator]` config section.
    ///
    /// Fails when no API key is configured or present in the environment.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        let api_key = config.resolve_api_key().with_context(|| {
            format!(
                "No API key configured. Set one with `{APP_BINARY_NAME} config set --api-key <KEY>` \
                 or the GEMINI_API_KEY environment variable"
            )
        })?;
        Self::new(
            &config.endpoint,
            &config.model,
            api_key,
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Model name used for requests.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    async fn request(&self, prompt: &str) -> Result<GeneratedStyle> {
        let url = self.url();
        debug!(%url, "Requesting generated style");

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body(prompt))
            .send()
            .await
            .context("Generator request failed")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Generator returned {status}: {error_text}");
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .context("Generator response is not valid JSON")?;

        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .context("Generator response has no candidate text")?;

        serde_json::from_str(&text).context("Generated style is not valid JSON")
    }
}

#[async_trait]
impl StyleGenerator for GeminiGenerator {
    async fn generate(&self, prompt: &str) -> Option<StyleRecord> {
        match self.request(prompt).await {
            Ok(style) => {
                let record = style.into_record();
                if record.is_none() {
                    warn!("Generated style has no classes");
                }
                record
            }
            Err(e) => {
                warn!("Style generation failed: {e:#}");
                None
            }
        }
    }
}

/// Instruction sent to the model for `prompt`.
fn instruction(prompt: &str) -> String {
    format!(
        "Create a beautiful, animated React Tailwind CSS button based on this description: \"{prompt}\".\n\n\
         Requirements:\n\
         1. Use ONLY standard Tailwind CSS utility classes.\n\
         2. Ensure it has hover and active states for animation.\n\
         3. Do NOT use external CSS.\n\
         4. Make it visually impressive.\n\n\
         Return a JSON object matching the schema."
    )
}

fn request_body(prompt: &str) -> Value {
    json!({
        "contents": [{ "parts": [{ "text": instruction(prompt) }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "name": { "type": "STRING", "description": "A creative name for the button style" },
                    "classes": { "type": "STRING", "description": "The full string of tailwind classes for the button className" },
                    "category": { "type": "STRING", "description": "One of: Minimal, Glow, 3D, Gradient, Retro, Glassmorphism" }
                },
                "required": ["name", "classes", "category"]
            }
        }
    })
}
