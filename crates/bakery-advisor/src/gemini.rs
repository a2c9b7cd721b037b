//! Live advisor backed by the Gemini `generateContent` REST endpoint
//!
//! One POST per request, credential in the `key` query parameter, with a
//! JSON response schema; the first candidate's text is parsed as the
//! result. No retry.

use crate::advisor::Advisor;
use crate::config::AdvisorConfig;
use crate::error::AdvisorError;
use crate::prompt::{forecast_prompt, optimization_prompt};
use crate::types::{Advice, DemandForecast};
use async_trait::async_trait;
use bakery_catalog::{DailyOutput, Ingredient, Recipe};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

const MAX_ERROR_BODY: usize = 512;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateResponse {
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

/// Response schema for recipe advice
fn advice_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "analysis": { "type": "STRING" },
            "suggestion": { "type": "STRING" },
            "potentialSavings": { "type": "STRING" }
        },
        "required": ["analysis", "suggestion", "potentialSavings"]
    })
}

/// Advisor calling the Gemini REST API
#[derive(Debug, Clone)]
pub struct GeminiAdvisor {
    config: AdvisorConfig,
    client: reqwest::Client,
}

impl GeminiAdvisor {
    /// Create advisor; the HTTP client carries the configured timeout
    ///
    /// # Errors
    /// - `AdvisorError::Transport` if the HTTP client cannot be built
    pub fn new(config: AdvisorConfig) -> Result<Self, AdvisorError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self { config, client })
    }

    /// Endpoint URL for the configured model
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    async fn generate<T: DeserializeOwned>(
        &self,
        prompt: String,
        response_schema: Option<Value>,
    ) -> Result<T, AdvisorError> {
        let api_key = self.config.credential().ok_or(AdvisorError::MissingApiKey)?;

        let request = GenerateRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part { text: Some(prompt) }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema,
            },
        };

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let mut body = response.text().await.unwrap_or_default();
            if body.len() > MAX_ERROR_BODY {
                let mut cut = MAX_ERROR_BODY;
                while !body.is_char_boundary(cut) {
                    cut -= 1;
                }
                body.truncate(cut);
            }
            return Err(AdvisorError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let reply: GenerateResponse = response.json().await?;
        let text = reply.text().ok_or(AdvisorError::EmptyReply)?;
        serde_json::from_str(text.trim()).map_err(AdvisorError::MalformedReply)
    }
}

#[async_trait]
impl Advisor for GeminiAdvisor {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn optimize_recipe(
        &self,
        recipe: &Recipe,
        ingredients: &[Ingredient],
    ) -> Result<Advice, AdvisorError> {
        tracing::info!(recipe = %recipe.id, model = %self.config.model, "requesting recipe advice");
        let prompt = optimization_prompt(recipe, ingredients);
        self.generate(prompt, Some(advice_schema())).await
    }

    async fn forecast_demand(&self, history: &[DailyOutput]) -> Result<DemandForecast, AdvisorError> {
        tracing::info!(days = history.len(), model = %self.config.model, "requesting demand forecast");
        self.generate(forecast_prompt(history), None).await
    }
}
