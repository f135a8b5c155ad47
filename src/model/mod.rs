use log::{debug, error, info};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::config::Config;

// The key must stay out of request URLs; reqwest errors print them.
const API_KEY_HEADER: &str = "x-goog-api-key";

const SAFETY_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation API rate limit reached")]
    RateLimited,

    #[error("generation API returned {0}: {1}")]
    Status(StatusCode, String),

    #[error("generation API returned no candidate text")]
    EmptyReply,

    #[error("generation API request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

// A wrapper for the Gemini generateContent API
pub struct GeminiModel {
    api_url: String,
    model: String,
    api_key: String,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
    top_k: u32,
    client: Client,
}

impl GeminiModel {
    pub fn new(config: &Config, api_key: String, client: Client) -> Self {
        Self {
            api_url: config.gemini_api_url.trim_end_matches('/').to_string(),
            model: config.gemini_model.clone(),
            api_key,
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            top_p: config.top_p,
            top_k: config.top_k,
            client,
        }
    }

    pub fn model_name(&self) -> &str {
        &self.model
    }

    fn payload(&self, prompt: &str) -> Value {
        let safety_settings: Vec<Value> = SAFETY_CATEGORIES
            .iter()
            .map(|category| {
                json!({
                    "category": category,
                    "threshold": "BLOCK_MEDIUM_AND_ABOVE"
                })
            })
            .collect();

        json!({
            "contents": [{
                "parts": [{ "text": prompt }]
            }],
            "generationConfig": {
                "temperature": self.temperature,
                "topK": self.top_k,
                "topP": self.top_p,
                "maxOutputTokens": self.max_tokens
            },
            "safetySettings": safety_settings
        })
    }

    pub async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        info!(
            "Generating response with {} (max_tokens: {})",
            self.model, self.max_tokens
        );
        debug!("Prompt: {}", prompt);

        let url = format!("{}/v1beta/models/{}:generateContent", self.api_url, self.model);
        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(&self.payload(prompt))
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(GenerationError::RateLimited);
        }
        if !status.is_success() {
            let error_text = response.text().await?;
            error!("Gemini API error {}: {}", status, error_text);
            return Err(GenerationError::Status(status, error_text));
        }

        let body: GenerateResponse = response.json().await?;
        let content = body
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .ok_or(GenerationError::EmptyReply)?;

        info!("Response length: {} characters", content.chars().count());
        Ok(content)
    }
}
