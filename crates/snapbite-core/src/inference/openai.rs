//! OpenAI-compatible backend using the Chat Completions API.
//!
//! Sends the image as a data URL in the user message content array and
//! pins the response shape with a strict `json_schema` response format.

use super::backend::{InferenceBackend, InferenceRequest, ResponseSchema};
use crate::error::AnalysisError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Backend for OpenAI and API-compatible inference services.
pub struct OpenAiBackend {
    api_key: String,
    endpoint: String,
    client: reqwest::Client,
    timeout: Duration,
}

impl OpenAiBackend {
    pub fn new(api_key: &str, endpoint: &str, timeout: Duration) -> Self {
        Self {
            api_key: api_key.to_string(),
            endpoint: endpoint.to_string(),
            client: reqwest::Client::new(),
            timeout,
        }
    }
}

// --- Request types ---

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: MessageContent,
}

#[derive(Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum ContentPart {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(rename = "image_url")]
    ImageUrl { image_url: ImageUrl },
}

#[derive(Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
    json_schema: JsonSchemaSpec,
}

#[derive(Serialize)]
struct JsonSchemaSpec {
    name: String,
    strict: bool,
    schema: serde_json::Value,
}

impl ResponseFormat {
    fn strict(schema: &ResponseSchema) -> Self {
        Self {
            format_type: "json_schema".to_string(),
            json_schema: JsonSchemaSpec {
                name: schema.name.to_string(),
                strict: true,
                schema: schema.schema.clone(),
            },
        }
    }
}

// --- Response types ---

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[async_trait]
impl InferenceBackend for OpenAiBackend {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, request: &InferenceRequest) -> Result<String, AnalysisError> {
        let mut user_parts = vec![ContentPart::Text {
            text: request.user_text.clone(),
        }];
        if let Some(image) = &request.image {
            user_parts.push(ContentPart::ImageUrl {
                image_url: ImageUrl {
                    url: image.data_url(),
                },
            });
        }

        let body = ChatRequest {
            model: request.model.clone(),
            max_tokens: request.max_tokens,
            response_format: ResponseFormat::strict(&request.schema),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: MessageContent::Text(request.system.clone()),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: MessageContent::Parts(user_parts),
                },
            ],
        };

        tracing::debug!(model = %request.model, schema = request.schema.name,
            "Sending inference request");

        let resp = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| AnalysisError::Transport {
                message: format!("Inference request failed: {e}"),
                status_code: None,
            })?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(AnalysisError::Transport {
                message: format!("Inference service HTTP {status}: {text}"),
                status_code: Some(status.as_u16()),
            });
        }

        // From here the call itself succeeded; anything unusable in the
        // body is a schema violation, not a transport failure.
        let chat_resp: ChatResponse = resp.json().await.map_err(|e| AnalysisError::Schema {
            message: format!("Failed to decode chat completion envelope: {e}"),
        })?;

        let content = chat_resp
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .ok_or_else(|| AnalysisError::Schema {
                message: "Chat completion returned no content".to_string(),
            })?;

        tracing::debug!(schema = request.schema.name, "Received inference response");
        Ok(content)
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }
}
