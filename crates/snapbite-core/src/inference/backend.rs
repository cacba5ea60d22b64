//! Inference backend trait and request types.
//!
//! Defines the interface the extraction and suggestion clients call into,
//! plus the image transport encoding embedded in vision requests.

use crate::error::AnalysisError;
use async_trait::async_trait;
use base64::Engine;
use std::path::Path;
use std::time::Duration;

/// Base64-encoded image ready to embed in an inference request.
#[derive(Debug, Clone)]
pub struct ImageInput {
    /// Base64-encoded image bytes
    pub data: String,
    /// MIME type (e.g., "image/jpeg", "image/png")
    pub media_type: String,
}

impl ImageInput {
    /// Create an `ImageInput` from raw bytes and format string.
    ///
    /// The format is the image format identifier (e.g., "jpeg", "png", "webp").
    pub fn from_bytes(bytes: &[u8], format: &str) -> Self {
        let media_type = match format {
            "jpeg" | "jpg" => "image/jpeg",
            "png" => "image/png",
            "webp" => "image/webp",
            "gif" => "image/gif",
            other => {
                tracing::warn!("Unknown image format '{other}', defaulting to image/jpeg");
                "image/jpeg"
            }
        };

        Self {
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
            media_type: media_type.to_string(),
        }
    }

    /// Read and encode an image file, inferring the format from the
    /// extension. A missing or unreadable file is a caller error and
    /// propagates; there are no retries.
    pub async fn from_path(path: &Path) -> Result<Self, AnalysisError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| AnalysisError::Image {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_else(|| "jpeg".to_string());
        Ok(Self::from_bytes(&bytes, &format))
    }

    /// Return a data URL suitable for OpenAI-style APIs.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.media_type, self.data)
    }
}

/// A JSON Schema the service must conform its response to.
///
/// Attached to every request: the shape is enforced at the transport level
/// rather than requested by prose, so the model cannot drift from it.
#[derive(Debug, Clone)]
pub struct ResponseSchema {
    /// Schema name reported to the service
    pub name: &'static str,
    /// The JSON Schema document
    pub schema: serde_json::Value,
}

/// One schema-constrained inference request.
#[derive(Debug, Clone)]
pub struct InferenceRequest {
    /// Model identifier
    pub model: String,
    /// System instruction
    pub system: String,
    /// User instruction text
    pub user_text: String,
    /// Attached image, present on vision requests only
    pub image: Option<ImageInput>,
    /// Required response shape
    pub schema: ResponseSchema,
    /// Maximum tokens to generate
    pub max_tokens: u32,
}

/// Trait that all inference backends implement.
///
/// Uses `async_trait` because native async fn in trait is not object-safe
/// (the pipeline holds an `Arc<dyn InferenceBackend>`).
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    /// Backend name for logging (e.g., "openai").
    fn name(&self) -> &str;

    /// Issue the request and return the raw JSON content of the response.
    ///
    /// Single attempt; transport failures map to `AnalysisError::Transport`,
    /// a successful call with unusable content to `AnalysisError::Schema`.
    async fn complete(&self, request: &InferenceRequest) -> Result<String, AnalysisError>;

    /// Per-request timeout for this backend.
    fn timeout(&self) -> Duration;
}

/// Resolve `${ENV_VAR}` references in config strings.
pub fn resolve_env_var(value: &str) -> Option<String> {
    if value.starts_with("${") && value.ends_with('}') {
        let var_name = &value[2..value.len() - 1];
        std::env::var(var_name).ok()
    } else if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
