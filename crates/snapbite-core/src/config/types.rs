//! Sub-configuration structs with defaults matching the hosted deployment.

use serde::{Deserialize, Serialize};

/// Scale reference object settings.
///
/// The vision prompt names this object so the model can estimate portion
/// sizes against a known physical length.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceConfig {
    /// Object name as it should appear in the prompt
    pub name: String,

    /// Physical length in centimeters
    pub length_cm: f64,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            name: "AirPods Pro 2".to_string(),
            length_cm: 6.06,
        }
    }
}

/// Analysis settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Language for model-reported food names and evaluations
    pub language: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            language: "English".to_string(),
        }
    }
}

/// Inference service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Chat-completions endpoint (OpenAI-compatible)
    pub endpoint: String,

    /// API key (supports ${ENV_VAR} syntax)
    pub api_key: String,

    /// Model for the vision extraction call
    pub vision_model: String,

    /// Model for the suggestion call
    pub suggestion_model: String,

    /// Token cap for the vision extraction call
    pub vision_max_tokens: u32,

    /// Token cap for the suggestion call
    pub suggestion_max_tokens: u32,

    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            api_key: "${OPENAI_API_KEY}".to_string(),
            vision_model: "gpt-4o-mini".to_string(),
            suggestion_model: "gpt-5-mini".to_string(),
            vision_max_tokens: 1000,
            suggestion_max_tokens: 500,
            timeout_ms: 60_000,
        }
    }
}

/// Analysis journal settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalConfig {
    /// Journal file path (newline-delimited JSON, supports ~ expansion)
    pub path: String,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            path: "~/.snapbite/journal.jsonl".to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
