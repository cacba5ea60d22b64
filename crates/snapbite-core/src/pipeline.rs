//! Pipeline orchestration: one inbound photo → one meal report.
//!
//! The pipeline sequences encoding, extraction and (optionally) suggestion
//! and propagates configuration into both calls. It holds no per-request
//! state, so a single instance can serve concurrent invocations.

use crate::config::Config;
use crate::error::{AnalysisError, ConfigError};
use crate::inference::backend::{resolve_env_var, ImageInput, InferenceBackend};
use crate::inference::{OpenAiBackend, SuggestionClient, VisionExtractionClient};
use crate::types::{MealReport, ReferenceObject, UserProfile};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Caller request for a next-meal suggestion alongside the analysis.
#[derive(Debug, Clone)]
pub struct SuggestionRequest {
    pub profile: UserProfile,
    /// Label of the meal being photographed (e.g., "breakfast")
    pub next_meal: String,
}

/// The meal analysis pipeline.
pub struct AnalysisPipeline {
    extraction: VisionExtractionClient,
    suggestion: SuggestionClient,
    reference: ReferenceObject,
    language: String,
}

impl AnalysisPipeline {
    /// Build a pipeline from configuration and an explicit backend.
    pub fn new(config: &Config, backend: Arc<dyn InferenceBackend>) -> Self {
        Self {
            extraction: VisionExtractionClient::new(
                backend.clone(),
                config.inference.vision_model.clone(),
                config.inference.vision_max_tokens,
            ),
            suggestion: SuggestionClient::new(
                backend,
                config.inference.suggestion_model.clone(),
                config.inference.suggestion_max_tokens,
            ),
            reference: ReferenceObject::new(
                config.reference.name.clone(),
                config.reference.length_cm,
            ),
            language: config.analysis.language.clone(),
        }
    }

    /// Build a pipeline backed by the configured OpenAI-compatible service.
    ///
    /// Fails when the configured API key (or its `${ENV_VAR}` reference)
    /// resolves to nothing.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let api_key = resolve_env_var(&config.inference.api_key).ok_or_else(|| {
            ConfigError::ValidationError(
                "Inference API key not set. Set OPENAI_API_KEY or inference.api_key.".to_string(),
            )
        })?;
        let backend = Arc::new(OpenAiBackend::new(
            &api_key,
            &config.inference.endpoint,
            Duration::from_millis(config.inference.timeout_ms),
        ));
        Ok(Self::new(config, backend))
    }

    /// Override the scale reference object for this pipeline instance.
    pub fn with_reference(mut self, reference: ReferenceObject) -> Self {
        self.reference = reference;
        self
    }

    /// Override the target language for this pipeline instance.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Analyze one meal photo from a file path.
    ///
    /// Encodes the image and delegates to [`run_encoded`](Self::run_encoded).
    /// An unreadable image propagates as an error; there are no retries.
    pub async fn run(
        &self,
        image_path: &Path,
        suggestion: Option<&SuggestionRequest>,
    ) -> Result<MealReport, AnalysisError> {
        let image = ImageInput::from_path(image_path).await?;
        tracing::info!(path = %image_path.display(), "Analyzing meal photo");
        Ok(self.run_encoded(&image, suggestion).await)
    }

    /// Analyze an already-encoded meal photo.
    ///
    /// Runs the extraction call, then the suggestion call only when one was
    /// requested. Infallible by construction: inference failures surface as
    /// the empty sentinels inside the report, never as errors.
    pub async fn run_encoded(
        &self,
        image: &ImageInput,
        suggestion: Option<&SuggestionRequest>,
    ) -> MealReport {
        let analysis = self
            .extraction
            .extract(image, &self.reference, &self.language)
            .await;

        let suggestion = match suggestion {
            Some(request) => Some(
                self.suggestion
                    .suggest(&analysis, &request.next_meal, &request.profile)
                    .await,
            ),
            None => None,
        };

        MealReport {
            analysis,
            suggestion,
        }
    }
}
