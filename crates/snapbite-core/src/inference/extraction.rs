//! Vision extraction: meal photo → typed nutrition records.
//!
//! Issues the first of the two schema-constrained inference calls. The
//! client is fail-soft: any transport or schema failure is logged and
//! converted to the empty analysis so one bad extraction never aborts
//! reply delivery.

use super::backend::{ImageInput, InferenceBackend, InferenceRequest, ResponseSchema};
use crate::types::{NutritionAnalysis, ReferenceObject};
use serde_json::json;
use std::sync::Arc;

/// Client for the vision extraction call.
pub struct VisionExtractionClient {
    backend: Arc<dyn InferenceBackend>,
    model: String,
    max_tokens: u32,
}

impl VisionExtractionClient {
    pub fn new(backend: Arc<dyn InferenceBackend>, model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            backend,
            model: model.into(),
            max_tokens,
        }
    }

    /// Extract nutrition records from an encoded meal photo.
    ///
    /// Always returns a concrete analysis; an empty item list means either
    /// no recognizable food or a failed call (distinguished only by the
    /// logged diagnostic). Single attempt, never raises.
    pub async fn extract(
        &self,
        image: &ImageInput,
        reference: &ReferenceObject,
        language: &str,
    ) -> NutritionAnalysis {
        let request = InferenceRequest {
            model: self.model.clone(),
            system: system_prompt(language),
            user_text: user_prompt(reference),
            image: Some(image.clone()),
            schema: analysis_schema(),
            max_tokens: self.max_tokens,
        };

        let raw = match self.backend.complete(&request).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(backend = self.backend.name(),
                    "Meal extraction failed, returning empty analysis: {e}");
                return NutritionAnalysis::empty();
            }
        };

        match serde_json::from_str::<NutritionAnalysis>(&raw) {
            Ok(analysis) => {
                tracing::debug!(items = analysis.food_items.len(), "Parsed nutrition analysis");
                analysis
            }
            Err(e) => {
                tracing::warn!(
                    "Extraction response did not match the analysis shape, \
                     returning empty analysis: {e}"
                );
                NutritionAnalysis::empty()
            }
        }
    }
}

fn system_prompt(language: &str) -> String {
    format!(
        "You are a professional nutrition analyst. Analyze meal photos and \
         report nutritional information in {language}. Be precise and concise, \
         and respond only with JSON matching the requested schema, with no \
         explanatory text."
    )
}

fn user_prompt(reference: &ReferenceObject) -> String {
    format!(
        "This image contains a meal. Identify every visible food item, using \
         the reference object in the photo ({}, {} cm long) to estimate \
         portion sizes. For each item report its name, portion_size (e.g., \
         100g or 1/2 of the reference object), calories (e.g., 230 kcal), and \
         macronutrients as carbs, protein and fat in grams.",
        reference.name, reference.length_cm
    )
}

/// JSON Schema for the `NutritionAnalysis` wire shape.
fn analysis_schema() -> ResponseSchema {
    ResponseSchema {
        name: "nutrition_analysis",
        schema: json!({
            "type": "object",
            "properties": {
                "food_items": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "name": { "type": "string" },
                            "portion_size": { "type": "string" },
                            "calories": { "type": "string" },
                            "macronutrients": {
                                "type": "object",
                                "properties": {
                                    "carbs": { "type": "string" },
                                    "protein": { "type": "string" },
                                    "fat": { "type": "string" }
                                },
                                "required": ["carbs", "protein", "fat"],
                                "additionalProperties": false
                            }
                        },
                        "required": ["name", "portion_size", "calories", "macronutrients"],
                        "additionalProperties": false
                    }
                }
            },
            "required": ["food_items"],
            "additionalProperties": false
        }),
    }
}
