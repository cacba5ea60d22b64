//! Next-meal suggestion: nutrition records + user profile → menu advice.
//!
//! Issues the second schema-constrained inference call. Mirrors the
//! extraction client's fail-soft contract: transport or schema failures
//! are logged and converted to the empty suggestion sentinel.

use super::backend::{InferenceBackend, InferenceRequest, ResponseSchema};
use crate::types::{MealSuggestion, NutritionAnalysis, UserProfile};
use serde_json::json;
use std::fmt::Write;
use std::sync::Arc;

/// Client for the suggestion call.
pub struct SuggestionClient {
    backend: Arc<dyn InferenceBackend>,
    model: String,
    max_tokens: u32,
}

impl SuggestionClient {
    pub fn new(backend: Arc<dyn InferenceBackend>, model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            backend,
            model: model.into(),
            max_tokens,
        }
    }

    /// Produce a next-meal suggestion from the current meal's analysis and
    /// the user's profile.
    ///
    /// Always returns a concrete suggestion; the all-empty value means no
    /// suggestion could be produced. Single attempt, never raises.
    pub async fn suggest(
        &self,
        analysis: &NutritionAnalysis,
        current_meal: &str,
        profile: &UserProfile,
    ) -> MealSuggestion {
        let request = InferenceRequest {
            model: self.model.clone(),
            system: SYSTEM_PROMPT.to_string(),
            user_text: user_prompt(analysis, current_meal, profile),
            image: None,
            schema: suggestion_schema(),
            max_tokens: self.max_tokens,
        };

        let raw = match self.backend.complete(&request).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(backend = self.backend.name(),
                    "Meal suggestion failed, returning empty suggestion: {e}");
                return MealSuggestion::empty();
            }
        };

        match serde_json::from_str::<MealSuggestion>(&raw) {
            Ok(suggestion) => {
                tracing::debug!(menu_items = suggestion.suggested_menu.len(),
                    "Parsed meal suggestion");
                suggestion
            }
            Err(e) => {
                tracing::warn!(
                    "Suggestion response did not match the expected shape, \
                     returning empty suggestion: {e}"
                );
                MealSuggestion::empty()
            }
        }
    }
}

const SYSTEM_PROMPT: &str =
    "You are a nutrition advisor. Based on the user's height, weight, goal, \
     current meal and its nutrition analysis, evaluate whether the meal's \
     macronutrients (protein, carbs, fat) and calories are balanced, list any \
     issues, and suggest a menu with portions for the next meal.";

fn user_prompt(analysis: &NutritionAnalysis, current_meal: &str, profile: &UserProfile) -> String {
    format!(
        "User profile: height {} cm, weight {} kg, goal {}, BMI {:.2}, \
         recommended daily calories {:.0} kcal.\n\
         Current meal: {current_meal}\n\
         Current meal analysis:\n{}\n\
         Provide a nutrition evaluation and a suggestion for the next meal.",
        profile.height_cm,
        profile.weight_kg,
        profile.goal,
        profile.bmi(),
        profile.daily_calorie_target(),
        meal_lines(analysis),
    )
}

/// Render each food item as one compact prompt line.
fn meal_lines(analysis: &NutritionAnalysis) -> String {
    let mut out = String::new();
    for item in &analysis.food_items {
        let _ = writeln!(
            out,
            "- {}, portion size: {}, calories: {}, protein: {}, carbs: {}, fat: {}",
            item.name,
            item.portion_size,
            item.calories,
            item.macronutrients.protein,
            item.macronutrients.carbs,
            item.macronutrients.fat,
        );
    }
    out
}

/// JSON Schema for the `MealSuggestion` wire shape.
fn suggestion_schema() -> ResponseSchema {
    ResponseSchema {
        name: "meal_suggestion",
        schema: json!({
            "type": "object",
            "properties": {
                "evaluation": { "type": "string" },
                "issues": {
                    "type": "array",
                    "items": { "type": "string" }
                },
                "next_meal": { "type": "string" },
                "suggested_menu": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "name": { "type": "string" },
                            "portion_size": { "type": "string" },
                            "calories": { "type": "string" }
                        },
                        "required": ["name", "portion_size", "calories"],
                        "additionalProperties": false
                    }
                }
            },
            "required": ["evaluation", "issues", "next_meal", "suggested_menu"],
            "additionalProperties": false
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;
    use crate::inference::extraction::tests::MockBackend;
    use crate::types::{FoodItem, Goal, Macronutrient};
    use std::sync::atomic::Ordering;

    fn sample_analysis() -> NutritionAnalysis {
        NutritionAnalysis {
            food_items: vec![FoodItem {
                name: "grilled chicken breast".to_string(),
                portion_size: "150g".to_string(),
                calories: "250 kcal".to_string(),
                macronutrients: Macronutrient {
                    carbs: "0g".to_string(),
                    protein: "35g".to_string(),
                    fat: "8g".to_string(),
                },
            }],
        }
    }

    fn sample_profile() -> UserProfile {
        UserProfile {
            height_cm: 170.0,
            weight_kg: 60.0,
            goal: Goal::Cut,
        }
    }

    const VALID_SUGGESTION: &str = r#"{
        "evaluation": "High in protein, light on carbs for a cut.",
        "issues": ["No vegetables in this meal"],
        "next_meal": "dinner",
        "suggested_menu": [
            {"name": "steamed salmon", "portion_size": "120g", "calories": "240 kcal"}
        ]
    }"#;

    #[tokio::test]
    async fn test_suggest_parses_conformant_response() {
        let backend = Arc::new(MockBackend::returning(VALID_SUGGESTION));
        let client = SuggestionClient::new(backend.clone(), "gpt-5-mini", 500);

        let suggestion = client
            .suggest(&sample_analysis(), "lunch", &sample_profile())
            .await;

        assert!(!suggestion.evaluation.is_empty());
        assert_eq!(suggestion.next_meal, "dinner");
        assert_eq!(suggestion.suggested_menu.len(), 1);
        assert_eq!(backend.call_count_handle().load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_suggest_renders_meal_line_and_profile() {
        let backend = Arc::new(MockBackend::returning(VALID_SUGGESTION));
        let client = SuggestionClient::new(backend.clone(), "gpt-5-mini", 500);

        client
            .suggest(&sample_analysis(), "lunch", &sample_profile())
            .await;

        // Exactly one request, whose rendered meal line reflects the item
        assert_eq!(backend.call_count_handle().load(Ordering::SeqCst), 1);
        let request = backend.last_request().unwrap();
        assert!(request.user_text.contains(
            "- grilled chicken breast, portion size: 150g, calories: 250 kcal, \
             protein: 35g, carbs: 0g, fat: 8g"
        ));
        assert!(request.user_text.contains("goal cut"));
        assert!(request.user_text.contains("BMI 20.76"));
        assert!(request.user_text.contains("1500 kcal"));
        assert!(request.user_text.contains("Current meal: lunch"));
        assert!(request.image.is_none());
        assert_eq!(request.schema.name, "meal_suggestion");
    }

    #[tokio::test]
    async fn test_suggest_transport_failure_yields_empty_sentinel() {
        let backend = Arc::new(MockBackend::failing(|| AnalysisError::Transport {
            message: "request timed out".to_string(),
            status_code: None,
        }));
        let client = SuggestionClient::new(backend.clone(), "gpt-5-mini", 500);

        let suggestion = client
            .suggest(&sample_analysis(), "lunch", &sample_profile())
            .await;

        assert!(suggestion.is_empty());
        assert_eq!(backend.call_count_handle().load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_suggest_malformed_content_yields_empty_sentinel() {
        let backend = Arc::new(MockBackend::returning("{\"advice\": \"eat more\"}"));
        let client = SuggestionClient::new(backend, "gpt-5-mini", 500);

        let suggestion = client
            .suggest(&sample_analysis(), "lunch", &sample_profile())
            .await;
        assert!(suggestion.is_empty());
    }

    #[test]
    fn test_meal_lines_empty_analysis() {
        assert_eq!(meal_lines(&NutritionAnalysis::empty()), "");
    }

    #[test]
    fn test_suggestion_schema_is_strict() {
        let schema = suggestion_schema();
        assert_eq!(schema.schema["additionalProperties"], false);
        assert_eq!(
            schema.schema["required"],
            serde_json::json!(["evaluation", "issues", "next_meal", "suggested_menu"])
        );
    }
}
