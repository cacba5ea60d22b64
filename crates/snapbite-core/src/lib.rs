//! snapbite core - meal-photo nutrition analysis library.
//!
//! snapbite turns a meal photo into typed nutrition records via a
//! schema-constrained vision inference call, and optionally derives a
//! personalized next-meal suggestion from those records plus a user
//! profile.
//!
//! # Architecture
//!
//! ```text
//! Photo → Encode (base64) → Vision extraction → NutritionAnalysis
//!                                  │
//!                                  └→ (+ UserProfile) → Suggestion → MealSuggestion
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use snapbite_core::{AnalysisPipeline, Config};
//!
//! #[tokio::main]
//! async fn main() -> snapbite_core::Result<()> {
//!     let config = Config::load()?;
//!     let pipeline = AnalysisPipeline::from_config(&config)?;
//!
//!     let report = pipeline.run("./meal.jpg".as_ref(), None).await?;
//!     println!("Items: {}", report.analysis.food_items.len());
//!     Ok(())
//! }
//! ```
//!
//! Both inference calls are fail-soft: transport and schema failures are
//! logged and surface as the empty `NutritionAnalysis` / `MealSuggestion`
//! sentinels, never as errors. Unreadable images and unknown goal labels
//! are caller errors and do propagate.

// Module declarations
pub mod config;
pub mod error;
pub mod inference;
pub mod pipeline;
pub mod profile;
pub mod types;

// Re-exports for convenient access
pub use config::Config;
pub use error::{AnalysisError, AnalysisResult, ConfigError, Result, SnapbiteError};
pub use inference::{
    ImageInput, InferenceBackend, InferenceRequest, OpenAiBackend, ResponseSchema,
    SuggestionClient, VisionExtractionClient,
};
pub use pipeline::{AnalysisPipeline, SuggestionRequest};
pub use types::{
    AnalysisLogEntry, FoodItem, Goal, Macronutrient, MealReport, MealSuggestion, MenuItem,
    NutritionAnalysis, ReferenceObject, UserProfile,
};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
