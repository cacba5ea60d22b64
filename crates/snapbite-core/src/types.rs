//! Core data types for the snapbite meal analysis pipeline.
//!
//! These records are the wire contract of both inference calls and the
//! serialization boundary consumed by journaling collaborators. Field names
//! and nesting are fixed; renaming or flattening them breaks the contract.
//! Every record is constructed once per inbound photo and never mutated.

use crate::error::AnalysisError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A known-size physical object visible in the photo, used by the vision
/// model as a scale reference when estimating portion sizes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceObject {
    /// Human-readable object name (e.g., "AirPods Pro 2")
    pub name: String,

    /// Physical length of the object in centimeters
    pub length_cm: f64,
}

impl Default for ReferenceObject {
    fn default() -> Self {
        Self {
            name: "AirPods Pro 2".to_string(),
            length_cm: 6.06,
        }
    }
}

impl ReferenceObject {
    pub fn new(name: impl Into<String>, length_cm: f64) -> Self {
        Self {
            name: name.into(),
            length_cm,
        }
    }
}

/// Macro breakdown for one food item. Quantities are free-form text as
/// reported by the model (e.g., "35g").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macronutrient {
    pub carbs: String,
    pub protein: String,
    pub fat: String,
}

/// One food item identified in the meal photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Food name in the configured target language
    pub name: String,

    /// Portion estimate (e.g., "150g" or "1/2 of the reference object")
    pub portion_size: String,

    /// Calorie estimate (e.g., "250 kcal")
    pub calories: String,

    /// Carbs/protein/fat breakdown in grams
    pub macronutrients: Macronutrient,
}

/// The typed result of one vision extraction call.
///
/// Always a concrete value: an empty `food_items` list is the defined
/// sentinel for "nothing parsed", covering both a photo with no
/// recognizable food and a failed inference call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionAnalysis {
    pub food_items: Vec<FoodItem>,
}

impl NutritionAnalysis {
    /// The "nothing parsed" sentinel.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.food_items.is_empty()
    }
}

/// A user-selected dietary objective, mapping to a per-kilogram calorie
/// multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Cut,
    Maintain,
    Bulk,
}

impl Goal {
    /// Daily calorie allowance per kilogram of body weight.
    pub fn kcal_per_kg(self) -> f64 {
        match self {
            Goal::Cut => 25.0,
            Goal::Maintain => 30.0,
            Goal::Bulk => 35.0,
        }
    }
}

impl FromStr for Goal {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cut" => Ok(Goal::Cut),
            "maintain" => Ok(Goal::Maintain),
            "bulk" => Ok(Goal::Bulk),
            other => Err(AnalysisError::UnknownGoal(other.to_string())),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Goal::Cut => "cut",
            Goal::Maintain => "maintain",
            Goal::Bulk => "bulk",
        };
        f.write_str(label)
    }
}

/// Per-request user profile. Constructed fresh for each suggestion call
/// and never persisted by the core.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UserProfile {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub goal: Goal,
}

/// One proposed item in a suggested next-meal menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub portion_size: String,
    pub calories: String,
}

/// The typed result of one suggestion call.
///
/// Always a concrete value: all fields empty is the sentinel for "no
/// suggestion produced".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSuggestion {
    /// Brief evaluation of the current meal
    pub evaluation: String,

    /// Identified nutrition issues, in the order reported
    pub issues: Vec<String>,

    /// Which meal the menu is for (e.g., "lunch" or "dinner")
    pub next_meal: String,

    /// Proposed menu with portions
    pub suggested_menu: Vec<MenuItem>,
}

impl MealSuggestion {
    /// The "no suggestion produced" sentinel.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.evaluation.is_empty()
            && self.issues.is_empty()
            && self.next_meal.is_empty()
            && self.suggested_menu.is_empty()
    }
}

/// Combined output of one pipeline run, handed to formatting collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealReport {
    pub analysis: NutritionAnalysis,

    /// Present only when the caller requested a suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<MealSuggestion>,
}

/// Journal record persisted by the logging collaborator, one per analyzed
/// photo. The embedded analysis is the lossless serialization of the
/// pipeline result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisLogEntry {
    pub user_id: String,
    pub message_id: String,
    pub analysis: NutritionAnalysis,
    pub created_at: DateTime<Utc>,
}

impl AnalysisLogEntry {
    /// Stamp a new entry with the current time.
    pub fn new(
        user_id: impl Into<String>,
        message_id: impl Into<String>,
        analysis: NutritionAnalysis,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            message_id: message_id.into(),
            analysis,
            created_at: Utc::now(),
        }
    }
}
