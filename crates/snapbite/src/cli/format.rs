//! Reply formatting: MealReport → user-facing text.
//!
//! The core never formats prose; this module is the formatting collaborator
//! that turns the typed report into the reply a user reads. An empty
//! analysis renders as a generic retry message, never as partial data.

use snapbite_core::{MealReport, MealSuggestion, NutritionAnalysis};

/// Shown when the analysis came back as the empty sentinel.
const RETRY_MESSAGE: &str =
    "Could not read the meal from that photo. Please try again, or send a clearer picture.";

/// Render a full report: the nutrition summary plus the suggestion when
/// one is present.
pub fn render_report(report: &MealReport) -> String {
    let mut out = render_analysis(&report.analysis);
    if let Some(suggestion) = &report.suggestion {
        out.push_str("\n\n");
        out.push_str(&render_suggestion(suggestion));
    }
    out
}

/// Render the nutrition summary, one line per food item.
pub fn render_analysis(analysis: &NutritionAnalysis) -> String {
    if analysis.is_empty() {
        return RETRY_MESSAGE.to_string();
    }

    let mut lines = vec!["Analysis complete. Nutrition summary:".to_string()];
    for item in &analysis.food_items {
        lines.push(format!(
            "- {} ({}): {}, carbs {}, protein {}, fat {}",
            item.name,
            item.portion_size,
            item.calories,
            item.macronutrients.carbs,
            item.macronutrients.protein,
            item.macronutrients.fat,
        ));
    }
    lines.join("\n")
}

/// Render the suggestion: evaluation, issues, and the proposed menu.
pub fn render_suggestion(suggestion: &MealSuggestion) -> String {
    if suggestion.is_empty() {
        return "No suggestion available for the next meal this time.".to_string();
    }

    let mut lines = vec![format!("Evaluation: {}", suggestion.evaluation)];
    if !suggestion.issues.is_empty() {
        lines.push("Issues:".to_string());
        for issue in &suggestion.issues {
            lines.push(format!("- {issue}"));
        }
    }
    if !suggestion.suggested_menu.is_empty() {
        lines.push(format!("Suggested {}:", suggestion.next_meal));
        for item in &suggestion.suggested_menu {
            lines.push(format!(
                "- {} ({}): {}",
                item.name, item.portion_size, item.calories
            ));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use snapbite_core::{FoodItem, Macronutrient, MenuItem};

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

    #[test]
    fn test_render_analysis_lines() {
        let text = render_analysis(&sample_analysis());
        assert!(text.starts_with("Analysis complete"));
        assert!(text.contains("- grilled chicken breast (150g): 250 kcal"));
        assert!(text.contains("protein 35g"));
    }

    #[test]
    fn test_empty_analysis_renders_retry_message() {
        let text = render_analysis(&NutritionAnalysis::empty());
        assert_eq!(text, RETRY_MESSAGE);
    }

    #[test]
    fn test_render_suggestion() {
        let suggestion = MealSuggestion {
            evaluation: "Solid protein, missing greens.".to_string(),
            issues: vec!["No vegetables".to_string()],
            next_meal: "dinner".to_string(),
            suggested_menu: vec![MenuItem {
                name: "broccoli".to_string(),
                portion_size: "100g".to_string(),
                calories: "35 kcal".to_string(),
            }],
        };
        let text = render_suggestion(&suggestion);
        assert!(text.contains("Evaluation: Solid protein"));
        assert!(text.contains("- No vegetables"));
        assert!(text.contains("Suggested dinner:"));
        assert!(text.contains("- broccoli (100g): 35 kcal"));
    }

    #[test]
    fn test_empty_suggestion_renders_fallback() {
        let text = render_suggestion(&MealSuggestion::empty());
        assert!(text.contains("No suggestion available"));
    }

    #[test]
    fn test_report_without_suggestion_has_no_trailing_section() {
        let report = MealReport {
            analysis: sample_analysis(),
            suggestion: None,
        };
        let text = render_report(&report);
        assert!(!text.contains("Evaluation"));
    }
}
