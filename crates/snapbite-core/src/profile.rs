//! Profile-derived nutrition targets.
//!
//! Pure calculations, no I/O. These feed the suggestion prompt so the model
//! can judge a meal against the user's body metrics and goal.

use crate::types::{Goal, UserProfile};

/// Body-mass index: weight in kilograms over height in meters squared.
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    weight_kg / (height_cm / 100.0).powi(2)
}

/// Recommended daily calorie intake for the given body weight and goal.
///
/// Cut, maintain and bulk map to 25, 30 and 35 kcal per kilogram.
pub fn daily_calorie_target(weight_kg: f64, goal: Goal) -> f64 {
    weight_kg * goal.kcal_per_kg()
}

impl UserProfile {
    pub fn bmi(&self) -> f64 {
        bmi(self.weight_kg, self.height_cm)
    }

    pub fn daily_calorie_target(&self) -> f64 {
        daily_calorie_target(self.weight_kg, self.goal)
    }
}
