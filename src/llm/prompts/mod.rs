// ABOUTME: Meal-plan prompts for LLM interactions loaded at compile time
// ABOUTME: Provides the nutritionist system prompt and the per-request user prompt template
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # System Prompts
//!
//! Prompts are loaded at compile time from markdown files for easy maintenance.
//! The user prompt is a template whose `{{name}}` placeholders are filled per
//! request by the meal-plan requester.

/// Nutritionist system prompt
///
/// Contains instructions for the model including:
/// - Cuisine focus (Nepalese home cooking, local ingredients)
/// - Accuracy constraints (daily total within ±50 kcal of target)
/// - Output format (a single JSON object)
pub const MEAL_PLAN_SYSTEM_PROMPT: &str = include_str!("meal_plan_system.md");

/// Per-request user prompt template
pub const MEAL_PLAN_USER_TEMPLATE: &str = include_str!("meal_plan_user.md");

/// Get the system prompt for meal-plan generation
#[must_use]
pub const fn get_meal_plan_system_prompt() -> &'static str {
    MEAL_PLAN_SYSTEM_PROMPT
}

/// Fill `{{name}}` placeholders in a prompt template
///
/// Placeholders without a matching value are left untouched.
#[must_use]
pub fn render_template(template: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(template.to_owned(), |rendered, (name, value)| {
            rendered.replace(&format!("{{{{{name}}}}}"), value)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_requires_json() {
        let prompt = get_meal_plan_system_prompt();
        assert!(prompt.contains("JSON"));
        assert!(prompt.contains("±50 kcal"));
    }

    #[test]
    fn test_render_template() {
        let rendered = render_template("{{a}} and {{b}} and {{c}}", &[("a", "1"), ("b", "2")]);
        assert_eq!(rendered, "1 and 2 and {{c}}");
    }

    #[test]
    fn test_user_template_placeholders() {
        for name in [
            "age",
            "gender",
            "activity_level",
            "weight_kg",
            "height_cm",
            "daily_calories",
            "preferences",
            "allergies",
            "skeleton",
        ] {
            assert!(
                MEAL_PLAN_USER_TEMPLATE.contains(&format!("{{{{{name}}}}}")),
                "missing placeholder {name}"
            );
        }
    }
}
