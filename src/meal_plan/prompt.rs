// ABOUTME: Builds the system and user chat messages for a meal plan request
// ABOUTME: Embeds the profile, calorie target, preferences, and a seven-day JSON skeleton
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::MealPlanRequest;
use crate::intelligence::round_to;
use crate::llm::prompts::{get_meal_plan_system_prompt, render_template, MEAL_PLAN_USER_TEMPLATE};
use crate::llm::ChatMessage;
use crate::models::{MealPlan, MealSlot};
use serde_json::{json, Map, Value};

/// Shown when no dietary preferences are given
pub const DEFAULT_PREFERENCES: &str = "Traditional Nepalese cuisine";

/// Shown when no allergies are given
pub const NO_ALLERGIES: &str = "None";

fn meal_placeholder() -> Value {
    json!({
        "name": "Meal name",
        "ingredients": "ingredient list",
        "portions": "portion sizes",
        "calories": 0,
        "protein": 0,
        "carbs": 0,
        "fats": 0,
        "instructions": "cooking instructions"
    })
}

/// Example document with `dailyTargets` and exactly seven day keys
#[must_use]
pub fn plan_skeleton(daily_calories: u32) -> Value {
    let mut day = Map::new();
    for slot in MealSlot::ALL {
        let key = match slot {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Snack => "snack",
            MealSlot::Dinner => "dinner",
        };
        day.insert(key.to_owned(), meal_placeholder());
    }
    day.insert(
        "dailyTotal".to_owned(),
        json!({ "calories": daily_calories, "protein": 0, "carbs": 0, "fats": 0 }),
    );

    let days: Map<String, Value> = (1..=MealPlan::FULL_WEEK)
        .map(|n| (MealPlan::day_key(n), Value::Object(day.clone())))
        .collect();

    json!({
        "dailyTargets": {
            "calories": daily_calories,
            "protein": "130-150g",
            "carbs": "200-250g",
            "fats": "60-80g"
        },
        "mealPlan": days
    })
}

fn join_or(items: &[String], empty: &str) -> String {
    if items.is_empty() {
        empty.to_owned()
    } else {
        items.join(", ")
    }
}

/// Render the per-request user prompt
#[must_use]
pub fn user_prompt(request: &MealPlanRequest) -> String {
    let profile = &request.profile;
    let skeleton = serde_json::to_string_pretty(&plan_skeleton(request.daily_calories))
        .unwrap_or_default();

    render_template(
        MEAL_PLAN_USER_TEMPLATE,
        &[
            ("age", &profile.age.to_string()),
            ("gender", profile.gender.as_str()),
            ("activity_level", profile.activity_level.as_str()),
            ("weight_kg", &round_to(profile.weight_kg, 1).to_string()),
            ("height_cm", &round_to(profile.height_cm, 1).to_string()),
            ("daily_calories", &request.daily_calories.to_string()),
            (
                "preferences",
                &join_or(&request.dietary_preferences, DEFAULT_PREFERENCES),
            ),
            ("allergies", &join_or(&request.allergies, NO_ALLERGIES)),
            ("skeleton", &skeleton),
        ],
    )
}

/// System and user messages, in that order
#[must_use]
pub fn build_messages(request: &MealPlanRequest) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(get_meal_plan_system_prompt()),
        ChatMessage::user(user_prompt(request)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MessageRole;
    use crate::models::{ActivityLevel, Gender, UnitSystem, UserProfile, WeightHeight};

    fn request(preferences: Vec<String>, allergies: Vec<String>) -> MealPlanRequest {
        let m = WeightHeight::new(70.0, 175.0, UnitSystem::Metric).unwrap();
        let profile = UserProfile::new(m, 30, Gender::Male, ActivityLevel::ModeratelyActive)
            .unwrap();
        MealPlanRequest {
            profile,
            daily_calories: 2095,
            dietary_preferences: preferences,
            allergies,
        }
    }

    #[test]
    fn test_skeleton_has_seven_days() {
        let skeleton = plan_skeleton(2000);
        let days = skeleton["mealPlan"].as_object().unwrap();
        assert_eq!(days.len(), 7);
        assert!(days.contains_key("day1"));
        assert!(days.contains_key("day7"));
        assert_eq!(skeleton["dailyTargets"]["calories"], 2000);
        assert!(days["day3"]["dailyTotal"].is_object());
        assert!(days["day3"]["snack"]["instructions"].is_string());
    }

    #[test]
    fn test_user_prompt_embeds_profile() {
        let prompt = user_prompt(&request(Vec::new(), Vec::new()));
        assert!(prompt.contains("30-year-old male"));
        assert!(prompt.contains("moderately active"));
        assert!(prompt.contains("Weight: 70 kg"));
        assert!(prompt.contains("Height: 175 cm"));
        assert!(prompt.contains("Target daily calories: 2095"));
        assert!(prompt.contains(DEFAULT_PREFERENCES));
        assert!(prompt.contains("Allergies: None"));
        assert!(prompt.contains("\"day7\""));
        assert!(!prompt.contains("{{"));
    }

    #[test]
    fn test_user_prompt_lists_preferences() {
        let prompt = user_prompt(&request(
            vec!["vegetarian".into(), "low sodium".into()],
            vec!["peanuts".into()],
        ));
        assert!(prompt.contains("Dietary preferences: vegetarian, low sodium"));
        assert!(prompt.contains("Allergies: peanuts"));
    }

    #[test]
    fn test_message_order() {
        let messages = build_messages(&request(Vec::new(), Vec::new()));
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, MessageRole::System);
        assert_eq!(messages[1].role, MessageRole::User);
    }
}
