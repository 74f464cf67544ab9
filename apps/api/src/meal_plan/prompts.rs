//! Meal-plan prompt template and per-window builder.

use crate::meal_plan::batching::Window;
use crate::models::plan::MEAL_SLOTS;

/// Meal-plan generation prompt template.
/// Replace: {days}, {start_day}, {end_day}, {start_date}, {end_date}, {slots}, {goal}
pub const MEAL_PLAN_PROMPT_TEMPLATE: &str = r#"You are an expert nutritionist building a meal plan for a coaching client.

Create days {start_day} to {end_day} ({days} days in total) of a meal plan, starting on {start_date} and ending on {end_date}.
The client's program goal is: "{goal}"

For each day, provide exactly 5 meals, in this order: {slots}.
For each meal provide realistic nutritional estimates.

Respond with ONLY a valid JSON array, no other text, no markdown, no backticks. Use this exact structure:

[
  {
    "day": {start_day},
    "date": "{start_date}",
    "meals": [
      {
        "slot": "Breakfast",
        "name": "Greek yogurt with berries and oats",
        "ingredients": [
          {
            "name": "Greek yogurt",
            "quantity": 150,
            "calories": 146,
            "protein": 15,
            "fat": 6,
            "carbs": 6
          },
          {
            "name": "Rolled oats",
            "quantity": 40,
            "calories": 152,
            "protein": 5,
            "fat": 3,
            "carbs": 27
          }
        ],
        "totalCalories": 298,
        "totalProtein": 20,
        "totalFat": 9,
        "totalCarbs": 33
      }
    ]
  }
]

Rules:
- Return exactly {days} day objects, numbered {start_day} to {end_day}
- Make meals appropriate for the goal: "{goal}"
- Vary meals across different days — do not repeat the same meals
- "quantity" is in grams; keep quantities realistic
- Ingredient calories, protein, fat and carbs are for the stated quantity, NOT per 100 g
- Meal totals must match the sum of their ingredients
- Return ONLY the JSON array, nothing else"#;

/// Builds the instruction for one window. Pure templating.
pub fn build_window_prompt(goal: &str, window: &Window) -> String {
    let slots = MEAL_SLOTS
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    // {goal} goes last so user text containing a placeholder is never expanded.
    MEAL_PLAN_PROMPT_TEMPLATE
        .replace("{days}", &window.days.to_string())
        .replace("{start_day}", &window.start_day.to_string())
        .replace("{end_day}", &window.end_day().to_string())
        .replace("{start_date}", &window.start_date.format("%Y-%m-%d").to_string())
        .replace("{end_date}", &window.end_date().format("%Y-%m-%d").to_string())
        .replace("{slots}", &slots)
        .replace("{goal}", goal)
}
