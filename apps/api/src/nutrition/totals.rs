//! Nutrient arithmetic for plans and the meal builder.
//!
//! Flat summation only. Meal totals are whatever the plan states unless a
//! recompute from ingredients is explicitly asked for.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::plan::{Ingredient, Meal, PlanDay};

/// Calories plus macros in grams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl Add for MacroTotals {
    type Output = MacroTotals;

    fn add(self, rhs: MacroTotals) -> MacroTotals {
        MacroTotals {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            fat: self.fat + rhs.fat,
            carbs: self.carbs + rhs.carbs,
        }
    }
}

impl AddAssign for MacroTotals {
    fn add_assign(&mut self, rhs: MacroTotals) {
        *self = *self + rhs;
    }
}

impl Sum for MacroTotals {
    fn sum<I: Iterator<Item = MacroTotals>>(iter: I) -> MacroTotals {
        iter.fold(MacroTotals::default(), Add::add)
    }
}

impl MacroTotals {
    /// Per-item average, rounded to one decimal. Zero items gives zero.
    pub fn average_over(self, count: usize) -> MacroTotals {
        if count == 0 {
            return MacroTotals::default();
        }
        let n = count as f64;
        MacroTotals {
            calories: round_1(self.calories / n),
            protein: round_1(self.protein / n),
            fat: round_1(self.fat / n),
            carbs: round_1(self.carbs / n),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DaySummary {
    pub day: u32,
    pub date: NaiveDate,
    pub totals: MacroTotals,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    pub days: Vec<DaySummary>,
    pub overall: MacroTotals,
    pub daily_average: MacroTotals,
}

// ────────────────────────────────────────────────────────────────────────────
// Scaling
// ────────────────────────────────────────────────────────────────────────────

/// Scales a per-100 g value to `quantity_g`, rounded to a whole number.
pub fn scale_per_100g(base: f64, quantity_g: f64) -> f64 {
    (base * quantity_g / 100.0).round()
}

/// Recomputes an ingredient's calories after its quantity changes.
/// A zero previous quantity is treated as 1 g.
pub fn rescale_calories(calories: f64, old_quantity_g: f64, new_quantity_g: f64) -> f64 {
    let per_gram = calories / old_quantity_g.max(1.0);
    (per_gram * new_quantity_g).round()
}

// ────────────────────────────────────────────────────────────────────────────
// Totals
// ────────────────────────────────────────────────────────────────────────────

/// Sum of the ingredient values. Absent macros count as 0.
pub fn meal_totals_from_ingredients(ingredients: &[Ingredient]) -> MacroTotals {
    ingredients
        .iter()
        .map(|i| MacroTotals {
            calories: i.calories,
            protein: i.protein.unwrap_or(0.0),
            fat: i.fat.unwrap_or(0.0),
            carbs: i.carbs.unwrap_or(0.0),
        })
        .sum()
}

/// The totals a meal states about itself.
pub fn stated_meal_totals(meal: &Meal) -> MacroTotals {
    MacroTotals {
        calories: meal.total_calories,
        protein: meal.total_protein,
        fat: meal.total_fat,
        carbs: meal.total_carbs,
    }
}

/// Overwrites a meal's stated totals with the sum of its ingredients.
pub fn recompute_meal_totals(meal: &mut Meal) {
    let totals = meal_totals_from_ingredients(&meal.ingredients);
    meal.total_calories = totals.calories;
    meal.total_protein = totals.protein;
    meal.total_fat = totals.fat;
    meal.total_carbs = totals.carbs;
}

/// Sum of the stated totals of every meal in the day.
pub fn day_totals(day: &PlanDay) -> MacroTotals {
    day.meals.iter().map(stated_meal_totals).sum()
}

pub fn summarize_plan(days: &[PlanDay]) -> PlanSummary {
    let days: Vec<DaySummary> = days
        .iter()
        .map(|d| DaySummary {
            day: d.day,
            date: d.date,
            totals: day_totals(d),
        })
        .collect();

    let overall: MacroTotals = days.iter().map(|d| d.totals).sum();
    let daily_average = overall.average_over(days.len());

    PlanSummary {
        days,
        overall,
        daily_average,
    }
}

fn round_1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::plan::MealSlot;

    fn ingredient(calories: f64, protein: Option<f64>) -> Ingredient {
        Ingredient {
            id: "i".to_string(),
            name: "x".to_string(),
            quantity: 100.0,
            calories,
            protein,
            fat: None,
            carbs: None,
        }
    }

    fn meal(calories: f64, protein: f64, ingredients: Vec<Ingredient>) -> Meal {
        Meal {
            id: "m".to_string(),
            slot: MealSlot::Lunch,
            name: "Meal".to_string(),
            ingredients,
            total_calories: calories,
            total_protein: protein,
            total_fat: 0.0,
            total_carbs: 0.0,
        }
    }

    fn day(n: u32, meals: Vec<Meal>) -> PlanDay {
        PlanDay {
            day: n,
            date: NaiveDate::from_ymd_opt(2024, 1, n).unwrap(),
            meals,
        }
    }

    #[test]
    fn test_scale_per_100g() {
        assert_eq!(scale_per_100g(389.0, 40.0), 156.0);
        assert_eq!(scale_per_100g(52.0, 150.0), 78.0);
        assert_eq!(scale_per_100g(100.0, 0.0), 0.0);
    }

    #[test]
    fn test_rescale_calories() {
        assert_eq!(rescale_calories(150.0, 100.0, 50.0), 75.0);
        assert_eq!(rescale_calories(150.0, 100.0, 250.0), 375.0);
        // zero old quantity is treated as 1 g
        assert_eq!(rescale_calories(5.0, 0.0, 10.0), 50.0);
    }

    #[test]
    fn test_meal_totals_treat_absent_macros_as_zero() {
        let totals =
            meal_totals_from_ingredients(&[ingredient(100.0, Some(5.0)), ingredient(50.0, None)]);
        assert_eq!(totals.calories, 150.0);
        assert_eq!(totals.protein, 5.0);
        assert_eq!(totals.fat, 0.0);
    }

    #[test]
    fn test_day_totals_use_stated_meal_totals() {
        let d = day(
            1,
            vec![
                meal(400.0, 20.0, vec![ingredient(1.0, None)]),
                meal(600.0, 30.0, vec![]),
            ],
        );
        let totals = day_totals(&d);
        assert_eq!(totals.calories, 1000.0);
        assert_eq!(totals.protein, 50.0);
    }

    #[test]
    fn test_recompute_meal_totals() {
        let mut m = meal(999.0, 99.0, vec![ingredient(120.0, Some(4.0)), ingredient(80.0, None)]);
        recompute_meal_totals(&mut m);
        assert_eq!(m.total_calories, 200.0);
        assert_eq!(m.total_protein, 4.0);
    }

    #[test]
    fn test_summarize_plan() {
        let plan = vec![
            day(1, vec![meal(1800.0, 100.0, vec![])]),
            day(2, vec![meal(1500.0, 90.0, vec![]), meal(100.0, 0.0, vec![])]),
            day(3, vec![]),
        ];
        let summary = summarize_plan(&plan);

        assert_eq!(summary.days.len(), 3);
        assert_eq!(summary.days[1].totals.calories, 1600.0);
        assert_eq!(summary.days[2].totals, MacroTotals::default());
        assert_eq!(summary.overall.calories, 3400.0);
        assert_eq!(summary.daily_average.calories, 1133.3);
        assert_eq!(summary.daily_average.protein, 63.3);
    }

    #[test]
    fn test_summarize_empty_plan() {
        let summary = summarize_plan(&[]);
        assert!(summary.days.is_empty());
        assert_eq!(summary.overall, MacroTotals::default());
        assert_eq!(summary.daily_average, MacroTotals::default());
    }
}
