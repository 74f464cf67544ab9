// Nutrition: per-100 g scaling, meal/day/plan totals, and public food lookup.

pub mod food_lookup;
pub mod handlers;
pub mod totals;
