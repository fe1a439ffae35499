//! Default catalog of example foods, split into low- and high-calorie tiers.
//!
//! The catalog is embedded reference data: built once, never mutated, and
//! safe to share across threads.

use crate::types::{FoodCatalog, FoodCategory, FoodItem, FoodRow, Tier};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<FoodCatalog> = Lazy::new(build_default_catalog);

/// Get a reference to the cached default catalog
pub fn default_catalog() -> &'static FoodCatalog {
    &DEFAULT_CATALOG
}

/// Build a fresh copy of the default catalog
///
/// **Note**: For production use, prefer `default_catalog()` which returns a
/// cached reference. This function is retained for testing and custom
/// catalog creation.
pub fn build_default_catalog() -> FoodCatalog {
    fn item(name: &str, calories: u32) -> FoodItem {
        FoodItem {
            name: name.into(),
            calories,
        }
    }

    let mut low_cal = HashMap::new();
    let mut high_cal = HashMap::new();

    // ========================================================================
    // Low-calorie tier
    // ========================================================================

    low_cal.insert(
        FoodCategory::Protein,
        vec![
            item("chicken breast, 100g", 165),
            item("tofu, 100g", 80),
            item("egg whites, 3 large", 50),
        ],
    );
    low_cal.insert(
        FoodCategory::Dairy,
        vec![
            item("nonfat Greek yogurt, 150g", 90),
            item("skim milk, 1 cup", 80),
        ],
    );
    low_cal.insert(
        FoodCategory::Veggies,
        vec![item("spinach, 2 cups", 20), item("broccoli, 1 cup", 55)],
    );
    low_cal.insert(
        FoodCategory::Grain,
        vec![
            item("brown rice, 1/2 cup cooked", 110),
            item("quinoa, 185g", 222),
        ],
    );

    // ========================================================================
    // High-calorie tier
    // ========================================================================

    high_cal.insert(
        FoodCategory::Protein,
        vec![
            item("peanut butter, 32g", 188),
            item("ground beef, 100g", 250),
        ],
    );
    high_cal.insert(
        FoodCategory::Dairy,
        vec![
            item("cheddar cheese, 1 oz", 115),
            item("whole milk, 1 cup", 150),
        ],
    );
    high_cal.insert(
        FoodCategory::Veggies,
        vec![
            item("sweet potato, 1 medium", 110),
            item("avocado, 1/2", 120),
        ],
    );
    high_cal.insert(
        FoodCategory::Grain,
        vec![
            item("white rice, 1 cup cooked", 200),
            item("pasta, 1 cup cooked", 220),
        ],
    );

    FoodCatalog { low_cal, high_cal }
}

impl FoodCatalog {
    /// List all foods in a tier as rows sorted ascending by calories.
    ///
    /// The sort is stable: rows with equal calories keep their catalog
    /// declaration order (categories iterate protein, dairy, veggies, grain).
    pub fn list_foods(&self, tier: Tier) -> Vec<FoodRow> {
        let table = self.tier_table(tier);
        let mut rows = Vec::new();

        for category in FoodCategory::ALL {
            if let Some(foods) = table.get(&category) {
                for food in foods {
                    rows.push(FoodRow {
                        group: tier.group_label().to_string(),
                        category,
                        food: food.name.clone(),
                        calories: food.calories,
                    });
                }
            }
        }

        rows.sort_by_key(|row| row.calories);
        rows
    }

    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid. Meal
    /// generation relies on every category being present and non-empty in
    /// both tiers; anyone extending the catalog must preserve that.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (tier, table) in [(Tier::Low, &self.low_cal), (Tier::High, &self.high_cal)] {
            for category in FoodCategory::ALL {
                match table.get(&category) {
                    None => errors.push(format!(
                        "{} table is missing the {} category",
                        tier.group_label(),
                        category
                    )),
                    Some(foods) if foods.is_empty() => errors.push(format!(
                        "{} table has no {} entries",
                        tier.group_label(),
                        category
                    )),
                    Some(foods) => {
                        for food in foods {
                            if food.name.is_empty() {
                                errors.push(format!(
                                    "{} table has a {} entry with an empty name",
                                    tier.group_label(),
                                    category
                                ));
                            }
                            if food.calories == 0 {
                                errors.push(format!(
                                    "{} table entry '{}' has zero calories",
                                    tier.group_label(),
                                    food.name
                                ));
                            }
                        }
                    }
                }
            }

            // Reject categories outside the fixed set
            if table.len() != FoodCategory::ALL.len() {
                errors.push(format!(
                    "{} table has {} categories, expected {}",
                    tier.group_label(),
                    table.len(),
                    FoodCategory::ALL.len()
                ));
            }
        }

        errors
    }
}
