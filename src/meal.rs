//! Random meal assembly conditioned on goal direction.
//!
//! Losing pulls from the low-calorie table, gaining from the high-calorie
//! table, and maintaining flips a fair coin between the two. One item is
//! chosen uniformly from every category.

use crate::goals::goal_type;
use crate::types::{FoodCatalog, FoodCategory, GoalKind, Meal, MealGroup, PersonProfile, Tier};
use crate::{Error, Result};
use rand::seq::SliceRandom;
use rand::Rng;

/// Assemble a randomized example meal for the given profile.
///
/// The generator is injected so callers can pass a seeded source for
/// reproducible output. Selection is uniform within each category.
///
/// Errors only if a category table is empty, which the shipped catalog
/// guarantees never happens (see [`FoodCatalog::validate`]).
pub fn random_meal<R: Rng + ?Sized>(
    catalog: &FoodCatalog,
    profile: &PersonProfile,
    rng: &mut R,
) -> Result<Meal> {
    let (tier, group) = match goal_type(profile) {
        GoalKind::Lose => (Tier::Low, MealGroup::Low),
        GoalKind::Gain => (Tier::High, MealGroup::High),
        GoalKind::Maintain => {
            // 50/50 between tiers, independent per call
            let tier = if rng.gen_bool(0.5) { Tier::Low } else { Tier::High };
            (tier, MealGroup::Balanced)
        }
    };

    tracing::debug!(
        "assembling {} meal from the {} table",
        group,
        tier.group_label()
    );

    let table = catalog.tier_table(tier);
    let mut items = Vec::with_capacity(FoodCategory::ALL.len());
    let mut total_calories: u32 = 0;

    for category in FoodCategory::ALL {
        let food = table
            .get(&category)
            .and_then(|foods| foods.choose(rng))
            .ok_or_else(|| {
                Error::Selection(format!(
                    "no {} entries in the {} table",
                    category,
                    tier.group_label()
                ))
            })?;

        items.push(format!("{}: {}", category, food.name));
        total_calories += food.calories;
    }

    Ok(Meal {
        items,
        total_calories,
        group,
    })
}
