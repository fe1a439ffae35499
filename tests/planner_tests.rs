//! Integration tests exercising the public planner API end to end.

use nutriplan::{
    build_default_catalog, daily_calorie_target, goal_type, maintenance_calories, protein_grams,
    random_meal, FoodCatalog, FoodCategory, GoalKind, MealGroup, PersonProfile, Tier,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;

/// All "{category}: {name}" labels of a tier, mapped to their calories.
fn labelled_items(catalog: &FoodCatalog, tier: Tier) -> HashMap<String, u32> {
    let mut map = HashMap::new();
    for category in FoodCategory::ALL {
        for food in &catalog.tier_table(tier)[&category] {
            map.insert(format!("{}: {}", category, food.name), food.calories);
        }
    }
    map
}

#[test]
fn goal_type_matches_weight_direction() {
    assert_eq!(
        goal_type(&PersonProfile::new(160.0, 140.0, 12.0, "medium")),
        GoalKind::Lose
    );
    assert_eq!(
        goal_type(&PersonProfile::new(120.0, 150.0, 12.0, "medium")),
        GoalKind::Gain
    );
    assert_eq!(
        goal_type(&PersonProfile::new(150.0, 150.0, 12.0, "medium")),
        GoalKind::Maintain
    );
}

#[test]
fn maintenance_values_and_ordering() {
    let low = maintenance_calories(150.0, "low");
    let medium = maintenance_calories(150.0, "medium");
    let high = maintenance_calories(150.0, "high");

    assert_eq!(low, 1800.0);
    assert_eq!(medium, 2100.0);
    assert_eq!(high, 2400.0);
    assert!(low < medium && medium < high);

    // Case-insensitive lookup
    assert_eq!(maintenance_calories(150.0, "MEDIUM"), medium);
    assert_eq!(maintenance_calories(150.0, "MeDiUM"), medium);
}

#[test]
fn calorie_targets_bracket_maintenance() {
    let maintenance = maintenance_calories(150.0, "medium");

    let gain = daily_calorie_target(&PersonProfile::new(150.0, 170.0, 10.0, "medium"));
    let lose = daily_calorie_target(&PersonProfile::new(150.0, 130.0, 10.0, "medium"));

    assert!(gain.target > maintenance);
    assert!(lose.target < maintenance);
    assert!(!gain.unhealthy);
    assert!(!lose.unhealthy);
}

#[test]
fn unhealthy_flag_tracks_adjustment_magnitude() {
    // 30 lb down in one week demands a deficit far beyond 1000 kcal/day.
    let crash = daily_calorie_target(&PersonProfile::new(180.0, 150.0, 1.0, "medium"));
    assert!(crash.unhealthy);

    // The same change over a year is mild.
    let steady = daily_calorie_target(&PersonProfile::new(180.0, 150.0, 52.0, "medium"));
    assert!(!steady.unhealthy);
}

#[test]
fn degenerate_timelines_behave_as_one_day() {
    let zero = daily_calorie_target(&PersonProfile::new(150.0, 148.0, 0.0, "medium"));
    let negative = daily_calorie_target(&PersonProfile::new(150.0, 148.0, -5.0, "medium"));

    // 2 lb * 3500 kcal over a single day.
    assert_eq!(zero.target, 2100.0 - 7000.0);
    assert_eq!(negative.target, zero.target);
    assert!(zero.unhealthy);
}

#[test]
fn protein_recommendation_depends_on_goal() {
    let lose = PersonProfile::new(150.0, 130.0, 12.0, "medium");
    let gain = PersonProfile::new(150.0, 170.0, 12.0, "medium");

    assert_eq!(protein_grams(&lose), 150.0);
    assert_eq!(protein_grams(&gain), 120.0);
}

#[test]
fn meals_hold_one_item_per_category_with_matching_total() {
    let catalog = build_default_catalog();
    let low_items = labelled_items(&catalog, Tier::Low);
    let profile = PersonProfile::new(160.0, 145.0, 10.0, "low");
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    for _ in 0..100 {
        let meal = random_meal(&catalog, &profile, &mut rng).unwrap();

        assert_eq!(meal.group, MealGroup::Low);
        assert_eq!(meal.items.len(), 4);
        assert!(meal.total_calories > 0);

        let mut sum = 0;
        for (category, entry) in FoodCategory::ALL.iter().zip(&meal.items) {
            assert!(entry.starts_with(&format!("{}: ", category)));
            sum += low_items[entry];
        }
        assert_eq!(meal.total_calories, sum);
    }
}

#[test]
fn gain_meals_come_from_the_high_table() {
    let catalog = build_default_catalog();
    let high_items = labelled_items(&catalog, Tier::High);
    let profile = PersonProfile::new(130.0, 150.0, 10.0, "high");
    let mut rng = ChaCha8Rng::seed_from_u64(2);

    for _ in 0..100 {
        let meal = random_meal(&catalog, &profile, &mut rng).unwrap();
        assert_eq!(meal.group, MealGroup::High);
        assert!(meal.items.iter().all(|item| high_items.contains_key(item)));
    }
}

#[test]
fn maintain_meals_are_balanced_and_use_both_tiers() {
    let catalog = build_default_catalog();
    let low_items = labelled_items(&catalog, Tier::Low);
    let high_items = labelled_items(&catalog, Tier::High);
    let profile = PersonProfile::new(150.0, 150.0, 10.0, "medium");
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let mut saw_low = false;
    let mut saw_high = false;

    for _ in 0..200 {
        let meal = random_meal(&catalog, &profile, &mut rng).unwrap();
        assert_eq!(meal.group, MealGroup::Balanced);

        // A meal is drawn from exactly one tier.
        let from_low = meal.items.iter().all(|i| low_items.contains_key(i));
        let from_high = meal.items.iter().all(|i| high_items.contains_key(i));
        assert!(from_low || from_high);

        saw_low |= from_low;
        saw_high |= from_high;
    }

    assert!(saw_low, "maintain never drew from the low tier");
    assert!(saw_high, "maintain never drew from the high tier");
}

#[test]
fn listing_is_sorted_with_full_row_counts() {
    let catalog = build_default_catalog();

    let low = catalog.list_foods(Tier::Low);
    let high = catalog.list_foods(Tier::High);

    assert_eq!(low.len(), 9);
    assert_eq!(high.len(), 8);

    for rows in [&low, &high] {
        for pair in rows.windows(2) {
            assert!(pair[0].calories <= pair[1].calories);
        }
    }
}

#[test]
fn shipped_catalog_passes_validation() {
    assert!(build_default_catalog().validate().is_empty());
}
