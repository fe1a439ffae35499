//! Core domain types for the nutriplan system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Person profiles and their weight goals
//! - Food items, categories, and the two-tier catalog
//! - Generated meal output

use crate::config::Config;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Calorie baseline used to derive fiber and saturated-fat budgets when a
/// profile does not supply one.
pub const DEFAULT_CALORIE_BASELINE: f64 = 2000.0;

// ============================================================================
// Person Profile
// ============================================================================

/// A person's weight goals and activity profile.
///
/// Weights are in pounds, the timeline in weeks. The fiber and saturated-fat
/// budgets are derived from the calorie baseline once at construction and are
/// never recomputed, so the baseline is effectively immutable afterwards.
#[derive(Clone, Debug, Serialize)]
pub struct PersonProfile {
    pub current_weight_lb: f64,
    pub goal_weight_lb: f64,
    /// May be zero or negative; goal math floors the implied span at one day.
    pub timeline_weeks: f64,
    /// "low", "medium", or "high", case-insensitive. Unrecognized values fall
    /// back to the medium factor at lookup time.
    pub activity_level: String,
    /// Reserved: flags saturated-fat concerns. Not consumed by any
    /// calculation yet.
    pub health_concern: bool,
    calorie_baseline: f64,
    fiber_grams: f64,
    sat_fat_grams: f64,
}

impl PersonProfile {
    /// Create a profile with the default calorie baseline and no recorded
    /// health concern.
    pub fn new(
        current_weight_lb: f64,
        goal_weight_lb: f64,
        timeline_weeks: f64,
        activity_level: impl Into<String>,
    ) -> Self {
        Self::with_baseline(
            current_weight_lb,
            goal_weight_lb,
            timeline_weeks,
            activity_level,
            DEFAULT_CALORIE_BASELINE,
        )
    }

    /// Create a profile with an explicit calorie baseline.
    pub fn with_baseline(
        current_weight_lb: f64,
        goal_weight_lb: f64,
        timeline_weeks: f64,
        activity_level: impl Into<String>,
        calorie_baseline: f64,
    ) -> Self {
        Self {
            current_weight_lb,
            goal_weight_lb,
            timeline_weeks,
            activity_level: activity_level.into(),
            health_concern: false,
            calorie_baseline,
            fiber_grams: (calorie_baseline / 1000.0) * 14.0,
            sat_fat_grams: (calorie_baseline * 0.07) / 9.0,
        }
    }

    /// Create a profile with the calorie baseline taken from configuration.
    pub fn from_config(
        config: &Config,
        current_weight_lb: f64,
        goal_weight_lb: f64,
        timeline_weeks: f64,
        activity_level: impl Into<String>,
    ) -> Self {
        Self::with_baseline(
            current_weight_lb,
            goal_weight_lb,
            timeline_weeks,
            activity_level,
            config.planner.calorie_baseline,
        )
    }

    /// Record a saturated-fat health concern on the profile.
    pub fn with_health_concern(mut self, health_concern: bool) -> Self {
        self.health_concern = health_concern;
        self
    }

    /// The calorie baseline the derived budgets were computed from.
    pub fn calorie_baseline(&self) -> f64 {
        self.calorie_baseline
    }

    /// Daily fiber budget in grams (14 g per 1000 kcal of baseline).
    pub fn fiber_grams(&self) -> f64 {
        self.fiber_grams
    }

    /// Daily saturated-fat budget in grams (7% of baseline, 9 kcal per gram).
    pub fn sat_fat_grams(&self) -> f64 {
        self.sat_fat_grams
    }
}

/// Direction of a weight goal relative to current weight
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GoalKind {
    Lose,
    Gain,
    Maintain,
}

impl GoalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalKind::Lose => "lose",
            GoalKind::Gain => "gain",
            GoalKind::Maintain => "maintain",
        }
    }
}

impl fmt::Display for GoalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Food Catalog Types
// ============================================================================

/// Food categories making up a meal, in fixed catalog order
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    Protein,
    Dairy,
    Veggies,
    Grain,
}

impl FoodCategory {
    /// All categories in the order meals and listings iterate them.
    pub const ALL: [FoodCategory; 4] = [
        FoodCategory::Protein,
        FoodCategory::Dairy,
        FoodCategory::Veggies,
        FoodCategory::Grain,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodCategory::Protein => "protein",
            FoodCategory::Dairy => "dairy",
            FoodCategory::Veggies => "veggies",
            FoodCategory::Grain => "grain",
        }
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calorie tier of the catalog tables
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    #[default]
    Low,
    High,
}

impl Tier {
    /// Group label used in listing rows.
    pub fn group_label(&self) -> &'static str {
        match self {
            Tier::Low => "low_cal",
            Tier::High => "high_cal",
        }
    }
}

/// A single food entry: display name (with portion) and calories
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FoodItem {
    pub name: String,
    pub calories: u32,
}

/// The two-tier catalog of example foods, keyed by category
///
/// Built once and treated as read-only; see [`crate::catalog::default_catalog`].
#[derive(Clone, Debug)]
pub struct FoodCatalog {
    pub low_cal: HashMap<FoodCategory, Vec<FoodItem>>,
    pub high_cal: HashMap<FoodCategory, Vec<FoodItem>>,
}

impl FoodCatalog {
    /// Table for the given tier.
    pub fn tier_table(&self, tier: Tier) -> &HashMap<FoodCategory, Vec<FoodItem>> {
        match tier {
            Tier::Low => &self.low_cal,
            Tier::High => &self.high_cal,
        }
    }
}

/// One row of a catalog listing
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct FoodRow {
    pub group: String,
    pub category: FoodCategory,
    pub food: String,
    pub calories: u32,
}

// ============================================================================
// Meal Output
// ============================================================================

/// Which side of the catalog a generated meal came from
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MealGroup {
    Low,
    High,
    /// Maintain goals draw from either tier at random.
    Balanced,
}

impl MealGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealGroup::Low => "low",
            MealGroup::High => "high",
            MealGroup::Balanced => "balanced",
        }
    }
}

impl fmt::Display for MealGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generated example meal
#[derive(Clone, Debug, Serialize)]
pub struct Meal {
    /// One "{category}: {food name}" entry per catalog category.
    pub items: Vec<String>,
    pub total_calories: u32,
    pub group: MealGroup,
}
