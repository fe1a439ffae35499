//! Calorie and protein math for weight goals.
//!
//! Every function here is total: defined for all real-valued inputs, never
//! panicking and never returning an error. Degenerate inputs (zero or
//! negative timelines, unknown activity levels) take documented fallback
//! paths instead of failing, and an unsafe rate of change is reported through
//! the `unhealthy` flag rather than an error.

use crate::{GoalKind, PersonProfile};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// Calories burned per pound of body weight per day, keyed by activity level
static ACTIVITY_FACTORS: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| HashMap::from([("low", 12.0), ("medium", 14.0), ("high", 16.0)]));

/// Factor applied when the activity level is not recognized (medium)
const DEFAULT_ACTIVITY_FACTOR: f64 = 14.0;

/// Calories equivalent to one pound of body mass
const CALORIES_PER_POUND: f64 = 3500.0;

/// Daily adjustment magnitude beyond which a rate of change is unsafe
const UNHEALTHY_DAILY_ADJUSTMENT: f64 = 1000.0;

/// A computed daily calorie target with its health-risk flag
#[derive(Clone, Copy, Debug, Serialize)]
pub struct CalorieTarget {
    /// Estimated daily calorie intake to reach the goal on time (kcal/day).
    pub target: f64,
    /// True when the implied daily adjustment exceeds 1000 kcal in either
    /// direction.
    pub unhealthy: bool,
}

/// Estimate daily maintenance calories from weight and activity level.
///
/// Lookup is case-insensitive; unknown levels use the medium factor. The
/// weight is not validated here, that is the caller's responsibility.
pub fn maintenance_calories(weight_lb: f64, activity_level: &str) -> f64 {
    let factor = ACTIVITY_FACTORS
        .get(activity_level.to_lowercase().as_str())
        .copied()
        .unwrap_or(DEFAULT_ACTIVITY_FACTOR);

    weight_lb * factor
}

/// Classify the goal direction from goal weight vs current weight.
///
/// Comparison is exact: only a goal weight bit-identical to the current
/// weight classifies as Maintain. Callers needing a tolerance must round
/// their inputs first.
pub fn goal_type(profile: &PersonProfile) -> GoalKind {
    if profile.goal_weight_lb < profile.current_weight_lb {
        GoalKind::Lose
    } else if profile.goal_weight_lb > profile.current_weight_lb {
        GoalKind::Gain
    } else {
        GoalKind::Maintain
    }
}

/// Estimate the daily calorie intake needed to reach the goal weight within
/// the profile's timeline.
///
/// The required body-mass change is converted to calories (3500 kcal per
/// pound) and spread over the timeline in days. A zero or negative timeline
/// is treated as a single day, so the call still succeeds and the oversized
/// adjustment surfaces through the `unhealthy` flag.
pub fn daily_calorie_target(profile: &PersonProfile) -> CalorieTarget {
    let maintenance = maintenance_calories(profile.current_weight_lb, &profile.activity_level);

    let pounds_change = profile.goal_weight_lb - profile.current_weight_lb;
    let total_calorie_shift = pounds_change * CALORIES_PER_POUND;

    // Floor at one day so a degenerate timeline cannot divide by zero or
    // flip the adjustment's sign.
    let days = (profile.timeline_weeks * 7.0).max(1.0);
    let daily_adjustment = total_calorie_shift / days;

    let unhealthy = daily_adjustment.abs() > UNHEALTHY_DAILY_ADJUSTMENT;
    let target = maintenance + daily_adjustment;

    tracing::debug!(
        "calorie target: maintenance {:.0}, adjustment {:+.0}/day over {:.0} days (unhealthy: {})",
        maintenance,
        daily_adjustment,
        days,
        unhealthy
    );

    CalorieTarget { target, unhealthy }
}

/// Recommended grams of protein per day.
///
/// Cutting favors higher protein: 1.0 g per pound when losing, 0.8 g per
/// pound otherwise.
pub fn protein_grams(profile: &PersonProfile) -> f64 {
    let multiplier = if goal_type(profile) == GoalKind::Lose {
        1.0
    } else {
        0.8
    };

    profile.current_weight_lb * multiplier
}
