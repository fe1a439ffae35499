#![forbid(unsafe_code)]

//! Core domain model and business logic for the nutriplan system.
//!
//! This crate provides:
//! - Goal math (maintenance calories, daily calorie targets, protein)
//! - A static two-tier food catalog with sorted listing
//! - Randomized example-meal assembly conditioned on goal direction

pub mod types;
pub mod error;
pub mod goals;
pub mod catalog;
pub mod meal;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use goals::{daily_calorie_target, goal_type, maintenance_calories, protein_grams, CalorieTarget};
pub use catalog::{build_default_catalog, default_catalog};
pub use config::Config;
pub use meal::random_meal;
