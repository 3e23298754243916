//! recipebook - a console recipe manager
//!
//! The recipe model lives in [`ingredient`], [`recipe`] and [`collection`];
//! the interactive shell in [`commands::menu`] drives it.

pub mod cli;
pub mod collection;
pub mod commands;
pub mod config;
pub mod error;
pub mod ingredient;
pub mod prompt;
pub mod recipe;
pub mod telemetry;
pub mod templates;

pub use collection::{CalorieAlert, Displayed, RecipeCollection, ResetOutcome};
pub use error::RecipeError;
pub use ingredient::{FoodGroup, Ingredient};
pub use recipe::Recipe;
