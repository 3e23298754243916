use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use tracing::{debug, warn};

use crate::error::RecipeError;
use crate::ingredient::Ingredient;

/// A named recipe with its ingredients and preparation steps.
///
/// Each ingredient's quantity at the time it was added is recorded in
/// `original_quantities`, index for index, so that [`Recipe::reset`] can undo
/// any number of [`Recipe::scale`] calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    name: String,
    ingredients: Vec<Ingredient>,
    steps: Vec<String>,
    original_quantities: Vec<f64>,
}

impl Recipe {
    /// Create an empty recipe
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ingredients: Vec::new(),
            steps: Vec::new(),
            original_quantities: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Quantities recorded at entry, parallel to `ingredients()`
    pub fn original_quantities(&self) -> &[f64] {
        &self.original_quantities
    }

    /// Append an ingredient and record its quantity as the reset baseline
    pub fn add_ingredient(&mut self, ingredient: Ingredient) {
        self.original_quantities.push(ingredient.quantity());
        self.ingredients.push(ingredient);
    }

    pub fn add_step(&mut self, step: impl Into<String>) {
        self.steps.push(step.into());
    }

    /// Multiply every ingredient's current quantity by `factor`.
    ///
    /// Scaling compounds: calling `scale(2.0)` twice quadruples the original
    /// quantities. The factor is not validated, so zero or negative factors
    /// yield zero or negative quantities.
    pub fn scale(&mut self, factor: f64) {
        for ingredient in &mut self.ingredients {
            ingredient.set_quantity(ingredient.quantity() * factor);
        }
        debug!(recipe = %self.name, factor, "Scaled recipe");
    }

    /// Restore every ingredient's quantity to the value recorded at entry.
    ///
    /// Leaves the recipe untouched and returns
    /// [`RecipeError::InconsistentState`] if the recorded quantities do not
    /// line up with the ingredients.
    pub fn reset(&mut self) -> Result<(), RecipeError> {
        if self.original_quantities.len() != self.ingredients.len() {
            warn!(
                recipe = %self.name,
                originals = self.original_quantities.len(),
                ingredients = self.ingredients.len(),
                "Refusing to reset recipe with inconsistent quantities"
            );
            return Err(RecipeError::InconsistentState {
                recipe: self.name.clone(),
                originals: self.original_quantities.len(),
                ingredients: self.ingredients.len(),
            });
        }

        for (ingredient, original) in self
            .ingredients
            .iter_mut()
            .zip(self.original_quantities.iter())
        {
            ingredient.set_quantity(*original);
        }
        debug!(recipe = %self.name, "Reset recipe quantities");
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn forget_last_original_quantity(&mut self) {
        self.original_quantities.pop();
    }

    /// Whether any quantity currently differs from its original
    pub fn is_scaled(&self) -> bool {
        self.ingredients
            .iter()
            .zip(self.original_quantities.iter())
            .any(|(ingredient, original)| ingredient.quantity() != *original)
    }

    /// Sum of ingredient calories, widened so large entries cannot overflow
    pub fn total_calories(&self) -> u64 {
        self.ingredients
            .iter()
            .map(|ingredient| u64::from(ingredient.calories()))
            .sum()
    }

    /// Human-readable description of the recipe
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Recipe: {}", self.name);
        let _ = writeln!(out, "Ingredients:");
        for ingredient in &self.ingredients {
            let _ = writeln!(
                out,
                "- {}: {} {} ({}, {} calories)",
                ingredient.name(),
                ingredient.quantity(),
                ingredient.unit(),
                ingredient.group(),
                ingredient.calories()
            );
        }
        let _ = writeln!(out, "Total calories: {}", self.total_calories());
        let _ = writeln!(out);
        let _ = writeln!(out, "Steps:");
        for (i, step) in self.steps.iter().enumerate() {
            let _ = writeln!(out, "{}. {}", i + 1, step);
        }
        out
    }
}

impl std::fmt::Display for Recipe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
