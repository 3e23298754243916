use std::cmp::Ordering;
use tracing::debug;

use crate::error::RecipeError;
use crate::recipe::Recipe;

/// Calories above which a recipe raises a [`CalorieAlert`]
pub const DEFAULT_CALORIE_THRESHOLD: u32 = 300;

/// Raised when a recipe's total calories exceed the collection's threshold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalorieAlert {
    pub recipe: String,
    pub total_calories: u64,
    pub threshold: u32,
}

impl std::fmt::Display for CalorieAlert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Warning: Recipe '{}' exceeds {} calories ({} total).",
            self.recipe, self.threshold, self.total_calories
        )
    }
}

/// Result of displaying a recipe by name
#[derive(Debug, Clone, PartialEq)]
pub struct Displayed {
    pub rendered: String,
    pub alert: Option<CalorieAlert>,
}

/// Result of resetting a recipe by name
#[derive(Debug, Clone, PartialEq)]
pub struct ResetOutcome {
    pub rendered: String,
    /// Set when the quantities could not be restored; the recipe is unchanged
    pub warning: Option<RecipeError>,
}

/// The recipes entered during a session.
///
/// Names are matched case-insensitively. Duplicates are allowed; lookups
/// return the first match in the current order.
#[derive(Debug, Clone)]
pub struct RecipeCollection {
    recipes: Vec<Recipe>,
    calorie_threshold: u32,
}

impl Default for RecipeCollection {
    fn default() -> Self {
        Self::with_threshold(DEFAULT_CALORIE_THRESHOLD)
    }
}

impl RecipeCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(calorie_threshold: u32) -> Self {
        Self {
            recipes: Vec::new(),
            calorie_threshold,
        }
    }

    pub fn calorie_threshold(&self) -> u32 {
        self.calorie_threshold
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    /// Append a recipe, returning an alert if it is over the threshold
    pub fn add(&mut self, recipe: Recipe) -> Option<CalorieAlert> {
        let alert = self.check_calories(&recipe);
        debug!(
            recipe = %recipe.name(),
            calories = recipe.total_calories(),
            "Added recipe"
        );
        self.recipes.push(recipe);
        alert
    }

    /// Recipe names in case-insensitive ascending order.
    ///
    /// The stored order is sorted as well, so later iteration and duplicate
    /// lookups follow the listed order.
    pub fn list(&mut self) -> Vec<String> {
        self.recipes.sort_by(|a, b| compare_names(a.name(), b.name()));
        self.recipes.iter().map(|r| r.name().to_string()).collect()
    }

    pub fn find_by_name(&self, name: &str) -> Result<&Recipe, RecipeError> {
        self.recipes
            .iter()
            .find(|r| names_match(r.name(), name))
            .ok_or_else(|| RecipeError::not_found(name))
    }

    fn find_by_name_mut(&mut self, name: &str) -> Result<&mut Recipe, RecipeError> {
        self.recipes
            .iter_mut()
            .find(|r| names_match(r.name(), name))
            .ok_or_else(|| RecipeError::not_found(name))
    }

    /// Render a recipe and re-check it against the calorie threshold
    pub fn display_by_name(&self, name: &str) -> Result<Displayed, RecipeError> {
        let recipe = self.find_by_name(name)?;
        Ok(Displayed {
            rendered: recipe.render(),
            alert: self.check_calories(recipe),
        })
    }

    /// Scale a recipe's current quantities by `factor` and render it
    pub fn scale_by_name(&mut self, name: &str, factor: f64) -> Result<String, RecipeError> {
        let recipe = self.find_by_name_mut(name)?;
        recipe.scale(factor);
        Ok(recipe.render())
    }

    /// Restore a recipe's original quantities and render it.
    ///
    /// The recipe is rendered even when the reset is refused; the refusal is
    /// carried in [`ResetOutcome::warning`].
    pub fn reset_by_name(&mut self, name: &str) -> Result<ResetOutcome, RecipeError> {
        let recipe = self.find_by_name_mut(name)?;
        let warning = recipe.reset().err();
        Ok(ResetOutcome {
            rendered: recipe.render(),
            warning,
        })
    }

    /// Remove every recipe, returning how many were removed
    pub fn clear(&mut self) -> usize {
        let removed = self.recipes.len();
        self.recipes.clear();
        debug!(removed, "Cleared recipes");
        removed
    }

    fn check_calories(&self, recipe: &Recipe) -> Option<CalorieAlert> {
        let total_calories = recipe.total_calories();
        (total_calories > u64::from(self.calorie_threshold)).then(|| CalorieAlert {
            recipe: recipe.name().to_string(),
            total_calories,
            threshold: self.calorie_threshold,
        })
    }
}

fn names_match(a: &str, b: &str) -> bool {
    compare_names(a, b) == Ordering::Equal
}

/// Case-insensitive ordering that folds to upper case, so `_` sorts after letters
fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_uppercase)
        .cmp(b.chars().flat_map(char::to_uppercase))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingredient::{FoodGroup, Ingredient};

    fn recipe_with_calories(name: &str, calories: &[u32]) -> Recipe {
        let mut recipe = Recipe::new(name);
        for (i, cal) in calories.iter().enumerate() {
            recipe.add_ingredient(Ingredient::new(
                format!("item {}", i + 1),
                10.0,
                "g",
                *cal,
                FoodGroup::Grains,
            ));
        }
        recipe
    }

    fn oats() -> Recipe {
        let mut recipe = Recipe::new("Oats");
        recipe.add_ingredient(Ingredient::new("Rolled oats", 100.0, "g", 350, FoodGroup::Grains));
        recipe.add_step("Simmer in water for five minutes");
        recipe
    }

    #[test]
    fn test_add_over_threshold_alerts() {
        let mut collection = RecipeCollection::new();
        let alert = collection.add(recipe_with_calories("Stew", &[200, 101]));
        assert_eq!(
            alert,
            Some(CalorieAlert {
                recipe: "Stew".to_string(),
                total_calories: 301,
                threshold: 300,
            })
        );
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_add_at_threshold_does_not_alert() {
        let mut collection = RecipeCollection::new();
        assert!(collection.add(recipe_with_calories("Salad", &[150, 150])).is_none());
        assert!(collection.add(recipe_with_calories("Water", &[])).is_none());
    }

    #[test]
    fn test_add_huge_calories_does_not_overflow() {
        let mut collection = RecipeCollection::new();
        let alert = collection.add(recipe_with_calories("Feast", &[3_000_000_000, 3_000_000_000]));
        assert_eq!(alert.map(|a| a.total_calories), Some(6_000_000_000));
    }

    #[test]
    fn test_custom_threshold() {
        let mut collection = RecipeCollection::with_threshold(100);
        assert!(collection.add(recipe_with_calories("Snack", &[101])).is_some());
        assert!(collection.add(recipe_with_calories("Tea", &[100])).is_none());
    }

    #[test]
    fn test_list_sorts_case_insensitively() {
        let mut collection = RecipeCollection::new();
        collection.add(Recipe::new("banana bread"));
        collection.add(Recipe::new("Apple Pie"));
        collection.add(Recipe::new("cherry tart"));

        assert_eq!(
            collection.list(),
            vec!["Apple Pie", "banana bread", "cherry tart"]
        );
    }

    #[test]
    fn test_list_sorts_punctuation_after_letters() {
        let mut collection = RecipeCollection::new();
        collection.add(Recipe::new("_zest"));
        collection.add(Recipe::new("apple"));
        collection.add(Recipe::new("[brackets]"));
        collection.add(Recipe::new("Zucchini"));

        assert_eq!(
            collection.list(),
            vec!["apple", "Zucchini", "[brackets]", "_zest"]
        );
    }

    #[test]
    fn test_list_reorders_storage() {
        let mut collection = RecipeCollection::new();
        collection.add(Recipe::new("b"));
        collection.add(Recipe::new("A"));
        collection.list();

        let stored: Vec<&str> = collection.iter().map(Recipe::name).collect();
        assert_eq!(stored, vec!["A", "b"]);
    }

    #[test]
    fn test_find_by_name_ignores_case() {
        let mut collection = RecipeCollection::new();
        collection.add(Recipe::new("Pie"));
        assert_eq!(collection.find_by_name("PIE").unwrap().name(), "Pie");
        assert_eq!(collection.find_by_name("pie").unwrap().name(), "Pie");
    }

    #[test]
    fn test_find_by_name_missing() {
        let collection = RecipeCollection::new();
        assert_eq!(
            collection.find_by_name("missing").unwrap_err(),
            RecipeError::NotFound {
                name: "missing".to_string()
            }
        );
    }

    #[test]
    fn test_duplicates_coexist_and_first_wins() {
        let mut collection = RecipeCollection::new();
        collection.add(recipe_with_calories("Soup", &[10]));
        collection.add(recipe_with_calories("soup", &[20]));
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.find_by_name("SOUP").unwrap().total_calories(), 10);
    }

    #[test]
    fn test_display_by_name_alerts_every_time() {
        let mut collection = RecipeCollection::new();
        collection.add(oats());

        for _ in 0..2 {
            let displayed = collection.display_by_name("oats").unwrap();
            assert!(displayed.rendered.contains("Recipe: Oats"));
            assert_eq!(displayed.alert.unwrap().recipe, "Oats");
        }
    }

    #[test]
    fn test_display_by_name_missing() {
        let collection = RecipeCollection::new();
        let err = collection.display_by_name("Ghost").unwrap_err();
        assert_eq!(err.to_string(), "Recipe 'Ghost' not found.");
    }

    #[test]
    fn test_oats_scale_and_reset() {
        let mut collection = RecipeCollection::new();
        let alert = collection.add(oats());
        assert_eq!(alert.map(|a| a.recipe), Some("Oats".to_string()));

        let rendered = collection.scale_by_name("Oats", 2.0).unwrap();
        assert!(rendered.contains("- Rolled oats: 200 g"));
        assert_eq!(
            collection.find_by_name("Oats").unwrap().ingredients()[0].quantity(),
            200.0
        );

        let outcome = collection.reset_by_name("oats").unwrap();
        assert!(outcome.warning.is_none());
        assert!(outcome.rendered.contains("- Rolled oats: 100 g"));
        assert_eq!(
            collection.find_by_name("Oats").unwrap().ingredients()[0].quantity(),
            100.0
        );
    }

    #[test]
    fn test_scale_and_reset_missing() {
        let mut collection = RecipeCollection::new();
        collection.add(oats());
        assert!(matches!(
            collection.scale_by_name("Porridge", 2.0),
            Err(RecipeError::NotFound { .. })
        ));
        assert!(matches!(
            collection.reset_by_name("Porridge"),
            Err(RecipeError::NotFound { .. })
        ));
        // Untouched
        assert_eq!(
            collection.find_by_name("Oats").unwrap().ingredients()[0].quantity(),
            100.0
        );
    }

    #[test]
    fn test_reset_inconsistent_still_renders() {
        let mut recipe = oats();
        recipe.scale(2.0);
        recipe.forget_last_original_quantity();

        let mut collection = RecipeCollection::new();
        collection.add(recipe);

        let outcome = collection.reset_by_name("Oats").unwrap();
        assert!(matches!(
            outcome.warning,
            Some(RecipeError::InconsistentState { originals: 0, ingredients: 1, .. })
        ));
        assert!(outcome.rendered.contains("- Rolled oats: 200 g"));
    }

    #[test]
    fn test_clear() {
        let mut collection = RecipeCollection::new();
        collection.add(oats());
        collection.add(Recipe::new("Toast"));
        assert_eq!(collection.clear(), 2);
        assert!(collection.is_empty());
        assert!(collection.list().is_empty());
        assert_eq!(collection.clear(), 0);
    }

    #[test]
    fn test_alert_message() {
        let alert = CalorieAlert {
            recipe: "Oats".to_string(),
            total_calories: 350,
            threshold: 300,
        };
        assert_eq!(
            alert.to_string(),
            "Warning: Recipe 'Oats' exceeds 300 calories (350 total)."
        );
    }
}
