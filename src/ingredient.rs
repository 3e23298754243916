use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::RecipeError;

/// Fixed classification of an ingredient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoodGroup {
    Grains,
    Fruits,
    Vegetables,
    Proteins,
    Dairy,
    Fats,
}

impl FoodGroup {
    /// All groups, in declaration order
    pub const ALL: [FoodGroup; 6] = [
        FoodGroup::Grains,
        FoodGroup::Fruits,
        FoodGroup::Vegetables,
        FoodGroup::Proteins,
        FoodGroup::Dairy,
        FoodGroup::Fats,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FoodGroup::Grains => "Grains",
            FoodGroup::Fruits => "Fruits",
            FoodGroup::Vegetables => "Vegetables",
            FoodGroup::Proteins => "Proteins",
            FoodGroup::Dairy => "Dairy",
            FoodGroup::Fats => "Fats",
        }
    }
}

impl std::fmt::Display for FoodGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for FoodGroup {
    type Err = RecipeError;

    /// Parse a group name, ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        FoodGroup::ALL
            .into_iter()
            .find(|group| group.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RecipeError::UnknownFoodGroup(wanted.to_string()))
    }
}

/// A single ingredient line of a recipe.
///
/// Every field is fixed at construction except `quantity`, which only the
/// owning [`Recipe`](crate::recipe::Recipe) changes when scaling or resetting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    name: String,
    quantity: f64,
    unit: String,
    calories: u32,
    group: FoodGroup,
}

impl Ingredient {
    pub fn new(
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        calories: u32,
        group: FoodGroup,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
            calories,
            group,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn calories(&self) -> u32 {
        self.calories
    }

    pub fn group(&self) -> FoodGroup {
        self.group
    }

    pub(crate) fn set_quantity(&mut self, quantity: f64) {
        self.quantity = quantity;
    }
}

/// Parse quantity text entered by the user into a finite number
pub fn parse_quantity(text: &str) -> Result<f64, RecipeError> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(RecipeError::InvalidQuantity(trimmed.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_group_parse_ignores_case() {
        assert_eq!("dairy".parse::<FoodGroup>().unwrap(), FoodGroup::Dairy);
        assert_eq!("DAIRY".parse::<FoodGroup>().unwrap(), FoodGroup::Dairy);
        assert_eq!(" Grains ".parse::<FoodGroup>().unwrap(), FoodGroup::Grains);
    }

    #[test]
    fn test_food_group_parse_unknown() {
        let err = "Sweets".parse::<FoodGroup>().unwrap_err();
        assert_eq!(err, RecipeError::UnknownFoodGroup("Sweets".to_string()));
    }

    #[test]
    fn test_food_group_display_round_trips_every_group() {
        for group in FoodGroup::ALL {
            assert_eq!(group.to_string().parse::<FoodGroup>().unwrap(), group);
        }
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("100").unwrap(), 100.0);
        assert_eq!(parse_quantity(" 0.5 ").unwrap(), 0.5);
        assert!(matches!(
            parse_quantity("a pinch"),
            Err(RecipeError::InvalidQuantity(_))
        ));
        assert!(parse_quantity("NaN").is_err());
        assert!(parse_quantity("inf").is_err());
    }

    #[test]
    fn test_ingredient_accessors() {
        let oats = Ingredient::new("Oats", 100.0, "g", 350, FoodGroup::Grains);
        assert_eq!(oats.name(), "Oats");
        assert_eq!(oats.quantity(), 100.0);
        assert_eq!(oats.unit(), "g");
        assert_eq!(oats.calories(), 350);
        assert_eq!(oats.group(), FoodGroup::Grains);
    }
}
