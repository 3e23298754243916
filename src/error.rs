use thiserror::Error;

/// Errors raised by the recipe model and collection.
///
/// None of these are fatal: the interactive session reports them and keeps
/// running.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecipeError {
    #[error("Recipe '{name}' not found.")]
    NotFound { name: String },

    #[error(
        "Original quantities not found for all ingredients of '{recipe}' \
         ({originals} recorded, {ingredients} ingredients)."
    )]
    InconsistentState {
        recipe: String,
        originals: usize,
        ingredients: usize,
    },

    #[error("Unknown food group '{0}'")]
    UnknownFoodGroup(String),

    #[error("Invalid quantity '{0}'")]
    InvalidQuantity(String),
}

impl RecipeError {
    pub(crate) fn not_found(name: &str) -> Self {
        RecipeError::NotFound {
            name: name.to_string(),
        }
    }
}
