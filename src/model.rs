use serde::Serialize;

/// Serving count and ingredient lines found in a recipe document
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecipeDocument {
    /// Serving count the recipe was written for
    pub base_portions: u32,
    /// Ingredient lines in document order
    pub ingredients: Vec<String>,
}

/// An ingredient list rendered for a chosen serving count
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaledRecipe {
    pub base_portions: u32,
    pub target_portions: u32,
    /// Display label such as "6 Portionen"
    pub label: String,
    pub ingredients: Vec<String>,
}
