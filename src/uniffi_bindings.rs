//! UniFFI bindings for recipe-scaler
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! Everything here is synchronous; the scaler performs no I/O.

use std::fmt;

use crate::{ParsedIngredient, ScaleError, ScaledRecipe};

// Re-export UniFFI macro
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible parsed ingredient line
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiParsedIngredient {
    /// Parsed amount, `None` for lines without one
    pub amount: Option<f64>,
    /// Canonical unit spelling, `None` for lines without an amount
    pub unit: Option<String>,
    /// Text after amount and unit, or the whole line
    pub remainder: String,
    pub has_amount: bool,
    /// True for packet/piece units rendered as whole counts
    pub is_discrete: bool,
}

impl From<ParsedIngredient> for FfiParsedIngredient {
    fn from(parsed: ParsedIngredient) -> Self {
        FfiParsedIngredient {
            is_discrete: parsed.unit_class() == Some(crate::UnitClass::Discrete),
            amount: parsed.amount,
            unit: parsed.unit.map(str::to_string),
            remainder: parsed.remainder,
            has_amount: parsed.has_amount,
        }
    }
}

/// FFI-compatible scaled recipe
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiScaledRecipe {
    pub base_portions: u32,
    pub target_portions: u32,
    /// Display label such as "6 Portionen"
    pub label: String,
    pub ingredients: Vec<String>,
}

impl From<ScaledRecipe> for FfiScaledRecipe {
    fn from(recipe: ScaledRecipe) -> Self {
        FfiScaledRecipe {
            base_portions: recipe.base_portions,
            target_portions: recipe.target_portions,
            label: recipe.label,
            ingredients: recipe.ingredients,
        }
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiScaleError {
    /// Invalid serving count or bounds
    InvalidInput { message: String },
    /// The document could not be read as a recipe
    ExtractionError { message: String },
    /// Builder configuration error
    BuilderError { message: String },
    /// Configuration or I/O error
    ConfigError { message: String },
}

impl fmt::Display for FfiScaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiScaleError::InvalidInput { message } => write!(f, "Invalid input: {}", message),
            FfiScaleError::ExtractionError { message } => {
                write!(f, "Extraction error: {}", message)
            }
            FfiScaleError::BuilderError { message } => write!(f, "Builder error: {}", message),
            FfiScaleError::ConfigError { message } => write!(f, "Config error: {}", message),
        }
    }
}

impl std::error::Error for FfiScaleError {}

impl From<ScaleError> for FfiScaleError {
    fn from(err: ScaleError) -> Self {
        let message = err.to_string();
        match err {
            ScaleError::InvalidArgument(_) => FfiScaleError::InvalidInput { message },
            ScaleError::MissingServings
            | ScaleError::MissingIngredients
            | ScaleError::NoExtractorMatched => FfiScaleError::ExtractionError { message },
            ScaleError::BuilderError(_) => FfiScaleError::BuilderError { message },
            ScaleError::Io(_) | ScaleError::ConfigError(_) => {
                FfiScaleError::ConfigError { message }
            }
        }
    }
}

/// Scale ingredient lines from `base_portions` to `target_portions`
///
/// # Returns
/// One rendered line per input line, in the same order
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn scale_ingredients(
    lines: Vec<String>,
    base_portions: u32,
    target_portions: u32,
) -> Result<Vec<String>, FfiScaleError> {
    Ok(crate::scale(lines.as_slice(), base_portions, target_portions)?)
}

/// Extract the ingredient list from an HTML page and scale it
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn scale_html(html: String, target_portions: u32) -> Result<FfiScaledRecipe, FfiScaleError> {
    Ok(crate::scale_html(&html, target_portions)?.into())
}

/// Split a single ingredient line into amount, unit and text
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn parse_ingredient(line: String) -> FfiParsedIngredient {
    crate::parse(&line).into()
}

/// Display label for a serving count ("1 Portion", "4 Portionen")
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn portion_label(portions: u32) -> String {
    crate::portion_label(portions)
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ffi_parsed_ingredient_conversion() {
        let parsed = parse_ingredient("1 Päckchen Vanillezucker".to_string());
        assert_eq!(parsed.amount, Some(1.0));
        assert_eq!(parsed.unit.as_deref(), Some("Päckchen"));
        assert_eq!(parsed.remainder, "Vanillezucker");
        assert!(parsed.has_amount);
        assert!(parsed.is_discrete);

        let parsed = parse_ingredient("Puderzucker".to_string());
        assert!(!parsed.has_amount);
        assert!(!parsed.is_discrete);
    }

    #[test]
    fn test_scale_ingredients() {
        let scaled = scale_ingredients(vec!["200 g Zucker".to_string()], 4, 2).unwrap();
        assert_eq!(scaled, vec!["100 g Zucker"]);
    }

    #[test]
    fn test_error_conversion() {
        let err = scale_ingredients(vec![], 0, 2).unwrap_err();
        assert!(matches!(err, FfiScaleError::InvalidInput { .. }));
        assert!(err.to_string().starts_with("Invalid input"));
    }

    #[test]
    fn test_get_version() {
        let version = get_version();
        assert!(!version.is_empty());
    }
}
