use log::debug;

use crate::config::ScalerConfig;
use crate::engine::ScalingEngine;
use crate::error::ScaleError;
use crate::extractors::extract_document_with_order;
use crate::model::ScaledRecipe;
use crate::servings::{parse_base_portions, portion_label, ServingControl};

/// Represents the input source for an ingredient list
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Ingredient lines given directly
    Lines(Vec<String>),
    /// Plain text, one ingredient per line
    Text(String),
    /// HTML recipe page to extract the list from
    Html(String),
}

/// Builder for configuring and executing a scaling run
#[derive(Debug, Default)]
pub struct RecipeScalerBuilder {
    source: Option<InputSource>,
    base_portions: Option<u32>,
    target_portions: Option<u32>,
    config: Option<ScalerConfig>,
}

impl RecipeScalerBuilder {
    /// Use the given ingredient lines as input
    ///
    /// # Example
    /// ```
    /// use recipe_scaler::RecipeScaler;
    ///
    /// let builder = RecipeScaler::builder()
    ///     .lines(["200 g Zucker", "3 Stück Eier"]);
    /// ```
    pub fn lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source = Some(InputSource::Lines(
            lines.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Use plain text as input, one ingredient per non-empty line
    ///
    /// A line such as "Portionen: 4" is read as the base serving count
    /// instead of an ingredient when no base was set explicitly.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.source = Some(InputSource::Text(text.into()));
        self
    }

    /// Use an HTML recipe page as input
    ///
    /// The serving count and ingredient list are extracted from the page.
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.source = Some(InputSource::Html(html.into()));
        self
    }

    /// Set the serving count the recipe was written for
    ///
    /// Overrides a count found in the input.
    pub fn base_portions(mut self, portions: u32) -> Self {
        self.base_portions = Some(portions);
        self
    }

    /// Set the serving count to scale to
    pub fn target_portions(mut self, portions: u32) -> Self {
        self.target_portions = Some(portions);
        self
    }

    /// Use explicit configuration instead of the defaults
    pub fn config(mut self, config: ScalerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build and execute the scaling run
    ///
    /// # Errors
    /// Returns `ScaleError` if:
    /// - No input source was specified
    /// - No base serving count was given or found
    /// - An explicit target is outside the configured portion bounds
    /// - Extraction from HTML fails
    ///
    /// # Example
    /// ```
    /// use recipe_scaler::RecipeScaler;
    ///
    /// let scaled = RecipeScaler::builder()
    ///     .lines(["200 g Zucker"])
    ///     .base_portions(4)
    ///     .target_portions(6)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(scaled.ingredients, ["300 g Zucker"]);
    /// assert_eq!(scaled.label, "6 Portionen");
    /// ```
    pub fn build(self) -> Result<ScaledRecipe, ScaleError> {
        let source = self.source.ok_or_else(|| {
            ScaleError::BuilderError(
                "No input source specified. Use .lines(), .text() or .html()".to_string(),
            )
        })?;
        let config = self.config.unwrap_or_default();

        let (found_portions, lines) = match source {
            InputSource::Lines(lines) => (None, lines),
            InputSource::Text(text) => split_text(&text),
            InputSource::Html(html) => {
                let document = extract_document_with_order(&html, &config.extractors.order)?;
                (Some(document.base_portions), document.ingredients)
            }
        };

        let base_portions = self.base_portions.or(found_portions).ok_or_else(|| {
            ScaleError::BuilderError(
                "No base portions given or found. Use .base_portions()".to_string(),
            )
        })?;
        // Only a requested target is held to the control's bounds; the
        // stated base count renders as is
        let target_portions = match self.target_portions {
            Some(requested) => {
                let control = ServingControl::from_config(requested, &config)?;
                if control.current() != requested {
                    return Err(ScaleError::InvalidArgument(format!(
                        "target portions {} outside {}..={}",
                        requested, config.min_portions, config.max_portions
                    )));
                }
                requested
            }
            None => base_portions,
        };

        debug!(
            "Scaling {} lines from {} to {} portions",
            lines.len(),
            base_portions,
            target_portions
        );
        let engine = ScalingEngine::new(lines, base_portions)?;

        Ok(ScaledRecipe {
            base_portions,
            target_portions,
            label: portion_label(target_portions),
            ingredients: engine.scale_to(target_portions)?,
        })
    }
}

/// Split plain text into ingredient lines, pulling out a serving count line.
fn split_text(text: &str) -> (Option<u32>, Vec<String>) {
    let mut portions = None;
    let mut lines = Vec::new();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if portions.is_none() && line.contains("Portion") {
            if let Some(count) = parse_base_portions(line) {
                portions = Some(count);
                continue;
            }
        }
        lines.push(line.to_string());
    }

    (portions, lines)
}

/// Main entry point for the builder API
pub struct RecipeScaler;

impl RecipeScaler {
    /// Creates a new builder for scaling a recipe
    ///
    /// # Example
    /// ```
    /// use recipe_scaler::RecipeScaler;
    ///
    /// let builder = RecipeScaler::builder();
    /// ```
    pub fn builder() -> RecipeScalerBuilder {
        RecipeScalerBuilder::default()
    }
}
