use html_escape::decode_html_entities;
use log::debug;
use regex::Regex;
use scraper::Html;
use serde::Deserialize;
use serde_json::Value;
use std::sync::LazyLock;

use super::{selector, Extractor};
use crate::error::ScaleError;
use crate::model::RecipeDocument;
use crate::servings::parse_base_portions;

static FIRST_NUMBER: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\d+").ok());

/// Reads schema.org Recipe objects from `application/ld+json` scripts.
pub struct JsonLdExtractor;

#[derive(Debug, Deserialize)]
struct JsonLdRecipe {
    #[serde(rename = "recipeIngredient", default)]
    recipe_ingredient: Vec<String>,
    #[serde(rename = "recipeYield")]
    recipe_yield: Option<RecipeYield>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecipeYield {
    Number(f64),
    String(String),
    Multiple(Vec<RecipeYield>),
}

impl RecipeYield {
    /// Serving count from the yield, the first usable entry for lists
    fn portions(&self) -> Option<u32> {
        match self {
            RecipeYield::Number(n) if *n >= 1.0 => Some(n.floor() as u32),
            RecipeYield::Number(_) => None,
            RecipeYield::String(text) => parse_base_portions(text).or_else(|| {
                FIRST_NUMBER
                    .as_ref()?
                    .find(text)?
                    .as_str()
                    .parse::<u32>()
                    .ok()
                    .filter(|n| *n > 0)
            }),
            RecipeYield::Multiple(yields) => yields.iter().find_map(RecipeYield::portions),
        }
    }
}

fn decode_html_symbols(text: &str) -> String {
    // Some sites double-encode entities
    decode_html_entities(&decode_html_entities(text)).trim().to_string()
}

fn is_recipe(value: &Value) -> bool {
    match value.get("@type") {
        Some(Value::String(kind)) => kind == "Recipe",
        Some(Value::Array(kinds)) => kinds.iter().any(|k| k.as_str() == Some("Recipe")),
        _ => value.get("recipeIngredient").is_some(),
    }
}

/// Find the Recipe object in a plain object, an array or an `@graph`.
fn find_recipe(json_ld: &Value) -> Option<&Value> {
    if let Some(items) = json_ld.as_array() {
        return items.iter().find_map(find_recipe);
    }
    if is_recipe(json_ld) {
        return Some(json_ld);
    }
    json_ld
        .get("@graph")?
        .as_array()?
        .iter()
        .find(|item| is_recipe(item))
}

fn recipe_scripts(document: &Html) -> Vec<Value> {
    let Some(scripts) = selector("script[type='application/ld+json']") else {
        return Vec::new();
    };
    document
        .select(&scripts)
        .filter_map(|script| {
            let raw: String = script.text().collect();
            serde_json::from_str::<Value>(raw.trim()).ok()
        })
        .collect()
}

impl Extractor for JsonLdExtractor {
    fn can_parse(&self, document: &Html) -> bool {
        recipe_scripts(document)
            .iter()
            .any(|json_ld| find_recipe(json_ld).is_some())
    }

    fn parse(&self, document: &Html) -> Result<RecipeDocument, ScaleError> {
        let mut last_error = ScaleError::NoExtractorMatched;

        for json_ld in recipe_scripts(document) {
            let Some(value) = find_recipe(&json_ld) else {
                continue;
            };
            let recipe: JsonLdRecipe = match serde_json::from_value(value.clone()) {
                Ok(recipe) => recipe,
                Err(e) => {
                    debug!("Skipping malformed JSON-LD recipe: {}", e);
                    continue;
                }
            };

            let Some(base_portions) = recipe.recipe_yield.as_ref().and_then(RecipeYield::portions)
            else {
                last_error = ScaleError::MissingServings;
                continue;
            };
            if recipe.recipe_ingredient.is_empty() {
                last_error = ScaleError::MissingIngredients;
                continue;
            }

            return Ok(RecipeDocument {
                base_portions,
                ingredients: recipe
                    .recipe_ingredient
                    .iter()
                    .map(|line| decode_html_symbols(line))
                    .collect(),
            });
        }

        Err(last_error)
    }
}
