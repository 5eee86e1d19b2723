use log::{debug, warn};
use scraper::{Html, Selector};

use crate::error::ScaleError;
use crate::model::RecipeDocument;

mod heading_list;
mod json_ld;

pub use self::heading_list::HeadingListExtractor;
pub use self::json_ld::JsonLdExtractor;

pub trait Extractor {
    fn can_parse(&self, document: &Html) -> bool;
    fn parse(&self, document: &Html) -> Result<RecipeDocument, ScaleError>;
}

/// Look up an extractor by its configuration name
pub fn extractor_by_name(name: &str) -> Option<Box<dyn Extractor>> {
    match name {
        "heading_list" => Some(Box::new(HeadingListExtractor)),
        "json_ld" => Some(Box::new(JsonLdExtractor)),
        _ => None,
    }
}

/// Extract a recipe document trying the default extractor order.
pub fn extract_document(html: &str) -> Result<RecipeDocument, ScaleError> {
    let order = crate::config::ExtractorsConfig::default().order;
    extract_document_with_order(html, &order)
}

/// Extract a recipe document, trying extractors in `order`.
///
/// The first extractor that recognises the page and parses it wins. If every
/// recognising extractor fails, the last failure is returned.
pub fn extract_document_with_order(
    html: &str,
    order: &[String],
) -> Result<RecipeDocument, ScaleError> {
    let document = Html::parse_document(html);
    let mut last_error = None;

    for name in order {
        let Some(extractor) = extractor_by_name(name) else {
            warn!("Unknown extractor in configuration: {}", name);
            continue;
        };

        if !extractor.can_parse(&document) {
            debug!("Extractor {} does not recognise this document", name);
            continue;
        }

        match extractor.parse(&document) {
            Ok(recipe) => {
                debug!(
                    "Extractor {} found {} ingredients for {} portions",
                    name,
                    recipe.ingredients.len(),
                    recipe.base_portions
                );
                return Ok(recipe);
            }
            Err(e) => {
                warn!("Extractor {} failed: {}", name, e);
                last_error = Some(e);
            }
        }
    }

    Err(last_error.unwrap_or(ScaleError::NoExtractorMatched))
}

/// Parse a CSS selector that is known at compile time.
fn selector(css: &str) -> Option<Selector> {
    Selector::parse(css).ok()
}
