use log::debug;
use scraper::{ElementRef, Html};

use super::{selector, Extractor};
use crate::error::ScaleError;
use crate::model::RecipeDocument;
use crate::servings::parse_base_portions;

const SERVINGS_MARKER: &str = "Portionen:";
const INGREDIENTS_HEADING: &str = "Zutaten:";

/// Reads pages that state "Portionen: ..." in a paragraph and list the
/// ingredients in a `<ul>` directly after a "Zutaten:" `<h3>` heading.
pub struct HeadingListExtractor;

fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn servings_paragraph(document: &Html) -> Option<String> {
    let paragraphs = selector("p")?;
    document
        .select(&paragraphs)
        .map(|p| element_text(&p))
        .find(|text| text.contains(SERVINGS_MARKER))
}

fn ingredients_heading(document: &Html) -> Option<ElementRef<'_>> {
    let headings = selector("h3")?;
    document
        .select(&headings)
        .find(|h| element_text(h) == INGREDIENTS_HEADING)
}

impl Extractor for HeadingListExtractor {
    fn can_parse(&self, document: &Html) -> bool {
        servings_paragraph(document).is_some() && ingredients_heading(document).is_some()
    }

    fn parse(&self, document: &Html) -> Result<RecipeDocument, ScaleError> {
        let servings_text = servings_paragraph(document).ok_or(ScaleError::MissingServings)?;
        let base_portions =
            parse_base_portions(&servings_text).ok_or(ScaleError::MissingServings)?;

        let heading = ingredients_heading(document).ok_or(ScaleError::MissingIngredients)?;
        let list = heading
            .next_siblings()
            .find_map(ElementRef::wrap)
            .filter(|sibling| sibling.value().name() == "ul")
            .ok_or(ScaleError::MissingIngredients)?;

        let items = selector("li").ok_or(ScaleError::MissingIngredients)?;
        let ingredients: Vec<String> = list.select(&items).map(|li| element_text(&li)).collect();

        debug!(
            "Heading list: {} portions, {} ingredients",
            base_portions,
            ingredients.len()
        );

        Ok(RecipeDocument {
            base_portions,
            ingredients,
        })
    }
}
