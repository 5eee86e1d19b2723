//! Scale recipe ingredient lines to a new serving count.
//!
//! Lines such as `"200 g Zucker"` are split into amount, unit and text,
//! multiplied by `target / base` and rendered back the way a cook would write
//! them: plain integers, common fractions like `1/2`, whole counts for
//! packets and pieces, and `,` as decimal separator.

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod extractors;
pub mod formatter;
pub mod model;
pub mod parser;
pub mod servings;
pub mod units;

pub mod uniffi_bindings;

pub use builder::{InputSource, RecipeScaler, RecipeScalerBuilder};
pub use config::ScalerConfig;
pub use engine::{scale, scale_factor, ScalingEngine};
pub use error::ScaleError;
pub use formatter::{format, render, render_number};
pub use model::{RecipeDocument, ScaledRecipe};
pub use parser::{parse, ParsedIngredient};
pub use servings::{parse_base_portions, portion_label, ServingControl};
pub use units::{classify, UnitClass};

/// Extract the serving count and ingredients from an HTML page and scale
/// them to `target_portions`.
pub fn scale_html(html: &str, target_portions: u32) -> Result<ScaledRecipe, ScaleError> {
    RecipeScaler::builder()
        .html(html)
        .target_portions(target_portions)
        .build()
}
