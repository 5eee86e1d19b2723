//! Scaling of whole ingredient lists between serving counts.

use log::debug;

use crate::error::ScaleError;
use crate::formatter::render;
use crate::parser::{parse, ParsedIngredient};

/// Ratio of target to base servings, rejecting zero on either side.
pub fn scale_factor(base_portions: u32, target_portions: u32) -> Result<f64, ScaleError> {
    if base_portions == 0 {
        return Err(ScaleError::InvalidArgument(
            "base portions must be greater than zero".to_string(),
        ));
    }
    if target_portions == 0 {
        return Err(ScaleError::InvalidArgument(
            "target portions must be greater than zero".to_string(),
        ));
    }
    Ok(f64::from(target_portions) / f64::from(base_portions))
}

/// Scale every line from `base_portions` to `target_portions`.
///
/// The output has one entry per input line in the same order. Lines without
/// a recognisable amount are returned unchanged.
///
/// # Example
/// ```
/// let lines = ["200 g Zucker", "3 Stück Eier", "Kakaopulver zum Bestäuben"];
/// let scaled = recipe_scaler::scale(&lines, 4, 8).unwrap();
/// assert_eq!(scaled, ["400 g Zucker", "6 Stück Eier", "Kakaopulver zum Bestäuben"]);
/// ```
pub fn scale<S: AsRef<str>>(
    lines: &[S],
    base_portions: u32,
    target_portions: u32,
) -> Result<Vec<String>, ScaleError> {
    let factor = scale_factor(base_portions, target_portions)?;
    Ok(lines
        .iter()
        .map(|line| render(&parse(line.as_ref()), factor))
        .collect())
}

/// An ingredient list parsed once and rendered for any number of targets.
#[derive(Debug, Clone)]
pub struct ScalingEngine {
    base_portions: u32,
    originals: Vec<String>,
    parsed: Vec<ParsedIngredient>,
}

impl ScalingEngine {
    pub fn new<I, S>(lines: I, base_portions: u32) -> Result<Self, ScaleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        // Validates the base count up front
        scale_factor(base_portions, 1)?;

        let originals: Vec<String> = lines.into_iter().map(Into::into).collect();
        let parsed: Vec<ParsedIngredient> = originals.iter().map(|line| parse(line)).collect();
        debug!(
            "Parsed {} ingredient lines, {} with amounts",
            parsed.len(),
            parsed.iter().filter(|p| p.has_amount).count()
        );

        Ok(Self {
            base_portions,
            originals,
            parsed,
        })
    }

    pub fn base_portions(&self) -> u32 {
        self.base_portions
    }

    /// The lines as originally given
    pub fn originals(&self) -> &[String] {
        &self.originals
    }

    pub fn parsed(&self) -> &[ParsedIngredient] {
        &self.parsed
    }

    /// Render all lines for `target_portions`.
    pub fn scale_to(&self, target_portions: u32) -> Result<Vec<String>, ScaleError> {
        let factor = scale_factor(self.base_portions, target_portions)?;
        debug!(
            "Scaling {} lines from {} to {} portions (factor {})",
            self.parsed.len(),
            self.base_portions,
            target_portions,
            factor
        );

        Ok(self
            .parsed
            .iter()
            .zip(&self.originals)
            .map(|(parsed, original)| {
                if parsed.has_amount {
                    render(parsed, factor)
                } else {
                    original.clone()
                }
            })
            .collect())
    }
}
