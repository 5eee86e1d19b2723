//! Splitting of raw ingredient lines into amount, unit and remainder.

use log::trace;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::units::{classify, match_unit, UnitClass};

/// Leading amount: a simple fraction ("1/2") or a number with optional
/// `.` or `,` decimal part ("1,5"), followed by any whitespace.
static AMOUNT_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:(\d+)/(\d+)|(\d+(?:[.,]\d+)?))\s*").ok()
});

/// An ingredient line split into its parts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedIngredient {
    pub amount: Option<f64>,
    /// Canonical unit spelling from the vocabulary
    pub unit: Option<&'static str>,
    /// Text after the amount and unit, trimmed. The whole line when there
    /// is no amount.
    pub remainder: String,
    pub has_amount: bool,
}

impl ParsedIngredient {
    fn amountless(text: &str) -> Self {
        Self {
            amount: None,
            unit: None,
            remainder: text.to_string(),
            has_amount: false,
        }
    }

    /// Class of the recognised unit, `None` for amount-less lines
    pub fn unit_class(&self) -> Option<UnitClass> {
        self.unit.and_then(classify)
    }
}

/// Parse an ingredient line such as "200 g Zucker".
///
/// Lines without a leading amount followed by a known unit come back with
/// `has_amount == false` and the original text as remainder.
pub fn parse(text: &str) -> ParsedIngredient {
    match parse_amount_and_unit(text) {
        Some((amount, unit, rest)) => ParsedIngredient {
            amount: Some(amount),
            unit: Some(unit),
            remainder: rest.trim().to_string(),
            has_amount: true,
        },
        None => {
            trace!("No amount recognised in {:?}", text);
            ParsedIngredient::amountless(text)
        }
    }
}

fn parse_amount_and_unit(text: &str) -> Option<(f64, &'static str, &str)> {
    let pattern = AMOUNT_PATTERN.as_ref()?;
    let captures = pattern.captures(text)?;

    let amount = match (captures.get(1), captures.get(2), captures.get(3)) {
        (Some(numerator), Some(denominator), _) => {
            let numerator: f64 = numerator.as_str().parse().ok()?;
            let denominator: f64 = denominator.as_str().parse().ok()?;
            if denominator == 0.0 {
                return None;
            }
            numerator / denominator
        }
        (_, _, Some(decimal)) => decimal.as_str().replace(',', ".").parse().ok()?,
        _ => return None,
    };

    let after_amount = &text[captures.get(0)?.end()..];
    let (unit, rest) = match_unit(after_amount)?;
    Some((amount, unit, rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_line() {
        let parsed = parse("200 g Zucker");
        assert_eq!(parsed.amount, Some(200.0));
        assert_eq!(parsed.unit, Some("g"));
        assert_eq!(parsed.remainder, "Zucker");
        assert!(parsed.has_amount);
    }

    #[test]
    fn test_parse_descriptive_line_has_no_amount() {
        let parsed = parse("Kakaopulver zum Bestäuben");
        assert!(!parsed.has_amount);
        assert_eq!(parsed.amount, None);
        assert_eq!(parsed.unit, None);
        assert_eq!(parsed.remainder, "Kakaopulver zum Bestäuben");
    }

    #[test]
    fn test_parse_phrase_unit_after_number() {
        let parsed = parse("1 nach Bedarf Puderzucker");
        assert_eq!(parsed.amount, Some(1.0));
        assert_eq!(parsed.unit, Some("nach Bedarf"));
        assert_eq!(parsed.remainder, "Puderzucker");
    }

    #[test]
    fn test_parse_decimal_comma_and_point() {
        assert_eq!(parse("1,5 kg Mehl").amount, Some(1.5));
        assert_eq!(parse("0.25 l Milch").amount, Some(0.25));
    }

    #[test]
    fn test_parse_fraction_amount() {
        let parsed = parse("1/2 TL Salz");
        assert_eq!(parsed.amount, Some(0.5));
        assert_eq!(parsed.unit, Some("TL"));
        assert_eq!(parsed.remainder, "Salz");
        assert!(!parse("1/0 TL Salz").has_amount);
    }

    #[test]
    fn test_parse_tolerates_spacing() {
        let parsed = parse("1  Prise Salz");
        assert_eq!(parsed.unit, Some("Prise"));
        assert_eq!(parsed.remainder, "Salz");

        let parsed = parse("200g Butter");
        assert_eq!(parsed.amount, Some(200.0));
        assert_eq!(parsed.unit, Some("g"));
        assert_eq!(parsed.remainder, "Butter");
    }

    #[test]
    fn test_parse_uses_canonical_unit_spelling() {
        let parsed = parse("3 STÜCK Eier");
        assert_eq!(parsed.unit, Some("Stück"));
        assert_eq!(parsed.unit_class(), Some(UnitClass::Discrete));
    }

    #[test]
    fn test_parse_unknown_unit_is_amountless() {
        let parsed = parse("2 Eier");
        assert!(!parsed.has_amount);
        assert_eq!(parsed.remainder, "2 Eier");

        assert!(!parse("1 große Zwiebel").has_amount);
        assert!(!parse("").has_amount);
    }

    #[test]
    fn test_parse_piece_abbreviation_without_dot() {
        let parsed = parse("2 St Butter");
        assert_eq!(parsed.amount, Some(2.0));
        assert_eq!(parsed.unit, Some("St"));
        assert_eq!(parsed.remainder, "Butter");
        assert_eq!(parsed.unit_class(), Some(UnitClass::Discrete));
    }

    #[test]
    fn test_parse_unit_without_remainder() {
        let parsed = parse("500 ml");
        assert_eq!(parsed.unit, Some("ml"));
        assert_eq!(parsed.remainder, "");
    }
}
