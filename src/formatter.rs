//! Rendering of scaled amounts the way a cook would write them.

use crate::parser::ParsedIngredient;
use crate::units::UnitClass;

/// Distance to an integer below which a value renders as that integer
const INTEGER_TOLERANCE: f64 = 0.001;

/// Distance to a common fraction below which a value snaps to it
const FRACTION_TOLERANCE: f64 = 0.01;

/// Snapping targets, checked in this order so near-ties resolve to the first.
const FRACTIONS: &[(f64, &str)] = &[
    (0.5, "1/2"),
    (0.25, "1/4"),
    (0.75, "3/4"),
    (0.33, "1/3"),
    (0.67, "2/3"),
];

/// Render a continuous amount: integers plain, common fractions as `a/b`,
/// anything else rounded to two decimals with a `,` separator.
pub fn render_number(num: f64) -> String {
    let nearest = num.round();
    if (num - nearest).abs() < INTEGER_TOLERANCE {
        return format!("{}", nearest as i64);
    }

    if let Some((_, literal)) = FRACTIONS
        .iter()
        .find(|(target, _)| (num - target).abs() < FRACTION_TOLERANCE)
    {
        return (*literal).to_string();
    }

    let rounded = (num * 100.0).round() / 100.0;
    rounded.to_string().replace('.', ",")
}

/// Render a countable amount. Below one half shows "1/2", below one shows
/// "1", everything else is rounded to the nearest whole count.
fn render_count(amount: f64) -> String {
    if amount < 0.5 {
        "1/2".to_string()
    } else if amount < 1.0 {
        "1".to_string()
    } else {
        format!("{}", amount.round() as i64)
    }
}

/// Build the display line for a scaled amount.
pub fn format(amount: f64, unit_class: UnitClass, unit: &str, remainder: &str) -> String {
    let quantity = match unit_class {
        UnitClass::Continuous => render_number(amount),
        UnitClass::Discrete => render_count(amount),
    };

    if remainder.is_empty() {
        format!("{} {}", quantity, unit)
    } else {
        format!("{} {} {}", quantity, unit, remainder)
    }
}

/// Render a parsed line scaled by `factor`.
///
/// Lines without an amount come back as their original text.
pub fn render(parsed: &ParsedIngredient, factor: f64) -> String {
    match (parsed.amount, parsed.unit, parsed.unit_class()) {
        (Some(amount), Some(unit), Some(class)) if parsed.has_amount => {
            format(amount * factor, class, unit, &parsed.remainder)
        }
        _ => parsed.remainder.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_render_number_integers() {
        assert_eq!(render_number(100.0), "100");
        assert_eq!(render_number(3.0004), "3");
        assert_eq!(render_number(2.9996), "3");
    }

    #[test]
    fn test_render_number_fractions() {
        assert_eq!(render_number(0.5), "1/2");
        assert_eq!(render_number(0.251), "1/4");
        assert_eq!(render_number(0.75), "3/4");
        assert_eq!(render_number(1.0 / 3.0), "1/3");
        assert_eq!(render_number(2.0 / 3.0), "2/3");
    }

    #[test]
    fn test_render_number_fractions_only_below_one() {
        assert_eq!(render_number(1.5), "1,5");
        assert_eq!(render_number(2.25), "2,25");
    }

    #[test]
    fn test_render_number_decimals_use_comma() {
        assert_eq!(render_number(0.1), "0,1");
        assert_eq!(render_number(1.234), "1,23");
        assert_eq!(render_number(12.345_6), "12,35");
        assert_eq!(render_number(0.6), "0,6");
    }

    #[test]
    fn test_format_continuous() {
        assert_eq!(format(100.0, UnitClass::Continuous, "g", "Zucker"), "100 g Zucker");
        assert_eq!(format(0.5, UnitClass::Continuous, "TL", "Salz"), "1/2 TL Salz");
        assert_eq!(format(250.0, UnitClass::Continuous, "ml", ""), "250 ml");
    }

    #[test]
    fn test_format_discrete() {
        assert_eq!(
            format(0.3, UnitClass::Discrete, "Päckchen", "Vanillezucker"),
            "1/2 Päckchen Vanillezucker"
        );
        assert_eq!(format(0.5, UnitClass::Discrete, "Stück", "Eier"), "1 Stück Eier");
        assert_eq!(format(0.99, UnitClass::Discrete, "Stk", "Eier"), "1 Stk Eier");
        assert_eq!(format(2.6, UnitClass::Discrete, "Stück", "Eier"), "3 Stück Eier");
        assert_eq!(format(2.5, UnitClass::Discrete, "St.", ""), "3 St.");
        assert_eq!(format(2.4, UnitClass::Discrete, "St.", "Butter"), "2 St. Butter");
    }

    #[test]
    fn test_render_amountless_line_is_identity() {
        let parsed = parse("Kakaopulver zum Bestäuben");
        assert_eq!(render(&parsed, 3.0), "Kakaopulver zum Bestäuben");
    }

    #[test]
    fn test_render_scales_amount() {
        let parsed = parse("200 g Zucker");
        assert_eq!(render(&parsed, 1.5), "300 g Zucker");
    }
}
