//! Fixed unit vocabulary recognised after an ingredient amount.

use serde::Serialize;

/// Formatting policy of a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnitClass {
    /// Mass, volume and loose measures where fractions read naturally
    Continuous,
    /// Countable items (packets, pieces) shown as whole numbers
    Discrete,
}

/// Every recognised unit literal with its class, in canonical spelling.
///
/// The phrases "zum Bestäuben" and "nach Bedarf" count as units so that
/// lines like "1 zum Bestäuben" keep their text after the amount.
pub const UNITS: &[(&str, UnitClass)] = &[
    ("g", UnitClass::Continuous),
    ("kg", UnitClass::Continuous),
    ("ml", UnitClass::Continuous),
    ("l", UnitClass::Continuous),
    ("TL", UnitClass::Continuous),
    ("EL", UnitClass::Continuous),
    ("Tasse", UnitClass::Continuous),
    ("Tassen", UnitClass::Continuous),
    ("Prise", UnitClass::Continuous),
    ("Prisen", UnitClass::Continuous),
    ("zum Bestäuben", UnitClass::Continuous),
    ("nach Bedarf", UnitClass::Continuous),
    ("Päckchen", UnitClass::Discrete),
    ("Stück", UnitClass::Discrete),
    ("Stk", UnitClass::Discrete),
    ("St", UnitClass::Discrete),
    ("St.", UnitClass::Discrete),
];

/// Look up the class of a unit, ignoring case.
///
/// Returns `None` for literals outside the vocabulary.
pub fn classify(unit: &str) -> Option<UnitClass> {
    UNITS
        .iter()
        .find(|(literal, _)| literal.to_lowercase() == unit.to_lowercase())
        .map(|(_, class)| *class)
}

/// Match the longest unit literal at the start of `text`, ignoring case.
///
/// A literal ending in a letter must not run straight into another letter or
/// digit, so "große" does not read as the unit "g". Returns the canonical
/// literal and the rest of the text after it.
pub(crate) fn match_unit(text: &str) -> Option<(&'static str, &str)> {
    UNITS
        .iter()
        .filter_map(|(literal, _)| {
            let rest = strip_prefix_ignore_case(text, literal)?;
            let ends_in_letter = literal.chars().last().is_some_and(char::is_alphabetic);
            let runs_on = rest.chars().next().is_some_and(char::is_alphanumeric);
            if ends_in_letter && runs_on {
                None
            } else {
                Some((*literal, rest))
            }
        })
        .max_by_key(|(literal, _)| literal.chars().count())
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let mut chars = text.char_indices();
    for expected in prefix.chars() {
        let (_, found) = chars.next()?;
        if !found.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    let offset = chars.next().map_or(text.len(), |(idx, _)| idx);
    Some(&text[offset..])
}
