//! Serving counts: reading the base count from page text and the state of the
//! +/- control that picks a target count.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::ScalerConfig;
use crate::error::ScaleError;

/// Matches "4 Portionen", "1 Portion" and ranges such as "4-6 Portionen"
static PORTIONS_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(\d+)(?:-(\d+))?\s*Portion(?:en)?").ok());

/// Matches a bare count after the label, as in "Portionen: 4-6"
static LABELLED_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"Portion(?:en)?:\s*(\d+)(?:-(\d+))?").ok());

/// Read the base serving count from text like "Portionen: 4-6 Portionen".
///
/// For a range only the first number is used.
pub fn parse_base_portions(text: &str) -> Option<u32> {
    [&*PORTIONS_PATTERN, &*LABELLED_PATTERN]
        .into_iter()
        .filter_map(|pattern| pattern.as_ref()?.captures(text))
        .find_map(|captures| captures.get(1)?.as_str().parse::<u32>().ok())
        .filter(|n| *n > 0)
}

/// Display label for a serving count
pub fn portion_label(portions: u32) -> String {
    if portions == 1 {
        "1 Portion".to_string()
    } else {
        format!("{} Portionen", portions)
    }
}

/// Target serving count bounded to an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServingControl {
    current: u32,
    min: u32,
    max: u32,
}

impl ServingControl {
    /// Start at `initial`, clamped into `[min, max]`.
    pub fn new(initial: u32, min: u32, max: u32) -> Result<Self, ScaleError> {
        if min == 0 || min > max {
            return Err(ScaleError::InvalidArgument(format!(
                "invalid portion bounds {}..={}",
                min, max
            )));
        }
        Ok(Self {
            current: initial.clamp(min, max),
            min,
            max,
        })
    }

    pub fn from_config(initial: u32, config: &ScalerConfig) -> Result<Self, ScaleError> {
        Self::new(initial, config.min_portions, config.max_portions)
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn label(&self) -> String {
        portion_label(self.current)
    }

    pub fn can_increment(&self) -> bool {
        self.current < self.max
    }

    pub fn can_decrement(&self) -> bool {
        self.current > self.min
    }

    /// Step up by one; no-op at the upper bound. Returns the new count.
    pub fn increment(&mut self) -> u32 {
        if self.can_increment() {
            self.current += 1;
        }
        self.current
    }

    /// Step down by one; no-op at the lower bound. Returns the new count.
    pub fn decrement(&mut self) -> u32 {
        if self.can_decrement() {
            self.current -= 1;
        }
        self.current
    }

    /// Jump to `portions`, clamped into the bounds.
    pub fn set(&mut self, portions: u32) -> u32 {
        self.current = portions.clamp(self.min, self.max);
        self.current
    }
}

impl Default for ServingControl {
    fn default() -> Self {
        let config = ScalerConfig::default();
        Self {
            current: config.min_portions,
            min: config.min_portions,
            max: config.max_portions,
        }
    }
}
