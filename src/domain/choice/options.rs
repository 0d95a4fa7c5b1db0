//! ChoiceOptions value object.

use serde::Serialize;

use crate::domain::foundation::ValidationError;

use super::ChoiceError;

/// Fewest options a choice can be created with.
pub const MIN_OPTIONS: usize = 2;

/// Most options a choice keeps; extra submissions are dropped.
pub const MAX_OPTIONS: usize = 4;

/// The ordered, immutable set of options a choice picks from.
///
/// # Invariants
///
/// - Between [`MIN_OPTIONS`] and [`MAX_OPTIONS`] entries
/// - Every entry is trimmed and non-empty
/// - No two entries are equal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ChoiceOptions(Vec<String>);

impl ChoiceOptions {
    /// Builds options from raw user input.
    ///
    /// Each candidate is trimmed; blanks and repeats of an earlier entry are
    /// discarded, and anything past the fourth survivor is ignored.
    ///
    /// # Errors
    ///
    /// Returns `ChoiceError::TooFewOptions` if fewer than two survive.
    pub fn parse<I, S>(raw: I) -> Result<Self, ChoiceError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options: Vec<String> = Vec::with_capacity(MAX_OPTIONS);
        for candidate in raw {
            let trimmed = candidate.as_ref().trim();
            if trimmed.is_empty() || options.iter().any(|o| o == trimmed) {
                continue;
            }
            options.push(trimmed.to_string());
            if options.len() == MAX_OPTIONS {
                break;
            }
        }

        if options.len() < MIN_OPTIONS {
            return Err(ChoiceError::TooFewOptions {
                found: options.len(),
            });
        }

        Ok(Self(options))
    }

    /// Rebuilds options read back from storage.
    ///
    /// Unlike [`ChoiceOptions::parse`], nothing is repaired: stored options
    /// must already satisfy every invariant.
    pub fn restore(options: Vec<String>) -> Result<Self, ValidationError> {
        let count = options.len();
        if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&count) {
            return Err(ValidationError::out_of_range(
                "options",
                MIN_OPTIONS as i32,
                MAX_OPTIONS as i32,
                count as i32,
            ));
        }

        for (index, option) in options.iter().enumerate() {
            if option.trim().is_empty() {
                return Err(ValidationError::empty_field("options"));
            }
            if option.trim() != option {
                return Err(ValidationError::invalid_format(
                    "options",
                    format!("'{}' has surrounding whitespace", option),
                ));
            }
            if options[..index].contains(option) {
                return Err(ValidationError::invalid_format(
                    "options",
                    format!("'{}' appears more than once", option),
                ));
            }
        }

        Ok(Self(options))
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|o| o == value)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}
