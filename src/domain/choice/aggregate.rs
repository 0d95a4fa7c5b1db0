//! Choice aggregate entity.
//!
//! A Choice is a titled list of options waiting for someone (or chance) to
//! pick one. Picks accumulate in an append-only history.
//!
//! # Design Decisions
//!
//! - **Options are frozen**: set once at creation, never edited
//! - **Random pick is first-wins**: only an unresolved choice is rolled
//! - **Manual picks always count**: each one overwrites `picked` and is logged
//! - **No deletion**: choices live as long as the store

use crate::domain::foundation::{ChoiceId, StateMachine, ValidationError};
use crate::ports::OptionPicker;

use super::{ChoiceError, ChoiceOptions, ChoiceStatus, ChoiceStatusView};

/// Title used when the creator leaves it blank.
pub const DEFAULT_TITLE: &str = "ToccaATE";

/// What a random resolution did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// The choice was unresolved and a value was drawn.
    Picked,
    /// The choice already had a pick; nothing changed.
    AlreadyPicked,
}

/// Choice aggregate.
///
/// # Invariants
///
/// - `options` satisfies the [`ChoiceOptions`] invariants
/// - Every entry of `history` is one of `options`
/// - `picked` is `None` exactly when `history` is empty, and otherwise
///   equals the last history entry
/// - `history` only grows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    id: ChoiceId,
    title: String,
    options: ChoiceOptions,
    picked: Option<String>,
    history: Vec<String>,
}

impl Choice {
    /// Creates an unresolved choice from raw user input.
    ///
    /// # Errors
    ///
    /// Returns `ChoiceError::TooFewOptions` if fewer than two distinct,
    /// non-blank options were given.
    pub fn create<I, S>(id: ChoiceId, title: Option<&str>, raw_options: I) -> Result<Self, ChoiceError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let options = ChoiceOptions::parse(raw_options)?;
        Ok(Self {
            id,
            title: normalize_title(title),
            options,
            picked: None,
            history: Vec::new(),
        })
    }

    /// Reconstitutes a choice from persisted fields, checking every invariant.
    ///
    /// Nothing is repaired: a blank or padded title is rejected like a
    /// padded option.
    pub fn restore(
        id: ChoiceId,
        title: String,
        options: Vec<String>,
        picked: Option<String>,
        history: Vec<String>,
    ) -> Result<Self, ValidationError> {
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if title.trim() != title {
            return Err(ValidationError::invalid_format(
                "title",
                format!("'{}' has surrounding whitespace", title),
            ));
        }

        let options = ChoiceOptions::restore(options)?;

        if let Some(stray) = history.iter().find(|h| !options.contains(h)) {
            return Err(ValidationError::invalid_format(
                "history",
                format!("'{}' is not one of the options", stray),
            ));
        }

        if picked.as_deref() != history.last().map(String::as_str) {
            return Err(ValidationError::invalid_format(
                "picked",
                "must match the most recent history entry",
            ));
        }

        Ok(Self {
            id,
            title,
            options,
            picked,
            history,
        })
    }

    pub fn id(&self) -> ChoiceId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn options(&self) -> &ChoiceOptions {
        &self.options
    }

    pub fn picked(&self) -> Option<&str> {
        self.picked.as_deref()
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn status(&self) -> ChoiceStatus {
        if self.picked.is_some() {
            ChoiceStatus::Resolved
        } else {
            ChoiceStatus::Unresolved
        }
    }

    /// Lets chance decide, unless something was already picked.
    ///
    /// The picker draws an index uniformly over the options. An out of range
    /// index is clamped to the last option.
    pub fn resolve_random(&mut self, picker: &dyn OptionPicker) -> Result<ResolutionOutcome, ChoiceError> {
        if self.picked.is_some() {
            return Ok(ResolutionOutcome::AlreadyPicked);
        }

        let last = self.options.len() - 1;
        let index = picker.pick(self.options.len()).min(last);
        let value = self
            .options
            .get(index)
            .map(str::to_string)
            .ok_or_else(|| ValidationError::out_of_range("index", 0, last as i32, index as i32))?;

        self.record_pick(value)?;
        Ok(ResolutionOutcome::Picked)
    }

    /// Records a pick made by a person.
    ///
    /// Always appends to the history, even when `selected` repeats the
    /// current pick.
    ///
    /// # Errors
    ///
    /// Returns `ChoiceError::InvalidSelection` (leaving the choice untouched)
    /// if `selected` is not exactly one of the options.
    pub fn resolve_manual(&mut self, selected: &str) -> Result<(), ChoiceError> {
        if !self.options.contains(selected) {
            return Err(ChoiceError::invalid_selection(selected));
        }
        self.record_pick(selected.to_string())
    }

    /// Read-only snapshot for polling clients.
    pub fn status_view(&self) -> ChoiceStatusView {
        ChoiceStatusView {
            id: self.id,
            title: self.title.clone(),
            options: self.options.as_slice().to_vec(),
            picked: self.picked.clone(),
            history: self.history.clone(),
            count: self.history.len(),
            status: self.status(),
        }
    }

    fn record_pick(&mut self, value: String) -> Result<(), ChoiceError> {
        self.status().transition_to(ChoiceStatus::Resolved)?;
        self.history.push(value.clone());
        self.picked = Some(value);
        Ok(())
    }
}

fn normalize_title(title: Option<&str>) -> String {
    match title.map(str::trim) {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => DEFAULT_TITLE.to_string(),
    }
}
