//! OptionPicker port - source of randomness for resolving choices.
//!
//! Abstracted as a trait so tests can make random resolution deterministic.

/// Draws an option index uniformly at random.
///
/// # Thread Safety
/// - `Send + Sync` is required; one picker is shared by all requests
pub trait OptionPicker: Send + Sync {
    /// Returns an index in `0..option_count`.
    ///
    /// Callers guarantee `option_count >= 1`.
    fn pick(&self, option_count: usize) -> usize;
}
