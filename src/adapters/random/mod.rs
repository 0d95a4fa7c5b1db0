//! Random Adapters
//!
//! Implementations of the OptionPicker port.
//!
//! ## Available Adapters
//!
//! - **ThreadRngPicker** - Thread-local OS-seeded RNG (production)
//! - **SeededPicker** - Seeded `StdRng`, reproducible across runs (tests)

mod seeded_picker;
mod thread_rng_picker;

pub use seeded_picker::SeededPicker;
pub use thread_rng_picker::ThreadRngPicker;
