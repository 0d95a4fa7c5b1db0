use rand::Rng;

use crate::ports::OptionPicker;

/// Picks with `rand`'s thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngPicker;

impl ThreadRngPicker {
    pub fn new() -> Self {
        Self
    }
}

impl OptionPicker for ThreadRngPicker {
    fn pick(&self, option_count: usize) -> usize {
        if option_count == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..option_count)
    }
}
