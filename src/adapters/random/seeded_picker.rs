use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

use crate::ports::OptionPicker;

/// Picks from a seeded `StdRng`, so the same seed gives the same sequence.
#[derive(Debug)]
pub struct SeededPicker {
    rng: Mutex<StdRng>,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl OptionPicker for SeededPicker {
    fn pick(&self, option_count: usize) -> usize {
        if option_count == 0 {
            return 0;
        }
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0..option_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let a = SeededPicker::new(42);
        let b = SeededPicker::new(42);
        let seq_a: Vec<usize> = (0..32).map(|_| a.pick(4)).collect();
        let seq_b: Vec<usize> = (0..32).map(|_| b.pick(4)).collect();
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn picks_are_roughly_uniform() {
        let picker = SeededPicker::new(7);
        let mut counts = [0usize; 2];
        for _ in 0..10_000 {
            counts[picker.pick(2)] += 1;
        }
        // 10k fair coin flips land well inside 45%..55%.
        assert!(counts[0] > 4_500 && counts[0] < 5_500, "counts: {:?}", counts);
    }
}
