//! Uniform index selection over the fixed content lists.

use rand::rngs::ThreadRng;
use rand::RngExt;

/// Chooses an index in `0..len`. `len` is always non-zero.
pub trait Picker {
    fn pick(&mut self, len: usize) -> usize;
}

impl Picker for ThreadRng {
    fn pick(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Picks entries from `list` through `picker`.
pub fn pick_from<'a>(picker: &mut dyn Picker, list: &[&'a str]) -> &'a str {
    let idx = picker.pick(list.len()).min(list.len() - 1);
    list[idx]
}

/// Replays a fixed sequence of indices. Used by tests to pin selection.
#[cfg(test)]
pub struct FixedPicker {
    picks: Vec<usize>,
    next: usize,
}

#[cfg(test)]
impl FixedPicker {
    pub fn new(picks: Vec<usize>) -> Self {
        Self { picks, next: 0 }
    }
}

#[cfg(test)]
impl Picker for FixedPicker {
    fn pick(&mut self, len: usize) -> usize {
        let value = self.picks.get(self.next).copied().unwrap_or(0);
        self.next += 1;
        value % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::content::{PROMPTS, RESPONSES};

    #[test]
    fn test_pick_from_uses_picker_index() {
        let mut picker = FixedPicker::new(vec![3, 6]);
        assert_eq!(pick_from(&mut picker, PROMPTS), PROMPTS[3]);
        assert_eq!(pick_from(&mut picker, RESPONSES), RESPONSES[6]);
    }

    #[test]
    fn test_thread_rng_stays_in_range() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            assert!(rng.pick(PROMPTS.len()) < PROMPTS.len());
        }
    }
}
