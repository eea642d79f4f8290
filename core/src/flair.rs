//! Fixed pools of cosmetic text and the [`Picker`] used to choose from them.

pub const QUIPS: &[&str] = &[
    "Was that test written by a cat? 🐾",
    "Have you tried sacrificing a goat? 🐐",
    "Maybe it's quantum entanglement? 🌀",
    "Congratulations! New error discovered! 🏆",
];

pub const REWARDS: &[&str] = &[
    "Take a coffee break! ☕",
    "Do 10 pushups! 💪",
    "Pet your nearest animal! 🐶",
];

pub const PARTY_FRAMES: &[&str] = &["🎉", "🦜", "💃", "🕺", "👯", "✨"];

pub const PASS_EMOJIS: &[&str] = &[
    "🦄", "🐧", "🚀", "🎸", "🍕", "🦥", "👑", "🎩", "🐒", "🦆", "🥑", "⚡", "🌈", "🍔", "🎮", "📌",
    "🔑", "🎲",
];

/// Source of arbitrary choices. Production code uses a seeded RNG; tests
/// substitute something deterministic.
pub trait Picker: Send {
    /// Returns an index in `0..len`. Never called with `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

pub fn pick<'a, T>(picker: &mut dyn Picker, pool: &'a [T]) -> Option<&'a T> {
    if pool.is_empty() {
        return None;
    }
    let idx = picker.pick_index(pool.len()) % pool.len();
    pool.get(idx)
}

/// Always picks the same index (wrapped to the pool length).
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPicker(pub usize);

impl Picker for FixedPicker {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0 % len
    }
}

/// Walks the pool in order, wrapping around.
#[derive(Debug, Clone, Default)]
pub struct CyclePicker {
    next: usize,
}

impl Picker for CyclePicker {
    fn pick_index(&mut self, len: usize) -> usize {
        let idx = self.next % len;
        self.next = self.next.wrapping_add(1);
        idx
    }
}
