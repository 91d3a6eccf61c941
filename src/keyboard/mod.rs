//! Keystroke mapping and frequency accumulation

mod accumulator;
pub mod keymap;
mod table;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use accumulator::{FrequencyAccumulator, CONTROL_MAX};
pub use keymap::{DeadKey, KeyMapper, KeyMapping, ACCENT_KEYS, DEAD_KEYS, SPACE_KEYS};
pub use table::{FrequencyTable, TableEntry};
