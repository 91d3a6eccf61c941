//! keyfreq - keystroke and digraph frequencies for keyboard layout design
//!
//! Counts single keystrokes and adjacent keystroke pairs over a text corpus.
//! Accented letters are broken down into the dead-key presses a layout needs
//! to type them, so the counts reflect physical key presses.

pub mod config;
pub mod corpus;
pub mod keyboard;
pub mod report;
pub mod utils;

pub use config::Config;
pub use keyboard::{FrequencyAccumulator, FrequencyTable, KeyMapper, KeyMapping};
