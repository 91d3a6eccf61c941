//! Keystroke frequency accumulation

use super::{FrequencyTable, KeyMapper, KeyMapping};

/// Highest code point treated as a control character and skipped
pub const CONTROL_MAX: u32 = 31;

/// Accumulates keystroke and digraph counts over a run.
///
/// One accumulator lives for a whole corpus. Its previous-keystroke state
/// carries across [`ingest_stream`](Self::ingest_stream) calls, so the last
/// keystroke of one file pairs with the first keystroke of the next unless
/// [`reset_boundary`](Self::reset_boundary) is called in between.
#[derive(Debug, Clone, Default)]
pub struct FrequencyAccumulator {
    mapper: KeyMapper,
    singles: FrequencyTable,
    digraphs: FrequencyTable,
    /// Last keystroke typed
    prev_keystroke: Option<String>,
    /// Base letter of the previous character when it went through a dead key
    prev_dead_key_base: Option<String>,
    chars_counted: u64,
    control_skipped: u64,
    dead_keys: u64,
    streams: u64,
}

impl FrequencyAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one input character and update both tables
    pub fn ingest_char(&mut self, c: char) {
        if c as u32 <= CONTROL_MAX {
            self.control_skipped += 1;
            return;
        }
        self.chars_counted += 1;

        let folded: String = c.to_lowercase().collect();
        match self.mapper.map_folded(&folded) {
            KeyMapping::DeadKey(dk) => {
                self.dead_keys += 1;
                self.singles.increment(dk.modifier);
                self.singles.increment(dk.base);

                if let Some(prev) = &self.prev_keystroke {
                    self.digraphs.increment(&format!("{}{}", prev, dk.modifier));
                }
                self.digraphs.increment(&format!("{}{}", dk.modifier, dk.base));

                self.prev_keystroke = Some(dk.base.to_string());
                self.prev_dead_key_base = Some(dk.base.to_string());
            }
            KeyMapping::Direct(sym) => {
                self.singles.increment(&sym);

                if let Some(prev) = &self.prev_keystroke {
                    let left = self.prev_dead_key_base.as_ref().unwrap_or(prev);
                    self.digraphs.increment(&format!("{}{}", left, sym));
                }

                self.prev_dead_key_base = None;
                self.prev_keystroke = Some(sym);
            }
        }
    }

    /// Process a sequence of characters in order
    pub fn ingest_stream<I>(&mut self, chars: I)
    where
        I: IntoIterator<Item = char>,
    {
        self.streams += 1;
        for c in chars {
            self.ingest_char(c);
        }
    }

    /// Convenience for `ingest_stream(text.chars())`
    pub fn ingest_str(&mut self, text: &str) {
        self.ingest_stream(text.chars());
    }

    /// Forget the previous keystroke so the next character opens no digraph.
    ///
    /// Tables and counters are kept.
    pub fn reset_boundary(&mut self) {
        self.prev_keystroke = None;
        self.prev_dead_key_base = None;
    }

    /// Single keystroke counts
    pub fn singles(&self) -> &FrequencyTable {
        &self.singles
    }

    /// Adjacent keystroke pair counts
    pub fn digraphs(&self) -> &FrequencyTable {
        &self.digraphs
    }

    /// Last keystroke typed, if any
    pub fn prev_keystroke(&self) -> Option<&str> {
        self.prev_keystroke.as_deref()
    }

    /// Non-control characters counted
    pub fn chars_counted(&self) -> u64 {
        self.chars_counted
    }

    /// Control characters skipped
    pub fn control_skipped(&self) -> u64 {
        self.control_skipped
    }

    /// Characters that went through a dead key
    pub fn dead_keys(&self) -> u64 {
        self.dead_keys
    }

    /// Number of streams ingested
    pub fn streams(&self) -> u64 {
        self.streams
    }

    /// Consume the accumulator, returning `(singles, digraphs)`
    pub fn into_tables(self) -> (FrequencyTable, FrequencyTable) {
        (self.singles, self.digraphs)
    }
}
