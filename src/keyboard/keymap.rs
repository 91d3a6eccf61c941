//! Character to keystroke mapping for a dead-key layout
//!
//! Every input character resolves to either one keystroke or a dead-key
//! pair (modifier then base letter). The mapping is driven by three static
//! tables so a layout stays auditable as data.

/// Keystroke produced by any bracket-like punctuation
pub const SPACE_KEY: &str = " ";

/// Diaeresis dead key
pub const DIAERESIS: &str = "¨";

/// Circumflex dead key
pub const CIRCUMFLEX: &str = "^";

/// Punctuation that collapses onto the space keystroke
pub const SPACE_KEYS: &[char] = &['(', ')', '[', ']', '{', '}'];

/// Accented letters that own a dedicated key, with the label of that key.
///
/// The labels reuse bracket glyphs. They name key positions on the target
/// layout, not the brackets themselves.
pub const ACCENT_KEYS: &[(char, &str)] = &[
    ('é', ")"),
    ('è', "("),
    ('à', "{"),
    ('ê', "}"),
    ('ç', "["),
    ('ù', "]"),
];

/// Accented letters typed through a dead key.
///
/// `ê` has its own key on the layout and carries no decomposition.
/// `î` decomposes onto base `a`, as the reference layout data has it.
pub const DEAD_KEYS: &[(char, Option<DeadKey>)] = &[
    ('ä', Some(DeadKey::new(DIAERESIS, "a"))),
    ('ï', Some(DeadKey::new(DIAERESIS, "i"))),
    ('ë', Some(DeadKey::new(DIAERESIS, "e"))),
    ('ü', Some(DeadKey::new(DIAERESIS, "u"))),
    ('ö', Some(DeadKey::new(DIAERESIS, "o"))),
    ('â', Some(DeadKey::new(CIRCUMFLEX, "a"))),
    ('î', Some(DeadKey::new(CIRCUMFLEX, "a"))),
    ('ê', None),
    ('û', Some(DeadKey::new(CIRCUMFLEX, "u"))),
    ('ô', Some(DeadKey::new(CIRCUMFLEX, "o"))),
];

/// A dead-key decomposition: the modifier press followed by the base letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeadKey {
    /// Dead key pressed first
    pub modifier: &'static str,
    /// Live key pressed second
    pub base: &'static str,
}

impl DeadKey {
    pub const fn new(modifier: &'static str, base: &'static str) -> Self {
        Self { modifier, base }
    }
}

/// Result of mapping one character
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyMapping {
    /// One keystroke
    Direct(String),
    /// Two keystrokes, modifier first
    DeadKey(DeadKey),
}

/// Stateless mapper over the layout tables
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    pub const fn new() -> Self {
        Self
    }

    /// Map a single (already case-folded) character.
    pub fn map_char(&self, c: char) -> KeyMapping {
        if SPACE_KEYS.contains(&c) {
            return KeyMapping::Direct(SPACE_KEY.to_string());
        }
        if let Some((_, label)) = ACCENT_KEYS.iter().find(|(k, _)| *k == c) {
            return KeyMapping::Direct((*label).to_string());
        }
        if let Some(dk) = self.dead_key(c) {
            return KeyMapping::DeadKey(dk);
        }
        KeyMapping::Direct(c.to_string())
    }

    /// Map the lower-cased form of a character.
    ///
    /// Lower-casing may expand to several chars (`İ` becomes `i̇`); those pass
    /// through as one keystroke symbol.
    pub fn map_folded(&self, folded: &str) -> KeyMapping {
        let mut chars = folded.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.map_char(c),
            _ => KeyMapping::Direct(folded.to_string()),
        }
    }

    /// Dead-key decomposition of `c`, if the layout types it through one
    pub fn dead_key(&self, c: char) -> Option<DeadKey> {
        DEAD_KEYS
            .iter()
            .find(|(k, _)| *k == c)
            .and_then(|(_, dk)| *dk)
    }
}
