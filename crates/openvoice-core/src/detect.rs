//! Best-effort script checks used as a sanity pass before speech
//! synthesis. Heuristic, not authoritative: a mismatch should warn,
//! never block.

/// Pure predicate over immutable text.
pub type DetectionRule = fn(&str) -> bool;

/// Rules are keyed by the primary subtag, so "te" and "te-IN" share
/// one entry.
const RULES: &[(&str, DetectionRule)] = &[
    ("en", is_english),
    ("es", is_spanish),
    ("fr", is_french),
    ("de", is_german),
    ("zh", is_chinese),
    ("ja", is_japanese),
    ("hi", is_hindi),
    ("te", is_telugu),
];

#[derive(Debug, Clone, Copy)]
pub struct DetectionRules {
    rules: &'static [(&'static str, DetectionRule)],
}

impl Default for DetectionRules {
    fn default() -> Self {
        Self { rules: RULES }
    }
}

impl DetectionRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` when the text plausibly matches the language, or when no
    /// rule is registered for it (unknown languages are never blocked).
    pub fn matches(&self, tag: &str, text: &str) -> bool {
        let primary = primary_subtag(tag);
        match self.rules.iter().find(|(code, _)| code.eq_ignore_ascii_case(primary)) {
            Some((_, rule)) => rule(text),
            None => true,
        }
    }
}

fn primary_subtag(tag: &str) -> &str {
    tag.split(['-', '_']).next().unwrap_or(tag)
}

fn any_in_range(text: &str, lo: char, hi: char) -> bool {
    text.chars().any(|c| (lo..=hi).contains(&c))
}

fn any_of(text: &str, set: &str) -> bool {
    text.chars().any(|c| set.contains(c))
}

/// English is the only whole-text rule: plain ASCII letters, digits,
/// whitespace and basic punctuation.
fn is_english(text: &str) -> bool {
    !text.is_empty()
        && text.chars().all(|c| {
            c.is_ascii_alphanumeric() || c.is_ascii_whitespace() || matches!(c, '.' | ',' | '!' | '?')
        })
}

fn is_spanish(text: &str) -> bool {
    any_of(text, "áéíóúñüÁÉÍÓÚÑÜ")
}

fn is_french(text: &str) -> bool {
    any_of(text, "éèêëàâîïùûçÉÈÊËÀÂÎÏÙÛÇ")
}

fn is_german(text: &str) -> bool {
    any_of(text, "äöüßÄÖÜẞ")
}

fn is_chinese(text: &str) -> bool {
    any_in_range(text, '\u{4e00}', '\u{9fff}')
}

fn is_japanese(text: &str) -> bool {
    // Hiragana/Katakana, or kanji shared with the CJK block
    any_in_range(text, '\u{3040}', '\u{30ff}') || any_in_range(text, '\u{4e00}', '\u{9faf}')
}

fn is_hindi(text: &str) -> bool {
    any_in_range(text, '\u{0900}', '\u{097f}')
}

fn is_telugu(text: &str) -> bool {
    any_in_range(text, '\u{0c00}', '\u{0c7f}')
}
