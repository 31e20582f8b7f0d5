//! Character-level normalization for Latin text.
//!
//! Two layers exist. [`strip_hyphens_and_punctuation`] works on whole texts
//! and never changes case, so surface forms survive for the bag of words.
//! [`normalize_word`] is the matching key used when comparing a token against
//! stopwords and content-word forms: glyphs folded to ASCII, J/V merged into
//! I/U and lowercased.

use std::collections::BTreeSet;

use unicode_normalization::UnicodeNormalization;

/// Ligatures and early-modern glyphs NFKD does not fold by itself.
const GLYPHS: &[(&str, &str)] = &[
    ("Æ", "AE"),
    ("æ", "ae"),
    ("ß", "ss"),
    ("œ", "oe"),
    ("Œ", "OE"),
    ("ƒ", "f"),
    ("o\u{0305}", "on"),
    ("ſ", "s"),
];

/// Characters considered ordinary in a transcribed Latin corpus.
const PLAIN_PUNCTUATION: &[char] = &['.', ',', ':', ';', '?', '-', '(', ')'];

/// Rejoin words broken across lines, then drop ASCII punctuation.
///
/// A hyphen directly followed by a line break is removed together with the
/// break; any other line break becomes a space.
pub fn strip_hyphens_and_punctuation(text: &str) -> String {
    let joined = text.replace("-\r\n", "").replace("-\n", "");
    let mut out = String::with_capacity(joined.len());
    for c in joined.chars() {
        match c {
            '\n' | '\r' => out.push(' '),
            c if c.is_ascii_punctuation() => {}
            c => out.push(c),
        }
    }
    out
}

/// Fold ligatures and diacritics into plain ASCII.
///
/// Anything NFKD cannot decompose into ASCII is dropped.
pub fn normalize_glyphs(word: &str) -> String {
    let mut folded = word.to_string();
    for (glyph, replacement) in GLYPHS {
        if folded.contains(glyph) {
            folded = folded.replace(glyph, replacement);
        }
    }
    folded.nfkd().filter(char::is_ascii).collect()
}

/// Merge consonantal J/V into I/U, preserving case.
pub fn replace_jv(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'j' => 'i',
            'J' => 'I',
            'v' => 'u',
            'V' => 'U',
            other => other,
        })
        .collect()
}

/// Comparison key for a single token.
pub fn normalize_word(word: &str) -> String {
    replace_jv(&normalize_glyphs(word)).to_lowercase()
}

/// Remove a homograph marker such as the `1` in `edo1`. All trailing digits go,
/// so `sum12` gives `sum`.
///
/// Only lemmas longer than one character that contain a digit are touched.
pub fn strip_lemma_marker(lemma: &str) -> &str {
    if lemma.chars().count() <= 1 || !lemma.chars().any(|c| c.is_ascii_digit()) {
        return lemma;
    }
    let stripped = lemma.trim_end_matches(|c: char| c.is_ascii_digit());
    if stripped.is_empty() { lemma } else { stripped }
}

/// Characters outside the plain Latin alphabet, digits and basic punctuation.
pub fn nonstandard_glyphs(text: &str) -> BTreeSet<char> {
    text.chars()
        .filter(|c| {
            !c.is_ascii_alphanumeric() && !c.is_whitespace() && !PLAIN_PUNCTUATION.contains(c)
        })
        .collect()
}
