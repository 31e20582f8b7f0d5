//! Whitespace tokenizer that splits off the enclitic `-que`.
//!
//! `virumque` becomes `virum` followed by the token `-que`, so the enclitic
//! can be treated as a stopword on its own. Words whose final `que` belongs to
//! the stem (`atque`, `quisque`, `usque`, ...) are left whole.

const ENCLITIC: &str = "que";
const ENCLITIC_TOKEN: &str = "-que";

/// Words ending in `que` that carry no enclitic. Stored in I/U spelling.
const QUE_EXCEPTIONS: &[&str] = &[
    "absque", "abusque", "adusque", "aeque", "antique", "apsque", "atque", "coque", "cuicumque",
    "cuique", "cuiusque", "denique", "deque", "inique", "itaque", "linque", "longinque", "namque",
    "neque", "oblique", "peraeque", "plerumque", "propinque", "quacumque", "quaecumque", "quaeque",
    "quamcumque", "quamque", "quandoque", "quaque", "quarumcumque", "quarumque", "quascumque",
    "quasque", "quemcumque", "quemque", "quibuscumque", "quibusque", "quicumque", "quidque",
    "quinque", "quique", "quisque", "quocumque", "quodcumque", "quodque", "quoque", "quorumcumque",
    "quorumque", "quoscumque", "quosque", "relinque", "susque", "torque", "ubicumque", "ubique",
    "unamquamque", "unaquaeque", "unaquaque", "undecumque", "undique", "unoquoque", "unumquemque",
    "unumquidque", "unumquodque", "unusquisque", "usque", "utcumque", "uterque", "utique",
    "utramque", "utraque", "utrarumque", "utrasque", "utrique", "utrisque", "utriusque", "utroque",
    "utrorumque", "utrosque", "utrumque",
];

/// Split text on whitespace, separating `-que` where it is an enclitic.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for word in text.split_whitespace() {
        match split_enclitic(word) {
            Some(stem) => {
                tokens.push(stem.to_string());
                tokens.push(ENCLITIC_TOKEN.to_string());
            }
            None => tokens.push(word.to_string()),
        }
    }
    tokens
}

/// Stem of `word` when it ends in an enclitic `que`.
fn split_enclitic(word: &str) -> Option<&str> {
    let cut = word.len().checked_sub(ENCLITIC.len())?;
    if !word.is_char_boundary(cut) || !word[cut..].eq_ignore_ascii_case(ENCLITIC) {
        return None;
    }
    let stem = &word[..cut];
    if stem.chars().count() < 2 {
        return None;
    }
    let key = crate::normalize::normalize_word(word);
    if QUE_EXCEPTIONS.binary_search(&key.as_str()).is_ok() {
        return None;
    }
    Some(stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exceptions_are_sorted_for_binary_search() {
        let mut sorted = QUE_EXCEPTIONS.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, QUE_EXCEPTIONS);
    }

    #[test]
    fn splits_enclitic_que() {
        assert_eq!(
            tokenize("arma virumque cano"),
            vec!["arma", "virum", "-que", "cano"]
        );
        assert_eq!(tokenize("SENATUSQUE"), vec!["SENATUS", "-que"]);
    }

    #[test]
    fn keeps_words_where_que_is_part_of_the_stem() {
        assert_eq!(
            tokenize("atque quoque Vtrumque usque que"),
            vec!["atque", "quoque", "Vtrumque", "usque", "que"]
        );
    }

    #[test]
    fn preserves_case_and_order() {
        assert_eq!(tokenize("  Gallia\test  omnis "), vec!["Gallia", "est", "omnis"]);
    }
}
