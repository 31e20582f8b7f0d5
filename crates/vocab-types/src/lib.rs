//! Shared types for curating a bag-of-words vocabulary.
//!
//! Three collections make up the curation state and are shared by every
//! crate in the workspace:
//!
//! - [`StopwordSet`]: surface and declined forms excluded from further review.
//! - [`ContentWords`]: kept words grouped by lemma, each a [`ContentWordEntry`]
//!   holding a running count and the surface forms folded into it.
//! - [`Bow`]: occurrence counts over the tokens that are still unresolved.
//!
//! ```rust
//! use vocab_types::{Bow, BowItem};
//!
//! let bow = Bow::from_tokens(["puella", "puella", "rosa", "rosa", "rosa"]);
//! assert_eq!(bow.top(), Some(BowItem { word: "rosa".into(), count: 3 }));
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;

use serde::Serialize;

/// Operator verdict for a single vocabulary item.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Decision {
    /// Not meaningful: the word and its variants become stopwords.
    Reject,
    /// Meaningful: the word is grouped under its lemma as a content word.
    Accept,
    /// Persist the current state and end the session.
    Quit,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Decision::Reject => "stop",
            Decision::Accept => "keep",
            Decision::Quit => "quit",
        })
    }
}

/// Tag attached to a named entity by the gazetteer.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum EntityTag {
    Entity,
    Person,
    Place,
    Other(String),
}

impl EntityTag {
    /// Parse a gazetteer label; a missing label means a plain entity.
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(str::trim) {
            None | Some("") => EntityTag::Entity,
            Some(l) if l.eq_ignore_ascii_case("entity") => EntityTag::Entity,
            Some(l) if l.eq_ignore_ascii_case("per") || l.eq_ignore_ascii_case("person") => {
                EntityTag::Person
            }
            Some(l) if l.eq_ignore_ascii_case("loc") || l.eq_ignore_ascii_case("place") => {
                EntityTag::Place
            }
            Some(l) => EntityTag::Other(l.to_string()),
        }
    }
}

impl fmt::Display for EntityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityTag::Entity => f.write_str("Entity"),
            EntityTag::Person => f.write_str("Person"),
            EntityTag::Place => f.write_str("Place"),
            EntityTag::Other(label) => f.write_str(label),
        }
    }
}

/// A bag-of-words key together with its current count.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BowItem {
    pub word: String,
    pub count: u64,
}

/// Surface forms excluded from the bag of words. Grows monotonically.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Insert a form; empty strings are ignored.
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        let word = word.into();
        if word.is_empty() {
            return false;
        }
        self.words.insert(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Entries in lexicographic order, for stable output.
    pub fn sorted(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self.iter().collect();
        out.sort_unstable();
        out
    }
}

impl<S: Into<String>> FromIterator<S> for StopwordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = StopwordSet::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for StopwordSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

/// A kept lemma: running occurrence total plus every surface form folded in.
///
/// `count` is accumulated at folding time and never recomputed from the live
/// corpus.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ContentWordEntry {
    pub count: u64,
    pub forms: BTreeSet<String>,
}

/// Content words keyed by lemma.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ContentWords {
    entries: BTreeMap<String, ContentWordEntry>,
}

impl ContentWords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, lemma: &str) -> Option<&ContentWordEntry> {
        self.entries.get(lemma)
    }

    pub fn get_mut(&mut self, lemma: &str) -> Option<&mut ContentWordEntry> {
        self.entries.get_mut(lemma)
    }

    pub fn insert(&mut self, lemma: impl Into<String>, entry: ContentWordEntry) {
        self.entries.insert(lemma.into(), entry);
    }

    /// Entry for `lemma`, created empty when missing.
    pub fn entry(&mut self, lemma: &str) -> &mut ContentWordEntry {
        self.entries.entry(lemma.to_string()).or_default()
    }

    pub fn contains_lemma(&self, lemma: &str) -> bool {
        self.entries.contains_key(lemma)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in lemma order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ContentWordEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Union of the surface forms of every entry.
    pub fn all_forms(&self) -> HashSet<&str> {
        self.entries
            .values()
            .flat_map(|entry| entry.forms.iter().map(String::as_str))
            .collect()
    }

    /// Entries sorted by descending count, then lemma.
    pub fn by_count(&self) -> Vec<(&str, &ContentWordEntry)> {
        let mut out: Vec<_> = self.iter().collect();
        out.sort_by(|a, b| b.1.count.cmp(&a.1.count).then_with(|| a.0.cmp(b.0)));
        out
    }
}

/// Occurrence counts over the unresolved token stream.
///
/// Keys keep their original case.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Bow {
    counts: HashMap<String, u64>,
}

impl Bow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts: HashMap<String, u64> = HashMap::new();
        for token in tokens {
            let token = token.as_ref();
            if let Some(count) = counts.get_mut(token) {
                *count += 1;
            } else {
                counts.insert(token.to_string(), 1);
            }
        }
        Self { counts }
    }

    /// Drop hapaxes and single-character keys.
    pub fn drop_rare(&mut self) {
        self.counts
            .retain(|word, count| *count != 1 && word.chars().count() != 1);
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    pub fn insert(&mut self, word: impl Into<String>, count: u64) {
        self.counts.insert(word.into(), count);
    }

    pub fn remove(&mut self, word: &str) -> Option<u64> {
        self.counts.remove(word)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Highest-count item; ties go to the lexicographically smallest key.
    pub fn top(&self) -> Option<BowItem> {
        self.counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(word, count)| BowItem {
                word: word.clone(),
                count: *count,
            })
    }
}
