//! Latin language services for vocabulary curation.
//!
//! The curation loop only needs a narrow view of the language:
//! normalize a token, split a text into tokens, find a token's lemma, list a
//! lemma's declined forms and spot named entities. [`LinguisticService`]
//! captures exactly that, and [`Lexicon`] implements it from flat files.
//!
//! # How lemmatization works
//! 1. Look the normalized form up in the explicit lemma table.
//! 2. Accept the form itself if it is a lemma with a known paradigm.
//! 3. Look the form up among the declined forms of every known lemma.
//! 4. Apply Latin suffix rules, keeping only candidates with a known paradigm.
//! 5. Fall back to the form itself.
//!
//! # Example
//! ```no_run
//! use latin_morph::{Lexicon, LinguisticService};
//!
//! # fn main() -> anyhow::Result<()> {
//! let lexicon = Lexicon::load("/path/to/lexicon")?;
//! let lemma = lexicon.lemmatize("puellarum")?;
//! println!("{:?}: {}", lemma.source, lemma.text);
//! match lexicon.declined_forms(lemma.key()) {
//!     Ok(forms) => println!("{} forms", forms.len()),
//!     Err(err) => println!("{err}"),
//! }
//! # Ok(()) }
//! ```
//!
//! For a runnable demo, see `cargo run -p latin-morph --example lookup -- <lexicon-dir> <word>`.

pub mod normalize;
pub mod tokenize;

use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::info;
use vocab_types::EntityTag;

pub use normalize::{
    nonstandard_glyphs, normalize_glyphs, normalize_word, replace_jv, strip_hyphens_and_punctuation,
    strip_lemma_marker,
};
pub use tokenize::tokenize;

/// Failures at the language-service boundary. Both are recoverable.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum MorphError {
    #[error("cannot lemmatize {word:?}: {reason}")]
    Lemmatization { word: String, reason: &'static str },
    #[error("lemma {lemma:?} could not be declined")]
    Declension { lemma: String },
}

/// How a lemma was found.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LemmaSource {
    Table,
    Surface,
    Paradigm,
    Rule {
        suffix: &'static str,
        replacement: &'static str,
    },
    Identity,
}

/// A lemma as returned by the lemmatizer, possibly carrying a homograph marker.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Lemma {
    pub text: String,
    pub source: LemmaSource,
}

impl Lemma {
    /// Lemma with any homograph marker removed.
    pub fn key(&self) -> &str {
        strip_lemma_marker(&self.text)
    }
}

/// The language operations the curation loop depends on.
pub trait LinguisticService {
    /// Matching key for a single token.
    fn normalize_word(&self, word: &str) -> String {
        normalize::normalize_word(word)
    }

    /// Whole-text cleanup applied before tokenizing a raw corpus.
    fn normalize_text(&self, text: &str) -> String {
        normalize::strip_hyphens_and_punctuation(text)
    }

    fn tokenize(&self, text: &str) -> Vec<String>;

    fn lemmatize(&self, word: &str) -> Result<Lemma, MorphError>;

    fn declined_forms(&self, lemma: &str) -> Result<BTreeSet<String>, MorphError>;

    fn named_entities(&self, text: &str) -> Vec<(String, EntityTag)>;
}

/// File-backed Latin lexicon: lemma table, paradigms and an entity gazetteer.
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    lemmata: HashMap<String, String>,
    paradigms: HashMap<String, BTreeSet<String>>,
    form_index: HashMap<String, String>,
    entities: HashMap<String, EntityTag>,
}

impl Lexicon {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load `lemmata.txt`, `declensions.txt` and `entities.txt` from `dir`.
    ///
    /// Files are optional; missing ones are treated as empty.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut lexicon = Self::empty();

        for fields in read_records(dir.join("lemmata.txt"))? {
            if let [form, lemma, ..] = fields.as_slice() {
                lexicon.add_lemma(form, lemma);
            }
        }
        for fields in read_records(dir.join("declensions.txt"))? {
            if let [lemma, forms @ ..] = fields.as_slice() {
                lexicon.add_paradigm(lemma, forms.iter().map(String::as_str));
            }
        }
        for fields in read_records(dir.join("entities.txt"))? {
            if let [name, rest @ ..] = fields.as_slice() {
                lexicon.add_entity(name, EntityTag::from_label(rest.first().map(String::as_str)));
            }
        }

        info!(
            "lexicon loaded from {}: {} lemma mappings, {} paradigms, {} entities",
            dir.display(),
            lexicon.lemmata.len(),
            lexicon.paradigms.len(),
            lexicon.entities.len()
        );
        Ok(lexicon)
    }

    /// Map a surface form to its lemma.
    pub fn add_lemma(&mut self, form: &str, lemma: &str) {
        self.lemmata.insert(normalize_word(form), lemma.to_string());
    }

    /// Register the declined forms of a lemma.
    ///
    /// A form shared by several lemmas resolves to the smallest lemma.
    pub fn add_paradigm<'a>(&mut self, lemma: &str, forms: impl IntoIterator<Item = &'a str>) {
        let key = strip_lemma_marker(lemma).to_string();
        let paradigm = self.paradigms.entry(key.clone()).or_default();
        for form in forms {
            let form = form.trim();
            if form.is_empty() {
                continue;
            }
            paradigm.insert(form.to_string());
            self.form_index
                .entry(normalize_word(form))
                .and_modify(|existing| {
                    if key < *existing {
                        existing.clone_from(&key);
                    }
                })
                .or_insert_with(|| key.clone());
        }
    }

    pub fn add_entity(&mut self, name: &str, tag: EntityTag) {
        self.entities.insert(replace_jv(name), tag);
    }

    pub fn lemma_count(&self) -> usize {
        self.lemmata.len()
    }

    pub fn paradigm_count(&self) -> usize {
        self.paradigms.len()
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    fn has_paradigm(&self, lemma: &str) -> bool {
        self.paradigms.contains_key(lemma)
    }
}

impl LinguisticService for Lexicon {
    fn tokenize(&self, text: &str) -> Vec<String> {
        tokenize::tokenize(text)
    }

    fn lemmatize(&self, word: &str) -> Result<Lemma, MorphError> {
        let trimmed = word.trim();
        if trimmed.is_empty() {
            return Err(MorphError::Lemmatization {
                word: word.to_string(),
                reason: "empty input",
            });
        }
        if !trimmed.chars().any(char::is_alphabetic) {
            return Err(MorphError::Lemmatization {
                word: word.to_string(),
                reason: "no letters",
            });
        }
        let norm = normalize_word(trimmed);

        if let Some(lemma) = self.lemmata.get(&norm) {
            return Ok(Lemma {
                text: lemma.clone(),
                source: LemmaSource::Table,
            });
        }
        if self.has_paradigm(&norm) {
            return Ok(Lemma {
                text: norm,
                source: LemmaSource::Surface,
            });
        }
        if let Some(lemma) = self.form_index.get(&norm) {
            return Ok(Lemma {
                text: lemma.clone(),
                source: LemmaSource::Paradigm,
            });
        }
        for &(suffix, replacement) in SUFFIX_RULES {
            if let Some(candidate) = apply_rule(&norm, suffix, replacement)
                && self.has_paradigm(&candidate)
            {
                return Ok(Lemma {
                    text: candidate,
                    source: LemmaSource::Rule {
                        suffix,
                        replacement,
                    },
                });
            }
        }
        Ok(Lemma {
            text: norm,
            source: LemmaSource::Identity,
        })
    }

    fn declined_forms(&self, lemma: &str) -> Result<BTreeSet<String>, MorphError> {
        let key = strip_lemma_marker(lemma.trim());
        self.paradigms
            .get(key)
            .or_else(|| self.paradigms.get(&normalize_word(key)))
            .cloned()
            .ok_or_else(|| MorphError::Declension {
                lemma: lemma.to_string(),
            })
    }

    fn named_entities(&self, text: &str) -> Vec<(String, EntityTag)> {
        if self.entities.is_empty() {
            return Vec::new();
        }
        let cleaned = strip_hyphens_and_punctuation(&replace_jv(text));
        tokenize::tokenize(&cleaned)
            .into_iter()
            .filter_map(|token| {
                let tag = self.entities.get(&token)?.clone();
                Some((token, tag))
            })
            .collect()
    }
}

fn read_records(path: PathBuf) -> Result<Vec<Vec<String>>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let file = File::open(&path).with_context(|| format!("open lexicon file {}", path.display()))?;
    let reader = BufReader::new(file);
    let mut records = Vec::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line =
            line.with_context(|| format!("read line {} in {}", lineno + 1, path.display()))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        records.push(line.split_whitespace().map(str::to_string).collect());
    }
    Ok(records)
}

fn apply_rule(surface: &str, suffix: &str, replacement: &str) -> Option<String> {
    let stem = surface.strip_suffix(suffix)?;
    if stem.is_empty() {
        return None;
    }
    Some(format!("{stem}{replacement}"))
}

/// Ending substitutions tried in order. Longer endings come first.
const SUFFIX_RULES: &[(&str, &str)] = &[
    // first declension
    ("arum", "a"),
    ("ae", "a"),
    ("am", "a"),
    ("as", "a"),
    ("is", "a"),
    // second declension
    ("orum", "us"),
    ("orum", "um"),
    ("os", "us"),
    ("um", "us"),
    ("is", "us"),
    ("i", "us"),
    ("o", "us"),
    ("e", "us"),
    ("a", "um"),
    ("i", "um"),
    // third declension
    ("ibus", "is"),
    ("ium", "is"),
    ("em", "is"),
    ("es", "is"),
    ("um", "is"),
    ("i", "is"),
    ("e", "is"),
    // first conjugation
    ("abant", "o"),
    ("auerunt", "o"),
    ("amus", "o"),
    ("atis", "o"),
    ("abat", "o"),
    ("auit", "o"),
    ("ant", "o"),
    ("are", "o"),
    ("at", "o"),
    ("as", "o"),
    // second and third conjugation
    ("ent", "eo"),
    ("et", "eo"),
    ("unt", "o"),
    ("ere", "o"),
    ("it", "o"),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        let mut lex = Lexicon::empty();
        lex.add_paradigm(
            "puella",
            ["puella", "puellae", "puellam", "puellarum", "puellis", "puellas"],
        );
        lex.add_paradigm("dominus", ["dominus", "domini", "domino", "dominum"]);
        lex.add_paradigm("rex", ["rex", "regis", "regi", "regem", "rege"]);
        lex.add_lemma("est", "sum1");
        lex
    }

    #[test]
    fn resolves_through_table_surface_paradigm_and_identity() {
        let lex = lexicon();
        let est = lex.lemmatize("est").unwrap();
        assert_eq!(est.source, LemmaSource::Table);
        assert_eq!(est.text, "sum1");
        assert_eq!(est.key(), "sum");

        assert_eq!(lex.lemmatize("Puella").unwrap().source, LemmaSource::Surface);

        let regis = lex.lemmatize("regis").unwrap();
        assert_eq!(regis.source, LemmaSource::Paradigm);
        assert_eq!(regis.text, "rex");

        let unknown = lex.lemmatize("Xerxes").unwrap();
        assert_eq!(unknown.source, LemmaSource::Identity);
        assert_eq!(unknown.text, "xerxes");
    }

    #[test]
    fn suffix_rules_need_a_known_paradigm() {
        let lex = lexicon();
        let lemma = lex.lemmatize("dominos").unwrap();
        assert_eq!(lemma.text, "dominus");
        assert!(matches!(lemma.source, LemmaSource::Rule { suffix: "os", .. }));

        let miss = lex.lemmatize("seruos").unwrap();
        assert_eq!(miss.source, LemmaSource::Identity);
    }

    #[test]
    fn rejects_input_without_letters() {
        let lex = lexicon();
        assert!(matches!(
            lex.lemmatize("  "),
            Err(MorphError::Lemmatization { reason: "empty input", .. })
        ));
        assert!(lex.lemmatize("1234").is_err());
    }

    #[test]
    fn declension_strips_markers_and_reports_unknown_lemmas() {
        let lex = lexicon();
        let forms = lex.declined_forms("puella1").unwrap();
        assert!(forms.contains("puellarum"));
        assert_eq!(
            lex.declined_forms("seruus"),
            Err(MorphError::Declension {
                lemma: "seruus".into()
            })
        );
    }

    #[test]
    fn shared_forms_resolve_to_the_smallest_lemma() {
        let mut lex = Lexicon::empty();
        lex.add_paradigm("uolo", ["uis"]);
        lex.add_paradigm("uis", ["uis", "uim"]);
        assert_eq!(lex.lemmatize("uim").unwrap().text, "uis");
        assert_eq!(lex.lemmatize("vis").unwrap().source, LemmaSource::Surface);
    }

    #[test]
    fn tags_gazetteer_entities_after_jv_replacement() {
        let mut lex = Lexicon::empty();
        lex.add_entity("Iulius", EntityTag::Person);
        lex.add_entity("Roma", EntityTag::Place);
        let found = lex.named_entities("Julius Romam, non Roma, uidit.");
        assert_eq!(
            found,
            vec![
                ("Iulius".to_string(), EntityTag::Person),
                ("Roma".to_string(), EntityTag::Place),
            ]
        );
    }
}
