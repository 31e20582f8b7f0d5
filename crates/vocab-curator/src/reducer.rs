use std::collections::BTreeSet;

use anyhow::Result;
use latin_morph::LinguisticService;
use tracing::{debug, info, warn};
use vocab_types::{Bow, BowItem, ContentWords, Decision, StopwordSet};

use crate::classifier::Classifier;

pub const BATCH_SIZE: usize = 40;

#[derive(Clone, Debug, Default)]
pub struct VocabularyState {
    pub stopwords: StopwordSet,
    pub content_words: ContentWords,
    pub bow: Bow,
    pub reduced: Vec<String>,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ReductionStats {
    pub tokens: usize,
    pub after_stopwords: usize,
    pub after_content_words: usize,
    pub bow_size: usize,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Step {
    Rejected { word: String, new_stopwords: usize },
    Accepted { lemma: String, outcome: Acceptance },
    Quit,
    Exhausted,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Acceptance {
    AlreadyRecorded,
    Folded { count: u64 },
    Created { count: u64 },
    Merged { count: u64 },
}

impl VocabularyState {
    pub fn new(stopwords: StopwordSet, content_words: ContentWords) -> Self {
        Self {
            stopwords,
            content_words,
            bow: Bow::new(),
            reduced: Vec::new(),
        }
    }

    pub fn initialize_from_corpus<L>(&mut self, corpus: &str, lang: &L) -> ReductionStats
    where
        L: LinguisticService + ?Sized,
    {
        let normalized = lang.normalize_text(corpus);
        let tokens = lang.tokenize(&normalized);
        self.recompute_from_tokens(tokens, lang)
    }

    pub fn recompute<L>(&mut self, lang: &L) -> ReductionStats
    where
        L: LinguisticService + ?Sized,
    {
        let tokens = std::mem::take(&mut self.reduced);
        self.recompute_from_tokens(tokens, lang)
    }

    /// Filter `tokens` against stopwords and content-word forms, then recount.
    ///
    /// A token is dropped when it or its normalized form matches. The surviving
    /// tokens become the reduced corpus; the bag of words additionally loses
    /// hapaxes and single-character keys.
    pub fn recompute_from_tokens<L>(&mut self, tokens: Vec<String>, lang: &L) -> ReductionStats
    where
        L: LinguisticService + ?Sized,
    {
        let total = tokens.len();
        let mut after_stopwords = 0usize;
        let remaining: Vec<String> = {
            let forms = self.content_words.all_forms();
            tokens
                .into_iter()
                .filter(|token| {
                    let normalized = lang.normalize_word(token);
                    if self.stopwords.contains(token) || self.stopwords.contains(&normalized) {
                        return false;
                    }
                    after_stopwords += 1;
                    !forms.contains(token.as_str()) && !forms.contains(normalized.as_str())
                })
                .collect()
        };

        let mut bow = Bow::from_tokens(&remaining);
        bow.drop_rare();
        let stats = ReductionStats {
            tokens: total,
            after_stopwords,
            after_content_words: remaining.len(),
            bow_size: bow.len(),
        };
        debug!(
            "tokens {} -> {} without stopwords -> {} without content words; bow size {}",
            stats.tokens, stats.after_stopwords, stats.after_content_words, stats.bow_size
        );
        self.reduced = remaining;
        self.bow = bow;
        stats
    }

    pub fn classify_top_item<C, L>(&mut self, classifier: &mut C, lang: &L) -> Result<Step>
    where
        C: Classifier + ?Sized,
        L: LinguisticService + ?Sized,
    {
        let Some(item) = self.bow.top() else {
            return Ok(Step::Exhausted);
        };
        let step = match classifier.next_decision(&item)? {
            Decision::Reject => self.reject(&item.word, lang),
            Decision::Accept => self.accept(&item, lang),
            Decision::Quit => Step::Quit,
        };
        Ok(step)
    }

    pub fn reject<L>(&mut self, word: &str, lang: &L) -> Step
    where
        L: LinguisticService + ?Sized,
    {
        let lemma = resolve_lemma(word, lang);
        let mut forms = variant_forms(word, lemma.as_deref(), lang);
        forms.insert(lang.normalize_word(word));
        forms.insert(word.to_string());

        let new_stopwords = forms
            .into_iter()
            .filter(|form| self.stopwords.insert(form.as_str()))
            .count();
        self.bow.remove(word);
        info!("stop: {word} ({new_stopwords} new stopwords)");
        Step::Rejected {
            word: word.to_string(),
            new_stopwords,
        }
    }

    pub fn accept<L>(&mut self, item: &BowItem, lang: &L) -> Step
    where
        L: LinguisticService + ?Sized,
    {
        let word = item.word.as_str();
        let normalized = lang.normalize_word(word);
        let resolved = resolve_lemma(word, lang);
        // Non-Latin tokens normalize to nothing; they are keyed by themselves.
        let lemma = match (&resolved, normalized.is_empty()) {
            (Some(lemma), _) => lemma.clone(),
            (None, false) => normalized.clone(),
            (None, true) => word.to_string(),
        };

        if let Some(entry) = self.content_words.get_mut(&lemma) {
            if entry.forms.contains(word) {
                debug!("{word} already recorded under {lemma}");
                self.bow.remove(word);
                return accepted(lemma, Acceptance::AlreadyRecorded);
            }
            if entry.forms.contains(&normalized) {
                let count = self.bow.remove(word).unwrap_or(item.count);
                entry.count += count;
                entry.forms.insert(word.to_string());
                info!("keep: {word} folded into {lemma} (+{count})");
                return accepted(lemma, Acceptance::Folded { count });
            }
        }

        let mut forms = variant_forms(word, resolved.as_deref(), lang);
        forms.insert(word.to_string());
        let mut count: u64 = forms.iter().filter_map(|form| self.bow.remove(form)).sum();
        if count == 0 {
            count = item.count;
        }

        let outcome = if self.content_words.contains_lemma(&lemma) {
            Acceptance::Merged { count }
        } else {
            Acceptance::Created { count }
        };
        let entry = self.content_words.entry(&lemma);
        entry.count += count;
        entry.forms.extend(forms);
        info!("keep: {word} as {lemma} ({outcome:?})");
        accepted(lemma, outcome)
    }
}

fn accepted(lemma: String, outcome: Acceptance) -> Step {
    Step::Accepted { lemma, outcome }
}

fn resolve_lemma<L>(word: &str, lang: &L) -> Option<String>
where
    L: LinguisticService + ?Sized,
{
    match lang.lemmatize(&lang.normalize_word(word)) {
        Ok(lemma) if !lemma.key().is_empty() => Some(lemma.key().to_string()),
        Ok(_) => None,
        Err(err) => {
            warn!("lemmatization failed for {word}: {err}");
            None
        }
    }
}

fn variant_forms<L>(word: &str, lemma: Option<&str>, lang: &L) -> BTreeSet<String>
where
    L: LinguisticService + ?Sized,
{
    let Some(lemma) = lemma else {
        return BTreeSet::from([word.to_string()]);
    };
    match lang.declined_forms(lemma) {
        Ok(forms) => forms.into_iter().filter(|f| !f.is_empty()).collect(),
        Err(err) => {
            warn!("lemma couldn't be declined: {word} ({err})");
            BTreeSet::from([word.to_string()])
        }
    }
}

#[cfg(test)]
mod tests {
    use latin_morph::Lexicon;
    use vocab_store::{load_content_words, save_content_words};
    use vocab_types::ContentWordEntry;

    use super::*;
    use crate::classifier::ScriptedClassifier;

    fn lexicon() -> Lexicon {
        let mut lex = Lexicon::empty();
        lex.add_paradigm(
            "puella",
            ["puella", "puellae", "puellam", "puellarum", "puellis", "puellas"],
        );
        lex.add_paradigm("rosa", ["rosa", "rosae", "rosam"]);
        lex
    }

    fn bow(items: &[(&str, u64)]) -> Bow {
        let mut bow = Bow::new();
        for (word, count) in items {
            bow.insert(*word, *count);
        }
        bow
    }

    fn entry(count: u64, forms: &[&str]) -> ContentWordEntry {
        ContentWordEntry {
            count,
            forms: forms.iter().map(|f| f.to_string()).collect(),
        }
    }

    #[test]
    fn stopword_rejection_filters_later_recomputations() {
        let lex = lexicon();
        let mut state = VocabularyState::default();
        state.bow = bow(&[("atque", 2), ("puella", 2)]);

        let step = state.reject("atque", &lex);
        assert!(matches!(step, Step::Rejected { .. }));
        assert!(state.stopwords.contains("atque"));
        assert!(!state.bow.contains("atque"));

        let stats = state.initialize_from_corpus("atque atque puella", &lex);
        assert_eq!(state.reduced, vec!["puella"]);
        assert!(state.bow.is_empty());
        assert_eq!(stats.tokens, 3);
        assert_eq!(stats.after_stopwords, 1);
    }

    #[test]
    fn keeping_the_top_item_creates_a_lemma_entry() {
        let lex = lexicon();
        let mut state = VocabularyState::default();
        state.bow = bow(&[("puella", 12), ("a", 2)]);
        let mut classifier = ScriptedClassifier::new([Decision::Accept]);

        let step = state.classify_top_item(&mut classifier, &lex).unwrap();
        assert_eq!(
            step,
            Step::Accepted {
                lemma: "puella".into(),
                outcome: Acceptance::Created { count: 12 },
            }
        );
        let entry = state.content_words.get("puella").unwrap();
        assert!(entry.count >= 12);
        assert!(entry.forms.contains("puella"));
        assert!(entry.forms.contains("puellarum"));
        assert_eq!(classifier.presented()[0].word, "puella");

        state.recompute_from_tokens(vec!["a".into(), "a".into(), "rosa".into()], &lex);
        assert!(!state.bow.contains("a"));
    }

    #[test]
    fn new_entries_absorb_declined_forms_present_in_the_bow() {
        let lex = lexicon();
        let mut state = VocabularyState::default();
        state.bow = bow(&[("puella", 4), ("puellam", 3), ("rosa", 2)]);

        let item = state.bow.top().unwrap();
        state.accept(&item, &lex);
        assert_eq!(state.content_words.get("puella").unwrap().count, 7);
        assert_eq!(state.bow.len(), 1);
        assert!(state.bow.contains("rosa"));
    }

    #[test]
    fn normalized_matches_fold_the_exact_form_and_its_count() {
        let lex = lexicon();
        let mut state = VocabularyState::default();
        state
            .content_words
            .insert("puella", entry(5, &["puella", "puellae"]));
        state.bow = bow(&[("Puellae", 3), ("rosa", 2)]);

        let item = state.bow.top().unwrap();
        let step = state.accept(&item, &lex);
        assert_eq!(
            step,
            Step::Accepted {
                lemma: "puella".into(),
                outcome: Acceptance::Folded { count: 3 },
            }
        );
        let puella = state.content_words.get("puella").unwrap();
        assert_eq!(puella.count, 8);
        assert!(puella.forms.contains("Puellae"));
        assert!(!state.bow.contains("Puellae"));
    }

    #[test]
    fn already_recorded_forms_only_leave_the_bow() {
        let lex = lexicon();
        let mut state = VocabularyState::default();
        state.content_words.insert("rosa", entry(9, &["rosa", "rosam"]));
        state.bow = bow(&[("rosam", 2)]);

        let item = state.bow.top().unwrap();
        let step = state.accept(&item, &lex);
        assert!(matches!(
            step,
            Step::Accepted {
                outcome: Acceptance::AlreadyRecorded,
                ..
            }
        ));
        assert_eq!(state.content_words.get("rosa").unwrap().count, 9);
        assert!(state.bow.is_empty());
    }

    #[test]
    fn existing_lemma_without_the_form_is_merged_not_replaced() {
        let lex = lexicon();
        let mut state = VocabularyState::default();
        state.content_words.insert("puella", entry(2, &["Puellis"]));
        state.bow = bow(&[("puellam", 3), ("puellas", 2)]);

        let item = state.bow.top().unwrap();
        state.accept(&item, &lex);
        let puella = state.content_words.get("puella").unwrap();
        assert_eq!(puella.count, 7);
        assert!(puella.forms.contains("Puellis"));
        assert!(puella.forms.contains("puellas"));
        assert!(state.bow.is_empty());
    }

    #[test]
    fn undeclinable_words_fall_back_to_their_own_forms() {
        let lex = lexicon();
        let mut state = VocabularyState::default();
        state.bow = bow(&[("Xerxes", 4)]);

        state.reject("Xerxes", &lex);
        assert!(state.stopwords.contains("Xerxes"));
        assert!(state.stopwords.contains("xerxes"));
        assert_eq!(state.stopwords.len(), 2);

        let mut state = VocabularyState::default();
        state.bow = bow(&[("Xerxes", 4)]);
        let item = state.bow.top().unwrap();
        state.accept(&item, &lex);
        let xerxes = state.content_words.get("xerxes").unwrap();
        assert_eq!(xerxes.count, 4);
        assert_eq!(xerxes.forms, BTreeSet::from(["Xerxes".to_string()]));
    }

    #[test]
    fn greek_tokens_are_kept_under_their_own_key_and_reload() {
        let lex = Lexicon::empty();
        let mut state = VocabularyState::default();
        state.bow = bow(&[("λόγος", 3), ("ψυχή", 2)]);
        let mut classifier = ScriptedClassifier::new([Decision::Accept, Decision::Accept]);

        let first = state.classify_top_item(&mut classifier, &lex).unwrap();
        assert_eq!(
            first,
            Step::Accepted {
                lemma: "λόγος".into(),
                outcome: Acceptance::Created { count: 3 },
            }
        );
        let second = state.classify_top_item(&mut classifier, &lex).unwrap();
        assert_eq!(
            second,
            Step::Accepted {
                lemma: "ψυχή".into(),
                outcome: Acceptance::Created { count: 2 },
            }
        );
        assert!(!state.content_words.contains_lemma(""));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content_words.txt");
        save_content_words(&state.content_words, &path).unwrap();
        let reloaded = load_content_words(&path).unwrap();
        assert_eq!(reloaded, state.content_words);
        assert_eq!(reloaded.get("λόγος").unwrap().count, 3);
    }

    #[test]
    fn unlemmatizable_words_are_stopped_alone() {
        let lex = lexicon();
        let mut state = VocabularyState::default();
        state.bow = bow(&[("123", 2)]);
        state.reject("123", &lex);
        assert_eq!(state.stopwords.sorted(), vec!["123"]);
    }

    #[test]
    fn quit_and_exhaustion_leave_the_state_untouched() {
        let lex = lexicon();
        let mut state = VocabularyState::default();
        state.bow = bow(&[("rosa", 2)]);
        let mut classifier = ScriptedClassifier::new([Decision::Quit]);
        assert_eq!(
            state.classify_top_item(&mut classifier, &lex).unwrap(),
            Step::Quit
        );
        assert!(state.bow.contains("rosa"));

        let mut empty = VocabularyState::default();
        assert_eq!(
            empty.classify_top_item(&mut classifier, &lex).unwrap(),
            Step::Exhausted
        );
    }

    #[test]
    fn recomputation_partitions_every_token() {
        let lex = lexicon();
        let stopwords: StopwordSet = ["et", "in"].into_iter().collect();
        let mut content = ContentWords::new();
        content.insert("rosa", entry(3, &["rosa", "rosam"]));
        let mut state = VocabularyState::new(stopwords, content);

        let corpus = "Et puella rosam in horto uidet et puella Rosam amat x x uidet";
        state.initialize_from_corpus(corpus, &lex);

        let forms = state.content_words.all_forms();
        for token in lex.tokenize(corpus) {
            let normalized = lex.normalize_word(&token);
            let stopped = state.stopwords.contains(&token) || state.stopwords.contains(&normalized);
            let recorded = forms.contains(token.as_str()) || forms.contains(normalized.as_str());
            let counted = state.bow.contains(&token);
            let discarded = state.reduced.contains(&token) && !counted;
            let buckets = [stopped, recorded, counted, discarded];
            assert_eq!(
                buckets.iter().filter(|b| **b).count(),
                1,
                "token {token} in {buckets:?}"
            );
        }
        assert_eq!(state.bow.get("puella"), Some(2));
        assert_eq!(state.bow.get("uidet"), Some(2));
        assert!(!state.bow.contains("x"));
    }
}
