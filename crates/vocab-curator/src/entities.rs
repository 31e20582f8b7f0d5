use std::collections::BTreeSet;

use latin_morph::LinguisticService;
use tracing::warn;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EntitySummary {
    pub entities: Vec<String>,
    pub unique: usize,
    pub declined_forms: usize,
    pub declension_failures: usize,
}

pub fn extract_entities<L>(corpus: &str, lang: &L) -> EntitySummary
where
    L: LinguisticService + ?Sized,
{
    let entities: Vec<String> = lang
        .named_entities(corpus)
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    let unique: BTreeSet<&str> = entities.iter().map(String::as_str).collect();

    let mut declined = BTreeSet::new();
    let mut failures = 0usize;
    for name in &unique {
        let normalized = lang.normalize_word(name);
        let forms = lang
            .lemmatize(&normalized)
            .and_then(|lemma| lang.declined_forms(lemma.key()));
        match forms {
            Ok(forms) => declined.extend(forms),
            Err(err) => {
                warn!("NER-declension: {err}");
                failures += 1;
            }
        }
    }

    EntitySummary {
        unique: unique.len(),
        declined_forms: declined.len(),
        declension_failures: failures,
        entities,
    }
}
