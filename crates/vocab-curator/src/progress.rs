use std::collections::HashSet;
use std::fmt;

use vocab_types::Bow;

const BAR_WIDTH: usize = 60;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ProgressReport {
    pub tokens: usize,
    pub types: usize,
    pub bow_size: usize,
}

impl ProgressReport {
    pub fn measure(reduced: &[String], bow: &Bow) -> Self {
        let types: HashSet<&str> = reduced.iter().map(String::as_str).collect();
        Self {
            tokens: reduced.len(),
            types: types.len(),
            bow_size: bow.len(),
        }
    }

    /// Share of types no longer waiting in the bag of words, in `0.0..=1.0`.
    ///
    /// A corpus without types counts as fully resolved.
    pub fn resolved_fraction(&self) -> f64 {
        if self.types == 0 {
            return 1.0;
        }
        (1.0 - self.bow_size as f64 / self.types as f64).clamp(0.0, 1.0)
    }

    pub fn bar(&self) -> String {
        let filled = (self.resolved_fraction() * BAR_WIDTH as f64).round() as usize;
        let filled = filled.min(BAR_WIDTH);
        format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
    }

    pub fn corpus_line(&self) -> String {
        format!(
            "Corpus has {} words in total (TOKENS), with {} distinct values (TYPES).",
            self.tokens, self.types
        )
    }
}

impl fmt::Display for ProgressReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.corpus_line())?;
        writeln!(
            f,
            "Corpus has [{}] unique values, of which [{}] are in the BOW.",
            self.types, self.bow_size
        )?;
        write!(
            f,
            "resolved {:>3}% [{}] {}/{}",
            (self.resolved_fraction() * 100.0).floor() as u32,
            self.bar(),
            self.bow_size,
            self.types
        )
    }
}
