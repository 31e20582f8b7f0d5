use std::io::Write;

use anyhow::{Context, Result};
use latin_morph::{LinguisticService, nonstandard_glyphs};
use tracing::{debug, info};
use vocab_store::{
    load_content_words, load_stopwords, load_token_sequence, read_corpus_dir, save_content_words,
    save_stopwords, save_token_sequence,
};

use crate::classifier::Classifier;
use crate::config::Config;
use crate::progress::ProgressReport;
use crate::reducer::{ReductionStats, Step, VocabularyState};

const BANNER: &str = "\
----------------
You will now be prompted to add items to the content words list.
Say [s/n/-] for STOPS or [k/y/c/+/ENTER] for KEEP.
[q] to quit.
If you keyboard-interrupt, all decisions since the last save will be lost.
So please be sure to actually quit.";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionEnd {
    Completed,
    Quit,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum BlockEnd {
    Done,
    Quit,
}

pub struct Session<L, C, W> {
    state: VocabularyState,
    lang: L,
    classifier: C,
    out: W,
    config: Config,
}

impl<L, C, W> Session<L, C, W>
where
    L: LinguisticService,
    C: Classifier,
    W: Write,
{
    pub fn new(state: VocabularyState, lang: L, classifier: C, out: W, config: Config) -> Self {
        Self {
            state,
            lang,
            classifier,
            out,
            config,
        }
    }

    pub fn from_corpus(config: Config, lang: L, classifier: C, out: W) -> Result<Self> {
        config.validate()?;
        config.require_corpus_dir()?;

        let corpus = read_corpus_dir(&config.corpus_dir)?;
        let glyphs = nonstandard_glyphs(&corpus);
        if !glyphs.is_empty() {
            let glyphs: String = glyphs.into_iter().collect();
            debug!("glyphs outside the plain alphabet: {glyphs}");
        }

        let mut state = VocabularyState::new(
            load_stopwords(&config.stopword_file)?,
            load_content_words(&config.content_word_file)?,
        );
        let stats = state.initialize_from_corpus(&corpus, &lang);

        let mut session = Self::new(state, lang, classifier, out, config);
        session.print_reduction(&stats)?;
        Ok(session)
    }

    pub fn from_reduced(config: Config, lang: L, classifier: C, out: W) -> Result<Self> {
        config.validate()?;

        let tokens = load_token_sequence(&config.reduced_corpus_file)?;
        let mut state = VocabularyState::new(
            load_stopwords(&config.stopword_file)?,
            load_content_words(&config.content_word_file)?,
        );
        let stats = state.recompute_from_tokens(tokens, &lang);

        let mut session = Self::new(state, lang, classifier, out, config);
        session.print_reduction(&stats)?;
        Ok(session)
    }

    pub fn state(&self) -> &VocabularyState {
        &self.state
    }

    pub fn into_parts(self) -> (VocabularyState, C, W) {
        (self.state, self.classifier, self.out)
    }

    /// Drive the reduction loop until the bag of words is empty or the operator quits.
    ///
    /// Full batches run while more items remain than fit in one batch; the
    /// rest is handled in one final block. Every block ends with a recount.
    pub fn run(&mut self) -> Result<SessionEnd> {
        writeln!(self.out, "\n{BANNER}\n").context("write banner")?;
        self.report_progress()?;

        let batch_size = self.config.batch_size.max(1);
        while self.state.bow.len() > batch_size {
            if self.run_block(batch_size)? == BlockEnd::Quit {
                return self.quit();
            }
            self.finish_block()?;
        }

        let remaining = self.state.bow.len();
        writeln!(self.out, "\n---\nLast {remaining}!\n---\n").context("write console")?;
        if self.run_block(remaining)? == BlockEnd::Quit {
            return self.quit();
        }
        self.finish_block()?;

        self.print_content_words()?;
        self.persist()?;
        writeln!(self.out, "\n---\nBye for now!").context("write console")?;
        Ok(SessionEnd::Completed)
    }

    pub fn persist(&mut self) -> Result<()> {
        writeln!(self.out, "\n---\nWriting the stopword list to file.").context("write console")?;
        save_stopwords(&self.state.stopwords, &self.config.stopword_file)?;
        writeln!(self.out, "Writing the current state of content words to file.")
            .context("write console")?;
        save_content_words(&self.state.content_words, &self.config.content_word_file)?;
        save_token_sequence(&self.state.reduced, &self.config.reduced_corpus_file)?;
        info!(
            "saved {} stopwords, {} content lemmas and {} reduced tokens",
            self.state.stopwords.len(),
            self.state.content_words.len(),
            self.state.reduced.len()
        );
        Ok(())
    }

    fn run_block(&mut self, size: usize) -> Result<BlockEnd> {
        for _ in 0..size {
            match self
                .state
                .classify_top_item(&mut self.classifier, &self.lang)?
            {
                Step::Quit => return Ok(BlockEnd::Quit),
                Step::Exhausted => break,
                Step::Rejected { .. } | Step::Accepted { .. } => {}
            }
        }
        Ok(BlockEnd::Done)
    }

    fn finish_block(&mut self) -> Result<()> {
        let stats = self.state.recompute(&self.lang);
        self.print_reduction(&stats)?;
        self.report_progress()
    }

    fn quit(&mut self) -> Result<SessionEnd> {
        info!("operator quit with {} items left", self.state.bow.len());
        self.report_progress()?;
        self.persist()?;
        writeln!(self.out, "\n---\nBye for now!").context("write console")?;
        Ok(SessionEnd::Quit)
    }

    fn print_reduction(&mut self, stats: &ReductionStats) -> Result<()> {
        writeln!(
            self.out,
            "\n---\nUpdating the bag of words...\n\
             Tokens before stopword removal: {}\n  \
             * after: {}\n  \
             * without content words already processed: {}\n\
             BOW length after removing hapaxes etc: {}",
            stats.tokens, stats.after_stopwords, stats.after_content_words, stats.bow_size
        )
        .context("write console")
    }

    fn report_progress(&mut self) -> Result<()> {
        let report = ProgressReport::measure(&self.state.reduced, &self.state.bow);
        info!(
            "progress: {} of {} types left in the bag of words",
            report.bow_size, report.types
        );
        writeln!(self.out, "\n{report}").context("write console")
    }

    fn print_content_words(&mut self) -> Result<()> {
        writeln!(self.out, "\n---\nThose are the lemmata in the content word list so far:")
            .context("write console")?;
        for (lemma, entry) in self.state.content_words.iter() {
            let forms: Vec<&str> = entry.forms.iter().map(String::as_str).collect();
            writeln!(self.out, "{lemma} ({}): {}", entry.count, forms.join(" "))
                .context("write console")?;
        }
        Ok(())
    }
}
