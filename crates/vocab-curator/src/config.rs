use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::reducer::BATCH_SIZE;

pub const DEFAULT_CORPUS_DIR: &str = "corpus";
pub const DEFAULT_LEXICON_DIR: &str = "lexicon";
pub const DEFAULT_STOPWORD_FILE: &str = "stop_word_list.txt";
pub const DEFAULT_CONTENT_WORD_FILE: &str = "content_words.txt";
pub const DEFAULT_REDUCED_CORPUS_FILE: &str = "reduced_corpus.txt";
pub const DEFAULT_ENTITY_FILE: &str = "NE-in-corpus.txt";
pub const DEFAULT_LOG_FILE: &str = "curation.log";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("batch size must be at least 1")]
    ZeroBatchSize,
    #[error("corpus directory {0} does not exist")]
    MissingCorpusDir(PathBuf),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub corpus_dir: PathBuf,
    pub lexicon_dir: PathBuf,
    pub stopword_file: PathBuf,
    pub content_word_file: PathBuf,
    pub reduced_corpus_file: PathBuf,
    pub entity_file: PathBuf,
    pub log_file: PathBuf,
    pub batch_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::in_dir(Path::new(""))
    }
}

impl Config {
    pub fn in_dir(root: &Path) -> Self {
        Self {
            corpus_dir: root.join(DEFAULT_CORPUS_DIR),
            lexicon_dir: root.join(DEFAULT_LEXICON_DIR),
            stopword_file: root.join(DEFAULT_STOPWORD_FILE),
            content_word_file: root.join(DEFAULT_CONTENT_WORD_FILE),
            reduced_corpus_file: root.join(DEFAULT_REDUCED_CORPUS_FILE),
            entity_file: root.join(DEFAULT_ENTITY_FILE),
            log_file: root.join(DEFAULT_LOG_FILE),
            batch_size: BATCH_SIZE,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.batch_size == 0 {
            return Err(ConfigError::ZeroBatchSize);
        }
        Ok(())
    }

    pub fn require_corpus_dir(&self) -> Result<(), ConfigError> {
        if !self.corpus_dir.is_dir() {
            return Err(ConfigError::MissingCorpusDir(self.corpus_dir.clone()));
        }
        Ok(())
    }
}
