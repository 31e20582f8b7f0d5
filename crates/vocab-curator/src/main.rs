use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use latin_morph::Lexicon;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vocab_store::{load_content_words, read_corpus_dir, write_word_list};

use vocab_curator::config::{
    DEFAULT_CONTENT_WORD_FILE, DEFAULT_CORPUS_DIR, DEFAULT_ENTITY_FILE, DEFAULT_LEXICON_DIR,
    DEFAULT_LOG_FILE, DEFAULT_REDUCED_CORPUS_FILE, DEFAULT_STOPWORD_FILE,
};
use vocab_curator::{
    BATCH_SIZE, Config, ReportFormat, Session, SessionEnd, TerminalClassifier, extract_entities,
    render_report,
};

#[derive(Debug, Parser)]
#[command(version, about = "Curate stopwords and content words from a Latin corpus")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Directory of plain-text corpus files
    #[arg(long, global = true, env = "CORPUS_DIR", default_value = DEFAULT_CORPUS_DIR)]
    corpus_dir: PathBuf,

    /// Directory holding lemmata.txt, declensions.txt and entities.txt
    #[arg(long, global = true, env = "LEXICON_DIR", default_value = DEFAULT_LEXICON_DIR)]
    lexicon_dir: PathBuf,

    /// Stopword list, one word per line
    #[arg(long, global = true, env = "STOPWORD_FILE", default_value = DEFAULT_STOPWORD_FILE)]
    stopwords: PathBuf,

    /// Content-word dictionary, `lemma,count,forms` per line
    #[arg(long, global = true, env = "CONTENT_WORD_FILE", default_value = DEFAULT_CONTENT_WORD_FILE)]
    content_words: PathBuf,

    /// Reduced corpus written at the end of a session, one token per line
    #[arg(long, global = true, env = "REDUCED_CORPUS_FILE", default_value = DEFAULT_REDUCED_CORPUS_FILE)]
    reduced_corpus: PathBuf,

    /// Named-entity list written by `entities`
    #[arg(long, global = true, env = "ENTITY_FILE", default_value = DEFAULT_ENTITY_FILE)]
    entity_file: PathBuf,

    /// Session log; warnings are appended here
    #[arg(long, global = true, env = "CURATOR_LOG", default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// Decisions between two recounts of the bag of words
    #[arg(long, global = true, env = "BATCH_SIZE", default_value_t = BATCH_SIZE)]
    batch_size: usize,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Curate content words starting from the raw corpus
    Curate,
    /// Curate content words starting from the saved reduced corpus
    Resume,
    /// Extract the named entities of the corpus
    Entities,
    /// List the content-word dictionary by frequency
    Report {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            corpus_dir: self.corpus_dir.clone(),
            lexicon_dir: self.lexicon_dir.clone(),
            stopword_file: self.stopwords.clone(),
            content_word_file: self.content_words.clone(),
            reduced_corpus_file: self.reduced_corpus.clone(),
            entity_file: self.entity_file.clone(),
            log_file: self.log_file.clone(),
            batch_size: self.batch_size,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();
    init_tracing(&config)?;

    match cli.command {
        Command::Curate => curate(config, false),
        Command::Resume => curate(config, true),
        Command::Entities => entities(config),
        Command::Report { json } => report(config, json),
    }
}

fn curate(config: Config, from_reduced: bool) -> Result<()> {
    let start = Instant::now();
    let lexicon = Lexicon::load(&config.lexicon_dir)
        .with_context(|| format!("loading lexicon from {}", config.lexicon_dir.display()))?;
    let classifier = TerminalClassifier::stdio();
    let out = io::stdout();

    let mut session = if from_reduced {
        info!("resuming from {}", config.reduced_corpus_file.display());
        Session::from_reduced(config, lexicon, classifier, out)?
    } else {
        info!("reading corpus from {}", config.corpus_dir.display());
        Session::from_corpus(config, lexicon, classifier, out)?
    };
    info!("bag of words ready in {} ms", start.elapsed().as_millis());

    match session.run()? {
        SessionEnd::Completed => info!("bag of words exhausted"),
        SessionEnd::Quit => info!("session ended by operator"),
    }
    Ok(())
}

fn entities(config: Config) -> Result<()> {
    config.require_corpus_dir()?;
    let lexicon = Lexicon::load(&config.lexicon_dir)
        .with_context(|| format!("loading lexicon from {}", config.lexicon_dir.display()))?;
    let corpus = read_corpus_dir(&config.corpus_dir)?;

    let summary = extract_entities(&corpus, &lexicon);
    println!(
        "These {} named entities were found in the given corpus.",
        summary.unique
    );
    println!(
        "[{} / {}] declension errors, {} declined forms",
        summary.declension_failures, summary.unique, summary.declined_forms
    );
    write_word_list(&summary.entities, &config.entity_file)?;
    println!(
        "Wrote {} entries to {}",
        summary.entities.len(),
        config.entity_file.display()
    );
    Ok(())
}

fn report(config: Config, json: bool) -> Result<()> {
    let words = load_content_words(&config.content_word_file)?;
    let format = if json {
        ReportFormat::Json
    } else {
        ReportFormat::Text
    };
    print!("{}", render_report(&words, format)?);
    if json {
        println!();
    }
    Ok(())
}

fn init_tracing(config: &Config) -> Result<()> {
    let log = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("open log file {}", config.log_file.display()))?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(log))
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .init();
    Ok(())
}
