//! Flat-file persistence for a curation session.
//!
//! Every file is plain UTF-8 text that stays readable and editable by hand:
//!
//! | File | Format |
//! |---|---|
//! | stopword list | one word per line |
//! | content-word dictionary | `lemma,count,form form form` per line |
//! | reduced corpus | one token per line, in corpus order |
//! | named-entity list | one entity per line, in corpus order |
//!
//! Missing files are not errors: stopwords fall back to [`SEED_STOPWORDS`],
//! everything else starts empty. Writes go through a temporary file in the
//! target directory that is then renamed over the destination, so a crash
//! mid-write leaves the previous version intact.
//!
//! # Example
//! ```no_run
//! use vocab_store::{load_content_words, load_stopwords, save_stopwords};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut stops = load_stopwords("stop_word_list.txt")?;
//! stops.insert("inquit");
//! save_stopwords(&stops, "stop_word_list.txt")?;
//! let content = load_content_words("content_words.txt")?;
//! println!("{} stopwords, {} lemmas", stops.len(), content.len());
//! # Ok(()) }
//! ```
//!
//! For a runnable demo, see `cargo run -p vocab-store --example stats -- <dir>`.

mod seed;

use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use tempfile::NamedTempFile;
use tracing::{debug, info};
use vocab_types::{ContentWordEntry, ContentWords, StopwordSet};

pub use seed::SEED_STOPWORDS;

/// Read a one-entry-per-line file into a deduplicated set.
///
/// Lines are trimmed and blank lines skipped. A missing file yields an empty set.
pub fn load_word_set(path: impl AsRef<Path>) -> Result<BTreeSet<String>> {
    Ok(read_lines(path.as_ref())?.into_iter().collect())
}

/// Overwrite `path` with one entry per line, sorted, deduplicated, blanks dropped.
pub fn save_word_set<I, S>(words: I, path: impl AsRef<Path>) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let unique: BTreeSet<String> = words
        .into_iter()
        .map(|w| w.as_ref().trim().to_string())
        .filter(|w| !w.is_empty())
        .collect();
    write_lines(path.as_ref(), unique.iter().map(String::as_str))
}

/// Load the stopword list, seeding it when the file is absent or empty.
pub fn load_stopwords(path: impl AsRef<Path>) -> Result<StopwordSet> {
    let path = path.as_ref();
    let words = load_word_set(path)?;
    if words.is_empty() {
        info!(
            "no stopwords in {}, starting from {} seed words",
            path.display(),
            SEED_STOPWORDS.len()
        );
        return Ok(SEED_STOPWORDS.iter().copied().collect());
    }
    info!("loaded {} stopwords from {}", words.len(), path.display());
    Ok(words.into_iter().collect())
}

pub fn save_stopwords(stopwords: &StopwordSet, path: impl AsRef<Path>) -> Result<()> {
    save_word_set(stopwords.iter(), path)
}

/// Parse a content-word dictionary of `lemma,count,forms` lines.
pub fn load_content_words(path: impl AsRef<Path>) -> Result<ContentWords> {
    let path = path.as_ref();
    let mut words = ContentWords::new();
    if !path.exists() {
        return Ok(words);
    }
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    for (lineno, line) in BufReader::new(file).lines().enumerate() {
        let line =
            line.with_context(|| format!("read line {} in {}", lineno + 1, path.display()))?;
        if line.trim().is_empty() {
            continue;
        }
        let (lemma, entry) = parse_content_line(&line).with_context(|| {
            format!("{}:{} malformed content-word line", path.display(), lineno + 1)
        })?;
        words.insert(lemma, entry);
    }
    info!("loaded {} content-word lemmas from {}", words.len(), path.display());
    Ok(words)
}

/// Write one `lemma,count,forms` line per lemma, in lemma order.
pub fn save_content_words(words: &ContentWords, path: impl AsRef<Path>) -> Result<()> {
    let lines: Vec<String> = words
        .iter()
        .map(|(lemma, entry)| {
            let forms: Vec<&str> = entry.forms.iter().map(String::as_str).collect();
            format!("{},{},{}", lemma, entry.count, forms.join(" "))
        })
        .collect();
    write_lines(path.as_ref(), lines.iter().map(String::as_str))
}

/// Read a token-per-line file, keeping order and duplicates.
pub fn load_token_sequence(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    if !path.exists() {
        bail!("token file {} does not exist", path.display());
    }
    read_lines(path)
}

pub fn save_token_sequence(tokens: &[String], path: impl AsRef<Path>) -> Result<()> {
    write_word_list(tokens, path)
}

/// Write entries one per line in the given order, dropping empty strings.
pub fn write_word_list(words: &[String], path: impl AsRef<Path>) -> Result<()> {
    write_lines(
        path.as_ref(),
        words.iter().map(String::as_str).filter(|w| !w.is_empty()),
    )
}

/// Concatenate every `*.txt` file in `dir`, each preceded by one space.
///
/// Files are read in file-name order.
pub fn read_corpus_dir(dir: impl AsRef<Path>) -> Result<String> {
    let dir = dir.as_ref();
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read corpus dir {}", dir.display()))? {
        let path = entry
            .with_context(|| format!("list corpus dir {}", dir.display()))?
            .path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut corpus = String::new();
    for path in &paths {
        debug!("reading {}", path.display());
        let text =
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        corpus.push(' ');
        corpus.push_str(&text);
    }
    info!(
        "read {} corpus files ({} bytes) from {}",
        paths.len(),
        corpus.len(),
        dir.display()
    );
    Ok(corpus)
}

fn parse_content_line(line: &str) -> Result<(String, ContentWordEntry)> {
    let mut fields = line.splitn(3, ',');
    let lemma = fields.next().unwrap_or_default().trim();
    if lemma.is_empty() {
        bail!("empty lemma");
    }
    let count_field = fields.next().context("missing count")?.trim();
    let count = count_field
        .parse::<u64>()
        .with_context(|| format!("count {count_field:?} is not a number"))?;
    let forms = fields
        .next()
        .unwrap_or_default()
        .split_whitespace()
        .map(str::to_string)
        .collect();
    Ok((lemma.to_string(), ContentWordEntry { count, forms }))
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut out = Vec::new();
    for (lineno, line) in BufReader::new(file).lines().enumerate() {
        let line =
            line.with_context(|| format!("read line {} in {}", lineno + 1, path.display()))?;
        let line = line.trim();
        if !line.is_empty() {
            out.push(line.to_string());
        }
    }
    Ok(out)
}

fn write_lines<'a>(path: &Path, lines: impl IntoIterator<Item = &'a str>) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;

    let temp = NamedTempFile::new_in(parent)
        .with_context(|| format!("create temporary file in {}", parent.display()))?;
    {
        let mut writer = BufWriter::new(temp.as_file());
        for line in lines {
            writeln!(writer, "{line}").with_context(|| format!("write {}", path.display()))?;
        }
        writer
            .flush()
            .with_context(|| format!("flush {}", path.display()))?;
    }
    temp.persist(path)
        .with_context(|| format!("replace {}", path.display()))?;
    Ok(())
}
