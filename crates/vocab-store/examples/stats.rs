use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use vocab_store::{load_content_words, load_stopwords};

fn main() -> Result<()> {
    let dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: cargo run -p vocab-store --example stats -- <dir>")?;

    let stops = load_stopwords(dir.join("stop_word_list.txt"))
        .with_context(|| format!("loading stopwords from {}", dir.display()))?;
    let content = load_content_words(dir.join("content_words.txt"))
        .with_context(|| format!("loading content words from {}", dir.display()))?;

    let forms: usize = content.iter().map(|(_, entry)| entry.forms.len()).sum();
    let occurrences: u64 = content.iter().map(|(_, entry)| entry.count).sum();

    println!("Directory: {}", dir.display());
    println!("Stopwords:       {}", stops.len());
    println!("Content lemmas:  {}", content.len());
    println!("Surface forms:   {}", forms);
    println!("Occurrences:     {}", occurrences);

    println!("\nMost frequent lemmas:");
    for (lemma, entry) in content.by_count().into_iter().take(10) {
        println!("  {:<16} {:>6}  ({} forms)", lemma, entry.count, entry.forms.len());
    }

    Ok(())
}
