use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use latin_morph::{Lexicon, LinguisticService};

const USAGE: &str = "usage: cargo run -p latin-morph --example lookup -- <lexicon-dir> [--demo | <word>]";

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let lexicon_dir = args.next().map(PathBuf::from).context(USAGE)?;
    let next = args.next();
    if args.next().is_some() {
        bail!("too many arguments");
    }

    let words: Vec<String> = match next.as_deref() {
        Some("--demo") => vec![
            "puellarum".into(),
            "Dominos".into(),
            "est".into(),
            "virumque".into(),
            "Cæsar".into(),
        ],
        Some(word) => vec![word.to_string()],
        None => bail!(USAGE),
    };

    let lexicon = Lexicon::load(&lexicon_dir)
        .with_context(|| format!("loading lexicon from {}", lexicon_dir.display()))?;

    println!("Lexicon: {}", lexicon_dir.display());

    for word in words {
        println!("\nSurface: {}", word);
        println!("  tokens:     {:?}", lexicon.tokenize(&word));
        let normalized = lexicon.normalize_word(&word);
        println!("  normalized: {}", normalized);
        match lexicon.lemmatize(&normalized) {
            Ok(lemma) => {
                println!("  lemma:      {:<12} [{:?}]", lemma.text, lemma.source);
                match lexicon.declined_forms(lemma.key()) {
                    Ok(forms) => {
                        let forms: Vec<&str> = forms.iter().map(String::as_str).collect();
                        println!("  forms:      {}", forms.join(" "));
                    }
                    Err(err) => println!("  forms:      ({err})"),
                }
            }
            Err(err) => println!("  lemma:      ({err})"),
        }
    }

    Ok(())
}
