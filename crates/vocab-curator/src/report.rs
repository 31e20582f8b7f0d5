use std::fmt::Write as _;

use anyhow::{Context, Result};
use serde::Serialize;
use vocab_types::{ContentWordEntry, ContentWords};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct ReportRow<'a> {
    lemma: &'a str,
    #[serde(flatten)]
    entry: &'a ContentWordEntry,
}

pub fn render_report(words: &ContentWords, format: ReportFormat) -> Result<String> {
    let rows: Vec<ReportRow<'_>> = words
        .by_count()
        .into_iter()
        .map(|(lemma, entry)| ReportRow { lemma, entry })
        .collect();

    match format {
        ReportFormat::Json => {
            serde_json::to_string_pretty(&rows).context("serialize content-word report")
        }
        ReportFormat::Text => {
            let mut out = String::new();
            for row in &rows {
                let forms: Vec<&str> = row.entry.forms.iter().map(String::as_str).collect();
                writeln!(out, "{:<20} {:>7}  {}", row.lemma, row.entry.count, forms.join(" "))
                    .context("format report")?;
            }
            Ok(out)
        }
    }
}
