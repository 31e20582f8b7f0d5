use std::collections::VecDeque;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use anyhow::{Context, Result};
use tracing::{debug, warn};
use vocab_types::{BowItem, Decision};

pub trait Classifier {
    fn next_decision(&mut self, item: &BowItem) -> Result<Decision>;
}

impl<C: Classifier + ?Sized> Classifier for &mut C {
    fn next_decision(&mut self, item: &BowItem) -> Result<Decision> {
        (**self).next_decision(item)
    }
}

pub fn parse_answer(answer: &str) -> Option<Decision> {
    match answer {
        "n" | "s" | "-" => Some(Decision::Reject),
        "" | "y" | "k" | "c" | "+" => Some(Decision::Accept),
        "q" => Some(Decision::Quit),
        _ => None,
    }
}

/// Prompts on a terminal and blocks until a recognized answer arrives.
///
/// End of input is treated as quit so the session still gets saved.
pub struct TerminalClassifier<R, W> {
    input: R,
    output: W,
}

impl TerminalClassifier<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalClassifier<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Classifier for TerminalClassifier<R, W> {
    fn next_decision(&mut self, item: &BowItem) -> Result<Decision> {
        let mut line = String::new();
        loop {
            write!(self.output, "[ {} | {} ] ", item.word, item.count).context("write prompt")?;
            self.output.flush().context("flush prompt")?;

            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .context("read operator answer")?;
            if read == 0 {
                warn!("operator input closed while asking about {}", item.word);
                writeln!(self.output).context("write prompt")?;
                return Ok(Decision::Quit);
            }

            let answer = line.trim_end_matches(['\r', '\n']);
            match parse_answer(answer) {
                Some(decision) => return Ok(decision),
                None => debug!("unrecognized answer {answer:?}"),
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct ScriptedClassifier {
    decisions: VecDeque<Decision>,
    presented: Vec<BowItem>,
}

impl ScriptedClassifier {
    pub fn new(decisions: impl IntoIterator<Item = Decision>) -> Self {
        Self {
            decisions: decisions.into_iter().collect(),
            presented: Vec::new(),
        }
    }

    pub fn presented(&self) -> &[BowItem] {
        &self.presented
    }

    pub fn remaining(&self) -> usize {
        self.decisions.len()
    }
}

impl Classifier for ScriptedClassifier {
    fn next_decision(&mut self, item: &BowItem) -> Result<Decision> {
        self.presented.push(item.clone());
        Ok(self.decisions.pop_front().unwrap_or(Decision::Quit))
    }
}
