use crate::render::{write_query_result, write_query_summary, write_summaries};
use anyhow::Result;
use concord_core::output::{save_concordance, save_extra_lists, write_concordance, write_extra_lists, OutputPaths};
use concord_core::{query, AggregateReport, Concordance, Corpus, Error, QueryLog, Storage};
use std::io::{BufRead, Write};

const MENU: &str = "Commands: add <FILE> | close <FILE> | query <WORD> | summary | concordance | quit";

/// One menu choice entered by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add(String),
    Close(String),
    Query(String),
    Summary,
    Concordance,
    Quit,
}

impl Action {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((c, a)) => (c, a.trim()),
            None => (line, ""),
        };
        let needs_arg = |what: &str| {
            if arg.is_empty() {
                Err(format!("'{command}' needs a {what}"))
            } else {
                Ok(arg.to_string())
            }
        };
        match command.to_ascii_lowercase().as_str() {
            "add" | "a" => needs_arg("file name").map(Action::Add),
            "close" | "c" => needs_arg("file name").map(Action::Close),
            "query" | "q" => needs_arg("word").map(Action::Query),
            "summary" | "s" => Ok(Action::Summary),
            "concordance" | "x" => Ok(Action::Concordance),
            "quit" | "exit" => Ok(Action::Quit),
            "" => Err("please enter a command".to_string()),
            other => Err(format!("unknown command '{other}'")),
        }
    }
}

/// Interactive state: the open corpus plus every word queried so far.
pub struct Session<S> {
    corpus: Corpus,
    storage: S,
    log: QueryLog,
    output: OutputPaths,
    top: usize,
}

impl<S: Storage> Session<S> {
    pub fn new(storage: S, output: OutputPaths, top: usize) -> Self {
        Self { corpus: Corpus::new(), storage, log: QueryLog::new(), output, top }
    }

    #[cfg(test)]
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Read commands until `quit` or end of input, then print the query summary.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        writeln!(out, "{MENU}")?;
        for line in input.lines() {
            let line = line?;
            let action = match Action::parse(&line) {
                Ok(action) => action,
                Err(msg) => {
                    writeln!(out, "Error: {msg}\n{MENU}")?;
                    continue;
                }
            };
            if !self.dispatch(action, out)? {
                break;
            }
        }
        write_query_summary(out, &self.log.summary(&self.corpus))?;
        Ok(())
    }

    /// Returns false once the user asks to quit. Recoverable errors are
    /// reported to `out` and the loop carries on.
    fn dispatch<W: Write>(&mut self, action: Action, out: &mut W) -> Result<bool> {
        match action {
            Action::Add(name) => match self.corpus.open(&self.storage, &name) {
                Ok(doc) => {
                    let summary = doc.summary();
                    writeln!(out, "Added {} ({} words, {} distinct)", summary.name, summary.total_words, summary.distinct_words)?;
                }
                Err(err) => report_error(out, &err)?,
            },
            Action::Close(name) => match self.corpus.close(&name) {
                Ok(doc) => writeln!(out, "Closed {}", doc.name())?,
                Err(err) => report_error(out, &err)?,
            },
            Action::Query(word) => match query(&self.corpus, &word) {
                Ok(result) => {
                    self.log.record(&result.word);
                    write_query_result(out, &result)?;
                }
                Err(err) => report_error(out, &err)?,
            },
            Action::Summary => write_summaries(out, &self.corpus.summaries())?,
            Action::Concordance => {
                if self.corpus.is_empty() {
                    writeln!(out, "Error: add at least one file first")?;
                } else {
                    let concordance = Concordance::for_corpus(&self.corpus);
                    let report = AggregateReport::compute_with_limit(&self.corpus, &concordance, self.top);
                    write_concordance(out, &concordance)?;
                    writeln!(out)?;
                    write_extra_lists(out, &report)?;
                    let saved = save_concordance(&self.output, &concordance)
                        .and_then(|c| save_extra_lists(&self.output, &report).map(|e| (c, e)));
                    match saved {
                        Ok((c, e)) => writeln!(
                            out,
                            "\nConcordance written to {}\nExtra lists written to {}",
                            c.display(),
                            e.display()
                        )?,
                        Err(err) => report_error(out, &err)?,
                    }
                }
            }
            Action::Quit => return Ok(false),
        }
        Ok(true)
    }
}

fn report_error<W: Write>(out: &mut W, err: &Error) -> std::io::Result<()> {
    tracing::debug!(%err, "command rejected");
    writeln!(out, "Error: {err}")
}
