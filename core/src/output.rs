use crate::concordance::Concordance;
use crate::error::Result;
use crate::stats::AggregateReport;
use serde::Serialize;
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const CONCORDANCE_FILE: &str = "CONCORDANCE.TXT";
pub const EXTRA_LISTS_FILE: &str = "ExtraLists.txt";

pub struct OutputPaths {
    pub root: PathBuf,
}

impl OutputPaths {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }
    pub fn concordance(&self) -> PathBuf { self.root.join(CONCORDANCE_FILE) }
    pub fn extra_lists(&self) -> PathBuf { self.root.join(EXTRA_LISTS_FILE) }
}

/// One line per entry: `word loc; loc; ... loc.`
pub fn write_concordance<W: Write>(out: &mut W, concordance: &Concordance) -> Result<()> {
    for entry in concordance.entries() {
        writeln!(out, "{entry}")?;
    }
    Ok(())
}

/// The three labelled sections, in fixed order, separated by blank lines.
pub fn write_extra_lists<W: Write>(out: &mut W, report: &AggregateReport) -> Result<()> {
    writeln!(out, "1. TOP TEN WORDS (Word | Total | Files Appeared In)")?;
    for f in &report.top {
        writeln!(out, "{:>15} {:>10} {:>10}", f.word.as_str(), f.total, f.documents)?;
    }
    writeln!(out)?;

    writeln!(out, "2. WORDS APPEARING AT LEAST ONCE IN ALL FILES:")?;
    for word in &report.in_all {
        writeln!(out, "{:>15}", word.as_str())?;
    }
    writeln!(out)?;

    writeln!(out, "3. WORDS APPEARING IN ONLY ONE FILE (Word | File Number):")?;
    for (word, doc) in &report.in_one_only {
        writeln!(out, "{:>15} {:>10}", word.as_str(), doc)?;
    }
    Ok(())
}

pub fn save_concordance(paths: &OutputPaths, concordance: &Concordance) -> Result<PathBuf> {
    create_dir_all(&paths.root)?;
    let path = paths.concordance();
    let mut f = BufWriter::new(File::create(&path)?);
    write_concordance(&mut f, concordance)?;
    f.flush()?;
    tracing::info!(path = %path.display(), entries = concordance.len(), "wrote concordance");
    Ok(path)
}

pub fn save_extra_lists(paths: &OutputPaths, report: &AggregateReport) -> Result<PathBuf> {
    create_dir_all(&paths.root)?;
    let path = paths.extra_lists();
    let mut f = BufWriter::new(File::create(&path)?);
    write_extra_lists(&mut f, report)?;
    f.flush()?;
    tracing::info!(path = %path.display(), "wrote extra lists");
    Ok(path)
}

/// Concordance and report together as one JSON document.
pub fn write_json<W: Write>(out: &mut W, concordance: &Concordance, report: &AggregateReport) -> Result<()> {
    #[derive(Serialize)]
    struct Bundle<'a> {
        concordance: &'a Concordance,
        report: &'a AggregateReport,
    }
    serde_json::to_writer_pretty(&mut *out, &Bundle { concordance, report }).map_err(std::io::Error::from)?;
    writeln!(out)?;
    Ok(())
}
