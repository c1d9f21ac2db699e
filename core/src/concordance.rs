use crate::corpus::Corpus;
use crate::error::{Error, Result};
use crate::tokenizer::{sort_key, tokenize_lines, tokenize_with_positions, Token};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// One token occurrence: document, line and word-in-line, all 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    pub document: usize,
    pub line: usize,
    pub word: usize,
}

impl Location {
    pub fn new(document: usize, line: usize, word: usize) -> Self {
        Self { document, line, word }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.document, self.line, self.word)
    }
}

impl Serialize for Location {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConcordanceEntry {
    pub word: Token,
    /// In the order the occurrences were scanned.
    pub locations: Vec<Location>,
}

impl fmt::Display for ConcordanceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.word)?;
        for (i, loc) in self.locations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{loc}")?;
        }
        f.write_str(".")
    }
}

/// Word-to-locations index, iterated with hyphens sorting as spaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Concordance {
    // keyed by `sort_key(word)`, which is injective over valid tokens
    entries: BTreeMap<String, ConcordanceEntry>,
}

impl Concordance {
    /// Index every document of the corpus, numbered by corpus position.
    pub fn for_corpus(corpus: &Corpus) -> Self {
        let mut builder = ConcordanceBuilder::new();
        for (idx, doc) in corpus.documents().iter().enumerate() {
            builder.add_text(idx + 1, doc.text());
        }
        builder.build()
    }

    /// Index a single document, keeping its corpus position as document number.
    pub fn for_document(corpus: &Corpus, name: &str) -> Result<Self> {
        let position = corpus
            .position(name)
            .ok_or_else(|| Error::UnknownDocument(name.to_string()))?;
        let doc = &corpus.documents()[position - 1];
        let mut builder = ConcordanceBuilder::new();
        builder.add_text(position, doc.text());
        Ok(builder.build())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, word: &str) -> Option<&ConcordanceEntry> {
        self.entries.get(&sort_key(word))
    }

    /// Entries in traversal order.
    pub fn entries(&self) -> impl Iterator<Item = &ConcordanceEntry> {
        self.entries.values()
    }

    pub fn words(&self) -> impl Iterator<Item = &Token> {
        self.entries.values().map(|e| &e.word)
    }
}

impl Serialize for Concordance {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.values())
    }
}

/// Accumulates locations document by document.
#[derive(Debug, Default)]
pub struct ConcordanceBuilder {
    entries: BTreeMap<String, ConcordanceEntry>,
}

impl ConcordanceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan the physical lines of one document. Lines and words are numbered from 1.
    pub fn add_document<'a, I>(&mut self, document: usize, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.record(document, tokenize_lines(lines))
    }

    /// Split `text` on any line terminator and scan it like [`Self::add_document`].
    pub fn add_text(&mut self, document: usize, text: &str) -> &mut Self {
        self.record(document, tokenize_with_positions(text))
    }

    fn record(&mut self, document: usize, positions: Vec<(usize, usize, Token)>) -> &mut Self {
        let occurrences = positions.len();
        for (line, word, token) in positions {
            self.entries
                .entry(token.sort_key())
                .or_insert_with(|| ConcordanceEntry { word: token, locations: Vec::new() })
                .locations
                .push(Location::new(document, line, word));
        }
        tracing::debug!(document, occurrences, "indexed document");
        self
    }

    pub fn build(self) -> Concordance {
        tracing::info!(words = self.entries.len(), "concordance built");
        Concordance { entries: self.entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hyphen_sorts_as_space() {
        let mut builder = ConcordanceBuilder::new();
        builder.add_document(1, ["coop co-op a"]);
        let concordance = builder.build();
        let words: Vec<_> = concordance.words().map(Token::as_str).collect();
        assert_eq!(words, vec!["a", "co-op", "coop"]);
    }

    #[test]
    fn renders_locations_in_scan_order() {
        let mut builder = ConcordanceBuilder::new();
        builder.add_document(1, ["the cat", "", "The end"]);
        builder.add_document(2, ["THE"]);
        let concordance = builder.build();
        assert_eq!(concordance.get("the").unwrap().to_string(), "the 1.1.1; 1.3.1; 2.1.1.");
        assert_eq!(concordance.get("end").unwrap().to_string(), "end 1.3.2.");
    }

    #[test]
    fn text_lines_split_on_any_terminator() {
        let mut builder = ConcordanceBuilder::new();
        builder.add_text(1, "alpha\rbeta\r\n\ngamma");
        let concordance = builder.build();
        assert_eq!(concordance.get("beta").unwrap().locations, vec![Location::new(1, 2, 1)]);
        assert_eq!(concordance.get("gamma").unwrap().locations, vec![Location::new(1, 4, 1)]);
    }

    #[test]
    fn location_serializes_as_dotted_string() {
        let json = serde_json::to_string(&Location::new(3, 12, 1)).unwrap();
        assert_eq!(json, "\"3.12.1\"");
    }
}
