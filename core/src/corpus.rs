use crate::error::{Error, Result};
use crate::storage::{is_text_file, Storage};
use crate::tokenizer::{normalize_line_endings, tokenize, Token};
use serde::Serialize;
use std::collections::HashMap;
use std::io;

/// Maximum number of documents a corpus may hold at once.
pub const MAX_DOCUMENTS: usize = 10;

/// A named text and the tokens extracted from it.
#[derive(Debug, Clone)]
pub struct Document {
    name: String,
    text: String,
    tokens: Vec<Token>,
    /// Occurrences per distinct token, built once at creation.
    vocabulary: HashMap<Token, usize>,
}

/// Per-document counts shown after files are loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSummary {
    pub name: String,
    pub total_words: usize,
    pub distinct_words: usize,
}

impl Document {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        let name = name.into();
        let text: String = text.into();
        let text = normalize_line_endings(&text).into_owned();
        let tokens = tokenize(&text);
        let mut vocabulary: HashMap<Token, usize> = HashMap::new();
        for token in &tokens {
            *vocabulary.entry(token.clone()).or_insert(0) += 1;
        }
        tracing::debug!(name = %name, tokens = tokens.len(), distinct = vocabulary.len(), "tokenized document");
        Self { name, text, tokens, vocabulary }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of tokens equal to `word`.
    pub fn count(&self, word: &str) -> usize {
        self.vocabulary.get(word).copied().unwrap_or(0)
    }

    pub fn vocabulary(&self) -> impl Iterator<Item = (&Token, usize)> {
        self.vocabulary.iter().map(|(token, count)| (token, *count))
    }

    pub fn summary(&self) -> DocumentSummary {
        DocumentSummary {
            name: self.name.clone(),
            total_words: self.tokens.len(),
            distinct_words: self.vocabulary.len(),
        }
    }
}

/// Ordered, bounded set of open documents with unique names.
///
/// Mutation goes through [`Corpus::add`], [`Corpus::open`] and [`Corpus::close`];
/// each either succeeds fully or leaves the corpus untouched. The corpus is not
/// synchronized; share it across threads behind a lock.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.documents.len() >= MAX_DOCUMENTS
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// 1-based position of the named document.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.documents.iter().position(|d| d.name == name).map(|i| i + 1)
    }

    fn check_can_add(&self, name: &str) -> Result<()> {
        if self.contains(name) {
            tracing::warn!(name, "duplicate document rejected");
            return Err(Error::DuplicateDocument(name.to_string()));
        }
        if self.is_full() {
            tracing::warn!(name, limit = MAX_DOCUMENTS, "corpus full");
            return Err(Error::CapacityExceeded { limit: MAX_DOCUMENTS });
        }
        Ok(())
    }

    /// Tokenize `text` and append it as a new document.
    pub fn add(&mut self, name: impl Into<String>, text: impl Into<String>) -> Result<&Document> {
        let name = name.into();
        self.check_can_add(&name)?;
        self.push(Document::new(name, text))
    }

    /// Append an already tokenized document.
    pub fn push(&mut self, document: Document) -> Result<&Document> {
        self.check_can_add(&document.name)?;
        tracing::info!(name = %document.name, position = self.documents.len() + 1, "document added");
        self.documents.push(document);
        Ok(&self.documents[self.documents.len() - 1])
    }

    /// Fetch `name` from `storage` and append it. Only `.txt` names are accepted.
    pub fn open<S: Storage + ?Sized>(&mut self, storage: &S, name: &str) -> Result<&Document> {
        if !is_text_file(name) {
            return Err(Error::NotTextFile(name.to_string()));
        }
        if !storage.exists(name) {
            return Err(Error::SourceUnavailable {
                name: name.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
            });
        }
        self.check_can_add(name)?;
        let text = storage.read(name)?;
        self.push(Document::new(name, text))
    }

    /// Remove the named document, keeping the order of the rest.
    pub fn close(&mut self, name: &str) -> Result<Document> {
        let idx = self
            .documents
            .iter()
            .position(|d| d.name == name)
            .ok_or_else(|| Error::UnknownDocument(name.to_string()))?;
        let removed = self.documents.remove(idx);
        tracing::info!(name, remaining = self.documents.len(), "document closed");
        Ok(removed)
    }

    pub fn summaries(&self) -> Vec<DocumentSummary> {
        self.documents.iter().map(Document::summary).collect()
    }
}
