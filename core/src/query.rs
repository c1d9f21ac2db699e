use crate::corpus::Corpus;
use crate::error::Result;
use crate::tokenizer::Token;
use crate::validator::validate_word;
use serde::Serialize;

/// Occurrences of one word, one entry per document in corpus order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    pub word: Token,
    pub counts: Vec<(String, usize)>,
}

impl QueryResult {
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }
}

/// Count `word` in every document of `corpus`.
pub fn count_word(corpus: &Corpus, word: &Token) -> QueryResult {
    let counts = corpus
        .documents()
        .iter()
        .map(|doc| (doc.name().to_string(), doc.count(word.as_str())))
        .collect();
    QueryResult { word: word.clone(), counts }
}

/// Validate raw input, then count it.
pub fn query(corpus: &Corpus, input: &str) -> Result<QueryResult> {
    let word = validate_word(input)?;
    Ok(count_word(corpus, &word))
}

/// Distinct words queried during a session, in first-query order.
#[derive(Debug, Clone, Default)]
pub struct QueryLog {
    words: Vec<Token>,
}

/// Word-by-document count matrix for every logged word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuerySummary {
    pub documents: Vec<String>,
    pub rows: Vec<(Token, Vec<usize>)>,
}

impl QueryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, word: &Token) {
        if !self.words.contains(word) {
            self.words.push(word.clone());
        }
    }

    pub fn words(&self) -> &[Token] {
        &self.words
    }

    /// Recount every logged word against the corpus as it is now.
    pub fn summary(&self, corpus: &Corpus) -> QuerySummary {
        let documents = corpus.documents().iter().map(|d| d.name().to_string()).collect();
        let rows = self
            .words
            .iter()
            .map(|word| {
                let counts = corpus.documents().iter().map(|d| d.count(word.as_str())).collect();
                (word.clone(), counts)
            })
            .collect();
        QuerySummary { documents, rows }
    }
}
