use crate::concordance::Concordance;
use crate::corpus::Corpus;
use crate::tokenizer::Token;
use serde::Serialize;

/// Number of words in the frequency ranking.
pub const TOP_N: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordFrequency {
    pub word: Token,
    pub total: usize,
    pub documents: usize,
}

/// Cross-document statistics over a corpus snapshot.
///
/// Nothing is updated incrementally: rebuild after the corpus changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateReport {
    pub top: Vec<WordFrequency>,
    pub in_all: Vec<Token>,
    pub in_one_only: Vec<(Token, usize)>,
}

impl AggregateReport {
    pub fn compute(corpus: &Corpus, concordance: &Concordance) -> Self {
        Self::compute_with_limit(corpus, concordance, TOP_N)
    }

    /// Words are visited in concordance order, and counted against the corpus
    /// token lists.
    pub fn compute_with_limit(corpus: &Corpus, concordance: &Concordance, limit: usize) -> Self {
        let docs = corpus.documents();
        let mut frequencies = Vec::with_capacity(concordance.len());
        let mut in_all = Vec::new();
        let mut in_one_only = Vec::new();

        for word in concordance.words() {
            let mut total = 0;
            let mut containing = Vec::new();
            for (idx, doc) in docs.iter().enumerate() {
                let n = doc.count(word.as_str());
                if n > 0 {
                    total += n;
                    containing.push(idx + 1);
                }
            }
            if !docs.is_empty() && containing.len() == docs.len() {
                in_all.push(word.clone());
            }
            if let [only] = containing.as_slice() {
                in_one_only.push((word.clone(), *only));
            }
            frequencies.push(WordFrequency { word: word.clone(), total, documents: containing.len() });
        }

        // stable: equal totals keep concordance order
        frequencies.sort_by(|a, b| b.total.cmp(&a.total));
        frequencies.truncate(limit);

        tracing::info!(
            documents = docs.len(),
            words = concordance.len(),
            in_all = in_all.len(),
            in_one_only = in_one_only.len(),
            "aggregate report computed"
        );
        Self { top: frequencies, in_all, in_one_only }
    }
}
