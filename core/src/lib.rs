//! Word indexing for small sets of plain-text documents: tokenization,
//! per-word queries, a sorted concordance and cross-document statistics.

pub mod concordance;
pub mod corpus;
pub mod error;
pub mod output;
pub mod query;
pub mod stats;
pub mod storage;
pub mod tokenizer;
pub mod validator;

pub use concordance::{Concordance, ConcordanceBuilder, ConcordanceEntry, Location};
pub use corpus::{Corpus, Document, DocumentSummary, MAX_DOCUMENTS};
pub use error::{Error, InvalidWord, Result};
pub use query::{count_word, query, QueryLog, QueryResult, QuerySummary};
pub use stats::{AggregateReport, WordFrequency, TOP_N};
pub use storage::{is_text_file, FsStorage, MemoryStorage, Storage};
pub use tokenizer::Token;
pub use validator::validate_word;
