use std::io;
use thiserror::Error;

/// Why a candidate word was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidWord {
    /// First character (lowercased) that is neither a letter nor a hyphen.
    IllegalCharacter(char),
    /// Every character is legal but the hyphens are misplaced, or the input is empty.
    Malformed,
}

impl std::fmt::Display for InvalidWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidWord::IllegalCharacter(ch) => write!(
                f,
                "invalid character '{ch}' found; words may only contain abcdefghijklmnopqrstuvwxyz-"
            ),
            InvalidWord::Malformed => {
                write!(f, "words must be letters joined by single hyphens: abcdefghijklmnopqrstuvwxyz-")
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    InvalidWord(InvalidWord),

    #[error("corpus already holds the maximum of {limit} documents")]
    CapacityExceeded { limit: usize },

    #[error("document '{0}' has already been added")]
    DuplicateDocument(String),

    #[error("no open document named '{0}'")]
    UnknownDocument(String),

    #[error("'{0}' is not a .TXT file")]
    NotTextFile(String),

    #[error("cannot read '{name}': {source}")]
    SourceUnavailable {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("write failed: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
