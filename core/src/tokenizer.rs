use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::borrow::{Borrow, Cow};
use std::fmt;

lazy_static! {
    /// Letters with single internal hyphens. Everything else separates words.
    static ref WORD_RE: Regex = Regex::new(r"[A-Za-z]+(?:-[A-Za-z]+)*").expect("valid regex");
    static ref LINE_TERMINATOR_RE: Regex = Regex::new(r"\r\n?").expect("valid regex");
    static ref LINE_BREAK_HYPHEN_RE: Regex = Regex::new(r"-\n").expect("valid regex");
}

/// A normalized word: lowercase ASCII letters, optionally joined by single hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    /// Callers guarantee `word` already matches the token grammar.
    pub(crate) fn from_match(word: &str) -> Self {
        Token(word.to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Sort key used for concordance order: hyphens compare as spaces.
    pub fn sort_key(&self) -> String {
        sort_key(&self.0)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Token {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub(crate) fn sort_key(word: &str) -> String {
    word.replace('-', " ")
}

pub(crate) fn is_word(candidate: &str) -> bool {
    WORD_RE
        .find(candidate)
        .map_or(false, |m| m.start() == 0 && m.end() == candidate.len())
}

/// Rewrite `\r\n` and lone `\r` as `\n`.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    LINE_TERMINATOR_RE.replace_all(text, "\n")
}

/// Tokenize a whole text. A hyphen directly before a line break is removed
/// together with the break, so `exam-\nple` yields `example`.
pub fn tokenize(text: &str) -> Vec<Token> {
    let normalized = normalize_line_endings(text);
    let joined = LINE_BREAK_HYPHEN_RE.replace_all(&normalized, "");
    tokenize_line(&joined)
}

/// Tokenize a single physical line without any cross-line joining.
pub fn tokenize_line(line: &str) -> Vec<Token> {
    WORD_RE.find_iter(line).map(|m| Token::from_match(m.as_str())).collect()
}

/// Tokenize text line by line, yielding `(line, word, token)` with both
/// positions 1-based. Blank lines still advance the line number.
pub fn tokenize_with_positions(text: &str) -> Vec<(usize, usize, Token)> {
    tokenize_lines(normalize_line_endings(text).lines())
}

/// Same numbering as [`tokenize_with_positions`] over lines already split by the caller.
pub fn tokenize_lines<'a, I>(lines: I) -> Vec<(usize, usize, Token)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = Vec::new();
    for (line_idx, line) in lines.into_iter().enumerate() {
        for (word_idx, token) in tokenize_line(line).into_iter().enumerate() {
            out.push((line_idx + 1, word_idx + 1, token));
        }
    }
    out
}
