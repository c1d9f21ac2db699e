use crate::error::{Error, InvalidWord, Result};
use crate::tokenizer::{is_word, Token};

const LEGAL_CHARACTERS: &str = "abcdefghijklmnopqrstuvwxyz-";

/// Validate a single user-supplied word and return its normalized form.
///
/// The input is not trimmed. When the grammar check fails, the first character
/// outside `a-z` and `-` (compared case-insensitively) is reported; if there is
/// none the word is merely malformed, e.g. `co--op` or `-cat`.
pub fn validate_word(candidate: &str) -> Result<Token> {
    if is_word(candidate) {
        return Ok(Token::from_match(candidate));
    }
    let reason = match first_invalid_char(candidate) {
        Some(ch) => InvalidWord::IllegalCharacter(ch),
        None => InvalidWord::Malformed,
    };
    tracing::debug!(candidate, ?reason, "rejected word");
    Err(Error::InvalidWord(reason))
}

/// First character of the lowercased input that is not a letter or hyphen.
pub fn first_invalid_char(candidate: &str) -> Option<char> {
    candidate
        .chars()
        .flat_map(char::to_lowercase)
        .find(|ch| !LEGAL_CHARACTERS.contains(*ch))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(candidate: &str) -> InvalidWord {
        match validate_word(candidate) {
            Err(Error::InvalidWord(reason)) => reason,
            other => panic!("expected InvalidWord, got {other:?}"),
        }
    }

    #[test]
    fn accepts_and_lowercases() {
        assert_eq!(validate_word("Well-Known").unwrap().as_str(), "well-known");
        assert_eq!(validate_word("CAT").unwrap().as_str(), "cat");
    }

    #[test]
    fn reports_first_illegal_character() {
        assert_eq!(reason("ca t"), InvalidWord::IllegalCharacter(' '));
        assert_eq!(reason("r2d2"), InvalidWord::IllegalCharacter('2'));
        assert_eq!(reason("caf\u{c9}"), InvalidWord::IllegalCharacter('\u{e9}'));
    }

    #[test]
    fn legal_characters_in_bad_shape_are_malformed() {
        assert_eq!(reason("co--op"), InvalidWord::Malformed);
        assert_eq!(reason("-cat"), InvalidWord::Malformed);
        assert_eq!(reason("cat-"), InvalidWord::Malformed);
        assert_eq!(reason(""), InvalidWord::Malformed);
    }
}
