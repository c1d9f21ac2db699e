use concord_core::tokenizer::{tokenize, tokenize_with_positions};
use regex::Regex;

#[test]
fn it_normalizes_and_strips_separators() {
    let toks = tokenize("Running, runner's RUN! The cafe's 2nd menu: well-known -- x-ray.");
    let words: Vec<&str> = toks.iter().map(|t| t.as_str()).collect();
    assert_eq!(
        words,
        vec!["running", "runner", "s", "run", "the", "cafe", "s", "nd", "menu", "well-known", "x-ray"]
    );
}

#[test]
fn every_token_matches_the_word_grammar() {
    let grammar = Regex::new(r"^[a-z]+(-[a-z]+)*$").unwrap();
    let text = "-lead trail- a--b 9lives c-3po Ünïcode snake_case e-mail\tTAB\r\nnext-\nline ---";
    for token in tokenize(text) {
        assert!(grammar.is_match(token.as_str()), "bad token {token}");
    }
    for (_, _, token) in tokenize_with_positions(text) {
        assert!(grammar.is_match(token.as_str()), "bad token {token}");
    }
}

#[test]
fn it_is_deterministic() {
    let text = "Some text with hyph-\nenation and repeats, repeats.";
    assert_eq!(tokenize(text), tokenize(text));
    assert_eq!(tokenize_with_positions(text), tokenize_with_positions(text));
}

#[test]
fn whole_text_and_line_paths_differ_on_line_break_hyphens() {
    let text = "a exam-\nple";
    let whole: Vec<String> = tokenize(text).into_iter().map(|t| t.into_string()).collect();
    assert_eq!(whole, vec!["a", "example"]);

    let lines: Vec<(usize, usize, String)> = tokenize_with_positions(text)
        .into_iter()
        .map(|(l, w, t)| (l, w, t.into_string()))
        .collect();
    assert_eq!(
        lines,
        vec![(1, 1, "a".to_string()), (1, 2, "exam".to_string()), (2, 1, "ple".to_string())]
    );
}
