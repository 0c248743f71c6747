//! Integration tests tokenizing complete D# programs
//!
//! These tests assert exact token sequences for whole programs, the way a
//! downstream parser would consume them.

use dsharp_lex::{tokenize, Token, TokenKind};
use rstest::rstest;

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|token| token.kind).collect()
}

#[rstest]
#[case("note", TokenKind::Note)]
#[case("play", TokenKind::Play)]
#[case("repeat", TokenKind::Repeat)]
#[case("melody", TokenKind::Melody)]
#[case("chord", TokenKind::Chord)]
fn test_each_keyword_wins_over_identifier(#[case] source: &str, #[case] expected: TokenKind) {
    let tokens = tokenize(source);
    assert_eq!(tokens, vec![Token::new(expected, source)]);
}

#[rstest]
#[case("//", TokenKind::Sharp)]
#[case("--", TokenKind::Flat)]
#[case("=", TokenKind::Assign)]
#[case("{", TokenKind::OpenBlock)]
#[case("}", TokenKind::CloseBlock)]
fn test_each_symbol(#[case] source: &str, #[case] expected: TokenKind) {
    let tokens = tokenize(source);
    assert_eq!(tokens, vec![Token::new(expected, source)]);
}

#[test]
fn test_note_declaration_program() {
    let source = "note n = \"C#\"\nplay n";
    let tokens = tokenize(source);

    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Note, "note"),     // "note"
            Token::new(TokenKind::Identifier, "n"),  // "n"
            Token::new(TokenKind::Assign, "="),      // "="
            Token::new(TokenKind::String, "\"C#\""), // "\"C#\""
            Token::new(TokenKind::Play, "play"),     // "play"
            Token::new(TokenKind::Identifier, "n"),  // "n"
        ]
    );
}

#[test]
fn test_melody_with_list_program() {
    let source = "melody tune = [n1, n2, n3]\nplay tune";
    let tokens = tokenize(source);

    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Melody, "melody"),        // "melody"
            Token::new(TokenKind::Identifier, "tune"),      // "tune"
            Token::new(TokenKind::Assign, "="),             // "="
            Token::new(TokenKind::List, "[n1, n2, n3]"),    // the raw list
            Token::new(TokenKind::Play, "play"),            // "play"
            Token::new(TokenKind::Identifier, "tune"),      // "tune"
        ]
    );
}

#[test]
fn test_repeat_block_program() {
    let source = "repeat 4 {\n  play tune\n}";
    let tokens = tokenize(source);

    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Repeat, "repeat"),   // "repeat"
            Token::new(TokenKind::Number, "4"),        // "4"
            Token::new(TokenKind::OpenBlock, "{"),     // "{"
            Token::new(TokenKind::Play, "play"),       // "play"
            Token::new(TokenKind::Identifier, "tune"), // "tune"
            Token::new(TokenKind::CloseBlock, "}"),    // "}"
        ]
    );
}

#[test]
fn test_chord_with_accidentals_program() {
    let source = "chord c = \"CeG\"\nnote up = \"a#\" //\nnote down = \"b\" --";
    let tokens = tokenize(source);

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Chord,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::String,
            TokenKind::Note,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::String,
            TokenKind::Sharp,
            TokenKind::Note,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::String,
            TokenKind::Flat,
        ]
    );
}

#[test]
fn test_invalid_program_still_tokenizes() {
    // Tokenization never fails; a syntactically broken program yields a
    // stream with OTHER tokens in unexpected places, and rejecting it is
    // the parser's job.
    let source = "note ? = \"XYZ\"";
    let tokens = tokenize(source);

    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Note, "note"),      // "note"
            Token::new(TokenKind::Other, "?"),        // "?"
            Token::new(TokenKind::Assign, "="),       // "="
            Token::new(TokenKind::Other, "\""),       // "X", "Y", "Z" are not note letters
            Token::new(TokenKind::Identifier, "XYZ"), // so the quote degrades to OTHER
            Token::new(TokenKind::Other, "\""),       // and the closer too
        ]
    );
}

#[test]
fn test_adjacent_lists_and_blocks() {
    let source = "[1,2] [3,4] {}";
    let tokens = tokenize(source);

    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::List, "[1,2]"),   // stops at the first "]"
            Token::new(TokenKind::List, "[3,4]"),   // not one span to the last "]"
            Token::new(TokenKind::OpenBlock, "{"),  // "{"
            Token::new(TokenKind::CloseBlock, "}"), // "}"
        ]
    );
}

#[test]
fn test_tokenizing_twice_is_identical() {
    let source = "note n = \"C#\"\nmelody m = [n]\nrepeat 2 { play m }";
    assert_eq!(tokenize(source), tokenize(source));
}
