//! Unit tests for the lexer module.
//!
//! Covers keywords and identifiers, numeric and string literals, operators,
//! comments, line tracking and illegal-character recovery.

use super::{
    lexer::{tokenize, Lexer},
    tokens::TokenKind,
};
use crate::errors::errors::{ErrorImpl, ErrorKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    let (tokens, _) = tokenize(source.to_string(), Some("test.tc".to_string()));
    tokens.iter().map(|token| token.kind).collect()
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("int float print"),
        vec![TokenKind::Int, TokenKind::Float, TokenKind::Print]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore CamelCase integer printer".to_string();
    let (tokens, errors) = tokenize(source, Some("test.tc".to_string()));

    assert!(errors.is_empty());
    let values: Vec<&str> = tokens.iter().map(|token| token.value.as_str()).collect();
    assert_eq!(
        values,
        vec!["foo", "bar", "baz_123", "_underscore", "CamelCase", "integer", "printer"]
    );
    assert!(tokens.iter().all(|token| token.kind == TokenKind::Identifier));
}

#[test]
fn test_tokenize_numbers() {
    let (tokens, _) = tokenize("42 3.14 0 100.5".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Decimal);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].value, "0");
    assert_eq!(tokens[3].kind, TokenKind::Decimal);
    assert_eq!(tokens[3].value, "100.5");
    assert_eq!(tokens.len(), 4);
}

#[test]
fn test_trailing_dot_is_not_a_decimal() {
    let (tokens, errors) = tokenize("3.".to_string(), None);

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_impl(), &ErrorImpl::IllegalCharacter { character: '.' });
}

#[test]
fn test_tokenize_strings() {
    let source = r#""hello" "world" "multiple words" """#.to_string();
    let (tokens, _) = tokenize(source, None);

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].value, "world");
    assert_eq!(tokens[2].value, "multiple words");
    assert_eq!(tokens[3].kind, TokenKind::String);
    assert_eq!(tokens[3].value, "");
}

#[test]
fn test_tokenize_string_escapes() {
    let source = r#""hello\nworld" "tab\there" "backslash\\" "hex\x41" "keep\q""#.to_string();
    let (tokens, _) = tokenize(source, None);

    assert_eq!(tokens[0].value, "hello\nworld");
    assert_eq!(tokens[1].value, "tab\there");
    assert_eq!(tokens[2].value, "backslash\\");
    assert_eq!(tokens[3].value, "hexA");
    assert_eq!(tokens[4].value, "keep\\q");
}

#[test]
fn test_tokenize_escaped_quote_in_string() {
    let (tokens, _) = tokenize(r#""quote\"test""#.to_string(), None);

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "quote\"test");
}

#[test]
fn test_unterminated_string_is_lexed_as_illegal_quote() {
    let (tokens, errors) = tokenize("\"abc\nx".to_string(), None);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_impl(), &ErrorImpl::IllegalCharacter { character: '"' });
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "abc");
    assert_eq!(tokens[1].value, "x");
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn test_tokenize_operators_and_punctuation() {
    assert_eq!(
        kinds("= + - * / ( ) ;"),
        vec![
            TokenKind::Assignment,
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    let source = "int x = 5; // this is a comment\nx = x / 2; //\n";
    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Int,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Identifier,
            TokenKind::Slash,
            TokenKind::Number,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn test_tokenize_tracks_lines() {
    let source = "int a = 1;\n\n\nprint(a); // done\n  float b\t= 2.5;\r\n".to_string();
    let (tokens, errors) = tokenize(source, None);

    assert!(errors.is_empty());
    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[5].kind, TokenKind::Print);
    assert_eq!(tokens[5].line, 4);
    assert_eq!(tokens[10].kind, TokenKind::Float);
    assert_eq!(tokens[10].line, 5);
    assert_eq!(tokens.last().map(|token| token.line), Some(5));
}

#[test]
fn test_line_counter_at_end_of_input() {
    let mut lexer = Lexer::new("int a = 1\n\n".to_string(), None);
    assert_eq!(lexer.by_ref().count(), 4);
    assert_eq!(lexer.line(), 3);
    assert_eq!(lexer.next(), None);
}

#[test]
fn test_illegal_characters_are_skipped() {
    let source = "int x = 5 @ ;\n# print(x);".to_string();
    let (tokens, errors) = tokenize(source, Some("test.tc".to_string()));

    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].kind(), ErrorKind::LexicalError);
    assert_eq!(errors[0].line(), 1);
    assert_eq!(errors[0].to_string(), "error in line 1: illegal character '@'");
    assert_eq!(errors[1].line(), 2);
    assert_eq!(errors[1].get_impl(), &ErrorImpl::IllegalCharacter { character: '#' });

    assert_eq!(tokens.len(), 10);
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::Print);
}

#[test]
fn test_illegal_multibyte_character() {
    let (tokens, errors) = tokenize("ä1".to_string(), None);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_impl(), &ErrorImpl::IllegalCharacter { character: 'ä' });
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].value, "1");
}

#[test]
fn test_tokenize_empty_source() {
    let (tokens, errors) = tokenize(String::new(), None);
    assert!(tokens.is_empty());
    assert!(errors.is_empty());
}

#[test]
fn test_lexer_is_lazy() {
    let mut lexer = Lexer::new("print(1); @".to_string(), None);

    assert_eq!(lexer.next().map(|token| token.kind), Some(TokenKind::Print));
    // The illegal character further ahead has not been scanned yet.
    assert!(lexer.errors().is_empty());

    assert_eq!(lexer.by_ref().count(), 4);
    assert_eq!(lexer.errors().len(), 1);
}

#[test]
fn test_token_display() {
    let (tokens, _) = tokenize("x = 42 + 1.5;\nprint(\"hi\");".to_string(), None);
    let lines: Vec<String> = tokens.iter().map(|token| token.to_string()).collect();

    assert_eq!(lines[0], "1 Identifier (\"x\")");
    assert_eq!(lines[1], "1 Assignment (=)");
    assert_eq!(lines[2], "1 Number (\"42\")");
    assert_eq!(lines[3], "1 Plus (+)");
    assert_eq!(lines[4], "1 Decimal (\"1.5\")");
    assert_eq!(lines[5], "1 Semicolon (;)");
    assert_eq!(lines[6], "2 Print (print)");
    assert_eq!(lines[8], "2 String (\"hi\")");
}

#[test]
fn test_token_grammar_names() {
    assert_eq!(kinds_named("x = -(1) / 2.0 * 3 + 4;"), vec![
        "ID", "ASSIGN", "MINUS", "LPAREN", "NUMBER", "RPAREN", "DIVIDE", "DECIMAL", "TIMES",
        "NUMBER", "PLUS", "NUMBER", "SEMICOLON",
    ]);
    assert_eq!(kinds_named("int float print \"s\""), vec!["INT", "FLOAT", "PRINT", "STRING"]);
}

#[test]
fn test_token_quoted_value() {
    let (tokens, _) = tokenize(
        "0042 2.50 1.0 ; abc \"it's\" \"say \\\"hi\\\"\" \"a\\nb\"".to_string(),
        None,
    );
    let values: Vec<String> = tokens.iter().map(|token| token.quoted_value()).collect();

    assert_eq!(
        values,
        vec!["42", "2.5", "1.0", "';'", "'abc'", "\"it's\"", "'say \"hi\"'", "'a\\nb'"]
    );
}

fn kinds_named(source: &str) -> Vec<&'static str> {
    let (tokens, _) = tokenize(source.to_string(), None);
    tokens.iter().map(|token| token.kind.grammar_name()).collect()
}
