use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Consumes the text matched by the pattern and optionally produces a token.
pub type RegexHandler = fn(&mut Lexer, &Regex) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    fn new(pattern: &str, handler: RegexHandler) -> Self {
        RegexPattern {
            regex: Regex::new(pattern).expect("lexer patterns are valid regular expressions"),
            handler,
        }
    }
}

lazy_static! {
    // Order matters: the first pattern matching at the current position wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new("^[ \t\r]+", skip_handler),
        RegexPattern::new("^\n+", newline_handler),
        RegexPattern::new("^//[^\n]*", skip_handler),
        RegexPattern::new("^[0-9]+\\.[0-9]+", decimal_handler),
        RegexPattern::new("^[0-9]+", number_handler),
        RegexPattern::new("^\"(?:[^\"\\\\\n]|\\\\.)*\"", string_handler),
        RegexPattern::new("^[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        RegexPattern::new("^=", MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=")),
        RegexPattern::new("^\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        RegexPattern::new("^-", MK_DEFAULT_HANDLER!(TokenKind::Dash, "-")),
        RegexPattern::new("^\\*", MK_DEFAULT_HANDLER!(TokenKind::Star, "*")),
        RegexPattern::new("^/", MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")),
        RegexPattern::new("^\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")),
        RegexPattern::new("^\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")),
        RegexPattern::new("^;", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
    ];
}

/// A lazy tokenizer over one source text.
///
/// Tokens are produced on demand through [`Iterator`]; `None` marks the end of
/// input and the lexer is not restartable. Illegal characters are skipped one
/// at a time and collected in [`Lexer::errors`] instead of stopping the scan.
pub struct Lexer {
    source: String,
    pos: usize,
    line: u32,
    file: Rc<String>,
    errors: Vec<Error>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            line: 1,
            file: file_name,
            errors: vec![],
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// The current line counter; at end of input, one past every newline consumed.
    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    /// Lexical errors collected so far.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    fn matched(&self, regex: &Regex) -> Option<String> {
        regex.find(self.remainder()).map(|m| m.as_str().to_string())
    }

    fn skip_illegal_character(&mut self) {
        if let Some(character) = self.remainder().chars().next() {
            debug!(line = self.line, ?character, "skipping illegal character");
            self.errors.push(Error::new(
                ErrorImpl::IllegalCharacter { character },
                Position(self.line, Rc::clone(&self.file)),
            ));
            self.advance_n(character.len_utf8());
        }
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        while !self.at_eof() {
            let mut matched = false;

            for pattern in PATTERNS.iter() {
                if !pattern.regex.is_match(self.remainder()) {
                    continue;
                }

                matched = true;
                if let Some(token) = (pattern.handler)(self, &pattern.regex) {
                    trace!(line = token.line, kind = %token.kind, value = %token.value, "token");
                    return Some(token);
                }
                break;
            }

            if !matched {
                self.skip_illegal_character();
            }
        }

        None
    }
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let matched = lexer.matched(regex)?;
    lexer.advance_n(matched.len());
    None
}

fn newline_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let matched = lexer.matched(regex)?;
    lexer.line += matched.len() as u32;
    lexer.advance_n(matched.len());
    None
}

fn decimal_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let matched = lexer.matched(regex)?;
    lexer.advance_n(matched.len());
    Some(MK_TOKEN!(TokenKind::Decimal, matched, lexer.line))
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let matched = lexer.matched(regex)?;
    lexer.advance_n(matched.len());
    Some(MK_TOKEN!(TokenKind::Number, matched, lexer.line))
}

fn string_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let matched = lexer.matched(regex)?;
    lexer.advance_n(matched.len());

    let string_literal = &matched[1..matched.len() - 1];
    Some(MK_TOKEN!(TokenKind::String, unescape(string_literal), lexer.line))
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let value = lexer.matched(regex)?;
    lexer.advance_n(value.len());

    let kind = RESERVED_LOOKUP
        .get(value.as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    Some(MK_TOKEN!(kind, value, lexer.line))
}

/// Resolves backslash escapes; unknown escapes keep their backslash.
fn unescape(string_literal: &str) -> String {
    let mut result = String::new();
    let mut chars = string_literal.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        match chars.peek().copied() {
            Some('n') => {
                result.push('\n');
                chars.next();
            }
            Some('t') => {
                result.push('\t');
                chars.next();
            }
            Some('r') => {
                result.push('\r');
                chars.next();
            }
            Some('\\') => {
                result.push('\\');
                chars.next();
            }
            Some('"') => {
                result.push('"');
                chars.next();
            }
            Some('\'') => {
                result.push('\'');
                chars.next();
            }
            Some('0') => {
                result.push('\0');
                chars.next();
            }
            Some('x') => {
                chars.next();
                let mut hex = String::new();

                while hex.len() < 2 {
                    match chars.peek() {
                        Some(ch) if ch.is_ascii_hexdigit() => {
                            hex.push(*ch);
                            chars.next();
                        }
                        _ => break,
                    }
                }

                match u8::from_str_radix(&hex, 16) {
                    Ok(byte) => result.push(byte as char),
                    Err(_) => {
                        result.push_str("\\x");
                        result.push_str(&hex);
                    }
                }
            }
            _ => result.push(ch),
        }
    }

    result
}

/// Eagerly lexes the whole source, returning every token and every lexical error.
pub fn tokenize(source: String, file: Option<String>) -> (Vec<Token>, Vec<Error>) {
    let mut lexer = Lexer::new(source, file);
    let tokens = lexer.by_ref().collect();

    (tokens, lexer.errors)
}
