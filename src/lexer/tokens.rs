use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::ast::types::format_float;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("int", TokenKind::Int);
        map.insert("float", TokenKind::Float);
        map.insert("print", TokenKind::Print);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Number,  // 42
    Decimal, // 4.2
    String,
    Identifier,

    OpenParen,
    CloseParen,

    Assignment, // =
    Semicolon,

    Plus,
    Dash,
    Slash,
    Star,

    // Reserved
    Int,
    Float,
    Print,
}

impl TokenKind {
    /// Whether a token of this kind can begin a statement.
    pub fn starts_statement(&self) -> bool {
        matches!(
            self,
            TokenKind::Int | TokenKind::Float | TokenKind::Print | TokenKind::Identifier
        )
    }

    /// Name of the kind in the grammar's token vocabulary, used in syntax errors.
    pub fn grammar_name(&self) -> &'static str {
        match self {
            TokenKind::Number => "NUMBER",
            TokenKind::Decimal => "DECIMAL",
            TokenKind::String => "STRING",
            TokenKind::Identifier => "ID",
            TokenKind::OpenParen => "LPAREN",
            TokenKind::CloseParen => "RPAREN",
            TokenKind::Assignment => "ASSIGN",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Plus => "PLUS",
            TokenKind::Dash => "MINUS",
            TokenKind::Slash => "DIVIDE",
            TokenKind::Star => "TIMES",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::Print => "PRINT",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// The lexeme; for strings, the contents with quotes stripped and escapes resolved.
    pub value: String,
    pub line: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_one_of_many(&[
            TokenKind::String,
            TokenKind::Identifier,
            TokenKind::Number,
            TokenKind::Decimal,
        ]) {
            write!(f, "{} {} ({:?})", self.line, self.kind, self.value)
        } else {
            write!(f, "{} {} ({})", self.line, self.kind, self.value)
        }
    }
}

impl Token {
    /// The value as it appears in syntax errors: numbers bare and normalised
    /// (`007` is `7`, `2.50` is `2.5`), everything else quoted.
    pub fn quoted_value(&self) -> String {
        match self.kind {
            TokenKind::Number => match self.value.parse::<i64>() {
                Ok(value) => value.to_string(),
                Err(_) => self.value.clone(),
            },
            TokenKind::Decimal => match self.value.parse::<f64>() {
                Ok(value) => format_float(value),
                Err(_) => self.value.clone(),
            },
            _ => quote(&self.value),
        }
    }

    fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}

// Single quotes unless the text contains one and no double quote.
fn quote(text: &str) -> String {
    let delimiter = if text.contains('\'') && !text.contains('"') { '"' } else { '\'' };
    let mut quoted = String::from(delimiter);

    for ch in text.chars() {
        match ch {
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            '\r' => quoted.push_str("\\r"),
            ch if ch == delimiter => {
                quoted.push('\\');
                quoted.push(ch);
            }
            ch => quoted.push(ch),
        }
    }

    quoted.push(delimiter);
    quoted
}
