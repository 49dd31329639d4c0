//! Lexer for the Arbor language
//!
//! Uses logos for efficient tokenization.

use logos::Logos;

/// Tokens for the Arbor language
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    // === Keywords ===
    #[token("let")]
    Let,
    #[token("fn")]
    Fn,

    // === Type keywords ===
    #[token("int")]
    Int,
    #[token("string")]
    Str,
    #[token("void")]
    Void,
    #[token("auto")]
    Auto,

    // === Binary operators ===
    // The text is mapped to an operator code by the parser
    #[regex(r"\^\^|&&|\|\||<<|>>|[-+*/%|&^]", |lex| lex.slice().to_string())]
    Op(String),

    // === Delimiters ===
    #[token("=")]
    Eq,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(";")]
    Semi,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token("->")]
    Arrow,

    // === Literals ===
    #[regex(r"0x[0-9a-fA-F]+", |lex| parse_hex(lex.slice()))]
    #[regex(r"0b[01]+", |lex| parse_binary(lex.slice()))]
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<u64>().ok())]
    Integer(u64),

    #[regex(r#""([^"\\]|\\.)*""#, |lex| {
        let s = lex.slice();
        let content = &s[1..s.len()-1];
        Some(unescape_string(content))
    })]
    String(String),

    // === Identifier ===
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),

    // === Comments (skipped) ===
    #[regex(r"//[^\n]*?", logos::skip)]
    #[regex(r"/\*[^*]*\*+([^/*][^*]*\*+)*/", logos::skip)]
    Comment,
}

impl Token {
    /// Human-readable description for diagnostics
    pub fn describe(&self) -> String {
        match self {
            Token::Ident(name) => format!("identifier '{}'", name),
            Token::Integer(n) => format!("integer {}", n),
            Token::String(s) => format!("string \"{}\"", s),
            Token::Op(op) => format!("operator '{}'", op),
            Token::Let => "keyword 'let'".to_string(),
            Token::Fn => "keyword 'fn'".to_string(),
            Token::Int => "type 'int'".to_string(),
            Token::Str => "type 'string'".to_string(),
            Token::Void => "type 'void'".to_string(),
            Token::Auto => "type 'auto'".to_string(),
            Token::Eq => "'='".to_string(),
            Token::LBrace => "'{'".to_string(),
            Token::RBrace => "'}'".to_string(),
            Token::LParen => "'('".to_string(),
            Token::RParen => "')'".to_string(),
            Token::Semi => "';'".to_string(),
            Token::Comma => "','".to_string(),
            Token::Colon => "':'".to_string(),
            Token::Arrow => "'->'".to_string(),
            Token::Comment => "comment".to_string(),
        }
    }
}

// Literals are unsigned; the parser applies the sign and the i64 range check
fn parse_hex(s: &str) -> Option<u64> {
    u64::from_str_radix(&s[2..], 16).ok()
}

fn parse_binary(s: &str) -> Option<u64> {
    u64::from_str_radix(&s[2..], 2).ok()
}

/// Process escape sequences in a string literal
fn unescape_string(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars();

    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.next() {
                Some('n') => result.push('\n'),
                Some('r') => result.push('\r'),
                Some('t') => result.push('\t'),
                Some('\\') => result.push('\\'),
                Some('"') => result.push('"'),
                Some('0') => result.push('\0'),
                Some(c) => {
                    // Unknown escape sequence - preserve it as-is
                    result.push('\\');
                    result.push(c);
                }
                None => result.push('\\'),
            }
        } else {
            result.push(ch);
        }
    }
    result
}

/// A token with its span in the source
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    pub token: Token,
    pub span: std::ops::Range<usize>,
}

/// Lex source code into tokens
pub fn lex(source: &str) -> Result<Vec<SpannedToken>, LexError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => {
                tokens.push(SpannedToken {
                    token,
                    span: lexer.span(),
                });
            }
            Err(()) => {
                let text = &source[lexer.span()];
                // Only integer literals can fail after matching a leading digit
                let message = if text.starts_with(|c: char| c.is_ascii_digit()) {
                    format!("integer literal out of range: {}", text)
                } else {
                    format!("unexpected character: {:?}", text)
                };
                return Err(LexError {
                    span: lexer.span(),
                    message,
                });
            }
        }
    }

    Ok(tokens)
}

/// An error that occurred during lexing
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct LexError {
    pub span: std::ops::Range<usize>,
    pub message: String,
}

impl LexError {
    pub fn span(&self) -> crate::ast::Span {
        crate::ast::Span::new(self.span.start, self.span.end)
    }
}
