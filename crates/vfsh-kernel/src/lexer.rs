//! Lexer for vfsh command lines.
//!
//! Splits a line into shell words using the logos lexer generator. The lexer
//! produces *pieces* (bare text, quoted strings, escapes, blanks) and
//! [`tokenize`] glues adjacent pieces into words, so `a"b c"d` is the single
//! word `ab cd`.
//!
//! # Quoting rules
//!
//! - `'...'` is taken literally
//! - `"..."` honours `\"` and `\\`; any other backslash is kept as-is
//! - outside quotes, `\x` yields `x`
//! - `""` and `''` produce an empty word
//!
//! An unterminated quote or a trailing lone backslash is an error; callers
//! must not execute any part of a line that fails to tokenize.

use logos::{Logos, Span};
use std::fmt;

/// A value with its span in the source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub token: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(token: T, span: Span) -> Self {
        Self { token, span }
    }
}

/// Lexer error types.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LexerError {
    #[default]
    UnexpectedCharacter,
    UnterminatedString,
    DanglingEscape,
}

impl fmt::Display for LexerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexerError::UnexpectedCharacter => write!(f, "unexpected character"),
            LexerError::UnterminatedString => write!(f, "no closing quotation"),
            LexerError::DanglingEscape => write!(f, "no escaped character"),
        }
    }
}

impl std::error::Error for LexerError {}

/// Raw lexical pieces. Words are assembled from runs of non-blank pieces.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(error = LexerError)]
pub enum Piece {
    /// Word separator.
    #[regex(r"[ \t\r\n]+")]
    Blank,

    /// Unquoted text.
    #[regex(r#"[^ \t\r\n'"\\]+"#, |lex| lex.slice().to_string())]
    Bare(String),

    /// `'...'`, contents verbatim.
    #[regex(r"'[^']*'", lex_single_string)]
    SingleQuoted(String),

    /// `"..."`, contents with `\"` and `\\` unescaped.
    #[regex(r#""([^"\\]|\\(.|\n))*""#, lex_double_string)]
    DoubleQuoted(String),

    /// `\x` outside quotes.
    #[regex(r"\\(.|\n)", lex_escape)]
    Escaped(String),

    /// Opening quote without a closing one.
    #[regex(r"'[^']*", lex_unterminated)]
    #[regex(r#""([^"\\]|\\(.|\n))*"#, lex_unterminated)]
    Unterminated,

    /// Backslash at end of input.
    #[token("\\", lex_dangling)]
    Dangling,
}

fn lex_single_string(lex: &mut logos::Lexer<Piece>) -> String {
    let s = lex.slice();
    s[1..s.len() - 1].to_string()
}

fn lex_double_string(lex: &mut logos::Lexer<Piece>) -> String {
    let s = lex.slice();
    unescape_double(&s[1..s.len() - 1])
}

fn lex_escape(lex: &mut logos::Lexer<Piece>) -> String {
    lex.slice()[1..].to_string()
}

fn lex_unterminated(_lex: &mut logos::Lexer<Piece>) -> Result<(), LexerError> {
    Err(LexerError::UnterminatedString)
}

fn lex_dangling(_lex: &mut logos::Lexer<Piece>) -> Result<(), LexerError> {
    Err(LexerError::DanglingEscape)
}

/// Inside double quotes only `"` and `\` can be escaped.
fn unescape_double(inner: &str) -> String {
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some(next @ ('"' | '\\')) => out.push(next),
            Some(next) => {
                out.push('\\');
                out.push(next);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Tokenize a line into words with their source spans.
///
/// Returns every lexer error found; an empty or blank line yields no words.
pub fn tokenize(source: &str) -> Result<Vec<Spanned<String>>, Vec<Spanned<LexerError>>> {
    let mut words = Vec::new();
    let mut errors = Vec::new();
    let mut current: Option<Spanned<String>> = None;

    for (result, span) in Piece::lexer(source).spanned() {
        let text = match result {
            Ok(Piece::Blank) => {
                if let Some(word) = current.take() {
                    words.push(word);
                }
                continue;
            }
            Ok(Piece::Bare(s) | Piece::SingleQuoted(s) | Piece::DoubleQuoted(s) | Piece::Escaped(s)) => s,
            // Only reachable through callbacks that always fail.
            Ok(Piece::Unterminated | Piece::Dangling) => continue,
            Err(err) => {
                errors.push(Spanned::new(err, span));
                continue;
            }
        };

        match current.as_mut() {
            Some(word) => {
                word.token.push_str(&text);
                word.span.end = span.end;
            }
            None => current = Some(Spanned::new(text, span)),
        }
    }

    if let Some(word) = current {
        words.push(word);
    }

    if errors.is_empty() {
        Ok(words)
    } else {
        Err(errors)
    }
}

/// Split a line into plain words, reporting the first error.
pub fn split_words(source: &str) -> Result<Vec<String>, LexerError> {
    tokenize(source)
        .map(|words| words.into_iter().map(|w| w.token).collect())
        .map_err(|mut errors| errors.swap_remove(0).token)
}
