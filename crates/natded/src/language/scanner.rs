//! Character-level scanner for formula and sequent text
//!
//! Characters are classified by fixed tables into raw token categories; a
//! scanned run is then looked up in the language lexicon, which may promote
//! it to an operator or entailment token. Position, line and column are
//! tracked for error reporting, and `mark`/`rescan` let the parser back up
//! after a failed speculative parse.

use super::lexicon::{Language, SyntaxCategory};
use crate::error::SyntaxError;
use nom::{
    bytes::complete::{take_while, take_while1},
    character::complete::char,
    combinator::{opt, recognize},
    sequence::pair,
    IResult,
};
use std::fmt;

const WHITE_SPACE: &str = " \t\n\r";
const PUNCT: &str = ";.";
const OPEN: &str = "([{";
const CLOSE: &str = ")]}";
const OBJECT: &str = "abcdefghijklmnopqrst";
const VARIABLE: &str = "uvwxyz";
const SPECIAL: &str = "@#$%^&*_=\\|~:<>/?!";
const SIGN: &str = "+-";
const NEGATION: &str = "-~";

/// Token categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Eof,
    Unknown,
    PrefixOp,
    PostfixOp,
    InfixOp,
    Open,
    Close,
    Symbol,
    Object,
    Variable,
    Comma,
    Entails,
    Punct,
}

impl From<SyntaxCategory> for TokenKind {
    fn from(category: SyntaxCategory) -> Self {
        match category {
            SyntaxCategory::Prefix => TokenKind::PrefixOp,
            SyntaxCategory::Postfix => TokenKind::PostfixOp,
            SyntaxCategory::Infix => TokenKind::InfixOp,
            SyntaxCategory::Entailment => TokenKind::Entails,
        }
    }
}

/// A classified token with the position of its first character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    /// Byte offset into the source
    pub pos: usize,
    /// 0-based line
    pub line: usize,
    /// 0-based column, in characters
    pub column: usize,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.kind {
            TokenKind::Eof => "EOF",
            TokenKind::Unknown => "UNK",
            TokenKind::PrefixOp => "PRE",
            TokenKind::PostfixOp => "PST",
            TokenKind::InfixOp => "INF",
            TokenKind::Open => "OPN",
            TokenKind::Close => "CLS",
            TokenKind::Symbol => "SYM",
            TokenKind::Object => "OBJ",
            TokenKind::Variable => "VAR",
            TokenKind::Comma => "CMA",
            TokenKind::Entails => "ENT",
            TokenKind::Punct => "PUN",
        };
        write!(f, "[{}:{}]", tag, self.lexeme)
    }
}

/// Saved scanner state for speculative parsing
#[derive(Debug, Clone)]
pub struct ScanMark {
    point: usize,
    line: usize,
    line_start: usize,
    token: Token,
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit()
}

fn is_symbol_char(c: char) -> bool {
    SPECIAL.contains(c) || SIGN.contains(c)
}

fn whitespace(input: &str) -> IResult<&str, &str> {
    take_while(|c: char| WHITE_SPACE.contains(c))(input)
}

/// Capitals and digits, optionally closed by a colon (`N:` style operators)
fn name_run(input: &str) -> IResult<&str, &str> {
    recognize(pair(take_while1(is_name_char), opt(char(':'))))(input)
}

fn symbol_run(input: &str) -> IResult<&str, &str> {
    take_while1(is_symbol_char)(input)
}

/// Scanner over one source string, resolving runs against a language
pub struct Scanner<'l, 's> {
    language: &'l Language,
    source: &'s str,
    point: usize,
    line: usize,
    line_start: usize,
    token: Token,
}

impl<'l, 's> Scanner<'l, 's> {
    /// Create a scanner positioned at the first token
    pub fn new(language: &'l Language, source: &'s str) -> Self {
        let mut scanner = Scanner {
            language,
            source,
            point: 0,
            line: 0,
            line_start: 0,
            token: Token {
                kind: TokenKind::Eof,
                lexeme: String::new(),
                pos: 0,
                line: 0,
                column: 0,
            },
        };
        scanner.token = scanner.scan_next_token();
        scanner
    }

    /// The next token, not yet consumed
    pub fn peek(&self) -> &Token {
        &self.token
    }

    pub fn peek_kind(&self) -> TokenKind {
        self.token.kind
    }

    /// Consume the next token and return it
    pub fn consume(&mut self) -> Token {
        let next = self.scan_next_token();
        std::mem::replace(&mut self.token, next)
    }

    /// Consume the next token if it has kind `kind`, else fail with `message`
    pub fn expect(&mut self, kind: TokenKind, message: &str) -> Result<Token, SyntaxError> {
        if self.token.kind != kind {
            return Err(self.error(message));
        }
        Ok(self.consume())
    }

    /// Save the current position
    pub fn mark(&self) -> ScanMark {
        ScanMark {
            point: self.point,
            line: self.line,
            line_start: self.line_start,
            token: self.token.clone(),
        }
    }

    /// Return to a saved position
    pub fn rescan(&mut self, mark: &ScanMark) {
        self.point = mark.point;
        self.line = mark.line;
        self.line_start = mark.line_start;
        self.token = mark.token.clone();
    }

    /// Build a syntax error positioned at the next token
    pub fn error(&self, message: &str) -> SyntaxError {
        SyntaxError {
            message: message.to_string(),
            line: self.token.line,
            column: self.token.column,
            line_text: self.line_text(self.token.pos),
        }
    }

    /// Full text of the line containing byte offset `pos`
    fn line_text(&self, pos: usize) -> String {
        let start = self.source[..pos].rfind('\n').map_or(0, |i| i + 1);
        let end = self.source[pos..]
            .find('\n')
            .map_or(self.source.len(), |i| pos + i);
        self.source[start..end].to_string()
    }

    fn advance(&mut self, len: usize) {
        let source = self.source;
        let consumed = &source[self.point..self.point + len];
        for (i, c) in consumed.char_indices() {
            if c == '\n' {
                self.line += 1;
                self.line_start = self.point + i + 1;
            }
        }
        self.point += len;
    }

    /// Advance past a nom-recognized prefix of the remaining input
    fn take(&mut self, run: fn(&str) -> IResult<&str, &str>) -> Option<&'s str> {
        let source = self.source;
        let rest = &source[self.point..];
        let (_, matched) = run(rest).ok()?;
        self.advance(matched.len());
        Some(matched)
    }

    fn scan_next_token(&mut self) -> Token {
        self.take(whitespace);

        let source = self.source;
        let pos = self.point;
        let line = self.line;
        let column = source[self.line_start..pos].chars().count();
        let rest = &source[pos..];

        let kind = match rest.chars().next() {
            None => TokenKind::Eof,
            Some(',') => {
                self.advance(1);
                TokenKind::Comma
            }
            Some(c) if PUNCT.contains(c) => {
                self.advance(1);
                TokenKind::Punct
            }
            Some(c) if OPEN.contains(c) => {
                self.advance(1);
                TokenKind::Open
            }
            Some(c) if CLOSE.contains(c) => {
                self.advance(1);
                TokenKind::Close
            }
            Some(c) if is_name_char(c) => {
                self.take(name_run);
                TokenKind::Symbol
            }
            Some(c) if NEGATION.contains(c) => {
                // a doubled negation sign is two prefix operators, not one run
                let doubled = rest[1..].starts_with(|n: char| NEGATION.contains(n));
                if doubled {
                    self.advance(1);
                } else {
                    self.take(symbol_run);
                }
                TokenKind::Symbol
            }
            Some(c) if is_symbol_char(c) => {
                self.take(symbol_run);
                TokenKind::Symbol
            }
            Some(c) if OBJECT.contains(c) => {
                self.advance(1);
                TokenKind::Object
            }
            Some(c) if VARIABLE.contains(c) => {
                self.advance(1);
                TokenKind::Variable
            }
            Some(c) => {
                // glyph spellings (e.g. Unicode connectives) are single characters
                self.advance(c.len_utf8());
                TokenKind::Unknown
            }
        };

        let lexeme = &source[pos..self.point];
        let kind = match kind {
            TokenKind::Eof | TokenKind::Comma | TokenKind::Open | TokenKind::Close => kind,
            _ => self
                .language
                .lookup(lexeme)
                .map_or(kind, |lex| TokenKind::from(lex.category)),
        };

        Token {
            kind,
            lexeme: lexeme.to_string(),
            pos,
            line,
            column,
        }
    }
}
