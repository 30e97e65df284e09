//! Concrete syntax: lexicon tables, scanner and parser

pub mod lexicon;
pub mod parser;
pub mod scanner;

pub use lexicon::{Language, LanguageDef, Lexeme, SyntaxCategory};
pub use parser::{ParseMode, Parser};
pub use scanner::{ScanMark, Scanner, Token, TokenKind};
