//! Recursive-descent parser for formulas and sequents
//!
//! Grammar:
//! ```text
//! sequent  := [premise {',' premise}] ENTAILS expr {',' expr}
//! premise  := expr | '(' sequent ')'
//! expr     := term [INFIX term]
//! term     := PREFIX term | '(' expr ')' | SYMBOL, followed by {POSTFIX}
//! ```
//! Infix operators do not chain: `A & B & C` is rejected and nested binary
//! operators must be grouped explicitly.
//!
//! A premise is ambiguous under one token of lookahead: `(` may open a
//! grouped formula or a nested sequent. Premises are therefore parsed
//! speculatively as formulas first, and re-parsed as nested sequents from a
//! saved scanner mark when that fails.

use super::lexicon::Language;
use super::scanner::{Scanner, Token, TokenKind};
use crate::error::SyntaxError;
use crate::formula::{Form, FormSet, Formula, Operator, Sequent, Symbol};
use tracing::trace;

/// How atomic symbols are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// Symbols are concrete propositions
    Concrete,
    /// Symbols are schema variables (rule templates)
    Template,
}

pub struct Parser<'l, 's> {
    language: &'l Language,
    scanner: Scanner<'l, 's>,
    mode: ParseMode,
}

fn closer_for(open: &str) -> &'static str {
    match open {
        "[" => "]",
        "{" => "}",
        _ => ")",
    }
}

impl<'l, 's> Parser<'l, 's> {
    pub fn new(language: &'l Language, source: &'s str, mode: ParseMode) -> Self {
        Parser {
            language,
            scanner: Scanner::new(language, source),
            mode,
        }
    }

    /// Parse a complete formula; trailing input is an error
    pub fn parse_formula(mut self) -> Result<Formula, SyntaxError> {
        let expr = self.expr()?;
        self.scanner.expect(TokenKind::Eof, "EOF expected.")?;
        Ok(expr)
    }

    /// Parse a complete sequent; trailing input is an error
    pub fn parse_sequent(mut self) -> Result<Sequent, SyntaxError> {
        let seq = self.sequent(false)?;
        self.scanner.expect(TokenKind::Eof, "EOF expected.")?;
        Ok(seq)
    }

    fn operator(&self, token: &Token) -> Result<Operator, SyntaxError> {
        self.language
            .operator(&token.lexeme)
            .ok_or_else(|| self.scanner.error("Operator expected."))
    }

    fn atom(&self, name: String) -> Formula {
        match self.mode {
            ParseMode::Concrete => Formula::Atomic(Symbol::proposition(name)),
            ParseMode::Template => Formula::Atomic(Symbol::schema(name)),
        }
    }

    /// Consume the close that matches an already consumed `open`
    fn close(&mut self, open: &str) -> Result<(), SyntaxError> {
        let expected = closer_for(open);
        let message = format!("'{}' expected.", expected);
        if self.scanner.peek_kind() != TokenKind::Close || self.scanner.peek().lexeme != expected {
            return Err(self.scanner.error(&message));
        }
        self.scanner.consume();
        Ok(())
    }

    fn expr(&mut self) -> Result<Formula, SyntaxError> {
        let left = self.term()?;
        if self.scanner.peek_kind() == TokenKind::InfixOp {
            let op = self.operator(self.scanner.peek())?;
            self.scanner.consume();
            let right = self.term()?;
            return Ok(Formula::binary(op, left, right));
        }
        Ok(left)
    }

    fn term(&mut self) -> Result<Formula, SyntaxError> {
        let mut result = match self.scanner.peek_kind() {
            TokenKind::PrefixOp => {
                let op = self.operator(self.scanner.peek())?;
                self.scanner.consume();
                let operand = self.term()?;
                return Ok(Formula::unary(op, operand));
            }
            TokenKind::Open => {
                let open = self.scanner.consume();
                let inner = self.expr()?;
                self.close(&open.lexeme)?;
                inner
            }
            TokenKind::Symbol => {
                let token = self.scanner.consume();
                self.atom(token.lexeme)
            }
            _ => return Err(self.scanner.error("Term expected.")),
        };

        while self.scanner.peek_kind() == TokenKind::PostfixOp {
            let op = self.operator(self.scanner.peek())?;
            self.scanner.consume();
            result = Formula::unary(op, result);
        }
        Ok(result)
    }

    fn sequent(&mut self, nested: bool) -> Result<Sequent, SyntaxError> {
        let open = if nested {
            Some(self.scanner.expect(TokenKind::Open, "'(' expected.")?)
        } else {
            None
        };

        let mut premises = FormSet::new();
        if self.scanner.peek_kind() != TokenKind::Entails {
            premises.push(self.premise()?);
            while self.scanner.peek_kind() == TokenKind::Comma {
                self.scanner.consume();
                premises.push(self.premise()?);
            }
        }

        self.scanner.expect(TokenKind::Entails, "'|-' expected.")?;

        let mut conclusions = vec![self.expr()?];
        while self.scanner.peek_kind() == TokenKind::Comma {
            self.scanner.consume();
            conclusions.push(self.expr()?);
        }

        if let Some(open) = open {
            self.close(&open.lexeme)?;
        }
        Ok(Sequent::new(premises, conclusions))
    }

    fn premise(&mut self) -> Result<Form, SyntaxError> {
        let mark = self.scanner.mark();
        match self.expr() {
            Ok(formula) => Ok(Form::Formula(formula)),
            Err(err) => {
                trace!(
                    line = err.line,
                    column = err.column,
                    "premise is not a formula, retrying as nested sequent"
                );
                self.scanner.rescan(&mark);
                Ok(Form::from(self.sequent(true)?))
            }
        }
    }
}
