//! Error types for natded
//!
//! Each subsystem reports its own error enum; `Error` wraps them all so a
//! host can propagate any failure with `?`. Every error is recoverable: none
//! of them leaves a `Proof` or `Calculus` in an inconsistent state.

use crate::proof::Citation;
use std::fmt;
use thiserror::Error;

/// A scanner or parser failure, positioned at the offending token.
///
/// `line` and `column` are 0-based; the `Display` form reports them 1-based
/// and reproduces the source line with a caret under the failing column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub line: usize,
    pub column: usize,
    pub line_text: String,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error ({},{}): {}\n{}\n{}^",
            self.line + 1,
            self.column + 1,
            self.message,
            self.line_text,
            " ".repeat(self.column)
        )
    }
}

impl std::error::Error for SyntaxError {}

/// Malformed language definition table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LanguageError {
    #[error("lexeme '{0}' has no spellings")]
    NoSpellings(String),

    #[error("spelling '{spelling}' is claimed by both '{first}' and '{second}'")]
    DuplicateSpelling {
        spelling: String,
        first: String,
        second: String,
    },

    #[error("language defines no entailment lexeme")]
    MissingEntailment,

    #[error("equivalence spelling '{0}' does not name an infix operator")]
    UnknownEquivalence(String),

    #[error("invalid language definition: {0}")]
    InvalidDefinition(String),
}

/// Misuse of the structured-string builder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressingError {
    #[error("no region is open")]
    NoOpenRegion,

    #[error("dominant spans may not overlap")]
    OverlappingDominant,

    #[error("no dominant span is open")]
    NoOpenDominant,

    #[error("region closed while its dominant span is still open")]
    UnclosedDominant,

    #[error("{0} region(s) left open")]
    UnclosedRegion(usize),
}

/// Failure to match rule premise templates against concrete premises.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("{expected} premise(s) required, {found} supplied")]
    Arity { expected: usize, found: usize },

    #[error("no consistent mapping of the rule onto the supplied premises")]
    NoConsistentMapping,
}

/// Calculus construction and rule application failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculusError {
    #[error("unknown inference rule '{0}'")]
    UnknownRule(String),

    #[error("rule name or abbreviation '{0}' is defined twice")]
    DuplicateRule(String),

    #[error("invalid premise assertion rule '{rule}': {reason}")]
    InvalidAssertionRule { rule: String, reason: &'static str },

    #[error("rule '{rule}' has {premises} premises, more than the limit of {limit}")]
    TooManyPremises {
        rule: String,
        premises: usize,
        limit: usize,
    },

    #[error("rule '{rule}': {source}")]
    Match {
        rule: String,
        #[source]
        source: MatchError,
    },

    #[error("rule '{rule}' needs bindings for conclusion-only symbols: {}", .symbols.join(", "))]
    UnboundSymbols { rule: String, symbols: Vec<String> },

    #[error("an equivalence requires exactly one premise, {0} supplied")]
    EquivalencePremiseCount(usize),

    #[error("rule '{0}' is not an equivalence theorem")]
    NotAnEquivalence(String),

    #[error("the selected sub-formula must be an instance of one side of the equivalence")]
    InvalidTarget,

    #[error("the selected location {0:?} is not inside the premise")]
    TargetOutsidePremise(Vec<usize>),

    #[error("a sub-proof premise cannot be rewritten by an equivalence")]
    SequentPremise,
}

/// Proof mutation and citation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProofError {
    #[error("cannot nest more than one level in a single step")]
    NestTooDeep,

    #[error("no more levels to exit")]
    AtTopLevel,

    #[error("cannot exit more than one level in a single step")]
    ExitTooFar,

    #[error("nesting depth limit of {0} reached")]
    DepthLimit(usize),

    #[error("citation {0} is not available at this point in the proof")]
    CitationNotVisible(Citation),

    #[error("the proof has no steps")]
    NoSteps,

    #[error("conclusion index {index} out of range for {count} candidate(s)")]
    ConclusionIndex { index: usize, count: usize },

    #[error("proof steps must be concrete, found schema variable(s): {}", .0.join(", "))]
    SchematicFormula(Vec<String>),
}

/// Crate-level error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Language(#[from] LanguageError),

    #[error(transparent)]
    Addressing(#[from] AddressingError),

    #[error(transparent)]
    Match(#[from] MatchError),

    #[error(transparent)]
    Calculus(#[from] CalculusError),

    #[error(transparent)]
    Proof(#[from] ProofError),

    #[error("inference cancelled")]
    Aborted,

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
