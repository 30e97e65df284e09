//! Language definition tables
//!
//! A language is fully determined by data: an ordered list of lexemes, each
//! giving an operator name, its spellings, its syntactic category and some
//! natural-language glosses, plus the spellings of the equivalence operator.
//! The scanner and parser are driven entirely by this table, so ASCII and
//! Unicode notations (or different negation/implication spellings) share one
//! algorithm.

use super::parser::{ParseMode, Parser};
use crate::addressing::{formula_text, render_formula, StructuredString};
use crate::config::RenderStyle;
use crate::error::{AddressingError, LanguageError, SyntaxError};
use crate::formula::{Fixity, Form, Formula, FormulaPath, Operator, Sequent};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Syntactic category of a lexeme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SyntaxCategory {
    #[serde(rename = "PREFIX OP")]
    Prefix,
    #[serde(rename = "POSTFIX OP")]
    Postfix,
    #[serde(rename = "INFIX OP")]
    Infix,
    #[serde(rename = "ENTAILS")]
    Entailment,
}

impl SyntaxCategory {
    pub fn fixity(self) -> Option<Fixity> {
        match self {
            SyntaxCategory::Prefix => Some(Fixity::Prefix),
            SyntaxCategory::Postfix => Some(Fixity::Postfix),
            SyntaxCategory::Infix => Some(Fixity::Infix),
            SyntaxCategory::Entailment => None,
        }
    }
}

/// One row of a language definition table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexeme {
    pub name: String,
    pub spellings: Vec<String>,
    pub category: SyntaxCategory,
    #[serde(default)]
    pub glosses: Vec<String>,
}

impl Lexeme {
    pub fn new(name: &str, spellings: &[&str], category: SyntaxCategory, glosses: &[&str]) -> Self {
        Lexeme {
            name: name.to_string(),
            spellings: spellings.iter().map(|s| s.to_string()).collect(),
            category,
            glosses: glosses.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Spelling used for rendering in the given style
    pub fn spelling(&self, style: RenderStyle) -> &str {
        let pick = match style {
            RenderStyle::Ascii => self.spellings.iter().find(|s| s.is_ascii()),
            RenderStyle::Unicode => self.spellings.iter().find(|s| !s.is_ascii()),
        };
        pick.or_else(|| self.spellings.first())
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn operator(&self) -> Option<Operator> {
        self.category
            .fixity()
            .map(|fixity| Operator::new(self.name.clone(), fixity))
    }
}

/// Serializable language definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageDef {
    pub lexicon: Vec<Lexeme>,
    /// Spellings of the equivalence (biconditional) operator
    pub equivalence: Vec<String>,
}

/// A concrete syntax: lexicon plus the designated equivalence operator
#[derive(Debug, Clone)]
pub struct Language {
    lexemes: Vec<Lexeme>,
    /// Every spelling of every lexeme -> lexeme index
    spellings: IndexMap<String, usize>,
    equivalence: Option<Operator>,
    entailment: usize,
}

impl Language {
    pub fn new(lexicon: Vec<Lexeme>, equivalence_spellings: &[&str]) -> Result<Self, LanguageError> {
        Language::from_def(LanguageDef {
            lexicon,
            equivalence: equivalence_spellings.iter().map(|s| s.to_string()).collect(),
        })
    }

    pub fn from_def(def: LanguageDef) -> Result<Self, LanguageError> {
        let mut spellings: IndexMap<String, usize> = IndexMap::new();
        let mut entailment = None;

        for (idx, lexeme) in def.lexicon.iter().enumerate() {
            if lexeme.spellings.is_empty() {
                return Err(LanguageError::NoSpellings(lexeme.name.clone()));
            }
            for spelling in &lexeme.spellings {
                if spelling.is_empty() {
                    return Err(LanguageError::NoSpellings(lexeme.name.clone()));
                }
                if let Some(&prev) = spellings.get(spelling) {
                    if prev != idx {
                        return Err(LanguageError::DuplicateSpelling {
                            spelling: spelling.clone(),
                            first: def.lexicon[prev].name.clone(),
                            second: lexeme.name.clone(),
                        });
                    }
                }
                spellings.insert(spelling.clone(), idx);
            }
            if lexeme.category == SyntaxCategory::Entailment && entailment.is_none() {
                entailment = Some(idx);
            }
        }

        let entailment = entailment.ok_or(LanguageError::MissingEntailment)?;

        let mut equivalence = None;
        for spelling in &def.equivalence {
            let lexeme = spellings
                .get(spelling)
                .map(|&idx| &def.lexicon[idx])
                .filter(|lex| lex.category == SyntaxCategory::Infix)
                .ok_or_else(|| LanguageError::UnknownEquivalence(spelling.clone()))?;
            equivalence = lexeme.operator();
        }

        Ok(Language {
            lexemes: def.lexicon,
            spellings,
            equivalence,
            entailment,
        })
    }

    /// Load a language definition from JSON
    pub fn from_json(json: &str) -> Result<Self, LanguageError> {
        let def: LanguageDef = serde_json::from_str(json)
            .map_err(|e| LanguageError::InvalidDefinition(e.to_string()))?;
        Language::from_def(def)
    }

    pub fn lexemes(&self) -> &[Lexeme] {
        &self.lexemes
    }

    /// The lexeme owning a spelling
    pub fn lookup(&self, spelling: &str) -> Option<&Lexeme> {
        self.spellings.get(spelling).map(|&idx| &self.lexemes[idx])
    }

    /// The lexeme for an operator name
    pub fn lexeme(&self, name: &str) -> Option<&Lexeme> {
        self.lexemes.iter().find(|lex| lex.name == name)
    }

    /// The operator identity for a spelling, if it spells an operator
    pub fn operator(&self, spelling: &str) -> Option<Operator> {
        self.lookup(spelling).and_then(Lexeme::operator)
    }

    pub fn equivalence_operator(&self) -> Option<&Operator> {
        self.equivalence.as_ref()
    }

    /// Rendering spelling of an operator; falls back to its name when the
    /// operator does not belong to this language
    pub fn spelling<'a>(&'a self, op: &'a Operator, style: RenderStyle) -> &'a str {
        self.lexeme(&op.name)
            .map(|lex| lex.spelling(style))
            .unwrap_or(op.name.as_str())
    }

    pub fn entailment_spelling(&self, style: RenderStyle) -> &str {
        self.lexemes[self.entailment].spelling(style)
    }

    /// Zero premises and a single conclusion whose principal operator is the
    /// equivalence operator applied to two operands
    pub fn is_equivalence_theorem(&self, sequent: &Sequent) -> bool {
        let Some(equiv) = &self.equivalence else {
            return false;
        };
        sequent.premises.is_empty()
            && sequent.conclusions.len() == 1
            && sequent.conclusions[0].operator() == Some(equiv)
            && sequent.conclusions[0].operands().len() == 2
    }

    // =========================================================================
    // Parsing
    // =========================================================================

    /// Parse a concrete formula
    pub fn parse_formula(&self, source: &str) -> Result<Formula, SyntaxError> {
        Parser::new(self, source, ParseMode::Concrete).parse_formula()
    }

    /// Parse a concrete sequent
    pub fn parse_sequent(&self, source: &str) -> Result<Sequent, SyntaxError> {
        Parser::new(self, source, ParseMode::Concrete).parse_sequent()
    }

    /// Parse a rule template formula; every atomic symbol is a schema variable
    pub fn parse_template_formula(&self, source: &str) -> Result<Formula, SyntaxError> {
        Parser::new(self, source, ParseMode::Template).parse_formula()
    }

    /// Parse a rule template sequent; every atomic symbol is a schema variable
    pub fn parse_template_sequent(&self, source: &str) -> Result<Sequent, SyntaxError> {
        Parser::new(self, source, ParseMode::Template).parse_sequent()
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render a formula with per-character sub-formula addressing
    pub fn render(
        &self,
        formula: &Formula,
        style: RenderStyle,
    ) -> Result<StructuredString<FormulaPath>, AddressingError> {
        render_formula(self, formula, style)
    }

    /// Render a formula to plain text in ASCII style
    pub fn format(&self, formula: &Formula) -> Result<String, AddressingError> {
        self.format_with(formula, RenderStyle::Ascii)
    }

    pub fn format_with(&self, formula: &Formula, style: RenderStyle) -> Result<String, AddressingError> {
        formula_text(self, formula, style)
    }

    /// Render a sequent; nested sequent premises are parenthesized
    pub fn format_sequent(
        &self,
        sequent: &Sequent,
        style: RenderStyle,
    ) -> Result<String, AddressingError> {
        let mut out = String::new();
        for (i, form) in sequent.premises.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            match form {
                Form::Formula(f) => out.push_str(&self.format_with(f, style)?),
                Form::Sequent(s) => {
                    out.push('(');
                    out.push_str(&self.format_sequent(s, style)?);
                    out.push(')');
                }
            }
        }
        if !sequent.premises.is_empty() {
            out.push(' ');
        }
        out.push_str(self.entailment_spelling(style));
        for (i, conclusion) in sequent.conclusions.iter().enumerate() {
            out.push_str(if i == 0 { " " } else { ", " });
            out.push_str(&self.format_with(conclusion, style)?);
        }
        Ok(out)
    }
}
