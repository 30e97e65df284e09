//! Well-formed formulas

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Whether an atomic symbol is a rule placeholder or a concrete proposition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SymbolKind {
    /// Bound by matching, only found in rule templates
    Schema,
    /// A named proposition, the only kind allowed in proof steps
    Proposition,
}

/// An atomic symbol
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
}

impl Symbol {
    pub fn schema(name: impl Into<String>) -> Self {
        Symbol {
            name: name.into(),
            kind: SymbolKind::Schema,
        }
    }

    pub fn proposition(name: impl Into<String>) -> Self {
        Symbol {
            name: name.into(),
            kind: SymbolKind::Proposition,
        }
    }

    pub fn is_schema(&self) -> bool {
        self.kind == SymbolKind::Schema
    }
}

/// Syntactic position of an operator relative to its operands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fixity {
    Prefix,
    Postfix,
    Infix,
}

impl Fixity {
    pub fn arity(self) -> usize {
        match self {
            Fixity::Prefix | Fixity::Postfix => 1,
            Fixity::Infix => 2,
        }
    }
}

/// An operator identity.
///
/// Operators are identified by their lexeme name (e.g. `Conjunction`), never
/// by a spelling, so every concrete syntax of one language produces equal
/// formulas.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Operator {
    pub name: String,
    pub fixity: Fixity,
}

impl Operator {
    pub fn new(name: impl Into<String>, fixity: Fixity) -> Self {
        Operator {
            name: name.into(),
            fixity,
        }
    }

    pub fn prefix(name: impl Into<String>) -> Self {
        Operator::new(name, Fixity::Prefix)
    }

    pub fn infix(name: impl Into<String>) -> Self {
        Operator::new(name, Fixity::Infix)
    }
}

/// Location of a sub-formula: operand indices walked from the root.
/// The empty path is the formula itself.
pub type FormulaPath = Vec<usize>;

/// A well-formed formula. Immutable once built; equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Formula {
    Atomic(Symbol),
    Structured(Operator, Vec<Formula>),
}

impl Formula {
    /// A concrete named proposition
    pub fn proposition(name: impl Into<String>) -> Self {
        Formula::Atomic(Symbol::proposition(name))
    }

    /// A schema variable
    pub fn schema(name: impl Into<String>) -> Self {
        Formula::Atomic(Symbol::schema(name))
    }

    /// Apply a unary operator
    pub fn unary(op: Operator, operand: Formula) -> Self {
        Formula::Structured(op, vec![operand])
    }

    /// Apply a binary operator
    pub fn binary(op: Operator, left: Formula, right: Formula) -> Self {
        Formula::Structured(op, vec![left, right])
    }

    pub fn is_atomic(&self) -> bool {
        matches!(self, Formula::Atomic(_))
    }

    /// The principal operator, if structured
    pub fn operator(&self) -> Option<&Operator> {
        match self {
            Formula::Atomic(_) => None,
            Formula::Structured(op, _) => Some(op),
        }
    }

    /// Immediate sub-formulas (empty for atoms)
    pub fn operands(&self) -> &[Formula] {
        match self {
            Formula::Atomic(_) => &[],
            Formula::Structured(_, args) => args,
        }
    }

    /// Names of all schema variables, sorted and deduplicated
    pub fn schema_variables(&self) -> BTreeSet<String> {
        let mut vars = BTreeSet::new();
        self.collect_schema_variables(&mut vars);
        vars
    }

    /// Collect schema variable names into `vars`
    pub fn collect_schema_variables(&self, vars: &mut BTreeSet<String>) {
        match self {
            Formula::Atomic(sym) => {
                if sym.is_schema() {
                    vars.insert(sym.name.clone());
                }
            }
            Formula::Structured(_, args) => {
                for arg in args {
                    arg.collect_schema_variables(vars);
                }
            }
        }
    }

    /// True when the formula contains no schema variables
    pub fn is_concrete(&self) -> bool {
        match self {
            Formula::Atomic(sym) => !sym.is_schema(),
            Formula::Structured(_, args) => args.iter().all(Formula::is_concrete),
        }
    }

    /// The sub-formula at `path`, if the path exists
    pub fn subformula_at(&self, path: &[usize]) -> Option<&Formula> {
        let mut node = self;
        for &idx in path {
            node = node.operands().get(idx)?;
        }
        Some(node)
    }

    /// A copy of this formula with the sub-formula at `path` replaced
    pub fn replace_at(&self, path: &[usize], replacement: Formula) -> Option<Formula> {
        match path.split_first() {
            None => Some(replacement),
            Some((&idx, rest)) => match self {
                Formula::Atomic(_) => None,
                Formula::Structured(op, args) => {
                    let child = args.get(idx)?.replace_at(rest, replacement)?;
                    let mut new_args = args.clone();
                    new_args[idx] = child;
                    Some(Formula::Structured(op.clone(), new_args))
                }
            },
        }
    }

    /// Every sub-formula with its path, in pre-order (root first)
    pub fn subformulas(&self) -> Vec<(FormulaPath, &Formula)> {
        let mut out = Vec::new();
        let mut stack: Vec<(FormulaPath, &Formula)> = vec![(Vec::new(), self)];
        while let Some((path, node)) = stack.pop() {
            for (i, arg) in node.operands().iter().enumerate().rev() {
                let mut child = path.clone();
                child.push(i);
                stack.push((child, arg));
            }
            out.push((path, node));
        }
        out
    }

    /// Number of nodes in the tree
    pub fn size(&self) -> usize {
        1 + self.operands().iter().map(Formula::size).sum::<usize>()
    }
}

/// Language-independent notation: `Name(arg, ...)` for structured formulas.
/// Use `Language::format` for concrete syntax.
impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Atomic(sym) => write!(f, "{}", sym.name),
            Formula::Structured(op, args) => {
                write!(f, "{}(", op.name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}
