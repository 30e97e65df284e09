//! Proof steps and citations

use crate::formula::Formula;
use crate::unification::BindingMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A reference to an earlier step or to a closed sub-proof.
/// Step numbers are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Citation {
    Step(usize),
    /// First and last step of a closed sub-proof
    SubProof(usize, usize),
}

impl Citation {
    pub fn is_sub_proof(&self) -> bool {
        matches!(self, Citation::SubProof(..))
    }

    /// First step number covered
    pub fn first(&self) -> usize {
        match *self {
            Citation::Step(n) | Citation::SubProof(n, _) => n,
        }
    }

    /// Last step number covered
    pub fn last(&self) -> usize {
        match *self {
            Citation::Step(n) | Citation::SubProof(_, n) => n,
        }
    }
}

impl fmt::Display for Citation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Citation::Step(n) => write!(f, "{}", n),
            Citation::SubProof(first, last) => write!(f, "{}-{}", first, last),
        }
    }
}

/// One line of a proof
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Nesting level; 0 is the outermost proof. Assigned by `Proof::add_step`.
    pub level: usize,
    pub formula: Formula,
    pub citations: Vec<Citation>,
    pub rule_name: String,
    pub rule_abbrev: String,
    pub bindings: BindingMap,
    /// Which of the rule's conclusion forms was chosen
    pub conclusion_index: usize,
}

impl Step {
    pub fn new(formula: Formula, rule_name: impl Into<String>, rule_abbrev: impl Into<String>) -> Self {
        Step {
            level: 0,
            formula,
            citations: Vec::new(),
            rule_name: rule_name.into(),
            rule_abbrev: rule_abbrev.into(),
            bindings: BindingMap::new(),
            conclusion_index: 0,
        }
    }

    pub fn with_citations(mut self, citations: Vec<Citation>) -> Self {
        self.citations = citations;
        self
    }

    pub fn with_bindings(mut self, bindings: BindingMap) -> Self {
        self.bindings = bindings;
        self
    }

    pub fn with_conclusion_index(mut self, index: usize) -> Self {
        self.conclusion_index = index;
        self
    }

    /// Citation list followed by the rule abbreviation, e.g. `1,2-4 MP`
    pub fn justification(&self) -> String {
        if self.citations.is_empty() {
            return self.rule_abbrev.clone();
        }
        let cites: Vec<String> = self.citations.iter().map(|c| c.to_string()).collect();
        format!("{} {}", cites.join(","), self.rule_abbrev)
    }
}
