//! Formula sets and sequents

use super::wff::Formula;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::ops::Index;

/// A member of a premise set: a formula, or a nested sequent standing for a
/// whole sub-proof.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Form {
    Formula(Formula),
    Sequent(Box<Sequent>),
}

impl Form {
    pub fn as_formula(&self) -> Option<&Formula> {
        match self {
            Form::Formula(f) => Some(f),
            Form::Sequent(_) => None,
        }
    }

    pub fn as_sequent(&self) -> Option<&Sequent> {
        match self {
            Form::Formula(_) => None,
            Form::Sequent(s) => Some(s),
        }
    }

    pub fn collect_schema_variables(&self, vars: &mut BTreeSet<String>) {
        match self {
            Form::Formula(f) => f.collect_schema_variables(vars),
            Form::Sequent(s) => s.collect_schema_variables(vars),
        }
    }
}

impl From<Formula> for Form {
    fn from(f: Formula) -> Self {
        Form::Formula(f)
    }
}

impl From<Sequent> for Form {
    fn from(s: Sequent) -> Self {
        Form::Sequent(Box::new(s))
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Form::Formula(wff) => write!(f, "{}", wff),
            Form::Sequent(seq) => write!(f, "({})", seq),
        }
    }
}

/// An ordered sequence of forms. Order carries citation correspondence only;
/// matching treats the set as unordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormSet {
    forms: Vec<Form>,
}

impl FormSet {
    pub fn new() -> Self {
        FormSet { forms: Vec::new() }
    }

    pub fn push(&mut self, form: impl Into<Form>) {
        self.forms.push(form.into());
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Form> {
        self.forms.iter()
    }

    pub fn as_slice(&self) -> &[Form] {
        &self.forms
    }

    pub fn get(&self, idx: usize) -> Option<&Form> {
        self.forms.get(idx)
    }
}

impl From<Vec<Form>> for FormSet {
    fn from(forms: Vec<Form>) -> Self {
        FormSet { forms }
    }
}

impl From<Vec<Formula>> for FormSet {
    fn from(formulas: Vec<Formula>) -> Self {
        FormSet {
            forms: formulas.into_iter().map(Form::Formula).collect(),
        }
    }
}

impl FromIterator<Form> for FormSet {
    fn from_iter<I: IntoIterator<Item = Form>>(iter: I) -> Self {
        FormSet {
            forms: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for FormSet {
    type Output = Form;

    fn index(&self, idx: usize) -> &Form {
        &self.forms[idx]
    }
}

impl<'a> IntoIterator for &'a FormSet {
    type Item = &'a Form;
    type IntoIter = std::slice::Iter<'a, Form>;

    fn into_iter(self) -> Self::IntoIter {
        self.forms.iter()
    }
}

/// Premises entail conclusions. Conclusions are always formulas; premises
/// may themselves be sequents (sub-proof premises).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sequent {
    pub premises: FormSet,
    pub conclusions: Vec<Formula>,
}

impl Sequent {
    pub fn new(premises: FormSet, conclusions: Vec<Formula>) -> Self {
        Sequent {
            premises,
            conclusions,
        }
    }

    pub fn collect_schema_variables(&self, vars: &mut BTreeSet<String>) {
        for form in &self.premises {
            form.collect_schema_variables(vars);
        }
        for conclusion in &self.conclusions {
            conclusion.collect_schema_variables(vars);
        }
    }

    /// Schema variables occurring anywhere in the premises
    pub fn premise_variables(&self) -> BTreeSet<String> {
        let mut vars = BTreeSet::new();
        for form in &self.premises {
            form.collect_schema_variables(&mut vars);
        }
        vars
    }

    /// Schema variables occurring in the conclusions but in no premise.
    /// Matching the premises can never bind these.
    pub fn conclusion_additions(&self) -> Vec<String> {
        let premise_vars = self.premise_variables();
        let mut conclusion_vars = BTreeSet::new();
        for conclusion in &self.conclusions {
            conclusion.collect_schema_variables(&mut conclusion_vars);
        }
        conclusion_vars
            .into_iter()
            .filter(|v| !premise_vars.contains(v))
            .collect()
    }

    pub fn is_concrete(&self) -> bool {
        let mut vars = BTreeSet::new();
        self.collect_schema_variables(&mut vars);
        vars.is_empty()
    }
}

impl fmt::Display for Sequent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, form) in self.premises.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", form)?;
        }
        if !self.premises.is_empty() {
            write!(f, " ")?;
        }
        write!(f, "|-")?;
        for (i, conclusion) in self.conclusions.iter().enumerate() {
            write!(f, "{}{}", if i == 0 { " " } else { ", " }, conclusion)?;
        }
        Ok(())
    }
}
