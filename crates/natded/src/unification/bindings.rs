//! Schema variable bindings

use crate::formula::Formula;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Schema variable name -> concrete formula, in binding order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingMap {
    pub map: IndexMap<String, Formula>,
}

impl BindingMap {
    /// Create an empty binding map
    pub fn new() -> Self {
        BindingMap {
            map: IndexMap::new(),
        }
    }

    /// Bind `name`, replacing any previous binding
    pub fn insert(&mut self, name: impl Into<String>, formula: Formula) {
        self.map.insert(name.into(), formula);
    }

    pub fn get(&self, name: &str) -> Option<&Formula> {
        self.map.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Formula> {
        self.map.iter()
    }

    /// Add every binding of `other` that is not already bound here
    pub fn merge(&mut self, other: &BindingMap) {
        for (name, formula) in other.iter() {
            if !self.contains(name) {
                self.insert(name.clone(), formula.clone());
            }
        }
    }

    /// Substitute every bound schema variable in `template`.
    /// Unbound schema variables are left in place.
    pub fn apply(&self, template: &Formula) -> Formula {
        match template {
            Formula::Atomic(sym) if sym.is_schema() => match self.get(&sym.name) {
                Some(bound) => bound.clone(),
                None => template.clone(),
            },
            Formula::Atomic(_) => template.clone(),
            Formula::Structured(op, args) => {
                Formula::Structured(op.clone(), args.iter().map(|a| self.apply(a)).collect())
            }
        }
    }
}

impl FromIterator<(String, Formula)> for BindingMap {
    fn from_iter<I: IntoIterator<Item = (String, Formula)>>(iter: I) -> Self {
        BindingMap {
            map: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for BindingMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, formula)) in self.map.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} -> {}", name, formula)?;
        }
        write!(f, "}}")
    }
}
