//! Validated rule registry

use super::rule::{CalculusRoles, InferenceRule};
use crate::config::EngineConfig;
use crate::error::CalculusError;
use crate::formula::{Formula, Operator};
use indexmap::IndexMap;

/// An immutable collection of inference rules with designated roles
#[derive(Debug, Clone)]
pub struct Calculus {
    rules: Vec<InferenceRule>,
    /// Name or abbreviation -> rule index
    index: IndexMap<String, usize>,
    roles: CalculusRoles,
    /// Biconditional used for equivalence rewrites; `None` disables them
    equivalence: Option<Operator>,
}

impl Calculus {
    /// Validate and index `rules`.
    ///
    /// Fails if a name or abbreviation is reused, a rule exceeds the
    /// configured premise bound, the premise-assertion rule is missing or
    /// malformed, or the sub-proof premise rule is unknown.
    pub fn new(
        rules: Vec<InferenceRule>,
        roles: CalculusRoles,
        equivalence: Option<Operator>,
        config: &EngineConfig,
    ) -> Result<Self, CalculusError> {
        let mut index: IndexMap<String, usize> = IndexMap::new();
        for (idx, rule) in rules.iter().enumerate() {
            if rule.premise_count() > config.max_rule_premises {
                return Err(CalculusError::TooManyPremises {
                    rule: rule.name.clone(),
                    premises: rule.premise_count(),
                    limit: config.max_rule_premises,
                });
            }
            for key in [&rule.name, &rule.abbreviation] {
                if let Some(&prev) = index.get(key) {
                    if prev != idx {
                        return Err(CalculusError::DuplicateRule(key.clone()));
                    }
                }
                index.insert(key.clone(), idx);
            }
        }

        let assertion_name = &roles.premise_assertion;
        let assertion = index
            .get(assertion_name)
            .map(|&idx| &rules[idx])
            .ok_or_else(|| CalculusError::InvalidAssertionRule {
                rule: assertion_name.clone(),
                reason: "rule name not defined",
            })?;
        if !assertion.sequent.premises.is_empty() {
            return Err(CalculusError::InvalidAssertionRule {
                rule: assertion_name.clone(),
                reason: "rule may have no premise forms",
            });
        }
        match assertion.sequent.conclusions.as_slice() {
            [Formula::Atomic(_)] => {}
            [_] => {
                return Err(CalculusError::InvalidAssertionRule {
                    rule: assertion_name.clone(),
                    reason: "conclusion form must be atomic",
                })
            }
            _ => {
                return Err(CalculusError::InvalidAssertionRule {
                    rule: assertion_name.clone(),
                    reason: "rule must have exactly one conclusion form",
                })
            }
        }

        if let Some(name) = &roles.subproof_premise {
            if !index.contains_key(name) {
                return Err(CalculusError::UnknownRule(name.clone()));
            }
        }

        Ok(Calculus {
            rules,
            index,
            roles,
            equivalence,
        })
    }

    pub fn has_rule(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Look up a rule by name or abbreviation
    pub fn rule(&self, name: &str) -> Result<&InferenceRule, CalculusError> {
        self.index
            .get(name)
            .map(|&idx| &self.rules[idx])
            .ok_or_else(|| CalculusError::UnknownRule(name.to_string()))
    }

    pub fn rules(&self) -> &[InferenceRule] {
        &self.rules
    }

    pub fn roles(&self) -> &CalculusRoles {
        &self.roles
    }

    pub fn premise_assertion_rule(&self) -> Result<&InferenceRule, CalculusError> {
        self.rule(&self.roles.premise_assertion)
    }

    /// The sub-proof premise rule, or the premise-assertion rule when the
    /// calculus has none
    pub fn subproof_premise_rule(&self) -> Result<&InferenceRule, CalculusError> {
        match &self.roles.subproof_premise {
            Some(name) => self.rule(name),
            None => self.premise_assertion_rule(),
        }
    }

    pub fn equivalence_operator(&self) -> Option<&Operator> {
        self.equivalence.as_ref()
    }

    pub fn conclusion_only_symbols(&self, name: &str) -> Result<Vec<String>, CalculusError> {
        Ok(self.rule(name)?.conclusion_only_symbols())
    }

    /// True for zero-premise rules concluding a single biconditional
    pub fn is_equivalence_rule(&self, name: &str) -> bool {
        let (Some(equiv), Ok(rule)) = (&self.equivalence, self.rule(name)) else {
            return false;
        };
        let seq = &rule.sequent;
        seq.premises.is_empty()
            && seq.conclusions.len() == 1
            && seq.conclusions[0].operator() == Some(equiv)
            && seq.conclusions[0].operands().len() == 2
    }
}
