//! Rule application
//!
//! Two modes: a regular inference matches the rule's premise templates
//! against the cited premises and instantiates every conclusion template;
//! an equivalence rewrite applies a biconditional theorem to one selected
//! sub-formula of a single premise, in whichever direction matches.

use super::registry::Calculus;
use crate::error::CalculusError;
use crate::formula::{FormSet, Formula};
use crate::unification::{instantiate, match_forms, unify, BindingMap};
use tracing::debug;

/// Outcome of a regular inference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleApplication {
    pub bindings: BindingMap,
    /// One candidate per conclusion template, in template order
    pub conclusions: Vec<Formula>,
}

/// Which side of the biconditional matched the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteDirection {
    LeftToRight,
    RightToLeft,
}

/// Outcome of an equivalence rewrite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquivalenceApplication {
    pub bindings: BindingMap,
    pub direction: RewriteDirection,
    /// The other side's instance, standing alone
    pub rewritten: Formula,
    /// The premise with the target replaced by `rewritten`
    pub in_context: Formula,
}

impl Calculus {
    /// Apply rule `name` to `premises`.
    ///
    /// `extra` seeds the match; it must bind every conclusion-only symbol.
    /// A premise count that differs from the rule's is rejected before any
    /// matching is attempted.
    pub fn apply_inference(
        &self,
        name: &str,
        premises: &FormSet,
        extra: &BindingMap,
    ) -> Result<RuleApplication, CalculusError> {
        let rule = self.rule(name)?;
        let bindings = match_forms(rule.sequent.premises.as_slice(), premises.as_slice(), extra)
            .map_err(|source| CalculusError::Match {
                rule: rule.name.clone(),
                source,
            })?;

        let unbound: Vec<String> = rule
            .conclusion_only_symbols()
            .into_iter()
            .filter(|sym| !bindings.contains(sym))
            .collect();
        if !unbound.is_empty() {
            return Err(CalculusError::UnboundSymbols {
                rule: rule.name.clone(),
                symbols: unbound,
            });
        }

        let conclusions: Vec<Formula> = rule
            .sequent
            .conclusions
            .iter()
            .map(|c| instantiate(c, &bindings))
            .collect();
        debug!(rule = %rule.name, candidates = conclusions.len(), "inference applied");
        Ok(RuleApplication {
            bindings,
            conclusions,
        })
    }

    /// Rewrite the sub-formula at `target` inside the single premise using
    /// the equivalence theorem `name`.
    ///
    /// The target is unified against the left side first, then the right;
    /// the other side is instantiated with the resulting bindings.
    pub fn apply_equivalence(
        &self,
        name: &str,
        premises: &FormSet,
        target: &[usize],
    ) -> Result<EquivalenceApplication, CalculusError> {
        let rule = self.rule(name)?;
        if !self.is_equivalence_rule(name) {
            return Err(CalculusError::NotAnEquivalence(rule.name.clone()));
        }
        if premises.len() != 1 {
            return Err(CalculusError::EquivalencePremiseCount(premises.len()));
        }
        let premise = premises[0].as_formula().ok_or(CalculusError::SequentPremise)?;
        let selected = premise
            .subformula_at(target)
            .ok_or_else(|| CalculusError::TargetOutsidePremise(target.to_vec()))?;

        let sides = rule.sequent.conclusions[0].operands();
        let (left, right) = (&sides[0], &sides[1]);

        let mut bindings = BindingMap::new();
        let (direction, other) = if unify(left, selected, &mut bindings) {
            (RewriteDirection::LeftToRight, right)
        } else {
            bindings = BindingMap::new();
            if unify(right, selected, &mut bindings) {
                (RewriteDirection::RightToLeft, left)
            } else {
                return Err(CalculusError::InvalidTarget);
            }
        };

        let rewritten = instantiate(other, &bindings);
        let unbound: Vec<String> = rewritten.schema_variables().into_iter().collect();
        if !unbound.is_empty() {
            return Err(CalculusError::UnboundSymbols {
                rule: rule.name.clone(),
                symbols: unbound,
            });
        }
        let in_context = premise
            .replace_at(target, rewritten.clone())
            .ok_or_else(|| CalculusError::TargetOutsidePremise(target.to_vec()))?;

        debug!(rule = %rule.name, ?direction, ?target, "equivalence applied");
        Ok(EquivalenceApplication {
            bindings,
            direction,
            rewritten,
            in_context,
        })
    }
}
