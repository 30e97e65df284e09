//! One-way matching of templates against concrete forms
//!
//! Only template schema variables are bound. Premise sets are matched as
//! unordered: the search tries every assignment of concrete forms to template
//! forms, backtracking on the first inconsistency and stopping at the first
//! complete mapping.

use super::BindingMap;
use crate::error::MatchError;
use crate::formula::{Form, Formula, Sequent};
use tracing::trace;

/// Unify one template node against one concrete node, extending `bindings`.
///
/// On failure `bindings` may hold partial bindings from this attempt;
/// callers that backtrack work on a copy.
pub fn unify(template: &Formula, concrete: &Formula, bindings: &mut BindingMap) -> bool {
    match template {
        // Schema variable binds, or must agree with its earlier binding
        Formula::Atomic(sym) if sym.is_schema() => match bindings.get(&sym.name) {
            Some(bound) => bound == concrete,
            None => {
                bindings.insert(sym.name.clone(), concrete.clone());
                true
            }
        },
        // Literal symbols must appear verbatim
        Formula::Atomic(_) => template == concrete,
        Formula::Structured(op, args) => match concrete {
            Formula::Structured(cop, cargs) if cop == op && cargs.len() == args.len() => args
                .iter()
                .zip(cargs.iter())
                .all(|(t, c)| unify(t, c, bindings)),
            _ => false,
        },
    }
}

fn unify_sequent(template: &Sequent, concrete: &Sequent, bindings: &mut BindingMap) -> bool {
    template.premises.len() == concrete.premises.len()
        && template.conclusions.len() == concrete.conclusions.len()
        && template
            .premises
            .iter()
            .zip(concrete.premises.iter())
            .all(|(t, c)| unify_form(t, c, bindings))
        && template
            .conclusions
            .iter()
            .zip(concrete.conclusions.iter())
            .all(|(t, c)| unify(t, c, bindings))
}

fn unify_form(template: &Form, concrete: &Form, bindings: &mut BindingMap) -> bool {
    match (template, concrete) {
        (Form::Formula(t), Form::Formula(c)) => unify(t, c, bindings),
        (Form::Sequent(t), Form::Sequent(c)) => unify_sequent(t, c, bindings),
        _ => false,
    }
}

/// Find a consistent binding map pairing every template with a distinct
/// concrete form, in any order, extending `seed`.
///
/// Fails with `Arity` before any search when the counts differ.
pub fn match_forms(
    templates: &[Form],
    concretes: &[Form],
    seed: &BindingMap,
) -> Result<BindingMap, MatchError> {
    if templates.len() != concretes.len() {
        return Err(MatchError::Arity {
            expected: templates.len(),
            found: concretes.len(),
        });
    }

    let mut used = vec![false; concretes.len()];
    search(templates, concretes, 0, &mut used, seed).ok_or(MatchError::NoConsistentMapping)
}

fn search(
    templates: &[Form],
    concretes: &[Form],
    idx: usize,
    used: &mut [bool],
    bindings: &BindingMap,
) -> Option<BindingMap> {
    if idx == templates.len() {
        return Some(bindings.clone());
    }

    for j in 0..concretes.len() {
        if used[j] {
            continue;
        }
        let mut attempt = bindings.clone();
        if !unify_form(&templates[idx], &concretes[j], &mut attempt) {
            trace!(template = idx, concrete = j, "pairing rejected");
            continue;
        }
        trace!(template = idx, concrete = j, "pairing accepted");
        used[j] = true;
        if let Some(found) = search(templates, concretes, idx + 1, used, &attempt) {
            return Some(found);
        }
        used[j] = false;
    }
    None
}

/// Instantiate a template with `bindings`
pub fn instantiate(template: &Formula, bindings: &BindingMap) -> Formula {
    bindings.apply(template)
}
