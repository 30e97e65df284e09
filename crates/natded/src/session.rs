//! Caller-driven proof construction
//!
//! A session owns one proof over one logic. Choices the engine cannot make
//! (values for conclusion-only symbols, the sub-formula an equivalence
//! rewrites, which conclusion form to keep) are delegated to a `Resolver`.
//! Every resolver call happens before the proof is touched, so a cancelled
//! inference leaves the proof unmodified.

use crate::calculus::InferenceRule;
use crate::config::EngineConfig;
use crate::error::{CalculusError, Error, MatchError, ProofError, Result};
use crate::formula::{Form, FormSet, Formula, FormulaPath, Sequent};
use crate::language::Language;
use crate::logics::Logic;
use crate::proof::{Citation, Proof, Step};
use crate::unification::BindingMap;
use tracing::{debug, info};

/// Decisions supplied by the host. Returning `None` cancels the inference.
pub trait Resolver {
    /// Pick the sub-formula of `formula` to rewrite
    fn select_sub_formula(&mut self, formula: &Formula, language: &Language) -> Option<FormulaPath>;

    /// Bind symbols that occur only in `rule`'s conclusions
    fn assign_unmapped_symbols(&mut self, symbols: &[String], rule: &InferenceRule) -> Option<BindingMap>;

    /// Pick one of several conclusion forms
    fn select_conclusion_form(&mut self, candidates: &[Formula]) -> Option<usize>;
}

/// Resolver for hosts that never need to choose: binds nothing, targets
/// the whole premise and keeps the first conclusion form.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstChoice;

impl Resolver for FirstChoice {
    fn select_sub_formula(&mut self, _formula: &Formula, _language: &Language) -> Option<FormulaPath> {
        Some(Vec::new())
    }

    fn assign_unmapped_symbols(&mut self, _symbols: &[String], _rule: &InferenceRule) -> Option<BindingMap> {
        Some(BindingMap::new())
    }

    fn select_conclusion_form(&mut self, _candidates: &[Formula]) -> Option<usize> {
        Some(0)
    }
}

pub struct ProofSession<'a> {
    logic: &'a Logic,
    config: EngineConfig,
    proof: Proof,
    goal: Option<Sequent>,
}

impl<'a> ProofSession<'a> {
    pub fn new(logic: &'a Logic, config: EngineConfig) -> Self {
        ProofSession {
            logic,
            proof: Proof::with_config(&config),
            config,
            goal: None,
        }
    }

    pub fn logic(&self) -> &Logic {
        self.logic
    }

    pub fn proof(&self) -> &Proof {
        &self.proof
    }

    pub fn goal(&self) -> Option<&Sequent> {
        self.goal.as_ref()
    }

    /// Discard any proof in progress and assert each premise of `goal`
    pub fn start(&mut self, goal: Sequent) -> Result<()> {
        let mut proof = Proof::with_config(&self.config);
        let rule = self.logic.calculus.premise_assertion_rule()?;
        for form in goal.premises.iter() {
            let Form::Formula(premise) = form else {
                return Err(CalculusError::SequentPremise.into());
            };
            let step = self.assertion_step(rule, premise.clone())?;
            proof.add_step(step)?;
        }
        let shown = self.logic.language.format_sequent(&goal, self.config.render_style)?;
        info!(goal = %shown, "proof started");
        self.proof = proof;
        self.goal = Some(goal);
        Ok(())
    }

    /// Parse `source` as a concrete sequent and start proving it
    pub fn start_str(&mut self, source: &str) -> Result<()> {
        let goal = self.logic.language.parse_sequent(source)?;
        self.start(goal)
    }

    /// Instantiate a premise-like rule (`|- P`) with `formula`
    fn assertion_step(&self, rule: &InferenceRule, formula: Formula) -> Result<Step> {
        let symbol = match rule.sequent.conclusions.as_slice() {
            [Formula::Atomic(sym)] => sym.name.clone(),
            _ => {
                return Err(CalculusError::InvalidAssertionRule {
                    rule: rule.name.clone(),
                    reason: "conclusion form must be atomic",
                }
                .into())
            }
        };
        let mut bindings = BindingMap::new();
        bindings.insert(symbol, formula);
        let app = self
            .logic
            .calculus
            .apply_inference(&rule.name, &FormSet::new(), &bindings)?;
        let conclusion = app.conclusions.into_iter().next().ok_or(ProofError::ConclusionIndex {
            index: 0,
            count: 0,
        })?;
        Ok(Step::new(conclusion, &rule.name, &rule.abbreviation).with_bindings(app.bindings))
    }

    /// Apply rule `name` to the cited steps and append the result
    pub fn infer(
        &mut self,
        name: &str,
        citations: &[Citation],
        resolver: &mut dyn Resolver,
    ) -> Result<usize> {
        let calculus = &self.logic.calculus;
        let rule = calculus.rule(name)?;
        let premises = self.proof.build_premise_set(citations)?;
        if premises.len() != rule.premise_count() {
            return Err(CalculusError::Match {
                rule: rule.name.clone(),
                source: MatchError::Arity {
                    expected: rule.premise_count(),
                    found: premises.len(),
                },
            }
            .into());
        }

        let unmapped = rule.conclusion_only_symbols();
        let extra = if unmapped.is_empty() {
            BindingMap::new()
        } else {
            resolver
                .assign_unmapped_symbols(&unmapped, rule)
                .ok_or(Error::Aborted)?
        };

        let app = calculus.apply_inference(name, &premises, &extra)?;
        let index = if app.conclusions.len() == 1 {
            0
        } else {
            resolver
                .select_conclusion_form(&app.conclusions)
                .ok_or(Error::Aborted)?
        };
        let conclusion = app
            .conclusions
            .get(index)
            .cloned()
            .ok_or(ProofError::ConclusionIndex {
                index,
                count: app.conclusions.len(),
            })?;

        let step = Step::new(conclusion, &rule.name, &rule.abbreviation)
            .with_citations(citations.to_vec())
            .with_bindings(app.bindings)
            .with_conclusion_index(index);
        let number = self.proof.add_step(step)?;
        debug!(step = number, rule = %rule.name, "inferred");
        Ok(number)
    }

    /// Rewrite a sub-formula of the single cited premise with equivalence
    /// theorem `name`
    pub fn infer_equivalence(
        &mut self,
        name: &str,
        citations: &[Citation],
        resolver: &mut dyn Resolver,
    ) -> Result<usize> {
        let calculus = &self.logic.calculus;
        let rule = calculus.rule(name)?;
        if !calculus.is_equivalence_rule(name) {
            return Err(CalculusError::NotAnEquivalence(rule.name.clone()).into());
        }
        let premises = self.proof.build_premise_set(citations)?;
        if premises.len() != 1 {
            return Err(CalculusError::EquivalencePremiseCount(premises.len()).into());
        }
        let premise = premises[0].as_formula().ok_or(CalculusError::SequentPremise)?;

        let target = resolver
            .select_sub_formula(premise, &self.logic.language)
            .ok_or(Error::Aborted)?;
        let app = calculus.apply_equivalence(name, &premises, &target)?;
        let result = if self.config.contextual_equivalence {
            app.in_context
        } else {
            app.rewritten
        };

        let step = Step::new(result, &rule.name, &rule.abbreviation)
            .with_citations(citations.to_vec())
            .with_bindings(app.bindings);
        let number = self.proof.add_step(step)?;
        debug!(step = number, rule = %rule.name, ?target, "equivalence inferred");
        Ok(number)
    }

    pub fn begin_hypo(&mut self) -> Result<()> {
        Ok(self.proof.begin_hypo()?)
    }

    /// Open a sub-proof whose first step assumes `assumption`
    pub fn begin_subproof(&mut self, assumption: Formula) -> Result<usize> {
        let rule = self.logic.calculus.subproof_premise_rule()?;
        let step = self.assertion_step(rule, assumption)?;

        let saved = self.proof.clone();
        self.proof.begin_hypo()?;
        match self.proof.add_step(step) {
            Ok(number) => Ok(number),
            Err(err) => {
                self.proof = saved;
                Err(err.into())
            }
        }
    }

    pub fn end_hypo(&mut self) -> Result<()> {
        Ok(self.proof.end_hypo()?)
    }

    pub fn delete_step(&mut self) -> Result<Step> {
        Ok(self.proof.delete_step()?)
    }

    /// True once every goal conclusion stands as a top-level step
    pub fn is_complete(&self) -> bool {
        let Some(goal) = &self.goal else {
            return false;
        };
        goal.conclusions.iter().all(|c| {
            self.proof
                .steps()
                .iter()
                .any(|s| s.level == 0 && &s.formula == c)
        })
    }

    /// One line per step: number, indentation by level, formula, justification
    pub fn transcript(&self) -> Result<Vec<String>> {
        let lang = &self.logic.language;
        self.proof
            .steps()
            .iter()
            .enumerate()
            .map(|(i, step)| -> Result<String> {
                let formula = lang.format_with(&step.formula, self.config.render_style)?;
                Ok(format!(
                    "{:>3}. {}{}    {}",
                    i + 1,
                    "| ".repeat(step.level),
                    formula,
                    step.justification()
                ))
            })
            .collect()
    }
}
