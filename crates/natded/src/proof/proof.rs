//! Proof construction with nested hypothetical sub-proofs
//!
//! Steps are append-only. Every mutation is also recorded in an event log;
//! deleting the last step truncates the log just before that step's event
//! and rebuilds all nesting state by replaying what remains.

use super::env::Env;
use super::step::{Citation, Step};
use crate::config::EngineConfig;
use crate::error::ProofError;
use crate::formula::{FormSet, Formula, Sequent};
use tracing::debug;

/// A recorded proof mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProofEvent {
    AddStep(Step),
    BeginHypo,
    EndHypo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proof {
    steps: Vec<Step>,
    env: Env,
    events: Vec<ProofEvent>,
    /// 0 means no limit
    max_depth: usize,
}

impl Default for Proof {
    fn default() -> Self {
        Self::new()
    }
}

impl Proof {
    /// An empty proof with no nesting limit
    pub fn new() -> Self {
        Proof {
            steps: Vec::new(),
            env: Env::new(),
            events: Vec::new(),
            max_depth: 0,
        }
    }

    pub fn with_config(config: &EngineConfig) -> Self {
        Proof {
            max_depth: config.max_nesting_depth,
            ..Proof::new()
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step by 1-based number
    pub fn step(&self, number: usize) -> Option<&Step> {
        number.checked_sub(1).and_then(|idx| self.steps.get(idx))
    }

    pub fn last_step(&self) -> Option<&Step> {
        self.steps.last()
    }

    pub fn depth(&self) -> usize {
        self.env.depth()
    }

    pub fn env(&self) -> &Env {
        &self.env
    }

    pub fn events(&self) -> &[ProofEvent] {
        &self.events
    }

    fn prev_level(&self) -> usize {
        self.steps.last().map_or(0, |s| s.level)
    }

    /// Citations usable by the next step
    pub fn available_citations(&self) -> Vec<Citation> {
        self.env.available()
    }

    pub fn is_visible(&self, citation: &Citation) -> bool {
        self.env.is_visible(citation)
    }

    fn check_visible(&self, citations: &[Citation]) -> Result<(), ProofError> {
        match citations.iter().find(|c| !self.env.is_visible(c)) {
            Some(&bad) => Err(ProofError::CitationNotVisible(bad)),
            None => Ok(()),
        }
    }

    /// Append a step at the current depth and return its number.
    ///
    /// The formula must be concrete and every citation visible.
    pub fn add_step(&mut self, mut step: Step) -> Result<usize, ProofError> {
        let schematic = step.formula.schema_variables();
        if !schematic.is_empty() {
            return Err(ProofError::SchematicFormula(schematic.into_iter().collect()));
        }
        self.check_visible(&step.citations)?;

        step.level = self.env.depth();
        self.events.push(ProofEvent::AddStep(step.clone()));
        self.steps.push(step);
        let number = self.steps.len();
        self.env.record(Citation::Step(number));
        debug!(step = number, level = self.env.depth(), "step added");
        Ok(number)
    }

    /// Open a hypothetical sub-proof one level deeper
    pub fn begin_hypo(&mut self) -> Result<(), ProofError> {
        let depth = self.env.depth();
        let prev = self.prev_level();
        if depth != prev && depth + 1 != prev {
            return Err(ProofError::NestTooDeep);
        }
        if self.max_depth != 0 && depth + 1 > self.max_depth {
            return Err(ProofError::DepthLimit(self.max_depth));
        }

        self.env.push();
        self.events.push(ProofEvent::BeginHypo);
        debug!(level = depth + 1, "sub-proof opened");
        Ok(())
    }

    /// Close the current sub-proof. A non-empty sub-proof becomes a single
    /// range citation in the enclosing scope.
    pub fn end_hypo(&mut self) -> Result<(), ProofError> {
        let depth = self.env.depth();
        if depth == 0 {
            return Err(ProofError::AtTopLevel);
        }
        let prev = self.prev_level();
        if depth != prev && depth != prev + 1 {
            return Err(ProofError::ExitTooFar);
        }

        let closed = self.env.pop().ok_or(ProofError::AtTopLevel)?;
        if let Some((first, last)) = closed.range() {
            self.env.record(Citation::SubProof(first, last));
            debug!(first, last, level = depth - 1, "sub-proof closed");
        } else {
            debug!(level = depth - 1, "empty sub-proof closed");
        }
        self.events.push(ProofEvent::EndHypo);
        Ok(())
    }

    /// Remove the last step and rebuild nesting state by replay.
    ///
    /// Nesting changes made after the removed step are discarded with it.
    pub fn delete_step(&mut self) -> Result<Step, ProofError> {
        let cut = self
            .events
            .iter()
            .rposition(|e| matches!(e, ProofEvent::AddStep(_)))
            .ok_or(ProofError::NoSteps)?;

        let mut events = std::mem::take(&mut self.events);
        let removed = match events.drain(cut..).next() {
            Some(ProofEvent::AddStep(step)) => step,
            _ => return Err(ProofError::NoSteps),
        };

        let replayed = Proof {
            max_depth: self.max_depth,
            ..Proof::new()
        };
        *self = replayed;
        for event in events {
            self.replay(event)?;
        }
        debug!(remaining = self.steps.len(), depth = self.env.depth(), "step deleted");
        Ok(removed)
    }

    fn replay(&mut self, event: ProofEvent) -> Result<(), ProofError> {
        match event {
            ProofEvent::AddStep(step) => self.add_step(step).map(|_| ()),
            ProofEvent::BeginHypo => self.begin_hypo(),
            ProofEvent::EndHypo => self.end_hypo(),
        }
    }

    /// Resolve citations to premises: a step to its formula, a sub-proof
    /// range to the sequent `first |- last`.
    pub fn build_premise_set(&self, citations: &[Citation]) -> Result<FormSet, ProofError> {
        self.check_visible(citations)?;

        let mut premises = FormSet::new();
        for citation in citations {
            match *citation {
                Citation::Step(n) => premises.push(self.formula_of(n, citation)?.clone()),
                Citation::SubProof(first, last) => {
                    let hypothesis = self.formula_of(first, citation)?.clone();
                    let conclusion = self.formula_of(last, citation)?.clone();
                    premises.push(Sequent::new(FormSet::from(vec![hypothesis]), vec![conclusion]));
                }
            }
        }
        Ok(premises)
    }

    fn formula_of(&self, number: usize, citation: &Citation) -> Result<&Formula, ProofError> {
        self.step(number)
            .map(|s| &s.formula)
            .ok_or(ProofError::CitationNotVisible(*citation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn given(name: &str) -> Step {
        Step::new(Formula::proposition(name), "Given", "Given")
    }

    #[test]
    fn test_hypo_records_range_in_parent() {
        let mut proof = Proof::new();
        proof.add_step(given("A")).unwrap();
        proof.begin_hypo().unwrap();
        let n = proof.add_step(given("B")).unwrap();
        proof.end_hypo().unwrap();
        assert_eq!(
            proof.available_citations(),
            vec![Citation::Step(1), Citation::SubProof(n, n)]
        );
        assert_eq!(proof.step(2).unwrap().level, 1);
    }

    #[test]
    fn test_nesting_transitions() {
        let mut proof = Proof::new();
        assert_eq!(proof.end_hypo(), Err(ProofError::AtTopLevel));
        proof.begin_hypo().unwrap();
        assert_eq!(proof.begin_hypo(), Err(ProofError::NestTooDeep));
        proof.add_step(given("A")).unwrap();
        proof.begin_hypo().unwrap();
        proof.add_step(given("B")).unwrap();
        proof.end_hypo().unwrap();
        // the last step is two levels deeper than the enclosing scope
        assert_eq!(proof.end_hypo(), Err(ProofError::ExitTooFar));
        assert_eq!(proof.depth(), 1);

        proof.add_step(given("C")).unwrap();
        proof.end_hypo().unwrap();
        assert_eq!(proof.depth(), 0);
        assert_eq!(
            proof.available_citations(),
            vec![Citation::SubProof(1, 3)]
        );
    }

    #[test]
    fn test_sibling_sub_proofs() {
        let mut proof = Proof::new();
        proof.begin_hypo().unwrap();
        proof.add_step(given("A")).unwrap();
        proof.end_hypo().unwrap();
        // a sibling may open right after a close
        proof.begin_hypo().unwrap();
        proof.add_step(given("B")).unwrap();
        assert_eq!(proof.available_citations(), vec![Citation::Step(2)]);
        assert!(!proof.is_visible(&Citation::SubProof(1, 1)));
        proof.end_hypo().unwrap();
        assert_eq!(
            proof.available_citations(),
            vec![Citation::SubProof(1, 1), Citation::SubProof(2, 2)]
        );
    }

    #[test]
    fn test_empty_sub_proof_records_nothing() {
        let mut proof = Proof::new();
        proof.add_step(given("A")).unwrap();
        proof.begin_hypo().unwrap();
        proof.end_hypo().unwrap();
        assert_eq!(proof.available_citations(), vec![Citation::Step(1)]);
    }

    #[test]
    fn test_depth_limit() {
        let config = EngineConfig {
            max_nesting_depth: 1,
            ..EngineConfig::default()
        };
        let mut proof = Proof::with_config(&config);
        proof.begin_hypo().unwrap();
        proof.add_step(given("A")).unwrap();
        assert_eq!(proof.begin_hypo(), Err(ProofError::DepthLimit(1)));
    }

    #[test]
    fn test_depth_limit_from_config() {
        let config = EngineConfig::from_json(r#"{"max_nesting_depth": 2}"#).unwrap();
        let mut proof = Proof::with_config(&config);
        for name in ["A", "B"] {
            proof.begin_hypo().unwrap();
            proof.add_step(given(name)).unwrap();
        }
        assert_eq!(proof.depth(), 2);
        assert_eq!(proof.begin_hypo(), Err(ProofError::DepthLimit(2)));

        // 0 means no limit
        let mut proof = Proof::with_config(&EngineConfig::default());
        for _ in 0..20 {
            proof.begin_hypo().unwrap();
            proof.add_step(given("A")).unwrap();
        }
        assert_eq!(proof.depth(), 20);
    }

    #[test]
    fn test_rejects_schematic_and_invisible() {
        let mut proof = Proof::new();
        let err = proof
            .add_step(Step::new(Formula::schema("P"), "Given", "Given"))
            .unwrap_err();
        assert_eq!(err, ProofError::SchematicFormula(vec!["P".into()]));

        let err = proof
            .add_step(given("A").with_citations(vec![Citation::Step(1)]))
            .unwrap_err();
        assert_eq!(err, ProofError::CitationNotVisible(Citation::Step(1)));
        assert!(proof.is_empty());
    }

    #[test]
    fn test_delete_replays() {
        let mut proof = Proof::new();
        proof.add_step(given("A")).unwrap();
        proof.begin_hypo().unwrap();
        proof.add_step(given("B")).unwrap();
        proof.end_hypo().unwrap();
        let before = proof.clone();

        proof.add_step(given("C")).unwrap();
        let removed = proof.delete_step().unwrap();
        assert_eq!(removed.formula, Formula::proposition("C"));
        assert_eq!(proof, before);

        // removing the sub-proof's only step reopens it
        proof.delete_step().unwrap();
        assert_eq!(proof.depth(), 1);
        assert_eq!(proof.available_citations(), vec![Citation::Step(1)]);

        proof.delete_step().unwrap();
        assert_eq!(proof.delete_step(), Err(ProofError::NoSteps));
        assert_eq!(proof.depth(), 0);
    }

    #[test]
    fn test_build_premise_set() {
        let mut proof = Proof::new();
        proof.add_step(given("A")).unwrap();
        proof.begin_hypo().unwrap();
        proof.add_step(given("B")).unwrap();
        proof.add_step(given("C")).unwrap();
        proof.end_hypo().unwrap();

        let premises = proof
            .build_premise_set(&[Citation::SubProof(2, 3), Citation::Step(1)])
            .unwrap();
        let seq = premises[0].as_sequent().unwrap();
        assert_eq!(seq.premises[0].as_formula(), Some(&Formula::proposition("B")));
        assert_eq!(seq.conclusions, vec![Formula::proposition("C")]);
        assert_eq!(premises[1].as_formula(), Some(&Formula::proposition("A")));

        assert!(proof.build_premise_set(&[Citation::Step(2)]).is_err());
        assert!(proof.build_premise_set(&[]).unwrap().is_empty());
    }
}
