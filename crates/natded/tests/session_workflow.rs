//! Integration tests driving whole proofs through a session.

use natded::error::ProofError;
use natded::language::Language;
use natded::{
    logics, BindingMap, Citation, EngineConfig, Error, FirstChoice, Formula, FormulaPath,
    InferenceRule, ProofSession, Resolver,
};

/// Answers every question from a fixed script
struct Script {
    path: FormulaPath,
    bindings: BindingMap,
    index: usize,
}

impl Resolver for Script {
    fn select_sub_formula(&mut self, _formula: &Formula, _language: &Language) -> Option<FormulaPath> {
        Some(self.path.clone())
    }

    fn assign_unmapped_symbols(&mut self, _symbols: &[String], _rule: &InferenceRule) -> Option<BindingMap> {
        Some(self.bindings.clone())
    }

    fn select_conclusion_form(&mut self, _candidates: &[Formula]) -> Option<usize> {
        Some(self.index)
    }
}

/// Cancels every question
struct Cancel;

impl Resolver for Cancel {
    fn select_sub_formula(&mut self, _formula: &Formula, _language: &Language) -> Option<FormulaPath> {
        None
    }

    fn assign_unmapped_symbols(&mut self, _symbols: &[String], _rule: &InferenceRule) -> Option<BindingMap> {
        None
    }

    fn select_conclusion_form(&mut self, _candidates: &[Formula]) -> Option<usize> {
        None
    }
}

#[test]
fn test_gentzen_proof_with_equivalence() {
    let logic = logics::gentzen().unwrap();
    let mut session = ProofSession::new(&logic, EngineConfig::default());
    session.start_str("~(A & B), C > (A & B) |- ~C").unwrap();

    let n = session
        .infer("MT", &[Citation::Step(2), Citation::Step(1)], &mut FirstChoice)
        .unwrap();
    assert_eq!(n, 3);
    assert!(session.is_complete());

    let mut script = Script {
        path: vec![],
        bindings: BindingMap::new(),
        index: 0,
    };
    session
        .infer_equivalence("DM(&)", &[Citation::Step(1)], &mut script)
        .unwrap();
    assert_eq!(
        session.proof().step(4).unwrap().formula,
        logic.language.parse_formula("~A v ~B").unwrap()
    );
}

#[test]
fn test_simplification_choice_recorded() {
    let logic = logics::gentzen().unwrap();
    let mut session = ProofSession::new(&logic, EngineConfig::default());
    session.start_str("A & B |- B").unwrap();
    let mut script = Script {
        path: vec![],
        bindings: BindingMap::new(),
        index: 1,
    };
    session.infer("Simp", &[Citation::Step(1)], &mut script).unwrap();
    let step = session.proof().last_step().unwrap();
    assert_eq!(step.formula, Formula::proposition("B"));
    assert_eq!(step.conclusion_index, 1);
    assert!(session.is_complete());

    script.index = 5;
    assert_eq!(
        session.infer("Simp", &[Citation::Step(1)], &mut script).unwrap_err(),
        Error::Proof(ProofError::ConclusionIndex { index: 5, count: 2 })
    );
}

#[test]
fn test_negation_introduction_over_sub_proof() {
    let logic = logics::fitch().unwrap();
    let lang = &logic.language;
    let mut session = ProofSession::new(&logic, EngineConfig::default());
    session.start_str("A -> B, -B |- -A").unwrap();

    session.begin_subproof(lang.parse_formula("A").unwrap()).unwrap();
    session
        .infer("->E", &[Citation::Step(1), Citation::Step(3)], &mut FirstChoice)
        .unwrap();
    session
        .infer("^I", &[Citation::Step(4), Citation::Step(2)], &mut FirstChoice)
        .unwrap();
    session.end_hypo().unwrap();
    assert_eq!(
        session.proof().available_citations(),
        vec![Citation::Step(1), Citation::Step(2), Citation::SubProof(3, 5)]
    );

    session
        .infer("-I", &[Citation::SubProof(3, 5)], &mut FirstChoice)
        .unwrap();
    assert_eq!(
        session.proof().last_step().unwrap().formula,
        lang.parse_formula("-A").unwrap()
    );
    assert_eq!(session.proof().last_step().unwrap().justification(), "3-5 -I");
    assert!(session.is_complete());
}

#[test]
fn test_cancel_and_delete() {
    let logic = logics::gentzen().unwrap();
    let mut session = ProofSession::new(&logic, EngineConfig::default());
    session.start_str("A |- A v B").unwrap();
    let before = session.proof().clone();

    assert_eq!(
        session.infer("Add", &[Citation::Step(1)], &mut Cancel).unwrap_err(),
        Error::Aborted
    );
    assert_eq!(session.proof(), &before);

    let mut bindings = BindingMap::new();
    bindings.insert("Q", Formula::proposition("B"));
    let mut script = Script {
        path: vec![],
        bindings,
        index: 0,
    };
    session.infer("Add", &[Citation::Step(1)], &mut script).unwrap();
    assert!(session.is_complete());

    session.delete_step().unwrap();
    assert_eq!(session.proof(), &before);
    assert!(!session.is_complete());
}
