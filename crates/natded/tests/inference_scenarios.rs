//! Integration tests for rule application and proof nesting.

use natded::calculus::RewriteDirection;
use natded::error::{CalculusError, ProofError};
use natded::{logics, BindingMap, Citation, FormSet, Formula, Proof, Step};

fn premises(logic: &natded::Logic, srcs: &[&str]) -> FormSet {
    srcs.iter()
        .map(|s| logic.language.parse_formula(s).unwrap())
        .collect::<Vec<Formula>>()
        .into()
}

#[test]
fn test_modus_ponens_either_order() {
    let logic = logics::gentzen().unwrap();
    let expected = vec![logic.language.parse_formula("B").unwrap()];
    for order in [["A > B", "A"], ["A", "A > B"]] {
        let app = logic
            .calculus
            .apply_inference("MP", &premises(&logic, &order), &BindingMap::new())
            .unwrap();
        assert_eq!(app.conclusions, expected, "order {:?}", order);
        assert_eq!(app.bindings.get("P"), Some(&Formula::proposition("A")));
        assert_eq!(app.bindings.get("Q"), Some(&Formula::proposition("B")));
    }
}

#[test]
fn test_simplification_candidates() {
    let logic = logics::gentzen().unwrap();
    let app = logic
        .calculus
        .apply_inference("Simp", &premises(&logic, &["A & B"]), &BindingMap::new())
        .unwrap();
    assert_eq!(app.conclusions.len(), 2);
    assert_eq!(app.conclusions[1], Formula::proposition("B"));
}

#[test]
fn test_de_morgan_rewrite() {
    let logic = logics::gentzen().unwrap();
    let app = logic
        .calculus
        .apply_equivalence("DM(&)", &premises(&logic, &["~(P & Q)"]), &[])
        .unwrap();
    assert_eq!(app.direction, RewriteDirection::LeftToRight);
    assert_eq!(app.rewritten, logic.language.parse_formula("~P v ~Q").unwrap());
    assert_eq!(
        logic
            .language
            .format_with(&app.rewritten, natded::RenderStyle::Unicode)
            .unwrap(),
        "\u{00AC}P \u{2228} \u{00AC}Q"
    );
}

#[test]
fn test_sequent_premise_not_rewritable() {
    let logic = logics::gentzen().unwrap();
    let seq = logic.language.parse_sequent("A |- B").unwrap();
    let mut set = FormSet::new();
    set.push(seq);
    let name = "DM(&)";
    assert_eq!(
        logic.calculus.apply_equivalence(name, &set, &[]).unwrap_err(),
        CalculusError::SequentPremise
    );
}

#[test]
fn test_single_step_sub_proof() {
    let mut proof = Proof::new();
    proof
        .add_step(Step::new(Formula::proposition("A"), "Given", "Given"))
        .unwrap();
    proof.begin_hypo().unwrap();
    let n = proof
        .add_step(Step::new(Formula::proposition("B"), "Given", "Given"))
        .unwrap();
    proof.end_hypo().unwrap();

    assert_eq!(proof.depth(), 0);
    assert_eq!(
        proof.available_citations(),
        vec![Citation::Step(1), Citation::SubProof(n, n)]
    );
    // the sub-proof's step is no longer citable by itself
    assert!(!proof.is_visible(&Citation::Step(n)));
}

#[test]
fn test_inner_scope_sees_outer_steps_only() {
    let mut proof = Proof::new();
    let given = |name: &str| Step::new(Formula::proposition(name), "Given", "Given");
    proof.add_step(given("A")).unwrap();
    proof.begin_hypo().unwrap();
    proof.add_step(given("B")).unwrap();
    proof.end_hypo().unwrap();
    proof.begin_hypo().unwrap();
    proof.add_step(given("C")).unwrap();

    assert!(proof.is_visible(&Citation::Step(1)));
    assert!(proof.is_visible(&Citation::Step(3)));
    assert!(!proof.is_visible(&Citation::SubProof(2, 2)));
    assert_eq!(
        proof.add_step(given("D").with_citations(vec![Citation::SubProof(2, 2)])),
        Err(ProofError::CitationNotVisible(Citation::SubProof(2, 2)))
    );

    proof.end_hypo().unwrap();
    assert_eq!(
        proof.available_citations(),
        vec![Citation::Step(1), Citation::SubProof(2, 2), Citation::SubProof(3, 3)]
    );
}
