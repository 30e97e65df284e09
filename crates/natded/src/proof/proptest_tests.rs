//! Property-based tests for proof nesting using proptest.

use super::{Proof, Step};
use crate::formula::Formula;
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Op {
    Add(u8),
    Begin,
    End,
    Delete,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..4u8).prop_map(Op::Add),
        2 => Just(Op::Begin),
        2 => Just(Op::End),
        1 => Just(Op::Delete),
    ]
}

fn given(i: u8) -> Step {
    Step::new(Formula::proposition(format!("A{}", i)), "Given", "Given")
}

/// Apply `op`, ignoring rejected transitions
fn apply(proof: &mut Proof, op: Op) {
    let _ = match op {
        Op::Add(i) => proof.add_step(given(i)).map(|_| ()),
        Op::Begin => proof.begin_hypo(),
        Op::End => proof.end_hypo(),
        Op::Delete => proof.delete_step().map(|_| ()),
    };
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Consecutive steps never differ in level by more than one
    #[test]
    fn prop_depth_changes_by_at_most_one(ops in proptest::collection::vec(arb_op(), 0..40)) {
        let mut proof = Proof::new();
        for op in ops {
            apply(&mut proof, op);
            for pair in proof.steps().windows(2) {
                prop_assert!(pair[0].level.abs_diff(pair[1].level) <= 1);
            }
            if let Some(first) = proof.steps().first() {
                prop_assert!(first.level <= 1);
            }
        }
    }

    /// Adding a step and deleting it restores the proof exactly
    #[test]
    fn prop_add_then_delete_is_identity(
        ops in proptest::collection::vec(arb_op(), 0..30),
        extra in 0..4u8,
    ) {
        let mut proof = Proof::new();
        for op in ops {
            apply(&mut proof, op);
        }
        let before = proof.clone();
        proof.add_step(given(extra)).unwrap();
        let removed = proof.delete_step().unwrap();
        prop_assert_eq!(removed.formula, given(extra).formula);
        prop_assert_eq!(proof, before);
    }

    /// Every available citation can be resolved to premises
    #[test]
    fn prop_available_citations_resolve(ops in proptest::collection::vec(arb_op(), 0..30)) {
        let mut proof = Proof::new();
        for op in ops {
            apply(&mut proof, op);
        }
        let available = proof.available_citations();
        let premises = proof.build_premise_set(&available).unwrap();
        prop_assert_eq!(premises.len(), available.len());
    }
}
