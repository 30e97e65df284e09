//! Inference rules

use crate::formula::Sequent;
use crate::proof::Proof;

/// A named template sequent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferenceRule {
    pub name: String,
    /// Usable anywhere the name is
    pub abbreviation: String,
    pub sequent: Sequent,
    /// Proof of the rule from more fundamental rules; `None` for primitive rules
    pub derivation: Option<Proof>,
}

impl InferenceRule {
    pub fn new(name: impl Into<String>, abbreviation: impl Into<String>, sequent: Sequent) -> Self {
        InferenceRule {
            name: name.into(),
            abbreviation: abbreviation.into(),
            sequent,
            derivation: None,
        }
    }

    pub fn derived(
        name: impl Into<String>,
        abbreviation: impl Into<String>,
        sequent: Sequent,
        derivation: Proof,
    ) -> Self {
        InferenceRule {
            derivation: Some(derivation),
            ..InferenceRule::new(name, abbreviation, sequent)
        }
    }

    pub fn is_derived(&self) -> bool {
        self.derivation.is_some()
    }

    pub fn premise_count(&self) -> usize {
        self.sequent.premises.len()
    }

    /// Schema variables that only occur in conclusions. Matching premises
    /// cannot bind them; the caller must supply them.
    pub fn conclusion_only_symbols(&self) -> Vec<String> {
        self.sequent.conclusion_additions()
    }
}

/// Rule names with special meaning to a proof session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculusRoles {
    /// Seeds raw premises; zero premises and one atomic conclusion
    pub premise_assertion: String,
    pub theorem_intro: String,
    pub axiom_intro: String,
    /// Justifies the first step of a sub-proof
    pub subproof_premise: Option<String>,
}

impl CalculusRoles {
    pub fn new(premise_assertion: &str) -> Self {
        CalculusRoles {
            premise_assertion: premise_assertion.to_string(),
            theorem_intro: "Theorem Intro".to_string(),
            axiom_intro: "Axiom Intro".to_string(),
            subproof_premise: None,
        }
    }

    pub fn with_intro_names(mut self, theorem_intro: &str, axiom_intro: &str) -> Self {
        self.theorem_intro = theorem_intro.to_string();
        self.axiom_intro = axiom_intro.to_string();
        self
    }

    pub fn with_subproof_premise(mut self, rule: &str) -> Self {
        self.subproof_premise = Some(rule.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculus::Calculus;
    use crate::config::EngineConfig;
    use crate::formula::{FormSet, Formula};
    use crate::logics;
    use crate::proof::Citation;
    use crate::session::{FirstChoice, ProofSession};
    use crate::unification::BindingMap;

    #[test]
    fn test_derived_rule_carries_its_proof() {
        let logic = logics::gentzen().unwrap();
        let lang = &logic.language;

        let mut session = ProofSession::new(&logic, EngineConfig::default());
        session.start_str("A > B, B > C, A |- C").unwrap();
        session
            .infer("MP", &[Citation::Step(1), Citation::Step(3)], &mut FirstChoice)
            .unwrap();
        session
            .infer("MP", &[Citation::Step(2), Citation::Step(4)], &mut FirstChoice)
            .unwrap();
        assert!(session.is_complete());

        let template = lang.parse_template_sequent("P > Q, Q > R, P |- R").unwrap();
        let chained = InferenceRule::derived("Chained MP", "MP2", template, session.proof().clone());
        assert!(chained.is_derived());
        assert_eq!(chained.derivation.as_ref().map(|p| p.len()), Some(5));
        assert!(!logic.calculus.rule("MP").unwrap().is_derived());

        let given = InferenceRule::new("Given", "Given", lang.parse_template_sequent("|- P").unwrap());
        let calculus = Calculus::new(
            vec![given, chained],
            CalculusRoles::new("Given"),
            None,
            &EngineConfig::default(),
        )
        .unwrap();
        let premises: FormSet = ["D", "D > E", "E > F"]
            .iter()
            .map(|s| lang.parse_formula(s).unwrap())
            .collect::<Vec<_>>()
            .into();
        let app = calculus
            .apply_inference("MP2", &premises, &BindingMap::new())
            .unwrap();
        assert_eq!(app.conclusions, vec![Formula::proposition("F")]);
        assert!(calculus.rule("Chained MP").unwrap().is_derived());
    }
}
