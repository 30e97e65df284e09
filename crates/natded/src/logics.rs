//! Built-in logics
//!
//! Three concrete syntaxes with their rule sets: a Gentzen-style system with
//! rules of replacement, Gensler's tree-like system with reductio, and a
//! Fitch-style introduction/elimination system.

use crate::calculus::{Calculus, CalculusRoles, InferenceRule};
use crate::config::EngineConfig;
use crate::error::{LanguageError, Result};
use crate::language::{Language, Lexeme, SyntaxCategory};

/// A concrete syntax paired with a calculus over it
#[derive(Debug, Clone)]
pub struct Logic {
    pub language: Language,
    pub calculus: Calculus,
}

impl Logic {
    /// Parse each `(name, abbreviation, template)` row and validate the
    /// resulting calculus.
    pub fn from_table(
        language: Language,
        table: &[(&str, &str, &str)],
        roles: CalculusRoles,
        config: &EngineConfig,
    ) -> Result<Self> {
        let rules = table
            .iter()
            .map(|(name, abbrev, template)| {
                Ok(InferenceRule::new(
                    *name,
                    *abbrev,
                    language.parse_template_sequent(template)?,
                ))
            })
            .collect::<Result<Vec<_>>>()?;
        let equivalence = language.equivalence_operator().cloned();
        let calculus = Calculus::new(rules, roles, equivalence, config)?;
        Ok(Logic { language, calculus })
    }
}

fn modal_and_entailment() -> Vec<Lexeme> {
    vec![
        Lexeme::new(
            "Necessitation",
            &["N:", "\u{25A1}"],
            SyntaxCategory::Prefix,
            &["it is necessary that", "it is necessarily the case that"],
        ),
        Lexeme::new(
            "Possibility",
            &["P:", "\u{25C7}"],
            SyntaxCategory::Prefix,
            &["it is possible that", "it is possibly the case that"],
        ),
        Lexeme::new("Entailment", &["|-", "\u{22A6}"], SyntaxCategory::Entailment, &["entails"]),
    ]
}

/// `~ & v > <->` with their Unicode glyphs
fn horseshoe_lexicon() -> Vec<Lexeme> {
    let mut lexicon = vec![
        Lexeme::new(
            "Negation",
            &["~", "\u{00AC}"],
            SyntaxCategory::Prefix,
            &["no", "not", "non-", "it is not the case that"],
        ),
        Lexeme::new("Conjunction", &["&", "\u{2227}"], SyntaxCategory::Infix, &["and", "but", "also"]),
        Lexeme::new("Disjunction", &["v", "\u{2228}"], SyntaxCategory::Infix, &["or", "unless"]),
        Lexeme::new(
            "Conditional",
            &[">", "\u{2283}"],
            SyntaxCategory::Infix,
            &["implies", "if-then", "only if", "is a sufficient condition for"],
        ),
        Lexeme::new(
            "Biconditional",
            &["<->", "\u{2261}"],
            SyntaxCategory::Infix,
            &["if and only if", "iff", "just if"],
        ),
    ];
    lexicon.extend(modal_and_entailment());
    lexicon
}

pub fn gentzen_language() -> std::result::Result<Language, LanguageError> {
    Language::new(horseshoe_lexicon(), &["<->", "\u{2261}"])
}

pub fn gensler_language() -> std::result::Result<Language, LanguageError> {
    Language::new(horseshoe_lexicon(), &["<->", "\u{2261}"])
}

/// `- ^ v -> <->` with arrow glyphs
pub fn fitch_language() -> std::result::Result<Language, LanguageError> {
    let mut lexicon = vec![
        Lexeme::new(
            "Negation",
            &["-", "\u{00AC}"],
            SyntaxCategory::Prefix,
            &["no", "not", "non-", "it is not the case that"],
        ),
        Lexeme::new("Conjunction", &["^", "\u{2227}"], SyntaxCategory::Infix, &["and", "but", "also"]),
        Lexeme::new("Disjunction", &["v", "\u{2228}"], SyntaxCategory::Infix, &["or", "unless"]),
        Lexeme::new(
            "Conditional",
            &["->", "\u{2192}"],
            SyntaxCategory::Infix,
            &["implies", "if-then", "only if", "is a sufficient condition for"],
        ),
        Lexeme::new(
            "Biconditional",
            &["<->", "\u{2194}"],
            SyntaxCategory::Infix,
            &["if and only if", "iff", "just if"],
        ),
    ];
    lexicon.extend(modal_and_entailment());
    Language::new(lexicon, &["<->", "\u{2194}"])
}

#[rustfmt::skip]
const GENTZEN_RULES: &[(&str, &str, &str)] = &[
    ("Given",                       "Given",    "|- P"),

    ("Modus Ponens",                "MP",       "P > Q, P |- Q"),
    ("Modus Tollens",               "MT",       "P > Q, ~Q |- ~P"),
    ("Hypothetical Syllogism",      "HS",       "P > Q, Q > R |- P > R"),
    ("Disjunctive Syllogism 1",     "DS1",      "P v Q, ~P |- Q"),
    ("Disjunctive Syllogism 2",     "DS2",      "P v Q, ~Q |- P"),
    ("Constructive Dilemma",        "CD",       "P v Q, P > R, Q > S |- R v S, S v R"),
    ("Absorption",                  "Abs",      "P > Q |- P > (P & Q)"),
    ("Simplification",              "Simp",     "P & Q |- P, Q"),
    ("Conjunction",                 "Conj",     "P, Q |- P & Q, Q & P"),
    ("Addition",                    "Add",      "P |- P v Q, Q v P"),

    ("DeMorgan's (Conj)",           "DM(&)",    "|- ~(P & Q) <-> (~P v ~Q)"),
    ("DeMorgan's (Disj)",           "DM(v)",    "|- ~(P v Q) <-> (~P & ~Q)"),
    ("Commutation (Conj)",          "Comm(&)",  "|- (P & Q) <-> (Q & P)"),
    ("Commutation (Disj)",          "Comm(v)",  "|- (P v Q) <-> (Q v P)"),
    ("Association (Conj)",          "Assoc(&)", "|- (P & (Q & R)) <-> ((P & Q) & R)"),
    ("Association (Disj)",          "Assoc(v)", "|- (P v (Q v R)) <-> ((P v Q) v R)"),
    ("Distribution (Conj)",         "Dist(&)",  "|- (P & (Q v R)) <-> ((P & Q) v (P & R))"),
    ("Distribution (Disj)",         "Dist(v)",  "|- (P v (Q & R)) <-> ((P v Q) & (P v R))"),
    ("Double Negation",             "DN",       "|- P <-> ~~P"),
    ("Transposition",               "Trans",    "|- (P > Q) <-> (~Q > ~P)"),
    ("Material Implication",        "Impl",     "|- (P > Q) <-> (~P v Q)"),
    ("Material Equivalence (Conj)", "Equiv(&)", "|- (P <-> Q) <-> ((P & Q) v (~P & ~Q))"),
    ("Material Equivalence (Cond)", "Equiv(>)", "|- (P <-> Q) <-> ((P > Q) & (Q > P))"),
    ("Exportation",                 "Exp",      "|- ((P & Q) > R) <-> (P > (Q > R))"),
    ("Tautology (Conj)",            "Taut(&)",  "|- P <-> (P & P)"),
    ("Tautology (Disj)",            "Taut(v)",  "|- P <-> (P v P)"),
];

#[rustfmt::skip]
const GENSLER_RULES: &[(&str, &str, &str)] = &[
    ("Assumption",            "asm.",    "|- P"),

    ("Simplification (Conj)", "S(&)",    "P & Q |- P, Q"),
    ("Simplification (Disj)", "S(v)",    "~(P v Q) |- ~P, ~Q"),
    ("Simplification (Impl)", "S(->)",   "~(P > Q) |- P, ~Q"),
    ("Simplification (Neg)",  "S(~)",    "~~P |- P"),
    ("Simplification (Bi)",   "S(<->)",  "P <-> Q |- P > Q, Q > P"),
    ("Simplification (~Bi)",  "S(~<->)", "~(P <-> Q) |- P v Q, ~(P & Q)"),

    ("Inference (Conj 1)",    "I(&1)",   "~(P & Q), P |- ~Q"),
    ("Inference (Conj 2)",    "I(&2)",   "~(P & Q), Q |- ~P"),
    ("Inference (Disj 1)",    "I(v1)",   "P v Q, ~P |- Q"),
    ("Inference (Disj 2)",    "I(v2)",   "P v Q, ~Q |- P"),
    ("Inference (Cond 1)",    "I(->1)",  "P > Q, P |- Q"),
    ("Inference (Cond 2)",    "I(->2)",  "P > Q, ~Q |- ~P"),

    ("Reductio Ad Absurdum",  "RAA",     "( ~P |- Q & ~Q ) |- P"),
];

#[rustfmt::skip]
const FITCH_RULES: &[(&str, &str, &str)] = &[
    ("Assumption",                 "A",    "|- P"),
    ("Hypothesis",                 "H",    "|- P"),

    ("Negation Elimination",       "-E",   "--P |- P"),
    ("Negation Introduction",      "-I",   "( P |- Q ^ -Q ) |- -P"),

    ("Conjunction Elimination",    "^E",   "P ^ Q |- P, Q"),
    ("Conjunction Introduction",   "^I",   "P, Q |- P ^ Q, Q ^ P"),

    ("Disjunction Elimination",    "vE",   "P v Q, P -> R, Q -> R |- R"),
    ("Disjunction Introduction",   "vI",   "P |- P v Q, Q v P"),

    ("Conditional Elimination",    "->E",  "P -> Q, P |- Q"),
    ("Conditional Introduction",   "->I",  "( P |- Q ) |- P -> Q"),

    ("Biconditional Elimination",  "<->E", "P <-> Q |- P -> Q, Q -> P"),
    ("Biconditional Introduction", "<->I", "P -> Q, Q -> P |- P <-> Q, Q <-> P"),

    ("DeMorgan's Rule",            "DM",   "|- -(P ^ Q) <-> (-P v -Q)"),
];

pub fn gentzen_with(config: &EngineConfig) -> Result<Logic> {
    let roles = CalculusRoles::new("Given");
    Logic::from_table(gentzen_language()?, GENTZEN_RULES, roles, config)
}

pub fn gensler_with(config: &EngineConfig) -> Result<Logic> {
    let roles = CalculusRoles::new("Assumption")
        .with_intro_names("Thm", "Ax")
        .with_subproof_premise("Assumption");
    Logic::from_table(gensler_language()?, GENSLER_RULES, roles, config)
}

pub fn fitch_with(config: &EngineConfig) -> Result<Logic> {
    let roles = CalculusRoles::new("A")
        .with_intro_names("TI", "AxI")
        .with_subproof_premise("H");
    Logic::from_table(fitch_language()?, FITCH_RULES, roles, config)
}

pub fn gentzen() -> Result<Logic> {
    gentzen_with(&EngineConfig::default())
}

pub fn gensler() -> Result<Logic> {
    gensler_with(&EngineConfig::default())
}

pub fn fitch() -> Result<Logic> {
    fitch_with(&EngineConfig::default())
}
