//! natded: a natural-deduction proof engine
//!
//! Logics are defined by a lexicon table and a list of inference rules
//! written as sequent templates. The engine parses formulas in that
//! language, matches rule templates against cited premises, and builds
//! Fitch-style proofs with nested sub-proofs.

pub mod addressing;
pub mod calculus;
pub mod config;
pub mod error;
pub mod formula;
pub mod language;
pub mod logics;
pub mod proof;
pub mod session;
pub mod unification;

pub use config::{EngineConfig, RenderStyle};
pub use error::{Error, Result, SyntaxError};

pub use formula::{Fixity, Form, FormSet, Formula, FormulaPath, Operator, Sequent};
pub use language::{Language, ParseMode, Parser};

pub use calculus::{Calculus, CalculusRoles, EquivalenceApplication, InferenceRule, RuleApplication};
pub use unification::{match_forms, unify, BindingMap};

pub use proof::{Citation, Proof, Step};
pub use session::{FirstChoice, ProofSession, Resolver};

pub use addressing::{render_formula, StructuredString};
pub use logics::Logic;
