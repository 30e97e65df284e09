//! Inference rules, the rule registry and rule application

pub mod inference;
pub mod registry;
pub mod rule;

pub use inference::{EquivalenceApplication, RewriteDirection, RuleApplication};
pub use registry::Calculus;
pub use rule::{CalculusRoles, InferenceRule};
