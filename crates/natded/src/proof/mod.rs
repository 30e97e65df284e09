//! Proof engine: steps, nesting scopes and citation visibility

pub mod env;
#[allow(clippy::module_inception)]
pub mod proof;
pub mod step;

pub use env::{Env, Scope};
pub use proof::{Proof, ProofEvent};
pub use step::{Citation, Step};

#[cfg(test)]
mod proptest_tests;
