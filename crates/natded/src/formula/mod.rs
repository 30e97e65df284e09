//! Formula model
//!
//! Immutable formula trees (atoms and operator applications), ordered formula
//! sets, and sequents. Rule templates and proof steps share these types; a
//! template may contain schema variables, a proof step may not.

pub mod sequent;
pub mod wff;

pub use sequent::{Form, FormSet, Sequent};
pub use wff::{Fixity, Formula, FormulaPath, Operator, Symbol, SymbolKind};
