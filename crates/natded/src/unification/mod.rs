//! Schema matching of rule templates against concrete formulas

mod bindings;
mod r#match;

pub use bindings::BindingMap;
pub use r#match::{instantiate, match_forms, unify};
