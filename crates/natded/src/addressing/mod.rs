//! Character-level addressing of rendered formulas

pub mod render;
pub mod structured_string;

pub use render::{formula_text, render_formula};
pub use structured_string::{Region, Span, StructuredString, StructuredStringBuilder};

#[cfg(test)]
mod proptest_tests;
