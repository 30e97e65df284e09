//! Formula rendering with sub-formula addressing
//!
//! Each sub-formula gets one region whose client data is its path from the
//! root. Operator spellings and atom names are dominant spans, so only they
//! resolve to a sub-formula by offset. Grouping parentheses are emitted inside
//! the child's region and resolve to the grouped sub-formula through
//! `StructuredString::enclosing_region_at`.

use super::structured_string::{StructuredString, StructuredStringBuilder};
use crate::config::RenderStyle;
use crate::error::AddressingError;
use crate::formula::{Fixity, Formula, FormulaPath};
use crate::language::Language;

fn is_infix(formula: &Formula) -> bool {
    matches!(formula.operator(), Some(op) if op.fixity == Fixity::Infix)
}

fn write_node(
    lang: &Language,
    formula: &Formula,
    path: &mut FormulaPath,
    grouped: bool,
    style: RenderStyle,
    out: &mut StructuredStringBuilder<FormulaPath>,
) -> Result<(), AddressingError> {
    out.begin_region(path.clone());
    if grouped {
        out.append("(");
    }

    match formula {
        Formula::Atomic(sym) => out.append_dominant(&sym.name)?,
        Formula::Structured(op, args) => {
            let spelling = lang.spelling(op, style);
            match op.fixity {
                Fixity::Prefix => {
                    out.append_dominant(spelling)?;
                    write_child(lang, args, 0, path, is_infix, style, out)?;
                }
                Fixity::Postfix => {
                    // a prefix operand would capture the postfix operator
                    write_child(lang, args, 0, path, |f| !f.is_atomic(), style, out)?;
                    out.append_dominant(spelling)?;
                }
                Fixity::Infix => {
                    write_child(lang, args, 0, path, is_infix, style, out)?;
                    out.append(" ");
                    out.append_dominant(spelling)?;
                    out.append(" ");
                    write_child(lang, args, 1, path, is_infix, style, out)?;
                }
            }
        }
    }

    if grouped {
        out.append(")");
    }
    out.end_region()
}

fn write_child(
    lang: &Language,
    args: &[Formula],
    idx: usize,
    path: &mut FormulaPath,
    needs_group: fn(&Formula) -> bool,
    style: RenderStyle,
    out: &mut StructuredStringBuilder<FormulaPath>,
) -> Result<(), AddressingError> {
    let Some(child) = args.get(idx) else {
        return Ok(());
    };
    path.push(idx);
    let result = write_node(lang, child, path, needs_group(child), style, out);
    path.pop();
    result
}

/// Render `formula` in `lang`'s concrete syntax, addressing every character
/// to the path of the sub-formula that renders it.
pub fn render_formula(
    lang: &Language,
    formula: &Formula,
    style: RenderStyle,
) -> Result<StructuredString<FormulaPath>, AddressingError> {
    let mut out = StructuredStringBuilder::new();
    write_node(lang, formula, &mut Vec::new(), false, style, &mut out)?;
    out.build()
}

/// Render `formula` to plain text
pub fn formula_text(
    lang: &Language,
    formula: &Formula,
    style: RenderStyle,
) -> Result<String, AddressingError> {
    render_formula(lang, formula, style).map(|s| s.as_str().to_string())
}
