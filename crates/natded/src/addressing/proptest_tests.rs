//! Property-based tests for rendering using proptest.

use super::{formula_text, render_formula};
use crate::config::RenderStyle;
use crate::formula::Formula;
use crate::language::{Language, Lexeme, SyntaxCategory};
use crate::logics;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum FormulaDesc {
    Atom(u8),
    Prefix(u8, Box<FormulaDesc>),
    Postfix(Box<FormulaDesc>),
    Infix(u8, Box<FormulaDesc>, Box<FormulaDesc>),
}

fn arb_desc(max_depth: u32) -> BoxedStrategy<FormulaDesc> {
    if max_depth == 0 {
        (0..4u8).prop_map(FormulaDesc::Atom).boxed()
    } else {
        prop_oneof![
            2 => (0..4u8).prop_map(FormulaDesc::Atom),
            1 => (0..3u8, arb_desc(max_depth - 1))
                .prop_map(|(op, d)| FormulaDesc::Prefix(op, Box::new(d))),
            1 => arb_desc(max_depth - 1).prop_map(|d| FormulaDesc::Postfix(Box::new(d))),
            2 => (0..4u8, arb_desc(max_depth - 1), arb_desc(max_depth - 1))
                .prop_map(|(op, l, r)| FormulaDesc::Infix(op, Box::new(l), Box::new(r))),
        ]
        .boxed()
    }
}

const PREFIX: [&str; 3] = ["~", "N:", "P:"];
const INFIX: [&str; 4] = ["&", "v", ">", "<->"];

/// The horseshoe lexicon plus a postfix `!`
fn postfix_language() -> Language {
    let mut lexicon = logics::gentzen_language().unwrap().lexemes().to_vec();
    lexicon.push(Lexeme::new("Bang", &["!"], SyntaxCategory::Postfix, &[]));
    Language::new(lexicon, &["<->"]).unwrap()
}

fn build(lang: &Language, desc: &FormulaDesc) -> Formula {
    match desc {
        FormulaDesc::Atom(i) => Formula::proposition(["A", "B", "C", "D"][*i as usize]),
        FormulaDesc::Prefix(op, d) => {
            let op = lang.operator(PREFIX[*op as usize]).unwrap();
            Formula::unary(op, build(lang, d))
        }
        FormulaDesc::Postfix(d) => Formula::unary(lang.operator("!").unwrap(), build(lang, d)),
        FormulaDesc::Infix(op, l, r) => {
            let op = lang.operator(INFIX[*op as usize]).unwrap();
            Formula::binary(op, build(lang, l), build(lang, r))
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Parsing the rendered text gives back the same formula in both styles
    #[test]
    fn prop_render_parses_back(desc in arb_desc(4), unicode in any::<bool>()) {
        let lang = postfix_language();
        let formula = build(&lang, &desc);
        let style = if unicode { RenderStyle::Unicode } else { RenderStyle::Ascii };
        let text = formula_text(&lang, &formula, style).unwrap();
        prop_assert_eq!(lang.parse_formula(&text).unwrap(), formula);
    }

    /// Exactly the atom names and operator spellings resolve to a
    /// sub-formula; every character has an enclosing one
    #[test]
    fn prop_only_dominant_offsets_addressed(desc in arb_desc(4)) {
        let lang = postfix_language();
        let formula = build(&lang, &desc);
        let rendered = render_formula(&lang, &formula, RenderStyle::Ascii).unwrap();
        for (offset, c) in rendered.as_str().chars().enumerate() {
            let path = rendered.client_data_at(offset);
            let separator = c == ' ' || c == '(' || c == ')';
            prop_assert_eq!(path.is_none(), separator, "offset {}", offset);
            if let Some(path) = path {
                prop_assert!(formula.subformula_at(path).is_some());
                let region = rendered.region_at(offset).unwrap();
                prop_assert!(region.dominant.is_some_and(|span| span.contains(offset)));
            }
            let enclosing = rendered.enclosing_client_data_at(offset);
            prop_assert!(enclosing.and_then(|p| formula.subformula_at(p)).is_some());
        }
    }
}
