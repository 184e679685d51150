//! Grammar notation: operators, brackets, multiplicities, captures, units.

use rstest::rstest;
use value_grammar::compiler::ErrorCode;
use value_grammar::{ElementId, GrammarElement, GroupType, Multiplicity};

use crate::helpers::fixtures::{compile, compile_ok};

#[rstest]
#[case("a b c", GroupType::Sequence)]
#[case("red | green | blue", GroupType::Set)]
#[case("a && b", GroupType::All)]
#[case("a || b || c", GroupType::Collection)]
fn test_operator_selects_group_type(#[case] text: &str, #[case] expected: GroupType) {
    let root = compile_ok(text);
    assert_eq!(root.group_type(), expected);
    assert!(root.children().iter().all(|c| c.as_literal().is_some()));
}

#[test]
fn test_set_of_three_literals() {
    let root = compile_ok("red | green | blue");
    let words: Vec<_> = root
        .children()
        .iter()
        .filter_map(GrammarElement::as_literal)
        .map(|l| l.text().to_string())
        .collect();
    assert_eq!(words, vec!["red", "green", "blue"]);
    assert_eq!(root.id(), ElementId::new(0));
    assert!(root.children().iter().all(|c| c.parent() == Some(root.id())));
}

#[test]
fn test_bracketed_group_with_suffix() {
    let root = compile_ok("[ a b ]+");
    assert_eq!(root.len(), 1);
    let inner = root.child(0).and_then(GrammarElement::as_group).unwrap();
    assert_eq!(inner.group_type(), GroupType::Sequence);
    assert_eq!(inner.len(), 2);
    assert_eq!(root.child(0).unwrap().multiplicity(), Multiplicity::ONE_OR_MORE);
}

#[rstest]
#[case("x?", Multiplicity::OPTIONAL)]
#[case("x*", Multiplicity::ZERO_OR_MORE)]
#[case("x+", Multiplicity::ONE_OR_MORE)]
#[case("x{3}", Multiplicity::exactly(3))]
#[case("x{2,4}", Multiplicity { min: 2, max: Some(4) })]
#[case("x{ 1 , }", Multiplicity { min: 1, max: None })]
#[case("x", Multiplicity::ONE)]
fn test_multiplicity_suffix(#[case] text: &str, #[case] expected: Multiplicity) {
    let root = compile_ok(text);
    assert_eq!(root.child(0).unwrap().multiplicity(), expected);
}

#[test]
fn test_multiplicity_binds_to_previous_element_only() {
    let root = compile_ok("a b? c");
    let suffixes: Vec<_> = root
        .children()
        .iter()
        .map(|c| c.multiplicity().is_optional())
        .collect();
    assert_eq!(suffixes, vec![false, true, false]);
}

#[test]
fn test_capture_names_previous_element() {
    let root = compile_ok("!length($width) [ a | b ]( $choice )");
    assert_eq!(root.child(0).unwrap().name(), Some("width"));
    assert_eq!(root.child(1).unwrap().name(), Some("choice"));
}

#[test]
fn test_units_resolve_to_acceptors() {
    let root = compile_ok("!length !percentage? !hash_color");
    let units: Vec<_> = root
        .children()
        .iter()
        .filter_map(GrammarElement::as_unit)
        .map(|u| u.unit().to_string())
        .collect();
    assert_eq!(units, vec!["length", "percentage", "hash_color"]);

    let length = root.child(0).and_then(GrammarElement::as_unit).unwrap();
    assert!(length.accepts("12px"));
    assert!(length.accepts("0"));
    assert!(!length.accepts("12"));
}

#[test]
fn test_quoted_literals_keep_operator_characters() {
    let root = compile_ok("'(' \"a b\" ')'");
    let texts: Vec<_> = root
        .children()
        .iter()
        .filter_map(GrammarElement::as_literal)
        .map(|l| l.text().to_string())
        .collect();
    assert_eq!(texts, vec!["(", "a b", ")"]);
}

#[rstest]
#[case("red | green | blue", "red | green | blue")]
#[case("a  b\tc", "a b c")]
#[case("[ a b ]+ c?", "[ a b ]+ c?")]
#[case("x{2,4} y{3} z{2,}", "x{2,4} y{3} z{2,}")]
#[case("z{1,} w{0,1}", "z+ w?")]
#[case("!length($w) '('", "!length($w) '('")]
#[case("[a||b]", "[ a || b ]")]
fn test_display_renders_notation(#[case] text: &str, #[case] expected: &str) {
    assert_eq!(compile_ok(text).to_string(), expected);
}

#[test]
fn test_display_round_trips_through_compiler() {
    let text = "[ !length | auto ]{1,4} && [ 'a' b ]?";
    let once = compile_ok(text).to_string();
    let twice = compile_ok(&once).to_string();
    assert_eq!(once, twice);
}

#[test]
fn test_empty_text_is_empty_sequence() {
    let root = compile_ok("   ");
    assert!(root.is_empty());
    assert_eq!(root.group_type(), GroupType::Sequence);
}

#[rstest]
#[case("[ a", ErrorCode::E0202, "[ a")]
#[case("a ] b", ErrorCode::E0203, "a ]")]
#[case("a{2,1}", ErrorCode::E0401, "a{2,1}")]
#[case("!nope", ErrorCode::E0302, "!nope")]
fn test_error_reports_position(
    #[case] text: &str,
    #[case] code: ErrorCode,
    #[case] consumed: &str,
) {
    let err = compile(text).unwrap_err();
    assert_eq!(err.code, code);
    assert_eq!(err.consumed, consumed);
    assert!(err.to_string().contains(code.as_str()));
}
