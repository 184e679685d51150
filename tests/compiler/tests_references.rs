//! `<name>` references: embedding, sharing, recursion, `inherit` handling.

use std::sync::Arc;

use value_grammar::compiler::ErrorCode;
use value_grammar::{
    GrammarCompiler, GrammarElement, Group, GroupType, PropertyRegistry, Reference, UnitRegistry,
};

use crate::helpers::fixtures::{compile, compile_ok, compiler};

fn reference(element: &GrammarElement) -> &Reference {
    element.as_reference().expect("expected a reference")
}

fn target(group: &Group, index: usize) -> Arc<Group> {
    reference(group.child(index).unwrap()).group().unwrap()
}

#[test]
fn test_reference_embeds_referenced_grammar() {
    let root = compile_ok("<length>");
    assert_eq!(root.len(), 1);

    let element = root.child(0).unwrap();
    let length = target(&root, 0);
    assert_eq!(reference(element).property(), "length");
    assert_eq!(element.id(), length.id());
    assert_eq!(length.group_type(), GroupType::Set);
    assert_eq!(length.property(), Some("length"));
    assert_eq!(length.to_string(), "px | em");
}

#[test]
fn test_referenced_elements_get_ids_from_same_compilation() {
    let root = compile_ok("a <length> b");
    let length = target(&root, 1);
    let mut ids: Vec<_> = root.children().iter().map(GrammarElement::id).collect();
    ids.extend(length.children().iter().map(GrammarElement::id));
    let mut unique = ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), ids.len());
    assert!(root.find(length.child(0).unwrap().id()).is_some());
}

#[test]
fn test_nested_references_share_instance_at_same_position() {
    let root = compile_ok("<border> <border>");
    let first = target(&root, 0);
    let second = target(&root, 1);
    assert_eq!(first.group_type(), GroupType::Collection);

    for index in 0..3 {
        assert!(Arc::ptr_eq(&target(&first, index), &target(&second, index)));
    }
}

#[test]
fn test_distinct_positions_compile_separately() {
    let root = compile_ok("<color> | [ <color> ]");
    let direct = target(&root, 0);
    let inner = root.child(1).and_then(GrammarElement::as_group).unwrap();
    let nested = target(inner, 0);
    assert!(!Arc::ptr_eq(&direct, &nested));
    assert_ne!(direct.id(), nested.id());
    assert_eq!(direct.to_string(), nested.to_string());
}

#[test]
fn test_recursive_grammar_terminates() {
    let root = compiler().compile_property("nested").unwrap();
    let item = target(&root, 0);
    assert_eq!(root.child(0).unwrap().multiplicity().min, 1);
    assert!(root.child(0).unwrap().multiplicity().is_unbounded());

    let parens = item.child(1).and_then(GrammarElement::as_group).unwrap();
    let embedded = reference(parens.child(1).unwrap());
    assert!(!embedded.is_recursive());

    let inner = embedded.group().unwrap();
    let inner_parens = inner.child(1).and_then(GrammarElement::as_group).unwrap();
    let back_edge = reference(inner_parens.child(1).unwrap());
    assert!(back_edge.is_recursive());
    assert!(Arc::ptr_eq(&back_edge.group().unwrap(), &inner));
    assert!(root.element_count() < 32);
}

#[test]
fn test_inherit_stripped_from_referenced_grammar() {
    let root = compile_ok("<font-weight>");
    let weight = target(&root, 0);
    assert_eq!(weight.to_string(), "normal | bold | !integer");

    let direct = compiler().compile_property("font-weight").unwrap();
    assert_eq!(direct.len(), 4);
    assert_eq!(direct.child(0).and_then(GrammarElement::as_literal).map(|l| l.text()), Some("inherit"));
}

#[test]
fn test_unknown_reference_fails_whole_compilation() {
    let err = compile("<color> <no-such-property>").unwrap_err();
    assert_eq!(err.code, ErrorCode::E0301);
    assert_eq!(err.token, "<no-such-property>");
    assert!(err.code.is_resolution());
}

#[test]
fn test_reference_name_is_trimmed() {
    let root = compile_ok("< color >");
    assert_eq!(reference(root.child(0).unwrap()).property(), "color");
}

#[test]
fn test_suffix_after_stripped_inherit_is_dropped() {
    let root = compile_ok("<font-weight> | inherit?");
    assert_eq!(root.child(1).unwrap().to_string(), "inherit?");

    let properties = PropertyRegistry::new()
        .with("w", "inherit? | thin")
        .with("v", "a inherit?");
    let units = UnitRegistry::new();
    let compiler = GrammarCompiler::new(&properties, &units);

    let w = compiler.compile("<w>", None).unwrap();
    assert_eq!(target(&w, 0).to_string(), "thin");
    let v = compiler.compile("<v>", None).unwrap();
    assert_eq!(target(&v, 0).to_string(), "a");
}
