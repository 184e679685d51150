//! End-to-end: compile a grammar, resolve real input against it, and check
//! the match tree the builder assembled from the resolver's events.

use rstest::rstest;
use value_grammar::matching::{ListenerChain, TracingListener};
use value_grammar::{Group, MatchNode, ParseTreeBuilder};

use crate::helpers::fixtures::{compile_ok, compiler};
use crate::helpers::resolver::Resolver;

fn resolve(grammar: &Group, input: &str) -> Option<MatchNode> {
    let mut builder = ParseTreeBuilder::new();
    let mut tracing = TracingListener::new();
    let matched = {
        let mut chain = ListenerChain::new().with(&mut tracing).with(&mut builder);
        Resolver::new(input).resolve(grammar, &mut chain)
    };
    assert_eq!(builder.depth(), 0, "unbalanced events for {input:?}");
    matched.then(|| builder.into_parse_tree().unwrap())
}

fn resolve_property(property: &str, input: &str) -> Option<MatchNode> {
    let grammar = compiler().compile_property(property).unwrap();
    resolve(&grammar, input)
}

#[test]
fn test_longer_alternative_wins_and_shorter_is_pruned() {
    let grammar = compile_ok("a | [ a b ]");
    let tree = resolve(&grammar, "a b").unwrap();

    assert_eq!(tree.children().len(), 1);
    let chosen = tree.children()[0].as_group().unwrap();
    assert_eq!(chosen.element, grammar.child(1).unwrap().id());
    assert_eq!(tree.to_string(), "a b");
}

#[rstest]
#[case("color", "green")]
#[case("border-width", "thick")]
#[case("border-width", "3px")]
#[case("border", "solid")]
#[case("border", "thin dashed blue")]
#[case("margin", "1px 2em auto 5%")]
#[case("font-weight", "700")]
#[case("font-weight", "inherit")]
#[case("box-shadow", "inset 1px 2px red")]
#[case("box-shadow", "1px 2px 3px")]
#[case("nested", "leaf ( leaf ) ( ( leaf ) )")]
fn test_input_matches_property(#[case] property: &str, #[case] input: &str) {
    let tree = resolve_property(property, input)
        .unwrap_or_else(|| panic!("{property} should match {input:?}"));
    assert_eq!(tree.to_string(), input);
}

#[rstest]
#[case("color", "purple")]
#[case("margin", "1px 2px 3px 4px 5px")]
#[case("border-width", "3")]
#[case("box-shadow", "red")]
#[case("nested", "( leaf")]
fn test_input_rejected_by_property(#[case] property: &str, #[case] input: &str) {
    assert!(resolve_property(property, input).is_none());
}

#[test]
fn test_token_ranges_follow_input_offsets() {
    let tree = resolve_property("margin", "1px  auto").unwrap();
    let starts: Vec<u32> = tree.tokens().iter().map(|t| t.range.start().into()).collect();
    assert_eq!(starts, vec![0, 5]);
    assert_eq!(u32::from(tree.tokens()[1].range.len()), 4);
}

#[test]
fn test_each_repetition_keeps_its_own_chosen_branch() {
    let tree = resolve_property("margin", "auto 10%").unwrap();
    let repetitions: Vec<_> = tree.children().iter().filter_map(MatchNode::as_group).collect();
    assert_eq!(repetitions.len(), 2);
    for repetition in &repetitions {
        assert_eq!(repetition.children.len(), 1);
    }
    let values: Vec<_> = repetitions
        .iter()
        .map(|r| r.children[0].as_token().unwrap().value.to_string())
        .collect();
    assert_eq!(values, vec!["auto", "!percentage"]);
}

#[test]
fn test_references_appear_as_labelled_groups() {
    let tree = resolve_property("border", "medium red").unwrap();
    let labels: Vec<_> = tree
        .children()
        .iter()
        .filter_map(MatchNode::as_group)
        .filter_map(|g| g.label.as_deref())
        .collect();
    assert_eq!(labels, vec!["border-width", "color"]);
    assert!(tree.dump().starts_with("collection $border #0\n"));
}

#[test]
fn test_recursive_reference_builds_nested_tree() {
    let tree = resolve_property("nested", "( ( leaf ) )").unwrap();
    let dump = tree.dump();
    assert_eq!(dump.matches("$nested-item").count(), 3);
    assert_eq!(tree.tokens().len(), 5);
}

#[test]
fn test_reference_captures_label_their_groups() {
    let grammar = compile_ok("<color>($fg) <color>($bg)");
    let tree = resolve(&grammar, "red blue").unwrap();
    let labels: Vec<_> = tree
        .children()
        .iter()
        .filter_map(|c| c.as_group()?.label.as_deref())
        .collect();
    assert_eq!(labels, vec!["fg", "bg"]);
    assert!(tree.dump().contains("set $fg"));
    assert!(!tree.dump().contains("$color"));
}
