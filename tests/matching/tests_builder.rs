//! Feeding hand-written event sequences to the builder over compiled
//! property grammars.

use text_size::TextSize;
use value_grammar::matching::{ListenerChain, TracingListener};
use value_grammar::{BuildError, GrammarElement, Group, MatchNode, ParseTreeBuilder, ResolverListener, Token};

use crate::helpers::fixtures::{compile_ok, compiler};

fn accept(listener: &mut dyn ResolverListener, value: &GrammarElement, text: &str, offset: u32) {
    listener.entering_value(value);
    listener.accepted_value(value, Token::at(text, TextSize::new(offset)));
}

fn reject(listener: &mut dyn ResolverListener, value: &GrammarElement) {
    listener.entering_value(value);
    listener.rejected_value(value);
}

fn child(group: &Group, index: usize) -> &GrammarElement {
    group.child(index).unwrap()
}

#[test]
fn test_rejected_sibling_leaves_single_child() {
    let grammar = compile_ok("solid thin");
    let mut builder = ParseTreeBuilder::new();

    builder.starting();
    builder.entering_group(&grammar);
    accept(&mut builder, child(&grammar, 0), "solid", 0);
    reject(&mut builder, child(&grammar, 1));
    builder.accepted_group(&grammar);
    builder.finished();

    let tree = builder.parse_tree().unwrap();
    assert_eq!(tree.element(), grammar.id());
    assert_eq!(tree.children().len(), 1);
    assert_eq!(tree.to_string(), "solid");
}

#[test]
fn test_border_width_choice_keeps_unit_branch() {
    let grammar = compiler().compile_property("border-width").unwrap();
    let length = child(&grammar, 3);
    let mut builder = ParseTreeBuilder::new();

    builder.starting();
    builder.entering_group(&grammar);
    for keyword in &grammar.children()[..3] {
        reject(&mut builder, keyword);
    }
    accept(&mut builder, length, "2px", 0);
    builder.rule_chosen(&grammar, length);
    builder.accepted_group(&grammar);
    builder.finished();

    let tree = builder.into_parse_tree().unwrap();
    let group = tree.as_group().unwrap();
    assert_eq!(group.label.as_deref(), Some("border-width"));
    let token = tree.children()[0].as_token().unwrap();
    assert_eq!(token.value.to_string(), "!length");
    assert_eq!(token.token.text(), "2px");
}

#[test]
fn test_speculative_branches_pruned_inside_reference() {
    let grammar = compile_ok("<color> !length");
    let color = child(&grammar, 0).as_reference().and_then(|r| r.group()).unwrap();
    let mut builder = ParseTreeBuilder::new();

    builder.starting();
    builder.entering_group(&grammar);
    builder.entering_group(&color);
    reject(&mut builder, child(&color, 0));
    accept(&mut builder, child(&color, 1), "green", 0);
    accept(&mut builder, child(&color, 2), "green", 0);
    builder.rule_chosen(&color, child(&color, 1));
    builder.accepted_group(&color);
    accept(&mut builder, child(&grammar, 1), "1em", 6);
    builder.accepted_group(&grammar);
    builder.finished();

    let tree = builder.parse_tree().unwrap();
    assert_eq!(
        tree.dump(),
        format!(
            "sequence #0\n  set $color {}\n    \"green\" <- green {}\n  \"1em\" <- !length {}\n",
            color.id(),
            child(&color, 1).id(),
            child(&grammar, 1).id(),
        )
    );
}

#[test]
fn test_builder_reused_across_passes() {
    let grammar = compile_ok("a | b");
    let mut builder = ParseTreeBuilder::new();

    for (index, text) in ["a", "b"].into_iter().enumerate() {
        let value = child(&grammar, index);
        builder.starting();
        assert_eq!(builder.parse_tree(), Err(BuildError::NotFinished));
        builder.entering_group(&grammar);
        accept(&mut builder, value, text, 0);
        builder.rule_chosen(&grammar, value);
        builder.accepted_group(&grammar);
        builder.finished();

        let tokens: Vec<_> = builder
            .parse_tree()
            .unwrap()
            .tokens()
            .iter()
            .map(|t| t.text().to_string())
            .collect();
        assert_eq!(tokens, vec![text]);
    }
}

#[derive(Default)]
struct Counter {
    entered: usize,
    closed: usize,
    choices: usize,
}

impl ResolverListener for Counter {
    fn entering_group(&mut self, _group: &Group) {
        self.entered += 1;
    }

    fn entering_value(&mut self, _value: &GrammarElement) {
        self.entered += 1;
    }

    fn accepted_group(&mut self, _group: &Group) {
        self.closed += 1;
    }

    fn rejected_group(&mut self, _group: &Group) {
        self.closed += 1;
    }

    fn accepted_value(&mut self, _value: &GrammarElement, _token: Token) {
        self.closed += 1;
    }

    fn rejected_value(&mut self, _value: &GrammarElement) {
        self.closed += 1;
    }

    fn rule_chosen(&mut self, _group: &Group, _chosen: &GrammarElement) {
        self.choices += 1;
    }
}

#[test]
fn test_chain_delivers_every_event_to_each_listener() {
    let grammar = compile_ok("x | y");
    let mut counter = Counter::default();
    let mut tracing = TracingListener::new();
    let mut builder = ParseTreeBuilder::new();
    {
        let mut chain = ListenerChain::new()
            .with(&mut counter)
            .with(&mut tracing)
            .with(&mut builder);
        chain.starting();
        chain.entering_group(&grammar);
        reject(&mut chain, child(&grammar, 0));
        accept(&mut chain, child(&grammar, 1), "y", 0);
        chain.rule_chosen(&grammar, child(&grammar, 1));
        chain.accepted_group(&grammar);
        chain.finished();
    }

    assert_eq!((counter.entered, counter.closed, counter.choices), (3, 3, 1));
    let tree = builder.parse_tree().unwrap();
    assert!(matches!(tree.children()[0], MatchNode::Token(_)));
}
