//! The event protocol between a resolver and its listeners.

use tracing::trace;

use crate::grammar::{GrammarElement, Group, Reference};

use super::token::Token;

/// Receives structural events while a resolver matches input against a
/// compiled grammar.
///
/// Events nest strictly: every `accepted_*` or `rejected_*` closes the most
/// recent `entering_*` still open. All methods default to doing nothing.
pub trait ResolverListener {
    fn starting(&mut self) {}

    fn entering_group(&mut self, _group: &Group) {}

    /// Announces that the next `entering_group` is the target of `reference`.
    fn entering_reference(&mut self, _reference: &Reference) {}

    fn accepted_group(&mut self, _group: &Group) {}

    fn rejected_group(&mut self, _group: &Group) {}

    fn entering_value(&mut self, _value: &GrammarElement) {}

    fn accepted_value(&mut self, _value: &GrammarElement, _token: Token) {}

    fn rejected_value(&mut self, _value: &GrammarElement) {}

    /// The resolver committed to `chosen` among the children of `group`.
    fn rule_chosen(&mut self, _group: &Group, _chosen: &GrammarElement) {}

    fn finished(&mut self) {}
}

/// Logs every event at trace level.
#[derive(Debug, Default)]
pub struct TracingListener {
    depth: usize,
}

impl TracingListener {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResolverListener for TracingListener {
    fn starting(&mut self) {
        self.depth = 0;
        trace!("[RESOLVE] starting");
    }

    fn entering_group(&mut self, group: &Group) {
        trace!(depth = self.depth, id = %group.id(), kind = group.group_type().as_str(), "[RESOLVE] entering group");
        self.depth += 1;
    }

    fn entering_reference(&mut self, reference: &Reference) {
        trace!(depth = self.depth, id = %reference.meta.id, property = reference.property(), capture = ?reference.meta.name, "[RESOLVE] entering reference");
    }

    fn accepted_group(&mut self, group: &Group) {
        self.depth = self.depth.saturating_sub(1);
        trace!(depth = self.depth, id = %group.id(), "[RESOLVE] accepted group");
    }

    fn rejected_group(&mut self, group: &Group) {
        self.depth = self.depth.saturating_sub(1);
        trace!(depth = self.depth, id = %group.id(), "[RESOLVE] rejected group");
    }

    fn entering_value(&mut self, value: &GrammarElement) {
        trace!(depth = self.depth, id = %value.id(), value = %value, "[RESOLVE] entering value");
        self.depth += 1;
    }

    fn accepted_value(&mut self, value: &GrammarElement, token: Token) {
        self.depth = self.depth.saturating_sub(1);
        trace!(depth = self.depth, id = %value.id(), token = %token, "[RESOLVE] accepted value");
    }

    fn rejected_value(&mut self, value: &GrammarElement) {
        self.depth = self.depth.saturating_sub(1);
        trace!(depth = self.depth, id = %value.id(), "[RESOLVE] rejected value");
    }

    fn rule_chosen(&mut self, group: &Group, chosen: &GrammarElement) {
        trace!(group = %group.id(), chosen = %chosen.id(), "[RESOLVE] rule chosen");
    }

    fn finished(&mut self) {
        trace!("[RESOLVE] finished");
    }
}

/// Forwards every event to each listener in turn.
#[derive(Default)]
pub struct ListenerChain<'a> {
    listeners: Vec<&'a mut dyn ResolverListener>,
}

impl<'a> ListenerChain<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, listener: &'a mut dyn ResolverListener) -> Self {
        self.listeners.push(listener);
        self
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl ResolverListener for ListenerChain<'_> {
    fn starting(&mut self) {
        self.listeners.iter_mut().for_each(|l| l.starting());
    }

    fn entering_group(&mut self, group: &Group) {
        self.listeners.iter_mut().for_each(|l| l.entering_group(group));
    }

    fn entering_reference(&mut self, reference: &Reference) {
        self.listeners
            .iter_mut()
            .for_each(|l| l.entering_reference(reference));
    }

    fn accepted_group(&mut self, group: &Group) {
        self.listeners.iter_mut().for_each(|l| l.accepted_group(group));
    }

    fn rejected_group(&mut self, group: &Group) {
        self.listeners.iter_mut().for_each(|l| l.rejected_group(group));
    }

    fn entering_value(&mut self, value: &GrammarElement) {
        self.listeners.iter_mut().for_each(|l| l.entering_value(value));
    }

    fn accepted_value(&mut self, value: &GrammarElement, token: Token) {
        self.listeners
            .iter_mut()
            .for_each(|l| l.accepted_value(value, token.clone()));
    }

    fn rejected_value(&mut self, value: &GrammarElement) {
        self.listeners.iter_mut().for_each(|l| l.rejected_value(value));
    }

    fn rule_chosen(&mut self, group: &Group, chosen: &GrammarElement) {
        self.listeners
            .iter_mut()
            .for_each(|l| l.rule_chosen(group, chosen));
    }

    fn finished(&mut self) {
        self.listeners.iter_mut().for_each(|l| l.finished());
    }
}
