//! Builds the match tree from resolver events.

use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::{trace, warn};

use crate::base::{ElementId, Name};
use crate::grammar::{GrammarElement, Group, Reference, ValueKind};

use super::listener::ResolverListener;
use super::node::{GroupNode, MatchNode, TokenNode};
use super::token::Token;

/// Misuse of a [`ParseTreeBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The tree was requested before `finished()`.
    #[error("parse not finished")]
    NotFinished,
    /// `finished()` arrived without any element having been entered.
    #[error("parse finished without a root element")]
    Empty,
}

enum FrameNode {
    Group(GroupNode),
    /// A value waiting for its token.
    Value(ValueKind),
}

/// One entered, still-open grammar element.
struct Frame {
    element: ElementId,
    node: FrameNode,
    /// Children at or past this index were attached since the last
    /// `rule_chosen`, and are the ones a new choice may prune.
    recorded_from: usize,
    chosen: FxHashSet<ElementId>,
}

impl Frame {
    fn new(element: ElementId, node: FrameNode) -> Self {
        Self {
            element,
            node,
            recorded_from: 0,
            chosen: FxHashSet::default(),
        }
    }

    fn attach(&mut self, child: MatchNode) {
        match &mut self.node {
            FrameNode::Group(group) => group.children.push(child),
            FrameNode::Value(_) => {
                warn!(parent = %self.element, child = %child.element(), "value element cannot own children, dropping child");
            }
        }
    }

    /// Drop recorded children whose element is not among the chosen ones.
    fn prune(&mut self) {
        let Frame {
            node,
            recorded_from,
            chosen,
            ..
        } = self;
        if let FrameNode::Group(group) = node {
            let start = (*recorded_from).min(group.children.len());
            let kept: Vec<MatchNode> = group
                .children
                .drain(start..)
                .filter(|child| chosen.contains(&child.element()))
                .collect();
            group.children.extend(kept);
            *recorded_from = group.children.len();
        }
    }
}

/// Assembles the match tree for one resolver pass.
///
/// Keeps an explicit stack of open frames instead of recursing, since the
/// events arrive one at a time from the resolver.
#[derive(Default)]
pub struct ParseTreeBuilder {
    stack: Vec<Frame>,
    root: Option<MatchNode>,
    finished: bool,
    /// Capture of the reference whose target group is entered next.
    pending_capture: Option<(ElementId, Name)>,
}

impl ParseTreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The finished tree.
    pub fn parse_tree(&self) -> Result<&MatchNode, BuildError> {
        if !self.finished {
            return Err(BuildError::NotFinished);
        }
        self.root.as_ref().ok_or(BuildError::Empty)
    }

    pub fn into_parse_tree(self) -> Result<MatchNode, BuildError> {
        if !self.finished {
            return Err(BuildError::NotFinished);
        }
        self.root.ok_or(BuildError::Empty)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Number of entered elements not yet accepted or rejected.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn push(&mut self, element: ElementId, node: FrameNode) {
        trace!(%element, depth = self.stack.len(), "[TREE] push");
        self.stack.push(Frame::new(element, node));
    }

    fn pop(&mut self, element: ElementId, event: &'static str) -> Option<Frame> {
        let frame = self.stack.pop();
        match &frame {
            None => warn!(%element, event, "[TREE] no open element"),
            Some(frame) if frame.element != element => {
                trace!(expected = %frame.element, got = %element, event, "[TREE] out of order");
            }
            Some(_) => {}
        }
        frame
    }

    /// Hand a finished node to its parent frame, or keep it as the root.
    fn attach(&mut self, node: MatchNode) {
        match self.stack.last_mut() {
            Some(parent) => parent.attach(node),
            None => {
                trace!(element = %node.element(), "[TREE] root closed");
                self.root = Some(node);
            }
        }
    }

    fn reject(&mut self, element: ElementId, event: &'static str) {
        let Some(frame) = self.pop(element, event) else {
            return;
        };
        // The first entered element is the root whatever happens to it.
        if self.stack.is_empty() {
            if let FrameNode::Group(group) = frame.node {
                self.root = Some(MatchNode::Group(group));
            }
        }
    }
}

fn value_kind(value: &GrammarElement) -> ValueKind {
    value.value_kind().unwrap_or_else(|| {
        warn!(id = %value.id(), kind = value.kind_name(), "[TREE] value event for a non-value element");
        ValueKind::Literal(Name::new(value.to_string()))
    })
}

impl ResolverListener for ParseTreeBuilder {
    fn starting(&mut self) {
        self.stack.clear();
        self.root = None;
        self.finished = false;
        self.pending_capture = None;
    }

    fn entering_group(&mut self, group: &Group) {
        let capture = self
            .pending_capture
            .take()
            .filter(|(id, _)| *id == group.id())
            .map(|(_, name)| name);
        let label = capture
            .or_else(|| group.meta.name.clone())
            .or_else(|| group.property.clone());
        let node = GroupNode {
            element: group.id(),
            group_type: group.group_type(),
            label,
            children: Vec::new(),
        };
        self.push(group.id(), FrameNode::Group(node));
    }

    fn entering_reference(&mut self, reference: &Reference) {
        self.pending_capture = reference
            .meta
            .name
            .clone()
            .map(|name| (reference.meta.id, name));
    }

    fn accepted_group(&mut self, group: &Group) {
        let Some(frame) = self.pop(group.id(), "accepted_group") else {
            return;
        };
        match frame.node {
            FrameNode::Group(node) => self.attach(MatchNode::Group(node)),
            FrameNode::Value(_) => {
                warn!(id = %frame.element, "[TREE] group accepted while a value was open, dropping it");
            }
        }
    }

    fn rejected_group(&mut self, group: &Group) {
        self.reject(group.id(), "rejected_group");
    }

    fn entering_value(&mut self, value: &GrammarElement) {
        self.pending_capture = None;
        self.push(value.id(), FrameNode::Value(value_kind(value)));
    }

    fn accepted_value(&mut self, value: &GrammarElement, token: Token) {
        let Some(frame) = self.pop(value.id(), "accepted_value") else {
            return;
        };
        let kind = match frame.node {
            FrameNode::Value(kind) => kind,
            FrameNode::Group(_) => value_kind(value),
        };
        self.attach(MatchNode::Token(TokenNode {
            element: frame.element,
            value: kind,
            token,
        }));
    }

    fn rejected_value(&mut self, value: &GrammarElement) {
        self.reject(value.id(), "rejected_value");
    }

    fn rule_chosen(&mut self, group: &Group, chosen: &GrammarElement) {
        let Some(frame) = self.stack.last_mut() else {
            warn!(group = %group.id(), "[TREE] rule chosen with no open element");
            return;
        };
        if frame.element != group.id() {
            warn!(expected = %frame.element, got = %group.id(), "[TREE] rule chosen for a group that is not open, ignoring");
            return;
        }
        trace!(group = %group.id(), chosen = %chosen.id(), "[TREE] rule chosen");
        frame.chosen.insert(chosen.id());
        frame.prune();
    }

    fn finished(&mut self) {
        if !self.stack.is_empty() {
            warn!(open = self.stack.len(), "[TREE] finished with open elements");
        }
        self.finished = true;
    }
}
