//! Open containers under construction.
//!
//! Grammar rules collect children into a [`NodeBuilder`] and seal it into an
//! immutable [`Node`] when they return. Sealed nodes expose no mutators.

use rowan::{TextRange, TextSize};

use super::node::{Node, NodeKind};

#[derive(Debug)]
pub(crate) struct NodeBuilder {
    kind: NodeKind,
    start: TextSize,
    children: Vec<Node>,
}

impl NodeBuilder {
    pub(crate) fn new(kind: NodeKind, start: TextSize) -> Self {
        Self {
            kind,
            start,
            children: Vec::new(),
        }
    }

    pub(crate) fn append(&mut self, child: Node) {
        if matches!(self.kind, NodeKind::List { .. }) {
            assert!(
                matches!(child.kind(), NodeKind::ListItem { .. }),
                "broken tree invariant: List cannot hold {}",
                child.kind().label()
            );
        }
        self.children.push(child);
    }

    /// Drops the last child when it is a whitespace-only text or break leaf.
    pub(crate) fn trim(&mut self) {
        if self.children.last().is_some_and(Node::is_blank_leaf) {
            self.children.pop();
        }
    }

    /// Seals the container, ending at its last child (or where it started).
    pub(crate) fn seal(self) -> Node {
        let start = self.start;
        self.seal_at(start)
    }

    /// Seals the container ending no earlier than `end`, e.g. past a closing
    /// marker.
    pub(crate) fn seal_at(self, end: TextSize) -> Node {
        let last = self
            .children
            .last()
            .map_or(self.start, |child| child.span().end());
        let end = end.max(last);
        Node::container(self.kind, TextRange::new(self.start, end), self.children)
    }
}
