//! Enter/exit traversal over a finished tree.
//!
//! # Usage
//!
//! ```
//! use mdtree_lib::{Node, NodeKind, Visitor, WalkStatus, parse, walk};
//!
//! struct CountText(usize);
//!
//! impl Visitor for CountText {
//!     fn visit(&mut self, node: &Node, entering: bool) -> WalkStatus {
//!         if entering && node.kind() == &NodeKind::Text {
//!             self.0 += 1;
//!         }
//!         WalkStatus::Continue
//!     }
//! }
//!
//! let (tree, _) = parse("doc", "a *b*\n");
//! let mut counter = CountText(0);
//! walk(tree.root(), &mut counter);
//! assert_eq!(counter.0, 2);
//! ```

use super::node::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkStatus {
    Continue,
    /// Skip the children of the container being entered; its exit call
    /// still happens.
    SkipChildren,
    /// Abort the whole walk.
    Stop,
}

/// Containers are visited twice (`entering` true, then false), leaves once.
pub trait Visitor {
    fn visit(&mut self, node: &Node, entering: bool) -> WalkStatus;
}

pub fn walk<V: Visitor + ?Sized>(node: &Node, visitor: &mut V) -> WalkStatus {
    if node.is_leaf() {
        return visitor.visit(node, true);
    }

    match visitor.visit(node, true) {
        WalkStatus::Stop => return WalkStatus::Stop,
        WalkStatus::SkipChildren => {}
        WalkStatus::Continue => {
            for child in node.children() {
                if walk(child, visitor) == WalkStatus::Stop {
                    return WalkStatus::Stop;
                }
            }
        }
    }

    visitor.visit(node, false)
}
