//! Syntax tree produced by the parser.
//!
//! Nodes own their children outright: there are no parent pointers, so the
//! tree is acyclic by construction. Consumers read it through the accessors
//! on [`Node`] or walk it with a [`Visitor`].

mod builder;
mod node;
mod printer;
mod visitor;


pub(crate) use builder::NodeBuilder;
pub use node::{Node, NodeKind};
pub use printer::TreePrinter;
pub use visitor::{Visitor, WalkStatus, walk};
