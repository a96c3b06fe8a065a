//! mdtree: markdown text to a typed syntax tree.
//!
//! # Example
//!
//! ```
//! use mdtree_lib::{NodeKind, parse};
//!
//! let (tree, error) = parse("readme", "# Title\n\nSome *emphasis*.\n");
//! assert!(error.is_none());
//!
//! let root = tree.root();
//! assert_eq!(root.children()[0].kind(), &NodeKind::Heading { depth: 1 });
//! println!("{}", tree.dump());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod ast;
pub mod diagnostics;
pub mod parser;


use rowan::TextSize;

pub use ast::{Node, NodeKind, TreePrinter, Visitor, WalkStatus, walk};
pub use diagnostics::{ErrorPrinter, render_error};
pub use parser::{ParseOptions, ParseState, Tree, parse, parse_bytes};

/// Errors that can end a parse.
///
/// Lexical problems are not errors: an invalid byte simply ends the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Recursion fuel exhausted (input nested too deeply).
    #[error("recursion limit exceeded: input nests deeper than {limit} levels")]
    RecursionLimitExceeded { limit: u32, offset: TextSize },

    /// A grammar rule broke one of the parser's internal assumptions.
    ///
    /// Produced only by the failure boundary around a parse.
    #[error("internal parser error in `{name}`: {cause}")]
    InvariantViolation { name: String, cause: String },
}

impl Error {
    /// Source offset the error points at, when it has one.
    pub fn offset(&self) -> Option<TextSize> {
        match self {
            Error::RecursionLimitExceeded { offset, .. } => Some(*offset),
            Error::InvariantViolation { .. } => None,
        }
    }
}

/// Result type for parser operations.
pub type Result<T> = std::result::Result<T, Error>;
