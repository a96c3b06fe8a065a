//! Markdown parser: lexer, token cursor, grammar and the parse boundary.
//!
//! # Architecture
//!
//! The lexer splits the source into raw pieces up front and classifies them
//! into tokens lazily, one line at a time.
//! The grammar reads them through a [`TokenCursor`] that can push back up to
//! three consumed tokens, which is all the backtracking the dialect needs:
//!
//! - Block rules classify the next construct off the peeked token and recurse
//!   into themselves for quotes and list items.
//! - Inline rules produce one phrasing node per call. Delimiter runs are
//!   matched against their closer before a container is committed.
//! - Nested list blocks require leading tabs; a failed indentation check
//!   restores every tab it read.
//!
//! # Failure
//!
//! Expected outcomes (end of input, an unmatched marker) are never errors:
//! a rule returns `Ok(None)` and its caller stops. Nesting past the recursion
//! fuel is a normal [`Error::RecursionLimitExceeded`](crate::Error). Broken
//! internal assumptions panic inside the grammar and are turned into
//! [`Error::InvariantViolation`](crate::Error) by the boundary in
//! [`Tree`], so a parse never takes the host process down.

pub mod cursor;
pub mod lexer;

mod core;
mod grammar;
mod invariants;
mod tree;

#[cfg(test)]
mod lexer_tests;
#[cfg(test)]
mod tests;

pub use core::{DEFAULT_RECURSION_FUEL, Parser};
pub use cursor::{DEFAULT_DEBUG_FUEL, TokenCursor};
pub use lexer::{Lexer, Token, TokenKind, TokenStream};
pub use tree::{ParseState, Tree};

use crate::Error;

/// Limits applied to a parse.
///
/// ```
/// use mdtree_lib::ParseOptions;
///
/// let (tree, error) = ParseOptions::new()
///     .with_recursion_fuel(Some(3))
///     .parse("deep", "> > > > quoted\n");
/// assert!(error.is_some());
/// assert!(!tree.has_stream());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    recursion_fuel: Option<u32>,
    debug_fuel: Option<u32>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            recursion_fuel: Some(DEFAULT_RECURSION_FUEL),
            debug_fuel: Some(DEFAULT_DEBUG_FUEL),
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum nesting of blocks and inlines. `None` removes the limit.
    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel = limit;
        self
    }

    /// Lookaheads allowed without consuming a token before the parser is
    /// considered stuck, on top of one per nesting level. `None` disables
    /// the check, and so does an unlimited recursion fuel.
    pub fn with_debug_fuel(mut self, limit: Option<u32>) -> Self {
        self.debug_fuel = limit;
        self
    }

    pub fn recursion_fuel(&self) -> Option<u32> {
        self.recursion_fuel
    }

    pub fn debug_fuel(&self) -> Option<u32> {
        self.debug_fuel
    }

    pub fn parse<'src>(&self, name: &str, text: &'src str) -> (Tree<'src>, Option<Error>) {
        self.parse_stream(name, text, Lexer::new(text))
    }

    /// Parses raw bytes. Input past the first invalid UTF-8 sequence is
    /// ignored; the tree covers the valid prefix.
    pub fn parse_bytes<'src>(
        &self,
        name: &str,
        bytes: &'src [u8],
    ) -> (Tree<'src>, Option<Error>) {
        let lexer = Lexer::from_bytes(bytes);
        self.parse_stream(name, lexer.source(), lexer)
    }

    pub(crate) fn parse_stream<'src>(
        &self,
        name: &str,
        text: &'src str,
        stream: impl TokenStream<'src> + 'src,
    ) -> (Tree<'src>, Option<Error>) {
        let mut tree = Tree::new(name, text);
        let error = tree
            .run(Box::new(stream), self.recursion_fuel, self.lookahead_fuel())
            .err();
        (tree, error)
    }

    /// Nested spans that end together each peek the same unconsumed token,
    /// so the lookahead budget grows with the nesting limit.
    fn lookahead_fuel(&self) -> Option<u32> {
        let depth = self.recursion_fuel?;
        self.debug_fuel.map(|fuel| fuel.saturating_add(depth))
    }
}

/// Parses `text` with default limits. `name` only labels diagnostics.
pub fn parse<'src>(name: &str, text: &'src str) -> (Tree<'src>, Option<Error>) {
    ParseOptions::default().parse(name, text)
}

/// Parses raw bytes with default limits; see [`ParseOptions::parse_bytes`].
pub fn parse_bytes<'src>(name: &str, bytes: &'src [u8]) -> (Tree<'src>, Option<Error>) {
    ParseOptions::default().parse_bytes(name, bytes)
}
