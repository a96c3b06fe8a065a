//! Parse result and the boundary that runs a parse.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use rowan::TextSize;

use super::core::Parser;
use super::lexer::TokenStream;
use crate::ast::{Node, TreePrinter};
use crate::{Error, Result};

/// Where a [`Tree`] is in its parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseState {
    Init,
    Parsing,
    /// The root holds the whole document.
    Done,
    /// The root may be partial or empty.
    Failed,
}

/// The syntax tree of one document, plus what produced it.
///
/// The token stream is only held while the parse runs; afterwards
/// [`Tree::has_stream`] is always false.
pub struct Tree<'src> {
    name: String,
    text: &'src str,
    root: Node,
    stream: Option<Box<dyn TokenStream<'src> + 'src>>,
    state: ParseState,
}

impl<'src> Tree<'src> {
    pub(super) fn new(name: &str, text: &'src str) -> Self {
        let len = TextSize::try_from(text.len()).unwrap_or(TextSize::from(u32::MAX));
        Self {
            name: name.to_owned(),
            text,
            root: Node::root(len),
            stream: None,
            state: ParseState::Init,
        }
    }

    /// Diagnostic label given at parse time.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &'src str {
        self.text
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    pub fn state(&self) -> ParseState {
        self.state
    }

    pub fn has_stream(&self) -> bool {
        self.stream.is_some()
    }

    pub fn printer(&self) -> TreePrinter<'_> {
        TreePrinter::new(&self.root)
    }

    pub fn dump(&self) -> String {
        self.printer().dump()
    }

    /// Runs the grammar over `stream`, converting any internal panic into
    /// [`Error::InvariantViolation`].
    pub(super) fn run(
        &mut self,
        stream: Box<dyn TokenStream<'src> + 'src>,
        recursion_fuel: Option<u32>,
        debug_fuel: Option<u32>,
    ) -> Result<()> {
        tracing::debug!(name = %self.name, len = self.text.len(), "parse started");
        self.state = ParseState::Parsing;

        let stream = self.stream.insert(stream);
        let root = &mut self.root;
        let outcome = {
            let mut parser = Parser::new(&mut **stream)
                .with_recursion_fuel(recursion_fuel)
                .with_debug_fuel(debug_fuel);
            panic::catch_unwind(AssertUnwindSafe(|| parser.parse_content(root)))
        };

        let result = match outcome {
            Ok(result) => result,
            Err(payload) => {
                let cause = panic_message(payload.as_ref());
                tracing::warn!(name = %self.name, %cause, "parser invariant violated");
                Err(Error::InvariantViolation {
                    name: self.name.clone(),
                    cause,
                })
            }
        };

        match &result {
            Ok(()) => {
                self.state = ParseState::Done;
                tracing::debug!(name = %self.name, "parse finished");
            }
            Err(err) => {
                stream.drain();
                self.state = ParseState::Failed;
                tracing::debug!(name = %self.name, error = %err, "parse failed");
            }
        }
        self.stream = None;
        result
    }
}

impl fmt::Debug for Tree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("name", &self.name)
            .field("state", &self.state)
            .field("has_stream", &self.has_stream())
            .field("root", &self.root)
            .finish()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        return (*message).to_owned();
    }
    if let Some(message) = payload.downcast_ref::<String>() {
        return message.clone();
    }
    "unknown panic".to_owned()
}
