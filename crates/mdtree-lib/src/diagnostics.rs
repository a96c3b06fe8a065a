//! Human-readable rendering of parse errors.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};
use rowan::TextSize;

use crate::Error;

/// Builder for rendering one [`Error`] against its source.
pub struct ErrorPrinter<'e, 's> {
    error: &'e Error,
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'e, 's> ErrorPrinter<'e, 's> {
    pub fn new(error: &'e Error) -> Self {
        Self {
            error,
            source: None,
            path: None,
            colored: false,
        }
    }

    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let (Some(source), Some(offset)) = (self.source, self.error.offset()) else {
            return writeln!(w, "error: {}", self.error);
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let message = self.error.to_string();
        let mut snippet = Snippet::source(source).line_start(1).annotation(
            AnnotationKind::Primary
                .span(adjust_range(offset, source.len()))
                .label(label(self.error)),
        );
        if let Some(path) = self.path {
            snippet = snippet.path(path);
        }

        let report = vec![Level::ERROR.primary_title(&message).element(snippet)];
        writeln!(w, "{}", renderer.render(&report))
    }
}

fn label(error: &Error) -> &'static str {
    match error {
        Error::RecursionLimitExceeded { .. } => "nesting limit reached here",
        Error::InvariantViolation { .. } => "parser failed here",
    }
}

/// Widens an offset to one character so the caret has something to point at.
fn adjust_range(offset: TextSize, limit: usize) -> std::ops::Range<usize> {
    let start = usize::from(offset).min(limit);
    start..(start + 1).min(limit)
}

impl Error {
    pub fn printer(&self) -> ErrorPrinter<'_, '_> {
        ErrorPrinter::new(self)
    }
}

/// Renders `error` without colors, with a source excerpt when it has an offset.
pub fn render_error(source: &str, name: &str, error: &Error) -> String {
    error.printer().source(source).path(name).render()
}
