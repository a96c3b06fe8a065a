//! Fenced and indented code blocks.
//!
//! A fenced block ends only at its closing fence (or end of input), and
//! its lines lose the tabs that indented the opening fence. An
//! indented block ends at the first line that is not indented enough; blank
//! lines inside it are kept.

use rowan::{TextRange, TextSize};

use super::super::core::Parser;
use super::super::lexer::{CODE_INDENT, TokenKind, TokenStream};
use crate::ast::{Node, NodeKind};

impl<'src, S: TokenStream<'src>> Parser<'src, S> {
    pub(super) fn parse_fenced_code(&mut self) -> Node {
        let fence = self.cursor.next();
        self.assert_token(fence, TokenKind::Code);

        let (lang, meta) = if self.cursor.peek_kind() == TokenKind::Text {
            split_info(self.cursor.next().text)
        } else {
            (None, None)
        };
        if self.cursor.peek_kind() == TokenKind::Break {
            self.cursor.next();
        }

        let mut value = String::new();
        let mut end = fence.span.end();
        loop {
            let token = self.cursor.peek();
            match token.kind {
                TokenKind::Code => {
                    self.cursor.next();
                    end = token.span.end();
                    break;
                }
                kind if kind.ends_input() => break,
                // Block indentation, or the indentation of a closing fence.
                TokenKind::Space | TokenKind::Tab => {
                    self.cursor.next();
                }
                _ => {
                    self.cursor.next();
                    value.push_str(token.text);
                    end = token.span.end();
                }
            }
        }
        strip_line_ending(&mut value);

        let span = TextRange::new(fence.span.start(), end);
        Node::leaf(NodeKind::Code { lang, meta }, span, value)
    }

    /// Called after the first line's indentation was consumed; `extra` is
    /// the number of spaces past the code indent.
    pub(super) fn parse_indented_code(
        &mut self,
        start: TextSize,
        indent: usize,
        extra: usize,
    ) -> Node {
        let mut value = " ".repeat(extra);
        let mut end = start;
        loop {
            let token = self.cursor.peek();
            if token.kind.ends_input() {
                break;
            }
            if token.kind.is_line_ending() {
                self.cursor.next();
                let Some(extra) = self.code_line_indent(indent) else {
                    break;
                };
                value.extend(token.text.chars().filter(|c| matches!(c, '\n' | '\r')));
                value.push_str(&" ".repeat(extra));
                continue;
            }
            self.cursor.next();
            value.push_str(token.text);
            end = token.span.end();
        }

        let kind = NodeKind::Code {
            lang: None,
            meta: None,
        };
        Node::leaf(kind, TextRange::new(start, end), value)
    }

    /// Indentation of a code continuation line: a tab or four spaces past
    /// the enclosing indent. Returns the spaces beyond the code indent.
    fn code_line_indent(&mut self, indent: usize) -> Option<usize> {
        if !self.accept_indent_before(indent, |kind| {
            matches!(kind, TokenKind::Tab | TokenKind::Space)
        }) {
            return None;
        }
        if self.cursor.peek_kind() == TokenKind::Tab {
            self.cursor.next();
            return Some(0);
        }
        let spaces = self.skip_spaces();
        spaces.checked_sub(CODE_INDENT)
    }
}

/// Splits a fence info string into language and the rest.
fn split_info(info: &str) -> (Option<String>, Option<String>) {
    let info = info.trim();
    if info.is_empty() {
        return (None, None);
    }
    match info.split_once(char::is_whitespace) {
        Some((lang, meta)) => (Some(lang.to_owned()), Some(meta.trim().to_owned())),
        None => (Some(info.to_owned()), None),
    }
}

fn strip_line_ending(value: &mut String) {
    if value.ends_with("\r\n") {
        value.truncate(value.len() - 2);
    } else if value.ends_with('\n') {
        value.pop();
    }
}
