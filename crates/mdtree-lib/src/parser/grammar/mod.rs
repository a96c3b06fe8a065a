//! Grammar productions for the markdown dialect.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.
//! Block rules live in `blocks`, `lists` and `code`; phrasing rules in
//! `inlines`. A rule returns `Ok(None)` when the current scope has ended,
//! which is the only way a loop learns it should stop. `Err` is reserved for
//! the recursion limit.

mod blocks;
mod code;
mod inlines;
mod lists;

use super::core::Parser;
use super::lexer::{CODE_INDENT, TokenKind, TokenStream};
use crate::Result;
use crate::ast::Node;

impl<'src, S: TokenStream<'src>> Parser<'src, S> {
    /// Parses every top-level block into `root`.
    pub(crate) fn parse_content(&mut self, root: &mut Node) -> Result<()> {
        while let Some(block) = self.parse_block(0, false)? {
            root.push_top_level(block);
        }
        self.assert_scope_end();
        Ok(())
    }

    /// Parses one block. With `needs_indent`, the block (and any block after
    /// a blank line) must first carry `indent` leading tabs.
    pub(super) fn parse_block(
        &mut self,
        indent: usize,
        needs_indent: bool,
    ) -> Result<Option<Node>> {
        self.enter_recursion()?;
        let block = self.parse_block_inner(indent, needs_indent);
        self.exit_recursion();
        block
    }

    fn parse_block_inner(
        &mut self,
        indent: usize,
        mut needs_indent: bool,
    ) -> Result<Option<Node>> {
        loop {
            let token = self.cursor.peek();

            if token.kind.is_line_ending() {
                self.cursor.next();
                needs_indent = indent > 0;
                continue;
            }

            if needs_indent {
                if !self.accept_indent(indent) {
                    return Ok(None);
                }
                needs_indent = false;
                continue;
            }

            let node = match token.kind {
                TokenKind::Space => {
                    let spaces = self.skip_spaces();
                    if spaces < CODE_INDENT {
                        continue;
                    }
                    self.parse_indented_code(token.span.start(), indent, spaces - CODE_INDENT)
                }
                TokenKind::Tab => {
                    self.cursor.next();
                    self.parse_indented_code(token.span.start(), indent, 0)
                }
                TokenKind::Heading => self.parse_heading()?,
                TokenKind::ThematicBreak => self.parse_thematic_break(),
                TokenKind::Quote => self.parse_blockquote()?,
                TokenKind::ListItem => self.parse_list(indent)?,
                TokenKind::Code => self.parse_fenced_code(),
                kind if kind.starts_phrasing() => self.parse_paragraph()?,
                _ => return Ok(None),
            };
            return Ok(Some(node));
        }
    }
}
