//! Bullet lists and the tab indentation that nests blocks inside items.

use rowan::TextSize;

use super::super::core::Parser;
use super::super::cursor::SLOTS;
use super::super::lexer::{Token, TokenKind, TokenStream};
use crate::Result;
use crate::ast::{Node, NodeBuilder, NodeKind};

/// Deepest indentation that can still be pushed back together with the
/// token after it.
const MAX_INDENT: usize = SLOTS - 1;

impl<'src, S: TokenStream<'src>> Parser<'src, S> {
    /// Items continue while the next line starts with a marker at the
    /// list's own indentation.
    pub(super) fn parse_list(&mut self, indent: usize) -> Result<Node> {
        let mut list = NodeBuilder::new(NodeKind::bullet_list(), self.cursor.offset());
        loop {
            let item = self.parse_list_item(indent)?;
            list.append(item);
            if !self.at_sibling_item(indent) {
                break;
            }
        }
        Ok(list.seal())
    }

    fn parse_list_item(&mut self, indent: usize) -> Result<Node> {
        let marker = self.cursor.next();
        self.assert_token(marker, TokenKind::ListItem);
        self.skip_spaces();

        let kind = NodeKind::ListItem {
            checked: false,
            spread: false,
        };
        let mut item = NodeBuilder::new(kind, marker.span.start());

        // The first block shares the marker's line; later ones are indented.
        let mut needs_indent = false;
        while let Some(block) = self.parse_block(indent + 1, needs_indent)? {
            item.append(block);
            needs_indent = true;
        }
        Ok(item.seal_at(marker.span.end()))
    }

    fn at_sibling_item(&mut self, indent: usize) -> bool {
        while self.cursor.peek_kind().is_line_ending() {
            self.cursor.next();
        }
        self.accept_indent_before(indent, |kind| kind == TokenKind::ListItem)
    }

    pub(super) fn accept_indent(&mut self, level: usize) -> bool {
        self.accept_indent_before(level, |_| true)
    }

    /// Consumes exactly `level` tabs if the token after them satisfies
    /// `accept`. Otherwise every token read is pushed back.
    pub(super) fn accept_indent_before(
        &mut self,
        level: usize,
        accept: impl Fn(TokenKind) -> bool,
    ) -> bool {
        let level = level.min(MAX_INDENT);
        let mut tabs = [Token::eof(TextSize::from(0)); MAX_INDENT];
        let mut read = 0;

        let mut token = self.cursor.next();
        while read < level && token.kind == TokenKind::Tab {
            tabs[read] = token;
            read += 1;
            token = self.cursor.next();
        }

        if read == level && accept(token.kind) {
            self.cursor.backup();
            return true;
        }

        match read {
            0 => self.cursor.backup(),
            1 => self.cursor.backup2(tabs[0]),
            _ => self.cursor.backup3(tabs[0], tabs[1]),
        }
        false
    }
}
