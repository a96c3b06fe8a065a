//! Phrasing content: text, emphasis, strong, strikethrough, code spans and
//! line breaks.
//!
//! Each call produces at most one node. Delimited spans wrap exactly one
//! phrasing child, and their closing marker must repeat the opener's kind
//! and delimiter character; otherwise the opener is read back as text.

use rowan::TextRange;

use super::super::core::Parser;
use super::super::lexer::{Token, TokenKind, TokenStream};
use crate::Result;
use crate::ast::{Node, NodeBuilder, NodeKind};

impl<'src, S: TokenStream<'src>> Parser<'src, S> {
    pub(super) fn parse_inline(&mut self) -> Result<Option<Node>> {
        self.enter_recursion()?;
        let inline = self.parse_inline_inner();
        self.exit_recursion();
        inline
    }

    fn parse_inline_inner(&mut self) -> Result<Option<Node>> {
        let token = self.cursor.peek();
        let node = match token.kind {
            TokenKind::Text => {
                self.cursor.next();
                Node::leaf(NodeKind::Text, token.span, token.text)
            }
            TokenKind::Emphasis => self.parse_delimited(NodeKind::Emphasis)?,
            TokenKind::Strong => self.parse_delimited(NodeKind::Strong)?,
            TokenKind::Strike => self.parse_delimited(NodeKind::Delete)?,
            TokenKind::InlineCode => self.parse_code_span(),
            TokenKind::Break => self.parse_break(),
            _ => return Ok(None),
        };
        Ok(Some(node))
    }

    fn parse_delimited(&mut self, kind: NodeKind) -> Result<Node> {
        let open = self.cursor.next();
        let next = self.cursor.peek();

        // Common shape `open Text close`: decide with three tokens in hand.
        if next.kind == TokenKind::Text {
            let text = self.cursor.next();
            let close = self.cursor.next();
            if closes(open, close) {
                let mut node = NodeBuilder::new(kind, open.span.start());
                node.append(Node::leaf(NodeKind::Text, text.span, text.text));
                return Ok(node.seal_at(close.span.end()));
            }
            self.cursor.backup3(open, text);
            let open = self.cursor.next();
            return Ok(literal(open));
        }

        if !next.kind.starts_phrasing() {
            return Ok(literal(open));
        }
        let Some(child) = self.parse_inline()? else {
            return Ok(literal(open));
        };

        let mut node = NodeBuilder::new(kind, open.span.start());
        node.append(child);
        let close = self.cursor.peek();
        if closes(open, close) {
            self.cursor.next();
            return Ok(node.seal_at(close.span.end()));
        }
        Ok(node.seal())
    }

    fn parse_code_span(&mut self) -> Node {
        let open = self.cursor.next();
        let content = self.cursor.next();
        let close = self.cursor.next();
        self.assert_token(content, TokenKind::Text);
        self.assert_token(close, TokenKind::InlineCode);

        let span = TextRange::new(open.span.start(), close.span.end());
        Node::leaf(NodeKind::InlineCode, span, content.text)
    }

    fn parse_break(&mut self) -> Node {
        let token = self.cursor.next();
        // Indentation of the next line is not part of the paragraph.
        self.cursor.next_non_space();
        self.cursor.backup();
        Node::leaf(NodeKind::Break, token.span, token.text)
    }
}

fn closes(open: Token<'_>, close: Token<'_>) -> bool {
    close.kind == open.kind && close.text == open.text
}

fn literal(token: Token<'_>) -> Node {
    Node::leaf(NodeKind::Text, token.span, token.text)
}
