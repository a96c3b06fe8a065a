//! Paragraphs, headings, thematic breaks and blockquotes.

use super::super::core::Parser;
use super::super::lexer::{TokenKind, TokenStream};
use crate::Result;
use crate::ast::{Node, NodeBuilder, NodeKind};

const MAX_HEADING_DEPTH: usize = 6;

impl<'src, S: TokenStream<'src>> Parser<'src, S> {
    pub(super) fn parse_paragraph(&mut self) -> Result<Node> {
        let mut paragraph = NodeBuilder::new(NodeKind::Paragraph, self.cursor.offset());
        while let Some(inline) = self.parse_inline()? {
            paragraph.append(inline);
        }
        paragraph.trim();
        Ok(paragraph.seal())
    }

    /// `# Title`: exactly one phrasing child, none for an empty heading.
    pub(super) fn parse_heading(&mut self) -> Result<Node> {
        let marker = self.cursor.next();
        self.assert_token(marker, TokenKind::Heading);
        self.skip_spaces();

        let depth = marker.text.len().clamp(1, MAX_HEADING_DEPTH) as u8;
        let mut heading = NodeBuilder::new(NodeKind::Heading { depth }, marker.span.start());
        if self.cursor.peek_kind().starts_phrasing()
            && let Some(child) = self.parse_inline()?
        {
            heading.append(child);
        }
        Ok(heading.seal_at(marker.span.end()))
    }

    pub(super) fn parse_thematic_break(&mut self) -> Node {
        let token = self.cursor.next();
        self.assert_token(token, TokenKind::ThematicBreak);
        Node::leaf(NodeKind::ThematicBreak, token.span, token.text)
    }

    /// `> ...`: the block following the marker is the quote's only child.
    pub(super) fn parse_blockquote(&mut self) -> Result<Node> {
        let marker = self.cursor.next();
        self.assert_token(marker, TokenKind::Quote);
        self.skip_spaces();

        let mut quote = NodeBuilder::new(NodeKind::Blockquote, marker.span.start());
        if !self.cursor.peek_kind().is_line_ending()
            && let Some(block) = self.parse_block(0, false)?
        {
            quote.append(block);
        }
        Ok(quote.seal_at(marker.span.end()))
    }
}
