//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::core::Parser;
use super::cursor::{SLOTS, TokenCursor};
use super::lexer::{Token, TokenKind, TokenStream};

impl<'src, S: TokenStream<'src>> TokenCursor<'src, S> {
    #[inline]
    pub(super) fn ensure_progress(&mut self) {
        if let Some(fuel) = self.debug_fuel.as_mut() {
            assert!(*fuel != 0, "parser is stuck: too many lookaheads");
            *fuel -= 1;
        }
    }

    #[inline]
    pub(super) fn assert_can_restore(&self, count: usize) {
        assert!(
            self.replayable > 0,
            "broken cursor invariant: backup of {count} without a token to restore"
        );
        assert!(
            self.consumed >= count,
            "broken cursor invariant: backup of {count} after {} consumed tokens",
            self.consumed
        );
        assert!(
            self.pending + count <= SLOTS,
            "broken cursor invariant: backup of {count} overflows {} pending of {SLOTS} slots",
            self.pending
        );
    }
}

impl<'src, S: TokenStream<'src>> Parser<'src, S> {
    #[inline]
    pub(super) fn assert_token(&self, token: Token<'src>, expected: TokenKind) {
        assert_eq!(
            token.kind, expected,
            "broken parser invariant: expected {:?} but found {:?} (upstream caller's responsibility)",
            expected, token.kind,
        );
    }

    #[inline]
    pub(super) fn assert_scope_end(&mut self) {
        let kind = self.cursor.peek_kind();
        assert!(
            kind.ends_input(),
            "broken parser invariant: top-level scope ended at {kind:?} before end of input"
        );
    }
}
