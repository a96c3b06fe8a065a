//! Bounded lookahead and pushback over a token stream.
//!
//! The cursor keeps the last three tokens it handed out in fixed slots, so a
//! grammar rule can give back up to three consumed tokens and read them
//! again in the same order. Slot `pending - 1` is the next token `next()`
//! will return; everything at or above `pending` has already been returned.
//!
//! Pushing back more than was consumed, or more than the slots hold, is a
//! grammar bug. It trips an assertion instead of silently corrupting the
//! token order.

use rowan::TextSize;

use super::lexer::{Token, TokenKind, TokenStream};

pub(crate) const SLOTS: usize = 3;

/// Consecutive lookaheads allowed without consuming a token.
pub const DEFAULT_DEBUG_FUEL: u32 = 256;

pub struct TokenCursor<'src, S> {
    pub(super) stream: S,
    pub(super) slots: [Token<'src>; SLOTS],
    /// Tokens pushed back and not yet returned again.
    pub(super) pending: usize,
    /// Most recently returned tokens still held above `pending`.
    pub(super) replayable: usize,
    /// Tokens returned by `next()` minus tokens pushed back.
    pub(super) consumed: usize,
    pub(super) debug_fuel: Option<u32>,
    debug_fuel_limit: Option<u32>,
}

impl<'src, S: TokenStream<'src>> TokenCursor<'src, S> {
    pub fn new(stream: S) -> Self {
        let placeholder = Token::eof(TextSize::from(0));
        Self {
            stream,
            slots: [placeholder; SLOTS],
            pending: 0,
            replayable: 0,
            consumed: 0,
            debug_fuel: Some(DEFAULT_DEBUG_FUEL),
            debug_fuel_limit: Some(DEFAULT_DEBUG_FUEL),
        }
    }

    /// Limits consecutive `peek()` calls without progress. `None` disables
    /// the check.
    pub fn with_debug_fuel(mut self, limit: Option<u32>) -> Self {
        self.debug_fuel = limit;
        self.debug_fuel_limit = limit;
        self
    }

    pub fn next(&mut self) -> Token<'src> {
        self.reset_debug_fuel();
        let token = if self.pending > 0 {
            self.pending -= 1;
            self.slots[self.pending]
        } else {
            self.slots[0] = self.stream.next_item();
            self.replayable = 0;
            self.slots[0]
        };
        self.replayable = (self.replayable + 1).min(SLOTS);
        self.consumed += 1;
        token
    }

    pub fn peek(&mut self) -> Token<'src> {
        self.ensure_progress();
        if self.pending > 0 {
            return self.slots[self.pending - 1];
        }
        self.slots[0] = self.stream.next_item();
        self.pending = 1;
        self.replayable = 0;
        self.slots[0]
    }

    pub fn peek_kind(&mut self) -> TokenKind {
        self.peek().kind
    }

    /// Pushes back the token the last `next()` returned.
    pub fn backup(&mut self) {
        self.assert_can_restore(1);
        self.pending += 1;
        self.replayable -= 1;
        self.consumed -= 1;
    }

    /// Pushes back the last returned token and the one returned before it.
    pub fn backup2(&mut self, prev: Token<'src>) {
        self.assert_can_restore(2);
        self.slots[self.pending + 1] = prev;
        self.pending += 2;
        self.replayable = 0;
        self.consumed -= 2;
    }

    /// Pushes back the last three returned tokens, oldest first in the
    /// arguments: `next()` then yields `prev2`, `prev1`, and the last token.
    pub fn backup3(&mut self, prev2: Token<'src>, prev1: Token<'src>) {
        self.assert_can_restore(3);
        self.slots[self.pending + 1] = prev1;
        self.slots[self.pending + 2] = prev2;
        self.pending += 3;
        self.replayable = 0;
        self.consumed -= 3;
    }

    pub fn next_non_space(&mut self) -> Token<'src> {
        loop {
            let token = self.next();
            if token.kind != TokenKind::Space {
                return token;
            }
        }
    }

    /// Start of the token the cursor is about to return.
    pub fn offset(&mut self) -> TextSize {
        self.peek().span.start()
    }

    fn reset_debug_fuel(&mut self) {
        self.debug_fuel = self.debug_fuel_limit;
    }
}
