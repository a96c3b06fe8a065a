//! Parser state and low-level operations shared by the grammar rules.

use super::cursor::TokenCursor;
use super::lexer::{TokenKind, TokenStream};
use crate::{Error, Result};

/// Default nesting limit for block and inline recursion.
pub const DEFAULT_RECURSION_FUEL: u32 = 256;

pub struct Parser<'src, S> {
    pub(super) cursor: TokenCursor<'src, S>,
    pub(super) depth: u32,
    recursion_fuel_limit: Option<u32>,
}

impl<'src, S: TokenStream<'src>> Parser<'src, S> {
    pub fn new(stream: S) -> Self {
        Self {
            cursor: TokenCursor::new(stream),
            depth: 0,
            recursion_fuel_limit: Some(DEFAULT_RECURSION_FUEL),
        }
    }

    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel_limit = limit;
        self
    }

    pub fn with_debug_fuel(mut self, limit: Option<u32>) -> Self {
        self.cursor = self.cursor.with_debug_fuel(limit);
        self
    }

    pub(super) fn enter_recursion(&mut self) -> Result<()> {
        if let Some(limit) = self.recursion_fuel_limit
            && self.depth >= limit
        {
            return Err(Error::RecursionLimitExceeded {
                limit,
                offset: self.cursor.offset(),
            });
        }
        self.depth += 1;
        Ok(())
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Consumes consecutive space tokens and returns how many there were.
    pub(super) fn skip_spaces(&mut self) -> usize {
        let mut count = 0;
        while self.cursor.peek_kind() == TokenKind::Space {
            self.cursor.next();
            count += 1;
        }
        count
    }
}
