//! Lexer for the markdown dialect.
//!
//! Scanning happens in two layers. Logos splits the whole source up front
//! into raw pieces: spaces, tabs, line endings, delimiter runs and plain
//! words. A line-aware classifier then lazily turns the pieces of one line
//! at a time into [`Token`]s, deciding which runs are block markers, which
//! are inline markers and which are just text.
//!
//! Inside a fenced block, up to as many leading tabs as preceded the opening
//! fence are emitted as `Tab` tokens and are not part of the content.
//!
//! Tokens carry their source slice, so concatenating the literals of all
//! tokens gives back the input (minus whitespace trailing a fence or a
//! thematic break).
//!
//! ## Error handling
//!
//! The only lexical error is invalid UTF-8 passed to [`Lexer::from_bytes`].
//! The valid prefix is lexed normally, then a single `Error` token marks the
//! first invalid byte and the stream ends.

use std::collections::VecDeque;
use std::ops::Range;

use logos::Logos;
use rowan::{TextRange, TextSize};

/// Number of leading spaces that turn a line into indented code.
pub const CODE_INDENT: usize = 4;

const MAX_HEADING_MARKER: usize = 6;
const MIN_FENCE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Space,
    Tab,
    /// Run of ordinary characters (interior spaces included).
    Text,
    /// One or more blank lines.
    Paragraph,
    Heading,
    ThematicBreak,
    Quote,
    ListItem,
    /// Code fence, opening or closing.
    Code,
    /// Backtick run delimiting a code span.
    InlineCode,
    Emphasis,
    Strong,
    Strike,
    /// Line ending that is not followed by a blank line.
    Break,
    Eof,
    Error,
}

impl TokenKind {
    /// Tokens that can start phrasing content.
    pub fn starts_phrasing(self) -> bool {
        matches!(
            self,
            TokenKind::Text
                | TokenKind::Emphasis
                | TokenKind::Strong
                | TokenKind::Strike
                | TokenKind::InlineCode
        )
    }

    pub fn ends_input(self) -> bool {
        matches!(self, TokenKind::Eof | TokenKind::Error)
    }

    pub fn is_line_ending(self) -> bool {
        matches!(self, TokenKind::Break | TokenKind::Paragraph)
    }
}

/// Token with its span and the source text it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub span: TextRange,
    pub text: &'src str,
}

impl<'src> Token<'src> {
    #[inline]
    pub fn new(kind: TokenKind, span: TextRange, text: &'src str) -> Self {
        Self { kind, span, text }
    }

    pub(crate) fn eof(offset: TextSize) -> Self {
        Self::new(TokenKind::Eof, TextRange::empty(offset), "")
    }
}

/// Lazy, finite, non-restartable source of tokens.
///
/// After the terminal `Eof` (or `Error`) token, `next_item` keeps returning
/// `Eof`.
pub trait TokenStream<'src> {
    fn next_item(&mut self) -> Token<'src>;

    /// Discards everything not yet read.
    fn drain(&mut self);
}

impl<'src, S: TokenStream<'src> + ?Sized> TokenStream<'src> for &mut S {
    fn next_item(&mut self) -> Token<'src> {
        (**self).next_item()
    }

    fn drain(&mut self) {
        (**self).drain()
    }
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Piece {
    #[token(" ")]
    Space,

    #[token("\t")]
    Tab,

    #[token("\n")]
    #[token("\r\n")]
    Newline,

    #[regex(r"#+")]
    Hashes,

    #[regex(r"\*+")]
    Stars,

    #[regex(r"_+")]
    Underscores,

    #[regex(r"~+")]
    Tildes,

    #[regex(r"-+")]
    Dashes,

    #[regex(r"`+")]
    Backticks,

    #[token(">")]
    Gt,

    #[token("+")]
    Plus,

    #[regex(r"[^ \t\r\n#*_~`>+\-]+", allow_greedy = true)]
    #[token("\r")]
    Word,
}

#[derive(Debug, Clone, Copy)]
struct RawPiece {
    kind: Piece,
    start: usize,
    end: usize,
}

impl RawPiece {
    fn len(&self) -> usize {
        self.end - self.start
    }

    fn is_blank(&self) -> bool {
        matches!(self.kind, Piece::Space | Piece::Tab)
    }
}

#[derive(Debug, Clone, Copy)]
struct Fence {
    marker: Piece,
    len: usize,
    /// Leading tabs before the opening fence, stripped from every line.
    indent: usize,
}

pub struct Lexer<'src> {
    source: &'src str,
    pieces: Vec<RawPiece>,
    pos: usize,
    pending: VecDeque<Token<'src>>,
    fence: Option<Fence>,
    line_start: usize,
    invalid_at: Option<usize>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pieces: scan(source),
            pos: 0,
            pending: VecDeque::with_capacity(16),
            fence: None,
            line_start: 0,
            invalid_at: None,
            finished: false,
        }
    }

    /// Lexes raw bytes. Input past the first invalid UTF-8 sequence is
    /// replaced by a single `Error` token.
    pub fn from_bytes(bytes: &'src [u8]) -> Self {
        match std::str::from_utf8(bytes) {
            Ok(source) => Self::new(source),
            Err(err) => {
                let valid = err.valid_up_to();
                let source = std::str::from_utf8(&bytes[..valid]).unwrap_or_default();
                let mut lexer = Self::new(source);
                lexer.invalid_at = Some(valid);
                lexer
            }
        }
    }

    /// The text being lexed (the valid prefix for byte input).
    pub fn source(&self) -> &'src str {
        self.source
    }

    fn end_offset(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    fn finish(&mut self) {
        if let Some(offset) = self.invalid_at.take() {
            tracing::debug!(offset, "invalid UTF-8 ends the token stream");
            let at = TextSize::from(offset as u32);
            self.pending
                .push_back(Token::new(TokenKind::Error, TextRange::empty(at), ""));
        }
        self.finished = true;
    }

    fn push(&mut self, kind: TokenKind, range: Range<usize>) {
        let text = &self.source[range.clone()];
        self.pending
            .push_back(Token::new(kind, range_to_text_range(range), text));
    }

    fn push_piece(&mut self, kind: TokenKind, at: usize) {
        let piece = self.pieces[at];
        self.push(kind, piece.start..piece.end);
    }

    fn line_end(&self, from: usize) -> usize {
        self.pieces[from..]
            .iter()
            .position(|p| p.kind == Piece::Newline)
            .map_or(self.pieces.len(), |i| from + i)
    }

    fn lex_line(&mut self) {
        self.line_start = self.pos;
        let end = self.line_end(self.pos);
        match self.fence {
            Some(fence) => self.lex_fenced_line(fence, end),
            None => self.lex_block_line(end),
        }
        self.lex_line_ending(end);
    }

    fn lex_line_ending(&mut self, end: usize) {
        if end >= self.pieces.len() {
            self.pos = end;
            return;
        }

        if self.fence.is_some() {
            self.push_piece(TokenKind::Break, end);
            self.pos = end + 1;
            return;
        }

        // Fold any run of blank lines into one paragraph break.
        let mut last = end;
        let mut at = end + 1;
        loop {
            while at < self.pieces.len() && self.pieces[at].is_blank() {
                at += 1;
            }
            if at < self.pieces.len() && self.pieces[at].kind == Piece::Newline {
                last = at;
                at += 1;
            } else {
                break;
            }
        }

        if last == end {
            self.push_piece(TokenKind::Break, end);
        } else {
            let range = self.pieces[end].start..self.pieces[last].end;
            self.push(TokenKind::Paragraph, range);
        }
        self.pos = last + 1;
    }

    fn lex_fenced_line(&mut self, fence: Fence, end: usize) {
        while self.pos < end
            && self.pos - self.line_start < fence.indent
            && self.pieces[self.pos].kind == Piece::Tab
        {
            self.push_piece(TokenKind::Tab, self.pos);
            self.pos += 1;
        }

        if let Some(close) = self.closing_fence(fence, end) {
            for at in self.pos..close {
                self.push_piece(TokenKind::Space, at);
            }
            self.push_piece(TokenKind::Code, close);
            self.fence = None;
        } else if self.pos < end {
            let range = self.pieces[self.pos].start..self.pieces[end - 1].end;
            self.push(TokenKind::Text, range);
        }
        self.pos = end;
    }

    fn closing_fence(&self, fence: Fence, end: usize) -> Option<usize> {
        let mut at = self.pos;
        while at < end && at - self.pos < CODE_INDENT - 1 && self.pieces[at].kind == Piece::Space {
            at += 1;
        }
        let piece = self.pieces.get(at).filter(|_| at < end)?;
        if piece.kind != fence.marker || piece.len() < fence.len {
            return None;
        }
        self.pieces[at + 1..end]
            .iter()
            .all(RawPiece::is_blank)
            .then_some(at)
    }

    fn lex_block_line(&mut self, end: usize) {
        let mut at = self.pos;
        let mut spaces = 0;
        while at < end {
            match self.pieces[at].kind {
                Piece::Space => {
                    self.push_piece(TokenKind::Space, at);
                    spaces += 1;
                }
                Piece::Tab => self.push_piece(TokenKind::Tab, at),
                _ => break,
            }
            at += 1;
        }

        if spaces >= CODE_INDENT {
            self.lex_inline(at, end);
        } else {
            self.lex_markers(at, end);
        }
        self.pos = end;
    }

    fn lex_markers(&mut self, mut at: usize, end: usize) {
        while at < end {
            let piece = self.pieces[at];

            if matches!(piece.kind, Piece::Stars | Piece::Dashes | Piece::Underscores)
                && let Some(last) = self.thematic_break(at, end)
            {
                self.push(TokenKind::ThematicBreak, piece.start..self.pieces[last].end);
                return;
            }

            match piece.kind {
                Piece::Hashes
                    if piece.len() <= MAX_HEADING_MARKER && self.space_or_end(at + 1, end) =>
                {
                    self.push_piece(TokenKind::Heading, at);
                    at = self.push_spaces(at + 1, end);
                    break;
                }
                Piece::Stars | Piece::Dashes | Piece::Plus
                    if piece.len() == 1 && self.is_space(at + 1, end) =>
                {
                    self.push_piece(TokenKind::ListItem, at);
                    at = self.push_spaces(at + 1, end);
                }
                Piece::Gt => {
                    self.push_piece(TokenKind::Quote, at);
                    at = self.push_spaces(at + 1, end);
                }
                Piece::Backticks | Piece::Tildes
                    if piece.len() >= MIN_FENCE && self.can_open_fence(piece, at, end) =>
                {
                    self.open_fence(at, end);
                    return;
                }
                _ => break,
            }
        }
        self.lex_inline(at, end);
    }

    fn is_space(&self, at: usize, end: usize) -> bool {
        at < end && self.pieces[at].kind == Piece::Space
    }

    fn space_or_end(&self, at: usize, end: usize) -> bool {
        at >= end || self.pieces[at].kind == Piece::Space
    }

    fn push_spaces(&mut self, mut at: usize, end: usize) -> usize {
        while self.is_space(at, end) {
            self.push_piece(TokenKind::Space, at);
            at += 1;
        }
        at
    }

    fn thematic_break(&self, from: usize, end: usize) -> Option<usize> {
        let marker = self.pieces[from].kind;
        let mut count = 0;
        let mut last = from;
        for (i, piece) in self.pieces[from..end].iter().enumerate() {
            if piece.kind == marker {
                count += piece.len();
                last = from + i;
            } else if !piece.is_blank() {
                return None;
            }
        }
        (count >= 3).then_some(last)
    }

    fn can_open_fence(&self, piece: RawPiece, at: usize, end: usize) -> bool {
        // A backtick fence's info string cannot contain backticks.
        piece.kind != Piece::Backticks
            || self.pieces[at + 1..end]
                .iter()
                .all(|p| p.kind != Piece::Backticks)
    }

    fn open_fence(&mut self, at: usize, end: usize) {
        let piece = self.pieces[at];
        self.push_piece(TokenKind::Code, at);
        let indent = self.pieces[self.line_start..at]
            .iter()
            .filter(|p| p.kind == Piece::Tab)
            .count();
        self.fence = Some(Fence {
            marker: piece.kind,
            len: piece.len(),
            indent,
        });

        let mut info = at + 1;
        while info < end && self.pieces[info].is_blank() {
            info += 1;
        }
        if info < end {
            let range = self.pieces[info].start..self.pieces[end - 1].end;
            self.push(TokenKind::Text, range);
        }
    }

    fn lex_inline(&mut self, from: usize, end: usize) {
        let mut text: Option<Range<usize>> = None;
        let mut at = from;

        while at < end {
            let piece = self.pieces[at];

            if piece.kind == Piece::Backticks
                && let Some(close) = self.matching_backticks(at, end)
            {
                self.flush_text(&mut text);
                self.push_piece(TokenKind::InlineCode, at);
                self.push(TokenKind::Text, piece.end..self.pieces[close].start);
                self.push_piece(TokenKind::InlineCode, close);
                at = close + 1;
                continue;
            }

            match piece.kind {
                Piece::Stars | Piece::Underscores if self.is_delimiter_run(piece) => {
                    self.flush_text(&mut text);
                    self.push_delimiter_run(piece);
                }
                Piece::Tildes if piece.len() == 2 => {
                    self.flush_text(&mut text);
                    self.push_piece(TokenKind::Strike, at);
                }
                _ => {
                    let range = text.get_or_insert(piece.start..piece.start);
                    range.end = piece.end;
                }
            }
            at += 1;
        }

        self.flush_text(&mut text);
    }

    fn flush_text(&mut self, text: &mut Option<Range<usize>>) {
        if let Some(range) = text.take() {
            self.push(TokenKind::Text, range);
        }
    }

    fn matching_backticks(&self, at: usize, end: usize) -> Option<usize> {
        let len = self.pieces[at].len();
        self.pieces[at + 1..end]
            .iter()
            .position(|p| p.kind == Piece::Backticks && p.len() == len)
            .map(|i| at + 1 + i)
    }

    /// Characters right before and after a delimiter run.
    fn flanks(&self, piece: RawPiece) -> (Option<char>, Option<char>) {
        let before = self.source[..piece.start].chars().next_back();
        let after = self.source[piece.end..].chars().next();
        (before, after)
    }

    fn is_delimiter_run(&self, piece: RawPiece) -> bool {
        if piece.len() > 3 {
            return false;
        }
        let (before, after) = self.flanks(piece);
        let space_before = before.is_none_or(char::is_whitespace);
        let space_after = after.is_none_or(char::is_whitespace);
        if space_before && space_after {
            return false;
        }
        let intraword = before.is_some_and(char::is_alphanumeric)
            && after.is_some_and(char::is_alphanumeric);
        !(piece.kind == Piece::Underscores && intraword)
    }

    fn push_delimiter_run(&mut self, piece: RawPiece) {
        let (start, end) = (piece.start, piece.end);
        match piece.len() {
            1 => self.push(TokenKind::Emphasis, start..end),
            2 => self.push(TokenKind::Strong, start..end),
            _ => {
                let (before, _) = self.flanks(piece);
                if before.is_none_or(char::is_whitespace) {
                    self.push(TokenKind::Strong, start..start + 2);
                    self.push(TokenKind::Emphasis, start + 2..end);
                } else {
                    self.push(TokenKind::Emphasis, start..start + 1);
                    self.push(TokenKind::Strong, start + 1..end);
                }
            }
        }
    }
}

impl<'src> TokenStream<'src> for Lexer<'src> {
    fn next_item(&mut self) -> Token<'src> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return token;
            }
            if self.finished {
                return Token::eof(self.end_offset());
            }
            if self.pos < self.pieces.len() {
                self.lex_line();
            } else {
                self.finish();
            }
        }
    }

    fn drain(&mut self) {
        self.pending.clear();
        self.pos = self.pieces.len();
        self.fence = None;
        self.invalid_at = None;
        self.finished = true;
    }
}

fn scan(source: &str) -> Vec<RawPiece> {
    let mut pieces = Vec::new();
    let mut lexer = Piece::lexer(source);
    while let Some(result) = lexer.next() {
        let Range { start, end } = lexer.span();
        // Every character matches some pattern; treat anything else as text.
        let kind = result.unwrap_or(Piece::Word);
        pieces.push(RawPiece { kind, start, end });
    }
    pieces
}

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Tokenizes the whole source, terminal `Eof`/`Error` token included.
pub fn lex(source: &str) -> Vec<Token<'_>> {
    collect(Lexer::new(source))
}

pub(crate) fn collect(mut lexer: Lexer<'_>) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_item();
        tokens.push(token);
        if token.kind.ends_input() {
            return tokens;
        }
    }
}
