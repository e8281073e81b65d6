//! Lazy, cursor-driven token stream.
//!
//! [`Scanner`] pulls one token per `next()` call. Each call tries every rule
//! at most once, so the work per token is bounded and a caller can stop
//! early at no cost. There is no error path: a character no rule accepts
//! becomes a one-character [`Category::Unmatched`] token and scanning
//! continues after it.

use std::iter::FusedIterator;

use tracing::trace;

use crate::rules::first_match;
use crate::{Category, Token};

/// Forward-only iterator over the tokens of a source string.
///
/// Cloning a scanner snapshots its position. To restart from the beginning,
/// call [`scan`] again.
#[derive(Clone, Debug)]
pub struct Scanner<'src> {
    source: &'src str,
    /// Byte offset of the next token. Always on a char boundary.
    pos: usize,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Scanner { source, pos: 0 }
    }

    /// Byte offset where the next token will start.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Text not yet scanned.
    pub fn remaining(&self) -> &'src str {
        &self.source[self.pos..]
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        let rest = self.remaining();
        let ch = rest.chars().next()?;
        let start = self.pos;

        let (category, len) = match first_match(rest) {
            Some(m) => (m.rule.category, m.len),
            None => {
                trace!(offset = start, ch = ?ch, "no rule matched");
                (Category::Unmatched, ch.len_utf8())
            }
        };

        self.pos += len;
        Some(Token::new(start, category, &rest[..len]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // One token per byte at most; at least one while input remains.
        let left = self.source.len() - self.pos;
        (usize::from(left > 0), Some(left))
    }
}

impl FusedIterator for Scanner<'_> {}

/// Scan `source` into raw tokens.
///
/// Identifiers come out as [`Category::IDENTIFIER`]; keyword resolution
/// happens downstream.
pub fn scan(source: &str) -> Scanner<'_> {
    Scanner::new(source)
}
