//! The token record.

use std::ops::Range;

use crate::Category;

/// A categorized slice of the source text.
///
/// `start` is a byte offset into the scanned `&str`. `lexeme` borrows the
/// source, so a token never outlives the text it was scanned from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    pub start: usize,
    pub category: Category,
    pub lexeme: &'src str,
}

impl<'src> Token<'src> {
    #[inline]
    pub const fn new(start: usize, category: Category, lexeme: &'src str) -> Self {
        Token {
            start,
            category,
            lexeme,
        }
    }

    /// Exclusive end offset.
    #[inline]
    pub const fn end(&self) -> usize {
        self.start + self.len()
    }

    /// Byte length of the lexeme.
    #[inline]
    pub const fn len(&self) -> usize {
        self.lexeme.len()
    }

    /// Scanned tokens are never empty; a hand-built one may be.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.lexeme.is_empty()
    }

    #[inline]
    pub const fn span(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Same token with a different category. Position and lexeme are kept.
    #[inline]
    #[must_use]
    pub const fn with_category(self, category: Category) -> Self {
        Token { category, ..self }
    }
}
