//! Identifier classification post-pass.
//!
//! A 1:1 iterator adapter over raw tokens. Only `Name(Identifier)` tokens are
//! touched; their category is rewritten from the keyword tables. Start offset
//! and lexeme always pass through unchanged, and a second pass is a no-op
//! because rewritten tokens are no longer `Identifier`.

use std::iter::FusedIterator;

use cp_lexer_core::{Category, NameClass, Token};

use crate::keywords;

/// Refine a single token.
#[inline]
pub fn classify_token(token: Token<'_>) -> Token<'_> {
    match token.category {
        Category::Name(NameClass::Identifier) => {
            token.with_category(Category::Name(keywords::lookup(token.lexeme)))
        }
        Category::Name(NameClass::Reserved | NameClass::Pervasive)
        | Category::Whitespace
        | Category::Comment
        | Category::Integer
        | Category::Hex
        | Category::Float
        | Category::String
        | Category::Operator
        | Category::Punctuation
        | Category::Unmatched => token,
    }
}

/// Lazy classifying adapter. Created by [`classify`].
#[derive(Clone, Debug)]
#[must_use = "iterator adapters are lazy and do nothing unless consumed"]
pub struct Classified<I> {
    inner: I,
}

impl<I> Classified<I> {
    /// The wrapped raw token stream.
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<'src, I> Iterator for Classified<I>
where
    I: Iterator<Item = Token<'src>>,
{
    type Item = Token<'src>;

    #[inline]
    fn next(&mut self) -> Option<Token<'src>> {
        self.inner.next().map(classify_token)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'src, I> FusedIterator for Classified<I> where I: FusedIterator<Item = Token<'src>> {}

/// Wrap a token stream so every identifier is resolved against the
/// reserved-word and pervasive-name tables.
pub fn classify<'src, I>(tokens: I) -> Classified<I::IntoIter>
where
    I: IntoIterator<Item = Token<'src>>,
{
    Classified {
        inner: tokens.into_iter(),
    }
}
