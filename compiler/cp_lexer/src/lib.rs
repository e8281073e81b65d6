//! Component Pascal lexer.
//!
//! Two stages, both lazy:
//!
//! ```text
//! &str ──► cp_lexer_core::scan ──► raw tokens ──► classify ──► refined tokens
//!                                   Name(Identifier)          Name(Reserved)
//!                                                             Name(Pervasive)
//!                                                             Name(Identifier)
//! ```
//!
//! [`tokenize`] runs both stages. The output is lossless: concatenating every
//! lexeme reproduces the input, and offsets are strictly increasing with no
//! gaps. Characters no rule accepts become [`Category::Unmatched`] tokens, so
//! tokenization cannot fail.
//!
//! ```
//! use cp_lexer::{tokenize, Category, NameClass};
//!
//! let kinds: Vec<Category> = tokenize("MODULE M;").map(|t| t.category).collect();
//! assert_eq!(kinds[0], Category::Name(NameClass::Reserved));
//! assert_eq!(kinds[2], Category::Name(NameClass::Identifier));
//! ```

mod classify;
mod info;
mod keywords;

pub use classify::{classify, classify_token, Classified};
pub use info::{LexerInfo, COMPONENT_PASCAL};
pub use keywords::{is_pervasive_name, is_reserved_word, lookup, PERVASIVE_NAMES, RESERVED_WORDS};

// Re-export the core types so hosts depend on one crate.
pub use cp_lexer_core::{rules, scan, Category, NameClass, Scanner, Token};

/// Fully classified token stream over one source string.
pub type Tokens<'src> = Classified<Scanner<'src>>;

/// Tokenize Component Pascal source.
///
/// Returns a lazy iterator; no work happens until it is polled.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize(source: &str) -> Tokens<'_> {
    classify(scan(source))
}
