//! Low-level rule-table scanner for Component Pascal.
//!
//! Converts source text into a lossless stream of [`Token`]s. Every byte of
//! the input is covered by exactly one token, including whitespace and
//! comments. Identifiers are emitted with the generic
//! [`NameClass::Identifier`] class; resolving reserved words and pervasive
//! names is the job of the `cp_lexer` crate.
//!
//! # Architecture
//!
//! ```text
//! &str ──► Scanner (cursor) ──► rules::first_match ──► Token { start, category, lexeme }
//!                                    │
//!                                    └── no rule matched ──► Category::Unmatched (one char)
//! ```
//!
//! The rule table ([`rules::ROOT`]) is static data. Groups are tried in
//! declaration order and the first rule that matches at the cursor wins.

mod category;
pub mod rules;
mod scanner;
mod token;

pub use category::{Category, NameClass};
pub use rules::{GroupKind, Rule, RuleGroup, RuleMatch};
pub use scanner::{scan, Scanner};
pub use token::Token;
