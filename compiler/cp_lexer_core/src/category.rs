//! Token categories.

use std::fmt;

/// Refinement of the name family.
///
/// The scanner only ever produces [`NameClass::Identifier`]. The classifier
/// post-pass rewrites it to `Reserved` or `Pervasive` by table lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NameClass {
    /// Plain user identifier.
    Identifier,
    /// Reserved word such as `MODULE` or `BEGIN`.
    Reserved,
    /// Predeclared name such as `INTEGER` or `NEW`.
    Pervasive,
}

/// Closed set of token categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Whitespace,
    /// `(* ... *)` block comment (never nested).
    Comment,
    Name(NameClass),
    /// Decimal whole number, e.g. `123`.
    Integer,
    /// Hexadecimal number (`1AH`, `0FFL`) or character code (`7X`).
    Hex,
    /// Real number, with or without a signed exponent.
    Float,
    /// Single- or double-quoted string literal.
    String,
    Operator,
    Punctuation,
    /// One character no rule could match.
    Unmatched,
}

impl Category {
    /// Category the scanner assigns to every identifier.
    pub const IDENTIFIER: Category = Category::Name(NameClass::Identifier);

    /// Dotted token-type path understood by highlighting hosts.
    pub const fn token_type(self) -> &'static str {
        match self {
            Category::Whitespace => "Token.Text",
            Category::Comment => "Token.Comment.Multiline",
            Category::Name(NameClass::Identifier) => "Token.Name",
            Category::Name(NameClass::Reserved) => "Token.Keyword.Reserved",
            Category::Name(NameClass::Pervasive) => "Token.Keyword.Pervasive",
            Category::Integer => "Token.Literal.Number.Integer",
            Category::Hex => "Token.Literal.Number.Hex",
            Category::Float => "Token.Literal.Number.Float",
            Category::String => "Token.Literal.String",
            Category::Operator => "Token.Operator",
            Category::Punctuation => "Token.Punctuation",
            Category::Unmatched => "Token.Error",
        }
    }

    /// Short lowercase label.
    pub const fn label(self) -> &'static str {
        match self {
            Category::Whitespace => "whitespace",
            Category::Comment => "comment",
            Category::Name(NameClass::Identifier) => "identifier",
            Category::Name(NameClass::Reserved) => "reserved",
            Category::Name(NameClass::Pervasive) => "pervasive",
            Category::Integer => "integer",
            Category::Hex => "hex",
            Category::Float => "float",
            Category::String => "string",
            Category::Operator => "operator",
            Category::Punctuation => "punctuation",
            Category::Unmatched => "unmatched",
        }
    }

    /// Whitespace and comments.
    pub const fn is_trivia(self) -> bool {
        matches!(self, Category::Whitespace | Category::Comment)
    }

    /// Any member of the name family, whatever its class.
    pub const fn is_name(self) -> bool {
        matches!(self, Category::Name(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests;
