//! Reserved-word and pervasive-name tables.
//!
//! Both tables are sorted, uppercase, and disjoint, so a lookup is two binary
//! searches over `&'static str` slices with no allocation and no
//! initialisation cost. Matching is exact: Component Pascal is case-sensitive,
//! so `Module` and `module` are plain identifiers.

use cp_lexer_core::NameClass;

/// The 40 reserved words.
pub const RESERVED_WORDS: &[&str] = &[
    "ABSTRACT",
    "ARRAY",
    "BEGIN",
    "BY",
    "CASE",
    "CLOSE",
    "CONST",
    "DIV",
    "DO",
    "ELSE",
    "ELSIF",
    "EMPTY",
    "END",
    "EXIT",
    "EXTENSIBLE",
    "FOR",
    "IF",
    "IMPORT",
    "IN",
    "IS",
    "LIMITED",
    "LOOP",
    "MOD",
    "MODULE",
    "NIL",
    "OF",
    "OR",
    "OUT",
    "POINTER",
    "PROCEDURE",
    "RECORD",
    "REPEAT",
    "RETURN",
    "THEN",
    "TO",
    "TYPE",
    "UNTIL",
    "VAR",
    "WHILE",
    "WITH",
];

/// The 36 predeclared (pervasive) names.
pub const PERVASIVE_NAMES: &[&str] = &[
    "ABS",
    "ANYPTR",
    "ANYREC",
    "ASH",
    "ASSERT",
    "BITS",
    "BOOLEAN",
    "BYTE",
    "CAP",
    "CHAR",
    "CHR",
    "DEC",
    "ENTIER",
    "EXCL",
    "FALSE",
    "HALT",
    "INC",
    "INCL",
    "INF",
    "INTEGER",
    "LEN",
    "LONG",
    "LONGINT",
    "MAX",
    "MIN",
    "NEW",
    "ODD",
    "ORD",
    "REAL",
    "SET",
    "SHORT",
    "SHORTCHAR",
    "SHORTINT",
    "SHORTREAL",
    "SIZE",
    "TRUE",
];

#[inline]
pub fn is_reserved_word(text: &str) -> bool {
    RESERVED_WORDS.binary_search(&text).is_ok()
}

#[inline]
pub fn is_pervasive_name(text: &str) -> bool {
    PERVASIVE_NAMES.binary_search(&text).is_ok()
}

/// Classify an identifier's text.
///
/// Reserved words are checked first, so if the tables ever overlapped the
/// reserved reading would win.
#[inline]
pub fn lookup(text: &str) -> NameClass {
    // Every entry is 2..=10 ASCII uppercase letters.
    let first_upper = text.as_bytes().first().is_some_and(u8::is_ascii_uppercase);
    if !first_upper || !(2..=10).contains(&text.len()) {
        return NameClass::Identifier;
    }
    if is_reserved_word(text) {
        NameClass::Reserved
    } else if is_pervasive_name(text) {
        NameClass::Pervasive
    } else {
        NameClass::Identifier
    }
}
