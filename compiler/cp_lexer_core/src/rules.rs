//! Ordered lexical rule table.
//!
//! The table is plain data: a fixed sequence of [`RuleGroup`]s, each holding
//! an ordered slice of [`Rule`]s. Matching is first-match-wins at two levels:
//!
//! 1. Groups are tried in [`ROOT`] order.
//! 2. Within a group, rules are tried in declaration order.
//!
//! This is not longest-match. `12.5` reaches the number group and the
//! real-number rule claims it before the integer rule is consulted; `ABX`
//! never reaches the number group at all because identifiers are tried first.
//!
//! Every pattern is compiled once, wrapped as `\A(?:pattern)`, and run with
//! leftmost-first semantics. Alternation order and greediness inside a single
//! pattern therefore pick the span a backtracking engine would pick, which is
//! what makes `'a\\'b'` end after the escaped backslash.
//!
//! # Table
//!
//! | Group | Rule | Category |
//! |-------|------|----------|
//! | whitespace | `\n+`, `[\s\x1C-\x1F]+` | `Whitespace` |
//! | comments | `(* ... *)`, first `*)` closes | `Comment` |
//! | pragmas | *(empty)* | |
//! | identifiers | `[a-zA-Z_$][\p{L}\p{N}_$]*` | `Name(Identifier)` |
//! | numbers | `7X`, `1AH`, `3.1E+2`, `3.1`, `31` | `Hex`, `Float`, `Integer` |
//! | strings | `'...'`, `"..."` with `\\` and `\'`/`\"` | `String` |
//! | operators | `* / + = # ~ & < > ^ -`, `:=`, `..` | `Operator` |
//! | punctuation | `( ) [ ] { } , . : ; \|` | `Punctuation` |

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::{Category, NameClass};

/// Named rule-set. The discriminant order is the dispatch order of [`ROOT`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GroupKind {
    Whitespace,
    Comments,
    /// Reserved for `(*$ ... *)` directives. Currently holds no rules.
    Pragmas,
    Identifiers,
    Numbers,
    Strings,
    Operators,
    Punctuation,
}

impl GroupKind {
    pub const fn name(self) -> &'static str {
        match self {
            GroupKind::Whitespace => "whitespace",
            GroupKind::Comments => "comments",
            GroupKind::Pragmas => "pragmas",
            GroupKind::Identifiers => "identifiers",
            GroupKind::Numbers => "numbers",
            GroupKind::Strings => "strings",
            GroupKind::Operators => "operators",
            GroupKind::Punctuation => "punctuation",
        }
    }
}

/// One pattern-to-category rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rule {
    /// Human-readable name, used in logs and tests.
    pub name: &'static str,
    /// Regular expression, matched only at the cursor.
    pub pattern: &'static str,
    pub category: Category,
}

impl Rule {
    const fn new(name: &'static str, pattern: &'static str, category: Category) -> Self {
        Rule {
            name,
            pattern,
            category,
        }
    }
}

/// An ordered slice of rules sharing a purpose.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleGroup {
    pub kind: GroupKind,
    pub rules: &'static [Rule],
}

// === Groups ===

// Unicode `\s` plus the information separators U+001C..=U+001F.
const WHITESPACE: &[Rule] = &[
    Rule::new("blank lines", r"\n+", Category::Whitespace),
    Rule::new("spaces", r"[\s\x1C-\x1F]+", Category::Whitespace),
];

// Non-greedy: the first `*)` closes the comment, even after an inner `(*`.
// The first body character may not be `$`, which introduces a pragma.
const COMMENTS: &[Rule] = &[Rule::new(
    "block comment",
    r"(?s)\(\*[^$].*?\*\)",
    Category::Comment,
)];

const PRAGMAS: &[Rule] = &[];

// Word characters are letters and numbers of any script (`No` such as `²`
// included). Combining marks are not word characters.
const IDENTIFIERS: &[Rule] = &[Rule::new(
    "identifier",
    r"[a-zA-Z_$][\p{L}\p{N}_$]*",
    Category::Name(NameClass::Identifier),
)];

// Order resolves shared digit prefixes: suffixed hex forms first, then reals
// (exponent before plain), then the bare integer.
const NUMBERS: &[Rule] = &[
    Rule::new("char code", r"[0-9A-F]+X", Category::Hex),
    Rule::new("hex number", r"[0-9A-F]+[HL]", Category::Hex),
    Rule::new(
        "real with exponent",
        r"[0-9]+\.[0-9]+E[+-][0-9]+",
        Category::Float,
    ),
    Rule::new("real", r"[0-9]+\.[0-9]+", Category::Float),
    Rule::new("integer", r"[0-9]+", Category::Integer),
];

const STRINGS: &[Rule] = &[
    Rule::new("single quoted", r"'(?:\\\\|\\'|[^'])*'", Category::String),
    Rule::new("double quoted", r#""(?:\\\\|\\"|[^"])*""#, Category::String),
];

// `^` (pointer dereference) is part of the single-character class.
const OPERATORS: &[Rule] = &[
    Rule::new("operator", r"[*/+=#~&<>^-]", Category::Operator),
    Rule::new("assignment", r":=", Category::Operator),
    Rule::new("range", r"\.\.", Category::Operator),
];

const PUNCTUATION: &[Rule] = &[Rule::new(
    "punctuation",
    r"[()\[\]{},.:;|]",
    Category::Punctuation,
)];

/// The root rule-set, in dispatch order.
pub static ROOT: &[RuleGroup] = &[
    RuleGroup {
        kind: GroupKind::Whitespace,
        rules: WHITESPACE,
    },
    RuleGroup {
        kind: GroupKind::Comments,
        rules: COMMENTS,
    },
    RuleGroup {
        kind: GroupKind::Pragmas,
        rules: PRAGMAS,
    },
    RuleGroup {
        kind: GroupKind::Identifiers,
        rules: IDENTIFIERS,
    },
    RuleGroup {
        kind: GroupKind::Numbers,
        rules: NUMBERS,
    },
    RuleGroup {
        kind: GroupKind::Strings,
        rules: STRINGS,
    },
    RuleGroup {
        kind: GroupKind::Operators,
        rules: OPERATORS,
    },
    RuleGroup {
        kind: GroupKind::Punctuation,
        rules: PUNCTUATION,
    },
];

// === Compiled table ===

/// A rule together with its anchored matcher.
struct CompiledRule {
    group: GroupKind,
    rule: &'static Rule,
    regex: Regex,
}

/// [`ROOT`] flattened in dispatch order, patterns compiled.
struct RuleTable {
    rules: Vec<CompiledRule>,
}

impl RuleTable {
    fn compile(groups: &'static [RuleGroup]) -> Result<Self, regex::Error> {
        let mut rules = Vec::new();
        for group in groups {
            for rule in group.rules {
                let regex = Regex::new(&format!(r"\A(?:{})", rule.pattern))?;
                rules.push(CompiledRule {
                    group: group.kind,
                    rule,
                    regex,
                });
            }
        }
        debug!(rules = rules.len(), "compiled lexical rule table");
        Ok(RuleTable { rules })
    }
}

#[allow(
    clippy::expect_used,
    reason = "patterns are compile-time constants; every one is exercised by the rule tests"
)]
static TABLE: LazyLock<RuleTable> =
    LazyLock::new(|| RuleTable::compile(ROOT).expect("lexical rule patterns must compile"));

/// Result of matching the rule table at one position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleMatch {
    pub group: GroupKind,
    pub rule: &'static Rule,
    /// Byte length of the matched lexeme. Always non-zero.
    pub len: usize,
}

/// Find the first rule, in dispatch order, that matches at the start of `input`.
///
/// Zero-length matches are ignored so a successful match always advances
/// the cursor. Returns `None` when nothing matches; the caller decides how
/// to recover.
pub fn first_match(input: &str) -> Option<RuleMatch> {
    TABLE.rules.iter().find_map(|compiled| {
        let len = compiled.regex.find(input)?.end();
        (len > 0).then_some(RuleMatch {
            group: compiled.group,
            rule: compiled.rule,
            len,
        })
    })
}

#[cfg(test)]
mod tests;
