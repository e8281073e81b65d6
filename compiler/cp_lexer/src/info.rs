//! Registration metadata.
//!
//! Hosts (highlighters, editors, the `cplex` CLI) use this to decide which
//! files and names select the Component Pascal lexer. Nothing here affects
//! tokenization.

use std::path::Path;

use glob::Pattern;

/// Static description of a lexer for host registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexerInfo {
    /// Display name.
    pub name: &'static str,
    /// Short names a user may pass to select the lexer.
    pub aliases: &'static [&'static str],
    /// Filename glob patterns.
    pub filenames: &'static [&'static str],
    pub mime_types: &'static [&'static str],
}

/// Metadata for the Component Pascal lexer.
pub const COMPONENT_PASCAL: LexerInfo = LexerInfo {
    name: "Component Pascal",
    aliases: &["ComponentPascal", "CP"],
    filenames: &["*.cp", "*.cps"],
    mime_types: &["text/x-component-pascal"],
};

impl LexerInfo {
    /// Whether the final component of `path` matches one of the filename
    /// patterns. Matching is case-sensitive; a malformed pattern matches
    /// nothing.
    pub fn matches_filename(&self, path: impl AsRef<Path>) -> bool {
        let Some(file_name) = path.as_ref().file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.filenames
            .iter()
            .any(|pattern| Pattern::new(pattern).is_ok_and(|p| p.matches(file_name)))
    }

    /// ASCII case-insensitive alias match.
    pub fn matches_alias(&self, alias: &str) -> bool {
        self.aliases.iter().any(|a| a.eq_ignore_ascii_case(alias))
    }

    pub fn matches_mime_type(&self, mime: &str) -> bool {
        self.mime_types.iter().any(|m| m.eq_ignore_ascii_case(mime))
    }
}
