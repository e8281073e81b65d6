use super::*;
use pretty_assertions::assert_eq;

/// Helper: match at the start of `input` and return (rule name, lexeme).
fn matched(input: &str) -> Option<(&'static str, &str)> {
    first_match(input).map(|m| (m.rule.name, &input[..m.len]))
}

// === Table shape ===

#[test]
fn root_dispatch_order() {
    let order: Vec<GroupKind> = ROOT.iter().map(|g| g.kind).collect();
    assert_eq!(
        order,
        vec![
            GroupKind::Whitespace,
            GroupKind::Comments,
            GroupKind::Pragmas,
            GroupKind::Identifiers,
            GroupKind::Numbers,
            GroupKind::Strings,
            GroupKind::Operators,
            GroupKind::Punctuation,
        ]
    );
}

#[test]
fn pragma_group_is_an_empty_extension_point() {
    let pragmas = ROOT
        .iter()
        .find(|g| g.kind == GroupKind::Pragmas)
        .map(|g| g.rules.len());
    assert_eq!(pragmas, Some(0));
}

#[test]
fn number_rules_in_disambiguation_order() {
    let numbers: Vec<&str> = NUMBERS.iter().map(|r| r.name).collect();
    assert_eq!(
        numbers,
        vec![
            "char code",
            "hex number",
            "real with exponent",
            "real",
            "integer"
        ]
    );
}

#[test]
fn every_pattern_compiles() {
    let total: usize = ROOT.iter().map(|g| g.rules.len()).sum();
    assert_eq!(TABLE.rules.len(), total);
}

#[test]
fn group_names() {
    assert_eq!(GroupKind::Numbers.name(), "numbers");
    assert_eq!(GroupKind::Pragmas.name(), "pragmas");
}

// === Whitespace ===

#[test]
fn newline_run_is_split_from_following_spaces() {
    assert_eq!(matched("\n\n  x"), Some(("blank lines", "\n\n")));
    assert_eq!(matched("  \n x"), Some(("spaces", "  \n ")));
}

#[test]
fn unicode_whitespace() {
    assert_eq!(matched("\u{a0}\u{2003}x"), Some(("spaces", "\u{a0}\u{2003}")));
}

#[test]
fn information_separators_are_whitespace() {
    assert_eq!(matched("\u{1c}\u{1f}x"), Some(("spaces", "\u{1c}\u{1f}")));
    assert_eq!(matched(" \u{1e}\t"), Some(("spaces", " \u{1e}\t")));
}

// === Comments ===

#[test]
fn comment_spans_lines() {
    assert_eq!(
        matched("(* one\ntwo *) x"),
        Some(("block comment", "(* one\ntwo *)"))
    );
}

#[test]
fn comment_closes_at_first_terminator() {
    assert_eq!(
        matched("(* a (* b *) c *)"),
        Some(("block comment", "(* a (* b *)"))
    );
}

#[test]
fn dollar_after_opener_is_not_a_comment() {
    // `(*$` is pragma syntax; falls through to punctuation.
    assert_eq!(matched("(*$X+*)"), Some(("punctuation", "(")));
}

#[test]
fn empty_comment_needs_a_body_character() {
    assert_eq!(matched("(**)"), Some(("punctuation", "(")));
    assert_eq!(matched("(* *)"), Some(("block comment", "(* *)")));
}

#[test]
fn unterminated_comment_does_not_match() {
    assert_eq!(matched("(* never closed"), Some(("punctuation", "(")));
}

// === Identifiers ===

#[test]
fn identifier_forms() {
    assert_eq!(matched("Foo_1 "), Some(("identifier", "Foo_1")));
    assert_eq!(matched("$tmp$2"), Some(("identifier", "$tmp$2")));
    assert_eq!(matched("_x"), Some(("identifier", "_x")));
    assert_eq!(matched("naïve"), Some(("identifier", "naïve")));
}

#[test]
fn identifier_continues_through_numbers_of_any_script() {
    assert_eq!(matched("a²b "), Some(("identifier", "a²b")));
    assert_eq!(matched("x\u{0663}\u{2163}"), Some(("identifier", "x\u{0663}\u{2163}")));
}

#[test]
fn combining_mark_ends_identifier() {
    assert_eq!(matched("a\u{301}b"), Some(("identifier", "a")));
}

#[test]
fn identifiers_shadow_hex_lookalikes() {
    assert_eq!(matched("ABX"), Some(("identifier", "ABX")));
    assert_eq!(matched("FFH"), Some(("identifier", "FFH")));
}

// === Numbers ===

#[test]
fn numeric_disambiguation() {
    assert_eq!(matched("7X"), Some(("char code", "7X")));
    assert_eq!(matched("0DX"), Some(("char code", "0DX")));
    assert_eq!(matched("1AH"), Some(("hex number", "1AH")));
    assert_eq!(matched("0FFFFFFFFL"), Some(("hex number", "0FFFFFFFFL")));
    assert_eq!(
        matched("3.14E+10"),
        Some(("real with exponent", "3.14E+10"))
    );
    assert_eq!(matched("2.5E-3;"), Some(("real with exponent", "2.5E-3")));
    assert_eq!(matched("3.14"), Some(("real", "3.14")));
    assert_eq!(matched("123"), Some(("integer", "123")));
}

#[test]
fn exponent_requires_sign() {
    assert_eq!(matched("3.14E10"), Some(("real", "3.14")));
}

#[test]
fn lowercase_hex_digits_are_not_hex() {
    assert_eq!(matched("1ah"), Some(("integer", "1")));
}

#[test]
fn integer_before_range() {
    assert_eq!(matched("1..10"), Some(("integer", "1")));
    assert_eq!(matched("1."), Some(("integer", "1")));
}

// === Strings ===

#[test]
fn single_and_double_quoted() {
    assert_eq!(matched("'abc' x"), Some(("single quoted", "'abc'")));
    assert_eq!(matched(r#""abc" x"#), Some(("double quoted", r#""abc""#)));
}

#[test]
fn escaped_quote_does_not_terminate() {
    assert_eq!(matched(r"'it\'s'"), Some(("single quoted", r"'it\'s'")));
    assert_eq!(
        matched(r#""say \"hi\"""#),
        Some(("double quoted", r#""say \"hi\"""#))
    );
}

#[test]
fn escaped_backslash_before_closing_quote() {
    assert_eq!(matched(r"'a\\'b'"), Some(("single quoted", r"'a\\'")));
}

#[test]
fn string_may_span_lines() {
    assert_eq!(matched("'a\nb'"), Some(("single quoted", "'a\nb'")));
}

#[test]
fn other_quote_kind_inside_string() {
    assert_eq!(matched(r#"'say "x"'"#), Some(("single quoted", r#"'say "x"'"#)));
}

#[test]
fn unterminated_string_does_not_match() {
    assert_eq!(matched("'abc"), None);
    assert_eq!(matched("\"abc"), None);
}

// === Operators & punctuation ===

#[test]
fn single_char_operators() {
    for op in ["*", "/", "+", "=", "#", "~", "&", "<", ">", "^", "-"] {
        assert_eq!(matched(op), Some(("operator", op)), "operator {op:?}");
    }
}

#[test]
fn compound_operators_beat_punctuation() {
    assert_eq!(matched(":= 1"), Some(("assignment", ":=")));
    assert_eq!(matched("..N"), Some(("range", "..")));
}

#[test]
fn punctuation() {
    for p in ["(", ")", "[", "]", "{", "}", ",", ".", ":", ";", "|"] {
        assert_eq!(matched(p), Some(("punctuation", p)), "punctuation {p:?}");
    }
}

#[test]
fn relational_pairs_are_two_tokens() {
    assert_eq!(matched("<="), Some(("operator", "<")));
}

// === No match ===

#[test]
fn characters_outside_every_rule() {
    for s in ["@", "!", "?", "%", "\\", "\u{0}", "\u{7}", "€"] {
        assert_eq!(first_match(s), None, "{s:?} should not match");
    }
}

#[test]
fn match_reports_group() {
    let m = first_match("MODULE");
    assert_eq!(m.map(|m| m.group), Some(GroupKind::Identifiers));
    assert_eq!(m.map(|m| m.rule.category), Some(Category::IDENTIFIER));
}
