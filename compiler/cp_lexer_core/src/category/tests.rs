use super::*;
use pretty_assertions::assert_eq;

const ALL: [Category; 12] = [
    Category::Whitespace,
    Category::Comment,
    Category::Name(NameClass::Identifier),
    Category::Name(NameClass::Reserved),
    Category::Name(NameClass::Pervasive),
    Category::Integer,
    Category::Hex,
    Category::Float,
    Category::String,
    Category::Operator,
    Category::Punctuation,
    Category::Unmatched,
];

#[test]
fn token_types_are_dotted_paths() {
    for category in ALL {
        assert!(
            category.token_type().starts_with("Token."),
            "{category:?} has token type {}",
            category.token_type()
        );
    }
}

#[test]
fn keyword_token_types() {
    assert_eq!(
        Category::Name(NameClass::Reserved).token_type(),
        "Token.Keyword.Reserved"
    );
    assert_eq!(
        Category::Name(NameClass::Pervasive).token_type(),
        "Token.Keyword.Pervasive"
    );
    assert_eq!(Category::IDENTIFIER.token_type(), "Token.Name");
    assert_eq!(Category::Unmatched.token_type(), "Token.Error");
}

#[test]
fn labels_are_unique() {
    let mut labels: Vec<&str> = ALL.iter().map(|c| c.label()).collect();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), ALL.len());
}

#[test]
fn display_uses_label() {
    assert_eq!(Category::Float.to_string(), "float");
    assert_eq!(Category::Name(NameClass::Pervasive).to_string(), "pervasive");
}

#[test]
fn trivia() {
    assert!(Category::Whitespace.is_trivia());
    assert!(Category::Comment.is_trivia());
    assert!(!Category::String.is_trivia());
    assert!(!Category::Unmatched.is_trivia());
}

#[test]
fn name_family() {
    assert!(Category::IDENTIFIER.is_name());
    assert!(Category::Name(NameClass::Reserved).is_name());
    assert!(!Category::Integer.is_name());
}
