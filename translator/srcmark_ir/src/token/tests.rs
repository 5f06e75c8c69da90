use super::*;
use crate::Pos;
use pretty_assertions::assert_eq;

// === TokenKind classification ===

#[test]
fn trivia_kinds() {
    assert!(TokenKind::Whitespace.is_trivia());
    assert!(TokenKind::Newline.is_trivia());
    assert!(TokenKind::LineContinuation.is_trivia());
    assert!(TokenKind::Comment.is_trivia());
    assert!(!TokenKind::Name.is_trivia());
    assert!(!TokenKind::Terminate.is_trivia());
}

#[test]
fn synthetic_kinds_are_only_dedent_and_terminate() {
    assert!(TokenKind::Dedent.is_synthetic());
    assert!(TokenKind::Terminate.is_synthetic());
    // Indent is a retyped introducer token, not a synthetic addition.
    assert!(!TokenKind::Indent.is_synthetic());
    assert!(!TokenKind::DocstringStart.is_synthetic());
}

#[test]
fn bracket_classification() {
    for kind in [TokenKind::LParen, TokenKind::LBracket, TokenKind::LBrace] {
        assert!(kind.is_open_bracket());
        assert!(!kind.is_close_bracket());
    }
    for kind in [TokenKind::RParen, TokenKind::RBracket, TokenKind::RBrace] {
        assert!(kind.is_close_bracket());
        assert!(!kind.is_open_bracket());
    }
    assert!(!TokenKind::Colon.is_open_bracket());
}

#[test]
fn discriminants_fit_bitset() {
    assert!(TokenKind::MAX_DISCRIMINANT < 128);
    assert_eq!(TokenKind::Whitespace.discriminant_index(), 0);
    assert_eq!(TokenKind::Eof.discriminant_index(), 81);
}

// === TokenSet ===

#[test]
fn set_membership() {
    let set = TokenSet::new()
        .with(TokenKind::KwIf)
        .with(TokenKind::KwWhile);
    assert!(set.contains(TokenKind::KwIf));
    assert!(set.contains(TokenKind::KwWhile));
    assert!(!set.contains(TokenKind::KwFor));
    assert_eq!(set.count(), 2);
}

#[test]
fn set_union() {
    let a = TokenSet::single(TokenKind::KwDef);
    let b = TokenSet::single(TokenKind::KwClass);
    let both = a.union(b);
    assert!(both.contains(TokenKind::KwDef));
    assert!(both.contains(TokenKind::KwClass));
    assert!(TokenSet::new().is_empty());
    assert!(!both.is_empty());
}

// === Token ===

#[test]
fn synthesized_tokens_have_empty_text() {
    let t = Token::synthesized(TokenKind::Terminate, Pos::new(3, 1));
    assert_eq!(t.text, "");
    assert_eq!(t.pos, Pos::new(3, 1));
    assert!(!t.is_eof());
    assert!(Token::eof(Pos::new(4, 1)).is_eof());
}

#[test]
fn debug_format() {
    let t = Token::new(TokenKind::Name, "spam", Pos::new(2, 5));
    assert_eq!(format!("{t:?}"), "Name(\"spam\") @ 2:5");
    let d = Token::synthesized(TokenKind::Dedent, Pos::new(2, 1));
    assert_eq!(format!("{d:?}"), "Dedent @ 2:1");
}
