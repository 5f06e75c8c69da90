//! Tokens and token classification.

mod kind;
mod set;

pub use kind::TokenKind;
pub use set::TokenSet;

use std::fmt;

use crate::Pos;

/// A classified unit of input: immutable identity (text, position) plus a
/// mutable classification (kind).
///
/// The normalization pipeline retags kinds in place — a colon becomes a
/// block start, a soft keyword becomes a name — but never alters a token's
/// text or position. Synthesized tokens (terminators, block ends) have
/// empty text.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub pos: Pos,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>, pos: Pos) -> Self {
        Token {
            kind,
            text: text.into(),
            pos,
        }
    }

    /// Create a zero-width synthesized token (empty text).
    #[inline]
    pub fn synthesized(kind: TokenKind, pos: Pos) -> Self {
        Token {
            kind,
            text: String::new(),
            pos,
        }
    }

    /// Create an end-of-input token.
    #[inline]
    pub fn eof(pos: Pos) -> Self {
        Token::synthesized(TokenKind::Eof, pos)
    }

    /// Create a dummy token for tests/scripted sources.
    pub fn dummy(kind: TokenKind) -> Self {
        Token::synthesized(kind, Pos::DUMMY)
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text.is_empty() {
            write!(f, "{:?} @ {}", self.kind, self.pos)
        } else {
            write!(f, "{:?}({:?}) @ {}", self.kind, self.text, self.pos)
        }
    }
}

// Token is buffered and reordered constantly in the pipeline; keep it to
// the String plus 16 bytes of kind/position.
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Token;
    const _: () = assert!(std::mem::size_of::<Token>() == 40);
}

#[cfg(test)]
mod tests;
