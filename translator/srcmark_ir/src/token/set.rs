//! Bitset over token kinds.

use super::TokenKind;

// Compile-time assertion: TokenSet uses a u128 bitset, so all discriminant
// indices must fit in 0..127. If this fails, TokenSet needs a wider backing
// type.
const _: () = assert!(
    TokenKind::MAX_DISCRIMINANT < 128,
    "TokenSet uses u128 bitset; all discriminant indices must be < 128"
);

/// A set of token kinds with O(1) membership testing.
///
/// Each bit of the `u128` corresponds to a [`TokenKind`] discriminant
/// index. Language profiles are built from these in const context.
///
/// # Example
/// ```
/// use srcmark_ir::{TokenKind, TokenSet};
///
/// const HEADERS: TokenSet = TokenSet::new()
///     .with(TokenKind::KwDef)
///     .with(TokenKind::KwClass);
///
/// assert!(HEADERS.contains(TokenKind::KwDef));
/// assert!(!HEADERS.contains(TokenKind::Name));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenSet(u128);

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Create a token set containing a single kind.
    #[inline]
    pub const fn single(kind: TokenKind) -> Self {
        Self(1u128 << kind.discriminant_index())
    }

    /// Add a kind to this set (builder pattern for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u128 << kind.discriminant_index()))
    }

    /// Union of two sets.
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Check membership.
    #[inline]
    pub const fn contains(self, kind: TokenKind) -> bool {
        (self.0 & (1u128 << kind.discriminant_index())) != 0
    }

    /// Check if this set is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of kinds in this set.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }
}

impl Default for TokenSet {
    fn default() -> Self {
        Self::new()
    }
}
