//! The pull interface shared by every stage of the translator.

use crate::Token;

/// A pull-based, forward-only source of tokens.
///
/// The raw lexer, every normalization filter, and the downstream parser
/// exchange tokens exclusively through this interface, so stages compose
/// arbitrarily and can be tested in isolation against a scripted source.
///
/// # Contract
///
/// - Ordered and non-restartable: each call hands ownership of the next
///   token to the caller exactly once.
/// - Fused at end of input: after the first `Eof` token, every subsequent
///   call returns another `Eof` token (same position). Unbounded-lookahead
///   loops rely on this to terminate.
pub trait TokenSource {
    /// Pull the next token.
    fn next_token(&mut self) -> Token;
}

impl<S: TokenSource + ?Sized> TokenSource for Box<S> {
    fn next_token(&mut self) -> Token {
        (**self).next_token()
    }
}

impl<S: TokenSource + ?Sized> TokenSource for &mut S {
    fn next_token(&mut self) -> Token {
        (**self).next_token()
    }
}
