//! Shared token vocabulary for the srcmark translator.
//!
//! This crate defines the types every stage of the translator exchanges:
//! the [`Token`] itself, its closed [`TokenKind`] vocabulary (raw lexical
//! kinds plus the synthesized structural kinds the normalization pipeline
//! adds), source [`Pos`]itions, bitset [`TokenSet`]s for O(1) kind
//! classification, and the [`TokenSource`] pull interface that the raw
//! lexer, every filter stage, and the grammar-driven parser share.
//!
//! Per-language configuration lives in [`LanguageProfile`]: which token
//! introduces a block, which kinds expect one, which soft keywords need
//! disambiguation. Only the Python profile is defined here; other
//! indentation-sensitive front ends supply their own.
//!
//! No stage-local state belongs in this crate — it is vocabulary only, so
//! external tools can consume token streams without pulling in the
//! pipeline.

mod pos;
mod profile;
mod source;
mod token;

pub use pos::Pos;
pub use profile::{IndentPolicy, LanguageProfile};
pub use source::TokenSource;
pub use token::{Token, TokenKind, TokenSet};
