//! Token-stream normalization between a raw lexer and a grammar-driven
//! parser.
//!
//! Indentation-sensitive sources carry structure the raw token stream
//! does not spell out: statements end at line breaks, blocks open at a
//! trailing introducer and close when indentation recedes, and a handful
//! of identifiers only act as keywords in particular shapes. The stages
//! in this crate rewrite a raw stream into one a context-free grammar
//! can consume directly:
//!
//! ```text
//! raw lexer
//!     |
//!     v
//! KeywordFilter    soft keywords resolved to Name or keyword kind
//!     |
//!     v
//! TerminateFilter  Terminate synthesized at statement boundaries
//!     |
//!     v
//! OffsideFilter    Indent retyped, Dedent synthesized at block ends
//!     |
//!     v
//! DocstringFilter  leading string literals promoted to doc kinds
//! ```
//!
//! Every stage implements [`TokenSource`] over a generic upstream, so
//! stages compose by nesting and can be tested in isolation against a
//! scripted source. [`Pipeline`] wires the full chain in the order
//! above; [`normalize`] drains it into a `Vec` for batch callers.
//!
//! The chain is lossless for non-trivia input: stages retype or insert
//! tokens but never drop or reorder what the lexer produced, so
//! downstream consumers can still reconstruct the source text.

mod brackets;
mod buffer;
mod docstring;
mod keyword;
mod offside;
mod scripted;
mod terminate;

pub use crate::docstring::DocstringFilter;
pub use crate::keyword::KeywordFilter;
pub use crate::offside::OffsideFilter;
pub use crate::scripted::ScriptedSource;
pub use crate::terminate::TerminateFilter;

use srcmark_ir::{LanguageProfile, Token, TokenKind, TokenSource};

/// The full normalization chain over an arbitrary upstream source.
pub struct Pipeline<S: TokenSource> {
    inner: DocstringFilter<OffsideFilter<TerminateFilter<KeywordFilter<S>>>>,
}

impl<S: TokenSource> Pipeline<S> {
    pub fn new(source: S, profile: LanguageProfile) -> Self {
        let keyword = KeywordFilter::new(source, profile);
        let terminate = TerminateFilter::new(keyword, profile);
        let offside = OffsideFilter::new(terminate, profile);
        let docstring = DocstringFilter::new(offside, profile);
        Pipeline { inner: docstring }
    }
}

impl<S: TokenSource> TokenSource for Pipeline<S> {
    fn next_token(&mut self) -> Token {
        self.inner.next_token()
    }
}

/// Newlines embedded in a token's text. Nonzero only for tokens whose
/// text spans lines, such as the end half of a multi-line string.
pub(crate) fn embedded_newlines(text: &str) -> u32 {
    u32::try_from(text.bytes().filter(|&b| b == b'\n').count()).unwrap_or(u32::MAX)
}

/// Drains the full pipeline into a vector, `Eof` token included.
pub fn normalize<S: TokenSource>(source: S, profile: LanguageProfile) -> Vec<Token> {
    let mut pipeline = Pipeline::new(source, profile);
    let mut tokens = Vec::new();
    loop {
        let token = pipeline.next_token();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}
