use srcmark_ir::{LanguageProfile, Token, TokenKind, TokenSource};

use crate::embedded_newlines;

/// Promotes a block's leading string literal to documentation kinds.
///
/// A string literal is a docstring when it is the first statement of a
/// block opened by a documentable header (`def`, `class`). The stage
/// watches for a header kind, then for the `Indent` that opens its
/// block, and retypes the next substantive token if it starts a string
/// literal: `StringStart`/`CharStart` becomes `DocstringStart` and the
/// literal's matching end token becomes `DocstringEnd`.
///
/// The watch is one-shot. Whatever the first substantive token turns
/// out to be, the decision is made and the watch drops back to idle,
/// so only the leading literal of a block is ever promoted.
///
/// A promoted literal often spans several lines while its end token is
/// stamped with the line the literal began on. The end token's line is
/// rewritten to the literal's final line so downstream line tracking
/// stays monotonic.
pub struct DocstringFilter<S> {
    upstream: S,
    profile: LanguageProfile,
    watch: Watch,
    /// The literal being read is a docstring, promote its end token.
    promote_end: bool,
}

/// Progress toward a promotion decision.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Watch {
    /// No documentable header in flight.
    Idle,
    /// A documentable header kind has been seen.
    HeaderSeen,
    /// That header's block has opened, the next substantive token
    /// decides.
    BlockOpened,
}

impl<S: TokenSource> DocstringFilter<S> {
    pub fn new(upstream: S, profile: LanguageProfile) -> Self {
        DocstringFilter {
            upstream,
            profile,
            watch: Watch::Idle,
            promote_end: false,
        }
    }
}

impl<S: TokenSource> TokenSource for DocstringFilter<S> {
    fn next_token(&mut self) -> Token {
        let mut token = self.upstream.next_token();
        match token.kind {
            kind if self.profile.doc_headers.contains(kind) => {
                self.watch = Watch::HeaderSeen;
            }
            TokenKind::Indent if self.watch == Watch::HeaderSeen => {
                self.watch = Watch::BlockOpened;
            }
            kind if kind.is_trivia() => {}
            TokenKind::StringStart | TokenKind::CharStart if self.watch == Watch::BlockOpened => {
                tracing::trace!(line = token.pos.line, "docstring promoted");
                token.kind = TokenKind::DocstringStart;
                self.promote_end = true;
                self.watch = Watch::Idle;
            }
            TokenKind::StringEnd | TokenKind::CharEnd if self.promote_end => {
                token.kind = TokenKind::DocstringEnd;
                // the literal may span lines, stamp its final line
                token.pos.line += embedded_newlines(&token.text);
                self.promote_end = false;
            }
            _ => {
                if self.watch == Watch::BlockOpened {
                    // first substantive token of the block was not a
                    // string, the block has no docstring
                    self.watch = Watch::Idle;
                } else if token.kind == TokenKind::Terminate {
                    // statement ended without opening a block
                    self.watch = Watch::Idle;
                }
                // header tokens between the keyword and the block
                // introducer pass through untouched
            }
        }
        token
    }
}
