//! Per-language configuration for the normalization pipeline.
//!
//! The pipeline is reused across indentation-sensitive front ends; what
//! varies per language is which token introduces a block, which statement
//! kinds expect one, and which identifiers are soft keywords. Only the
//! Python profile is defined in full.

use crate::{TokenKind, TokenSet};

/// How the off-side engine treats indentation that does not divide evenly
/// by the learned columns-per-indent width.
///
/// The legacy behavior is ceiling division — a line indented 6 columns in
/// a 4-column file still counts as level 2. That tolerance has no
/// correctness proof behind it, so it is a policy knob rather than a
/// hard-coded rule.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum IndentPolicy {
    /// Round uneven indentation up (ceiling division). A misaligned line
    /// stays inside the deepest block it could belong to.
    #[default]
    Tolerant,
    /// Round uneven indentation down (floor division, minimum level of
    /// the text actually reached). A misaligned line closes blocks it did
    /// not fully indent into. This layer never rejects input, so "strict"
    /// closes early instead of erroring.
    Strict,
}

/// Language profile: the token-kind configuration surface of the pipeline.
#[derive(Copy, Clone, Debug)]
pub struct LanguageProfile {
    /// The token kind that, outside brackets, marks the start of a nested
    /// block (`:` for Python). Retyped to `Indent` when a block opens.
    pub block_introducer: TokenKind,
    /// Statement-opening kinds that syntactically expect a block to
    /// follow: control keywords, function/class headers, decorators.
    /// Seeing one as the first significant token of a line arms the
    /// off-side engine.
    pub expects_block: TokenSet,
    /// Header kinds whose blocks may carry a documentation string.
    pub doc_headers: TokenSet,
    /// Soft keywords resolved with fixed two-token lookahead.
    pub lookahead_two: TokenSet,
    /// Soft keywords resolved with variable-length lookahead.
    pub lookahead_variable: TokenSet,
    /// Kinds that, as the last significant token of a line, signal that
    /// the logical statement continues on the next line.
    pub continuation: TokenSet,
    /// Uneven-indentation rounding policy.
    pub indent_policy: IndentPolicy,
}

impl LanguageProfile {
    /// The Python profile.
    pub const fn python() -> Self {
        LanguageProfile {
            block_introducer: TokenKind::Colon,
            expects_block: TokenSet::new()
                .with(TokenKind::KwIf)
                .with(TokenKind::KwElif)
                .with(TokenKind::KwElse)
                .with(TokenKind::KwFor)
                .with(TokenKind::KwWhile)
                .with(TokenKind::KwDef)
                .with(TokenKind::KwClass)
                .with(TokenKind::KwTry)
                .with(TokenKind::KwExcept)
                .with(TokenKind::KwFinally)
                .with(TokenKind::KwWith)
                .with(TokenKind::KwMatch)
                .with(TokenKind::KwCase)
                .with(TokenKind::At),
            doc_headers: TokenSet::new()
                .with(TokenKind::KwDef)
                .with(TokenKind::KwClass),
            lookahead_two: TokenSet::new()
                .with(TokenKind::KwPrint)
                .with(TokenKind::KwExec)
                .with(TokenKind::KwType),
            lookahead_variable: TokenSet::new()
                .with(TokenKind::KwMatch)
                .with(TokenKind::KwCase),
            continuation: TokenSet::single(TokenKind::Op),
            indent_policy: IndentPolicy::Tolerant,
        }
    }

    /// Same profile with a different indentation policy.
    #[must_use]
    pub const fn with_indent_policy(mut self, policy: IndentPolicy) -> Self {
        self.indent_policy = policy;
        self
    }

    /// Whether `kind` is a soft keyword under this profile, in either
    /// lookahead class.
    pub const fn is_soft_keyword(&self, kind: TokenKind) -> bool {
        self.lookahead_two.contains(kind) || self.lookahead_variable.contains(kind)
    }
}

impl Default for LanguageProfile {
    fn default() -> Self {
        LanguageProfile::python()
    }
}
