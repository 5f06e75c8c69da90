//! The closed token-kind vocabulary.

use std::fmt;

/// Token kinds for the srcmark translator, Python profile.
///
/// Discriminants are arranged in contiguous category ranges separated by
/// gaps for future expansion:
///
/// | Range | Category                          |
/// |-------|-----------------------------------|
/// | 0-9   | Trivia                            |
/// | 10-19 | Literals                          |
/// | 20-44 | Names and reserved keywords       |
/// | 45-49 | Soft keywords                     |
/// | 50-69 | Punctuation and operators         |
/// | 70-79 | Synthesized structural kinds      |
/// | 80-89 | Special                           |
///
/// This enum is the single source of truth for discriminant values;
/// [`TokenSet`](super::TokenSet) bitsets index by them.
///
/// # Invariant
///
/// All discriminants must be < 128 — `TokenSet` is a `u128` bitset.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // === Trivia (0-9) ===
    /// Run of horizontal whitespace (spaces/tabs).
    Whitespace = 0,
    /// Line feed. Carriage returns are collapsed upstream.
    Newline = 1,
    /// Backslash-newline explicit continuation.
    LineContinuation = 2,
    /// `#` comment through end of line.
    Comment = 3,

    // === Literals (10-19) ===
    Number = 10,
    /// Opening quote run of a string literal (`"`, `'''`, `"""`, …).
    StringStart = 11,
    /// Remainder of a string literal, including the closing quote run.
    /// May contain embedded newlines for triple-quoted literals.
    StringEnd = 12,
    /// Opening quote of a single-quoted literal.
    CharStart = 13,
    /// Remainder of a single-quoted literal.
    CharEnd = 14,

    // === Names and reserved keywords (20-44) ===
    Name = 20,
    KwIf = 21,
    KwElif = 22,
    KwElse = 23,
    KwFor = 24,
    KwWhile = 25,
    KwDef = 26,
    KwClass = 27,
    KwTry = 28,
    KwExcept = 29,
    KwFinally = 30,
    KwWith = 31,
    KwReturn = 32,
    KwPass = 33,
    KwImport = 34,

    // === Soft keywords (45-49) ===
    // Contextually a statement keyword or an ordinary name; the keyword
    // filter resolves them to either the keyword kind or `Name`.
    KwMatch = 45,
    KwCase = 46,
    KwType = 47,
    KwPrint = 48,
    KwExec = 49,

    // === Punctuation and operators (50-69) ===
    LParen = 50,
    RParen = 51,
    LBracket = 52,
    RBracket = 53,
    LBrace = 54,
    RBrace = 55,
    Colon = 56,
    Comma = 57,
    Dot = 58,
    At = 59,
    /// Any binary, comparison, assignment, or augmented operator; the
    /// token text distinguishes them. The pipeline only cares whether an
    /// operator ended a line.
    Op = 60,

    // === Synthesized structural kinds (70-79) ===
    /// Block start. Retyped from the block-introducer token in place, so
    /// it keeps that token's text and position.
    Indent = 70,
    /// Block end. Pure synthesis; no source-character counterpart.
    Dedent = 71,
    /// Statement terminator. Pure synthesis; zero width.
    Terminate = 72,
    /// Promoted [`StringStart`](Self::StringStart) of a documentation
    /// string.
    DocstringStart = 73,
    /// Promoted [`StringEnd`](Self::StringEnd) of a documentation string.
    DocstringEnd = 74,

    // === Special (80-89) ===
    /// Unclassifiable byte. The pipeline passes these through untouched;
    /// rejection is the downstream parser's job.
    Error = 80,
    Eof = 81,
}

impl TokenKind {
    /// Highest discriminant in use. Bitset sizing sanity-checks against it.
    pub const MAX_DISCRIMINANT: u8 = TokenKind::Eof as u8;

    /// Discriminant index for bitset membership.
    #[inline]
    pub const fn discriminant_index(self) -> u8 {
        self as u8
    }

    /// Whitespace, newlines, continuations, and comments — tokens that
    /// never carry statement content.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace
                | TokenKind::Newline
                | TokenKind::LineContinuation
                | TokenKind::Comment
        )
    }

    /// Tokens created from nothing by the pipeline. Retagged tokens
    /// (`Indent`, `Docstring*`) are not synthetic — they preserve the
    /// text and position of the raw token they classify.
    #[inline]
    pub const fn is_synthetic(self) -> bool {
        matches!(self, TokenKind::Dedent | TokenKind::Terminate)
    }

    /// Opening grouping symbol.
    #[inline]
    pub const fn is_open_bracket(self) -> bool {
        matches!(
            self,
            TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace
        )
    }

    /// Closing grouping symbol.
    #[inline]
    pub const fn is_close_bracket(self) -> bool {
        matches!(
            self,
            TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace
        )
    }
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Whitespace => "Whitespace",
            TokenKind::Newline => "Newline",
            TokenKind::LineContinuation => "LineContinuation",
            TokenKind::Comment => "Comment",
            TokenKind::Number => "Number",
            TokenKind::StringStart => "StringStart",
            TokenKind::StringEnd => "StringEnd",
            TokenKind::CharStart => "CharStart",
            TokenKind::CharEnd => "CharEnd",
            TokenKind::Name => "Name",
            TokenKind::KwIf => "KwIf",
            TokenKind::KwElif => "KwElif",
            TokenKind::KwElse => "KwElse",
            TokenKind::KwFor => "KwFor",
            TokenKind::KwWhile => "KwWhile",
            TokenKind::KwDef => "KwDef",
            TokenKind::KwClass => "KwClass",
            TokenKind::KwTry => "KwTry",
            TokenKind::KwExcept => "KwExcept",
            TokenKind::KwFinally => "KwFinally",
            TokenKind::KwWith => "KwWith",
            TokenKind::KwReturn => "KwReturn",
            TokenKind::KwPass => "KwPass",
            TokenKind::KwImport => "KwImport",
            TokenKind::KwMatch => "KwMatch",
            TokenKind::KwCase => "KwCase",
            TokenKind::KwType => "KwType",
            TokenKind::KwPrint => "KwPrint",
            TokenKind::KwExec => "KwExec",
            TokenKind::LParen => "LParen",
            TokenKind::RParen => "RParen",
            TokenKind::LBracket => "LBracket",
            TokenKind::RBracket => "RBracket",
            TokenKind::LBrace => "LBrace",
            TokenKind::RBrace => "RBrace",
            TokenKind::Colon => "Colon",
            TokenKind::Comma => "Comma",
            TokenKind::Dot => "Dot",
            TokenKind::At => "At",
            TokenKind::Op => "Op",
            TokenKind::Indent => "Indent",
            TokenKind::Dedent => "Dedent",
            TokenKind::Terminate => "Terminate",
            TokenKind::DocstringStart => "DocstringStart",
            TokenKind::DocstringEnd => "DocstringEnd",
            TokenKind::Error => "Error",
            TokenKind::Eof => "Eof",
        };
        f.write_str(name)
    }
}
