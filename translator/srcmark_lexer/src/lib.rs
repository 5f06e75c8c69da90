//! Raw, context-free lexer for the srcmark Python front end.
//!
//! Built on logos. This lexer recognizes characters and symbols only — it
//! has no notion of statement boundaries, nested blocks, or indentation.
//! Whitespace and newlines are emitted as first-class tokens (never
//! skipped) because the normalization pipeline downstream measures
//! indentation from them.
//!
//! # Architecture
//!
//! ```text
//! source → Lexer → Token stream → normalization pipeline → parser
//! ```
//!
//! String literals are split into two tokens, as the downstream markup
//! layer expects: a start token holding the opening quote run and an end
//! token holding everything else including the closing quotes. Double
//! quotes lex as `StringStart`/`StringEnd`, single quotes as
//! `CharStart`/`CharEnd`; triple-quoted literals may span lines.
//!
//! Unclassifiable bytes become `TokenKind::Error` tokens; the lexer never
//! fails. Rejection of malformed input is the downstream parser's job.

mod keywords;

use logos::Logos;
use srcmark_ir::{Pos, Token, TokenKind, TokenSource};

/// Raw token tags from logos, before position assembly and keyword lookup.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum RawScan {
    #[regex(r"[ \t]+")]
    Whitespace,

    #[regex(r"\r?\n")]
    Newline,

    #[regex(r"\\[ \t]*\r?\n")]
    LineContinuation,

    #[regex(r"#[^\n]*")]
    Comment,

    #[regex(r"[0-9][0-9_]*(\.[0-9_]*)?([eE][+-]?[0-9]+)?[jJ]?")]
    #[regex(r"0[xXoObB][0-9a-fA-F_]+")]
    Number,

    /// A whole string literal; payload is the opening quote run length.
    #[token("\"\"\"", scan_string)]
    #[token("'''", scan_string)]
    #[token("\"", scan_string)]
    #[token("'", scan_string)]
    Str(usize),

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("@")]
    At,

    #[token("**")]
    #[token("//")]
    #[token("<<")]
    #[token(">>")]
    #[token("->")]
    #[token(":=")]
    #[token("**=")]
    #[token("//=")]
    #[token("<<=")]
    #[token(">>=")]
    #[regex(r"[+\-*/%&|^~<>=!]=?")]
    Op,
}

/// Consume a string literal after its opening quote run.
///
/// Honors backslash escapes. A single-quoted literal that hits a newline
/// before its closing quote is left unterminated at the line end; a
/// triple-quoted literal runs to the closing triple or end of input.
/// Returns the opening quote run length (1 or 3).
fn scan_string(lex: &mut logos::Lexer<'_, RawScan>) -> usize {
    let quote = lex.slice().as_bytes()[0];
    let quote_len = lex.slice().len();
    let rem = lex.remainder().as_bytes();

    let mut i = 0;
    while i < rem.len() {
        match rem[i] {
            b'\\' => i += 2,
            b'\n' if quote_len == 1 => break,
            b if b == quote => {
                if quote_len == 1 {
                    i += 1;
                    break;
                }
                if rem.len() - i >= 3 && rem[i + 1] == quote && rem[i + 2] == quote {
                    i += 3;
                    break;
                }
                i += 1;
            }
            _ => i += 1,
        }
    }
    lex.bump(i.min(rem.len()));
    quote_len
}

/// Collapse CRLF sequences to a single LF.
///
/// The token-stream contract measures positions against the normalized
/// character stream; callers reading files should normalize before lexing.
pub fn normalize_line_endings(source: &str) -> std::borrow::Cow<'_, str> {
    if source.contains("\r\n") {
        std::borrow::Cow::Owned(source.replace("\r\n", "\n"))
    } else {
        std::borrow::Cow::Borrowed(source)
    }
}

/// The raw token source: logos tags assembled into [`Token`]s with 1-based
/// line/column positions.
///
/// Implements [`TokenSource`]; fused at end of input (keeps returning
/// `Eof`).
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, RawScan>,
    /// Second half of a split string literal, held until the next pull.
    pending: Option<Token>,
    line: u32,
    /// Byte offset where the current line starts.
    line_start: usize,
    eof: Option<Pos>,
}

impl<'src> Lexer<'src> {
    /// Create a lexer over normalized source (see
    /// [`normalize_line_endings`]).
    pub fn new(source: &'src str) -> Self {
        Lexer {
            inner: RawScan::lexer(source),
            pending: None,
            line: 1,
            line_start: 0,
            eof: None,
        }
    }

    /// Position of a byte offset on the current line.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "column offsets within one line fit u32"
    )]
    fn pos_at(&self, offset: usize) -> Pos {
        Pos::new(self.line, (offset - self.line_start + 1) as u32)
    }

    /// Advance line accounting past any newlines inside `slice`.
    fn advance_lines(&mut self, slice: &str, span_start: usize) {
        for (i, byte) in slice.bytes().enumerate() {
            if byte == b'\n' {
                self.line += 1;
                self.line_start = span_start + i + 1;
            }
        }
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "quote runs are 1 or 3 bytes"
    )]
    fn split_string(&mut self, quote_len: usize, slice: &str, pos: Pos) -> Token {
        let (start_text, end_text) = slice.split_at(quote_len);
        let (start_kind, end_kind) = if slice.as_bytes()[0] == b'\'' {
            (TokenKind::CharStart, TokenKind::CharEnd)
        } else {
            (TokenKind::StringStart, TokenKind::StringEnd)
        };
        let end_pos = Pos::new(pos.line, pos.column + quote_len as u32);
        self.pending = Some(Token::new(end_kind, end_text, end_pos));
        Token::new(start_kind, start_text, pos)
    }
}

impl TokenSource for Lexer<'_> {
    fn next_token(&mut self) -> Token {
        if let Some(token) = self.pending.take() {
            return token;
        }
        if let Some(pos) = self.eof {
            return Token::eof(pos);
        }

        let Some(scanned) = self.inner.next() else {
            let pos = self.pos_at(self.inner.source().len());
            self.eof = Some(pos);
            return Token::eof(pos);
        };

        let span = self.inner.span();
        let slice = self.inner.slice();
        let pos = self.pos_at(span.start);

        let token = match scanned {
            Err(()) => Token::new(TokenKind::Error, slice, pos),
            Ok(RawScan::Str(quote_len)) => self.split_string(quote_len, slice, pos),
            Ok(tag) => {
                let kind = match tag {
                    RawScan::Whitespace => TokenKind::Whitespace,
                    RawScan::Newline => TokenKind::Newline,
                    RawScan::LineContinuation => TokenKind::LineContinuation,
                    RawScan::Comment => TokenKind::Comment,
                    RawScan::Number => TokenKind::Number,
                    RawScan::Ident => keywords::lookup(slice).unwrap_or(TokenKind::Name),
                    RawScan::LParen => TokenKind::LParen,
                    RawScan::RParen => TokenKind::RParen,
                    RawScan::LBracket => TokenKind::LBracket,
                    RawScan::RBracket => TokenKind::RBracket,
                    RawScan::LBrace => TokenKind::LBrace,
                    RawScan::RBrace => TokenKind::RBrace,
                    RawScan::Colon => TokenKind::Colon,
                    RawScan::Comma => TokenKind::Comma,
                    RawScan::Dot => TokenKind::Dot,
                    RawScan::At => TokenKind::At,
                    RawScan::Op => TokenKind::Op,
                    // Str is split above
                    RawScan::Str(_) => TokenKind::Error,
                };
                Token::new(kind, slice, pos)
            }
        };

        self.advance_lines(slice, span.start);
        token
    }
}
