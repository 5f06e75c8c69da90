use srcmark_ir::{LanguageProfile, Token, TokenKind, TokenSource};

use crate::brackets::BracketTracker;
use crate::buffer::PendingBuffer;

/// Resolves soft keywords to either their keyword kind or `Name`.
///
/// The raw lexer tags soft keywords unconditionally; whether one really
/// acts as a keyword depends on what follows it. This stage looks ahead
/// a bounded distance, retypes the candidate in place, and replays the
/// consumed lookahead verbatim so later stages see an untouched stream.
///
/// Two shapes of lookahead exist, selected by the profile:
///
/// * fixed two-token, for statement keywords that a call shape demotes
///   (`print(x)` is a call, `print x` is a statement);
/// * variable, for match-style keywords that need a trailing
///   introducer at the end of their line to count as keywords.
///
/// Inside brackets a soft keyword can never head a statement, so it is
/// rewritten to `Name` without any lookahead. Running out of input
/// before the pattern resolves also falls back to `Name`.
pub struct KeywordFilter<S> {
    upstream: S,
    profile: LanguageProfile,
    pending: PendingBuffer,
    brackets: BracketTracker,
}

impl<S: TokenSource> KeywordFilter<S> {
    pub fn new(upstream: S, profile: LanguageProfile) -> Self {
        KeywordFilter {
            upstream,
            profile,
            pending: PendingBuffer::new(),
            brackets: BracketTracker::default(),
        }
    }

    /// Pulls one lookahead token into the pending buffer and reports
    /// its kind. Bracket depth is tracked at pull time, and soft
    /// keywords encountered mid-lookahead are demoted outright: a soft
    /// keyword can only act as a keyword at the head of a statement,
    /// and everything pulled before a line break is mid-line. Once a
    /// top-level line break has been pulled the demotion stops, tokens
    /// after it start a fresh statement and are resolved on delivery.
    fn pull(&mut self, line_crossed: &mut bool) -> TokenKind {
        let mut token = self.upstream.next_token();
        if !*line_crossed && self.profile.is_soft_keyword(token.kind) {
            token.kind = TokenKind::Name;
        }
        let kind = token.kind;
        self.brackets.observe(kind);
        if kind == TokenKind::Newline && self.brackets.is_top_level() {
            *line_crossed = true;
        }
        self.pending.push_back(token);
        kind
    }

    fn resolve_two_token(&mut self, token: &mut Token) {
        if !self.brackets.is_top_level() {
            token.kind = TokenKind::Name;
            return;
        }
        let mut line_crossed = false;
        let first = self.pull(&mut line_crossed);
        let second = if first == TokenKind::Eof {
            TokenKind::Eof
        } else {
            self.pull(&mut line_crossed)
        };

        let statement_shaped = match token.kind {
            // `type` heads a statement only before another plain name
            TokenKind::KwType => first == TokenKind::Whitespace && second == TokenKind::Name,
            // statement form is keyword, space, anything but a call paren
            _ => first == TokenKind::Whitespace && second != TokenKind::LParen,
        };
        if !statement_shaped {
            tracing::trace!(token = ?token.kind, "soft keyword demoted to name");
            token.kind = TokenKind::Name;
        }
    }

    /// Scans to the end of the candidate's line. The candidate keeps
    /// its keyword kind only if the last substantive token before the
    /// line break is the block introducer at the candidate's bracket
    /// depth.
    fn resolve_variable(&mut self, token: &mut Token) {
        if !self.brackets.is_top_level() {
            token.kind = TokenKind::Name;
            return;
        }
        let mut last_substantive = TokenKind::Eof;
        let mut depth = BracketTracker::default();
        let mut line_crossed = false;
        loop {
            let kind = self.pull(&mut line_crossed);
            match kind {
                TokenKind::Eof => {
                    // ran out of input before the line resolved
                    token.kind = TokenKind::Name;
                    return;
                }
                // a line break inside brackets does not end the line
                TokenKind::Newline if depth.is_top_level() => break,
                k if k.is_trivia() => {}
                k => {
                    depth.observe(k);
                    last_substantive = k;
                }
            }
        }
        // the introducer can only be last at depth zero, a bracketed
        // colon is always followed by the closing bracket
        if last_substantive != self.profile.block_introducer {
            tracing::trace!(token = ?token.kind, "soft keyword demoted to name");
            token.kind = TokenKind::Name;
        }
    }
}

impl<S: TokenSource> TokenSource for KeywordFilter<S> {
    fn next_token(&mut self) -> Token {
        if let Some(mut token) = self.pending.pop_front() {
            // a soft keyword survives lookahead undemoted only when the
            // lookahead crossed onto its line, leaving it the last
            // buffered token; it heads that line, resolve it now
            if self.profile.lookahead_two.contains(token.kind) {
                self.resolve_two_token(&mut token);
            } else if self.profile.lookahead_variable.contains(token.kind) {
                self.resolve_variable(&mut token);
            }
            return token;
        }
        let mut token = self.upstream.next_token();
        if self.profile.lookahead_two.contains(token.kind) {
            self.resolve_two_token(&mut token);
        } else if self.profile.lookahead_variable.contains(token.kind) {
            self.resolve_variable(&mut token);
        } else {
            self.brackets.observe(token.kind);
        }
        token
    }
}
