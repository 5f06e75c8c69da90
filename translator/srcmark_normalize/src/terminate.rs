use srcmark_ir::{LanguageProfile, Pos, Token, TokenKind, TokenSource};

use crate::brackets::BracketTracker;
use crate::buffer::PendingBuffer;

/// Synthesizes a `Terminate` token at every statement boundary.
///
/// A line break ends a statement unless the break is nested inside
/// brackets, the line carried no significant content, a terminator was
/// already placed (at a trailing comment), the statement just opened a
/// block, or the line ends in a continuation operator. End of input
/// terminates a trailing statement the same way.
///
/// Trailing whitespace and line continuations are held while the
/// decision is pending, so an inserted terminator lands directly after
/// the statement's last significant token:
///
/// ```text
/// x = 1···\n   becomes   x = 1 Terminate ··· \n
/// ```
pub struct TerminateFilter<S> {
    upstream: S,
    profile: LanguageProfile,
    pending: PendingBuffer,
    /// Trailing trivia held until the statement-end decision is made.
    held: Vec<Token>,
    brackets: BracketTracker,
    /// Kind of the last significant token handed downstream.
    last_significant: Option<TokenKind>,
    /// Whether the current line has produced significant content.
    line_has_content: bool,
}

impl<S: TokenSource> TerminateFilter<S> {
    pub fn new(upstream: S, profile: LanguageProfile) -> Self {
        TerminateFilter {
            upstream,
            profile,
            pending: PendingBuffer::new(),
            held: Vec::new(),
            brackets: BracketTracker::default(),
            last_significant: None,
            line_has_content: false,
        }
    }

    fn should_terminate(&self) -> bool {
        if !self.brackets.is_top_level() || !self.line_has_content {
            return false;
        }
        match self.last_significant {
            Some(TokenKind::Terminate) => false,
            Some(kind) if kind == self.profile.block_introducer => false,
            Some(kind) if self.profile.continuation.contains(kind) => false,
            Some(_) => true,
            None => false,
        }
    }

    fn flush_held(&mut self) {
        self.pending.extend(self.held.drain(..));
    }

    /// Pulls from upstream until at least one token is deliverable.
    fn fill(&mut self) {
        while self.pending.is_empty() {
            let token = self.upstream.next_token();
            match token.kind {
                TokenKind::Whitespace | TokenKind::LineContinuation => {
                    self.held.push(token);
                }
                TokenKind::Newline | TokenKind::Comment if self.should_terminate() => {
                    tracing::trace!(line = token.pos.line, "statement terminated");
                    self.pending
                        .push_back(Token::synthesized(TokenKind::Terminate, token.pos.at_column_one()));
                    self.flush_held();
                    self.pending.push_back(token);
                }
                TokenKind::Eof => {
                    if self.should_terminate() {
                        tracing::trace!(line = token.pos.line, "trailing statement terminated");
                        self.pending.push_back(Token::synthesized(
                            TokenKind::Terminate,
                            token.pos.at_column_one(),
                        ));
                    }
                    self.flush_held();
                    self.pending.push_back(token);
                }
                _ => {
                    self.flush_held();
                    self.pending.push_back(token);
                }
            }
        }
    }

    fn record(&mut self, token: &Token) {
        self.brackets.observe(token.kind);
        match token.kind {
            TokenKind::Newline => self.line_has_content = false,
            TokenKind::Eof => {}
            kind if kind.is_trivia() => {}
            kind => {
                self.last_significant = Some(kind);
                self.line_has_content = true;
            }
        }
    }
}

impl<S: TokenSource> TokenSource for TerminateFilter<S> {
    fn next_token(&mut self) -> Token {
        self.fill();
        // fill never leaves the buffer empty
        let token = match self.pending.pop_front() {
            Some(token) => token,
            None => Token::eof(Pos::DUMMY),
        };
        self.record(&token);
        token
    }
}
